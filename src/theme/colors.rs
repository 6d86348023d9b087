//! Colors the components set inline.
//!
//! Everything else is styled through the custom properties in
//! [`super::GLOBAL_STYLES`].

/// Primary brand color, also the typing cursor.
pub const PRIMARY: &str = "#667eea";

/// Hero background while the easter egg is active.
pub const RAINBOW_GRADIENT: &str =
    "linear-gradient(45deg, #ff0000, #ff7700, #ffff00, #00ff00, #0077ff, #4400ff, #8800ff)";

/// Animation cycling [`RAINBOW_GRADIENT`]; keyframes live in the stylesheet.
pub const RAINBOW_ANIMATION: &str = "rainbow 2s ease infinite";
