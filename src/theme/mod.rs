//! Visual theme for the portfolio.

mod colors;
mod styles;

pub use colors::*;
pub use styles::GLOBAL_STYLES;
