//! Cursor trail particles.

use crate::config::TrailConfig;

/// A particle to spawn at a viewport position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    /// Milliseconds until the host removes the particle.
    pub lifetime_ms: u32,
}

/// Throttles particle spawning by pointer travel and live count.
#[derive(Debug, Clone)]
pub struct CursorTrail {
    config: TrailConfig,
    last_spawn: Option<(f64, f64)>,
    live: usize,
}

impl CursorTrail {
    pub fn new(config: TrailConfig) -> Self {
        Self {
            config,
            last_spawn: None,
            live: 0,
        }
    }

    /// Pointer moved; returns a particle to spawn, if any.
    pub fn on_move(&mut self, x: f64, y: f64) -> Option<Particle> {
        if !self.config.enabled || self.live >= self.config.max_particles {
            return None;
        }
        if let Some((last_x, last_y)) = self.last_spawn {
            if (x - last_x).hypot(y - last_y) < self.config.min_distance_px {
                return None;
            }
        }

        self.last_spawn = Some((x, y));
        self.live += 1;
        Some(Particle {
            x,
            y,
            lifetime_ms: self.config.lifetime_ms,
        })
    }

    /// A particle's lifetime ended and the host removed it.
    pub fn on_expired(&mut self) {
        self.live = self.live.saturating_sub(1);
    }

    pub fn live(&self) -> usize {
        self.live
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawns_only_after_enough_travel() {
        let mut trail = CursorTrail::new(TrailConfig::default());
        assert!(trail.on_move(0.0, 0.0).is_some());
        assert!(trail.on_move(5.0, 5.0).is_none());
        assert!(trail.on_move(12.0, 0.0).is_some());
        assert_eq!(trail.live(), 2);
    }

    #[test]
    fn caps_live_particles() {
        let config = TrailConfig {
            max_particles: 2,
            ..TrailConfig::default()
        };
        let mut trail = CursorTrail::new(config);
        assert!(trail.on_move(0.0, 0.0).is_some());
        assert!(trail.on_move(100.0, 0.0).is_some());
        assert!(trail.on_move(200.0, 0.0).is_none());

        trail.on_expired();
        assert!(trail.on_move(300.0, 0.0).is_some());
    }

    #[test]
    fn disabled_trail_never_spawns() {
        let config = TrailConfig {
            enabled: false,
            ..TrailConfig::default()
        };
        let mut trail = CursorTrail::new(config);
        assert!(trail.on_move(0.0, 0.0).is_none());
    }

    #[test]
    fn expiry_never_underflows() {
        let mut trail = CursorTrail::new(TrailConfig::default());
        trail.on_expired();
        assert_eq!(trail.live(), 0);
    }
}
