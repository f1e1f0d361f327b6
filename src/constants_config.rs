// src/constants_config.rs
//
// Units follow the astronomical convention of the simulation:
// distance in AU, mass in solar masses, time in years, velocity in AU/yr.

use std::f64::consts::PI;

/// Maximum number of quadrant splits before an insertion is treated as degenerate input.
pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, Copy)]
pub struct SimConstants {
    /// Gravitational constant in AU^3 / (M_sun * yr^2).
    pub g: f64,
    /// Barnes-Hut opening angle.
    pub theta: f64,
    /// Depth cap for quadtree insertion.
    pub max_depth: usize,
}

impl Default for SimConstants {
    fn default() -> Self {
        Self {
            g: 4.0 * PI * PI,
            theta: 0.7,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl SimConstants {
    pub fn new(g: Option<f64>, theta: Option<f64>, max_depth: Option<usize>) -> Self {
        let default = SimConstants::default();
        Self {
            g: g.unwrap_or(default.g),
            theta: theta.unwrap_or(default.theta),
            max_depth: max_depth.unwrap_or(default.max_depth),
        }
    }
}
