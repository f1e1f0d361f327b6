//! Reusable initial configurations for tests, benches, and demos.

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::nbody::Body;

/// A Sun/Earth-like two-body system: a unit solar mass at the origin and a
/// light body at 1 AU with the circular orbital speed `sqrt(G * M / r) = 2*pi`
/// AU/yr, perpendicular to the separation.
pub fn sun_earth() -> Vec<Body> {
    vec![
        Body::at_rest(0, 1.0, 0.0, 0.0),
        Body::new(1, 3.0e-6, 1.0, 0.0, 0.0, 2.0 * PI),
    ]
}

/// A `side` x `side` grid of resting bodies of equal `mass`, spaced `spacing`
/// AU apart, anchored at the origin. Ids are row-major indices.
pub fn uniform_grid(side: usize, spacing: f64, mass: f64) -> Vec<Body> {
    let mut bodies = Vec::with_capacity(side * side);
    for row in 0..side {
        for col in 0..side {
            bodies.push(Body::at_rest(
                (row * side + col) as u64,
                mass,
                col as f64 * spacing,
                row as f64 * spacing,
            ));
        }
    }
    bodies
}

/// A seeded disc of `n` resting bodies with uniform areal density and masses
/// drawn from `0.1..1.0` solar masses. Deterministic for a given seed.
pub fn random_cloud(n: usize, radius: f64, seed: u64) -> Vec<Body> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            // sqrt on the radial draw keeps the areal density uniform
            let r = radius * rng.random_range(0.0..1.0f64).sqrt();
            let angle = rng.random_range(0.0..2.0 * PI);
            let mass = rng.random_range(0.1..1.0);
            Body::at_rest(i as u64, mass, r * angle.cos(), r * angle.sin())
        })
        .collect()
}
