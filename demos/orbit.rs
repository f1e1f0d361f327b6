// Runs the Sun/Earth system through both drivers and prints how far the
// Barnes-Hut trajectory drifts from the exact one.

use rs_nbody::nbody::{sun_earth, FastSimulation, Simulation};
use rs_nbody::utils::NBodyError;

fn main() -> Result<(), NBodyError> {
    env_logger::init();

    let total_time = 1.0; // years
    let dt = 0.001;

    let exact = Simulation::new(sun_earth(), total_time, dt)?;
    let fast = FastSimulation::new(sun_earth(), total_time, dt)?;

    let exact_run = exact.run();
    let fast_run = fast.run()?;

    let earth_exact = &exact_run.last().unwrap()[1];
    let earth_fast = &fast_run.last().unwrap()[1];

    println!("After {} steps of {} yr:", exact.timesteps, dt);
    println!(
        "  exact driver:      Earth at ({:.6}, {:.6}) AU",
        earth_exact.x, earth_exact.y
    );
    println!(
        "  barnes-hut driver: Earth at ({:.6}, {:.6}) AU",
        earth_fast.x, earth_fast.y
    );
    println!(
        "  drift: {:.3e} AU",
        earth_exact.square_dist(earth_fast).sqrt()
    );

    if let Some(closest) = exact.closest_distance() {
        println!("  closest Sun-Earth approach: {:.6} AU", closest);
    }

    Ok(())
}
