use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::nbody::{opening_criterion, source_bodies, Body, Gadget};
use crate::utils::{NBodyError, SimConstants};

/// A time series of body-array snapshots. Entry `t` holds the state after `t`
/// steps; within a snapshot, index `i` always refers to the same logical body.
pub type Snapshots = Vec<Vec<Body>>;

/// Exact n-body simulation driver, evaluating every pairwise force (O(n^2)
/// per step). Serves as the accuracy baseline for [`FastSimulation`].
///
/// # Examples
///
/// ```
/// use rs_nbody::nbody::{sun_earth, Simulation};
///
/// let sim = Simulation::new(sun_earth(), 1.0, 0.001).unwrap();
/// let snapshots = sim.run();
/// assert_eq!(snapshots.len(), sim.timesteps + 1);
/// ```
pub struct Simulation {
    pub bodies: Vec<Body>,
    pub dt: f64,
    pub timesteps: usize,
    pub constants: SimConstants,
}

impl Simulation {
    /// Creates a simulation of `bodies` over `total_time`, advancing `dt` per
    /// step, with default constants. The step count is `total_time / dt`
    /// truncated toward zero.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTimeStep` for `dt <= 0` and `InvalidDuration` for a
    /// negative `total_time`, before any simulation work begins.
    pub fn new(bodies: Vec<Body>, total_time: f64, dt: f64) -> Result<Self, NBodyError> {
        Simulation::with_constants(bodies, total_time, dt, SimConstants::default())
    }

    pub fn with_constants(
        bodies: Vec<Body>,
        total_time: f64,
        dt: f64,
        constants: SimConstants,
    ) -> Result<Self, NBodyError> {
        if dt <= 0.0 {
            return Err(NBodyError::InvalidTimeStep);
        }
        if total_time < 0.0 {
            return Err(NBodyError::InvalidDuration);
        }
        Ok(Simulation {
            timesteps: (total_time / dt) as usize,
            bodies,
            dt,
            constants,
        })
    }

    /// Runs the simulation, producing `timesteps + 1` snapshots. Snapshot 0 is
    /// the initial state; snapshot `t + 1` applies [`Body::next`] to every body
    /// of snapshot `t`, with the whole of snapshot `t` as the source array.
    pub fn run(&self) -> Snapshots {
        let mut snapshots = Vec::with_capacity(self.timesteps + 1);
        snapshots.push(self.bodies.clone());
        for t in 0..self.timesteps {
            let prev = &snapshots[t];
            let next = map_bodies(prev, |p| p.next(prev, self.dt, &self.constants));
            snapshots.push(next);
        }
        debug!(
            "exact run complete: {} bodies, {} steps",
            self.bodies.len(),
            self.timesteps
        );
        snapshots
    }

    /// Minimum pairwise distance over the whole run, or `None` for fewer than
    /// two bodies.
    pub fn closest_distance(&self) -> Option<f64> {
        closest_distance(&self.run())
    }
}

/// Tree-accelerated simulation driver. Each step rebuilds a fresh [`Gadget`]
/// from the current snapshot and feeds every body the Barnes-Hut source list
/// instead of the full snapshot, for O(n log n) work per step.
pub struct FastSimulation {
    pub sim: Simulation,
}

impl FastSimulation {
    pub fn new(bodies: Vec<Body>, total_time: f64, dt: f64) -> Result<Self, NBodyError> {
        Ok(FastSimulation {
            sim: Simulation::new(bodies, total_time, dt)?,
        })
    }

    pub fn with_constants(
        bodies: Vec<Body>,
        total_time: f64,
        dt: f64,
        constants: SimConstants,
    ) -> Result<Self, NBodyError> {
        Ok(FastSimulation {
            sim: Simulation::with_constants(bodies, total_time, dt, constants)?,
        })
    }

    pub fn timesteps(&self) -> usize {
        self.sim.timesteps
    }

    /// Runs the simulation under the same snapshot contract as
    /// [`Simulation::run`]; both drivers derive the step count identically so
    /// their outputs are directly comparable.
    ///
    /// # Errors
    ///
    /// Propagates tree-construction failures (`MaxDepthExceeded` for bodies
    /// driven onto the same position). An empty body set runs without building
    /// a tree and never errors.
    pub fn run(&self) -> Result<Snapshots, NBodyError> {
        let sim = &self.sim;
        let mut snapshots = Vec::with_capacity(sim.timesteps + 1);
        snapshots.push(sim.bodies.clone());
        for t in 0..sim.timesteps {
            let prev = &snapshots[t];
            let next = if prev.is_empty() {
                Vec::new()
            } else {
                let gadget = Gadget::from_bodies_with_depth(prev, sim.constants.max_depth)?;
                let should_open = opening_criterion(sim.constants.theta);
                map_bodies(prev, |p| {
                    let sources = source_bodies(&gadget, p, &should_open);
                    p.next(&sources, sim.dt, &sim.constants)
                })
            };
            snapshots.push(next);
        }
        debug!(
            "barnes-hut run complete: {} bodies, {} steps, theta {}",
            sim.bodies.len(),
            sim.timesteps,
            sim.constants.theta
        );
        Ok(snapshots)
    }

    /// Minimum pairwise distance over the whole run, or `None` for fewer than
    /// two bodies.
    pub fn closest_distance(&self) -> Result<Option<f64>, NBodyError> {
        Ok(closest_distance(&self.run()?))
    }
}

/// Minimum pairwise distance across a snapshot series. Returns `None` when the
/// series has fewer than two bodies, for which no pairwise distance exists.
pub fn closest_distance(snapshots: &[Vec<Body>]) -> Option<f64> {
    if snapshots.first().map_or(0, Vec::len) < 2 {
        return None;
    }
    let mut min_sq = f64::INFINITY;
    for snapshot in snapshots {
        for i in 0..snapshot.len() {
            for j in (i + 1)..snapshot.len() {
                let sq = snapshot[i].square_dist(&snapshot[j]);
                if sq < min_sq {
                    min_sq = sq;
                }
            }
        }
    }
    Some(min_sq.sqrt())
}

#[cfg(feature = "parallel")]
fn map_bodies<F>(prev: &[Body], f: F) -> Vec<Body>
where
    F: Fn(&Body) -> Body + Sync + Send,
{
    // Each body reads only the frozen prior snapshot, so the per-body loop
    // forks and joins within the step without changing results.
    prev.par_iter().map(f).collect()
}

#[cfg(not(feature = "parallel"))]
fn map_bodies<F>(prev: &[Body], f: F) -> Vec<Body>
where
    F: Fn(&Body) -> Body,
{
    prev.iter().map(f).collect()
}
