mod body;
mod bounds;
mod gadget;
mod barnes_hut;
mod simulation;
mod scenario;

pub use body::*;
pub use bounds::*;
pub use gadget::*;
pub use barnes_hut::*;
pub use simulation::*;
pub use scenario::*;

#[cfg(test)]
mod bounds_tests;
#[cfg(test)]
mod barnes_hut_tests;
