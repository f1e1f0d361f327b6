use std::fmt;
use std::error::Error;

/// Represents errors that can occur while configuring or running an n-body simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum NBodyError {
    /// Indicates a non-positive simulation time step.
    InvalidTimeStep,
    /// Indicates a negative total simulation duration.
    InvalidDuration,
    /// Indicates an attempt to build a bounding box or quadtree from an empty body collection.
    EmptyBodySet,
    /// Indicates an attempt to insert a body outside the quadtree's root box.
    OutOfBounds { x: f64, y: f64 },
    /// Indicates an attempt to remove a body that is not present in the quadtree.
    BodyNotFound,
    /// Indicates that quadrant splitting exceeded the depth cap, which happens when
    /// two bodies occupy the same (or nearly the same) position.
    MaxDepthExceeded { x: f64, y: f64 },
}

impl fmt::Display for NBodyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NBodyError::InvalidTimeStep => write!(f, "Time step must be positive"),
            NBodyError::InvalidDuration => write!(f, "Total simulation time must be non-negative"),
            NBodyError::EmptyBodySet => write!(f, "Cannot compute bounds of an empty body collection"),
            NBodyError::OutOfBounds { x, y } => {
                write!(f, "Body at ({}, {}) lies outside the tree's root box", x, y)
            }
            NBodyError::BodyNotFound => write!(f, "Body not found in the tree"),
            NBodyError::MaxDepthExceeded { x, y } => {
                write!(f, "Maximum tree depth exceeded near ({}, {}); bodies are too close together", x, y)
            }
        }
    }
}

impl Error for NBodyError {}
