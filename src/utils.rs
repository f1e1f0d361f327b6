// src/utils.rs
//
// Facade over the crate's configuration and error types.

pub use crate::constants_config::*;
pub use crate::errors::*;
