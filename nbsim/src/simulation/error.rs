//! Error types for building and stepping a simulation
//!
//! - [`ForceError`] is raised by a single pairwise force evaluation
//! - [`SimError`] is what the system, integrator and driver surface,
//!   carrying the body indices and step index that failed

use thiserror::Error;

/// Failure of one pairwise force evaluation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForceError {
    /// Both bodies sit at the same point, so the direction is undefined
    #[error("bodies are coincident at ({x}, {y})")]
    Coincident { x: f64, y: f64 },

    /// The separation is nonzero but too small (or too large) to produce a finite force
    #[error("force is not finite at separation {separation:e}")]
    NonFinite { separation: f64 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("body {index}: mass must be positive and finite, got {mass}")]
    InvalidMass { index: usize, mass: f64 },

    #[error("body {index}: {field} must be finite")]
    NonFiniteState { index: usize, field: &'static str },

    #[error("bodies {first} and {second} at step {step}: {source}")]
    Degenerate {
        first: usize,
        second: usize,
        step: u64,
        #[source]
        source: ForceError,
    },

    #[error("time step must be finite, got {0}")]
    InvalidTimeStep(f64),

    #[error("parameter `{name}` is out of range: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}
