//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – step size, run length and physical constants
//! - [`BodyConfig`]       – initial state and display attributes of each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The three-body scenario shipped in `scenarios/three_body.yaml`:
//!
//! ```yaml
//! parameters:
//!   dt: 0.02                # fixed step size
//!   G: 1.0                  # gravitational constant
//!   steps: 500              # steps to run
//!
//! bodies:
//!   - x: [0.0, 0.0]
//!     v: [1.0, 0.0]
//!     m: 2.0
//!     color: red
//!   - x: [2.0, 0.0]
//!     v: [0.0, 1.0]
//!     m: 2.0
//!     color: green
//!   - x: [0.0, 2.0]
//!     v: [-1.0, 0.0]
//!     m: 2.0
//!     color: blue
//! ```
//!
//! Every parameter has a default, so `parameters` may be left out entirely.
//! The engine maps this into its runtime [`Scenario`](crate::Scenario),
//! where the values are validated.

use serde::Deserialize;

use crate::simulation::params::Parameters;

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct ParametersConfig {
    pub dt: f64,                   // time step size
    pub G: f64,                    // gravitational constant
    pub eps2: f64,                 // softening, 0 means the plain inverse-square law
    pub steps: u64,                // steps to run
    pub steps_per_frame: u32,      // steps per frame tick
    pub escape_bound: Option<f64>, // warn when a body's |x| or |v| exceeds this
}

impl Default for ParametersConfig {
    fn default() -> Self {
        let p = Parameters::default();
        Self {
            dt: p.dt,
            G: p.G,
            eps2: p.eps2,
            steps: p.steps,
            steps_per_frame: p.steps_per_frame,
            escape_bound: p.escape_bound,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    pub x: [f64; 2], // Initial position in simulation units
    pub v: [f64; 2], // Initial velocity in simulation units per time unit
    pub m: f64,      // Mass of the body
    #[serde(default = "default_radius")]
    pub radius: f64, // Display radius, not used by the physics
    #[serde(default)]
    pub color: Option<String>, // Display color, not used by the physics
}

fn default_radius() -> f64 {
    0.1
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    pub bodies: Vec<BodyConfig>, // Bodies that define the initial state of the system
}
