pub mod simulation;
pub mod configuration;

pub use simulation::states::{Appearance, Body, BodySpec, System, NVec2};
pub use simulation::error::{ForceError, SimError};
pub use simulation::forces::{accumulate_forces, ForceLaw, NewtonianGravity};
pub use simulation::integrator::{integrate, step};
pub use simulation::driver::{run, Run, Snapshot};
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ParametersConfig, BodyConfig, ScenarioConfig};
