//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime `Scenario`
//! containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - the active force law
//!
//! The caller owns the scenario and drives it one step, one frame or one
//! whole run at a time

use log::info;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::driver::{self, Run};
use crate::simulation::error::SimError;
use crate::simulation::forces::{ForceLaw, NewtonianGravity};
use crate::simulation::integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Appearance, BodySpec, System};

/// Runtime bundle: parameters, current system state and the force law
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: Box<dyn ForceLaw>,
}

impl Scenario {
    /// Bundle an already-built system with Newtonian gravity from `parameters`
    pub fn new(parameters: Parameters, system: System) -> Result<Self, SimError> {
        parameters.validate()?;
        let forces = NewtonianGravity::new(parameters.G).with_softening(parameters.eps2);
        Ok(Self {
            parameters,
            system,
            forces: Box::new(forces),
        })
    }

    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Bodies: map `BodyConfig` -> `BodySpec`, validated by `System::new`
        let specs = cfg.bodies.into_iter().map(|bc: BodyConfig| {
            BodySpec::new(bc.x, bc.v, bc.m).with_appearance(Appearance {
                color: bc.color,
                radius: bc.radius,
            })
        });
        let system = System::new(specs)?;

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            G: p_cfg.G,
            eps2: p_cfg.eps2,
            steps: p_cfg.steps,
            steps_per_frame: p_cfg.steps_per_frame,
            escape_bound: p_cfg.escape_bound,
        };

        let scenario = Self::new(parameters, system)?;
        info!(
            "scenario built: {} bodies, dt = {}, G = {}, eps2 = {}",
            scenario.system.len(),
            scenario.parameters.dt,
            scenario.parameters.G,
            scenario.parameters.eps2
        );
        Ok(scenario)
    }

    /// Advance by one step of `parameters.dt`
    pub fn step(&mut self) -> Result<(), SimError> {
        integrator::step(&mut self.system, &*self.forces, self.parameters.dt)
    }

    /// Advance by one frame tick, `parameters.steps_per_frame` steps
    pub fn advance_frame(&mut self) -> Result<(), SimError> {
        let n = u64::from(self.parameters.steps_per_frame);
        for snapshot in self.run(n) {
            snapshot?;
        }
        Ok(())
    }

    /// Lazily run `n_steps` steps, see [`driver::run`]
    pub fn run(&mut self, n_steps: u64) -> Run<'_, dyn ForceLaw> {
        driver::run(&mut self.system, &*self.forces, self.parameters.dt, n_steps)
            .warn_beyond(self.parameters.escape_bound)
    }

    /// Kinetic plus potential energy under the scenario's force law
    pub fn total_energy(&self) -> f64 {
        self.system.kinetic_energy() + self.forces.potential_energy(&self.system)
    }
}
