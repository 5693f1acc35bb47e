//! Fixed-step time integrator for the N-body system
//!
//! Semi-implicit (symplectic) Euler driven by a [`ForceLaw`]:
//! forces from the pre-step positions, then every velocity, then every
//! position using the new velocity

use log::debug;

use super::error::SimError;
use super::forces::{accumulate_forces, ForceLaw};
use super::states::{NVec2, System};

/// Advance the system by one step of length `dt`
///
/// On error nothing in `sys` has been modified. A zero `dt` still counts as a
/// step and records the unchanged positions; a negative `dt` runs time backwards.
pub fn step<F>(sys: &mut System, law: &F, dt: f64) -> Result<(), SimError>
where
    F: ForceLaw + ?Sized,
{
    if !dt.is_finite() {
        return Err(SimError::InvalidTimeStep(dt));
    }

    // Forces from pre-step positions, into a separate buffer
    let mut forces = vec![NVec2::zeros(); sys.bodies.len()];
    accumulate_forces(law, &*sys, &mut forces)?;

    // Kick: v_n+1 = v_n + dt * F / m, for every body before any position moves
    for (b, f) in sys.bodies.iter_mut().zip(forces.iter()) {
        let a = *f / b.mass();
        b.v += a * dt;
    }

    // Drift with the new velocity: x_n+1 = x_n + dt * v_n+1
    for b in sys.bodies.iter_mut() {
        b.x += b.v * dt;
        b.trajectory.push(b.x);
    }

    sys.t += dt;
    sys.steps += 1;
    debug!("step {} done, t = {}", sys.steps, sys.t);

    Ok(())
}

/// Advance the system by `n_steps` steps, stopping at the first error
///
/// Returns the elapsed time after the last step.
pub fn integrate<F>(sys: &mut System, law: &F, dt: f64, n_steps: u64) -> Result<f64, SimError>
where
    F: ForceLaw + ?Sized,
{
    for _ in 0..n_steps {
        step(sys, law, dt)?;
    }
    Ok(sys.t)
}
