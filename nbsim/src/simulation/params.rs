//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed step size and how many steps make up a run and a frame,
//! - softening and gravitational constant (`eps2`, `G`),
//! - optional bound above which runaway bodies are reported

use super::error::SimError;

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // step size
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening
    pub steps: u64, // steps in a full run
    pub steps_per_frame: u32, // steps per frame tick
    pub escape_bound: Option<f64>, // warn when |x| or |v| exceeds this
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: 0.02,
            G: 1.0,
            eps2: 0.0,
            steps: 500,
            steps_per_frame: 1,
            escape_bound: None,
        }
    }
}

impl Parameters {
    /// Reject values that would only surface later as NaN
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.dt.is_finite() {
            return Err(SimError::InvalidTimeStep(self.dt));
        }
        if !self.G.is_finite() {
            return Err(SimError::InvalidParameter {
                name: "G",
                value: self.G,
            });
        }
        if !(self.eps2.is_finite() && self.eps2 >= 0.0) {
            return Err(SimError::InvalidParameter {
                name: "eps2",
                value: self.eps2,
            });
        }
        if self.steps_per_frame == 0 {
            return Err(SimError::InvalidParameter {
                name: "steps_per_frame",
                value: 0.0,
            });
        }
        if let Some(bound) = self.escape_bound {
            if !(bound > 0.0) {
                return Err(SimError::InvalidParameter {
                    name: "escape_bound",
                    value: bound,
                });
            }
        }
        Ok(())
    }
}
