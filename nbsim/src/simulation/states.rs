//! Core state types for the N-body simulation.
//!
//! Defines the 2D body store:
//! - [`BodySpec`]: caller-facing initial state of one body
//! - [`Body`]: runtime body with its recorded trajectory
//! - [`System`]: the ordered collection of bodies, elapsed time and step count
//!
//! Body fields are only writable from inside the crate. Mass never changes
//! after construction and the trajectory only grows, one entry per step.

use nalgebra::Vector2;

use super::error::SimError;

pub type NVec2 = Vector2<f64>;

/// Display attributes stored for renderers, never read by the physics
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    pub color: Option<String>,
    pub radius: f64,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            color: None,
            radius: 0.1,
        }
    }
}

/// Initial state of one body, validated when the [`System`] is built
#[derive(Debug, Clone)]
pub struct BodySpec {
    pub position: NVec2,
    pub velocity: NVec2,
    pub mass: f64,
    pub appearance: Appearance,
}

impl BodySpec {
    pub fn new(position: [f64; 2], velocity: [f64; 2], mass: f64) -> Self {
        Self {
            position: NVec2::new(position[0], position[1]),
            velocity: NVec2::new(velocity[0], velocity[1]),
            mass,
            appearance: Appearance::default(),
        }
    }

    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub(crate) x: NVec2, // position
    pub(crate) v: NVec2, // velocity
    m: f64,              // mass
    pub(crate) trajectory: Vec<NVec2>,
    appearance: Appearance,
}

impl Body {
    fn from_spec(index: usize, spec: BodySpec) -> Result<Self, SimError> {
        if !(spec.mass.is_finite() && spec.mass > 0.0) {
            return Err(SimError::InvalidMass {
                index,
                mass: spec.mass,
            });
        }
        if !is_finite(&spec.position) {
            return Err(SimError::NonFiniteState {
                index,
                field: "position",
            });
        }
        if !is_finite(&spec.velocity) {
            return Err(SimError::NonFiniteState {
                index,
                field: "velocity",
            });
        }

        Ok(Self {
            x: spec.position,
            v: spec.velocity,
            m: spec.mass,
            trajectory: vec![spec.position],
            appearance: spec.appearance,
        })
    }

    pub fn position(&self) -> NVec2 {
        self.x
    }

    pub fn velocity(&self) -> NVec2 {
        self.v
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    /// Every position this body has occupied, starting with the initial one
    pub fn trajectory(&self) -> &[NVec2] {
        &self.trajectory
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    pub fn momentum(&self) -> NVec2 {
        self.v * self.m
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }

    /// z-component of r x v (not multiplied by mass)
    pub fn specific_angular_momentum(&self) -> f64 {
        self.x.x * self.v.y - self.x.y * self.v.x
    }
}

/// Ordered collection of bodies plus elapsed time
///
/// The order is fixed at construction; index `i` always refers to the same body.
#[derive(Debug, Clone)]
pub struct System {
    pub(crate) bodies: Vec<Body>,
    pub(crate) t: f64,      // time
    pub(crate) steps: u64,  // completed steps
}

impl System {
    /// Validate the initial states and build the system at t = 0
    pub fn new<I>(specs: I) -> Result<Self, SimError>
    where
        I: IntoIterator<Item = BodySpec>,
    {
        let bodies = specs
            .into_iter()
            .enumerate()
            .map(|(i, spec)| Body::from_spec(i, spec))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            bodies,
            t: 0.0,
            steps: 0,
        })
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Elapsed simulated time
    pub fn time(&self) -> f64 {
        self.t
    }

    /// Number of completed steps
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn positions(&self) -> Vec<NVec2> {
        self.bodies.iter().map(|b| b.x).collect()
    }

    pub fn velocities(&self) -> Vec<NVec2> {
        self.bodies.iter().map(|b| b.v).collect()
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.m).sum()
    }

    /// Should stay constant for an isolated system
    pub fn total_momentum(&self) -> NVec2 {
        self.bodies
            .iter()
            .map(|b| b.momentum())
            .fold(NVec2::zeros(), |acc, p| acc + p)
    }

    pub fn total_angular_momentum(&self) -> f64 {
        self.bodies
            .iter()
            .map(|b| b.specific_angular_momentum() * b.m)
            .sum()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }

    /// Mass-weighted mean position, `None` for an empty system
    pub fn center_of_mass(&self) -> Option<NVec2> {
        if self.bodies.is_empty() {
            return None;
        }
        let weighted = self
            .bodies
            .iter()
            .fold(NVec2::zeros(), |acc, b| acc + b.x * b.m);
        Some(weighted / self.total_mass())
    }

    /// Indices of bodies whose position or velocity magnitude exceeds `bound`
    pub fn exceeding(&self, bound: f64) -> Vec<usize> {
        self.bodies
            .iter()
            .enumerate()
            .filter(|(_, b)| b.x.norm() > bound || b.v.norm() > bound)
            .map(|(i, _)| i)
            .collect()
    }
}

fn is_finite(v: &NVec2) -> bool {
    v.iter().all(|c| c.is_finite())
}
