//! Pairwise force contributors for the n-body engine
//!
//! Defines the [`ForceLaw`] trait the integrator calls, direct Newtonian
//! gravity as its implementation, and the O(n^2) accumulation over all pairs

use super::error::{ForceError, SimError};
use super::states::{Body, NVec2, System};

/// A law giving the force one body exerts on another
///
/// Implementations must be antisymmetric: `force(a, b) == -force(b, a)`.
/// [`accumulate_forces`] relies on this to evaluate each pair once.
pub trait ForceLaw: Send + Sync {
    /// Force that `b` exerts on `a`
    fn force(&self, a: &Body, b: &Body) -> Result<NVec2, ForceError>;

    /// Total potential energy of the system under this law
    fn potential_energy(&self, _sys: &System) -> f64 {
        0.0
    }
}

/// 2D Newtonian gravity, F = G * ma * mb / (r^2 + eps2) along the line of centers
///
/// `eps2 = 0` (the default) is the unsoftened inverse-square law.
#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening
}

impl NewtonianGravity {
    #[allow(non_snake_case)]
    pub fn new(G: f64) -> Self {
        Self { G, eps2: 0.0 }
    }

    pub fn with_softening(mut self, eps2: f64) -> Self {
        self.eps2 = eps2;
        self
    }
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl ForceLaw for NewtonianGravity {
    fn force(&self, a: &Body, b: &Body) -> Result<NVec2, ForceError> {
        // d points from a toward b, so a is pulled along +d
        let d = b.position() - a.position();
        if d.x == 0.0 && d.y == 0.0 {
            return Err(ForceError::Coincident {
                x: a.position().x,
                y: a.position().y,
            });
        }

        let r2 = d.norm_squared();
        let r = r2.sqrt();
        // ma * mb first, so swapping a and b gives the same magnitude bit for bit
        let magnitude = self.G * (a.mass() * b.mass()) / (r2 + self.eps2);

        // magnitude times the unit vector d / r
        let f = d * (magnitude / r);
        if !(f.x.is_finite() && f.y.is_finite()) {
            return Err(ForceError::NonFinite { separation: r });
        }
        Ok(f)
    }

    fn potential_energy(&self, sys: &System) -> f64 {
        let bodies = sys.bodies();
        bodies
            .iter()
            .enumerate()
            .flat_map(|(i, a)| {
                bodies[i + 1..].iter().map(move |b| {
                    let r = ((b.position() - a.position()).norm_squared() + self.eps2).sqrt();
                    -self.G * a.mass() * b.mass() / r
                })
            })
            .sum()
    }
}

/// Compute the net force on every body of `sys` from its current positions
/// - `out[i]` is overwritten with the sum over all `j != i` of `force(i, j)`
/// - nothing in `sys` is modified, so every pair sees the same positions
pub fn accumulate_forces<F>(law: &F, sys: &System, out: &mut [NVec2]) -> Result<(), SimError>
where
    F: ForceLaw + ?Sized,
{
    // Zero buffer
    for f in out.iter_mut() {
        *f = NVec2::zeros();
    }

    let bodies = sys.bodies();
    let n = bodies.len();

    // Loop over each unordered pair (i, j) with i < j
    for i in 0..n {
        for j in (i + 1)..n {
            let f = law
                .force(&bodies[i], &bodies[j])
                .map_err(|source| SimError::Degenerate {
                    first: i,
                    second: j,
                    step: sys.steps(),
                    source,
                })?;

            // equal and opposite
            out[i] += f;
            out[j] -= f;
        }
    }
    Ok(())
}
