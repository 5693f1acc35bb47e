//! Step-by-step driver for external consumers (renderers, printers)
//!
//! [`run`] borrows the system mutably for the whole run and yields one owned
//! [`Snapshot`] per completed step. The sequence is finite and cannot be
//! restarted; earlier states stay available through each body's trajectory.

use log::warn;

use super::error::SimError;
use super::forces::ForceLaw;
use super::integrator;
use super::states::{NVec2, System};

/// Read-only copy of the system after one step
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub step: u64, // completed steps so far
    pub time: f64,
    pub positions: Vec<NVec2>,
    pub velocities: Vec<NVec2>,
}

impl Snapshot {
    pub fn of(sys: &System) -> Self {
        Self {
            step: sys.steps(),
            time: sys.time(),
            positions: sys.positions(),
            velocities: sys.velocities(),
        }
    }
}

/// Lazy sequence of steps, see [`run`]
pub struct Run<'a, F: ForceLaw + ?Sized> {
    sys: &'a mut System,
    law: &'a F,
    dt: f64,
    remaining: u64,
    escape_bound: Option<f64>,
    failed: bool,
}

/// Step `sys` `n_steps` times, lazily, yielding a snapshot after each step
///
/// The first error is yielded once and ends the sequence.
pub fn run<'a, F>(sys: &'a mut System, law: &'a F, dt: f64, n_steps: u64) -> Run<'a, F>
where
    F: ForceLaw + ?Sized,
{
    Run {
        sys,
        law,
        dt,
        remaining: n_steps,
        escape_bound: None,
        failed: false,
    }
}

impl<'a, F: ForceLaw + ?Sized> Run<'a, F> {
    /// Log a warning whenever a body's |x| or |v| goes above `bound`
    pub fn warn_beyond(mut self, bound: Option<f64>) -> Self {
        self.escape_bound = bound;
        self
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl<'a, F: ForceLaw + ?Sized> Iterator for Run<'a, F> {
    type Item = Result<Snapshot, SimError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.remaining == 0 {
            return None;
        }

        if let Err(e) = integrator::step(self.sys, self.law, self.dt) {
            self.failed = true;
            self.remaining = 0;
            return Some(Err(e));
        }
        self.remaining -= 1;

        if let Some(bound) = self.escape_bound {
            for i in self.sys.exceeding(bound) {
                if let Some(b) = self.sys.body(i) {
                    warn!(
                        "body {} beyond {:e} at step {} (|x| = {:e}, |v| = {:e})",
                        i,
                        bound,
                        self.sys.steps(),
                        b.position().norm(),
                        b.velocity().norm()
                    );
                }
            }
        }

        Some(Ok(Snapshot::of(self.sys)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (0, Some(n))
    }
}

impl<'a, F: ForceLaw + ?Sized> std::iter::FusedIterator for Run<'a, F> {}
