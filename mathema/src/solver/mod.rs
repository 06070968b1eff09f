//! Equation solvers
//!
//! [`trig`] handles the closed family of basic trigonometric equations;
//! [`equation`] solves single equations exactly (polynomials first, then
//! algebraic isolation) and [`system`] eliminates systems by substitution.

pub mod equation;
pub mod isolate;
pub mod system;
pub mod trig;

pub use equation::{solve, solve_univariate, Solution};
pub use trig::{solve_trig, TrigFunction};

use crate::error::MathemaError;
use crate::resource_limits::ResourceLimits;
use crate::MathemaResult;

/// Limits plus the current nesting of isolation and elimination steps
#[derive(Debug, Clone, Copy)]
pub struct SolveContext<'a> {
    pub limits: &'a ResourceLimits,
    depth: usize,
}

impl<'a> SolveContext<'a> {
    pub fn new(limits: &'a ResourceLimits) -> Self {
        Self { limits, depth: 0 }
    }

    /// Context for a nested step; fails once `max_solve_depth` is exceeded
    pub fn descend(&self) -> MathemaResult<SolveContext<'a>> {
        let depth = self.depth + 1;
        if depth > self.limits.max_solve_depth {
            return Err(MathemaError::limit_exceeded(
                "max_solve_depth",
                self.limits.max_solve_depth,
                depth,
                "Simplify the equation or reduce the number of nested functions",
            ));
        }
        Ok(SolveContext {
            limits: self.limits,
            depth,
        })
    }
}
