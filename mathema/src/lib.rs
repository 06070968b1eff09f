//! # Mathema Engine
//!
//! **Equations the way they are taught**
//!
//! Mathema takes an equation or a system of equations as a student would type
//! it, with Greek function names (`ημ`, `συν`, `εφ`, `σφ`), `^` powers and
//! implicit multiplication, and answers three questions: which chapter of the
//! curriculum it belongs to, where it is defined, and what its solutions are.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mathema::{Engine, MathemaResult};
//!
//! fn main() -> MathemaResult<()> {
//!     let engine = Engine::builtin()?;
//!
//!     let response = engine.analyze("x^2-5x+6=0")?;
//!     assert_eq!(response.domain_text, "x ∈ ℝ");
//!     assert_eq!(response.solution_texts, vec!["x = 2", "x = 3"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! 1. [`normalizer`] rewrites informal notation into the parser's syntax.
//! 2. [`classifier`] ranks chapters of the [`Taxonomy`] by keyword rules.
//! 3. [`domain`] collects the restrictions of logarithms, roots, fractions
//!    and tangent/cotangent poles and solves them over ℝ.
//! 4. [`solver`] solves basic trigonometric equations in closed form and
//!    everything else exactly, with the small symbolic core in [`symbolic`].
//! 5. [`format`] renders sets and solutions with `π`, `√`, `ℝ` and `k ∈ ℤ`.

pub mod ast;
pub mod classifier;
pub mod domain;
pub mod engine;
pub mod error;
pub mod format;
pub mod normalizer;
pub mod parser;
pub mod resource_limits;
pub mod response;
pub mod solver;
pub mod symbolic;
pub mod taxonomy;

pub use ast::{Equation, Span};
pub use classifier::{classify, ChapterMatch};
pub use domain::{Bound, Exclusion, Interval, RealSet};
pub use engine::Engine;
pub use error::MathemaError;
pub use format::{format_assignment, format_domain, format_interval, format_solution};
pub use normalizer::normalize;
pub use parser::{parse_equation, parse_expression};
pub use resource_limits::ResourceLimits;
pub use response::{Response, SolveOutcome, SolvePath};
pub use solver::{solve, solve_trig, Solution, TrigFunction};
pub use symbolic::Expr;
pub use taxonomy::Taxonomy;

/// Result type for Mathema operations
pub type MathemaResult<T> = Result<T, MathemaError>;

#[cfg(test)]
mod tests;
