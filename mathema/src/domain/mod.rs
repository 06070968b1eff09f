//! Domains of definition over the reals

pub mod analyzer;
pub mod inequality;
pub mod set;
pub mod set_ops;

pub use analyzer::{collect_constraints, domain, Constraint, NodeKind};
pub use inequality::{solve_univariate_inequality, Relation};
pub use set::{Bound, Endpoint, Exclusion, Interval, RealSet};
