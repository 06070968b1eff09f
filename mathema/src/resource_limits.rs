/// Resource limits for a single query
///
/// Every query runs to completion synchronously, so these bounds are what keeps
/// a hostile or accidental input from expanding into unbounded work.
#[derive(Debug, Clone)]
pub struct ResourceLimits {
    /// Maximum raw input size in bytes
    /// Real usage: ~30 bytes, Limit: 4KB
    pub max_input_bytes: usize,

    /// Maximum expression nesting depth accepted by the parser
    pub max_expression_depth: usize,

    /// Maximum number of comma-separated equations in one query
    pub max_equations: usize,

    /// Maximum polynomial degree handled by expansion and root search
    pub max_polynomial_degree: usize,

    /// Maximum nesting of isolation/elimination steps in the solver
    pub max_solve_depth: usize,

    /// Maximum number of terms produced when multiplying out a polynomial
    pub max_expanded_terms: usize,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_input_bytes: 4 * 1024,
            max_expression_depth: 64,
            max_equations: 8,
            max_polynomial_degree: 24,
            max_solve_depth: 16,
            max_expanded_terms: 4096,
        }
    }
}

impl ResourceLimits {
    /// Create a new ResourceLimits with default values
    pub fn new() -> Self {
        Self::default()
    }
}
