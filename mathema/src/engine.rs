use crate::ast::Equation;
use crate::classifier::{classify, ChapterMatch};
use crate::domain::{domain, RealSet};
use crate::normalizer::{normalize, split_clauses};
use crate::parser::parse_equation;
use crate::response::{Response, SolveOutcome, SolvePath};
use crate::solver::{solve, solve_trig, Solution};
use crate::symbolic::PERIODIC_PARAMETER;
use crate::taxonomy::Taxonomy;
use crate::{MathemaError, MathemaResult, ResourceLimits};
use tracing::{debug, warn};

/// Variable name used when the query has no free symbol at all
pub const PLACEHOLDER_VARIABLE: &str = "x";

/// The Mathema query engine.
///
/// Holds the taxonomy and limits; every query is independent, so one engine
/// can be shared between threads.
#[derive(Debug, Clone)]
pub struct Engine {
    taxonomy: Taxonomy,
    limits: ResourceLimits,
}

impl Engine {
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self::with_limits(taxonomy, ResourceLimits::default())
    }

    /// Create an engine with custom resource limits
    pub fn with_limits(taxonomy: Taxonomy, limits: ResourceLimits) -> Self {
        Self { taxonomy, limits }
    }

    /// Engine over the taxonomy shipped with the crate
    pub fn builtin() -> MathemaResult<Self> {
        Ok(Self::new(Taxonomy::builtin()?))
    }

    pub fn limits(&self) -> &ResourceLimits {
        &self.limits
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn normalize(&self, input: &str) -> String {
        normalize(input)
    }

    pub fn classify(&self, input: &str) -> Vec<ChapterMatch> {
        classify(input, &self.taxonomy)
    }

    /// Domain of definition of the query's left-hand sides
    pub fn domain_of(&self, input: &str) -> MathemaResult<RealSet> {
        let (_, equations) = self.parse_input(input)?;
        let var = choose_variable(&equations);
        domain_of_equations(&equations, &var, &self.limits)
    }

    /// Parse, analyze and solve one query
    ///
    /// The first equation of trigonometric shape short-circuits: its solution
    /// families are the answer and the domain covers the equations seen so far.
    pub fn solve_input(&self, input: &str) -> MathemaResult<SolveOutcome> {
        let (normalized, equations) = self.parse_input(input)?;
        let variable = choose_variable(&equations);

        let mut domain_so_far = RealSet::reals();
        for equation in &equations {
            domain_so_far = domain_so_far.intersect(&domain(&equation.lhs, &variable, &self.limits)?);
            if let Some(families) = solve_trig(&equation.lhs, &equation.rhs, &variable)? {
                debug!(families = families.len(), "trigonometric path");
                let solutions = families
                    .into_iter()
                    .map(|family| Solution::from([(variable.clone(), family)]))
                    .collect();
                return Ok(SolveOutcome {
                    normalized,
                    equations,
                    variable,
                    domain: domain_so_far,
                    solutions,
                    path: SolvePath::Trigonometric,
                });
            }
        }

        let solutions = solve(&equations, &variable, &self.limits)?;
        debug!(solutions = solutions.len(), "general path");
        Ok(SolveOutcome {
            normalized,
            equations,
            variable,
            domain: domain_so_far,
            solutions,
            path: SolvePath::General,
        })
    }

    /// Classification and solve outcome for one query
    pub fn analyze(&self, input: &str) -> MathemaResult<Response> {
        let matches = self.classify(input);
        let outcome = self.solve_input(input)?;
        Ok(Response::new(input, matches, outcome))
    }

    fn parse_input(&self, input: &str) -> MathemaResult<(Vec<String>, Vec<Equation>)> {
        if input.len() > self.limits.max_input_bytes {
            return Err(MathemaError::limit_exceeded(
                "max_input_bytes",
                self.limits.max_input_bytes,
                input.len(),
                format!(
                    "Reduce the input to {} bytes or less",
                    self.limits.max_input_bytes
                ),
            ));
        }

        let clauses = split_clauses(input);
        if clauses.is_empty() {
            return Err(MathemaError::Engine("Empty input".to_string()));
        }
        if clauses.len() > self.limits.max_equations {
            return Err(MathemaError::limit_exceeded(
                "max_equations",
                self.limits.max_equations,
                clauses.len(),
                "Split the system into smaller queries",
            ));
        }

        let normalized: Vec<String> = clauses.iter().map(|clause| normalize(clause)).collect();
        debug!(?normalized, "normalized input");
        let equations = normalized
            .iter()
            .map(|clause| parse_equation(clause, &self.limits))
            .collect::<MathemaResult<Vec<_>>>()?;
        Ok((normalized, equations))
    }
}

/// Variables tried first when the first left-hand side has several symbols
const PREFERRED_VARIABLES: [&str; 2] = ["x", "y"];

/// `x` or `y` if the first left-hand side has them, otherwise its
/// alphabetically first free symbol
fn choose_variable(equations: &[Equation]) -> String {
    let candidate = equations.first().and_then(|equation| {
        let names = equation.lhs.free_symbol_names();
        PREFERRED_VARIABLES
            .iter()
            .find(|preferred| names.contains(**preferred))
            .map(|preferred| preferred.to_string())
            .or_else(|| names.into_iter().find(|name| name != PERIODIC_PARAMETER))
    });
    match candidate {
        Some(name) => name,
        None => {
            warn!(
                placeholder = PLACEHOLDER_VARIABLE,
                "no free symbol on the left-hand side, using placeholder variable"
            );
            PLACEHOLDER_VARIABLE.to_string()
        }
    }
}

fn domain_of_equations(
    equations: &[Equation],
    var: &str,
    limits: &ResourceLimits,
) -> MathemaResult<RealSet> {
    let mut result = RealSet::reals();
    for equation in equations {
        result = result.intersect(&domain(&equation.lhs, var, limits)?);
    }
    Ok(result)
}
