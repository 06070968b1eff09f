use crate::ast::Equation;
use crate::classifier::ChapterMatch;
use crate::domain::RealSet;
use crate::format::{format_assignment, format_domain};
use crate::solver::Solution;
use serde::Serialize;

/// Which solver produced the solutions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolvePath {
    /// Closed-form family of a basic trigonometric equation
    Trigonometric,
    /// Polynomial roots, algebraic isolation or elimination
    General,
}

/// Everything the engine derived from one query, before presentation
#[derive(Debug, Clone, Serialize)]
pub struct SolveOutcome {
    /// Normalized text of each comma-separated clause
    pub normalized: Vec<String>,
    pub equations: Vec<Equation>,
    pub variable: String,
    pub domain: RealSet,
    pub solutions: Vec<Solution>,
    pub path: SolvePath,
}

/// Response for one query: classification plus solve outcome, with the
/// rendered texts a front end shows
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub input: String,
    pub normalized: Vec<String>,
    pub variable: String,
    pub matches: Vec<ChapterMatch>,
    pub domain: RealSet,
    pub domain_text: String,
    pub solutions: Vec<Solution>,
    pub solution_texts: Vec<String>,
    pub path: SolvePath,
}

impl Response {
    pub fn new(input: &str, matches: Vec<ChapterMatch>, outcome: SolveOutcome) -> Self {
        let domain_text = format_domain(&outcome.variable, &outcome.domain);
        let solution_texts = outcome.solutions.iter().map(format_assignment).collect();
        Self {
            input: input.to_string(),
            normalized: outcome.normalized,
            variable: outcome.variable,
            matches,
            domain: outcome.domain,
            domain_text,
            solutions: outcome.solutions,
            solution_texts,
            path: outcome.path,
        }
    }

    /// True when the query has no solution at all
    pub fn is_infeasible(&self) -> bool {
        self.solutions.is_empty()
    }

    /// The `n` best chapter matches
    pub fn top_matches(&self, n: usize) -> &[ChapterMatch] {
        &self.matches[..n.min(self.matches.len())]
    }
}
