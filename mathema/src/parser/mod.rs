use crate::ast::{DepthGuard, Equation, Span};
use crate::error::MathemaError;
use crate::resource_limits::ResourceLimits;
use crate::symbolic::Expr;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;
use std::sync::Arc;

pub mod expressions;
pub mod literals;

#[derive(Parser)]
#[grammar = "src/parser/mathema.pest"]
pub struct MathemaParser;

/// Shared state while turning a parse tree into expressions
pub(crate) struct BuildContext {
    pub source: Arc<str>,
    pub depth: DepthGuard,
    pub max_depth: usize,
}

impl BuildContext {
    fn new(source: &str, limits: &ResourceLimits) -> Self {
        Self {
            source: Arc::from(source),
            depth: DepthGuard::with_max_depth(limits.max_expression_depth),
            max_depth: limits.max_expression_depth,
        }
    }

    pub fn error_at(&self, message: impl Into<String>, pair: &Pair<Rule>) -> MathemaError {
        MathemaError::parse(
            message,
            Span::from_pest_span(pair.as_span()),
            self.source.clone(),
        )
    }
}

/// Parse one normalized equation (`a = b`, or a bare `a` meaning `a = 0`)
pub fn parse_equation(content: &str, limits: &ResourceLimits) -> Result<Equation, MathemaError> {
    check_input_size(content, limits)?;
    let mut ctx = BuildContext::new(content, limits);

    let pairs = MathemaParser::parse(Rule::equation_input, content)
        .map_err(|e| pest_error(&e, content))?;
    let input = pairs
        .into_iter()
        .next()
        .ok_or_else(|| MathemaError::Engine("Empty parse result".to_string()))?;

    let mut sides = Vec::with_capacity(2);
    for inner in input.into_inner() {
        if inner.as_rule() == Rule::expression {
            sides.push(expressions::parse_expression(inner, &mut ctx)?);
        }
    }

    let mut sides = sides.into_iter();
    let lhs = sides
        .next()
        .ok_or_else(|| MathemaError::Engine("Missing left-hand side".to_string()))?;
    let rhs = sides.next().unwrap_or_else(Expr::zero);
    Ok(Equation::new(lhs, rhs))
}

/// Parse a single normalized expression
pub fn parse_expression(content: &str, limits: &ResourceLimits) -> Result<Expr, MathemaError> {
    check_input_size(content, limits)?;
    let mut ctx = BuildContext::new(content, limits);

    let pairs = MathemaParser::parse(Rule::expression_input, content)
        .map_err(|e| pest_error(&e, content))?;
    let input = pairs
        .into_iter()
        .next()
        .ok_or_else(|| MathemaError::Engine("Empty parse result".to_string()))?;

    for inner in input.into_inner() {
        if inner.as_rule() == Rule::expression {
            return expressions::parse_expression(inner, &mut ctx);
        }
    }
    Err(MathemaError::Engine("Missing expression".to_string()))
}

fn check_input_size(content: &str, limits: &ResourceLimits) -> Result<(), MathemaError> {
    if content.len() > limits.max_input_bytes {
        return Err(MathemaError::limit_exceeded(
            "max_input_bytes",
            format!("{} bytes", limits.max_input_bytes),
            format!("{} bytes", content.len()),
            "Shorten the input or split it into separate queries",
        ));
    }
    Ok(())
}

fn pest_error(error: &pest::error::Error<Rule>, content: &str) -> MathemaError {
    let suggestion = match &error.variant {
        pest::error::ErrorVariant::ParsingError { positives, .. }
            if positives.contains(&Rule::EOI) =>
        {
            Some("check for unbalanced parentheses or a missing operator")
        }
        _ => None,
    };
    let message = error.variant.message().to_string();
    let span = Span::from_pest_error(error);
    match suggestion {
        Some(hint) => MathemaError::parse_with_suggestion(message, span, Arc::from(content), hint),
        None => MathemaError::parse(message, span, Arc::from(content)),
    }
}
