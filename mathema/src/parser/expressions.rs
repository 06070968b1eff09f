use crate::error::MathemaError;
use crate::parser::literals::{parse_identifier, parse_number};
use crate::parser::{BuildContext, Rule};
use crate::symbolic::{Expr, Function};
use pest::iterators::Pair;

pub(crate) fn parse_expression(
    pair: Pair<Rule>,
    ctx: &mut BuildContext,
) -> Result<Expr, MathemaError> {
    if let Err(depth) = ctx.depth.push_depth() {
        return Err(MathemaError::limit_exceeded(
            "max_expression_depth",
            ctx.max_depth,
            depth,
            "Simplify nested expressions to reduce depth",
        ));
    }

    let result = parse_sum(pair, ctx);
    ctx.depth.pop_depth();
    result
}

fn parse_sum(pair: Pair<Rule>, ctx: &mut BuildContext) -> Result<Expr, MathemaError> {
    let mut pairs = pair.into_inner();
    let first = pairs
        .next()
        .ok_or_else(|| MathemaError::Engine("Missing left term in expression".to_string()))?;
    let mut terms = vec![parse_term(first, ctx)?];

    while let Some(op_pair) = pairs.next() {
        let negate = match op_pair.as_rule() {
            Rule::add_plus => false,
            Rule::add_minus => true,
            _ => {
                return Err(MathemaError::Engine(format!(
                    "Unexpected operator in expression: {:?}",
                    op_pair.as_rule()
                )))
            }
        };
        let right = parse_term(
            pairs.next().ok_or_else(|| {
                MathemaError::Engine("Missing right term in expression".to_string())
            })?,
            ctx,
        )?;
        terms.push(if negate { Expr::neg(right) } else { right });
    }

    Ok(Expr::add(terms))
}

fn parse_term(pair: Pair<Rule>, ctx: &mut BuildContext) -> Result<Expr, MathemaError> {
    let mut pairs = pair.into_inner();
    let mut left = parse_factor(
        pairs
            .next()
            .ok_or_else(|| MathemaError::Engine("Missing left factor in term".to_string()))?,
        ctx,
    )?;

    while let Some(op_pair) = pairs.next() {
        let right = parse_factor(
            pairs
                .next()
                .ok_or_else(|| MathemaError::Engine("Missing right factor in term".to_string()))?,
            ctx,
        )?;
        left = match op_pair.as_rule() {
            Rule::mul_star => Expr::mul(vec![left, right]),
            Rule::mul_slash => Expr::div(left, right),
            _ => {
                return Err(MathemaError::Engine(format!(
                    "Unexpected operator in term: {:?}",
                    op_pair.as_rule()
                )))
            }
        };
    }

    Ok(left)
}

fn parse_factor(pair: Pair<Rule>, ctx: &mut BuildContext) -> Result<Expr, MathemaError> {
    let mut negative = false;
    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::unary_minus => negative = !negative,
            Rule::unary_plus => {}
            Rule::power => {
                let expr = parse_power(inner, ctx)?;
                return Ok(if negative { Expr::neg(expr) } else { expr });
            }
            other => {
                return Err(MathemaError::Engine(format!(
                    "Unexpected rule in factor: {:?}",
                    other
                )))
            }
        }
    }
    Err(MathemaError::Engine(
        "Missing expression after unary operator".to_string(),
    ))
}

fn parse_power(pair: Pair<Rule>, ctx: &mut BuildContext) -> Result<Expr, MathemaError> {
    let mut pairs = pair.into_inner();
    let base = parse_primary(
        pairs
            .next()
            .ok_or_else(|| MathemaError::Engine("Missing base in power".to_string()))?,
        ctx,
    )?;

    if let Some(op_pair) = pairs.next() {
        if op_pair.as_rule() == Rule::pow_caret {
            let exponent = parse_factor(
                pairs.next().ok_or_else(|| {
                    MathemaError::Engine("Missing exponent in power expression".to_string())
                })?,
                ctx,
            )?;
            return Ok(Expr::pow(base, exponent));
        }
    }

    Ok(base)
}

fn parse_primary(pair: Pair<Rule>, ctx: &mut BuildContext) -> Result<Expr, MathemaError> {
    // primary = { number | call | identifier | "(" ~ expression ~ ")" }
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| MathemaError::Engine("Empty primary expression".to_string()))?;
    match inner.as_rule() {
        Rule::number => parse_number(inner, ctx),
        Rule::identifier => Ok(parse_identifier(inner)),
        Rule::call => parse_call(inner, ctx),
        Rule::expression => parse_expression(inner, ctx),
        other => Err(MathemaError::Engine(format!(
            "Unexpected rule in primary: {:?}",
            other
        ))),
    }
}

fn parse_call(pair: Pair<Rule>, ctx: &mut BuildContext) -> Result<Expr, MathemaError> {
    let call_pair = pair.clone();
    let mut pairs = pair.into_inner();
    let name_pair = pairs
        .next()
        .ok_or_else(|| MathemaError::Engine("Missing function name".to_string()))?;
    let name = name_pair.as_str();

    let Some(function) = Function::from_name(name) else {
        return Err(MathemaError::parse_with_suggestion(
            format!("Unknown function '{}'", name),
            crate::ast::Span::from_pest_span(name_pair.as_span()),
            ctx.source.clone(),
            format!("write '{}*(...)' for a product", name),
        ));
    };

    let mut args = Vec::new();
    for arg in pairs {
        args.push(parse_expression(arg, ctx)?);
    }

    match (function, args.len()) {
        (_, 1) => Ok(Expr::func(function, args.remove(0))),
        (Function::Log, 2) => {
            let base = args.remove(1);
            Ok(Expr::log_base(args.remove(0), base))
        }
        (_, n) => Err(ctx.error_at(
            format!(
                "Function '{}' takes 1 argument, {} given",
                function.name(),
                n
            ),
            &call_pair,
        )),
    }
}
