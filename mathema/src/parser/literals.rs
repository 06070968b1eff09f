use crate::parser::{BuildContext, Rule};
use crate::error::MathemaError;
use crate::symbolic::{number, Expr};
use pest::iterators::Pair;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Decimal literals are read exactly: `0.5` is the rational `1/2`
pub(crate) fn parse_number(pair: Pair<Rule>, ctx: &BuildContext) -> Result<Expr, MathemaError> {
    let text = pair.as_str();
    let trimmed = text.strip_suffix('.').unwrap_or(text);
    let normalized = if trimmed.starts_with('.') {
        format!("0{}", trimmed)
    } else {
        trimmed.to_string()
    };
    let value = Decimal::from_str(&normalized)
        .map_err(|_| ctx.error_at(format!("Number '{}' is out of range", text), &pair))?;
    Ok(Expr::number(number::from_decimal(value)))
}

/// Names with a fixed meaning; everything else is a free symbol
pub(crate) fn parse_identifier(pair: Pair<Rule>) -> Expr {
    match pair.as_str() {
        "pi" | "π" => Expr::pi(),
        "e" | "E" => Expr::e(),
        name => Expr::symbol(name),
    }
}
