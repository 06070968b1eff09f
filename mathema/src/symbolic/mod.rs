//! Symbolic expressions
//!
//! A small computer-algebra core with just enough structure to parse
//! school-level equations, keep them in a canonical form, and let the domain
//! analyzer and the solvers reason about them exactly.
//!
//! Expressions are immutable trees. All construction goes through the
//! canonicalizing constructors in [`construct`], so two expressions that are
//! trivially equal (`x + x` and `2*x`, `1/2` and `0.5`) compare equal
//! structurally.

pub mod construct;
pub mod display;
pub mod evaluate;
pub mod expand;
pub mod number;
pub mod polynomial;
pub mod traversal;

pub use number::Rational;
pub use polynomial::Polynomial;
pub use traversal::{walk_expr, ExprVisitor, Preorder};

use serde::{Serialize, Serializer};

/// Name of the integer parameter used by periodic solution families
pub const PERIODIC_PARAMETER: &str = "k";

/// Mathematical constants with exact identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Constant {
    Pi,
    E,
}

/// A free symbol; `integer` marks parameters such as the `k` in `2kπ + a`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol {
    pub name: String,
    pub integer: bool,
}

/// Elementary functions understood by the parser and the solvers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Cot,
    Asin,
    Acos,
    Atan,
    Log,
    Exp,
    Sqrt,
    Abs,
}

impl Function {
    pub fn name(&self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Cot => "cot",
            Function::Asin => "asin",
            Function::Acos => "acos",
            Function::Atan => "atan",
            Function::Log => "log",
            Function::Exp => "exp",
            Function::Sqrt => "sqrt",
            Function::Abs => "Abs",
        }
    }

    /// Resolve a function name as written by the user (after normalization)
    pub fn from_name(name: &str) -> Option<Function> {
        let function = match name {
            "sin" => Function::Sin,
            "cos" => Function::Cos,
            "tan" => Function::Tan,
            "cot" => Function::Cot,
            "asin" | "arcsin" => Function::Asin,
            "acos" | "arccos" => Function::Acos,
            "atan" | "arctan" => Function::Atan,
            "log" | "ln" => Function::Log,
            "exp" => Function::Exp,
            "sqrt" => Function::Sqrt,
            "abs" | "Abs" => Function::Abs,
            _ => return None,
        };
        Some(function)
    }
}

/// A symbolic expression tree
///
/// The derived ordering is only used to keep operands of sums and products in
/// a canonical order; it carries no mathematical meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Expr {
    Number(Rational),
    Constant(Constant),
    Symbol(Symbol),
    Add(Vec<Expr>),
    Mul(Vec<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    Function(Function, Vec<Expr>),
}

impl Expr {
    /// Ordered child sub-expressions
    pub fn args(&self) -> Vec<&Expr> {
        match self {
            Expr::Number(_) | Expr::Constant(_) | Expr::Symbol(_) => Vec::new(),
            Expr::Add(terms) | Expr::Mul(terms) => terms.iter().collect(),
            Expr::Pow(base, exp) => vec![base.as_ref(), exp.as_ref()],
            Expr::Function(_, args) => args.iter().collect(),
        }
    }

    pub fn as_number(&self) -> Option<&Rational> {
        match self {
            Expr::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Expr::Number(n) if num::Zero::is_zero(n))
    }

    pub fn is_one(&self) -> bool {
        matches!(self, Expr::Number(n) if num::One::is_one(n))
    }

    pub fn is_symbol(&self, name: &str) -> bool {
        matches!(self, Expr::Symbol(s) if s.name == name)
    }

    /// The single argument of a unary function application
    pub fn function_arg(&self, function: Function) -> Option<&Expr> {
        match self {
            Expr::Function(f, args) if *f == function && args.len() == 1 => Some(&args[0]),
            _ => None,
        }
    }
}

impl Serialize for Expr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
