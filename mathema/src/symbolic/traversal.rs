//! Expression traversal
//!
//! Pre-order walks over the expression tree plus the queries built on them:
//! free symbols, dependency checks and substitution.

use super::{Expr, Symbol};
use std::collections::BTreeSet;

/// Pre-order iterator: a node is yielded before its children, children in
/// `args()` order
pub struct Preorder<'a> {
    stack: Vec<&'a Expr>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let children = node.args();
        self.stack.extend(children.into_iter().rev());
        Some(node)
    }
}

impl Expr {
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder { stack: vec![self] }
    }

    pub fn free_symbols(&self) -> BTreeSet<Symbol> {
        self.preorder()
            .filter_map(|e| match e {
                Expr::Symbol(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    /// Free symbol names, alphabetically
    pub fn free_symbol_names(&self) -> BTreeSet<String> {
        self.free_symbols().into_iter().map(|s| s.name).collect()
    }

    /// True when the symbol `name` occurs anywhere in the tree
    pub fn has(&self, name: &str) -> bool {
        self.preorder().any(|e| e.is_symbol(name))
    }

    /// True when no free symbol occurs (constants like `pi` are allowed)
    pub fn is_constant(&self) -> bool {
        !self.preorder().any(|e| matches!(e, Expr::Symbol(_)))
    }

    /// Replace every occurrence of the symbol `name` and re-canonicalize
    pub fn subs(&self, name: &str, value: &Expr) -> Expr {
        if !self.has(name) {
            return self.clone();
        }
        match self {
            Expr::Symbol(s) if s.name == name => value.clone(),
            Expr::Number(_) | Expr::Constant(_) | Expr::Symbol(_) => self.clone(),
            Expr::Add(terms) => Expr::add(terms.iter().map(|t| t.subs(name, value)).collect()),
            Expr::Mul(factors) => {
                Expr::mul(factors.iter().map(|f| f.subs(name, value)).collect())
            }
            Expr::Pow(base, exp) => Expr::pow(base.subs(name, value), exp.subs(name, value)),
            Expr::Function(function, args) => {
                let mut args: Vec<Expr> = args.iter().map(|a| a.subs(name, value)).collect();
                if args.len() == 1 {
                    Expr::func(*function, args.remove(0))
                } else {
                    Expr::Function(*function, args)
                }
            }
        }
    }
}

/// Callback interface for [`walk_expr`]
pub trait ExprVisitor {
    /// Visit one node; return true to descend into its children
    fn visit(&mut self, node: &Expr) -> bool;
}

/// Walk an expression tree with a visitor, parents before children
pub fn walk_expr<V: ExprVisitor>(expr: &Expr, visitor: &mut V) {
    if visitor.visit(expr) {
        for child in expr.args() {
            walk_expr(child, visitor);
        }
    }
}
