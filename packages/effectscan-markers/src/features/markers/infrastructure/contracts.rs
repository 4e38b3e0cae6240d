//! Decorator/contract parsing
//!
//! Recognizes contract-declaration decorators (`@deal.has('io')`,
//! `@deal.raises(ValueError)`, bare `@deal.pure`) and yields their category
//! and arguments. The marker engine consumes only the `has` category; the
//! rest is surfaced for completeness of the interface.

use crate::features::parsing::domain::{python, NodeKind, SyntaxNode};

/// Contract categories a decorator can declare.
const SUPPORTED_CATEGORIES: &[&str] = &[
    "has", "raises", "pre", "post", "ensure", "pure", "safe", "reason", "inherit",
];

/// Contract declarations among a definition's decorators, as
/// `(category, arguments)` pairs in source order.
pub fn get_contracts<'a>(decorators: &'a [SyntaxNode]) -> Vec<(String, Vec<&'a SyntaxNode>)> {
    let mut out = Vec::new();
    for dec in decorators {
        let Some(expr) = python::decorator_expr(dec) else {
            continue;
        };
        let (callee, args) = match expr.kind {
            NodeKind::Call => {
                let Some(callee) = python::call_function(expr) else {
                    continue;
                };
                (callee, python::call_arguments(expr))
            }
            NodeKind::Name | NodeKind::Attribute => (expr, Vec::new()),
            _ => continue,
        };
        let Some(name) = python::dotted_name(callee) else {
            continue;
        };
        let category = name.rsplit('.').next().unwrap_or(&name);
        if SUPPORTED_CATEGORIES.contains(&category) {
            out.push((category.to_string(), args));
        }
    }
    out
}

/// Literal value of a decorator argument, or "not a literal".
pub fn literal_string(node: &SyntaxNode) -> Option<String> {
    python::string_literal(node)
}
