//! Python node anatomy
//!
//! Free functions that destructure lowered [`SyntaxNode`] trees: dotted
//! callee names, call arguments and keywords, string literals, with-items,
//! decorators, and function-definition collection. All of them degrade to
//! `None`/empty on malformed shapes — never panic.

use super::parsed_module::FunctionDef;
use super::syntax_node::{NodeKind, SyntaxNode};
use std::path::Path;
use std::sync::Arc;

/// Resolve a callee expression to its dotted name.
///
/// `print` -> `print`; `os.system` -> `os.system`; `sys.stdout.write` ->
/// `sys.stdout.write`. Anything that is not a plain name/attribute chain
/// (subscripts, calls, lambdas) has no name.
pub fn dotted_name(node: &SyntaxNode) -> Option<String> {
    match node.kind {
        NodeKind::Name => Some(node.text().to_string()),
        NodeKind::Attribute => {
            let value = dotted_name(node.children.first()?)?;
            let attr = attribute_parts(node)?.1;
            Some(format!("{}.{}", value, attr))
        }
        _ => None,
    }
}

/// Receiver expression and attribute name of an `attribute` node.
pub fn attribute_parts(node: &SyntaxNode) -> Option<(&SyntaxNode, &str)> {
    if node.kind != NodeKind::Attribute {
        return None;
    }
    let value = node.children.first()?;
    let attr = node
        .children
        .iter()
        .skip(1)
        .rev()
        .find(|c| c.kind == NodeKind::Name)?;
    Some((value, attr.text()))
}

/// The callee expression of a `call` node.
pub fn call_function(call: &SyntaxNode) -> Option<&SyntaxNode> {
    if call.kind != NodeKind::Call {
        return None;
    }
    call.children.first()
}

/// Positional arguments of a `call` node.
pub fn call_arguments(call: &SyntaxNode) -> Vec<&SyntaxNode> {
    let Some(args) = call.find_child(&NodeKind::Arguments) else {
        return Vec::new();
    };
    args.children
        .iter()
        .filter(|c| {
            !matches!(
                c.kind,
                NodeKind::Keyword | NodeKind::Comment | NodeKind::Other(_)
            )
        })
        .collect()
}

/// Keyword arguments of a `call` node, as `(name, value)` pairs.
pub fn call_keywords(call: &SyntaxNode) -> Vec<(&str, &SyntaxNode)> {
    let Some(args) = call.find_child(&NodeKind::Arguments) else {
        return Vec::new();
    };
    args.children
        .iter()
        .filter(|c| c.kind == NodeKind::Keyword)
        .filter_map(keyword_parts)
        .collect()
}

/// Split a `keyword_argument` node into its name and value.
pub fn keyword_parts(kw: &SyntaxNode) -> Option<(&str, &SyntaxNode)> {
    let name = kw.children.iter().find(|c| c.kind == NodeKind::Name)?;
    let value = kw.children.last()?;
    Some((name.text(), value))
}

/// Unquoted content of a string literal node.
pub fn string_literal(node: &SyntaxNode) -> Option<String> {
    if node.kind != NodeKind::Str {
        return None;
    }
    let content: String = node
        .children
        .iter()
        .filter(|c| c.kind == NodeKind::StrContent)
        .map(|c| c.text())
        .collect();
    Some(content)
}

/// Context expressions of a `with` statement's items, unwrapped from any
/// `as` pattern.
pub fn with_items(stmt: &SyntaxNode) -> Vec<&SyntaxNode> {
    let Some(clause) = stmt.find_child(&NodeKind::WithClause) else {
        return Vec::new();
    };
    clause
        .children
        .iter()
        .filter(|c| c.kind == NodeKind::WithItem)
        .filter_map(|item| {
            let expr = item.children.first()?;
            if expr.kind == NodeKind::AsPattern {
                expr.children.first()
            } else {
                Some(expr)
            }
        })
        .collect()
}

/// The expression a decorator applies (`deal.has('io')` in
/// `@deal.has('io')`).
pub fn decorator_expr(dec: &SyntaxNode) -> Option<&SyntaxNode> {
    dec.children
        .iter()
        .find(|c| !matches!(c.kind, NodeKind::Other(_) | NodeKind::Comment))
}

/// Split a `decorated_definition` into its function node and decorators.
/// Decorated classes resolve to `None`.
pub fn unwrap_decorated(node: &SyntaxNode) -> Option<(&SyntaxNode, Vec<&SyntaxNode>)> {
    if node.kind != NodeKind::DecoratedDef {
        return None;
    }
    let func = node.find_child(&NodeKind::FunctionDef)?;
    Some((func, node.find_children(&NodeKind::Decorator)))
}

/// Named top-level function definitions of a module (decorated included).
pub fn top_level_functions(
    root: &SyntaxNode,
    module_name: &str,
    source_path: Option<&Path>,
) -> Vec<Arc<FunctionDef>> {
    let mut out = Vec::new();
    for child in &root.children {
        match child.kind {
            NodeKind::FunctionDef => {
                if let Some(def) = make_function_def(child, &[], module_name, source_path) {
                    out.push(def.shared());
                }
            }
            NodeKind::DecoratedDef => {
                if let Some((func, decorators)) = unwrap_decorated(child) {
                    if let Some(def) =
                        make_function_def(func, &decorators, module_name, source_path)
                    {
                        out.push(def.shared());
                    }
                }
            }
            _ => {}
        }
    }
    out
}

/// Every named function definition in a module: top-level functions,
/// methods, and nested defs.
pub fn all_functions(
    root: &SyntaxNode,
    module_name: &str,
    source_path: Option<&Path>,
) -> Vec<Arc<FunctionDef>> {
    let mut out = Vec::new();
    collect_functions(root, module_name, source_path, &mut out);
    out
}

fn collect_functions(
    node: &SyntaxNode,
    module_name: &str,
    source_path: Option<&Path>,
    out: &mut Vec<Arc<FunctionDef>>,
) {
    for child in &node.children {
        match child.kind {
            NodeKind::FunctionDef => {
                if let Some(def) = make_function_def(child, &[], module_name, source_path) {
                    out.push(def.shared());
                }
                if let Some(block) = child.find_child(&NodeKind::Block) {
                    collect_functions(block, module_name, source_path, out);
                }
            }
            NodeKind::DecoratedDef => {
                if let Some((func, decorators)) = unwrap_decorated(child) {
                    if let Some(def) =
                        make_function_def(func, &decorators, module_name, source_path)
                    {
                        out.push(def.shared());
                    }
                    if let Some(block) = func.find_child(&NodeKind::Block) {
                        collect_functions(block, module_name, source_path, out);
                    }
                }
            }
            _ => collect_functions(child, module_name, source_path, out),
        }
    }
}

fn make_function_def(
    func: &SyntaxNode,
    decorators: &[&SyntaxNode],
    module_name: &str,
    source_path: Option<&Path>,
) -> Option<FunctionDef> {
    let name = func.find_child(&NodeKind::Name)?.text().to_string();
    let body = func.find_child(&NodeKind::Block)?.clone();
    Some(FunctionDef {
        name,
        module_name: module_name.to_string(),
        source_path: source_path.map(Path::to_path_buf),
        body,
        decorators: decorators.iter().map(|d| (*d).clone()).collect(),
        span: func.span,
    })
}
