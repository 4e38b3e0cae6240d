//! Tree-sitter parser implementation
//!
//! This is where the tree-sitter dependency lives. The CST is lowered to an
//! owned [`SyntaxNode`] tree with normalized kinds; nothing downstream sees
//! tree-sitter types.

use tree_sitter::Parser as TSParser;

use crate::errors::{EffectscanError, Result};
use crate::features::parsing::domain::{NodeKind, ParseIssue, ParsedModule, SyntaxNode};
use crate::shared::models::Span;
use std::path::Path;

/// Tree-sitter based Python parser
pub struct SyntaxParser;

impl SyntaxParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse Python source into a lowered module tree.
    pub fn parse(&self, source: &str, source_path: Option<&Path>) -> Result<ParsedModule> {
        let mut parser = TSParser::new();
        parser
            .set_language(&tree_sitter_python::language())
            .map_err(|e| EffectscanError::parse(format!("failed to set language: {}", e)))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| EffectscanError::parse("failed to parse source code"))?;

        let root_node = tree.root_node();
        let root = convert_node(&root_node, source);

        let mut errors = Vec::new();
        collect_errors(&root_node, &mut errors);

        Ok(ParsedModule::new(root, source_path.map(Path::to_path_buf)).with_errors(errors))
    }
}

impl Default for SyntaxParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a tree-sitter node to a SyntaxNode
fn convert_node(node: &tree_sitter::Node, source: &str) -> SyntaxNode {
    let kind = NodeKind::from_raw(node.kind());
    let span = node_to_span(node);

    let text = if node.child_count() == 0 {
        Some(source.get(node.byte_range()).unwrap_or("").to_string())
    } else {
        None
    };

    let children: Vec<SyntaxNode> = (0..node.child_count())
        .filter_map(|i| node.child(i))
        .filter(|c| !c.is_extra()) // Skip comments, etc.
        .map(|c| convert_node(&c, source))
        .collect();

    let mut lowered = SyntaxNode::new(kind, span)
        .with_raw_kind(node.kind())
        .with_children(children);
    if let Some(text) = text {
        lowered = lowered.with_text(text);
    }
    lowered
}

fn collect_errors(node: &tree_sitter::Node, errors: &mut Vec<ParseIssue>) {
    if node.is_error() || node.is_missing() {
        errors.push(ParseIssue {
            message: format!("parse error at {:?}", node.kind()),
            span: node_to_span(node),
        });
    }
    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            collect_errors(&child, errors);
        }
    }
}

fn node_to_span(node: &tree_sitter::Node) -> Span {
    let start = node.start_position();
    let end = node.end_position();
    Span::new(
        start.row as u32 + 1,
        start.column as u32,
        end.row as u32 + 1,
        end.column as u32,
    )
}
