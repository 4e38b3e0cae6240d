//! Parsed module representation

use super::syntax_node::SyntaxNode;
use crate::shared::models::Span;
use std::path::PathBuf;
use std::sync::Arc;

/// Output of the syntax-only parse
#[derive(Debug, Clone)]
pub struct ParsedModule {
    /// Root node (the module)
    pub root: SyntaxNode,

    /// Source path, when parsing came from a file
    pub source_path: Option<PathBuf>,

    /// Parse errors (if any). The engine is a best-effort classifier and
    /// keeps going on damaged regions; callers may choose to bail.
    pub errors: Vec<ParseIssue>,
}

/// Parse error
#[derive(Debug, Clone)]
pub struct ParseIssue {
    pub message: String,
    pub span: Span,
}

impl ParsedModule {
    pub fn new(root: SyntaxNode, source_path: Option<PathBuf>) -> Self {
        Self {
            root,
            source_path,
            errors: Vec::new(),
        }
    }

    pub fn with_errors(mut self, errors: Vec<ParseIssue>) -> Self {
        self.errors = errors;
        self
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// A concrete function definition, as resolved by a tree producer or an
/// inference oracle.
///
/// Carries everything the engine inspects during a dive: the body to
/// re-analyze, the decorators to scan for declared effects, and the module
/// identity for stub lookups.
#[derive(Debug, Clone)]
pub struct FunctionDef {
    pub name: String,
    pub module_name: String,
    pub source_path: Option<PathBuf>,
    pub body: SyntaxNode,
    pub decorators: Vec<SyntaxNode>,
    pub span: Span,
}

impl FunctionDef {
    pub fn shared(self) -> Arc<FunctionDef> {
        Arc::new(self)
    }
}
