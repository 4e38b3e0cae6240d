//! Language-neutral syntax node representation
//!
//! Every tree producer in this crate — the syntax-only parse and the
//! scope-annotated parse — lowers to the same owned node type, keyed by one
//! normalized [`NodeKind`] enumeration. The extractor registry dispatches on
//! `NodeKind` alone, so handlers work regardless of which tree family
//! produced a node.

use crate::shared::models::Span;

/// Normalized node kind
///
/// Raw grammar kinds from either tree producer fold into this enumeration
/// through [`NodeKind::from_raw`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    // Structure
    Module,
    Block,

    // Definitions
    FunctionDef,
    DecoratedDef,
    ClassDef,
    Lambda,

    // Statements
    Global,
    Nonlocal,
    Import,
    ImportFrom,
    With,
    Raise,
    ExpressionStmt,
    Assignment,
    Return,
    If,
    For,
    While,
    Try,

    // Expressions
    Call,
    Name,
    Attribute,
    Str,
    StrContent,
    Keyword,
    Arguments,

    // Clauses
    WithClause,
    WithItem,
    AsPattern,
    Decorator,

    Comment,

    // Unknown
    Other(String),
}

impl NodeKind {
    /// Normalize a raw grammar kind tag.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "module" => NodeKind::Module,
            "block" => NodeKind::Block,

            "function_definition" => NodeKind::FunctionDef,
            "decorated_definition" => NodeKind::DecoratedDef,
            "class_definition" => NodeKind::ClassDef,
            "lambda" => NodeKind::Lambda,

            "global_statement" => NodeKind::Global,
            "nonlocal_statement" => NodeKind::Nonlocal,
            "import_statement" => NodeKind::Import,
            "import_from_statement" | "future_import_statement" => NodeKind::ImportFrom,
            "with_statement" => NodeKind::With,
            "raise_statement" => NodeKind::Raise,
            "expression_statement" => NodeKind::ExpressionStmt,
            "assignment" | "augmented_assignment" => NodeKind::Assignment,
            "return_statement" => NodeKind::Return,
            "if_statement" => NodeKind::If,
            "for_statement" => NodeKind::For,
            "while_statement" => NodeKind::While,
            "try_statement" => NodeKind::Try,

            "call" => NodeKind::Call,
            "identifier" => NodeKind::Name,
            "attribute" => NodeKind::Attribute,
            "string" => NodeKind::Str,
            "string_content" => NodeKind::StrContent,
            "keyword_argument" => NodeKind::Keyword,
            "argument_list" => NodeKind::Arguments,

            "with_clause" => NodeKind::WithClause,
            "with_item" => NodeKind::WithItem,
            "as_pattern" => NodeKind::AsPattern,
            "decorator" => NodeKind::Decorator,

            "comment" => NodeKind::Comment,

            other => NodeKind::Other(other.to_string()),
        }
    }

    /// Definitions introduce a new body; the statement walk does not
    /// descend into them.
    pub fn is_definition(&self) -> bool {
        matches!(
            self,
            NodeKind::FunctionDef
                | NodeKind::DecoratedDef
                | NodeKind::ClassDef
                | NodeKind::Lambda
        )
    }
}

/// Owned lowering of a parsed node
#[derive(Debug, Clone)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub span: Span,
    pub text: Option<String>,
    pub children: Vec<SyntaxNode>,

    /// Original grammar kind (for debugging)
    pub raw_kind: Option<String>,
}

impl SyntaxNode {
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Self {
            kind,
            span,
            text: None,
            children: Vec::new(),
            raw_kind: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_children(mut self, children: Vec<SyntaxNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_raw_kind(mut self, raw_kind: impl Into<String>) -> Self {
        self.raw_kind = Some(raw_kind.into());
        self
    }

    /// Find first child of given kind
    pub fn find_child(&self, kind: &NodeKind) -> Option<&SyntaxNode> {
        self.children.iter().find(|c| &c.kind == kind)
    }

    /// Find all children of given kind
    pub fn find_children(&self, kind: &NodeKind) -> Vec<&SyntaxNode> {
        self.children.iter().filter(|c| &c.kind == kind).collect()
    }

    /// Get text content
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}
