//! Parsing Feature
//!
//! Python source → lowered syntax trees. Two producers share one node
//! model: the syntax-only parse, and the scope-annotated parse that powers
//! the bundled inference oracle.

pub mod domain;
pub mod infrastructure;

pub use domain::{FunctionDef, NodeKind, ParsedModule, SyntaxNode};
pub use infrastructure::{AnnotatedModule, ModuleScope, SyntaxParser};
