mod parsed_module;
pub mod python;
mod syntax_node;

pub use parsed_module::{FunctionDef, ParseIssue, ParsedModule};
pub use python::*;
pub use syntax_node::{NodeKind, SyntaxNode};
