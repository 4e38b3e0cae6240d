mod scope;
mod tree_sitter_parser;

pub use scope::{AnnotatedModule, ModuleScope};
pub use tree_sitter_parser::SyntaxParser;
