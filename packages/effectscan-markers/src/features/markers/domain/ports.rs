//! Port for the type-inference oracle
//!
//! The engine never inspects inference results beyond three questions: is
//! this a concrete function definition; is this a bound method and what is
//! the receiver's type; does this instance's type name start with a given
//! prefix. `Resolved` models exactly that surface, so any richer inference
//! backend can plug in behind the trait.

use crate::features::parsing::domain::{FunctionDef, SyntaxNode};
use std::sync::Arc;

/// A candidate resolution of a reference expression
#[derive(Debug, Clone)]
pub enum Resolved {
    /// A concrete function definition
    Function(Arc<FunctionDef>),
    /// A method bound to an instance of the named type
    BoundMethod { receiver_type: String },
    /// An opaque instance with a queryable type name
    Instance { type_name: String },
}

/// Resolves a reference expression to its plausible definitions.
///
/// An empty result is a resolution miss, never an error.
pub trait InferenceOracle {
    fn infer(&self, expr: &SyntaxNode) -> Vec<Resolved>;
}

/// Oracle for syntax-only analyses: resolves nothing.
pub struct NullOracle;

impl InferenceOracle for NullOracle {
    fn infer(&self, _expr: &SyntaxNode) -> Vec<Resolved> {
        Vec::new()
    }
}
