//! The uniform output unit of every ruleset

use super::Marker;
use crate::shared::models::Span;
use serde::{Deserialize, Serialize};

/// One detected effect occurrence
///
/// Created once, never mutated. For calls resolved through a dive or a
/// stub, the location is the *outer* call site, not the inner effectful
/// statement — see [`Token::rebase`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub marker: Marker,
    pub line: u32,
    pub col: u32,
    /// Free-form diagnostic payload (resolved call name, matched
    /// construct); not semantically load-bearing.
    pub value: Option<String>,
}

impl Token {
    pub fn new(marker: Marker, line: u32, col: u32) -> Self {
        Self {
            marker,
            line,
            col,
            value: None,
        }
    }

    /// Token anchored at a span's start position.
    pub fn at(marker: Marker, span: Span) -> Self {
        Self::new(marker, span.start_line, span.start_col)
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Re-attribute a transitive token to the call site that reached it.
    pub fn rebase(mut self, span: Span) -> Self {
        self.line = span.start_line;
        self.col = span.start_col;
        self
    }
}
