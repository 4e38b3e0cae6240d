//! Extractor dispatch registry
//!
//! A node-kind → handler table plus the statement walk that drives it.
//! Handlers are pure functions from a node and shared context to tokens;
//! they never fail — malformed input degrades to "no token produced".

use crate::features::markers::domain::{InferenceOracle, Token};
use crate::features::parsing::domain::{NodeKind, SyntaxNode};
use ahash::AHashMap;
use effectscan_stubs::StubsManager;

/// Handler invoked for every node of its registered kinds.
pub type Handler = fn(&SyntaxNode, &ExtractionContext<'_>) -> Vec<Token>;

/// Shared context threaded through every dispatch call.
///
/// The dive budget is an explicit parameter rather than shared state: a
/// recursive body analysis runs with `dive = false`, so the call-graph
/// traversal is bounded to one level by construction.
pub struct ExtractionContext<'a> {
    pub oracle: &'a dyn InferenceOracle,
    pub stubs: Option<&'a StubsManager>,
    pub dive: bool,
}

impl<'a> ExtractionContext<'a> {
    pub fn new(oracle: &'a dyn InferenceOracle) -> Self {
        Self {
            oracle,
            stubs: None,
            dive: true,
        }
    }

    pub fn with_stubs(mut self, stubs: &'a StubsManager) -> Self {
        self.stubs = Some(stubs);
        self
    }

    /// The same context with the dive budget spent.
    pub fn without_dive(&self) -> ExtractionContext<'a> {
        ExtractionContext {
            oracle: self.oracle,
            stubs: self.stubs,
            dive: false,
        }
    }
}

/// Node-kind → handler dispatch table.
pub struct Extractor {
    handlers: AHashMap<NodeKind, Handler>,
}

impl Extractor {
    pub fn new() -> Self {
        Self {
            handlers: AHashMap::new(),
        }
    }

    /// Associate one or more node kinds with a handler.
    pub fn register(&mut self, kinds: &[NodeKind], handler: Handler) {
        for kind in kinds {
            self.handlers.insert(kind.clone(), handler);
        }
    }

    /// Invoke the handler registered for this node's kind, if any.
    pub fn dispatch(&self, node: &SyntaxNode, ctx: &ExtractionContext<'_>) -> Vec<Token> {
        match self.handlers.get(&node.kind) {
            Some(handler) => handler(node, ctx),
            None => Vec::new(),
        }
    }

    /// Walk a statement tree and dispatch every reachable node.
    ///
    /// The walk descends into compound-statement bodies and expression
    /// constituents, but not into nested definitions (defining a function
    /// is effect-free; the dive attributes their effects to call sites).
    /// With-clause items belong to the `With` handler and are excluded
    /// from generic dispatch.
    pub fn extract(&self, node: &SyntaxNode, ctx: &ExtractionContext<'_>) -> Vec<Token> {
        let mut out = Vec::new();
        self.visit(node, ctx, &mut out);
        out
    }

    fn visit(&self, node: &SyntaxNode, ctx: &ExtractionContext<'_>, out: &mut Vec<Token>) {
        out.extend(self.dispatch(node, ctx));

        let children: &[SyntaxNode] = match node.kind {
            NodeKind::With => node
                .find_child(&NodeKind::Block)
                .map(|block| block.children.as_slice())
                .unwrap_or(&[]),
            _ => node.children.as_slice(),
        };
        for child in children {
            if child.kind.is_definition() {
                continue;
            }
            self.visit(child, ctx, out);
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}
