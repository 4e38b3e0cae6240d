//! Inference-assisted classification
//!
//! The fallback tier for calls no direct rule recognized. Each candidate
//! definition is checked against the stub knowledge base first (cheap,
//! authoritative); otherwise, while the dive budget lasts, the callee body
//! is re-analyzed and its declared effects are read off the decorators.
//! Every resulting token is re-attributed to the outer call site.

use super::contracts::{get_contracts, literal_string};
use super::handlers::marker_extractor;
use super::registry::ExtractionContext;
use crate::features::markers::domain::{Marker, Resolved, Token};
use crate::features::parsing::domain::{python, FunctionDef, SyntaxNode};
use effectscan_stubs::{Category, SharedStub, StubsManager};

/// Classify a call through the inference oracle.
///
/// Over-approximating by design: tokens from all candidate definitions are
/// unioned. An empty candidate set yields nothing — never an error.
pub fn infer_markers(node: &SyntaxNode, ctx: &ExtractionContext<'_>) -> Vec<Token> {
    let Some(func) = python::call_function(node) else {
        return Vec::new();
    };
    let inferred = ctx.oracle.infer(func);
    if inferred.is_empty() {
        return Vec::new();
    }

    let mut tokens = Vec::new();

    // Stubs are treated as authoritative and cheaper: any stub-sourced
    // token for this call suppresses the dive.
    let mut stub_hit = false;
    if let Some(stubs) = ctx.stubs {
        for resolved in &inferred {
            let Resolved::Function(def) = resolved else {
                continue;
            };
            let Some(stub) = stub_for(def, stubs) else {
                continue;
            };
            for name in stub.borrow().get(&def.name, Category::Has) {
                stub_hit = true;
                tokens.push(Token::at(Marker::from_name(&name), node.span));
            }
        }
    }

    if !stub_hit && ctx.dive {
        for resolved in &inferred {
            let Resolved::Function(def) = resolved else {
                continue;
            };

            // re-analyze the callee body with the dive budget spent
            let nested = marker_extractor().extract(&def.body, &ctx.without_dive());
            tokens.extend(nested.into_iter().map(|t| t.rebase(node.span)));

            // explicitly declared effects
            for (category, args) in get_contracts(&def.decorators) {
                if category != "has" {
                    continue;
                }
                for arg in args {
                    if let Some(value) = literal_string(arg) {
                        tokens.push(Token::at(Marker::from_name(&value), node.span));
                    }
                }
            }
        }
    }

    tokens
}

/// Stub lookup for a resolved definition: by module name first, then by a
/// `.json` sibling of the defining source file.
fn stub_for(def: &FunctionDef, stubs: &StubsManager) -> Option<SharedStub> {
    if let Some(stub) = stubs.get(&def.module_name) {
        return Some(stub);
    }
    let path = def.source_path.as_ref()?.with_extension("json");
    if !path.exists() {
        return None;
    }
    stubs.read(&path).ok()
}
