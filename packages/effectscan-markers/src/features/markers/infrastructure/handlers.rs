//! Registered marker handlers
//!
//! Builds the two engine rulesets on top of the dispatch registry: the full
//! marker extractor and the raised-exception extractor used by stub
//! generation.

use super::call_rules::{self, CallSite, RuleOutcome, CALL_RULES};
use super::exceptions::handle_raise;
use super::infer_markers::infer_markers;
use super::registry::{ExtractionContext, Extractor};
use crate::features::markers::domain::{Marker, Token};
use crate::features::parsing::domain::{python, NodeKind, SyntaxNode};
use once_cell::sync::Lazy;

/// The marker engine: one shared, immutable registry per process.
pub fn marker_extractor() -> &'static Extractor {
    static MARKERS: Lazy<Extractor> = Lazy::new(|| {
        let mut extractor = Extractor::new();
        extractor.register(&[NodeKind::Global, NodeKind::Nonlocal], handle_scope_mutation);
        extractor.register(&[NodeKind::Import, NodeKind::ImportFrom], handle_import);
        extractor.register(&[NodeKind::Call], handle_call);
        extractor.register(&[NodeKind::With], handle_with);
        extractor
    });
    &MARKERS
}

/// The raised-exception ruleset feeding the stub generator.
pub fn exception_extractor() -> &'static Extractor {
    static EXCEPTIONS: Lazy<Extractor> = Lazy::new(|| {
        let mut extractor = Extractor::new();
        extractor.register(&[NodeKind::Raise], handle_raise);
        extractor
    });
    &EXCEPTIONS
}

/// `global` / `nonlocal` — scope mutation, classified purely syntactically.
fn handle_scope_mutation(node: &SyntaxNode, _ctx: &ExtractionContext<'_>) -> Vec<Token> {
    vec![Token::at(Marker::Global, node.span)]
}

/// `import` / `from … import` statements.
fn handle_import(node: &SyntaxNode, _ctx: &ExtractionContext<'_>) -> Vec<Token> {
    vec![Token::at(Marker::Import, node.span)]
}

/// Calls: the direct rule tier first, then the inference tier.
fn handle_call(node: &SyntaxNode, ctx: &ExtractionContext<'_>) -> Vec<Token> {
    let Some(name) = python::call_function(node).and_then(python::dotted_name) else {
        return Vec::new();
    };
    let site = CallSite { node, name: &name };
    for rule in CALL_RULES {
        match rule(&site, ctx) {
            RuleOutcome::Token(token) => return vec![token],
            RuleOutcome::Claimed => return Vec::new(),
            RuleOutcome::Pass => {}
        }
    }
    infer_markers(node, ctx)
}

/// Resource-acquisition blocks: the first with-item that opens a file or
/// writes through a pathlib receiver yields one token at the statement.
fn handle_with(node: &SyntaxNode, ctx: &ExtractionContext<'_>) -> Vec<Token> {
    for item in python::with_items(node) {
        if call_rules::pathlib_write(item, ctx) {
            return vec![Token::at(Marker::Write, node.span).with_value("Path.open")];
        }
        if item.kind != NodeKind::Call {
            continue;
        }
        let Some(name) = python::call_function(item).and_then(python::dotted_name) else {
            continue;
        };
        if name == "open" {
            let marker = if call_rules::open_mode_is_write(item) {
                Marker::Write
            } else {
                Marker::Read
            };
            return vec![Token::at(marker, node.span).with_value("open")];
        }
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::markers::domain::NullOracle;
    use crate::features::parsing::infrastructure::SyntaxParser;

    fn extract(code: &str) -> Vec<Token> {
        let root = SyntaxParser::new().parse(code, None).unwrap().root;
        let ctx = ExtractionContext::new(&NullOracle);
        marker_extractor().extract(&root, &ctx)
    }

    #[test]
    fn test_global_statement_single_token() {
        let tokens = extract("global x");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].marker, Marker::Global);
        assert_eq!((tokens[0].line, tokens[0].col), (1, 0));
    }

    #[test]
    fn test_nonlocal_statement_single_token() {
        let tokens = extract("nonlocal y");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].marker, Marker::Global);
    }

    #[test]
    fn test_import_statements() {
        let tokens = extract("import os\nfrom sys import path\n");
        assert_eq!(tokens.len(), 2);
        assert!(tokens.iter().all(|t| t.marker == Marker::Import));
    }

    #[test]
    fn test_call_in_assignment_is_found() {
        let tokens = extract("handle = open('x', 'w')");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].marker, Marker::Write);
    }

    #[test]
    fn test_with_open_yields_one_token_at_statement() {
        let tokens = extract("with open('f') as h:\n    pass\n");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].marker, Marker::Read);
        assert_eq!(tokens[0].line, 1);
    }

    #[test]
    fn test_with_open_write_mode() {
        let tokens = extract("with open('f', 'w') as h:\n    pass\n");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].marker, Marker::Write);
    }

    #[test]
    fn test_with_body_is_still_walked() {
        let tokens = extract("with lock:\n    print('x')\n");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].marker, Marker::Stdout);
        assert_eq!(tokens[0].line, 2);
    }

    #[test]
    fn test_unresolvable_callee_produces_nothing() {
        assert!(extract("callbacks[0]()").is_empty());
    }
}
