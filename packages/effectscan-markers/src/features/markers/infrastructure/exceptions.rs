//! Raised-exception extraction
//!
//! The sibling ruleset behind stub generation: every `raise` statement with
//! a resolvable exception name yields one `raises` token valued with that
//! name. Bare re-raises and computed exceptions yield nothing.

use super::registry::ExtractionContext;
use crate::features::markers::domain::{Marker, Token};
use crate::features::parsing::domain::{python, NodeKind, SyntaxNode};

pub(super) fn handle_raise(node: &SyntaxNode, _ctx: &ExtractionContext<'_>) -> Vec<Token> {
    for child in &node.children {
        match child.kind {
            NodeKind::Call => {
                let Some(name) = python::call_function(child).and_then(python::dotted_name)
                else {
                    return Vec::new();
                };
                return vec![Token::at(Marker::Raises, node.span).with_value(name)];
            }
            NodeKind::Name | NodeKind::Attribute => {
                let Some(name) = python::dotted_name(child) else {
                    return Vec::new();
                };
                return vec![Token::at(Marker::Raises, node.span).with_value(name)];
            }
            _ => continue,
        }
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::super::handlers::exception_extractor;
    use super::super::registry::ExtractionContext;
    use crate::features::markers::domain::{Marker, NullOracle, Token};
    use crate::features::parsing::infrastructure::SyntaxParser;

    fn extract(code: &str) -> Vec<Token> {
        let root = SyntaxParser::new().parse(code, None).unwrap().root;
        let ctx = ExtractionContext::new(&NullOracle);
        exception_extractor().extract(&root, &ctx)
    }

    #[test]
    fn test_raise_with_call() {
        let tokens = extract("raise ValueError('bad')");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].marker, Marker::Raises);
        assert_eq!(tokens[0].value.as_deref(), Some("ValueError"));
    }

    #[test]
    fn test_raise_bare_name() {
        let tokens = extract("raise KeyError");
        assert_eq!(tokens[0].value.as_deref(), Some("KeyError"));
    }

    #[test]
    fn test_raise_dotted_name() {
        let tokens = extract("raise errors.ValidationError('x')");
        assert_eq!(tokens[0].value.as_deref(), Some("errors.ValidationError"));
    }

    #[test]
    fn test_bare_reraise_yields_nothing() {
        assert!(extract("raise").is_empty());
    }

    #[test]
    fn test_raises_in_branches_are_all_collected() {
        let code = "\
if a:
    raise ValueError('a')
else:
    raise KeyError('b')
";
        let tokens = extract(code);
        let values: Vec<_> = tokens.iter().filter_map(|t| t.value.as_deref()).collect();
        assert_eq!(values, vec!["ValueError", "KeyError"]);
    }
}
