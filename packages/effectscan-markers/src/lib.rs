/*
 * effectscan-markers — side-effect marker extraction engine
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Span)
 * - features/    : Vertical slices (parsing → markers → stubgen)
 *
 * Given a parsed Python expression, the engine statically determines which
 * externally observable effect categories it may trigger — standard-stream
 * I/O, file read/write, process control, randomness, clock access, module
 * import, scope mutation. Three knowledge sources are reconciled:
 * syntactic heuristics on call names and arguments, a pluggable
 * type-inference oracle, and a persisted stub knowledge base
 * (effectscan-stubs). The output feeds a contract checker that verifies a
 * function's declared effect set against its actual behavior.
 */

pub mod errors;
pub mod features;
pub mod shared;

pub use errors::{EffectscanError, Result};
pub use features::markers::application::{FunctionMarkers, ModuleAnalyzer};
pub use features::markers::domain::{InferenceOracle, Marker, NullOracle, Resolved, Token};
pub use features::markers::infrastructure::{
    exception_extractor, marker_extractor, ExtractionContext, Extractor,
};
pub use features::parsing::{
    AnnotatedModule, FunctionDef, ModuleScope, NodeKind, ParsedModule, SyntaxNode, SyntaxParser,
};
pub use features::stubgen::generate_stub;
pub use shared::models::Span;
