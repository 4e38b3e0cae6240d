//! Marker Extraction Feature
//!
//! Classifies expressions into side-effect categories.
//!
//! ## Tiers
//! - **Direct rules**: fixed-priority name/argument heuristics on calls,
//!   plus purely syntactic statement handlers
//! - **Inference tier**: stub knowledge base first, then a one-level dive
//!   into resolved callee bodies and their declared-effect decorators
//!
//! Classification is over-approximating by design: false positives are
//! preferred over false negatives for contract checking.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::*;
pub use domain::*;
pub use infrastructure::*;
