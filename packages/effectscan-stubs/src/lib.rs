//! effectscan-stubs — persisted effect knowledge base
//!
//! Stub files record previously-observed contracts (`raises`, `has`) of
//! functions whose source is not available or not worth re-analyzing. The
//! marker engine consults them through a per-run [`StubsManager`]; the
//! offline generator populates them.
//!
//! ## On-disk format
//!
//! A stub is a JSON object keyed by function name; each value maps a
//! contract category to an array of strings:
//!
//! ```json
//! { "fetch": { "has": ["network"], "raises": ["ConnectionError"] } }
//! ```
//!
//! The file extension must be `.json`; anything else is a configuration
//! error. Missing files and missing entries are classification outcomes,
//! not errors.

pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{Category, StubFile};
pub use error::{Result, StubError};
pub use infrastructure::module_path::resolve_module_name;
pub use infrastructure::{SharedStub, StubsManager};
