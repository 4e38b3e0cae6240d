mod call_rules;
mod contracts;
mod exceptions;
mod handlers;
mod infer_markers;
mod registry;

pub use contracts::{get_contracts, literal_string};
pub use handlers::{exception_extractor, marker_extractor};
pub use registry::{ExtractionContext, Extractor, Handler};
