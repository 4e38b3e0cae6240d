mod analyze_module;

pub use analyze_module::{FunctionMarkers, ModuleAnalyzer};
