mod manager;
pub mod module_path;

pub use manager::{SharedStub, StubsManager};
