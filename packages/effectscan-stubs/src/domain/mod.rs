mod stub_file;

pub use stub_file::{Category, StubFile};
