mod generate;

pub use generate::generate_stub;
