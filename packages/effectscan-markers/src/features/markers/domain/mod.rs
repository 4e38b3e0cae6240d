mod marker;
mod ports;
mod token;

pub use marker::Marker;
pub use ports::{InferenceOracle, NullOracle, Resolved};
pub use token::Token;
