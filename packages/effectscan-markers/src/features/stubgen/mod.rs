//! Stub Generation Feature
//!
//! Offline pipeline populating the stub knowledge base from Python
//! sources.

pub mod application;

pub use application::generate_stub;
