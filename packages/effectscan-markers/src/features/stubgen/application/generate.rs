//! Stub generation pipeline
//!
//! Populates the knowledge base: scans a source file's top-level functions,
//! extracts their raised-exception tokens, and persists them under the
//! module's `raises` category. Library functions analyzed this way once
//! never need re-parsing during later runs.

use crate::errors::{EffectscanError, Result};
use crate::features::markers::domain::NullOracle;
use crate::features::markers::infrastructure::{exception_extractor, ExtractionContext};
use crate::features::parsing::domain::python;
use crate::features::parsing::infrastructure::SyntaxParser;
use effectscan_stubs::{resolve_module_name, Category, StubsManager};
use std::fs;
use std::path::{Path, PathBuf};

/// Generate (or regenerate) the stub for one Python source file.
///
/// Returns the path of the written stub. Anything but a `.py` input is a
/// configuration error.
pub fn generate_stub(path: &Path, stubs: &StubsManager) -> Result<PathBuf> {
    if path.extension().and_then(|e| e.to_str()) != Some("py") {
        return Err(EffectscanError::config(format!(
            "invalid Python file extension: {}",
            path.display()
        )));
    }

    let source = fs::read_to_string(path)?;
    let module = SyntaxParser::new().parse(&source, Some(path))?;
    let module_name = resolve_module_name(path, Some(stubs.root()));

    let stub = stubs.create(path);
    let ctx = ExtractionContext::new(&NullOracle);
    for def in python::top_level_functions(&module.root, &module_name, Some(path)) {
        for token in exception_extractor().extract(&def.body, &ctx) {
            if let Some(value) = token.value {
                stub.borrow_mut().add(&def.name, Category::Raises, value)?;
            }
        }
    }
    stub.borrow().dump()?;

    let written = stub.borrow().path.clone();
    tracing::info!("stub_generated path={}", written.display());
    Ok(written)
}
