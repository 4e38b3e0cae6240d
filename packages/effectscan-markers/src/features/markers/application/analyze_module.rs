//! Module analysis use case
//!
//! The seam a contract checker consumes: parse a module, bind its scope,
//! and report the extracted markers per named function definition.

use crate::errors::{EffectscanError, Result};
use crate::features::markers::domain::Token;
use crate::features::markers::infrastructure::{marker_extractor, ExtractionContext};
use crate::features::parsing::infrastructure::AnnotatedModule;
use crate::shared::models::Span;
use effectscan_stubs::StubsManager;
use std::fs;
use std::path::Path;

/// Markers extracted from one function definition.
#[derive(Debug, Clone)]
pub struct FunctionMarkers {
    pub name: String,
    pub span: Span,
    pub tokens: Vec<Token>,
}

/// Module analysis use case
pub struct ModuleAnalyzer;

impl ModuleAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze Python source, with the dive budget available.
    pub fn analyze_source(
        &self,
        source: &str,
        source_path: Option<&Path>,
        stubs: Option<&StubsManager>,
    ) -> Result<Vec<FunctionMarkers>> {
        let annotated = AnnotatedModule::parse(source, source_path)?;
        tracing::debug!(
            "module_analyzed module={} functions={}",
            annotated.scope.module_name,
            annotated.functions.len()
        );

        let mut ctx = ExtractionContext::new(&annotated.scope);
        if let Some(stubs) = stubs {
            ctx = ctx.with_stubs(stubs);
        }

        Ok(annotated
            .functions
            .iter()
            .map(|def| FunctionMarkers {
                name: def.name.clone(),
                span: def.span,
                tokens: marker_extractor().extract(&def.body, &ctx),
            })
            .collect())
    }

    /// Analyze a `.py` file on disk.
    pub fn analyze_file(
        &self,
        path: &Path,
        stubs: Option<&StubsManager>,
    ) -> Result<Vec<FunctionMarkers>> {
        if path.extension().and_then(|e| e.to_str()) != Some("py") {
            return Err(EffectscanError::config(format!(
                "invalid Python file extension: {}",
                path.display()
            )));
        }
        let source = fs::read_to_string(path)?;
        self.analyze_source(&source, Some(path), stubs)
    }
}

impl Default for ModuleAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
