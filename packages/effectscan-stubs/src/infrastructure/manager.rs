//! Stub manager
//!
//! Process-scoped cache of stub files, one instance per analysis run. Each
//! resolved module name maps to exactly one live `StubFile` for the
//! manager's lifetime, so repeated `read`/`create` calls are idempotent.
//!
//! The cache is deliberately single-threaded (`Rc`/`RefCell`, so `!Sync`):
//! `dump` replaces the whole backing file with no merge step, and parallel
//! analysis must give each worker its own manager.

use crate::domain::StubFile;
use crate::error::{Result, StubError};
use crate::infrastructure::module_path::resolve_module_name;
use ahash::AHashMap;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// A cached stub file handle.
pub type SharedStub = Rc<RefCell<StubFile>>;

/// Per-run stub cache with lazy loading.
pub struct StubsManager {
    root: PathBuf,
    modules: RefCell<AHashMap<String, SharedStub>>,
}

impl StubsManager {
    /// Manager over the built-in stubs shipped with this crate.
    pub fn new() -> Self {
        Self::with_root(builtin_root())
    }

    /// Manager over an explicit built-in stub root.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            modules: RefCell::new(AHashMap::new()),
        }
    }

    /// Location of the built-in, shipped stub files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load the stub file at `path`, caching it under its resolved module
    /// name. Loading anything but a `.json` file is a configuration error.
    pub fn read(&self, path: &Path) -> Result<SharedStub> {
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            return Err(StubError::config(format!(
                "invalid stub file extension: {}",
                path.display()
            )));
        }
        let module_name = resolve_module_name(path, Some(&self.root));
        if let Some(stub) = self.modules.borrow().get(&module_name) {
            return Ok(stub.clone());
        }

        let mut stub = StubFile::new(path);
        stub.load()?;
        tracing::debug!("stub_read module={}", module_name);

        let stub = Rc::new(RefCell::new(stub));
        self.modules
            .borrow_mut()
            .insert(module_name, stub.clone());
        Ok(stub)
    }

    /// Register an empty stub for `path` without touching the disk. A `.py`
    /// source path is mapped to its sibling `.json` stub path.
    pub fn create(&self, path: &Path) -> SharedStub {
        let path = if path.extension().and_then(|e| e.to_str()) == Some("py") {
            path.with_extension("json")
        } else {
            path.to_path_buf()
        };
        let module_name = resolve_module_name(&path, Some(&self.root));
        self.modules
            .borrow_mut()
            .entry(module_name)
            .or_insert_with(|| Rc::new(RefCell::new(StubFile::new(path))))
            .clone()
    }

    /// Look up a stub by module name, falling back to the built-in root.
    ///
    /// `None` means "no knowledge available" — callers must not treat it as
    /// an error. A built-in stub that exists but fails to load degrades to
    /// `None` with a warning rather than aborting the analysis.
    pub fn get(&self, module_name: &str) -> Option<SharedStub> {
        if let Some(stub) = self.modules.borrow().get(module_name) {
            return Some(stub.clone());
        }
        let path = self.root.join(format!("{}.json", module_name));
        if !path.exists() {
            return None;
        }
        match self.read(&path) {
            Ok(stub) => Some(stub),
            Err(err) => {
                tracing::warn!("stub_load_failed module={} error={}", module_name, err);
                None
            }
        }
    }
}

impl Default for StubsManager {
    fn default() -> Self {
        Self::new()
    }
}

fn builtin_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("stubs")
}
