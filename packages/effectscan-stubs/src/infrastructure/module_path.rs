//! Module-name resolution
//!
//! Maps a filesystem path to the dotted module name it represents. The walk
//! follows Python packaging conventions: ancestors are climbed while an
//! `__init__.py` package marker is present, and the first unmarked ancestor
//! is the package root.

use std::path::Path;

/// Resolve the dotted module name for a source or stub path.
///
/// Rules, in order:
/// - a path directly under `builtin_root` resolves by file stem alone;
/// - a stem already containing a dot is treated as already-qualified;
/// - a file whose directory has no `__init__.py` is a bare module;
/// - otherwise the ancestor chain is walked upward and the parts relative
///   to the first unmarked ancestor are joined with dots.
pub fn resolve_module_name(path: &Path, builtin_root: Option<&Path>) -> String {
    let stem = file_stem(path);

    if let Some(root) = builtin_root {
        if path.parent() == Some(root) {
            return stem;
        }
    }
    if stem.contains('.') {
        return stem;
    }

    let Some(parent) = path.parent() else {
        return stem;
    };
    if !parent.join("__init__.py").exists() {
        return stem;
    }

    for ancestor in path.ancestors().skip(1) {
        if !ancestor.join("__init__.py").exists() {
            if let Ok(relative) = path.strip_prefix(ancestor) {
                let parts: Vec<String> = relative
                    .with_extension("")
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect();
                return parts.join(".");
            }
        }
    }
    stem
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolves_by_stem_under_builtin_root() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("marshmallow.json");
        fs::write(&path, "{}").unwrap();

        let name = resolve_module_name(&path, Some(dir.path()));
        assert_eq!(name, "marshmallow");
    }

    #[test]
    fn test_dotted_stem_is_already_qualified() {
        let name = resolve_module_name(Path::new("/tmp/pkg.sub.mod.json"), None);
        assert_eq!(name, "pkg.sub.mod");
    }

    #[test]
    fn test_walks_package_markers() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("pkg").join("sub");
        fs::create_dir_all(&sub).unwrap();
        fs::write(dir.path().join("pkg").join("__init__.py"), "").unwrap();
        fs::write(sub.join("__init__.py"), "").unwrap();
        let module = sub.join("mod.py");
        fs::write(&module, "").unwrap();

        let name = resolve_module_name(&module, None);
        assert_eq!(name, "pkg.sub.mod");
    }

    #[test]
    fn test_no_markers_is_bare_module() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("pkg").join("sub");
        fs::create_dir_all(&sub).unwrap();
        let module = sub.join("mod.py");
        fs::write(&module, "").unwrap();

        let name = resolve_module_name(&module, None);
        assert_eq!(name, "mod");
    }

    #[test]
    fn test_partial_markers_stop_at_package_root() {
        // only pkg/sub/ is marked: the package root is pkg/, so the module
        // is sub.mod
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("pkg").join("sub");
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join("__init__.py"), "").unwrap();
        let module = sub.join("mod.py");
        fs::write(&module, "").unwrap();

        let name = resolve_module_name(&module, None);
        assert_eq!(name, "sub.mod");
    }
}
