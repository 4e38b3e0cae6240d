//! On-disk stub round-trip tests

use effectscan_stubs::{Category, StubFile, StubsManager};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn round_trip_preserves_value_sets() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mod.json");

    let mut stub = StubFile::new(&path);
    stub.add("parse", Category::Raises, "ValueError").unwrap();
    stub.add("parse", Category::Raises, "KeyError").unwrap();
    stub.dump().unwrap();

    let mut reloaded = StubFile::new(&path);
    reloaded.load().unwrap();

    let values = reloaded.get("parse", Category::Raises);
    let expected: std::collections::BTreeSet<String> = ["KeyError", "ValueError"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(values, expected);

    // duplicate add must not change the set's size
    reloaded.add("parse", Category::Raises, "KeyError").unwrap();
    assert_eq!(reloaded.get("parse", Category::Raises).len(), 2);
}

#[test]
fn dump_replaces_the_whole_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mod.json");
    fs::write(&path, r#"{"stale": {"raises": ["RuntimeError"]}}"#).unwrap();

    let mut stub = StubFile::new(&path);
    stub.add("fresh", Category::Raises, "ValueError").unwrap();
    stub.dump().unwrap();

    let mut reloaded = StubFile::new(&path);
    reloaded.load().unwrap();
    assert!(reloaded.get("stale", Category::Raises).is_empty());
    assert_eq!(reloaded.get("fresh", Category::Raises).len(), 1);
}

#[test]
fn manager_resolves_package_hierarchy() {
    let dir = TempDir::new().unwrap();
    let sub = dir.path().join("pkg").join("sub");
    fs::create_dir_all(&sub).unwrap();
    fs::write(dir.path().join("pkg").join("__init__.py"), "").unwrap();
    fs::write(sub.join("__init__.py"), "").unwrap();
    fs::write(sub.join("mod.json"), "{}").unwrap();

    let manager = StubsManager::with_root(Path::new("/nonexistent-stub-root"));
    let stub = manager.read(&sub.join("mod.json")).unwrap();
    assert!(stub.borrow().is_empty());

    // the same file is cached under pkg.sub.mod: a second read shares it
    let again = manager.read(&sub.join("mod.json")).unwrap();
    assert!(std::rc::Rc::ptr_eq(&stub, &again));
}

#[test]
fn shipped_stubs_parse() {
    let manager = StubsManager::new();
    let stub = manager.get("requests").expect("requests.json ships with the crate");
    assert!(stub
        .borrow()
        .get("get", Category::Has)
        .contains("network"));
}
