//! End-to-end marker extraction tests
//!
//! Real Python snippets through the full pipeline: parse, bind scope,
//! extract per function.

use effectscan_markers::{Marker, ModuleAnalyzer, Token};
use effectscan_stubs::StubsManager;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn tokens_of(body: &str) -> Vec<Token> {
    let source = format!("def probe():\n{}", indent(body));
    let analyzer = ModuleAnalyzer::new();
    let mut results = analyzer.analyze_source(&source, None, None).unwrap();
    results.remove(0).tokens
}

fn markers_of(body: &str) -> Vec<Marker> {
    tokens_of(body).into_iter().map(|t| t.marker).collect()
}

fn indent(body: &str) -> String {
    body.lines()
        .map(|l| format!("    {}\n", l))
        .collect::<String>()
}

#[test]
fn open_mode_matrix() {
    assert_eq!(markers_of("open('x', 'r')"), vec![Marker::Read]);
    assert_eq!(markers_of("open('x')"), vec![Marker::Read]);
    assert_eq!(markers_of("open('x', mode='r')"), vec![Marker::Read]);
    assert_eq!(markers_of("open('x', 'w')"), vec![Marker::Write]);
    assert_eq!(markers_of("open('x', mode='rw')"), vec![Marker::Write]);
}

#[test]
fn print_stream_routing() {
    assert_eq!(markers_of("print('y')"), vec![Marker::Stdout]);
    assert_eq!(
        markers_of("print('y', file=sys.stderr)"),
        vec![Marker::Stderr]
    );
    assert_eq!(markers_of("print('y', file=some_custom_stream)"), vec![]);
}

#[test]
fn random_direct_and_inferred() {
    assert_eq!(markers_of("random.randint(1, 10)"), vec![Marker::Random]);

    // a bare exported name bound to a random.Random instance
    let source = "\
import random

rng = random.Random()
seed = rng.seed

def probe():
    seed(0)
";
    let analyzer = ModuleAnalyzer::new();
    let results = analyzer.analyze_source(source, None, None).unwrap();
    let markers: Vec<_> = results[0].tokens.iter().map(|t| t.marker.clone()).collect();
    assert_eq!(markers, vec![Marker::Random]);

    // the identically-named local function is not bound to that type
    let source = "\
def seed(x):
    return x

def probe():
    seed(0)
";
    let results = analyzer.analyze_source(source, None, None).unwrap();
    let probe = results.iter().find(|f| f.name == "probe").unwrap();
    assert!(!probe.tokens.iter().any(|t| t.marker == Marker::Random));
}

#[test]
fn syscalls_exact_and_prefix() {
    assert_eq!(markers_of("os.system('ls')"), vec![Marker::Syscall]);
    assert_eq!(markers_of("subprocess.run(['ls'])"), vec![Marker::Syscall]);
    assert_eq!(
        markers_of("os.execvp('ls', ['ls'])"),
        vec![Marker::Syscall]
    );
}

#[test]
fn time_accessors() {
    assert_eq!(markers_of("time.time()"), vec![Marker::Time]);
    assert_eq!(markers_of("datetime.datetime.now()"), vec![Marker::Time]);
}

#[test]
fn scope_mutation_statements() {
    let global = tokens_of("global x");
    assert_eq!(global.len(), 1);
    assert_eq!(global[0].marker, Marker::Global);
    assert_eq!(global[0].line, 2);

    let nonlocal = tokens_of("nonlocal y");
    assert_eq!(nonlocal.len(), 1);
    assert_eq!(nonlocal[0].marker, Marker::Global);
}

#[test]
fn import_statements_and_dynamic_import() {
    assert_eq!(markers_of("import os"), vec![Marker::Import]);
    assert_eq!(markers_of("from sys import path"), vec![Marker::Import]);
    assert_eq!(markers_of("__import__('os')"), vec![Marker::Import]);
}

#[test]
fn dive_reattributes_to_the_call_site() {
    let source = "\
def g():
    print('hi')

def f():
    g()
";
    let analyzer = ModuleAnalyzer::new();
    let results = analyzer.analyze_source(source, None, None).unwrap();

    // g in isolation: stdout at its own triggering statement
    let g = results.iter().find(|f| f.name == "g").unwrap();
    assert_eq!(g.tokens.len(), 1);
    assert_eq!(g.tokens[0].marker, Marker::Stdout);
    assert_eq!((g.tokens[0].line, g.tokens[0].col), (2, 4));

    // f: same marker kind, attributed to the call site of g inside f
    let f = results.iter().find(|f| f.name == "f").unwrap();
    assert_eq!(f.tokens.len(), 1);
    assert_eq!(f.tokens[0].marker, Marker::Stdout);
    assert_eq!((f.tokens[0].line, f.tokens[0].col), (5, 4));
}

#[test]
fn pathlib_write_through_inference() {
    let source = "\
from pathlib import Path

target = Path('out.txt')

def probe():
    target.write_text('data')
";
    let analyzer = ModuleAnalyzer::new();
    let results = analyzer.analyze_source(source, None, None).unwrap();
    let markers: Vec<_> = results[0].tokens.iter().map(|t| t.marker.clone()).collect();
    assert_eq!(markers, vec![Marker::Write]);
}

#[test]
fn declared_effects_reach_the_caller() {
    let source = "\
@deal.has('network')
def fetch():
    pass

def probe():
    fetch()
";
    let analyzer = ModuleAnalyzer::new();
    let results = analyzer.analyze_source(source, None, None).unwrap();
    let probe = results.iter().find(|f| f.name == "probe").unwrap();
    let markers: Vec<&str> = probe.tokens.iter().map(|t| t.marker.as_str()).collect();
    assert_eq!(markers, vec!["network"]);
}

#[test]
fn stub_knowledge_wins_over_the_dive() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("mod.json"),
        r#"{"helper": {"has": ["stdout", "socket"]}}"#,
    )
    .unwrap();
    let py = dir.path().join("mod.py");

    let source = "\
def helper():
    os.system('ls')

def probe():
    helper()
";
    let stubs = StubsManager::with_root(dir.path());
    let analyzer = ModuleAnalyzer::new();
    let results = analyzer
        .analyze_source(source, Some(&py), Some(&stubs))
        .unwrap();

    let probe = results.iter().find(|f| f.name == "probe").unwrap();
    let mut markers: Vec<&str> = probe.tokens.iter().map(|t| t.marker.as_str()).collect();
    markers.sort();
    // the stub's declared effects, not the body's syscall
    assert_eq!(markers, vec!["socket", "stdout"]);
}
