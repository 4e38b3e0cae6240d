//! Module scope binding
//!
//! The inference-capable tree producer: the same lowered tree as the
//! syntax-only parse, plus a [`ModuleScope`] resolving what a one-file view
//! can see — top-level function definitions, import aliases, and
//! single-assignment constructor bindings for the receiver types the rule
//! set cares about (`random.Random`, `pathlib.Path`).
//!
//! The scope implements the inference-oracle port directly; richer
//! cross-module backends plug in behind the same trait.

use crate::errors::Result;
use crate::features::markers::domain::{InferenceOracle, Resolved};
use crate::features::parsing::domain::{
    self as python, FunctionDef, NodeKind, ParsedModule, SyntaxNode,
};
use crate::features::parsing::infrastructure::SyntaxParser;
use ahash::AHashMap;
use effectscan_stubs::resolve_module_name;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Constructor call names whose results the rule set recognizes by type.
const TRACKED_CONSTRUCTORS: &[&str] = &[
    "random.Random",
    "random.SystemRandom",
    "pathlib.Path",
    "pathlib.PurePath",
    "pathlib.PosixPath",
    "pathlib.WindowsPath",
];

/// What a single module's source resolves on its own.
pub struct ModuleScope {
    pub module_name: String,
    pub source_path: Option<PathBuf>,
    functions: AHashMap<String, Arc<FunctionDef>>,
    bindings: AHashMap<String, String>,
    method_aliases: AHashMap<String, String>,
    imports: AHashMap<String, String>,
}

impl ModuleScope {
    pub fn build(root: &SyntaxNode, module_name: &str, source_path: Option<&Path>) -> Self {
        let mut scope = Self {
            module_name: module_name.to_string(),
            source_path: source_path.map(Path::to_path_buf),
            functions: AHashMap::new(),
            bindings: AHashMap::new(),
            method_aliases: AHashMap::new(),
            imports: AHashMap::new(),
        };

        for def in python::top_level_functions(root, module_name, source_path) {
            scope.functions.insert(def.name.clone(), def);
        }
        scope.collect_imports(root);
        scope.collect_bindings(root);
        scope
    }

    /// `import x`, `import x.y`, `import x as y` — top-level only.
    fn collect_imports(&mut self, root: &SyntaxNode) {
        for stmt in &root.children {
            match stmt.kind {
                NodeKind::Import => {
                    for child in &stmt.children {
                        if let Some((local, target)) = import_binding(child) {
                            self.imports.insert(local, target);
                        }
                    }
                }
                NodeKind::ImportFrom => {
                    let mut names = stmt
                        .children
                        .iter()
                        .filter(|c| is_dotted_name(c) || c.raw_kind.as_deref() == Some("aliased_import"));
                    let Some(module) = names.next().and_then(dotted_text) else {
                        continue;
                    };
                    for child in names {
                        if let Some((local, name)) = import_binding(child) {
                            let suffix = name.rsplit('.').next().unwrap_or(&name);
                            self.imports
                                .insert(local, format!("{}.{}", module, suffix));
                        }
                    }
                }
                _ => {}
            }
        }
    }

    /// `x = random.Random()`-style assignments, anywhere in the module.
    /// A flat namespace is enough for a heuristic receiver-type check.
    fn collect_bindings(&mut self, node: &SyntaxNode) {
        for child in &node.children {
            if child.kind == NodeKind::Assignment {
                self.record_binding(child);
            }
            self.collect_bindings(child);
        }
    }

    fn record_binding(&mut self, assignment: &SyntaxNode) {
        let Some(target) = assignment.children.first() else {
            return;
        };
        let Some(value) = assignment.children.last() else {
            return;
        };
        if target.kind != NodeKind::Name {
            return;
        }
        match value.kind {
            NodeKind::Call => {
                let Some(callee) = python::call_function(value).and_then(python::dotted_name)
                else {
                    return;
                };
                let canonical = self.canonical_name(&callee);
                if TRACKED_CONSTRUCTORS.contains(&canonical.as_str()) {
                    self.bindings.insert(target.text().to_string(), canonical);
                }
            }
            // `shuffle = rng.shuffle` aliases a bound method to a bare name
            NodeKind::Attribute => {
                let Some((receiver, _)) = python::attribute_parts(value) else {
                    return;
                };
                if receiver.kind != NodeKind::Name {
                    return;
                }
                if let Some(receiver_type) = self.bindings.get(receiver.text()) {
                    self.method_aliases
                        .insert(target.text().to_string(), receiver_type.clone());
                }
            }
            _ => {}
        }
    }

    /// Expand a local name through the module's import aliases.
    fn canonical_name(&self, name: &str) -> String {
        if let Some(full) = self.imports.get(name) {
            return full.clone();
        }
        if let Some((first, rest)) = name.split_once('.') {
            if let Some(full) = self.imports.get(first) {
                return format!("{}.{}", full, rest);
            }
        }
        name.to_string()
    }
}

impl InferenceOracle for ModuleScope {
    fn infer(&self, expr: &SyntaxNode) -> Vec<Resolved> {
        match expr.kind {
            NodeKind::Name => {
                let id = expr.text();
                if let Some(def) = self.functions.get(id) {
                    return vec![Resolved::Function(def.clone())];
                }
                if let Some(type_name) = self.bindings.get(id) {
                    return vec![Resolved::Instance {
                        type_name: type_name.clone(),
                    }];
                }
                if let Some(receiver_type) = self.method_aliases.get(id) {
                    return vec![Resolved::BoundMethod {
                        receiver_type: receiver_type.clone(),
                    }];
                }
                Vec::new()
            }
            NodeKind::Attribute => {
                if let Some((value, _)) = python::attribute_parts(expr) {
                    if value.kind == NodeKind::Name {
                        if let Some(receiver_type) = self.bindings.get(value.text()) {
                            return vec![Resolved::BoundMethod {
                                receiver_type: receiver_type.clone(),
                            }];
                        }
                    }
                }
                Vec::new()
            }
            _ => Vec::new(),
        }
    }
}

/// A parsed module with its scope bound.
pub struct AnnotatedModule {
    pub module: ParsedModule,
    pub scope: ModuleScope,
    /// Every named def in the module (methods and nested defs included).
    pub functions: Vec<Arc<FunctionDef>>,
}

impl AnnotatedModule {
    pub fn parse(source: &str, source_path: Option<&Path>) -> Result<Self> {
        let module = SyntaxParser::new().parse(source, source_path)?;
        let module_name = source_path
            .map(|p| resolve_module_name(p, None))
            .unwrap_or_default();

        let scope = ModuleScope::build(&module.root, &module_name, source_path);
        let functions = python::all_functions(&module.root, &module_name, source_path);

        Ok(Self {
            module,
            scope,
            functions,
        })
    }
}

fn is_dotted_name(node: &SyntaxNode) -> bool {
    node.kind == NodeKind::Name || node.raw_kind.as_deref() == Some("dotted_name")
}

/// Text of an identifier or dotted-name node.
fn dotted_text(node: &SyntaxNode) -> Option<String> {
    if node.kind == NodeKind::Name {
        return Some(node.text().to_string());
    }
    if node.raw_kind.as_deref() == Some("dotted_name") {
        let parts: Vec<&str> = node
            .children
            .iter()
            .filter(|c| c.kind == NodeKind::Name)
            .map(|c| c.text())
            .collect();
        return Some(parts.join("."));
    }
    None
}

/// Local binding introduced by one import clause.
///
/// `import x.y` binds `x`; `import numpy as np` binds `np` to `numpy`;
/// inside a `from` statement the caller qualifies the target.
fn import_binding(node: &SyntaxNode) -> Option<(String, String)> {
    if is_dotted_name(node) {
        let target = dotted_text(node)?;
        let local = target.split('.').next()?.to_string();
        let bound = if target.contains('.') {
            local.clone()
        } else {
            target
        };
        return Some((local, bound));
    }
    if node.raw_kind.as_deref() == Some("aliased_import") {
        let target = node.children.iter().find_map(dotted_text)?;
        let alias = node
            .children
            .iter()
            .rev()
            .find(|c| c.kind == NodeKind::Name)?;
        return Some((alias.text().to_string(), target));
    }
    None
}
