//! Stub generation CLI
//!
//! # Usage
//!
//! ```bash
//! # one file
//! stubgen src/helpers.py
//!
//! # a whole source tree
//! stubgen src/
//!
//! # against an explicit stub root
//! stubgen --root ./stubs src/
//! ```

use clap::Parser;
use effectscan_markers::generate_stub;
use effectscan_stubs::StubsManager;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "stubgen")]
#[command(about = "Generate effect stubs for Python sources", long_about = None)]
struct Cli {
    /// Python files or directories to scan
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Built-in stub root to resolve module names against
    #[arg(long)]
    root: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let stubs = match cli.root {
        Some(root) => StubsManager::with_root(root),
        None => StubsManager::new(),
    };

    for path in &cli.paths {
        if path.is_dir() {
            for entry in WalkDir::new(path) {
                let entry = entry?;
                let is_python = entry.file_type().is_file()
                    && entry.path().extension().and_then(|e| e.to_str()) == Some("py");
                if is_python {
                    let written = generate_stub(entry.path(), &stubs)?;
                    println!("{}", written.display());
                }
            }
        } else {
            let written = generate_stub(path, &stubs)?;
            println!("{}", written.display());
        }
    }

    Ok(())
}
