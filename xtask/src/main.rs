//! Fanfare Dev Tasks
//!
//! Usage:
//!   cargo xtask test [-p <crate>]  - Run workspace tests
//!   cargo xtask check              - Formatting + clippy
//!   cargo xtask docs [--open]      - Generate documentation

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

/// Crates checked by `xtask check`, in dependency order
const CRATES: &[&str] = &[
    "ff-core",
    "ff-celebration",
    "ff-achievement",
    "ff-feedback",
    "fanfare",
];

#[derive(Parser)]
#[command(name = "xtask", about = "Fanfare dev tasks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run tests
    Test {
        /// Only this crate
        #[arg(short, long)]
        package: Option<String>,
    },
    /// Check formatting and lints
    Check,
    /// Generate documentation
    Docs {
        /// Open in browser
        #[arg(short, long)]
        open: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let root = project_root()?;

    match cli.command {
        Commands::Test { package } => run_tests(&root, package.as_deref()),
        Commands::Check => check_quality(&root),
        Commands::Docs { open } => generate_docs(&root, open),
    }
}

fn project_root() -> Result<PathBuf> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").context("CARGO_MANIFEST_DIR not set")?;

    Ok(Path::new(&manifest_dir)
        .parent()
        .context("Failed to get parent directory")?
        .to_path_buf())
}

/// Run `cargo <args>` in the workspace root
fn cargo(root: &Path, args: &[&str]) -> Result<bool> {
    let status = Command::new("cargo")
        .current_dir(root)
        .args(args)
        .status()
        .with_context(|| format!("Failed to run cargo {}", args.join(" ")))?;
    Ok(status.success())
}

fn run_tests(root: &Path, package: Option<&str>) -> Result<()> {
    let mut args = vec!["test"];
    match package {
        Some(name) => {
            if !CRATES.contains(&name) {
                bail!("Unknown crate '{}', expected one of: {}", name, CRATES.join(", "));
            }
            println!("🧪 Running {} tests...\n", name);
            args.extend(["--package", name]);
        }
        None => {
            println!("🧪 Running workspace tests...\n");
            args.push("--workspace");
        }
    }

    if !cargo(root, &args)? {
        bail!("Tests failed");
    }

    println!("\n✅ All tests passed!");
    Ok(())
}

fn check_quality(root: &Path) -> Result<()> {
    println!("🔍 Checking formatting...");
    if !cargo(root, &["fmt", "--all", "--check"])? {
        bail!("Formatting issues found. Run 'cargo fmt' to fix.");
    }

    for name in CRATES {
        println!("\nRunning clippy on {}...", name);
        if !cargo(root, &["clippy", "--package", name, "--all-targets", "--", "-D", "warnings"])? {
            bail!("Clippy found issues in {}", name);
        }
    }

    println!("\n✅ Code quality check complete!");
    Ok(())
}

fn generate_docs(root: &Path, open: bool) -> Result<()> {
    println!("📚 Generating documentation...\n");

    let mut args = vec!["doc", "--workspace", "--no-deps", "--exclude", "xtask"];
    if open {
        args.push("--open");
    }

    if !cargo(root, &args)? {
        bail!("Documentation generation failed");
    }

    println!("\n✅ Documentation generated!");
    Ok(())
}
