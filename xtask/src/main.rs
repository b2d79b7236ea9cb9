//! Custom cargo commands for the dictkit crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (contracts + tests in every feature/profile + clippy)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("dictkit Verification Suite");
    println!("==========================================\n");

    // Step 1: Every contract must be wired into the helpers
    println!("[1/5] Checking contract call sites...");
    check_contracts_wired()?;
    println!("✓ All contracts are called\n");

    // Step 2: Default features (debug, contracts active)
    println!("[2/5] Running tests (default features)...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ Tests passed\n");

    // Step 3: Without rayon
    println!("[3/5] Running tests (no default features)...");
    run_cargo(&["test", "--quiet", "--no-default-features"])?;
    println!("✓ Tests passed without `parallel`\n");

    // Step 4: Release, contracts compiled out
    println!("[4/5] Running tests (release)...");
    run_cargo(&["test", "--quiet", "--release"])?;
    println!("✓ Release tests passed\n");

    // Step 5: Clippy
    println!("[5/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Every `pub fn check_*` in contracts.rs must be called from another module.
fn check_contracts_wired() -> Result<()> {
    let src = project_root()?.join("src");
    let contracts = fs::read_to_string(src.join("contracts.rs"))
        .context("Failed to read contracts.rs")?;

    let names: Vec<&str> = contracts
        .lines()
        .filter_map(|line| line.trim().strip_prefix("pub fn "))
        .filter_map(|rest| rest.split(['(', '<']).next())
        .filter(|name| name.starts_with("check_"))
        .collect();

    if names.is_empty() {
        bail!("No contracts found in contracts.rs");
    }

    let mut sources = String::new();
    for dir in ["mapping", "sequence"] {
        for entry in fs::read_dir(src.join(dir)).with_context(|| format!("Failed to list src/{}", dir))? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "rs") {
                sources.push_str(&fs::read_to_string(&path)?);
            }
        }
    }

    let unused: Vec<&str> = names
        .into_iter()
        .filter(|name| !sources.contains(&format!("{}(", name)))
        .collect();
    if !unused.is_empty() {
        bail!("Contracts never called: {}", unused.join(", "));
    }

    Ok(())
}
