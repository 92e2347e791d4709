//! Development automation tasks for the `MenuSlot` workspace.
//!
//! Run with: `cargo xtask <command>`
//!
//! This is a CLI tool for developers, so `println!` and `eprintln!` are
//! intentionally used for user-facing output rather than structured logging.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};
use std::{env, fs};

use anyhow::{anyhow, Context};

mod features;

const BINDINGS_DIR: &str = "crates/domain/bindings";
const DEFAULT_CODEGEN_OUT: &str = "ui/generated";

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let task = args.next();

    let result = match task.as_deref() {
        Some("ci") => run_ci(),
        Some("fmt") => run_fmt(),
        Some("clippy") => run_clippy(),
        Some("test") => run_test(),
        Some("bench") => run_bench(),
        Some("codegen") => run_codegen(args.next().map(PathBuf::from)),
        Some("test-features") => features::test_feature_matrix(),
        Some("help") | None => {
            print_help();
            Ok(())
        }
        Some(unknown) => {
            eprintln!("Unknown task: {unknown}");
            eprintln!();
            print_help();
            Err(anyhow!("Unknown task"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Task failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("MenuSlot Development Tasks");
    println!();
    println!("USAGE:");
    println!("    cargo xtask <TASK>");
    println!();
    println!("TASKS:");
    println!("    ci             Run all CI checks (fmt, clippy, test-features, test)");
    println!("    fmt            Check Rust code formatting");
    println!("    clippy         Run Clippy lints");
    println!("    test           Run all tests");
    println!("    bench          Run the resolver benchmarks");
    println!("    codegen [DIR]  Generate TypeScript types for the editor UI (default: {DEFAULT_CODEGEN_OUT})");
    println!("    test-features  Verify the feature matrix compiles");
    println!("    help           Show this help message");
}

/// Run all CI checks in sequence
fn run_ci() -> anyhow::Result<()> {
    println!("==> Running CI checks...\n");

    println!("==> Step 1/4: Checking Rust format...");
    run_fmt()?;

    println!("\n==> Step 2/4: Running Clippy...");
    run_clippy()?;

    println!("\n==> Step 3/4: Checking feature combinations...");
    features::test_feature_matrix()?;

    println!("\n==> Step 4/4: Running tests...");
    run_test()?;

    println!("\n✓ All CI checks passed!");
    Ok(())
}

fn cargo(args: &[&str], failure: &str) -> anyhow::Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .status()
        .with_context(|| format!("Failed to run cargo {}", args.join(" ")))?;

    if !status.success() {
        anyhow::bail!("{failure}");
    }

    Ok(())
}

fn run_fmt() -> anyhow::Result<()> {
    cargo(&["fmt", "--all", "--", "--check"], "Format check failed. Run 'cargo fmt --all' to fix.")
}

fn run_clippy() -> anyhow::Result<()> {
    cargo(
        &["clippy", "--workspace", "--all-targets", "--all-features", "--", "-D", "warnings"],
        "Clippy run failed. See output above.",
    )
}

fn run_test() -> anyhow::Result<()> {
    cargo(&["test", "--workspace", "--all-features"], "Tests failed")
}

fn run_bench() -> anyhow::Result<()> {
    cargo(&["bench", "-p", "menuslot-core", "--bench", "resolver"], "Benchmarks failed")
}

/// Generate TypeScript types from the domain crate and copy them to `out`
fn run_codegen(out: Option<PathBuf>) -> anyhow::Result<()> {
    println!("==> Generating TypeScript types from Rust...\n");

    println!("Step 1/3: Running ts-gen tests to export bindings...");
    cargo(
        &["test", "-p", "menuslot-domain", "--features", "ts-gen", "--lib"],
        "TypeScript generation tests failed",
    )?;

    let bindings_dir = PathBuf::from(BINDINGS_DIR);
    if !bindings_dir.exists() {
        anyhow::bail!(
            "Bindings directory not found at {}. TypeScript generation may have failed.",
            bindings_dir.display()
        );
    }

    let out_dir = out.unwrap_or_else(|| PathBuf::from(DEFAULT_CODEGEN_OUT));
    println!("\nStep 2/3: Syncing bindings to {}...", out_dir.display());
    let synced = sync_bindings(&bindings_dir, &out_dir)?;
    println!("  Synced {synced} files");

    println!("\nStep 3/3: Generating index.ts...");
    generate_index_ts(&out_dir)?;

    println!("\n✓ TypeScript type generation complete: {}", out_dir.display());
    Ok(())
}

fn is_ts(path: &Path) -> bool {
    path.extension().and_then(std::ffi::OsStr::to_str) == Some("ts")
}

fn sync_bindings(src: &Path, dest: &Path) -> anyhow::Result<usize> {
    fs::create_dir_all(dest).context("Failed to create output directory")?;

    let mut synced = 0;
    for entry in fs::read_dir(src).context("Failed to read bindings directory")? {
        let path = entry?.path();
        if !is_ts(&path) {
            continue;
        }
        let file_name = path.file_name().ok_or_else(|| anyhow!("Invalid file name"))?;
        let dest_path = dest.join(file_name);
        fs::copy(&path, &dest_path).with_context(|| {
            format!("Failed to copy {} to {}", path.display(), dest_path.display())
        })?;
        synced += 1;
    }

    Ok(synced)
}

fn generate_index_ts(types_dir: &Path) -> anyhow::Result<()> {
    let mut modules: Vec<String> = fs::read_dir(types_dir)
        .context("Failed to read types directory")?
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|path| is_ts(path))
        .filter_map(|path| path.file_stem()?.to_str().map(str::to_string))
        .filter(|stem| stem != "index")
        .collect();
    modules.sort();

    let mut content = String::from(
        "// Auto-generated types from the MenuSlot domain crate\n\
         // Generated by ts-rs via: cargo xtask codegen\n\
         // DO NOT EDIT MANUALLY - changes will be overwritten\n\n",
    );
    for module in &modules {
        let _ = writeln!(content, "export type {{ {module} }} from './{module}';");
    }

    let index_path = types_dir.join("index.ts");
    fs::write(&index_path, content)
        .with_context(|| format!("Failed to write {}", index_path.display()))?;

    println!("  Generated index.ts with {} exports", modules.len());
    Ok(())
}
