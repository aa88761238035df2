//! Build helpers for buzzword-swap.
//!
//! `cargo xtask man` writes man pages and `cargo xtask completions` writes
//! shell completion scripts, both generated from the CLI's clap definition.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for buzzword-swap")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for the CLI and every subcommand
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => generate_man(&out),
        Task::Completions { out } => generate_completions(&out),
    }
}

fn generate_man(out: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out).with_context(|| format!("failed to create {}", out.display()))?;
    let cmd = buzzword_swap::command();
    clap_mangen::generate_to(cmd, out)
        .with_context(|| format!("failed to write man pages to {}", out.display()))?;
    println!("man pages written to {}", out.display());
    Ok(())
}

fn generate_completions(out: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out).with_context(|| format!("failed to create {}", out.display()))?;
    let mut cmd = buzzword_swap::command();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
        let path = clap_complete::generate_to(shell, &mut cmd, "buzzword-swap", out)
            .with_context(|| format!("failed to write {shell} completions"))?;
        println!("{shell} completions written to {}", path.display());
    }
    Ok(())
}
