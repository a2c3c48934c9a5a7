use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation for the wumpus world")]
struct Cli {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand, Clone, Copy)]
enum Task {
    /// Run fmt, clippy, tests, and doc in that order
    Check,
    /// Run cargo fmt --check on all crates
    Fmt,
    /// Run clippy on all crates with warnings denied
    Clippy,
    /// Run all tests
    Test,
    /// Build rustdoc for the workspace
    Doc,
    /// Build the entire workspace
    Build,
    /// Run a short scripted game through the CLI as a smoke test
    Smoke,
}

impl Task {
    fn cargo_args(self) -> &'static [&'static str] {
        match self {
            Task::Check => &[],
            Task::Fmt => &["fmt", "--all", "--", "--check"],
            Task::Clippy => &[
                "clippy",
                "--workspace",
                "--all-targets",
                "--",
                "-D",
                "warnings",
            ],
            Task::Test => &["test", "--workspace"],
            Task::Doc => &["doc", "--workspace", "--no-deps"],
            Task::Build => &["build", "--workspace"],
            Task::Smoke => &[
                "run",
                "-p",
                "wumpus-cli",
                "--",
                "script",
                "--seed",
                "1",
                "--actions",
                "down, right, up, left",
            ],
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Task::Check => {
            for task in [Task::Fmt, Task::Clippy, Task::Test, Task::Doc] {
                run(task)?;
            }
            Ok(())
        }
        task => run(task),
    }
}

fn run(task: Task) -> Result<()> {
    let args = task.cargo_args();
    println!("==> cargo {}", args.join(" "));
    let status = Command::new("cargo").args(args).status()?;
    if !status.success() {
        bail!("cargo {} failed", args[0]);
    }
    Ok(())
}
