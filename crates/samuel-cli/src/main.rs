//! Samuel - skill scaffolding and validation CLI
//!
//! `samuel skill create <name>` scaffolds a new skill directory;
//! `samuel skill validate <name>` checks an existing one and reports
//! findings; `samuel skill list` shows every discovered skill.

mod commands;
mod config;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Samuel - agent skill tooling
#[derive(Parser)]
#[command(name = "samuel")]
#[command(about = "Scaffold and validate agent skill packages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage skill packages
    Skill {
        #[command(subcommand)]
        command: SkillCommands,
    },
}

#[derive(Subcommand)]
enum SkillCommands {
    /// Scaffold a new skill directory
    ///
    /// Creates <dir>/<name>/ with a templated SKILL.md plus empty
    /// scripts/, references/, and assets/ subdirectories. Refuses to
    /// touch an existing directory.
    Create {
        /// Skill name (lowercase letters, numbers, and single hyphens)
        name: String,

        /// Parent directory to create the skill under
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },

    /// Validate an existing skill
    ///
    /// Prints one line per finding; exits 0 when there are no
    /// error-severity findings (warnings never fail a run).
    Validate {
        /// Skill name (resolved via configured skill directories) or a
        /// path to a skill directory
        skill: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List skills discovered in the configured directories
    List,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match commands::run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
