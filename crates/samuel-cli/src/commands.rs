//! Command handlers
//!
//! Each handler maps library results to process output: created paths and
//! reports on stdout, failure messages on stderr. Expected failures
//! (invalid name, existing directory, error findings) exit 1 with a
//! single-line message; unexpected I/O failures propagate to main.

use anyhow::{anyhow, Result};
use samuel_skills::prelude::*;
use samuel_types::ValidationReport;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

use crate::config::Config;
use crate::{Cli, Commands, SkillCommands};

/// Dispatch a parsed invocation
pub fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::load()?;
    samuel_logging::init_logging(&config.logging.level)?;

    match cli.command {
        Commands::Skill { command } => match command {
            SkillCommands::Create { name, dir } => create(&config, &name, &dir),
            SkillCommands::Validate { skill, json } => validate(&config, &skill, json),
            SkillCommands::List => list(&config),
        },
    }
}

fn registry_from_config(config: &Config) -> SkillRegistry {
    let mut registry = SkillRegistry::new();
    for dir in config.skill_directories() {
        registry = registry.add_directory(dir);
    }
    registry
}

/// Resolve a `validate` argument to a skill directory
///
/// An argument that names an existing directory or contains a path
/// separator is used as a path; otherwise it is looked up by name in the
/// configured skill directories.
fn resolve_skill_dir(config: &Config, arg: &str) -> Result<PathBuf> {
    let as_path = Path::new(arg);
    if as_path.is_dir() || arg.contains(std::path::MAIN_SEPARATOR) {
        return Ok(as_path.to_path_buf());
    }

    registry_from_config(config)
        .locate(arg)
        .ok_or_else(|| anyhow!("skill '{}' not found in configured skill directories", arg))
}

fn create(config: &Config, name: &str, parent: &Path) -> Result<ExitCode> {
    let options = ScaffoldOptions {
        license: config.scaffold.license.clone(),
    };

    match scaffold_skill(parent, name, &options) {
        Ok(path) => {
            println!("{}", path.display());
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ (SkillError::InvalidName { .. } | SkillError::AlreadyExists { .. })) => {
            eprintln!("{e}");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

fn validate(config: &Config, skill: &str, json: bool) -> Result<ExitCode> {
    let dir = resolve_skill_dir(config, skill)?;
    debug!("resolved '{}' to {:?}", skill, dir);

    let report = validate_skill_dir(&dir)?;
    print_report(&report, json)?;

    if report.has_errors() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn print_report(report: &ValidationReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        for finding in &report.findings {
            println!("{finding}");
        }
    }
    Ok(())
}

fn list(config: &Config) -> Result<ExitCode> {
    let mut registry = registry_from_config(config);
    registry.discover()?;

    if registry.is_empty() {
        println!("No skills found");
    } else {
        for line in registry.summaries() {
            println!("{line}");
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LoggingConfig, ScaffoldConfig, SkillsConfig};

    fn test_config(directories: Vec<String>) -> Config {
        Config {
            skills: SkillsConfig { directories },
            scaffold: ScaffoldConfig {
                license: "MIT".to_string(),
            },
            logging: LoggingConfig {
                level: "warn".to_string(),
            },
        }
    }

    #[test]
    fn test_create_writes_skill() {
        let tmp = tempfile::tempdir().unwrap();
        let config = test_config(vec![]);

        assert!(create(&config, "my-skill", tmp.path()).is_ok());
        assert!(tmp.path().join("my-skill").join("SKILL.md").is_file());
    }

    #[test]
    fn test_create_failure_is_reported_not_propagated() {
        let tmp = tempfile::tempdir().unwrap();
        let config = test_config(vec![]);

        // Invalid name and duplicate directory both resolve to Ok(FAILURE),
        // not an Err that main would render as an internal error.
        assert!(create(&config, "My_Skill", tmp.path()).is_ok());
        assert!(create(&config, "my-skill", tmp.path()).is_ok());
        assert!(create(&config, "my-skill", tmp.path()).is_ok());
    }

    #[test]
    fn test_resolve_by_name_uses_configured_directories() {
        let tmp = tempfile::tempdir().unwrap();
        scaffold_skill(tmp.path(), "pdf-tool", &ScaffoldOptions::default()).unwrap();
        let config = test_config(vec![tmp.path().to_string_lossy().into_owned()]);

        let resolved = resolve_skill_dir(&config, "pdf-tool").unwrap();
        assert_eq!(resolved, tmp.path().join("pdf-tool"));
    }

    #[test]
    fn test_resolve_prefers_explicit_path() {
        let tmp = tempfile::tempdir().unwrap();
        let created = scaffold_skill(tmp.path(), "pdf-tool", &ScaffoldOptions::default()).unwrap();
        let config = test_config(vec![]);

        let arg = created.to_string_lossy().into_owned();
        assert_eq!(resolve_skill_dir(&config, &arg).unwrap(), created);
    }

    #[test]
    fn test_resolve_unknown_name_fails() {
        let config = test_config(vec![]);
        assert!(resolve_skill_dir(&config, "absent").is_err());
    }
}
