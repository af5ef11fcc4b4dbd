use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Default config template created when no config exists
pub const DEFAULT_CONFIG: &str = r#"
[skills]
# Directories scanned for skills, in priority order
directories = ["~/.samuel/skills", ".samuel/skills"]

[scaffold]
license = "MIT"

[logging]
level = "warn"  # trace, debug, info, warn, error
"#;

#[derive(Debug, Deserialize, Clone)]
pub struct SkillsConfig {
    pub directories: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScaffoldConfig {
    pub license: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub skills: SkillsConfig,
    pub scaffold: ScaffoldConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Get the global config path: ~/.samuel/samuel.toml
    fn global_config_path() -> anyhow::Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("could not find home directory"))?;
        Ok(home.join(".samuel").join("samuel.toml"))
    }

    /// Ensure global config directory and file exist, creating defaults if needed
    fn ensure_global_config() -> anyhow::Result<PathBuf> {
        let config_path = Self::global_config_path()?;
        if let Some(config_dir) = config_path.parent() {
            if !config_dir.exists() {
                fs::create_dir_all(config_dir)?;
            }
        }

        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG.trim())?;
            eprintln!("Created default config: {}", config_path.display());
        }

        Ok(config_path)
    }

    /// Load configuration with layered approach:
    /// 1. Global config: ~/.samuel/samuel.toml (auto-created if missing)
    /// 2. Local override: ./samuel.toml (workspace, optional)
    /// 3. Environment variables (highest priority)
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file from current directory
        dotenvy::dotenv().ok();

        // Ensure global config exists
        let global_config_path = Self::ensure_global_config()?;

        // Build config with layered sources (later sources override earlier ones)
        let mut config_builder = config::Config::builder()
            // Layer 1: Global config (required - we just created it if missing)
            .add_source(config::File::from(global_config_path))
            // Layer 2: Local workspace config (optional override)
            .add_source(config::File::with_name("samuel").required(false))
            // Layer 3: Environment variables with SAMUEL__ prefix
            .add_source(config::Environment::with_prefix("SAMUEL").separator("__"));

        // Layer 4: Apply convenience env var overrides (highest priority)
        if let Ok(dir) = env::var("SAMUEL_SKILLS_DIR") {
            config_builder = config_builder.set_override("skills.directories", vec![dir])?;
        }

        if let Ok(level) = env::var("SAMUEL_LOG") {
            config_builder = config_builder.set_override("logging.level", level)?;
        }

        let config = config_builder.build()?;

        let config: Self = config.try_deserialize()?;
        Ok(config)
    }

    /// Configured skill directories with `~` expanded, in priority order
    pub fn skill_directories(&self) -> Vec<PathBuf> {
        self.skills
            .directories
            .iter()
            .map(|dir| PathBuf::from(expand_tilde(dir)))
            .collect()
    }
}

/// Expand a leading `~` to the home directory
fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            return format!("{}{}", home.display(), rest);
        }
    }
    path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_template_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).expect("template must parse");
        assert_eq!(config.scaffold.license, "MIT");
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.skills.directories.len(), 2);
    }

    #[test]
    fn test_expand_tilde_passthrough() {
        assert_eq!(expand_tilde("skills"), "skills");
        assert_eq!(expand_tilde("/abs/skills"), "/abs/skills");
    }

    #[test]
    fn test_expand_tilde_resolves_home() {
        if let Some(home) = dirs::home_dir() {
            let expanded = expand_tilde("~/.samuel/skills");
            assert!(expanded.starts_with(&format!("{}", home.display())));
            assert!(!expanded.contains('~'));
        }
    }

    #[test]
    fn test_skill_directories_expansion() {
        let config = Config {
            skills: SkillsConfig {
                directories: vec!["skills".to_string(), "/var/skills".to_string()],
            },
            scaffold: ScaffoldConfig {
                license: "MIT".to_string(),
            },
            logging: LoggingConfig {
                level: "warn".to_string(),
            },
        };

        let dirs = config.skill_directories();
        assert_eq!(dirs, vec![PathBuf::from("skills"), PathBuf::from("/var/skills")]);
    }
}
