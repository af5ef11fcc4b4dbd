//! Skill definition and loading
//!
//! Each skill is a folder containing SKILL.md with YAML frontmatter

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::{Result, SkillError};
use crate::frontmatter;

/// File name of the skill manifest inside a skill directory
pub const SKILL_FILE: &str = "SKILL.md";

/// Skill metadata extracted from YAML frontmatter
///
/// Unknown top-level fields are ignored here; the `metadata` map is the
/// designated extension point (author, version, category, language, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillMetadata {
    /// Skill name; must equal the containing directory's name
    pub name: String,
    /// What the skill does and when to use it
    pub description: String,
    /// Optional license identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    /// Open key-value map for additional metadata
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_yaml::Value>,
}

/// A complete skill with metadata and content
#[derive(Debug, Clone)]
pub struct Skill {
    /// Skill metadata
    pub metadata: SkillMetadata,
    /// Full path to skill directory
    pub path: PathBuf,
    /// Full SKILL.md content (loaded on demand)
    pub content: Option<String>,
}

impl Skill {
    /// Load skill from a directory, including the full SKILL.md content
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let content = read_skill_file(dir)?;
        let metadata = parse_metadata(&content, dir)?;

        Ok(Self {
            metadata,
            path: dir.to_path_buf(),
            content: Some(content),
        })
    }

    /// Load only metadata from a directory
    pub fn metadata_from_dir(dir: &Path) -> Result<Self> {
        let content = read_skill_file(dir)?;
        let metadata = parse_metadata(&content, dir)?;

        Ok(Self {
            metadata,
            path: dir.to_path_buf(),
            content: None,
        })
    }

    /// Load full content if not already loaded
    pub fn load_content(&mut self) -> Result<()> {
        if self.content.is_some() {
            return Ok(());
        }

        self.content = Some(read_skill_file(&self.path)?);
        Ok(())
    }

    /// Get the skill name
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Get the skill description
    pub fn description(&self) -> &str {
        &self.metadata.description
    }

    /// One-line listing entry: "- {name}: {description}"
    pub fn to_summary(&self) -> String {
        format!("- {}: {}", self.metadata.name, self.metadata.description)
    }
}

fn read_skill_file(dir: &Path) -> Result<String> {
    let skill_file = dir.join(SKILL_FILE);

    if !skill_file.exists() {
        return Err(SkillError::MissingSkillFile(dir.to_path_buf()));
    }

    Ok(fs::read_to_string(&skill_file)?)
}

/// Deserialize frontmatter into [`SkillMetadata`]
///
/// Requires `name` and `description` to be present; use
/// [`crate::frontmatter::parse`] when field-level leniency is needed.
fn parse_metadata(content: &str, dir: &Path) -> Result<SkillMetadata> {
    let skill_file = dir.join(SKILL_FILE);
    let (yaml, _) =
        frontmatter::extract(content).ok_or_else(|| SkillError::MalformedFrontmatter {
            path: skill_file.clone(),
            details: "no YAML frontmatter block found (expected leading and trailing '---' lines)"
                .to_string(),
        })?;

    let metadata: SkillMetadata =
        serde_yaml::from_str(yaml).map_err(|e| SkillError::MalformedFrontmatter {
            path: skill_file,
            details: e.to_string(),
        })?;

    if let Some(dir_name) = dir.file_name().and_then(|n| n.to_str()) {
        if metadata.name != dir_name {
            warn!(
                "skill '{}' loaded from directory '{}' (names differ)",
                metadata.name, dir_name
            );
        }
    }

    Ok(metadata)
}
