//! Skill registry for discovery across configured directories
//!
//! Discovery loads metadata only; full SKILL.md content is loaded on
//! demand. Directories that do not exist are skipped, and directories
//! whose SKILL.md cannot be parsed are logged and ignored rather than
//! failing the whole scan.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::skill::Skill;

/// Skill registry managing all discovered skills
pub struct SkillRegistry {
    /// All discovered skills (metadata only initially)
    skills: HashMap<String, Skill>,
    /// Skill directories to scan
    directories: Vec<PathBuf>,
}

impl SkillRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            skills: HashMap::new(),
            directories: Vec::new(),
        }
    }

    /// Add a skills directory to scan
    pub fn add_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.directories.push(dir.into());
        self
    }

    /// Add personal skills directory: ~/.samuel/skills/
    pub fn with_personal_skills(self) -> Self {
        if let Some(home) = dirs::home_dir() {
            self.add_directory(home.join(".samuel").join("skills"))
        } else {
            warn!("could not find home directory for personal skills");
            self
        }
    }

    /// Add project skills directory: ./.samuel/skills/
    pub fn with_project_skills(self) -> Self {
        self.add_directory(PathBuf::from(".samuel/skills"))
    }

    /// Scan all configured directories and discover skills
    pub fn discover(&mut self) -> Result<()> {
        debug!(
            "starting skill discovery in {} directories",
            self.directories.len()
        );

        let directories = self.directories.clone();

        for dir in &directories {
            if !dir.exists() {
                debug!("skills directory does not exist: {:?}", dir);
                continue;
            }

            if !dir.is_dir() {
                warn!("skills path is not a directory: {:?}", dir);
                continue;
            }

            self.scan_directory(dir)?;
        }

        info!("discovered {} skills", self.skills.len());
        Ok(())
    }

    /// Scan a single directory for skills
    fn scan_directory(&mut self, dir: &Path) -> Result<()> {
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            if !path.is_dir() {
                continue;
            }

            match Skill::metadata_from_dir(&path) {
                Ok(skill) => {
                    let name = skill.name().to_string();
                    debug!("discovered skill: {} at {:?}", name, path);
                    self.skills.insert(name, skill);
                }
                Err(e) => {
                    debug!("skipping {:?}: {}", path, e);
                }
            }
        }

        Ok(())
    }

    /// Resolve a bare skill name to its directory
    ///
    /// Checks configured directories in order, filesystem-only: a skill
    /// with a broken SKILL.md must still be locatable so it can be
    /// validated.
    pub fn locate(&self, name: &str) -> Option<PathBuf> {
        self.directories
            .iter()
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.is_dir())
    }

    /// Get a skill by name
    pub fn get(&self, name: &str) -> Option<&Skill> {
        self.skills.get(name)
    }

    /// Load full content for a specific skill
    pub fn load_skill(&mut self, name: &str) -> Option<&Skill> {
        let skill = self.skills.get_mut(name)?;
        if let Err(e) = skill.load_content() {
            warn!("failed to load content for skill '{}': {}", name, e);
            return None;
        }
        Some(skill)
    }

    /// Get all skill names
    pub fn skill_names(&self) -> impl Iterator<Item = &String> {
        self.skills.keys()
    }

    /// Get number of discovered skills
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// One listing line per skill, sorted by name
    pub fn summaries(&self) -> Vec<String> {
        let mut sorted_skills: Vec<_> = self.skills.values().collect();
        sorted_skills.sort_by_key(|s| s.name());

        sorted_skills.iter().map(|s| s.to_summary()).collect()
    }
}

impl Default for SkillRegistry {
    fn default() -> Self {
        Self::new()
    }
}
