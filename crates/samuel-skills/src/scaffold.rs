//! Skill directory scaffolding
//!
//! Creates the initial SKILL.md plus the conventional subdirectory
//! skeleton. Creation never overwrites: an existing target directory is a
//! hard error before anything is written.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{Result, SkillError};
use crate::name::validate_name;
use crate::skill::SKILL_FILE;

/// Subdirectories created alongside SKILL.md
pub const SUBDIRS: [&str; 3] = ["scripts", "references", "assets"];

/// Placeholder description written into new skills
///
/// Non-empty so a freshly scaffolded skill validates cleanly; authors are
/// expected to replace it.
pub const DESCRIPTION_PLACEHOLDER: &str =
    "Describe what this skill does and when an agent should use it.";

/// Options applied when scaffolding a new skill
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// License identifier written into the frontmatter
    pub license: String,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            license: "MIT".to_string(),
        }
    }
}

/// Render the SKILL.md template for a new skill
fn skill_template(name: &str, options: &ScaffoldOptions) -> String {
    format!(
        r#"---
name: {name}
description: "{placeholder}"
license: {license}
metadata:
  version: "1.0"
---

# {name}

## Purpose

## When to Use

## Instructions

## Examples

## Notes
"#,
        name = name,
        placeholder = DESCRIPTION_PLACEHOLDER,
        license = options.license,
    )
}

/// Create `<parent>/<name>/` with a templated SKILL.md and empty
/// `scripts/`, `references/`, `assets/` subdirectories
///
/// Returns the created skill directory. Fails with
/// [`SkillError::InvalidName`] on a bad name and
/// [`SkillError::AlreadyExists`] if the target exists; in both cases the
/// filesystem is untouched. I/O failures are propagated, not retried.
pub fn scaffold_skill(parent: &Path, name: &str, options: &ScaffoldOptions) -> Result<PathBuf> {
    validate_name(name)?;

    let target = parent.join(name);
    if target.exists() {
        return Err(SkillError::AlreadyExists { path: target });
    }

    fs::create_dir_all(&target)?;
    debug!("created skill directory {:?}", target);

    fs::write(target.join(SKILL_FILE), skill_template(name, options))?;

    for sub in SUBDIRS {
        fs::create_dir(target.join(sub))?;
    }

    info!("scaffolded skill '{}' at {:?}", name, target);
    Ok(target)
}
