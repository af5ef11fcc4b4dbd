//! Samuel Skills System
//!
//! Library core of the `samuel` CLI: scaffolding and validation of skill
//! packages (directories containing SKILL.md with YAML frontmatter, plus
//! optional scripts/, references/, and assets/ subdirectories).
//!
//! ## Features
//!
//! - Skill name validation with deterministic, rule-specific messages
//! - Directory scaffolding from a SKILL.md template (never overwrites)
//! - YAML frontmatter parsing with forward-compatible unknown fields
//! - Validation reports that separate errors from warnings
//! - Skill discovery across personal, project, and configured directories

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod error;
pub mod frontmatter;
pub mod name;
pub mod registry;
pub mod scaffold;
pub mod skill;
pub mod validate;

pub use error::{Result, SkillError};
pub use registry::SkillRegistry;
pub use scaffold::{scaffold_skill, ScaffoldOptions};
pub use skill::{Skill, SkillMetadata};
pub use validate::validate_skill_dir;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        scaffold_skill, validate_skill_dir, Result, ScaffoldOptions, Skill, SkillError,
        SkillMetadata, SkillRegistry,
    };
}
