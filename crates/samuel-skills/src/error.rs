//! Error types for skill operations

use std::path::PathBuf;
use thiserror::Error;

/// Skill scaffolding and validation errors
///
/// Every variant is terminal for the current command invocation; failures
/// are deterministic input or filesystem state problems, never retried.
#[derive(Debug, Error)]
pub enum SkillError {
    /// Candidate name violates a naming rule
    #[error("invalid skill name '{name}': {reason}")]
    InvalidName {
        /// The rejected name
        name: String,
        /// The first violated rule
        reason: String,
    },

    /// Target directory already exists (creation never overwrites)
    #[error("skill directory already exists: {}", path.display())]
    AlreadyExists {
        /// The existing directory
        path: PathBuf,
    },

    /// Directory contains no SKILL.md
    #[error("SKILL.md not found in {}", .0.display())]
    MissingSkillFile(PathBuf),

    /// Frontmatter block is absent or not parseable as a YAML mapping
    #[error("malformed frontmatter in {}: {details}", path.display())]
    MalformedFrontmatter {
        /// The SKILL.md that failed to parse
        path: PathBuf,
        /// Parse failure details
        details: String,
    },

    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, SkillError>;
