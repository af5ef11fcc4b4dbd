//! Skill name validation
//!
//! Names are directory names, command arguments, and frontmatter values at
//! once, so the rules are strict: lowercase alphanumerics and single
//! hyphens only.

use crate::error::{Result, SkillError};

/// Maximum allowed name length (from Anthropic spec)
pub const MAX_NAME_LENGTH: usize = 64;

/// Return the first violated naming rule, or `None` if the name is valid
///
/// Rules are checked in a fixed order so the same bad input always
/// produces the same message:
/// 1. non-empty
/// 2. at most [`MAX_NAME_LENGTH`] characters
/// 3. lowercase letters, digits, and hyphens only
/// 4. no leading or trailing hyphen
/// 5. no consecutive hyphens
pub fn name_violation(name: &str) -> Option<String> {
    if name.is_empty() {
        return Some("name cannot be empty".to_string());
    }

    let length = name.chars().count();
    if length > MAX_NAME_LENGTH {
        return Some(format!(
            "name is {length} characters, maximum is {MAX_NAME_LENGTH}"
        ));
    }

    if let Some(c) = name
        .chars()
        .find(|&c| !matches!(c, 'a'..='z' | '0'..='9' | '-'))
    {
        return Some(format!(
            "character '{c}' is not allowed; use lowercase letters, numbers, and hyphens"
        ));
    }

    if name.starts_with('-') || name.ends_with('-') {
        return Some("name cannot start or end with a hyphen".to_string());
    }

    if name.contains("--") {
        return Some("name cannot contain consecutive hyphens".to_string());
    }

    None
}

/// Validate a candidate skill name
pub fn validate_name(name: &str) -> Result<()> {
    match name_violation(name) {
        Some(reason) => Err(SkillError::InvalidName {
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}
