//! YAML frontmatter extraction and parsing
//!
//! A SKILL.md starts with a `---`-delimited YAML block followed by a
//! Markdown body. Extraction and structural parsing live here; field-level
//! checks belong to [`crate::validate`].

use regex::Regex;
use serde_yaml::Mapping;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{Result, SkillError};

static FRONTMATTER_RE: OnceLock<Regex> = OnceLock::new();

fn frontmatter_re() -> &'static Regex {
    FRONTMATTER_RE.get_or_init(|| {
        Regex::new(r"^---\s*\n([\s\S]*?)\n---\s*(?:\n([\s\S]*))?$")
            .expect("frontmatter regex is valid")
    })
}

/// A structurally parsed frontmatter block
#[derive(Debug, Clone)]
pub struct Frontmatter {
    /// Top-level YAML mapping; unrecognized keys are preserved
    pub mapping: Mapping,
    /// Markdown body following the closing delimiter
    pub body: String,
}

impl Frontmatter {
    /// Look up a top-level field as a string, if present and string-typed
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.mapping.get(key).and_then(|v| v.as_str())
    }

    /// Top-level field names in document order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.mapping.keys().filter_map(|k| k.as_str())
    }
}

/// Split raw SKILL.md text into (yaml, body), if a frontmatter block exists
pub fn extract(content: &str) -> Option<(&str, &str)> {
    let captures = frontmatter_re().captures(content)?;
    let yaml = captures.get(1)?.as_str();
    let body = captures.get(2).map(|m| m.as_str()).unwrap_or("");
    Some((yaml, body))
}

/// Parse raw SKILL.md text into a [`Frontmatter`]
///
/// `path` is only used for error reporting. Fails when the block is
/// missing, is not valid YAML, or its root is not a mapping; anything
/// field-level is left to the validator.
pub fn parse(content: &str, path: &Path) -> Result<Frontmatter> {
    let (yaml, body) = extract(content).ok_or_else(|| SkillError::MalformedFrontmatter {
        path: path.to_path_buf(),
        details: "no YAML frontmatter block found (expected leading and trailing '---' lines)"
            .to_string(),
    })?;

    let value: serde_yaml::Value =
        serde_yaml::from_str(yaml).map_err(|e| SkillError::MalformedFrontmatter {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    let mapping = match value {
        serde_yaml::Value::Mapping(mapping) => mapping,
        other => {
            return Err(SkillError::MalformedFrontmatter {
                path: path.to_path_buf(),
                details: format!("frontmatter root must be a mapping, got {}", yaml_kind(&other)),
            })
        }
    };

    Ok(Frontmatter {
        mapping,
        body: body.to_string(),
    })
}

fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}
