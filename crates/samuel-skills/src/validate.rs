//! Skill validation orchestration
//!
//! Runs the name rules against the directory basename and the field checks
//! against SKILL.md frontmatter, aggregating everything into one
//! [`ValidationReport`]. Only structural problems (missing SKILL.md,
//! unparseable frontmatter) abort with an error; field-level problems
//! become findings.

use samuel_types::{Finding, ValidationReport};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{Result, SkillError};
use crate::frontmatter::{self, Frontmatter};
use crate::name;
use crate::skill::SKILL_FILE;

/// Maximum allowed description length (from Anthropic spec)
pub const MAX_DESCRIPTION_LENGTH: usize = 1024;

/// Top-level frontmatter fields the validator recognizes
const KNOWN_FIELDS: [&str; 4] = ["name", "description", "license", "metadata"];

/// Validate the skill directory at `dir`
///
/// The returned report is ordered: name rules first, then frontmatter
/// fields, then warnings. An empty report means the skill passed.
pub fn validate_skill_dir(dir: &Path) -> Result<ValidationReport> {
    let mut report = ValidationReport::new();
    let dir_name = dir.file_name().and_then(|n| n.to_str()).unwrap_or_default();

    debug!("validating skill directory {:?}", dir);

    if let Some(reason) = name::name_violation(dir_name) {
        report.push(Finding::error("name", reason));
    }

    let skill_file = dir.join(SKILL_FILE);
    if !skill_file.exists() {
        return Err(SkillError::MissingSkillFile(dir.to_path_buf()));
    }

    let content = fs::read_to_string(&skill_file)?;
    let fm = frontmatter::parse(&content, &skill_file)?;

    check_name_field(&fm, dir_name, &mut report);
    check_description_field(&fm, &mut report);
    check_unknown_fields(&fm, &mut report);

    if fm.body.trim().is_empty() {
        report.push(Finding::warning("body", "skill body is empty"));
    }

    Ok(report)
}

fn check_name_field(fm: &Frontmatter, dir_name: &str, report: &mut ValidationReport) {
    let Some(value) = fm.mapping.get("name") else {
        report.push(Finding::error("name", "missing required field"));
        return;
    };

    let Some(value) = value.as_str() else {
        report.push(Finding::error("name", "must be a string"));
        return;
    };

    if value.is_empty() {
        report.push(Finding::error("name", "cannot be empty"));
    } else if value != dir_name {
        report.push(Finding::error(
            "name",
            format!("frontmatter name '{value}' does not match directory name '{dir_name}'"),
        ));
    }
}

fn check_description_field(fm: &Frontmatter, report: &mut ValidationReport) {
    let Some(value) = fm.mapping.get("description") else {
        report.push(Finding::error("description", "missing required field"));
        return;
    };

    let Some(value) = value.as_str() else {
        report.push(Finding::error("description", "must be a string"));
        return;
    };

    if value.is_empty() {
        report.push(Finding::error("description", "cannot be empty"));
        return;
    }

    let length = value.chars().count();
    if length > MAX_DESCRIPTION_LENGTH {
        report.push(Finding::error(
            "description",
            format!("description is {length} characters, maximum is {MAX_DESCRIPTION_LENGTH}"),
        ));
    }
}

fn check_unknown_fields(fm: &Frontmatter, report: &mut ValidationReport) {
    for key in fm.keys() {
        if !KNOWN_FIELDS.contains(&key) {
            report.push(Finding::warning(
                key,
                "unrecognized field is ignored by samuel",
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use samuel_types::Severity;
    use std::path::PathBuf;

    fn write_skill(parent: &Path, dir_name: &str, content: &str) -> PathBuf {
        let dir = parent.join(dir_name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(SKILL_FILE), content).unwrap();
        dir
    }

    #[test]
    fn test_valid_skill_passes() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = write_skill(
            tmp.path(),
            "pdf-tool",
            "---\nname: pdf-tool\ndescription: Extracts text from PDFs.\n---\n\n# PDF Tool\n",
        );

        let report = validate_skill_dir(&dir).unwrap();
        assert!(report.is_empty(), "unexpected findings: {:?}", report.findings);
    }

    #[test]
    fn test_name_mismatch_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = write_skill(
            tmp.path(),
            "pdf-tool",
            "---\nname: pdf_tool\ndescription: Extracts text from PDFs.\n---\nbody\n",
        );

        let report = validate_skill_dir(&dir).unwrap();
        assert!(report.has_errors());
        assert_eq!(report.error_count(), 1);
        assert!(report.findings[0].message.contains("does not match"));
    }

    #[test]
    fn test_mismatch_reported_regardless_of_other_fields() {
        // Description problems must not mask the name mismatch.
        let tmp = tempfile::tempdir().unwrap();
        let dir = write_skill(tmp.path(), "pdf-tool", "---\nname: other\n---\nbody\n");

        let report = validate_skill_dir(&dir).unwrap();
        let name_findings: Vec<_> = report
            .findings
            .iter()
            .filter(|f| f.field == "name")
            .collect();
        assert_eq!(name_findings.len(), 1);
        assert!(name_findings[0].message.contains("does not match"));
        assert!(report
            .findings
            .iter()
            .any(|f| f.field == "description" && f.severity == Severity::Error));
    }

    #[test]
    fn test_missing_description_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = write_skill(tmp.path(), "my-skill", "---\nname: my-skill\n---\nbody\n");

        let report = validate_skill_dir(&dir).unwrap();
        assert!(report.has_errors());
        assert!(report
            .findings
            .iter()
            .any(|f| f.field == "description" && f.message.contains("missing")));
    }

    #[test]
    fn test_description_length_boundary() {
        let tmp = tempfile::tempdir().unwrap();

        let exact = "d".repeat(MAX_DESCRIPTION_LENGTH);
        let dir = write_skill(
            tmp.path(),
            "at-limit",
            &format!("---\nname: at-limit\ndescription: {exact}\n---\nbody\n"),
        );
        assert!(!validate_skill_dir(&dir).unwrap().has_errors());

        let over = "d".repeat(MAX_DESCRIPTION_LENGTH + 1);
        let dir = write_skill(
            tmp.path(),
            "over-limit",
            &format!("---\nname: over-limit\ndescription: {over}\n---\nbody\n"),
        );
        let report = validate_skill_dir(&dir).unwrap();
        assert!(report.has_errors());
        assert!(report.findings[0].message.contains("1025 characters"));
    }

    #[test]
    fn test_invalid_dir_name_is_error_finding() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = write_skill(
            tmp.path(),
            "Bad_Name",
            "---\nname: Bad_Name\ndescription: x\n---\nbody\n",
        );

        let report = validate_skill_dir(&dir).unwrap();
        assert!(report.has_errors());
        assert_eq!(report.findings[0].field, "name");
        assert!(report.findings[0].message.contains("not allowed"));
    }

    #[test]
    fn test_unknown_fields_are_warnings_only() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = write_skill(
            tmp.path(),
            "my-skill",
            "---\nname: my-skill\ndescription: x\nauthor-notes: internal\n---\nbody\n",
        );

        let report = validate_skill_dir(&dir).unwrap();
        assert!(!report.has_errors());
        assert_eq!(report.warning_count(), 1);
        assert_eq!(report.findings[0].field, "author-notes");
    }

    #[test]
    fn test_empty_body_is_warning() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = write_skill(
            tmp.path(),
            "my-skill",
            "---\nname: my-skill\ndescription: x\n---\n\n",
        );

        let report = validate_skill_dir(&dir).unwrap();
        assert!(!report.has_errors());
        assert!(report.findings.iter().any(|f| f.field == "body"));
    }

    #[test]
    fn test_missing_skill_file_is_hard_error() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("my-skill");
        fs::create_dir_all(&dir).unwrap();

        let err = validate_skill_dir(&dir).unwrap_err();
        assert!(matches!(err, SkillError::MissingSkillFile(_)));
    }

    #[test]
    fn test_unparseable_frontmatter_is_hard_error() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = write_skill(tmp.path(), "my-skill", "no frontmatter here\n");

        let err = validate_skill_dir(&dir).unwrap_err();
        assert!(matches!(err, SkillError::MalformedFrontmatter { .. }));
    }
}
