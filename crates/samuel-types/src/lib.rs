//! Samuel Types - Core types shared across the samuel workspace
//!
//! This module defines the validation report types produced by skill
//! validation and consumed by the CLI.

pub mod report;

pub use report::{Finding, Severity, ValidationReport};
