//! Error types for the derivation engine.

use crate::validate::ValidationIssue;

/// Errors that can occur while deriving or checking a character record.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// The character entries failed validation; no record was produced.
    #[error("{0}")]
    Validation(ValidationErrors),

    /// The input document could not be parsed.
    #[error("invalid character input: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience result type for derivation operations.
pub type MechResult<T> = Result<T, MechError>;

/// The error-level issues that stopped a record from being built.
#[derive(Debug, Clone)]
pub struct ValidationErrors(pub Vec<ValidationIssue>);

impl ValidationErrors {
    /// The individual issues, in the order they were found.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.0
    }

    /// Returns true if any issue concerns the given field.
    pub fn mentions(&self, field: &str) -> bool {
        self.0.iter().any(|i| i.field == field)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation failed")?;
        for issue in &self.0 {
            write!(f, "\n  {issue}")?;
        }
        Ok(())
    }
}

impl MechError {
    /// Returns the validation issues if this is a validation failure.
    pub fn validation_issues(&self) -> Option<&[ValidationIssue]> {
        match self {
            Self::Validation(errors) => Some(errors.issues()),
            Self::Parse(_) => None,
        }
    }
}
