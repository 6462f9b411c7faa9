//! Diagnostic severity levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The severity of a diagnostic, fixed per catalog entry.
///
/// Exactly two levels exist at this layer: a `Warning` marks a likely defect
/// (e.g., use of a name that may be an undeclared global) and an `Error`
/// marks a definite one. Softer tiers are a consumer concern.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Severity {
    /// A likely defect that does not make the input invalid.
    Warning,
    /// A definite defect in the input.
    Error,
}

impl Severity {
    /// Returns `true` if this severity is [`Error`](Severity::Error).
    pub fn is_error(self) -> bool {
        self == Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// The severity of a single message part within a diagnostic.
///
/// The first part of every diagnostic carries the diagnostic's own severity;
/// every subsequent part is a [`Note`](PartSeverity::Note) providing
/// secondary context (e.g., "declared here").
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum PartSeverity {
    /// Secondary context attached to a diagnostic.
    Note,
    /// A likely defect.
    Warning,
    /// A definite defect.
    Error,
}

impl From<Severity> for PartSeverity {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Warning => PartSeverity::Warning,
            Severity::Error => PartSeverity::Error,
        }
    }
}

impl fmt::Display for PartSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartSeverity::Note => write!(f, "note"),
            PartSeverity::Warning => write!(f, "warning"),
            PartSeverity::Error => write!(f, "error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering() {
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn is_error() {
        assert!(Severity::Error.is_error());
        assert!(!Severity::Warning.is_error());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Severity::Error), "error");
        assert_eq!(format!("{}", Severity::Warning), "warning");
        assert_eq!(format!("{}", PartSeverity::Note), "note");
        assert_eq!(format!("{}", PartSeverity::Error), "error");
    }

    #[test]
    fn part_severity_from_severity() {
        assert_eq!(PartSeverity::from(Severity::Error), PartSeverity::Error);
        assert_eq!(PartSeverity::from(Severity::Warning), PartSeverity::Warning);
    }

    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        let back: Severity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Severity::Warning);
    }
}
