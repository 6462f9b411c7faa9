//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::SiftConfig;
use std::path::Path;

/// Loads and validates a `sift.toml` configuration from a project directory.
///
/// Reads `<project_dir>/sift.toml`, parses it, and validates the suppression
/// list.
pub fn load_config(project_dir: &Path) -> Result<SiftConfig, ConfigError> {
    let config_path = project_dir.join("sift.toml");
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `sift.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<SiftConfig, ConfigError> {
    let config: SiftConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that every suppression entry is a well-formed short code
/// (`E` followed by three digits).
fn validate_config(config: &SiftConfig) -> Result<(), ConfigError> {
    for code in &config.check.allow {
        if !is_valid_code(code) {
            return Err(ConfigError::InvalidCode(code.clone()));
        }
    }
    Ok(())
}

fn is_valid_code(code: &str) -> bool {
    code.len() == 4 && code.starts_with('E') && code[1..].bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let config = load_config_from_str("").unwrap();
        assert!(config.check.allow.is_empty());
    }

    #[test]
    fn parse_allow_list() {
        let toml = r#"
[check]
allow = ["E057", "E059"]
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.check.allow, ["E057", "E059"]);
    }

    #[test]
    fn reject_malformed_code() {
        let toml = r#"
[check]
allow = ["W101"]
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCode(code) if code == "W101"));
    }

    #[test]
    fn reject_short_code() {
        let toml = r#"
[check]
allow = ["E5"]
"#;
        assert!(load_config_from_str(toml).is_err());
    }

    #[test]
    fn reject_invalid_toml() {
        let err = load_config_from_str("check = ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn load_from_disk() {
        let dir = std::env::temp_dir().join("sift_config_test");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("sift.toml"), "[check]\nallow = [\"E027\"]\n").unwrap();

        let config = load_config(&dir).unwrap();
        assert_eq!(config.check.allow, ["E027"]);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn suppression_list_feeds_filter_reporter() {
        use sift_diagnostics::catalog::{MissingSemicolonAfterStatement, UnmatchedParenthesis};
        use sift_diagnostics::{CollectingReporter, FilterReporter, Reporter};
        use sift_source::{FileId, Span};

        let config = load_config_from_str("[check]\nallow = [\"E027\"]\n").unwrap();
        let filter = FilterReporter::new(config.check.allow_set(), CollectingReporter::new());
        filter.report(
            MissingSemicolonAfterStatement {
                site: Span::new(FileId::from_raw(0), 3, 4),
            }
            .into(),
        );
        filter.report(
            UnmatchedParenthesis {
                site: Span::new(FileId::from_raw(0), 8, 9),
            }
            .into(),
        );
        let collected = filter.into_inner().take_all();
        assert_eq!(collected.len(), 1);
        assert_eq!(collected[0].code(), "E056");
    }
}
