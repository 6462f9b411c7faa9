//! Configuration data types.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The top-level `sift.toml` configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SiftConfig {
    /// Settings for the diagnostic check pass.
    #[serde(default)]
    pub check: CheckConfig,
}

/// Settings controlling which diagnostics are reported.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Diagnostic short codes to suppress (e.g., `["E057"]`).
    #[serde(default)]
    pub allow: Vec<String>,
}

impl CheckConfig {
    /// Returns the suppression list as a set, for use with a filtering
    /// reporter.
    pub fn allow_set(&self) -> HashSet<String> {
        self.allow.iter().cloned().collect()
    }
}
