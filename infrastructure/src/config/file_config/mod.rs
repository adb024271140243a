//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod language;
mod logging;
mod output;
mod storage;

pub use language::FileLanguageConfig;
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use storage::FileStorageConfig;

use aah_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Local storage settings
    pub storage: FileStorageConfig,
    /// Default language
    pub language: FileLanguageConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Diagnostic log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks:
    /// 1. `language.default` is a supported language code
    /// 2. Path fields are not set to empty strings
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Enum parse validation
        issues.extend(self.language.parse_default().1);

        // 2. Empty paths
        let paths = [
            ("storage.path", self.storage.path.as_ref()),
            ("logging.file", self.logging.file.as_ref()),
        ];
        for (field, path) in paths {
            if path.is_some_and(|p| p.as_os_str().is_empty()) {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::EmptyPath {
                        field: field.to_string(),
                    },
                    message: format!("{}: path is empty", field),
                });
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aah_domain::{Language, OutputFormat};
    use std::path::PathBuf;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[storage]
path = "/tmp/aah/local_storage.json"

[language]
default = "es"

[output]
format = "json"
color = false

[logging]
file = "/tmp/aah/aah.log"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.storage.path,
            Some(PathBuf::from("/tmp/aah/local_storage.json"))
        );
        assert!(!config.storage.ephemeral);
        assert_eq!(config.language.parse_default().0, Language::Es);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/aah/aah.log")));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[language]
default = "es"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.language.default, "es");
        // Defaults should apply
        assert!(config.storage.path.is_none());
        assert!(config.output.color);
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.language.default, "en");
        assert!(config.output.format.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_issues() {
        let mut config = FileConfig::default();
        config.language.default = "de".to_string();
        config.storage.path = Some(PathBuf::new());

        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().any(|i| i.is_error()));
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::InvalidEnumValue { field, .. } if field == "language.default"
        )));
    }
}
