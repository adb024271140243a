//! Language configuration from TOML (`[language]` section)

use aah_domain::{ConfigIssue, ConfigIssueCode, Language, Severity};
use serde::{Deserialize, Serialize};

/// Raw language configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLanguageConfig {
    /// Language used until the user picks one (`en` or `es`)
    pub default: String,
}

impl Default for FileLanguageConfig {
    fn default() -> Self {
        Self {
            default: Language::default().code().to_string(),
        }
    }
}

impl FileLanguageConfig {
    /// Parse the default language, falling back to English on an unknown code
    pub fn parse_default(&self) -> (Language, Vec<ConfigIssue>) {
        match self.default.parse::<Language>() {
            Ok(language) => (language, Vec::new()),
            Err(_) => (
                Language::default(),
                vec![ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "language.default".to_string(),
                        value: self.default.clone(),
                        valid_values: Language::ALL.iter().map(|l| l.code().to_string()).collect(),
                    },
                    message: format!(
                        "language.default: unknown language '{}', falling back to 'en'",
                        self.default
                    ),
                }],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default() {
        let config = FileLanguageConfig {
            default: "es".to_string(),
        };
        let (language, issues) = config.parse_default();
        assert_eq!(language, Language::Es);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_unknown_language_warns() {
        let config = FileLanguageConfig {
            default: "fr".to_string(),
        };
        let (language, issues) = config.parse_default();
        assert_eq!(language, Language::En);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }
}
