//! Presentation-level configuration
//!
//! Configuration for output formatting and quiz REPL behavior, resolved from
//! the config file and command-line flags by the binary.

use crate::cli::commands::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: aah_domain::OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl OutputConfig {
    /// Format for one command: the flag wins over the configured default
    pub fn resolve(&self, flag: Option<OutputFormat>) -> aah_domain::OutputFormat {
        flag.map(Into::into).unwrap_or(self.format)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: aah_domain::OutputFormat::Text,
            color: true,
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplConfig {
    /// Show progress indicators
    pub show_progress: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_overrides_configured_format() {
        let config = OutputConfig {
            format: aah_domain::OutputFormat::Json,
            color: true,
        };
        assert_eq!(config.resolve(None), aah_domain::OutputFormat::Json);
        assert_eq!(
            config.resolve(Some(OutputFormat::Text)),
            aah_domain::OutputFormat::Text
        );
    }

    #[test]
    fn test_defaults() {
        assert_eq!(OutputConfig::default().resolve(None), aah_domain::OutputFormat::Text);
        assert!(ReplConfig::default().show_progress);
    }
}
