//! `[output]` section: how views are printed by default
//!
//! ```toml
//! [output]
//! format = "json"   # "text" (default) or "json" for report, plan, resources...
//! color = false     # plain text, same as passing --no-color every time
//! ```

use aah_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// The view format as it appears in the config file
pub use aah_domain::OutputFormat as FileOutputFormat;

/// Display defaults read from the config file
///
/// Command-line flags take precedence: `--output` replaces `format` for the
/// command it is given to, and `--no-color` turns color off regardless of
/// `color`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Default format for every printable view; unset means text
    pub format: Option<OutputFormat>,
    /// Whether headings, badges and prompts are colored
    pub color: bool,
}

impl FileOutputConfig {
    /// The default view format once the file is applied
    pub fn default_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    /// Whether to color output, given the `--no-color` flag
    pub fn use_color(&self, no_color_flag: bool) -> bool {
        self.color && !no_color_flag
    }
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}
