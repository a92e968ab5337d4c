//! Runtime configuration for the console front end.

use std::path::PathBuf;

use crate::args::Args;

/// Default tracing filter.
const DEFAULT_LOG_FILTER: &str = "info";

/// Settings resolved from the environment, then overridden by flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `tracing-subscriber` filter directive.
    pub log_filter: String,
    /// Directory for derived output names. Next to the first input when unset.
    pub output_dir: Option<PathBuf>,
    /// Pick files with native dialogs instead of prompts.
    pub dialog: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }
}

impl AppConfig {
    /// Resolve settings through `lookup`, which maps a variable name to its value.
    ///
    /// `TEXMIX_DIALOG` is only honored when the `dialog` feature is compiled in.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_filter: lookup("TEXMIX_LOG")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            output_dir: lookup("TEXMIX_OUTPUT_DIR").map(PathBuf::from),
            dialog: cfg!(feature = "dialog") && lookup("TEXMIX_DIALOG").is_some(),
        }
    }

    /// Apply command-line overrides.
    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(filter) = &args.log {
            self.log_filter = filter.clone();
        }
        if let Some(dir) = &args.output_dir {
            self.output_dir = Some(dir.clone());
        }
        if args.dialog {
            self.dialog = true;
        }
        self
    }
}
