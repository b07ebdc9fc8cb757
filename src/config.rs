//! Runtime configuration.
//!
//! Two layers:
//! - process settings read from the environment (after loading `.env`)
//! - per-run settings (`ComputeConfig`) built from parsed CLI args

use std::path::PathBuf;

use crate::domain::{Dimensions, OutputFormat, ShapeKind};

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "SHAPES_LOG";

/// Settings that come from the environment rather than the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// `EnvFilter` directive; `None` disables logging entirely.
    pub log_filter: Option<String>,
}

impl Settings {
    /// Load `.env` (if any) and read settings from the process environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    ///
    /// `SHAPES_LOG` wins over `RUST_LOG`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            log_filter: non_blank(LOG_ENV).or_else(|| non_blank("RUST_LOG")),
        }
    }
}

/// Everything one `shapes compute` run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputeConfig {
    /// Shape name exactly as given, kept for diagnostics.
    pub shape_name: Option<String>,
    /// Resolved selection; `None` means nothing is emitted.
    pub shape: Option<ShapeKind>,
    pub dimensions: Dimensions,
    pub format: OutputFormat,
    pub export: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn shapes_log_takes_precedence() {
        let settings = Settings::from_lookup(lookup(&[("SHAPES_LOG", "debug"), ("RUST_LOG", "warn")]));
        assert_eq!(settings.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn falls_back_to_rust_log() {
        let settings = Settings::from_lookup(lookup(&[("SHAPES_LOG", "  "), ("RUST_LOG", "trace")]));
        assert_eq!(settings.log_filter.as_deref(), Some("trace"));
    }

    #[test]
    fn unset_disables_logging() {
        assert_eq!(Settings::from_lookup(lookup(&[])), Settings::default());
    }
}
