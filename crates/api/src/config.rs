//! Application configuration loaded from environment variables.

use std::path::PathBuf;

use common::ValidationPolicy;

/// Dataset location relative to `HOME` on the hosting platform.
const HOSTED_DATASET_SEGMENTS: [&str; 4] = ["site", "Data", "wwwroot", "vaccinations.json"];

/// Dataset location relative to the working directory for local runs.
const LOCAL_DATASET_PATH: &str = "Data/vaccinations.json";

/// Where the dataset file is looked for when `DATASET_PATH` is not set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatasetMode {
    /// `$HOME/site/Data/wwwroot/vaccinations.json`.
    #[default]
    Hosted,
    /// `Data/vaccinations.json` in the working directory.
    Local,
}

impl DatasetMode {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("local") {
            DatasetMode::Local
        } else {
            DatasetMode::Hosted
        }
    }
}

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `3000`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `DATASET_PATH` — explicit dataset file; overrides `DATASET_MODE`
/// - `DATASET_MODE` — `hosted` (default) or `local`
/// - `HOME` — base directory for the hosted dataset path
/// - `STRICT_NATIONAL_ID` — `true`/`1` to require digits in national IDs
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub dataset_path: PathBuf,
    pub validation_policy: ValidationPolicy,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            dataset_path: resolve_dataset_path(&lookup),
            validation_policy: match lookup("STRICT_NATIONAL_ID") {
                Some(v) if is_truthy(&v) => ValidationPolicy::Strict,
                _ => ValidationPolicy::Lenient,
            },
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            dataset_path: PathBuf::from(LOCAL_DATASET_PATH),
            validation_policy: ValidationPolicy::Lenient,
        }
    }
}

fn resolve_dataset_path(lookup: &impl Fn(&str) -> Option<String>) -> PathBuf {
    if let Some(path) = lookup("DATASET_PATH").filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }

    let mode = lookup("DATASET_MODE")
        .map(|m| DatasetMode::parse(&m))
        .unwrap_or_default();

    match (mode, lookup("HOME").filter(|h| !h.is_empty())) {
        (DatasetMode::Hosted, Some(home)) => HOSTED_DATASET_SEGMENTS
            .iter()
            .fold(PathBuf::from(home), |path, segment| path.join(segment)),
        _ => PathBuf::from(LOCAL_DATASET_PATH),
    }
}

fn is_truthy(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
