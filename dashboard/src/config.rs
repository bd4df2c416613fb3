//! Dashboard configuration loaded via OrthoConfig.
//!
//! Values come from `HR_DASHBOARD_*` environment variables and optional
//! configuration files. Command-line arguments are owned by the CLI and are
//! not fed through this loader.

use std::ffi::OsString;
use std::time::Duration;

use camino::Utf8PathBuf;
use color_eyre::eyre::eyre;
use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::DEFAULT_FETCH_LIMIT;
use crate::outbound::dummyjson::DEFAULT_ENDPOINT;

const DEFAULT_DATA_DIR: &str = ".hr-dashboard";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_EXAMPLE_COUNT: usize = 24;

/// Program name handed to the loader in place of real arguments.
const PROGRAM_NAME: &str = "hr-dashboard";

/// Settings controlling storage location, the remote source and logging.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HR_DASHBOARD")]
pub struct DashboardSettings {
    /// Directory holding the persisted session flag and bookmarks.
    pub data_dir: Option<String>,
    /// Base URL of the DummyJSON-compatible user service.
    pub endpoint: Option<String>,
    /// Number of users requested per listing fetch.
    pub fetch_limit: Option<u32>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Serve generated employees from this seed instead of the remote source.
    pub example_seed: Option<u64>,
    /// Number of generated employees in offline mode.
    pub example_count: Option<usize>,
    /// Emit logs as JSON lines.
    #[ortho_config(default = false)]
    pub log_json: bool,
}

impl DashboardSettings {
    /// Load settings from the environment and configuration files.
    ///
    /// # Errors
    ///
    /// Returns an error when a source holds an invalid value.
    pub fn load() -> color_eyre::Result<Self> {
        Self::load_from_iter([OsString::from(PROGRAM_NAME)])
            .map_err(|err| eyre!("failed to load dashboard settings: {err}"))
    }

    /// Return the configured data directory, falling back to the default.
    pub fn data_dir(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(self.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR))
    }

    /// Return the configured endpoint, falling back to the public service.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    /// Return the configured fetch limit.
    pub fn fetch_limit(&self) -> u32 {
        self.fetch_limit.unwrap_or(DEFAULT_FETCH_LIMIT)
    }

    /// Return the configured request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Return the offline seed and count when offline mode is enabled.
    pub fn example_source(&self) -> Option<(u64, usize)> {
        self.example_seed
            .map(|seed| (seed, self.example_count.unwrap_or(DEFAULT_EXAMPLE_COUNT)))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for dashboard configuration parsing.

    use super::*;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 7] = [
        "HR_DASHBOARD_DATA_DIR",
        "HR_DASHBOARD_ENDPOINT",
        "HR_DASHBOARD_FETCH_LIMIT",
        "HR_DASHBOARD_TIMEOUT_SECS",
        "HR_DASHBOARD_EXAMPLE_SEED",
        "HR_DASHBOARD_EXAMPLE_COUNT",
        "HR_DASHBOARD_LOG_JSON",
    ];

    fn load() -> DashboardSettings {
        DashboardSettings::load().expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load();
        assert_eq!(settings.data_dir(), Utf8PathBuf::from(DEFAULT_DATA_DIR));
        assert_eq!(settings.endpoint(), "https://dummyjson.com");
        assert_eq!(settings.fetch_limit(), 208);
        assert_eq!(settings.timeout(), Duration::from_secs(10));
        assert_eq!(settings.example_source(), None);
        assert!(!settings.log_json);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("HR_DASHBOARD_DATA_DIR", Some("/tmp/hr-data".to_owned())),
            ("HR_DASHBOARD_ENDPOINT", Some("http://localhost:9000".to_owned())),
            ("HR_DASHBOARD_FETCH_LIMIT", Some("30".to_owned())),
            ("HR_DASHBOARD_TIMEOUT_SECS", Some("3".to_owned())),
            ("HR_DASHBOARD_EXAMPLE_SEED", Some("42".to_owned())),
            ("HR_DASHBOARD_EXAMPLE_COUNT", Some("12".to_owned())),
            ("HR_DASHBOARD_LOG_JSON", Some("true".to_owned())),
        ]);

        let settings = load();
        assert_eq!(settings.data_dir(), Utf8PathBuf::from("/tmp/hr-data"));
        assert_eq!(settings.endpoint(), "http://localhost:9000");
        assert_eq!(settings.fetch_limit(), 30);
        assert_eq!(settings.timeout(), Duration::from_secs(3));
        assert_eq!(settings.example_source(), Some((42, 12)));
        assert!(settings.log_json);
    }

    #[rstest]
    fn example_count_defaults_when_only_the_seed_is_set() {
        let mut vars = VARS.map(|name| (name, None::<String>));
        vars[4].1 = Some("7".to_owned());
        let _guard = lock_env(vars);

        assert_eq!(load().example_source(), Some((7, DEFAULT_EXAMPLE_COUNT)));
    }
}
