//! Application configuration loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

fn default_gyms_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("gyms.json")
}

/// Settings read from `GYM_CHECKIN_*` environment variables and config files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "GYM_CHECKIN")]
pub struct AppSettings {
    /// Path to the JSON gym catalogue seeded into the gym store.
    pub gyms_path: Option<PathBuf>,
    /// Emit logs as JSON lines instead of human-readable text.
    #[ortho_config(default = false)]
    pub log_json: bool,
}

impl AppSettings {
    /// Return the configured gym catalogue path, falling back to the bundled
    /// fixture.
    pub fn gyms_path(&self) -> PathBuf {
        self.gyms_path.clone().unwrap_or_else(default_gyms_path)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("gym-checkin")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("GYM_CHECKIN_GYMS_PATH", None::<String>),
            ("GYM_CHECKIN_LOG_JSON", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert!(!settings.log_json);
        assert_eq!(settings.gyms_path(), default_gyms_path());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("GYM_CHECKIN_GYMS_PATH", Some("/tmp/gyms.json".to_owned())),
            ("GYM_CHECKIN_LOG_JSON", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert!(settings.log_json);
        assert_eq!(settings.gyms_path(), PathBuf::from("/tmp/gyms.json"));
    }
}
