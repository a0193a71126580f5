use std::{
    path::Path,
    time::Duration,
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    core::WordstackError,
    persistence::{
        get_data_file_path,
        load_json_or_default_from,
        save_json_to,
    },
};

pub const SETTINGS_FILE: &str = "settings.json";
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the word server; `/api/words` and `/api/update` hang off it.
    pub server_url: String,
    pub request_timeout_secs: u64,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            request_timeout_secs: 30,
            window_width: 900.0,
            window_height: 640.0,
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        Self::load_from(&get_data_file_path(SETTINGS_FILE))
    }

    /// Reads settings from `path`, falling back to defaults for a missing or
    /// unreadable file and for a server url that fails validation. A missing
    /// file is created with the defaults.
    pub fn load_from(path: &Path) -> Self {
        let first_run = !path.exists();
        let mut settings: Settings = load_json_or_default_from(path);

        if let Err(e) = settings.validate() {
            tracing::warn!(error = %e, "invalid settings, using default server url");
            settings.server_url = DEFAULT_SERVER_URL.to_string();
        }

        if first_run {
            if let Err(e) = save_json_to(&settings, path) {
                tracing::warn!(path = %path.display(), error = %e, "failed to write default settings");
            }
        }

        settings
    }

    pub fn validate(&self) -> Result<(), WordstackError> {
        let url = self.server_url.trim();
        let rest = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"))
            .ok_or_else(|| WordstackError::InvalidServerUrl(self.server_url.clone()))?;

        if rest.is_empty() || rest.starts_with('/') {
            return Err(WordstackError::InvalidServerUrl(self.server_url.clone()));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}
