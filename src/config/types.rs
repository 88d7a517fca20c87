use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub storage: StorageConfig,
}

/// Endpoints and credential source for the movie catalog search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Base URL of the search API.
    pub api_base_url: String,
    /// Base URL posters are served from, keyed by poster path.
    pub image_base_url: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.themoviedb.org/3".to_string(),
            image_base_url: "https://image.tmdb.org/t/p/w200".to_string(),
            api_key_env: "TMDB_API_KEY".to_string(),
        }
    }
}

/// Where persisted collections live.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Override for the data directory; defaults to the platform data dir.
    pub data_dir: Option<PathBuf>,
}
