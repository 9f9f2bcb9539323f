use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::model::Preferences;

const DEFAULT_SEARCH_LATENCY_MS: u64 = 500;
const DEFAULT_LYRICS_DELAY_MS: u64 = 750;
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5000;
const DEFAULT_LOG_DIR: &str = ".logs";

#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    pub dark_mode: Option<bool>,
    pub list_view: Option<bool>,
    pub live_search: Option<bool>,
    pub search_latency_ms: Option<u64>,
    pub lyrics_delay_ms: Option<u64>,
    pub request_timeout_ms: Option<u64>,
    pub catalog: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub dark_mode: bool,
    pub list_view: bool,
    pub live_search: bool,
    pub search_latency: Duration,
    pub lyrics_delay: Duration,
    pub request_timeout: Duration,
    pub catalog: Option<PathBuf>,
    pub log_dir: PathBuf,
}

impl Config {
    pub fn resolve(file: Option<FileConfig>, args: &crate::cli::Args) -> Self {
        let file = file.unwrap_or_default();
        let millis = |cli: Option<u64>, toml: Option<u64>, default: u64| {
            Duration::from_millis(cli.or(toml).unwrap_or(default))
        };
        Config {
            dark_mode: args.dark || file.dark_mode.unwrap_or(false),
            list_view: args.list || file.list_view.unwrap_or(false),
            live_search: !args.no_live_search && file.live_search.unwrap_or(true),
            search_latency: millis(args.search_latency_ms, file.search_latency_ms, DEFAULT_SEARCH_LATENCY_MS),
            lyrics_delay: millis(args.lyrics_delay_ms, file.lyrics_delay_ms, DEFAULT_LYRICS_DELAY_MS),
            request_timeout: millis(None, file.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS),
            catalog: args.catalog.clone().or(file.catalog),
            log_dir: file.log_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR)),
        }
    }

    pub fn preferences(&self) -> Preferences {
        Preferences {
            dark_mode: self.dark_mode,
            list_view: self.list_view,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::resolve(None, &crate::cli::Args::default())
    }
}

pub fn find_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_owned());
    }
    let cwd_config = PathBuf::from("tuneflow.toml");
    if cwd_config.exists() {
        return Some(cwd_config);
    }
    if let Some(config_dir) = dirs::config_dir() {
        let xdg_config = config_dir.join("tuneflow").join("config.toml");
        if xdg_config.exists() {
            return Some(xdg_config);
        }
    }
    None
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)?;
    Ok(config)
}
