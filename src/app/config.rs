use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use thiserror::Error;

use crate::celebration::BurstConfig;
use crate::ui_constants::WINDOW_SIZE;

/// Launch options. Read once at startup, never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_size: [f32; 2],
    pub celebration: BurstConfig,
    /// Floating hearts around the prompt card
    pub show_decorations: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_size: WINDOW_SIZE,
            celebration: BurstConfig::default(),
            show_decorations: true,
        }
    }
}

lazy_static! {
    pub static ref APP_CONFIG: RwLock<AppConfig> = RwLock::new(AppConfig::default());
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    pub fn is_missing_file(&self) -> bool {
        matches!(self, ConfigError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

fn config_file_path() -> PathBuf {
    // Allow override for tests and packaging via env var
    if let Ok(p) = std::env::var("VALENTINE_CONFIG_PATH") {
        return PathBuf::from(p);
    }
    PathBuf::from("valentine.json")
}

impl AppConfig {
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Configured window size, or the default when it is not a usable size.
    pub fn window_size(&self) -> [f32; 2] {
        let [w, h] = self.window_size;
        let usable = |v: f32| v.is_finite() && v >= 200.0;
        if usable(w) && usable(h) {
            [w, h]
        } else {
            WINDOW_SIZE
        }
    }
}

pub fn load_config_from_disk() {
    let path = config_file_path();
    match AppConfig::load_from_file(&path) {
        Ok(cfg) => {
            if let Err(e) = cfg.celebration.validate() {
                log::warn!("Celebration settings in {} will be refused: {e}", path.display());
            }
            *APP_CONFIG.write().unwrap_or_else(|e| e.into_inner()) = cfg;
            log::info!("Loaded config from {}", path.display());
        }
        Err(e) if e.is_missing_file() => {
            log::info!("No config at {}, using defaults", path.display());
        }
        Err(e) => {
            // Keep defaults if unreadable
            log::warn!("Using default config; {e}");
        }
    }
}

/// Runs `f` against the loaded config.
pub fn with_config<F, R>(f: F) -> R
where
    F: FnOnce(&AppConfig) -> R,
{
    let cfg = APP_CONFIG.read().unwrap_or_else(|e| e.into_inner());
    f(&cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Temp file named with the process id so parallel test runs do not collide.
    fn temp_config_path(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("{}_{}.json", name, std::process::id()));
        p
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let path = temp_config_path("valentine_cfg_partial");
        std::fs::write(
            &path,
            r#"{ "show_decorations": false, "celebration": { "spread": 120.0 } }"#,
        )
        .unwrap();

        let cfg = AppConfig::load_from_file(&path).unwrap();
        assert!(!cfg.show_decorations);
        assert_eq!(cfg.celebration.spread, 120.0);
        assert_eq!(cfg.celebration.particle_count, 150);
        assert_eq!(cfg.window_size, WINDOW_SIZE);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn missing_file_is_reported_as_missing() {
        let path = temp_config_path("valentine_cfg_absent");
        let _ = std::fs::remove_file(&path);
        let err = AppConfig::load_from_file(&path).unwrap_err();
        assert!(err.is_missing_file(), "{err}");
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let path = temp_config_path("valentine_cfg_broken");
        std::fs::write(&path, "{ not json").unwrap();
        let err = AppConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(!err.is_missing_file());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn unusable_window_size_falls_back() {
        let mut cfg = AppConfig::default();
        assert_eq!(cfg.window_size(), WINDOW_SIZE);
        cfg.window_size = [800.0, 900.0];
        assert_eq!(cfg.window_size(), [800.0, 900.0]);
        cfg.window_size = [f32::NAN, 900.0];
        assert_eq!(cfg.window_size(), WINDOW_SIZE);
        cfg.window_size = [10.0, 900.0];
        assert_eq!(cfg.window_size(), WINDOW_SIZE);
    }

    #[test]
    fn config_round_trips_through_json() {
        let cfg = AppConfig::default();
        let text = serde_json::to_string_pretty(&cfg).unwrap();
        let back: AppConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back, cfg);
    }
}
