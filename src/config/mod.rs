use anyhow::{Context, Result};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

fn default_endpoint() -> String {
    "http://localhost:5000".into()
}

/// Persistent settings, stored at `~/.copysmith/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,
    /// Data directory holding the history file - computed, not serialized
    #[serde(skip)]
    pub data_dir: PathBuf,

    /// Base URL of the generation service.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Override for the history file location; defaults to
    /// `<data_dir>/history.json`.
    #[serde(default)]
    pub history_file: Option<PathBuf>,

    /// Where exports land; defaults to the current directory.
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            data_dir: PathBuf::new(),
            endpoint: default_endpoint(),
            history_file: None,
            export_dir: None,
        }
    }
}

impl Config {
    pub fn load_or_init() -> Result<Self> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        let copysmith_dir = home.join(".copysmith");
        let config_path = copysmith_dir.join("config.toml");

        if !copysmith_dir.exists() {
            fs::create_dir_all(&copysmith_dir)
                .context("Failed to create .copysmith directory")?;
        }

        let mut config = if config_path.exists() {
            let contents =
                fs::read_to_string(&config_path).context("Failed to read config file")?;
            let mut config: Config =
                toml::from_str(&contents).context("Failed to parse config file")?;
            config.config_path.clone_from(&config_path);
            config.data_dir = copysmith_dir;
            config
        } else {
            let config = Self {
                config_path: config_path.clone(),
                data_dir: copysmith_dir,
                ..Self::default()
            };
            config.save()?;
            config
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides to config
    pub fn apply_env_overrides(&mut self) {
        if let Ok(endpoint) = std::env::var("COPYSMITH_ENDPOINT") {
            if !endpoint.is_empty() {
                self.endpoint = endpoint;
            }
        }

        if let Ok(history) = std::env::var("COPYSMITH_HISTORY_FILE") {
            if !history.is_empty() {
                self.history_file = Some(PathBuf::from(history));
            }
        }

        if let Ok(dir) = std::env::var("COPYSMITH_EXPORT_DIR") {
            if !dir.is_empty() {
                self.export_dir = Some(PathBuf::from(dir));
            }
        }
    }

    pub fn history_path(&self) -> PathBuf {
        self.history_file
            .clone()
            .unwrap_or_else(|| self.data_dir.join("history.json"))
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
    }

    #[test]
    fn defaults_point_at_local_service() {
        let config = Config::default();
        assert_eq!(config.endpoint, "http://localhost:5000");
        assert!(config.history_file.is_none());
        assert_eq!(config.export_dir(), PathBuf::from("."));
    }

    #[test]
    fn history_path_prefers_explicit_override() {
        let config = Config {
            data_dir: PathBuf::from("/data"),
            history_file: Some(PathBuf::from("/elsewhere/h.json")),
            ..Config::default()
        };
        assert_eq!(config.history_path(), PathBuf::from("/elsewhere/h.json"));

        let config = Config {
            data_dir: PathBuf::from("/data"),
            ..Config::default()
        };
        assert_eq!(config.history_path(), PathBuf::from("/data/history.json"));
    }

    #[test]
    fn save_then_parse_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        let config = Config {
            config_path: config_path.clone(),
            data_dir: dir.path().to_path_buf(),
            endpoint: "http://gen.internal:9000".into(),
            ..Config::default()
        };
        config.save().unwrap();

        let contents = fs::read_to_string(&config_path).unwrap();
        let parsed: Config = toml::from_str(&contents).unwrap();
        assert_eq!(parsed.endpoint, "http://gen.internal:9000");
        // Computed paths are skipped during serialization.
        assert!(!contents.contains("config_path"));
    }

    #[test]
    fn minimal_toml_fills_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.endpoint, "http://localhost:5000");
    }

    #[test]
    fn env_overrides_win() {
        let _guard = env_lock();
        // SAFETY: serialized by the env lock; tests are the only writers.
        unsafe {
            std::env::set_var("COPYSMITH_ENDPOINT", "http://override:8000");
        }

        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.endpoint, "http://override:8000");

        unsafe {
            std::env::remove_var("COPYSMITH_ENDPOINT");
        }
    }
}
