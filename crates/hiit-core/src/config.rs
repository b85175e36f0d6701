use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "hiit";
const DATA_FILE_NAME: &str = "routines.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// File holding the routine slot. Falls back to the platform data dir.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Prefix prepended to every navigation path, e.g. `/hiit`.
    #[serde(default)]
    pub base_path: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/hiit/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("hiit/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("hiit\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Missing or unparsable files yield the defaults.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            if let Ok(content) = std::fs::read_to_string(path) {
                if let Ok(config) = toml::from_str(&content) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn default_data_file() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR).join(DATA_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(DATA_FILE_NAME))
    }

    pub fn effective_data_file(&self) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(Self::default_data_file)
    }

    /// Normalized base path: leading slash, no trailing slash, empty for root.
    pub fn effective_base_path(&self) -> String {
        normalize_base_path(self.base_path.as_deref().unwrap_or(""))
    }

    pub fn with_base_path(mut self, base_path: Option<String>) -> Self {
        if base_path.is_some() {
            self.base_path = base_path;
        }
        self
    }

    pub fn with_data_file(mut self, data_file: Option<PathBuf>) -> Self {
        if data_file.is_some() {
            self.data_file = data_file;
        }
        self
    }
}

pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.toml"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data_file = \"/tmp/routines.json\"\nbase_path = \"/hiit/\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path);
        assert_eq!(
            config.effective_data_file(),
            PathBuf::from("/tmp/routines.json")
        );
        assert_eq!(config.effective_base_path(), "/hiit");
    }

    #[test]
    fn test_invalid_toml_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_file = [not toml").unwrap();

        assert_eq!(AppConfig::load_from(&path), AppConfig::default());
    }

    #[test]
    fn test_overrides_only_apply_when_present() {
        let config = AppConfig {
            data_file: Some(PathBuf::from("a.json")),
            base_path: Some("/x".to_string()),
        };

        let same = config.clone().with_base_path(None).with_data_file(None);
        assert_eq!(same, config);

        let overridden = config
            .with_base_path(Some("y".to_string()))
            .with_data_file(Some(PathBuf::from("b.json")));
        assert_eq!(overridden.effective_base_path(), "/y");
        assert_eq!(overridden.effective_data_file(), PathBuf::from("b.json"));
    }

    #[test]
    fn test_normalize_base_path() {
        assert_eq!(normalize_base_path(""), "");
        assert_eq!(normalize_base_path("/"), "");
        assert_eq!(normalize_base_path("app"), "/app");
        assert_eq!(normalize_base_path("/app/"), "/app");
        assert_eq!(normalize_base_path("/a/b"), "/a/b");
    }
}
