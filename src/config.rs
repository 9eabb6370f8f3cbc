//! 应用配置持久化
//!
//! 配置保存在 `~/.taskdeck/config.toml`，缺失或损坏时回退默认值。

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::api::DEFAULT_BASE_URL;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

/// 主题配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Dark".to_string(),
        }
    }
}

/// API 服务端配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// 任务 API 的基础地址
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// 获取 ~/.taskdeck/ 目录路径
pub fn taskdeck_dir() -> PathBuf {
    dirs::home_dir()
        .expect("Cannot find home directory")
        .join(".taskdeck")
}

/// 获取配置文件路径
fn config_path() -> PathBuf {
    taskdeck_dir().join("config.toml")
}

/// 加载配置（不存在则返回默认值）
pub fn load_config() -> Config {
    load_from(&config_path())
}

/// 保存配置
pub fn save_config(config: &Config) -> io::Result<()> {
    let dir = taskdeck_dir();
    fs::create_dir_all(&dir)?;
    save_to(&config_path(), config)
}

fn load_from(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }
    fs::read_to_string(path)
        .ok()
        .and_then(|s| toml::from_str(&s).ok())
        .unwrap_or_default()
}

fn save_to(path: &Path, config: &Config) -> io::Result<()> {
    let content = toml::to_string_pretty(config)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.theme.name, "Dark");
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from(&dir.path().join("nope.toml"));
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_load_corrupt_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "not { valid toml").unwrap();
        let config = load_from(&path);
        assert_eq!(config.theme.name, "Dark");
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.theme.name = "Light".to_string();
        config.api.base_url = "http://10.0.0.5:3000".to_string();

        save_to(&path, &config).unwrap();
        let loaded = load_from(&path);
        assert_eq!(loaded.theme.name, "Light");
        assert_eq!(loaded.api.base_url, "http://10.0.0.5:3000");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[theme]\nname = \"Light\"\n").unwrap();

        let config = load_from(&path);
        assert_eq!(config.theme.name, "Light");
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }
}
