use crate::error::{KartAiError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Ark 接口默认地址
pub const DEFAULT_API_URL: &str = "https://ark.cn-beijing.volces.com/api/v3/chat/completions";

/// 默认的豆包视觉模型
pub const DEFAULT_MODEL: &str = "doubao-seed-1-6-vision-250815";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub api_url: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.into(),
            api_url: DEFAULT_API_URL.into(),
            timeout_seconds: 120,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| KartAiError::Config("找不到主目录".into()))?;
        Ok(home.join(".config").join("kart-ai").join("config.json"))
    }

    pub fn get_api_key(&self) -> Result<String> {
        // 环境变量优先
        if let Ok(key) = std::env::var("ARK_API_KEY") {
            return Ok(key);
        }

        self.api_key.clone().ok_or(KartAiError::MissingApiKey)
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.api_key = Some(key);
        self.save()
    }
}
