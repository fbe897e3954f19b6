use crate::error::{CompareCliError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 採点APIのURLを上書きする環境変数
pub const ENDPOINT_ENV: &str = "IMAGE_COMPARE_ENDPOINT";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub timeout_seconds: u64,
    pub animate: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000".into(),
            timeout_seconds: 60,
            animate: true,
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
            .ok_or_else(|| CompareCliError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("image-compare").join("config.json"))
    }

    /// 採点APIのベースURL
    ///
    /// 優先順位: コマンドライン引数 > 環境変数 > 設定ファイル
    pub fn resolve_endpoint(&self, cli_endpoint: Option<&str>) -> String {
        self.resolve_endpoint_with(cli_endpoint, std::env::var(ENDPOINT_ENV).ok().as_deref())
    }

    /// 環境変数の値を明示して解決する（空白のみの値は未設定扱い）
    pub fn resolve_endpoint_with(&self, cli_endpoint: Option<&str>, env_endpoint: Option<&str>) -> String {
        if let Some(endpoint) = cli_endpoint {
            return endpoint.to_string();
        }

        match env_endpoint {
            Some(endpoint) if !endpoint.trim().is_empty() => endpoint.to_string(),
            _ => self.endpoint.clone(),
        }
    }

    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(CompareCliError::Config(format!(
                "URLは http:// または https:// で始めてください: {}",
                endpoint
            )));
        }
        self.endpoint = endpoint;
        self.save()
    }

    pub fn set_timeout(&mut self, seconds: u64) -> Result<()> {
        if seconds == 0 {
            return Err(CompareCliError::Config("タイムアウトは1秒以上にしてください".into()));
        }
        self.timeout_seconds = seconds;
        self.save()
    }
}
