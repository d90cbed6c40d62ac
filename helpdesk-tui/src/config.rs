//! 配置与命令行参数
//!
//! 配置文件位于 `{config_dir}/helpdesk-console/config.json`，缺失时使用默认值；
//! 命令行参数覆盖配置文件。

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::view::theme::Theme;

pub const DEFAULT_API_ROOT: &str = "http://localhost:3000/api";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Terminal console for viewing, editing and deleting a helpdesk article
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Identifier of the article to open
    #[arg(value_name = "ARTICLE_ID")]
    pub article_id: String,

    /// Backend API root, e.g. https://support.example.com/api
    #[arg(long, env = "HELPDESK_API_ROOT")]
    pub api_root: Option<String>,

    /// Interface language (en-US, zh-CN)
    #[arg(long)]
    pub language: Option<String>,

    /// Configuration file path
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_root: String,
    pub language: Language,
    pub theme: Theme,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_root: DEFAULT_API_ROOT.to_string(),
            language: Language::default(),
            theme: Theme::default(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("helpdesk-console")
            .join("config.json")
    }

    /// 从文件加载；文件不存在时返回默认配置
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// 读取配置文件并叠加命令行参数
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let path = cli.config.clone().unwrap_or_else(Self::default_path);
        let mut config = Self::load(&path)?;
        config.apply_cli(cli)?;
        Ok(config)
    }

    fn apply_cli(&mut self, cli: &Cli) -> Result<()> {
        if let Some(api_root) = &cli.api_root {
            self.api_root.clone_from(api_root);
        }
        if let Some(code) = &cli.language {
            let Some(language) = Language::from_code(code) else {
                bail!("unsupported language '{code}' (expected en-US or zh-CN)");
            };
            self.language = language;
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}
