//! Helpdesk Console
//!
//! 终端版的文章详情页：预览、编辑与删除一篇帮助中心文章。
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 在 tokio 运行时上执行核心库的异步调用 (`backend/`)
//!
//! 主循环保持同步；Backend 的结果通过 mpsc 通道以消息形式回到 Update 层。

mod app;
mod backend;
mod config;
mod event;
mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_support;

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use backend::Backend;
use config::{AppConfig, Cli};
use util::{init_terminal, restore_terminal};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::resolve(&cli)?;

    // 终端被 TUI 占用，日志写入文件
    let log_path = init_logging()?;

    i18n::set_language(config.language);
    view::theme::set_theme(config.theme);
    tracing::info!(
        api_root = %config.api_root,
        language = i18n::current_language().code(),
        log = %log_path.display(),
        "Starting helpdesk console for article {}",
        cli.article_id
    );

    let runtime = tokio::runtime::Runtime::new().context("starting async runtime")?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let backend = Backend::connect(&config, runtime.handle().clone(), tx)?;
    let mut app = model::App::new(&cli.article_id, backend);

    // 1. 初始化终端
    let mut terminal = init_terminal()?;

    // 2. 运行主循环
    let result = app::run(&mut terminal, &mut app, &mut rx);

    // 3. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        tracing::error!("Console exited with error: {e:#}");
    }
    result
}

/// `{cache_dir}/helpdesk-console/console.log`，默认 info 级别，可用 `RUST_LOG` 覆盖
fn init_logging() -> Result<PathBuf> {
    let dir = dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("helpdesk-console");
    std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    let path = dir.join("console.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()
        .context("installing log subscriber")?;

    Ok(path)
}
