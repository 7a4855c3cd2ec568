mod config;
mod draft;
mod models;
mod terminal;
mod ui;

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{default_config_path, load_config};
use crate::terminal::Tui;
use crate::ui::{App, render};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "用户名/姓名登记列表")]
#[command(version)]
struct Cli {
    /// 配置文件路径，默认 ~/.config/roster/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
    /// 日志文件路径，默认 ~/.local/share/roster/roster.log
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// 获取数据目录路径 (~/.local/share/roster/)
fn get_data_dir() -> io::Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "无法获取用户数据目录"))?
        .join("roster");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

/// 日志写入文件，避免干扰终端界面
fn init_logging(log_file: Option<PathBuf>, default_level: &str) -> Result<WorkerGuard> {
    let path = match log_file {
        Some(path) => path,
        None => get_data_dir()?.join("roster.log"),
    };
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let file_name = path.file_name().context("日志路径缺少文件名")?;

    fs::create_dir_all(&dir)?;
    let appender = tracing_appender::rolling::never(&dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("无效的日志级别")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.config.or_else(default_config_path) {
        Some(path) => load_config(&path)?,
        None => config::Config::default(),
    };

    let _guard = init_logging(cli.log_file, &config.log.level).context("初始化日志失败")?;
    info!("starting roster");

    let mut app = App::new(config.ui);

    // 设置终端
    terminal::install_panic_hook();
    let mut tui = terminal::setup_terminal().context("无法初始化终端")?;

    // 主循环
    let result = run_app(&mut tui, &mut app);

    // 恢复终端，无论主循环是否出错
    let restored = terminal::restore_terminal();

    info!(entries = app.list.len(), "exiting roster");
    result.context("事件循环异常退出")?;
    restored.context("无法恢复终端")
}

fn run_app(tui: &mut Tui, app: &mut App) -> io::Result<()> {
    loop {
        tui.draw(|f| render(f, app))?;

        let event = crossterm::event::read()?;
        if ui::handle_event(app, event) {
            break;
        }
    }
    Ok(())
}
