//! 终端生命周期
//!
//! 进入/退出 raw 模式与备用屏幕；任何退出路径（包括 panic）都会恢复终端

use std::io;
use std::panic;

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::warn;

pub type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// 设置终端；中途失败时撤销已生效的步骤
pub fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;

    let setup = execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
        .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));

    setup.inspect_err(|_| {
        let _ = restore_terminal();
    })
}

/// 恢复终端，每一步都会尝试，返回第一个错误
pub fn restore_terminal() -> io::Result<()> {
    run_all(&[
        &|| disable_raw_mode(),
        &|| execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture),
        &|| execute!(io::stdout(), Show),
    ])
}

/// panic 时先恢复终端，再交给默认 hook 打印信息
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));
}

fn run_all(steps: &[&dyn Fn() -> io::Result<()>]) -> io::Result<()> {
    let mut first = Ok(());
    for step in steps {
        if let Err(e) = step() {
            warn!(error = %e, "terminal restore step failed");
            if first.is_ok() {
                first = Err(e);
            }
        }
    }
    first
}
