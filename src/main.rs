mod api;
mod app;
mod cli;
mod config;
mod dialogs;
mod error;
mod event;
mod model;
mod theme;
mod ui;

use std::io;
use std::panic;
use std::time::Instant;

use clap::Parser;
use ratatui::DefaultTerminal;

use api::ApiClient;
use app::App;
use cli::Cli;
use theme::Theme;

/// Auto-refresh interval in seconds
const AUTO_REFRESH_INTERVAL_SECS: u64 = 15;

fn main() -> io::Result<()> {
    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    // 解析命令行参数，CLI 覆盖配置文件
    let args = Cli::parse();
    let mut config = config::load_config();
    if let Some(url) = args.api_url {
        config.api.base_url = url;
    }
    if let Some(name) = args.theme {
        config.theme.name = name;
    }

    let theme = Theme::from_name(&config.theme.name);
    let api = ApiClient::new(config.api.base_url.clone());
    let mut app = App::new(api, theme);

    // 初始数据：先 stage 后任务，失败走 Toast / 默认值
    app.refresh_stages();
    app.refresh();

    // 初始化终端并运行主循环
    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &mut app);
    ratatui::restore();

    // 退出时持久化主题选择
    config.theme.name = app.theme.label().to_string();
    if let Err(e) = config::save_config(&config) {
        eprintln!("Warning: failed to save config: {}", e);
    }

    result
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    let mut last_refresh = Instant::now();

    loop {
        // 定时自动刷新；弹窗打开或卡片被抓取时跳过，避免覆盖用户输入
        if last_refresh.elapsed().as_secs() >= AUTO_REFRESH_INTERVAL_SECS {
            if !app.dialogs.has_active_dialog() && !app.board.grabbed {
                app.refresh();
            }
            last_refresh = Instant::now();
        }

        // 渲染界面
        terminal.draw(|frame| ui::board::render(frame, app))?;

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}
