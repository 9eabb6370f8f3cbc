//! 顶部标题栏组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 渲染标题栏：应用名 + 任务数 + API 地址
pub fn render(frame: &mut Frame, area: Rect, base_url: &str, task_count: usize, colors: &ThemeColors) {
    let count_label = if task_count == 1 {
        "1 task".to_string()
    } else {
        format!("{} tasks", task_count)
    };

    let line = Line::from(vec![
        Span::styled(
            "  TASKDECK",
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", count_label), Style::default().fg(colors.info)),
        Span::styled(format!("   {}", base_url), Style::default().fg(colors.muted)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    frame.render_widget(Paragraph::new(line).block(block), area);
}
