//! 空列表占位组件

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 渲染空列表占位
pub fn render(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No tasks",
            Style::default().fg(colors.muted),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(colors.muted)),
            Span::styled("a", Style::default().fg(colors.highlight)),
            Span::styled(" to add one, ", Style::default().fg(colors.muted)),
            Span::styled("r", Style::default().fg(colors.highlight)),
            Span::styled(" to refresh", Style::default().fg(colors.muted)),
        ]),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(Style::default().fg(colors.border)),
    );

    frame.render_widget(paragraph, area);
}
