//! 底部快捷键提示栏组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 渲染底部快捷键提示栏
pub fn render(frame: &mut Frame, area: Rect, grabbed: bool, has_items: bool, colors: &ThemeColors) {
    let shortcuts = get_shortcuts(grabbed, has_items);

    let mut spans = Vec::new();
    spans.push(Span::raw("  "));

    for (i, (key, desc)) in shortcuts.iter().enumerate() {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(colors.muted),
        ));

        if i < shortcuts.len() - 1 {
            spans.push(Span::raw("   "));
        }
    }

    let line = Line::from(spans);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn get_shortcuts(grabbed: bool, has_items: bool) -> Vec<(&'static str, &'static str)> {
    if grabbed {
        return vec![
            ("j/k", "move card"),
            ("Space", "drop"),
            ("Esc", "cancel"),
        ];
    }

    if has_items {
        vec![
            ("a", "add"),
            ("Enter", "menu"),
            ("e", "edit"),
            ("x", "delete"),
            ("Space", "grab"),
            ("r", "refresh"),
            ("t", "theme"),
            ("q", "quit"),
        ]
    } else {
        vec![("a", "add"), ("r", "refresh"), ("t", "theme"), ("q", "quit")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grab_mode_shortcuts() {
        let keys: Vec<&str> = get_shortcuts(true, true).iter().map(|(k, _)| *k).collect();
        assert!(keys.contains(&"j/k"));
        assert!(!keys.contains(&"x"));
    }

    #[test]
    fn test_empty_board_hides_card_actions() {
        let keys: Vec<&str> = get_shortcuts(false, false).iter().map(|(k, _)| *k).collect();
        assert!(keys.contains(&"a"));
        assert!(!keys.contains(&"e"));
    }
}
