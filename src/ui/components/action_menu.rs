//! 卡片操作菜单组件
//!
//! 原页面里每张卡片的 "..." 弹出菜单，这里按选中卡片弹出。

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 菜单动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Edit,
    Delete,
}

impl CardAction {
    /// 动作名称
    pub fn name(&self) -> &'static str {
        match self {
            CardAction::Edit => "Edit",
            CardAction::Delete => "Delete",
        }
    }

    /// 动作描述
    pub fn description(&self) -> &'static str {
        match self {
            CardAction::Edit => "Open the task in the form",
            CardAction::Delete => "Delete the task from the server",
        }
    }
}

const ACTIONS: &[CardAction] = &[CardAction::Edit, CardAction::Delete];

/// 操作菜单数据
#[derive(Debug, Clone)]
pub struct ActionMenuData {
    /// 菜单目标任务的标题（仅展示）
    pub task_title: String,
    /// 当前选中索引
    pub selected_index: usize,
}

impl ActionMenuData {
    pub fn new(task_title: impl Into<String>) -> Self {
        Self {
            task_title: task_title.into(),
            selected_index: 0,
        }
    }

    /// 选中下一项（循环）
    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % ACTIONS.len();
    }

    /// 选中上一项（循环）
    pub fn select_previous(&mut self) {
        self.selected_index = if self.selected_index == 0 {
            ACTIONS.len() - 1
        } else {
            self.selected_index - 1
        };
    }

    /// 当前选中的动作
    pub fn selected_action(&self) -> CardAction {
        ACTIONS[self.selected_index]
    }
}

/// 渲染操作菜单
pub fn render(frame: &mut Frame, menu: &ActionMenuData, colors: &ThemeColors) {
    let area = frame.area();

    let popup_width = 36u16.min(area.width.saturating_sub(4));
    let popup_height = (ACTIONS.len() as u16) + 3;

    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", menu.task_title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.highlight))
        .style(Style::default().bg(colors.bg));

    let inner_area = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let lines: Vec<Line> = ACTIONS
        .iter()
        .enumerate()
        .map(|(i, action)| {
            let selected = i == menu.selected_index;
            let marker = if selected { "❯ " } else { "  " };
            let accent = match action {
                CardAction::Edit => colors.highlight,
                CardAction::Delete => colors.error,
            };
            let name_style = if selected {
                Style::default().fg(accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(accent)),
                Span::styled(format!("{:<8}", action.name()), name_style),
                Span::styled(action.description(), Style::default().fg(colors.muted)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_wraps() {
        let mut menu = ActionMenuData::new("Write report");
        assert_eq!(menu.selected_action(), CardAction::Edit);
        menu.select_next();
        assert_eq!(menu.selected_action(), CardAction::Delete);
        menu.select_next();
        assert_eq!(menu.selected_action(), CardAction::Edit);
        menu.select_previous();
        assert_eq!(menu.selected_action(), CardAction::Delete);
    }
}
