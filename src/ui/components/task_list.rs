//! 任务卡片列表组件
//!
//! 按模型顺序渲染，每个任务恰好一行卡片。

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::model::{format_wire_date, Task};
use crate::theme::ThemeColors;

const PROGRESS_BAR_WIDTH: usize = 8;

/// 渲染任务列表
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[Task],
    selected_index: Option<usize>,
    grabbed: bool,
    colors: &ThemeColors,
) {
    // 表头
    let header = Row::new(vec![
        Cell::from(""), // 选择指示器
        Cell::from("TITLE"),
        Cell::from("DESCRIPTION"),
        Cell::from("STAGE"),
        Cell::from("PROGRESS"),
        Cell::from("DATES"),
    ])
    .style(Style::default().fg(colors.muted))
    .height(1)
    .bottom_margin(1);

    // 数据行
    let rows: Vec<Row> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let is_selected = selected_index == Some(i);
            let is_grabbed = is_selected && grabbed;

            // 抓取中的卡片用 ⠿ 指示器（拖拽手柄）
            let selector = match (is_selected, is_grabbed) {
                (_, true) => "⠿",
                (true, false) => "❯",
                _ => " ",
            };
            let selector_style = if is_grabbed {
                Style::default().fg(colors.warning)
            } else {
                Style::default().fg(colors.highlight)
            };

            let row_style = if is_grabbed {
                Style::default()
                    .fg(colors.warning)
                    .add_modifier(Modifier::BOLD)
            } else if is_selected {
                Style::default()
                    .fg(colors.text)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };

            let dates = format!(
                "{} – {}",
                format_wire_date(task.creation_date.as_deref()),
                format_wire_date(task.expired_date.as_deref())
            );

            Row::new(vec![
                Cell::from(selector).style(selector_style),
                Cell::from(task.title.clone()),
                Cell::from(task.value.clone()).style(Style::default().fg(colors.muted)),
                Cell::from(task.stage.clone())
                    .style(Style::default().fg(colors.stage_color(&task.stage))),
                Cell::from(progress_bar(task.complete_progress)),
                Cell::from(dates).style(Style::default().fg(colors.muted)),
            ])
            .style(row_style)
        })
        .collect();

    let widths = [
        Constraint::Length(2),  // 选择器
        Constraint::Fill(2),    // TITLE
        Constraint::Fill(3),    // DESCRIPTION
        Constraint::Length(14), // STAGE
        Constraint::Length(13), // PROGRESS
        Constraint::Length(24), // DATES
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(colors.border)),
        )
        .row_highlight_style(Style::default().bg(colors.bg_secondary));

    let mut table_state = TableState::default();
    table_state.select(selected_index);

    frame.render_stateful_widget(table, area, &mut table_state);
}

/// 进度条文本，如 "▓▓▓░░░░░  40%"
fn progress_bar(progress: f64) -> String {
    let clamped = progress.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * PROGRESS_BAR_WIDTH as f64).round() as usize;
    format!(
        "{}{} {:>3.0}%",
        "▓".repeat(filled),
        "░".repeat(PROGRESS_BAR_WIDTH - filled),
        clamped
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0.0), "░░░░░░░░   0%");
        assert_eq!(progress_bar(100.0), "▓▓▓▓▓▓▓▓ 100%");
        // 越界值只影响条宽，不做模型校验
        assert_eq!(progress_bar(250.0), "▓▓▓▓▓▓▓▓ 100%");
        assert_eq!(progress_bar(-5.0), "░░░░░░░░   0%");
    }

    #[test]
    fn test_progress_bar_rounds() {
        assert_eq!(progress_bar(50.0), "▓▓▓▓░░░░  50%");
    }
}
