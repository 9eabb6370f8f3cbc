//! 看板主界面渲染

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::App;
use crate::ui::components::{
    action_menu, confirm_dialog, empty_state, footer, header, task_form, task_list, toast,
};

/// 渲染看板界面
pub fn render(frame: &mut Frame, app: &App) {
    let colors = &app.colors;

    // 整屏背景
    frame.render_widget(
        Block::default().style(Style::default().bg(colors.bg)),
        frame.area(),
    );

    let [header_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    header::render(
        frame,
        header_area,
        app.api.base_url(),
        app.board.tasks.len(),
        colors,
    );

    if app.board.tasks.is_empty() {
        empty_state::render(frame, list_area, colors);
    } else {
        task_list::render(
            frame,
            list_area,
            &app.board.tasks,
            app.board.list_state.selected(),
            app.board.grabbed,
            colors,
        );
    }

    footer::render(
        frame,
        footer_area,
        app.board.grabbed,
        !app.board.tasks.is_empty(),
        colors,
    );

    // 弹窗（互斥，最后渲染盖在列表上）
    if let Some(ref menu) = app.dialogs.action_menu {
        action_menu::render(frame, menu, colors);
    }
    if let Some(ref form) = app.dialogs.task_form {
        task_form::render(frame, form, colors);
    }
    if let Some(ref confirm) = app.dialogs.delete_confirm {
        confirm_dialog::render(frame, confirm, colors);
    }

    // Toast 永远在最上层
    if let Some(ref t) = app.toast {
        toast::render(frame, &t.message, colors);
    }
}
