use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::app::App;
use crate::ui::components::action_menu::CardAction;
use crate::ui::components::task_form::FormField;

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            // 只处理按下事件
            if key.kind != KeyEventKind::Press {
                return Ok(true);
            }
            handle_key(app, key);
        }
    }

    Ok(!app.should_quit)
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // 优先处理弹窗事件

    // 任务表单
    if app.dialogs.task_form.is_some() {
        handle_task_form_key(app, key);
        return;
    }

    // 删除确认弹窗
    if app.dialogs.delete_confirm.is_some() {
        handle_delete_confirm_key(app, key);
        return;
    }

    // 卡片操作菜单
    if app.dialogs.action_menu.is_some() {
        handle_action_menu_key(app, key);
        return;
    }

    // 抓取模式下按键只作用于被抓取的卡片
    if app.board.grabbed {
        handle_grab_key(app, key);
        return;
    }

    handle_board_key(app, key);
}

/// 处理看板主界面的键盘事件
fn handle_board_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') => app.quit(),

        // 导航
        KeyCode::Char('j') | KeyCode::Down => app.board.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.board.select_previous(),

        // 新建任务
        KeyCode::Char('a') => app.open_create_form(),

        // 编辑当前任务
        KeyCode::Char('e') => app.open_edit_form(),

        // 删除当前任务
        KeyCode::Char('x') => app.open_delete_confirm(),

        // 操作菜单
        KeyCode::Enter => app.open_action_menu(),

        // 抓取当前卡片（拖拽的键盘等价操作）
        KeyCode::Char(' ') | KeyCode::Char('m') => {
            app.board.toggle_grab();
        }

        // 刷新
        KeyCode::Char('r') | KeyCode::Char('R') => app.refresh(),

        // 主题切换
        KeyCode::Char('t') | KeyCode::Char('T') => app.cycle_theme(),

        _ => {}
    }
}

/// 处理抓取（移动）模式的键盘事件
fn handle_grab_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 移动卡片
        KeyCode::Char('j') | KeyCode::Down => {
            app.board.move_selected(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.board.move_selected(-1);
        }

        // 放下卡片
        KeyCode::Char(' ') | KeyCode::Char('m') | KeyCode::Enter | KeyCode::Esc => {
            app.board.release_grab();
        }

        KeyCode::Char('q') => app.quit(),

        _ => {}
    }
}

/// 处理任务表单的键盘事件
fn handle_task_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 取消
        KeyCode::Esc => {
            app.dialogs.task_form = None;
        }

        // 保存
        KeyCode::Enter => app.save_task_form(),

        // 字段切换
        KeyCode::Tab | KeyCode::Down => {
            if let Some(form) = app.dialogs.task_form.as_mut() {
                form.focus_next();
            }
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(form) = app.dialogs.task_form.as_mut() {
                form.focus_prev();
            }
        }

        // Stage 字段用左右键切换取值
        KeyCode::Left => {
            if let Some(form) = app.dialogs.task_form.as_mut() {
                if form.focus == FormField::Stage {
                    form.stage_prev();
                }
            }
        }
        KeyCode::Right => {
            if let Some(form) = app.dialogs.task_form.as_mut() {
                if form.focus == FormField::Stage {
                    form.stage_next();
                }
            }
        }

        // 删除字符
        KeyCode::Backspace => {
            if let Some(form) = app.dialogs.task_form.as_mut() {
                form.delete_char();
            }
        }

        // 输入字符
        KeyCode::Char(c) => {
            if let Some(form) = app.dialogs.task_form.as_mut() {
                form.input_char(c);
            }
        }

        _ => {}
    }
}

/// 处理删除确认弹窗的键盘事件
fn handle_delete_confirm_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.dialogs.delete_confirm = None;
        }
        _ => {}
    }
}

/// 处理卡片操作菜单的键盘事件
fn handle_action_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if let Some(menu) = app.dialogs.action_menu.as_mut() {
                menu.select_next();
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if let Some(menu) = app.dialogs.action_menu.as_mut() {
                menu.select_previous();
            }
        }
        KeyCode::Enter => {
            let Some(menu) = app.dialogs.action_menu.take() else {
                return;
            };
            match menu.selected_action() {
                CardAction::Edit => app.open_edit_form(),
                CardAction::Delete => app.open_delete_confirm(),
            }
        }
        KeyCode::Esc | KeyCode::Char('q') => {
            app.dialogs.action_menu = None;
        }
        _ => {}
    }
}
