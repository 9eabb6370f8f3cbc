//! 全局应用状态与操作入口
//!
//! 所有可变状态都集中在 [`App`] 上：看板模型、对话框、Toast、主题。
//! 事件层只调用这里的方法，不直接持有任何全局状态。

use std::time::{Duration, Instant};

use crate::api::ApiClient;
use crate::dialogs::{ActionMenuData, DeleteConfirmData, DialogState, TaskFormData};
use crate::model::BoardState;
use crate::theme::{get_theme_colors, Theme, ThemeColors};

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 看板状态
    pub board: BoardState,
    /// 对话框状态
    pub dialogs: DialogState,
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// API 客户端
    pub api: ApiClient,
}

impl App {
    pub fn new(api: ApiClient, theme: Theme) -> Self {
        let colors = get_theme_colors(theme);

        Self {
            should_quit: false,
            board: BoardState::new(),
            dialogs: DialogState::new(),
            toast: None,
            theme,
            colors,
            api,
        }
    }

    /// 重新拉取任务列表并整体重建看板
    ///
    /// 失败时保留当前列表并用 Toast 提示（原实现静默清空列表，
    /// 这里显式改进）。
    pub fn refresh(&mut self) {
        match self.api.list_tasks() {
            Ok(tasks) => self.board.set_tasks(tasks),
            Err(e) => self.show_toast(format!("Failed to load tasks: {}", e)),
        }
    }

    /// 拉取 stage 列表（失败时静默保留默认值，表单仍可用）
    pub fn refresh_stages(&mut self) {
        if let Ok(stages) = self.api.list_stages() {
            self.board.set_stages(stages);
        }
    }

    // ========== Task Form ==========

    /// 打开新建任务表单
    pub fn open_create_form(&mut self) {
        self.dialogs.task_form = Some(TaskFormData::new_create(&self.board.stages));
    }

    /// 打开编辑表单：按标识符重新拉取单个任务并预填
    ///
    /// 标识符在列表渲染与按键之间可能已失效，此处不做防护，
    /// 失败按普通请求错误提示。
    pub fn open_edit_form(&mut self) {
        let Some(task) = self.board.selected_task() else {
            return;
        };
        let id = task.id.clone();

        match self.api.get_task(&id) {
            Ok(task) => {
                self.dialogs.task_form = Some(TaskFormData::from_task(&task, &self.board.stages));
            }
            Err(e) => self.show_toast(format!("Failed to fetch task: {}", e)),
        }
    }

    /// 提交表单：有 id 走更新，否则走创建，二者互斥。
    /// 无论成败都关闭表单并刷新一次列表（与原页面流程一致），
    /// 失败额外用 Toast 提示。
    pub fn save_task_form(&mut self) {
        let Some(form) = self.dialogs.task_form.take() else {
            return;
        };
        let payload = form.payload();

        let result = match form.task_id.as_deref() {
            Some(id) => self.api.update_task(id, &payload),
            None => self.api.create_task(&payload),
        };

        match result {
            Ok(()) => {
                let verb = if form.is_edit() { "updated" } else { "created" };
                self.show_toast(format!("Task {}: {}", verb, payload.title));
            }
            Err(e) => self.show_toast(format!("Save failed: {}", e)),
        }

        self.refresh();
    }

    // ========== Delete ==========

    /// 打开删除确认弹窗
    pub fn open_delete_confirm(&mut self) {
        let Some(task) = self.board.selected_task() else {
            return;
        };
        self.dialogs.delete_confirm = Some(DeleteConfirmData::new(
            task.id.clone(),
            task.title.clone(),
        ));
    }

    /// 确认删除：发出一次删除请求并刷新一次列表
    pub fn confirm_delete(&mut self) {
        let Some(confirm) = self.dialogs.delete_confirm.take() else {
            return;
        };

        match self.api.delete_task(&confirm.task_id) {
            Ok(()) => self.show_toast(format!("Deleted: {}", confirm.task_title)),
            Err(e) => self.show_toast(format!("Delete failed: {}", e)),
        }

        self.refresh();
    }

    // ========== Action Menu ==========

    /// 打开当前选中卡片的操作菜单
    pub fn open_action_menu(&mut self) {
        let Some(task) = self.board.selected_task() else {
            return;
        };
        self.dialogs.action_menu = Some(ActionMenuData::new(task.title.clone()));
    }

    // ========== Theme ==========

    /// 切换到下一个主题
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.colors = get_theme_colors(self.theme);
        self.show_toast(format!("Theme: {}", self.theme.label()));
    }

    // ========== Toast ==========

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, Duration::from_secs(2)));
    }

    /// 更新 Toast 状态（清理过期的 Toast）
    pub fn update_toast(&mut self) {
        if let Some(ref toast) = self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;

    fn test_app() -> App {
        // 不触网的用例只操作本地状态
        App::new(ApiClient::new("http://localhost:3000"), Theme::Dark)
    }

    fn task(id: &str, title: &str) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            value: String::new(),
            creation_date: None,
            expired_date: None,
            stage: "Ready".to_string(),
            complete_progress: 0.0,
        }
    }

    #[test]
    fn test_toast_expires() {
        let toast = Toast::new("hello", Duration::from_secs(0));
        assert!(toast.is_expired());

        let toast = Toast::new("hello", Duration::from_secs(60));
        assert!(!toast.is_expired());
    }

    #[test]
    fn test_update_toast_clears_expired() {
        let mut app = test_app();
        app.toast = Some(Toast::new("old", Duration::from_secs(0)));
        app.update_toast();
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_open_create_form_uses_board_stages() {
        let mut app = test_app();
        app.board.set_stages(vec!["Backlog".to_string(), "Ready".to_string()]);
        app.open_create_form();

        let form = app.dialogs.task_form.as_ref().unwrap();
        assert!(!form.is_edit());
        assert_eq!(form.stage(), "Ready");
    }

    #[test]
    fn test_dialog_openers_require_selection() {
        let mut app = test_app();
        app.open_action_menu();
        app.open_delete_confirm();
        assert!(!app.dialogs.has_active_dialog());

        app.board.set_tasks(vec![task("1", "A")]);
        app.open_delete_confirm();
        let confirm = app.dialogs.delete_confirm.as_ref().unwrap();
        assert_eq!(confirm.task_id, "1");
        assert_eq!(confirm.task_title, "A");
    }

    #[test]
    fn test_cycle_theme_updates_colors_and_toasts() {
        let mut app = test_app();
        app.cycle_theme();
        assert_eq!(app.theme, Theme::Light);
        assert_eq!(app.toast.as_ref().unwrap().message, "Theme: Light");
    }
}
