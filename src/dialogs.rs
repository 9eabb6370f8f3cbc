//! 对话框状态管理
//!
//! 管理所有 TUI 对话框的显示状态和数据。弹窗互斥：事件层按
//! 固定优先级分发，同一时刻只有一个弹窗接收输入。

// 从 ui/components 导入对话框数据类型
pub use crate::ui::components::action_menu::ActionMenuData;
pub use crate::ui::components::confirm_dialog::DeleteConfirmData;
pub use crate::ui::components::task_form::TaskFormData;

/// 对话框状态
#[derive(Debug, Default)]
pub struct DialogState {
    /// 任务表单弹窗（新建/编辑共用）
    pub task_form: Option<TaskFormData>,
    /// 删除确认弹窗
    pub delete_confirm: Option<DeleteConfirmData>,
    /// 卡片操作菜单
    pub action_menu: Option<ActionMenuData>,
}

impl DialogState {
    /// 创建新的对话框状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭所有对话框
    pub fn close_all(&mut self) {
        self.task_form = None;
        self.delete_confirm = None;
        self.action_menu = None;
    }

    /// 检查是否有活跃的对话框
    pub fn has_active_dialog(&self) -> bool {
        self.task_form.is_some() || self.delete_confirm.is_some() || self.action_menu.is_some()
    }
}

// ============================================================================
// Tests
// ============================================================================
