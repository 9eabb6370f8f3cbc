//! 看板状态：有序任务列表 + 选中/抓取状态
//!
//! 任务顺序以服务端响应顺序为准，不做客户端排序。
//! 移动卡片直接交换模型中的索引，渲染始终从模型重建，
//! 因此标识符与展示内容不会失配。

use ratatui::widgets::ListState;

use crate::model::{Task, DEFAULT_STAGES};

/// 看板状态
pub struct BoardState {
    /// 任务列表（响应顺序，移动操作原地交换）
    pub tasks: Vec<Task>,
    /// 可用的 stage 名称（来自 /api/v1/stages，失败时用默认值）
    pub stages: Vec<String>,
    /// 列表选择状态
    pub list_state: ListState,
    /// 当前选中卡片是否处于抓取（移动）模式
    pub grabbed: bool,
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            stages: DEFAULT_STAGES.iter().map(|s| s.to_string()).collect(),
            list_state: ListState::default(),
            grabbed: false,
        }
    }

    /// 用新的任务列表整体替换（保序），并修正选中项
    pub fn set_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.grabbed = false;

        if self.tasks.is_empty() {
            self.list_state.select(None);
            return;
        }

        match self.list_state.selected() {
            Some(i) if i >= self.tasks.len() => {
                self.list_state.select(Some(self.tasks.len() - 1));
            }
            None => self.list_state.select(Some(0)),
            _ => {}
        }
    }

    /// 替换 stage 列表（空列表视为无效，保留现值）
    pub fn set_stages(&mut self, stages: Vec<String>) {
        if !stages.is_empty() {
            self.stages = stages;
        }
    }

    /// 当前选中的任务
    pub fn selected_task(&self) -> Option<&Task> {
        self.list_state.selected().and_then(|i| self.tasks.get(i))
    }

    /// 选中下一项（循环）
    pub fn select_next(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let next = (current + 1) % self.tasks.len();
        self.list_state.select(Some(next));
    }

    /// 选中上一项（循环）
    pub fn select_previous(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 {
            self.tasks.len() - 1
        } else {
            current - 1
        };
        self.list_state.select(Some(prev));
    }

    /// 抓取/释放当前选中卡片，返回抓取后的状态
    pub fn toggle_grab(&mut self) -> bool {
        if self.list_state.selected().is_none() {
            self.grabbed = false;
        } else {
            self.grabbed = !self.grabbed;
        }
        self.grabbed
    }

    /// 释放抓取
    pub fn release_grab(&mut self) {
        self.grabbed = false;
    }

    /// 将选中卡片沿列表移动一格（delta 为 ±1），选中跟随卡片
    ///
    /// 纯会话内的视觉重排，不回写服务端。
    pub fn move_selected(&mut self, delta: isize) -> bool {
        let Some(from) = self.list_state.selected() else {
            return false;
        };

        let to = from as isize + delta;
        if to < 0 || to as usize >= self.tasks.len() {
            return false;
        }

        let to = to as usize;
        self.tasks.swap(from, to);
        self.list_state.select(Some(to));
        true
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn board_with(ids: &[&str]) -> BoardState {
        let mut board = BoardState::new();
        board.set_tasks(ids.iter().map(|id| task(id, id)).collect());
        board
    }

    #[test]
    fn test_set_tasks_keeps_response_order() {
        let board = board_with(&["1", "2", "3"]);
        let order: Vec<&str> = board.tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(order, vec!["1", "2", "3"]);
        assert_eq!(board.list_state.selected(), Some(0));
    }

    #[test]
    fn test_set_tasks_clamps_selection() {
        let mut board = board_with(&["1", "2", "3"]);
        board.list_state.select(Some(2));

        // 刷新后列表变短，选中项回落到末尾
        board.set_tasks(vec![task("1", "A")]);
        assert_eq!(board.list_state.selected(), Some(0));

        board.set_tasks(Vec::new());
        assert_eq!(board.list_state.selected(), None);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut board = board_with(&["1", "2"]);
        board.select_next();
        assert_eq!(board.list_state.selected(), Some(1));
        board.select_next();
        assert_eq!(board.list_state.selected(), Some(0));
        board.select_previous();
        assert_eq!(board.list_state.selected(), Some(1));
    }

    #[test]
    fn test_move_selected_swaps_and_follows() {
        let mut board = board_with(&["1", "2", "3"]);

        assert!(board.move_selected(1));
        let order: Vec<&str> = board.tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(order, vec!["2", "1", "3"]);
        // 选中跟随被移动的卡片
        assert_eq!(board.list_state.selected(), Some(1));
        assert_eq!(board.selected_task().unwrap().id, "1");
    }

    #[test]
    fn test_move_selected_stops_at_edges() {
        let mut board = board_with(&["1", "2"]);
        assert!(!board.move_selected(-1));
        board.list_state.select(Some(1));
        assert!(!board.move_selected(1));
    }

    #[test]
    fn test_id_and_content_stay_in_sync_after_moves() {
        // 原实现交换 DOM 内容导致 data-task-id 与内容失配，
        // 模型层移动天然避免这一缺陷
        let mut board = BoardState::new();
        board.set_tasks(vec![task("1", "A"), task("2", "B")]);

        board.move_selected(1);

        for t in &board.tasks {
            match t.id.as_str() {
                "1" => assert_eq!(t.title, "A"),
                "2" => assert_eq!(t.title, "B"),
                other => panic!("unexpected id {other}"),
            }
        }
    }

    #[test]
    fn test_toggle_grab_requires_selection() {
        let mut board = BoardState::new();
        assert!(!board.toggle_grab());

        board.set_tasks(vec![task("1", "A")]);
        assert!(board.toggle_grab());
        assert!(!board.toggle_grab());
    }

    #[test]
    fn test_set_tasks_releases_grab() {
        let mut board = board_with(&["1", "2"]);
        board.toggle_grab();
        board.set_tasks(vec![task("1", "A")]);
        assert!(!board.grabbed);
    }

    #[test]
    fn test_set_stages_ignores_empty() {
        let mut board = BoardState::new();
        board.set_stages(Vec::new());
        assert_eq!(board.stages.len(), DEFAULT_STAGES.len());

        board.set_stages(vec!["Backlog".to_string()]);
        assert_eq!(board.stages, vec!["Backlog"]);
    }
}
