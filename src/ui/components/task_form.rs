//! 任务表单弹窗组件（新建/编辑共用）
//!
//! 有 task_id 时保存走更新（PUT），否则走创建（POST），二者互斥。

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::{date_input_value, Task, TaskPayload};
use crate::theme::ThemeColors;

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Value,
    DueDate,
    Stage,
    Progress,
}

impl FormField {
    /// 下一个字段（循环）
    pub fn next(&self) -> Self {
        match self {
            FormField::Title => FormField::Value,
            FormField::Value => FormField::DueDate,
            FormField::DueDate => FormField::Stage,
            FormField::Stage => FormField::Progress,
            FormField::Progress => FormField::Title,
        }
    }

    /// 上一个字段（循环）
    pub fn prev(&self) -> Self {
        match self {
            FormField::Title => FormField::Progress,
            FormField::Value => FormField::Title,
            FormField::DueDate => FormField::Value,
            FormField::Stage => FormField::DueDate,
            FormField::Progress => FormField::Stage,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Value => "Description",
            FormField::DueDate => "Due date",
            FormField::Stage => "Stage",
            FormField::Progress => "Progress",
        }
    }
}

/// 任务表单数据
#[derive(Debug, Clone)]
pub struct TaskFormData {
    /// 编辑目标的标识符；None 表示新建
    pub task_id: Option<String>,
    pub title: String,
    pub value: String,
    /// 截止日期输入（YYYY-MM-DD）
    pub due_date: String,
    /// 可选的 stage 列表
    pub stages: Vec<String>,
    /// 当前选中的 stage 索引
    pub stage_index: usize,
    /// 进度输入（纯数字）
    pub progress: String,
    /// 当前聚焦的字段
    pub focus: FormField,
}

impl TaskFormData {
    /// 新建任务的空表单
    pub fn new_create(stages: &[String]) -> Self {
        let stage_index = stages.iter().position(|s| s == "Ready").unwrap_or(0);
        Self {
            task_id: None,
            title: String::new(),
            value: String::new(),
            due_date: String::new(),
            stages: stages.to_vec(),
            stage_index,
            progress: "0".to_string(),
            focus: FormField::Title,
        }
    }

    /// 从服务端返回的任务预填编辑表单
    pub fn from_task(task: &Task, stages: &[String]) -> Self {
        let mut stages = stages.to_vec();
        if stages.is_empty() {
            stages.push(task.stage.clone());
        }
        // 服务端不校验 stage，列表里没有就补进去
        let stage_index = match stages.iter().position(|s| *s == task.stage) {
            Some(i) => i,
            None => {
                stages.push(task.stage.clone());
                stages.len() - 1
            }
        };

        Self {
            task_id: Some(task.id.clone()),
            title: task.title.clone(),
            value: task.value.clone(),
            due_date: date_input_value(task.expired_date.as_deref()),
            stages,
            stage_index,
            progress: format_progress(task.complete_progress),
            focus: FormField::Title,
        }
    }

    /// 是否为编辑（而非新建）
    pub fn is_edit(&self) -> bool {
        self.task_id.is_some()
    }

    /// 当前选中的 stage 名称
    pub fn stage(&self) -> &str {
        self.stages
            .get(self.stage_index)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// 向聚焦字段输入字符（按字段过滤非法字符）
    pub fn input_char(&mut self, c: char) {
        match self.focus {
            FormField::Title => self.title.push(c),
            FormField::Value => self.value.push(c),
            FormField::DueDate => {
                if (c.is_ascii_digit() || c == '-') && self.due_date.len() < 10 {
                    self.due_date.push(c);
                }
            }
            FormField::Stage => {} // stage 用左右键切换
            FormField::Progress => {
                if c.is_ascii_digit() && self.progress.len() < 3 {
                    self.progress.push(c);
                }
            }
        }
    }

    /// 从聚焦字段删除一个字符
    pub fn delete_char(&mut self) {
        match self.focus {
            FormField::Title => {
                self.title.pop();
            }
            FormField::Value => {
                self.value.pop();
            }
            FormField::DueDate => {
                self.due_date.pop();
            }
            FormField::Stage => {}
            FormField::Progress => {
                self.progress.pop();
            }
        }
    }

    /// 聚焦下一个字段
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// 聚焦上一个字段
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// 切换到上一个 stage（循环）
    pub fn stage_prev(&mut self) {
        if self.stages.is_empty() {
            return;
        }
        self.stage_index = if self.stage_index == 0 {
            self.stages.len() - 1
        } else {
            self.stage_index - 1
        };
    }

    /// 切换到下一个 stage（循环）
    pub fn stage_next(&mut self) {
        if self.stages.is_empty() {
            return;
        }
        self.stage_index = (self.stage_index + 1) % self.stages.len();
    }

    /// 生成写请求体
    pub fn payload(&self) -> TaskPayload {
        TaskPayload {
            title: self.title.clone(),
            value: self.value.clone(),
            expired_date: self.due_date.clone(),
            stage: self.stage().to_string(),
            complete_progress: self.progress.trim().parse().unwrap_or(0.0),
        }
    }
}

/// 进度值转输入文本（整数值不带小数点）
fn format_progress(progress: f64) -> String {
    if progress.fract() == 0.0 {
        format!("{}", progress as i64)
    } else {
        format!("{}", progress)
    }
}

/// 渲染任务表单弹窗
pub fn render(frame: &mut Frame, form: &TaskFormData, colors: &ThemeColors) {
    let area = frame.area();

    let popup_width = 62u16.min(area.width.saturating_sub(4));
    let popup_height = 14u16;

    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let title = if form.is_edit() { " Edit Task " } else { " New Task " };
    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.highlight))
        .style(Style::default().bg(colors.bg));

    let inner_area = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    // 布局: 空行 + 5 个字段行（行间留白）+ 提示行
    let [_, title_area, _, value_area, _, date_area, _, stage_area, _, progress_area, _, hint_area] =
        Layout::vertical([Constraint::Length(1); 12]).areas(inner_area);

    render_text_field(frame, title_area, form, FormField::Title, &form.title, colors);
    render_text_field(frame, value_area, form, FormField::Value, &form.value, colors);
    render_text_field(frame, date_area, form, FormField::DueDate, &form.due_date, colors);
    render_stage_field(frame, stage_area, form, colors);
    render_text_field(
        frame,
        progress_area,
        form,
        FormField::Progress,
        &form.progress,
        colors,
    );

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(colors.highlight)),
        Span::styled(" field  ", Style::default().fg(colors.muted)),
        Span::styled("Enter", Style::default().fg(colors.highlight)),
        Span::styled(" save  ", Style::default().fg(colors.muted)),
        Span::styled("Esc", Style::default().fg(colors.highlight)),
        Span::styled(" cancel", Style::default().fg(colors.muted)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    form: &TaskFormData,
    field: FormField,
    content: &str,
    colors: &ThemeColors,
) {
    let focused = form.focus == field;
    let label_style = if focused {
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.muted)
    };

    let mut spans = vec![
        Span::styled(format!("  {:<12}", field.label()), label_style),
        Span::styled(content.to_string(), Style::default().fg(colors.text)),
    ];
    if focused {
        // 光标
        spans.push(Span::styled("█", Style::default().fg(colors.highlight)));
    }
    if field == FormField::DueDate && content.is_empty() && !focused {
        spans.push(Span::styled(
            "YYYY-MM-DD",
            Style::default().fg(colors.muted),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_stage_field(frame: &mut Frame, area: Rect, form: &TaskFormData, colors: &ThemeColors) {
    let focused = form.focus == FormField::Stage;
    let label_style = if focused {
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.muted)
    };
    let arrow_style = if focused {
        Style::default().fg(colors.highlight)
    } else {
        Style::default().fg(colors.muted)
    };

    let line = Line::from(vec![
        Span::styled(format!("  {:<12}", FormField::Stage.label()), label_style),
        Span::styled("◂ ", arrow_style),
        Span::styled(
            form.stage().to_string(),
            Style::default().fg(colors.stage_color(form.stage())),
        ),
        Span::styled(" ▸", arrow_style),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stages() -> Vec<String> {
        vec![
            "Ready".to_string(),
            "In Progress".to_string(),
            "Done".to_string(),
        ]
    }

    fn sample_task() -> Task {
        Task {
            id: "abc123".to_string(),
            title: "Write report".to_string(),
            value: "Quarterly numbers".to_string(),
            creation_date: Some("2024-03-01T10:00:00.000Z".to_string()),
            expired_date: Some("2024-03-15T00:00:00.000Z".to_string()),
            stage: "In Progress".to_string(),
            complete_progress: 40.0,
        }
    }

    #[test]
    fn test_create_form_defaults() {
        let form = TaskFormData::new_create(&stages());
        assert!(!form.is_edit());
        assert_eq!(form.stage(), "Ready");
        assert_eq!(form.progress, "0");
        assert!(form.title.is_empty());
    }

    #[test]
    fn test_from_task_prefills_every_field() {
        let form = TaskFormData::from_task(&sample_task(), &stages());
        assert_eq!(form.task_id.as_deref(), Some("abc123"));
        assert_eq!(form.title, "Write report");
        assert_eq!(form.value, "Quarterly numbers");
        assert_eq!(form.due_date, "2024-03-15");
        assert_eq!(form.stage(), "In Progress");
        assert_eq!(form.progress, "40");
    }

    #[test]
    fn test_from_task_appends_unknown_stage() {
        let mut task = sample_task();
        task.stage = "Blocked".to_string();

        let form = TaskFormData::from_task(&task, &stages());
        assert_eq!(form.stage(), "Blocked");
        assert_eq!(form.stages.len(), 4);
    }

    #[test]
    fn test_payload_has_no_id() {
        let form = TaskFormData::from_task(&sample_task(), &stages());
        let payload = form.payload();
        assert_eq!(payload.title, "Write report");
        assert_eq!(payload.expired_date, "2024-03-15");
        assert_eq!(payload.complete_progress, 40.0);
        // is_edit 与 payload 分离：id 只决定请求走 PUT 还是 POST
        assert!(form.is_edit());
    }

    #[test]
    fn test_input_filters_by_field() {
        let mut form = TaskFormData::new_create(&stages());

        form.focus = FormField::Progress;
        form.progress.clear();
        for c in "9a5".chars() {
            form.input_char(c);
        }
        assert_eq!(form.progress, "95");

        form.focus = FormField::DueDate;
        for c in "2024-x03-15".chars() {
            form.input_char(c);
        }
        assert_eq!(form.due_date, "2024-03-15");

        // 已满 10 位后不再接收
        form.input_char('9');
        assert_eq!(form.due_date, "2024-03-15");
    }

    #[test]
    fn test_focus_cycles() {
        let mut form = TaskFormData::new_create(&stages());
        assert_eq!(form.focus, FormField::Title);
        for _ in 0..5 {
            form.focus_next();
        }
        assert_eq!(form.focus, FormField::Title);
        form.focus_prev();
        assert_eq!(form.focus, FormField::Progress);
    }

    #[test]
    fn test_stage_cycles() {
        let mut form = TaskFormData::new_create(&stages());
        form.stage_next();
        assert_eq!(form.stage(), "In Progress");
        form.stage_prev();
        form.stage_prev();
        assert_eq!(form.stage(), "Done");
    }

    #[test]
    fn test_progress_parse_fallback() {
        let mut form = TaskFormData::new_create(&stages());
        form.progress = String::new();
        assert_eq!(form.payload().complete_progress, 0.0);
    }
}
