//! Task 数据模型（API 线上格式）
//!
//! 客户端不校验服务端数据：缺失或畸形的字段按原样展示
//! （日期解析失败显示 "Invalid Date"）。

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// 服务端不可用时的兜底 stage 列表
pub const DEFAULT_STAGES: &[&str] = &["Ready", "In Progress", "Done"];

/// 单个任务（GET /api/v1/tasks 返回的元素）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// 任务标识符（服务端生成，客户端视为不透明字符串）
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// 任务描述正文
    #[serde(default)]
    pub value: String,
    /// 创建时间（RFC 3339 字符串，原样保存）
    #[serde(rename = "creationDate", default)]
    pub creation_date: Option<String>,
    /// 截止时间
    #[serde(rename = "expiredDate", default)]
    pub expired_date: Option<String>,
    #[serde(default)]
    pub stage: String,
    /// 完成进度（0-100，服务端可能返回数字或字符串）
    #[serde(
        rename = "completeProgress",
        default,
        deserialize_with = "lenient_number"
    )]
    pub complete_progress: f64,
}

/// 写操作请求体（POST/PUT，不含 id 与 creationDate）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskPayload {
    pub title: String,
    pub value: String,
    #[serde(rename = "expiredDate")]
    pub expired_date: String,
    pub stage: String,
    #[serde(rename = "completeProgress")]
    pub complete_progress: f64,
}

/// 宽松数字反序列化：接受数字或数字字符串，其余情况回退为 0
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

/// 将线上日期格式化为展示用的本地化日期（mm/dd/yyyy）
///
/// 缺失或无法解析时返回 "Invalid Date"，与原始行为一致。
pub fn format_wire_date(raw: Option<&str>) -> String {
    parse_wire_date(raw)
        .map(|d| d.format("%m/%d/%Y").to_string())
        .unwrap_or_else(|| "Invalid Date".to_string())
}

/// 将线上日期转换为表单输入格式（YYYY-MM-DD），无法解析时返回空串
pub fn date_input_value(raw: Option<&str>) -> String {
    parse_wire_date(raw)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn parse_wire_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
