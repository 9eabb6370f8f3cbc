mod colors;

use ratatui::style::Color;

pub use colors::*;

/// 主题类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// 主题显示名称
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    /// 从名称创建主题（用于配置加载）
    pub fn from_name(name: &str) -> Self {
        match name {
            "Light" => Theme::Light,
            _ => Theme::Dark, // 默认 Dark
        }
    }

    /// 切换到下一个主题
    pub fn next(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// 主题颜色方案
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// 主背景色
    pub bg: Color,
    /// 次级背景色（选中行等）
    pub bg_secondary: Color,
    /// 高亮色（选中项、快捷键等）
    pub highlight: Color,
    /// 普通文字
    pub text: Color,
    /// 次要文字（灰色）
    pub muted: Color,
    /// 边框颜色
    pub border: Color,
    /// 信息色（蓝色）
    pub info: Color,
    /// 警告色（黄色）- 抓取中的卡片
    pub warning: Color,
    /// 错误色（红色）- 删除确认、失败提示
    pub error: Color,
    /// stage 标签配色（按 stage 名称稳定取色）
    pub accent_palette: [Color; 6],
}

impl ThemeColors {
    /// 为 stage 名称选择一个稳定的标签色
    pub fn stage_color(&self, stage: &str) -> Color {
        let hash: usize = stage.bytes().map(usize::from).sum();
        self.accent_palette[hash % self.accent_palette.len()]
    }
}

/// 获取指定主题的颜色方案
pub fn get_theme_colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Dark => dark_colors(),
        Theme::Light => light_colors(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_falls_back_to_dark() {
        assert_eq!(Theme::from_name("Light"), Theme::Light);
        assert_eq!(Theme::from_name("Dark"), Theme::Dark);
        assert_eq!(Theme::from_name("Dracula"), Theme::Dark);
    }

    #[test]
    fn test_next_cycles() {
        assert_eq!(Theme::Dark.next(), Theme::Light);
        assert_eq!(Theme::Light.next(), Theme::Dark);
    }

    #[test]
    fn test_stage_color_is_stable() {
        let colors = dark_colors();
        assert_eq!(colors.stage_color("Ready"), colors.stage_color("Ready"));
    }
}
