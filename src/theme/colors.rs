//! 主题颜色定义

use ratatui::style::Color;

use super::ThemeColors;

/// 深色主题（默认）
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(24, 24, 24),           // 深灰背景
        bg_secondary: Color::Rgb(48, 48, 48), // 选中行背景
        highlight: Color::Rgb(0, 255, 136),   // 亮绿色
        text: Color::White,
        muted: Color::Rgb(128, 128, 128), // 灰色
        border: Color::Rgb(68, 68, 68),   // 深灰边框
        info: Color::Rgb(100, 181, 246),  // 蓝色
        warning: Color::Rgb(255, 213, 79), // 黄色
        error: Color::Rgb(255, 85, 85),   // 红色
        accent_palette: [
            Color::Rgb(235, 130, 130), // coral
            Color::Rgb(230, 200, 105), // gold
            Color::Rgb(130, 205, 145), // mint
            Color::Rgb(120, 175, 225), // sky
            Color::Rgb(185, 148, 225), // lavender
            Color::Rgb(110, 198, 195), // aqua
        ],
    }
}

/// 浅色主题
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(250, 250, 250),           // 浅灰背景
        bg_secondary: Color::Rgb(230, 230, 230), // 选中行背景
        highlight: Color::Rgb(0, 128, 68),       // 深绿色
        text: Color::Rgb(30, 30, 30),            // 深灰文字
        muted: Color::Rgb(120, 120, 120),
        border: Color::Rgb(200, 200, 200),
        info: Color::Rgb(33, 150, 243),  // 蓝色
        warning: Color::Rgb(255, 152, 0), // 橙黄色
        error: Color::Rgb(200, 50, 50),  // 红色
        accent_palette: [
            Color::Rgb(200, 80, 80),   // brick
            Color::Rgb(180, 140, 30),  // ochre
            Color::Rgb(50, 140, 80),   // green
            Color::Rgb(40, 110, 190),  // blue
            Color::Rgb(130, 90, 190),  // violet
            Color::Rgb(30, 140, 150),  // teal
        ],
    }
}
