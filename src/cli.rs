//! 命令行参数定义

use clap::Parser;

/// Taskdeck 命令行参数
#[derive(Debug, Parser)]
#[command(
    name = "taskdeck",
    version,
    about = "A terminal task board for a REST task API"
)]
pub struct Cli {
    /// 任务 API 的基础地址（覆盖配置文件）
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// 启动主题（Dark / Light，覆盖配置文件）
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["taskdeck"]);
        assert!(cli.api_url.is_none());
        assert!(cli.theme.is_none());
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::parse_from(["taskdeck", "--api-url", "http://10.0.0.5:3000", "--theme", "Light"]);
        assert_eq!(cli.api_url.as_deref(), Some("http://10.0.0.5:3000"));
        assert_eq!(cli.theme.as_deref(), Some("Light"));
    }
}
