//! 日志初始化

use tracing_subscriber::EnvFilter;

/// 默认日志级别
const DEFAULT_DIRECTIVE: &str = "interview_prep=info";
const VERBOSE_DIRECTIVE: &str = "interview_prep=debug";

/// 初始化全局日志
///
/// 优先使用 `RUST_LOG`；重复初始化时静默忽略（测试里会多次调用）。
pub fn init(verbose: bool) {
    let default = if verbose {
        VERBOSE_DIRECTIVE
    } else {
        DEFAULT_DIRECTIVE
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
