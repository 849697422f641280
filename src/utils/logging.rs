//! 日志工具模块
//!
//! 提供日志格式化和输出的辅助函数

use tracing::info;

use crate::config::Config;
use crate::models::{McqResult, QnAEntry};

/// 记录程序启动信息
///
/// # 参数
/// - `command`: 当前执行的子命令
/// - `config`: 配置
pub fn log_startup(command: &str, config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 InterviewPrep 启动 - {}", command);
    info!("🤖 模型: {}", config.llm_model_name);
    info!(
        "{}",
        chrono::Local::now().format("开始时间: %Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
}

/// 记录问答列表的统计信息
///
/// # 参数
/// - `entries`: 解析出的问答列表
pub fn log_qna_summary(entries: &[QnAEntry]) {
    let code_blocks: usize = entries.iter().map(|e| e.code_blocks().count()).sum();
    info!("\n{}", "─".repeat(60));
    info!("✓ 共 {} 道题, 代码块 {} 个", entries.len(), code_blocks);
    for (i, entry) in entries.iter().enumerate() {
        info!(
            "  {}. {} ({} 段)",
            i + 1,
            truncate_text(&entry.question, 60),
            entry.answer_parts.len()
        );
    }
    info!("{}", "─".repeat(60));
}

/// 打印测验成绩
///
/// # 参数
/// - `result`: 判分结果
pub fn log_quiz_result(result: &McqResult) {
    info!("\n{}", "=".repeat(60));
    info!("📊 测验成绩 - {}", result.topic);
    info!("{}", "=".repeat(60));
    info!(
        "✅ 正确: {}/{}",
        result.correct_answers, result.total_questions
    );
    info!("🏅 分数: {}% (等级 {})", result.score, result.grade);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（按字符计）
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
