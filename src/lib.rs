//! # Interview Prep
//!
//! 面试准备助手：把 LLM 生成的 markdown 转成结构化的问答和选择题
//!
//! ## 架构设计
//!
//! ### ① 文本处理核心（Parsing）
//! - `parsing/` - 纯函数，无 I/O、无共享状态
//! - `normalize` - 清洗正文
//! - `segment` - 答案 → 正文 / 代码片段
//! - `split_document` - "1. 问题" 文档 → 问答列表
//! - `parse_mcq_response` - 选择题文本 → 题目列表
//!
//! ### ② 数据模型（Models）
//! - `Segment` / `QnAEntry` - 问答
//! - `McqQuestion` / `McqResult` - 选择题和成绩
//! - `SessionProfile` - 会话输入
//!
//! ### ③ 业务能力层（Services）
//! - `TextGenerator` - 文本生成能力（`LlmService` 为 OpenAI 兼容实现）
//! - `InterviewService` - 生成会话、追加题目、生成答案
//! - `McqService` - 生成测验、判分、评语
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod parsing;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{QnAEntry, Segment, SessionProfile};
pub use parsing::{normalize, parse_mcq_response, segment, split_document, SegmentOptions};
pub use services::{InterviewService, LlmService, McqService, TextGenerator};
