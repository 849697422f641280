//! 文本处理核心
//!
//! 把 LLM 生成的 markdown 转成结构化数据，全部是纯函数：
//!
//! - `normalizer` - 清洗正文（去符号、压缩空行）
//! - `segmenter` - 把一段答案切成正文 / 代码片段
//! - `splitter` - 把 "1. 问题" 格式的整篇文档切成问答列表
//! - `mcq` - 解析选择题文本

pub mod mcq;
pub mod normalizer;
pub mod segmenter;
pub mod splitter;

pub use mcq::parse_mcq_response;
pub use normalizer::{normalize, normalize_with, strip_feedback_markdown};
pub use segmenter::{segment, segment_with};
pub use splitter::{split_document, split_document_with};

/// 文本处理选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentOptions {
    /// 从正文中剔除的字符集合
    pub strip_symbols: String,
    /// 代码片段是否携带语言标记
    pub include_language_tag: bool,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            strip_symbols: "*#@!$>".to_string(),
            include_language_tag: true,
        }
    }
}
