use serde::{Deserialize, Serialize};

/// 答案中的一个片段：正文或代码块
///
/// 序列化为 `{"type": "text", "content": ...}` /
/// `{"type": "code", "content": ..., "language": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Segment {
    /// 已清洗的正文
    Text { content: String },
    /// 原样保留的代码，仅去掉首尾空白
    Code {
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },
}

impl Segment {
    /// 默认的代码语言标记
    pub const DEFAULT_LANGUAGE: &'static str = "plaintext";

    pub fn text(content: impl Into<String>) -> Self {
        Segment::Text {
            content: content.into(),
        }
    }

    pub fn code(content: impl Into<String>, language: impl Into<String>) -> Self {
        Segment::Code {
            content: content.into(),
            language: Some(language.into()),
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Segment::Text { content } | Segment::Code { content, .. } => content,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Segment::Code { .. })
    }

    pub fn language(&self) -> Option<&str> {
        match self {
            Segment::Code { language, .. } => language.as_deref(),
            Segment::Text { .. } => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.content().trim().is_empty()
    }
}
