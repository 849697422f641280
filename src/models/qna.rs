use super::segment::Segment;
use serde::{Deserialize, Serialize};

/// 一道面试题及其分段后的答案
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QnAEntry {
    pub question: String,
    #[serde(rename = "answerParts", default)]
    pub answer_parts: Vec<Segment>,
}

impl QnAEntry {
    pub fn new(question: impl Into<String>, answer_parts: Vec<Segment>) -> Self {
        Self {
            question: question.into(),
            answer_parts,
        }
    }

    /// 去掉内容为空的片段（入库前的清理）
    pub fn without_blank_parts(mut self) -> Self {
        self.answer_parts.retain(|part| !part.is_blank());
        self
    }

    pub fn code_blocks(&self) -> impl Iterator<Item = &Segment> {
        self.answer_parts.iter().filter(|part| part.is_code())
    }
}
