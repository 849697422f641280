use super::normalizer::normalize_with;
use super::segmenter::segment_with;
use super::SegmentOptions;
use crate::models::QnAEntry;
use regex::Regex;
use std::sync::LazyLock;

/// 行首的题号，如 "12. "（仅 ASCII 数字）
static NUMBERED_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[0-9]+\.[ \t]").expect("valid header regex"));

/// 题目行开头的题号前缀
pub(crate) static NUMBER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s*").expect("valid prefix regex"));

/// 使用默认选项切分文档
pub fn split_document(markdown: &str) -> Vec<QnAEntry> {
    split_document_with(markdown, &SegmentOptions::default())
}

/// 把 "1. 问题\n答案..." 格式的文档切成问答列表
///
/// 没有任何题号的文档会整体作为一道题，题目取第一行。
pub fn split_document_with(markdown: &str, options: &SegmentOptions) -> Vec<QnAEntry> {
    let chunks = numbered_chunks(markdown);

    if let Some(first) = chunks.first() {
        if !NUMBERED_HEADER.is_match(first) {
            tracing::debug!("文档开头没有题号，首段按一道题处理");
        }
    }

    chunks
        .into_iter()
        .map(|chunk| {
            let (question_line, answer_text) = chunk.split_once('\n').unwrap_or((chunk, ""));
            let question = NUMBER_PREFIX.replace(question_line, "");
            QnAEntry {
                question: normalize_with(&question, options),
                answer_parts: segment_with(answer_text, options),
            }
        })
        .collect()
}

/// 在每个 "换行 + 题号" 处切开，返回去掉首尾空白后的非空片段
///
/// 分隔用的换行本身被丢弃，题号留在下一段的开头。
pub(crate) fn numbered_chunks(markdown: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;

    for m in NUMBERED_HEADER.find_iter(markdown) {
        // 文档开头的题号不产生切分点
        if m.start() == 0 {
            continue;
        }
        chunks.push(&markdown[start..m.start() - 1]);
        start = m.start();
    }
    chunks.push(&markdown[start..]);

    chunks
        .into_iter()
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect()
}
