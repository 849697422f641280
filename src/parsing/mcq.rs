//! 选择题文本解析
//!
//! 期望的格式（每题一段）：
//!
//! ```text
//! 1. Question text?
//! A) Option A
//! B) Option B
//! C) Option C
//! D) Option D
//! CORRECT: [B]
//! EXPLANATION: Why B is right.
//! ```
//!
//! 格式不完整的题目直接跳过，不报错。

use super::splitter::{numbered_chunks, NUMBER_PREFIX};
use crate::models::McqQuestion;
use tracing::debug;

/// 选项字母 → 下标
static OPTION_INDEX: phf::Map<char, usize> = phf::phf_map! {
    'A' => 0,
    'B' => 1,
    'C' => 2,
    'D' => 3,
};

/// 一道题最少需要的行数：题干 + 4 个选项 + 答案
const MIN_BLOCK_LINES: usize = 6;

/// 解析 LLM 返回的选择题，最多返回 `limit` 道
pub fn parse_mcq_response(response: &str, limit: usize) -> Vec<McqQuestion> {
    let blocks = numbered_chunks(response);
    let total_blocks = blocks.len();

    let questions: Vec<McqQuestion> = blocks
        .into_iter()
        .enumerate()
        .filter_map(|(index, block)| parse_block(index + 1, block))
        .take(limit)
        .collect();

    debug!(
        "MCQ 解析完成: {} 段文本, 有效题目 {} 道",
        total_blocks,
        questions.len()
    );

    questions
}

fn parse_block(id: usize, block: &str) -> Option<McqQuestion> {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < MIN_BLOCK_LINES {
        debug!("第 {} 段行数不足 ({}), 跳过", id, lines.len());
        return None;
    }

    let stem = NUMBER_PREFIX.replace(lines[0], "");
    let stem = stem.trim();
    if stem.is_empty() {
        return None;
    }
    let question = format!("{}?", stem.strip_suffix('?').unwrap_or(stem));

    let mut options: [Option<String>; 4] = Default::default();
    let mut correct = None;
    let mut explanation = String::new();

    for line in &lines {
        if let Some((slot, text)) = option_line(line) {
            options[slot] = Some(text.to_string());
        } else if let Some(rest) = line.strip_prefix("CORRECT:") {
            let letter: String = rest
                .trim()
                .chars()
                .filter(|c| !matches!(c, '[' | ']'))
                .collect();
            correct = single_letter(&letter).and_then(|c| OPTION_INDEX.get(&c).copied());
        } else if let Some(rest) = line.strip_prefix("EXPLANATION:") {
            explanation = rest.trim().to_string();
        }
    }

    let options: Vec<String> = options.into_iter().collect::<Option<_>>()?;
    let Some(correct_answer) = correct else {
        debug!("第 {} 题缺少有效的正确答案, 跳过", id);
        return None;
    };

    Some(McqQuestion {
        id,
        question,
        options,
        correct_answer,
        explanation,
    })
}

/// 识别 "A) 选项" 行，返回 (下标, 选项文本)
fn option_line(line: &str) -> Option<(usize, &str)> {
    let mut chars = line.chars();
    let letter = chars.next()?;
    let slot = *OPTION_INDEX.get(&letter)?;
    if chars.next()? != ')' {
        return None;
    }
    Some((slot, line[2..].trim()))
}

fn single_letter(s: &str) -> Option<char> {
    let mut chars = s.trim().chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}
