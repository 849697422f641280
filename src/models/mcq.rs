use serde::{Deserialize, Serialize};

/// 一道选择题（含答案）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McqQuestion {
    /// 在原始文本中的序号（从1开始）
    pub id: usize,
    pub question: String,
    /// 按 A/B/C/D 顺序排列的四个选项
    pub options: Vec<String>,
    /// 正确选项下标（0-based）
    pub correct_answer: usize,
    #[serde(default)]
    pub explanation: String,
}

/// 下发给考生的题目（不含答案和解析）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: usize,
    pub question: String,
    pub options: Vec<String>,
}

impl From<&McqQuestion> for QuizQuestion {
    fn from(q: &McqQuestion) -> Self {
        Self {
            id: q.id,
            question: q.question.clone(),
            options: q.options.clone(),
        }
    }
}

/// 一次测验
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizForTest {
    pub questions: Vec<QuizQuestion>,
    pub topic: String,
    pub difficulty: String,
    pub total_questions: usize,
    /// 答题时限（分钟）
    pub time_limit: u32,
}

/// 成绩等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => Grade::APlus,
            80..=89 => Grade::A,
            70..=79 => Grade::B,
            60..=69 => Grade::C,
            50..=59 => Grade::D,
            _ => Grade::F,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 单题判分详情
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedResult {
    pub question_number: usize,
    pub question: String,
    /// 考生所选选项的文本，未作答时为 "Not Answered"
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
    pub explanation: String,
    pub options: Vec<String>,
}

/// 测验成绩
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McqResult {
    pub topic: String,
    pub total_questions: usize,
    pub correct_answers: usize,
    /// 百分制分数
    pub score: u32,
    pub grade: Grade,
    pub ai_feedback: String,
    pub detailed_results: Vec<DetailedResult>,
    /// RFC 3339 时间戳
    pub timestamp: String,
}
