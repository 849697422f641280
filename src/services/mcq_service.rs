//! 选择题测验服务
//!
//! 生成测验、判分、附加 AI 评语

use tracing::{info, warn};

use super::llm_service::TextGenerator;
use super::prompts;
use crate::config::Config;
use crate::error::{AppResult, McqError, ValidationError};
use crate::models::{DetailedResult, Grade, McqQuestion, McqResult, QuizForTest, QuizQuestion};
use crate::parsing::{parse_mcq_response, strip_feedback_markdown};

/// 默认难度
pub const DEFAULT_DIFFICULTY: &str = "medium";

/// 答题时限（分钟）
pub const TIME_LIMIT_MINUTES: u32 = 45;

const NOT_ANSWERED: &str = "Not Answered";

/// 可选的测验主题
pub fn available_topics() -> &'static [&'static str] {
    &[
        "JavaScript Fundamentals",
        "React Development",
        "Node.js Backend",
        "Python Programming",
        "Data Structures",
        "Algorithms",
        "Database Management",
        "System Design",
        "Web Development",
        "Machine Learning",
        "Cybersecurity",
        "DevOps",
        "Cloud Computing",
        "Mobile Development",
        "Software Engineering",
    ]
}

/// 判分：未作答或越界的答案记为错误
///
/// 返回的 `topic` 与 `ai_feedback` 为空，由调用方补充。
pub fn evaluate(questions: &[McqQuestion], answers: &[Option<usize>]) -> McqResult {
    let detailed_results: Vec<DetailedResult> = questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let user_choice = answers.get(index).copied().flatten();
            let user_answer = user_choice
                .and_then(|choice| question.options.get(choice))
                .cloned()
                .unwrap_or_else(|| NOT_ANSWERED.to_string());

            DetailedResult {
                question_number: index + 1,
                question: question.question.clone(),
                user_answer,
                correct_answer: question
                    .options
                    .get(question.correct_answer)
                    .cloned()
                    .unwrap_or_default(),
                is_correct: user_choice == Some(question.correct_answer),
                explanation: question.explanation.clone(),
                options: question.options.clone(),
            }
        })
        .collect();

    let total_questions = questions.len();
    let correct_answers = detailed_results.iter().filter(|r| r.is_correct).count();
    let score = percentage(correct_answers, total_questions);

    McqResult {
        topic: String::new(),
        total_questions,
        correct_answers,
        score,
        grade: Grade::from_score(score),
        ai_feedback: String::new(),
        detailed_results,
        timestamp: chrono::Utc::now().to_rfc3339(),
    }
}

fn percentage(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (correct as f64 / total as f64 * 100.0).round() as u32
}

/// 选择题测验服务
pub struct McqService<G> {
    generator: G,
    default_count: usize,
}

impl<G: TextGenerator> McqService<G> {
    pub fn new(generator: G, config: &Config) -> Self {
        Self {
            generator,
            default_count: config.mcq_question_count,
        }
    }

    pub fn default_count(&self) -> usize {
        self.default_count
    }

    /// 生成完整题目（含答案），题目数量不足时报错
    pub async fn generate_questions(
        &self,
        topic: &str,
        difficulty: &str,
        count: usize,
    ) -> AppResult<Vec<McqQuestion>> {
        if topic.trim().is_empty() {
            return Err(ValidationError::MissingField("topic").into());
        }

        info!("🧠 生成测验: {} ({}, {} 题)", topic, difficulty, count);
        let prompt = prompts::mcq_prompt(topic, difficulty, count);
        let response = self.generator.generate(&prompt, None).await?;

        let questions = parse_mcq_response(&response, count);
        if questions.len() < count {
            warn!("⚠️ 题目数量不足: 需要 {}, 实际 {}", count, questions.len());
            return Err(McqError::NotEnoughQuestions {
                requested: count,
                parsed: questions.len(),
            }
            .into());
        }

        info!("✓ 测验生成完成，共 {} 题", questions.len());
        Ok(questions)
    }

    /// 生成下发给考生的测验（隐藏答案和解析）
    pub async fn generate_test(
        &self,
        topic: &str,
        difficulty: &str,
        count: usize,
    ) -> AppResult<QuizForTest> {
        let questions = self.generate_questions(topic, difficulty, count).await?;
        Ok(QuizForTest {
            questions: questions.iter().map(QuizQuestion::from).collect(),
            topic: topic.to_string(),
            difficulty: difficulty.to_string(),
            total_questions: questions.len(),
            time_limit: TIME_LIMIT_MINUTES,
        })
    }

    /// 判分并附加 AI 评语；评语生成失败时使用兜底文案
    pub async fn submit(
        &self,
        topic: &str,
        questions: &[McqQuestion],
        answers: &[Option<usize>],
        name: &str,
    ) -> AppResult<McqResult> {
        if topic.trim().is_empty() {
            return Err(ValidationError::MissingField("topic").into());
        }
        if name.trim().is_empty() {
            return Err(ValidationError::MissingField("name").into());
        }

        let mut result = evaluate(questions, answers);
        result.topic = topic.trim().to_string();
        info!(
            "📊 [{}] {} 得分 {}% ({}/{}), 等级 {}",
            result.topic,
            name,
            result.score,
            result.correct_answers,
            result.total_questions,
            result.grade
        );

        let prompt = prompts::feedback_prompt(
            name,
            result.score,
            result.correct_answers,
            result.total_questions,
        );
        result.ai_feedback = match self.generator.generate(&prompt, None).await {
            Ok(feedback) => strip_feedback_markdown(&feedback),
            Err(e) => {
                warn!("⚠️ AI 评语生成失败，使用默认评语: {}", e);
                prompts::fallback_feedback(name, result.score)
            }
        };

        Ok(result)
    }
}
