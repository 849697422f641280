//! Prompt 模板
//!
//! 输出格式约定（"N. 问题" 和 ``` 代码围栏）由 `parsing` 模块解析，
//! 修改模板时要保持这两个约定不变。

use crate::models::{ChatContext, SessionProfile};

/// 新建会话：生成 `count` 道面试题
pub fn interview_questions_prompt(profile: &SessionProfile, count: usize) -> String {
    format!(
        r#"You're an expert interviewer. Generate {count} structured technical interview questions on the topic **"{title}"** under the tag [{tag}], tailored for a candidate with **{experience}** of experience.

Session context: {desc}

For each question:
- Use numbered formatting (e.g., 1. Question).
- Follow each question with a detailed answer in markdown format.
- Include bullet points, emphasis, and **code blocks** wrapped in triple backticks (e.g., ```js).

Strict formatting: 1 question per section."#,
        title = profile.title,
        tag = profile.tag,
        experience = profile.experience,
        desc = profile.desc,
    )
}

/// 已有会话：再生成 `count` 道题
pub fn more_questions_prompt(profile: &SessionProfile, count: usize) -> String {
    format!(
        r#"Generate {count} more technical interview questions with detailed answers on "{title}" [{tag}] for a candidate with {experience} experience.
Answers should include clear explanations and code blocks (wrapped in triple backticks) if relevant. Format like:
1. Question?
Answer..."#,
        title = profile.title,
        tag = profile.tag,
        experience = profile.experience,
    )
}

/// 为单个问题生成答案
pub fn answer_prompt(question: &str, profile: &SessionProfile) -> String {
    format!(
        r#"Generate a detailed answer for the technical interview question: "{question}" on topic "{title}" [{tag}] for a candidate with {experience} experience. Include clear structure and code blocks wrapped in triple backticks."#,
        title = profile.title,
        tag = profile.tag,
        experience = profile.experience,
    )
}

/// 生成选择题测验
pub fn mcq_prompt(topic: &str, difficulty: &str, count: usize) -> String {
    format!(
        r#"Generate exactly {count} multiple-choice questions about "{topic}" with {difficulty} difficulty level.

Format each question exactly as follows:
QUESTION_NUMBER. Question text here?
A) Option A
B) Option B
C) Option C
D) Option D
CORRECT: [A/B/C/D]
EXPLANATION: Brief explanation of why this answer is correct.

Requirements:
- Questions should cover different aspects of {topic}
- Mix of theoretical and practical questions with CODE EXAMPLES
- Include code snippets using markdown format: ```language
code here
```
- Each question should have 4 options (A, B, C, D)
- Only one correct answer per question
- Clear and concise explanations
- Progressive difficulty throughout the test
- Cover topics like: basics, advanced concepts, best practices, common mistakes, real-world applications
- At least 30% of questions should include code snippets or examples
- Include syntax highlighting language specification (javascript, python, html, css, etc.)

Generate all {count} questions in the exact format specified above with proper markdown code formatting."#
    )
}

/// 测验结束后的个性化评语
pub fn feedback_prompt(name: &str, score: u32, correct: usize, total: usize) -> String {
    format!(
        r#"A user named {name} has completed a {total}-question MCQ test and scored {score}% ({correct}/{total} correct).

Provide personalized feedback including:
1. Overall performance assessment
2. Strengths and areas for improvement
3. Study recommendations
4. Motivational message
5. Next steps for learning

Keep it encouraging and constructive."#
    )
}

/// 评语生成失败时的兜底文案
pub fn fallback_feedback(name: &str, score: u32) -> String {
    format!(
        "Congratulations {name}! You scored {score}% on the test. Keep practicing to improve your knowledge."
    )
}

/// 自由对话
pub fn chat_prompt(message: &str, context: ChatContext) -> String {
    format!(
        "{system}\n\nUser Question: {message}\n\nPlease provide a comprehensive and helpful response.",
        system = chat_system_prompt(context),
    )
}

fn chat_system_prompt(context: ChatContext) -> &'static str {
    match context {
        ChatContext::InterviewPreparation => {
            "You are an expert Interview AI Assistant specializing in:
- Technical interview preparation (coding, algorithms, system design)
- Behavioral interview guidance (STAR method, leadership examples)
- Resume and profile optimization
- Salary negotiation strategies
- Industry-specific interview tips
- Mock interview practice

Provide detailed, actionable advice with examples when appropriate. Use markdown formatting for better readability including code blocks, bullet points, and emphasis."
        }
        ChatContext::General => {
            "You are a helpful AI assistant. Provide clear and concise responses using markdown formatting."
        }
    }
}
