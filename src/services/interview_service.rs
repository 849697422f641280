//! 面试题服务 - 业务能力层
//!
//! prompt → 文本生成 → markdown 解析，一次调用只处理一个会话

use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use super::llm_service::TextGenerator;
use super::prompts;
use crate::config::Config;
use crate::error::AppResult;
use crate::models::{ChatContext, QnAEntry, Segment, SessionProfile};
use crate::parsing::{segment_with, split_document_with, SegmentOptions};
use crate::utils::logging::truncate_text;

/// 面试题服务
pub struct InterviewService<G> {
    generator: G,
    options: SegmentOptions,
    question_count: usize,
    more_question_count: usize,
    max_concurrent_requests: usize,
}

impl<G: TextGenerator> InterviewService<G> {
    pub fn new(generator: G, config: &Config) -> Self {
        Self {
            generator,
            options: config.segment_options(),
            question_count: config.question_count,
            more_question_count: config.more_question_count,
            max_concurrent_requests: config.max_concurrent_requests.max(1),
        }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// 新建会话时生成问答列表
    ///
    /// 入库前去掉内容为空的片段。
    pub async fn create_session(&self, profile: &SessionProfile) -> AppResult<Vec<QnAEntry>> {
        profile.validate_for_creation()?;

        info!(
            "📝 生成面试题: {} [{}] ({})",
            profile.title, profile.tag, profile.experience
        );
        let prompt = prompts::interview_questions_prompt(profile, self.question_count);
        let markdown = self.generator.generate(&prompt, None).await?;

        let entries: Vec<QnAEntry> = split_document_with(&markdown, &self.options)
            .into_iter()
            .map(QnAEntry::without_blank_parts)
            .collect();

        if entries.len() != self.question_count {
            warn!(
                "⚠️ 期望 {} 道题, 实际解析出 {} 道",
                self.question_count,
                entries.len()
            );
        }
        info!("✓ 会话生成完成，共 {} 道题", entries.len());
        Ok(entries)
    }

    /// 为已有会话再生成几道题，由调用方追加到会话末尾
    pub async fn generate_more(&self, profile: &SessionProfile) -> AppResult<Vec<QnAEntry>> {
        profile.validate()?;

        info!("➕ 追加面试题: {} [{}]", profile.title, profile.tag);
        let prompt = prompts::more_questions_prompt(profile, self.more_question_count);
        let markdown = self.generator.generate(&prompt, None).await?;

        let entries = split_document_with(&markdown, &self.options);
        info!("✓ 新增 {} 道题", entries.len());
        Ok(entries)
    }

    /// 生成（或重新生成）单个问题的答案
    pub async fn answer(&self, question: &str, profile: &SessionProfile) -> AppResult<Vec<Segment>> {
        debug!("生成答案: {}", truncate_text(question, 80));
        let prompt = prompts::answer_prompt(question, profile);
        let markdown = self.generator.generate(&prompt, None).await?;

        let parts = segment_with(&markdown, &self.options);
        debug!(
            "答案分段完成: {} 段, 其中代码 {} 段",
            parts.len(),
            parts.iter().filter(|p| p.is_code()).count()
        );
        Ok(parts)
    }

    /// 并发生成多个问题的答案，结果顺序与输入一致
    pub async fn answer_many(
        &self,
        questions: &[String],
        profile: &SessionProfile,
    ) -> Vec<AppResult<Vec<Segment>>> {
        info!(
            "🔄 批量生成 {} 个答案 (并发 {})",
            questions.len(),
            self.max_concurrent_requests
        );
        stream::iter(questions)
            .map(|question| self.answer(question, profile))
            .buffered(self.max_concurrent_requests)
            .collect()
            .await
    }

    /// 自由对话，返回原始 markdown
    pub async fn chat(&self, message: &str, context: ChatContext) -> AppResult<String> {
        debug!("对话 ({:?}): {}", context, truncate_text(message, 80));
        let prompt = prompts::chat_prompt(message, context);
        self.generator.generate(&prompt, None).await
    }
}
