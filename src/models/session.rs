use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// 面试准备会话的输入信息
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionProfile {
    /// 主题，如 "React Hooks"
    pub title: String,
    /// 标签，如 "Frontend"
    pub tag: String,
    /// 工作年限描述，如 "2 years"
    pub experience: String,
    /// 会话描述
    #[serde(default)]
    pub desc: String,
}

impl SessionProfile {
    pub fn new(
        title: impl Into<String>,
        tag: impl Into<String>,
        experience: impl Into<String>,
        desc: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            tag: tag.into(),
            experience: experience.into(),
            desc: desc.into(),
        }
    }

    /// 校验生成题目所需的字段
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("title", &self.title),
            ("tag", &self.tag),
            ("experience", &self.experience),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(name));
            }
        }
        Ok(())
    }

    /// 新建会话时 `desc` 也是必填
    pub fn validate_for_creation(&self) -> Result<(), ValidationError> {
        self.validate()?;
        if self.desc.trim().is_empty() {
            return Err(ValidationError::MissingField("desc"));
        }
        Ok(())
    }
}

/// 对话场景
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatContext {
    #[default]
    General,
    InterviewPreparation,
}

impl ChatContext {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "general" => Some(ChatContext::General),
            "interview_preparation" | "interview" => Some(ChatContext::InterviewPreparation),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_reports_first_missing_field() {
        let profile = SessionProfile::new("Rust", "  ", "", "");
        assert_eq!(profile.validate(), Err(ValidationError::MissingField("tag")));
    }

    #[test]
    fn test_desc_required_only_for_creation() {
        let profile = SessionProfile::new("Rust", "Backend", "3 years", "");
        assert!(profile.validate().is_ok());
        assert_eq!(
            profile.validate_for_creation(),
            Err(ValidationError::MissingField("desc"))
        );
    }

    #[test]
    fn test_chat_context_from_str() {
        assert_eq!(
            ChatContext::from_str("interview_preparation"),
            Some(ChatContext::InterviewPreparation)
        );
        assert_eq!(ChatContext::from_str("general"), Some(ChatContext::General));
        assert_eq!(ChatContext::from_str("poetry"), None);
    }
}
