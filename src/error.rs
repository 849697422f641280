use async_openai::error::OpenAIError;
use thiserror::Error;

/// 应用程序错误类型
///
/// 文本解析核心（normalize / segment / split / MCQ 解析）不会返回错误，
/// 这里只覆盖配置、LLM 调用、参数校验和文件读写。
#[derive(Debug, Error)]
pub enum AppError {
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// LLM 服务错误
    #[error("LLM错误: {0}")]
    Llm(#[from] LlmError),
    /// 参数校验错误
    #[error("校验错误: {0}")]
    Validation(#[from] ValidationError),
    /// MCQ 测验错误
    #[error("测验错误: {0}")]
    Mcq(#[from] McqError),
    /// 文件读写错误
    #[error("文件错误 ({path}): {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// JSON 序列化失败
    #[error("JSON解析失败: {0}")]
    Json(#[from] serde_json::Error),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// LLM 服务错误
#[derive(Debug, Error)]
pub enum LlmError {
    /// 请求构建失败
    #[error("请求构建失败: {0}")]
    RequestBuildFailed(#[source] OpenAIError),
    /// API 调用失败
    #[error("LLM API调用失败 (模型: {model}): {source}")]
    ApiCallFailed {
        model: String,
        #[source]
        source: OpenAIError,
    },
    /// 返回内容为空
    #[error("LLM返回内容为空 (模型: {model})")]
    EmptyContent { model: String },
}

/// 参数校验错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// 必填字段为空
    #[error("字段 {0} 不能为空")]
    MissingField(&'static str),
}

/// MCQ 测验错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum McqError {
    /// 生成的题目数量不足
    #[error("生成的题目数量不足: 需要 {requested} 道, 实际解析出 {parsed} 道")]
    NotEnoughQuestions { requested: usize, parsed: usize },
}

impl From<OpenAIError> for LlmError {
    fn from(err: OpenAIError) -> Self {
        LlmError::RequestBuildFailed(err)
    }
}

impl AppError {
    /// 创建文件读写错误
    pub fn file(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File {
            path: path.into(),
            source,
        }
    }

    /// 创建LLM API调用错误
    pub fn llm_api_failed(model: impl Into<String>, source: OpenAIError) -> Self {
        AppError::Llm(LlmError::ApiCallFailed {
            model: model.into(),
            source,
        })
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message() {
        let err: AppError = ValidationError::MissingField("title").into();
        assert_eq!(err.to_string(), "校验错误: 字段 title 不能为空");
    }

    #[test]
    fn test_mcq_error_message() {
        let err = McqError::NotEnoughQuestions {
            requested: 30,
            parsed: 12,
        };
        assert!(err.to_string().contains("30"));
        assert!(err.to_string().contains("12"));
    }
}
