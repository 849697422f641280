use crate::error::{AppError, AppResult, ConfigError};
use crate::parsing::SegmentOptions;
use serde::Deserialize;
use std::path::Path;

/// 程序配置
///
/// 优先级（低 → 高）：`Default` → TOML 文件 → 环境变量
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    pub llm_temperature: f32,
    pub llm_max_tokens: u32,
    // --- 生成数量 ---
    /// 新建会话时生成的题目数量
    pub question_count: usize,
    /// "再来几道" 生成的题目数量
    pub more_question_count: usize,
    /// MCQ 测验题目数量
    pub mcq_question_count: usize,
    /// 同时进行的 LLM 请求数量
    pub max_concurrent_requests: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    // --- 文本处理 ---
    /// 从正文中剔除的符号
    pub strip_symbols: String,
    /// 代码片段是否携带语言标记
    pub include_language_tag: bool,
}

impl Default for Config {
    fn default() -> Self {
        let segment = SegmentOptions::default();
        Self {
            llm_api_key: String::new(),
            llm_api_base_url: "https://generativelanguage.googleapis.com/v1beta/openai".to_string(),
            llm_model_name: "gemini-1.5-flash".to_string(),
            llm_temperature: 0.7,
            llm_max_tokens: 8192,
            question_count: 5,
            more_question_count: 3,
            mcq_question_count: 30,
            max_concurrent_requests: 4,
            verbose_logging: false,
            strip_symbols: segment.strip_symbols,
            include_language_tag: segment.include_language_tag,
        }
    }
}

impl Config {
    /// 只从环境变量加载
    pub fn from_env() -> AppResult<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// 从 TOML 字符串解析，缺失字段使用默认值
    pub fn from_toml_str(content: &str, path: &str) -> AppResult<Self> {
        toml::from_str(content).map_err(|source| {
            AppError::Config(ConfigError::TomlParseFailed {
                path: path.to_string(),
                source,
            })
        })
    }

    /// 从 TOML 文件加载
    pub async fn from_toml_file(path: &Path) -> AppResult<Self> {
        let display = path.display().to_string();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::file(&display, e))?;
        Self::from_toml_str(&content, &display)
    }

    /// 加载配置：可选的 TOML 文件，再叠加环境变量
    pub async fn load(path: Option<&Path>) -> AppResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_toml_file(path).await?,
            None => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    /// 用环境变量覆盖已有配置
    pub fn apply_env(&mut self) -> AppResult<()> {
        self.apply_vars(|name| std::env::var(name).ok())
    }

    fn apply_vars(&mut self, get: impl Fn(&str) -> Option<String>) -> AppResult<()> {
        if let Some(v) = get("LLM_API_KEY") {
            self.llm_api_key = v;
        }
        if let Some(v) = get("LLM_API_BASE_URL") {
            self.llm_api_base_url = v;
        }
        if let Some(v) = get("LLM_MODEL_NAME") {
            self.llm_model_name = v;
        }
        if let Some(v) = get("STRIP_SYMBOLS") {
            self.strip_symbols = v;
        }
        parse_var(&get, "LLM_TEMPERATURE", "f32", &mut self.llm_temperature)?;
        parse_var(&get, "LLM_MAX_TOKENS", "u32", &mut self.llm_max_tokens)?;
        parse_var(&get, "QUESTION_COUNT", "usize", &mut self.question_count)?;
        parse_var(&get, "MORE_QUESTION_COUNT", "usize", &mut self.more_question_count)?;
        parse_var(&get, "MCQ_QUESTION_COUNT", "usize", &mut self.mcq_question_count)?;
        parse_var(
            &get,
            "MAX_CONCURRENT_REQUESTS",
            "usize",
            &mut self.max_concurrent_requests,
        )?;
        parse_var(&get, "VERBOSE_LOGGING", "bool", &mut self.verbose_logging)?;
        parse_var(
            &get,
            "INCLUDE_LANGUAGE_TAG",
            "bool",
            &mut self.include_language_tag,
        )?;
        Ok(())
    }

    /// 文本分段选项
    pub fn segment_options(&self) -> SegmentOptions {
        SegmentOptions {
            strip_symbols: self.strip_symbols.clone(),
            include_language_tag: self.include_language_tag,
        }
    }
}

fn parse_var<T: std::str::FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    var_name: &str,
    expected_type: &str,
    slot: &mut T,
) -> AppResult<()> {
    let Some(value) = get(var_name) else {
        return Ok(());
    };
    *slot = value.trim().parse().map_err(|_| ConfigError::EnvVarParseFailed {
        var_name: var_name.to_string(),
        value: value.clone(),
        expected_type: expected_type.to_string(),
    })?;
    Ok(())
}
