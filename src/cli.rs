use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tokio::io::AsyncReadExt;
use tracing::info;

use interview_prep::models::{ChatContext, McqQuestion, SessionProfile};
use interview_prep::parsing::{parse_mcq_response, segment_with, split_document_with};
use interview_prep::services::mcq_service::{self, DEFAULT_DIFFICULTY};
use interview_prep::utils::logging;
use interview_prep::{logger, Config, InterviewService, LlmService, McqService};

/// 命令行入口
#[derive(Parser, Debug)]
#[command(
    name = "interview-prep",
    version,
    about = "Turn AI-generated interview markdown into structured Q&A and quizzes."
)]
pub struct Cli {
    /// TOML 配置文件
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// 输出 debug 日志
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 把一段答案切成正文 / 代码片段
    Segment(InputArgs),
    /// 把 "1. 问题" 格式的文档切成问答列表
    Split(InputArgs),
    /// 解析选择题文本
    Mcq {
        #[command(flatten)]
        input: InputArgs,
        /// 最多保留的题目数量
        #[arg(long)]
        count: Option<usize>,
    },
    /// 为新会话生成面试题
    Generate {
        #[command(flatten)]
        profile: ProfileArgs,
        /// 会话描述
        #[arg(long)]
        desc: String,
    },
    /// 为已有会话追加面试题
    More(ProfileArgs),
    /// 生成单个问题的答案
    Ask {
        /// 问题（可重复，多个问题并发生成）
        #[arg(long = "question", required = true)]
        questions: Vec<String>,
        #[command(flatten)]
        profile: ProfileArgs,
    },
    /// 生成选择题测验
    Quiz {
        #[arg(long)]
        topic: Option<String>,
        #[arg(long, default_value = DEFAULT_DIFFICULTY)]
        difficulty: String,
        #[arg(long)]
        count: Option<usize>,
        /// 输出含答案的完整题目（供 grade 使用）
        #[arg(long)]
        with_answers: bool,
        /// 列出可选主题
        #[arg(long, conflicts_with = "topic")]
        list_topics: bool,
    },
    /// 对测验答案判分
    Grade {
        /// `quiz --with-answers` 输出的 JSON 文件
        #[arg(long)]
        questions: PathBuf,
        /// 逗号分隔的答案字母，未作答用 `-`，如 `A,C,-,B`
        #[arg(long)]
        answers: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        topic: String,
    },
    /// 与 AI 助手对话
    Chat {
        #[arg(long)]
        message: String,
        /// 对话场景: general / interview_preparation
        #[arg(long, default_value = "general")]
        context: String,
    },
}

#[derive(Args, Debug)]
pub struct InputArgs {
    /// 输入文件，省略时读取标准输入
    #[arg(long, short)]
    pub input: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ProfileArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub tag: String,
    #[arg(long)]
    pub experience: String,
}

impl ProfileArgs {
    fn into_profile(self, desc: impl Into<String>) -> SessionProfile {
        SessionProfile::new(self.title, self.tag, self.experience, desc)
    }
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = Config::load(self.config.as_deref())
            .await
            .context("加载配置失败")?;
        logger::init(self.verbose || config.verbose_logging);

        let options = config.segment_options();

        match self.command {
            Commands::Segment(args) => {
                let text = read_input(args.input.as_deref()).await?;
                print_json(&segment_with(&text, &options))
            }
            Commands::Split(args) => {
                let text = read_input(args.input.as_deref()).await?;
                let entries = split_document_with(&text, &options);
                logging::log_qna_summary(&entries);
                print_json(&entries)
            }
            Commands::Mcq { input, count } => {
                let text = read_input(input.input.as_deref()).await?;
                let limit = count.unwrap_or(config.mcq_question_count);
                print_json(&parse_mcq_response(&text, limit))
            }
            Commands::Generate { profile, desc } => {
                logging::log_startup("generate", &config);
                let service = InterviewService::new(LlmService::new(&config), &config);
                let entries = service.create_session(&profile.into_profile(desc)).await?;
                logging::log_qna_summary(&entries);
                print_json(&entries)
            }
            Commands::More(profile) => {
                logging::log_startup("more", &config);
                let service = InterviewService::new(LlmService::new(&config), &config);
                let entries = service.generate_more(&profile.into_profile("")).await?;
                logging::log_qna_summary(&entries);
                print_json(&entries)
            }
            Commands::Ask { questions, profile } => {
                logging::log_startup("ask", &config);
                let service = InterviewService::new(LlmService::new(&config), &config);
                let profile = profile.into_profile("");
                let mut answers = Vec::with_capacity(questions.len());
                for result in service.answer_many(&questions, &profile).await {
                    answers.push(result?);
                }
                if answers.len() == 1 {
                    print_json(&answers[0])
                } else {
                    print_json(&answers)
                }
            }
            Commands::Quiz {
                topic,
                difficulty,
                count,
                with_answers,
                list_topics,
            } => {
                if list_topics {
                    return print_json(&mcq_service::available_topics());
                }
                let topic = topic.context("缺少 --topic 参数")?;
                logging::log_startup("quiz", &config);
                let service = McqService::new(LlmService::new(&config), &config);
                let count = count.unwrap_or(service.default_count());
                if with_answers {
                    print_json(&service.generate_questions(&topic, &difficulty, count).await?)
                } else {
                    print_json(&service.generate_test(&topic, &difficulty, count).await?)
                }
            }
            Commands::Grade {
                questions,
                answers,
                name,
                topic,
            } => {
                let content = tokio::fs::read_to_string(&questions)
                    .await
                    .with_context(|| format!("无法读取题目文件: {}", questions.display()))?;
                let questions: Vec<McqQuestion> =
                    serde_json::from_str(&content).context("题目文件格式错误")?;
                let answers = parse_answer_letters(&answers)?;

                let service = McqService::new(LlmService::new(&config), &config);
                let result = service.submit(&topic, &questions, &answers, &name).await?;
                logging::log_quiz_result(&result);
                print_json(&result)
            }
            Commands::Chat { message, context } => {
                let context = ChatContext::from_str(&context)
                    .with_context(|| format!("未知的对话场景: {}", context))?;
                let service = InterviewService::new(LlmService::new(&config), &config);
                let reply = service.chat(&message, context).await?;
                println!("{}", reply);
                Ok(())
            }
        }
    }
}

/// 读取文件或标准输入
async fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            info!("📄 读取输入: {}", path.display());
            tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("无法读取输入文件: {}", path.display()))
        }
        None => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("无法读取标准输入")?;
            Ok(text)
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// 解析 `A,C,-,B` 形式的答案
fn parse_answer_letters(raw: &str) -> Result<Vec<Option<usize>>> {
    raw.split(',')
        .map(str::trim)
        .map(|letter| match letter.to_ascii_uppercase().as_str() {
            "" | "-" => Ok(None),
            "A" => Ok(Some(0)),
            "B" => Ok(Some(1)),
            "C" => Ok(Some(2)),
            "D" => Ok(Some(3)),
            other => anyhow::bail!("无效的答案: {}", other),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answer_letters() {
        assert_eq!(
            parse_answer_letters("A, c,-,,D").unwrap(),
            vec![Some(0), Some(2), None, None, Some(3)]
        );
        assert!(parse_answer_letters("A,E").is_err());
    }

    #[test]
    fn test_cli_parses_ask_with_repeated_questions() {
        let cli = Cli::try_parse_from([
            "interview-prep",
            "ask",
            "--question",
            "What is Rc?",
            "--question",
            "What is Arc?",
            "--title",
            "Rust",
            "--tag",
            "Backend",
            "--experience",
            "3 years",
        ])
        .unwrap();

        match cli.command {
            Commands::Ask { questions, profile } => {
                assert_eq!(questions.len(), 2);
                assert_eq!(profile.title, "Rust");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["interview-prep", "split", "-i", "doc.md", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Split(InputArgs { input: Some(_) })));
    }
}
