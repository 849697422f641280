pub mod interview_service;
pub mod llm_service;
pub mod mcq_service;
pub mod prompts;

pub use interview_service::InterviewService;
pub use llm_service::{LlmService, TextGenerator};
pub use mcq_service::McqService;
