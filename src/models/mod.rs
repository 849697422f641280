pub mod mcq;
pub mod qna;
pub mod segment;
pub mod session;

pub use mcq::{DetailedResult, Grade, McqQuestion, McqResult, QuizForTest, QuizQuestion};
pub use qna::QnAEntry;
pub use segment::Segment;
pub use session::{ChatContext, SessionProfile};
