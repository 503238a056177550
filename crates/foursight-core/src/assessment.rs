mod answers;
pub mod gate;
pub mod scorer;
mod session;

pub use answers::AnswerSet;
pub use session::{AssessmentResult, AssessmentSession};
