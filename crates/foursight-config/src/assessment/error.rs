use thiserror::Error;

/// An answer that does not fit the question bank.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unknown question: {0}")]
    UnknownQuestion(String),
    #[error("invalid answer for question {question}: {score} is not one of its option scores")]
    InvalidOption { question: String, score: u32 },
}

/// A question bank that cannot be scored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    #[error("assessment has no questions")]
    NoQuestions,
    #[error("question id {0} is used more than once")]
    DuplicateQuestion(String),
    #[error("question {0} has no options")]
    NoOptions(String),
    #[error("the maximum possible score does not fit into 32 bits")]
    ScoreOverflow,
    #[error("assessment has no maturity bands")]
    NoBands,
    #[error("band {label} has an empty range {min}..={max}")]
    InvalidBandRange { label: String, min: u32, max: u32 },
    #[error("band {label} starts at {found}, expected {expected}")]
    BandGap { label: String, expected: u32, found: u32 },
    #[error("band {label} overlaps the previous band, it starts at {found}, expected {expected}")]
    BandOverlap { label: String, expected: u32, found: u32 },
    #[error("bands end at {covered}, but the maximum possible score is {max_score}")]
    BandsDoNotCover { covered: u32, max_score: u32 },
}
