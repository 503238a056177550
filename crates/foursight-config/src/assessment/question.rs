use crate::assessment::error::ValidationError;
use foursight_utils::id_map::{ItemId, id_map};
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    pub label: String,
    pub score: u32,
}

#[derive(Serialize, Debug, Clone)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<AnswerOption>,
}

impl ItemId for Question {
    type IdType = String;

    fn id(&self) -> Self::IdType {
        self.id.clone()
    }
}

impl Question {
    /// Checks that `score` belongs to one of the options of this question.
    pub fn validate(&self, score: u32) -> Result<(), ValidationError> {
        if self.options.iter().any(|option| option.score == score) {
            Ok(())
        } else {
            Err(ValidationError::InvalidOption {
                question: self.id.clone(),
                score,
            })
        }
    }

    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.options.iter().map(|option| option.score).max().unwrap_or_default()
    }

    #[must_use]
    pub fn min_score(&self) -> u32 {
        self.options.iter().map(|option| option.score).min().unwrap_or_default()
    }

    #[must_use]
    pub fn option_for(&self, score: u32) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.score == score)
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(with = "id_map")]
    pub questions: IndexMap<String, Question>,
}

impl ItemId for Section {
    type IdType = String;

    fn id(&self) -> Self::IdType {
        self.id.clone()
    }
}
