use indexmap::IndexMap;
use serde::Serialize;

/// Selected score per question id, in the order the questions were answered.
///
/// Only [`AssessmentSession`](crate::assessment::AssessmentSession) inserts values,
/// after checking them against the question bank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerSet(IndexMap<String, u32>);

impl AnswerSet {
    #[must_use]
    pub fn get(&self, question_id: &str) -> Option<u32> {
        self.0.get(question_id).copied()
    }

    #[must_use]
    pub fn contains(&self, question_id: &str) -> bool {
        self.0.contains_key(question_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(id, score)| (id.as_str(), *score))
    }

    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.values().copied()
    }

    pub(crate) fn insert(&mut self, question_id: String, score: u32) -> Option<u32> {
        self.0.insert(question_id, score)
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

#[cfg(test)]
impl FromIterator<(String, u32)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (String, u32)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
