use crate::assessment::{AnswerSet, gate, scorer};
use foursight_config::assessment::Assessment;
use foursight_config::assessment::band::MaturityBand;
use foursight_config::assessment::error::ValidationError;
use foursight_config::assessment::question::Question;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentResult {
    pub score: u32,
    pub max_score: u32,
    pub band: MaturityBand,
}

/// One run through an assessment: the answers given so far and the submitted result.
#[derive(Debug, Clone)]
pub struct AssessmentSession<'a> {
    assessment: &'a Assessment,
    answers: AnswerSet,
    result: Option<AssessmentResult>,
}

impl<'a> AssessmentSession<'a> {
    #[must_use]
    pub fn new(assessment: &'a Assessment) -> Self {
        Self {
            assessment,
            answers: AnswerSet::default(),
            result: None,
        }
    }

    #[must_use]
    pub fn assessment(&self) -> &'a Assessment {
        self.assessment
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Records `score` for the question, replacing an earlier answer.
    ///
    /// Changing an answer after submission withdraws the submitted result.
    pub fn answer(&mut self, question_id: &str, score: u32) -> Result<(), ValidationError> {
        let question = self
            .assessment
            .question(question_id)
            .ok_or_else(|| ValidationError::UnknownQuestion(question_id.to_owned()))?;
        question.validate(score)?;
        self.answers.insert(question.id.clone(), score);
        if self.result.take().is_some() {
            tracing::debug!(question_id, "answer changed after submission, result withdrawn");
        }
        Ok(())
    }

    /// `(answered, total)`
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (self.answers.len(), self.assessment.question_count())
    }

    #[must_use]
    pub fn next_unanswered(&self) -> Option<&'a Question> {
        self.assessment.questions().find(|q| !self.answers.contains(&q.id))
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        gate::is_complete(&self.answers, self.assessment)
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        scorer::score(&self.answers)
    }

    /// Scores the answers. Does nothing and returns `None` while questions are unanswered.
    pub fn submit(&mut self) -> Option<&AssessmentResult> {
        if !self.is_complete() {
            tracing::debug!(
                answered = self.answers.len(),
                total = self.assessment.question_count(),
                "ignoring submit of incomplete assessment"
            );
            return None;
        }
        let score = self.score();
        let band = scorer::band_for(&self.assessment.bands, score)?.clone();
        tracing::info!(
            assessment_id = %self.assessment.assessment_id,
            score,
            band = %band.label,
            "assessment submitted"
        );
        self.result = Some(AssessmentResult {
            score,
            max_score: self.assessment.max_score(),
            band,
        });
        self.result.as_ref()
    }

    #[must_use]
    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.result.is_some()
    }

    /// Back to the unanswered state.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.result = None;
    }
}
