use crate::assessment::AnswerSet;
use foursight_config::assessment::Assessment;

/// True once every question of the assessment has an answer, and nothing else does.
#[must_use]
pub fn is_complete(answers: &AnswerSet, assessment: &Assessment) -> bool {
    answers.len() == assessment.question_count() && assessment.questions().all(|q| answers.contains(&q.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use foursight_config::assessment::{AssessmentConfig, DATA_MATURITY_ID};

    #[test]
    fn test_complete_only_with_all_answers() {
        let config = AssessmentConfig::builtin().unwrap();
        let assessment = config.get(DATA_MATURITY_ID).unwrap();
        let ids = assessment.questions().map(|q| q.id.clone()).collect::<Vec<_>>();

        for answered in 0..ids.len() {
            let answers: AnswerSet = ids.iter().take(answered).map(|id| (id.clone(), 1)).collect();
            assert!(!is_complete(&answers, assessment), "complete with {answered} answers");
        }
        let answers: AnswerSet = ids.iter().map(|id| (id.clone(), 1)).collect();
        assert!(is_complete(&answers, assessment));
    }

    #[test]
    fn test_foreign_answer_does_not_complete() {
        let config = AssessmentConfig::builtin().unwrap();
        let assessment = config.get(DATA_MATURITY_ID).unwrap();
        let mut answers: AnswerSet = assessment.questions().skip(1).map(|q| (q.id.clone(), 0)).collect();
        answers.insert("not-a-question".to_owned(), 0);
        assert_eq!(answers.len(), assessment.question_count());
        assert!(!is_complete(&answers, assessment));
    }
}
