use crate::assessment::AnswerSet;
use foursight_config::assessment::band::MaturityBand;

/// Sum of all selected scores, saturating at `u32::MAX`.
#[must_use]
pub fn score(answers: &AnswerSet) -> u32 {
    answers.values().fold(0, u32::saturating_add)
}

/// The band whose range contains `score`.
///
/// A validated bank always has exactly one. Should none match, the lowest band is
/// returned and the violation is logged. `None` only for a bank without bands.
#[must_use]
pub fn band_for(bands: &[MaturityBand], score: u32) -> Option<&MaturityBand> {
    bands.iter().find(|band| band.contains(score)).or_else(|| {
        tracing::error!(score, "no maturity band contains the score, falling back to the lowest band");
        bands.iter().min_by_key(|band| band.min)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use foursight_config::assessment::AssessmentConfig;
    use foursight_config::assessment::DATA_MATURITY_ID;
    use test_log::test;

    fn band(label: &str, min: u32, max: u32) -> MaturityBand {
        MaturityBand {
            label: label.to_owned(),
            min,
            max,
            description: String::new(),
            inference: String::new(),
        }
    }

    #[test]
    fn test_score_sums_answers() {
        let answers: AnswerSet = [("a".to_owned(), 3), ("b".to_owned(), 0), ("c".to_owned(), 2)]
            .into_iter()
            .collect();
        assert_eq!(score(&answers), 5);
        assert_eq!(score(&AnswerSet::default()), 0);
    }

    #[test]
    fn test_score_saturates() {
        let answers: AnswerSet = [("a".to_owned(), u32::MAX), ("b".to_owned(), 7)].into_iter().collect();
        assert_eq!(score(&answers), u32::MAX);
    }

    #[test]
    fn test_every_score_has_exactly_one_band() {
        let config = AssessmentConfig::builtin().unwrap();
        let assessment = config.get(DATA_MATURITY_ID).unwrap();
        for score in 0..=assessment.max_score() {
            let band = band_for(&assessment.bands, score).unwrap();
            assert!(band.contains(score));
        }
        assert_eq!(band_for(&assessment.bands, 0).unwrap().label, "Fragmented");
        assert_eq!(band_for(&assessment.bands, 13).unwrap().label, "Fragmented");
        assert_eq!(band_for(&assessment.bands, 14).unwrap().label, "Emerging");
        assert_eq!(band_for(&assessment.bands, 54).unwrap().label, "Data-Native");
    }

    #[test]
    fn test_uncovered_score_falls_back_to_lowest_band() {
        let bands = [band("high", 5, 9), band("low", 0, 4)];
        assert_eq!(band_for(&bands, 12).unwrap().label, "low");
        assert!(band_for(&[], 3).is_none());
    }
}
