use crate::assessment::band::MaturityBand;
use crate::assessment::error::BankError;
use crate::assessment::question::{AnswerOption, Question, Section};
use crate::assessment::v01::assessment::{AssessmentV01, BandV01, QuestionV01, SectionV01};
use crate::error::ConfigError;
use foursight_utils::id_map::id_map;
use foursight_utils::loader::error::LoadingError;
use foursight_utils::loader::FileSystemLoader;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Debug;

pub mod band;
pub mod error;
pub mod question;
pub mod v01;

pub const DATA_MATURITY_ID: &str = "data-maturity";

const DATA_MATURITY_YAML: &str = include_str!("../assets/data-maturity.assessment.yaml");

#[derive(Deserialize, Debug, JsonSchema)]
#[serde(tag = "version")]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub enum VersionConfig {
    #[serde(rename = "0.1")]
    V01 { assessment: AssessmentV01 },
}

#[derive(Serialize, Debug, Clone)]
pub struct Assessment {
    pub assessment_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "id_map")]
    pub sections: IndexMap<String, Section>,
    /// Sorted by their lower bound
    pub bands: Vec<MaturityBand>,
}

impl From<QuestionV01> for Question {
    fn from(v01: QuestionV01) -> Self {
        Self {
            id: v01.id,
            text: v01.text,
            options: v01
                .options
                .into_iter()
                .map(|option| AnswerOption {
                    label: option.label,
                    score: option.score,
                })
                .collect(),
        }
    }
}

impl From<SectionV01> for Section {
    fn from(v01: SectionV01) -> Self {
        Self {
            id: v01.id,
            title: v01.title,
            questions: v01
                .questions
                .into_iter()
                .map(|(id, question)| (id, question.into()))
                .collect(),
        }
    }
}

impl From<BandV01> for MaturityBand {
    fn from(v01: BandV01) -> Self {
        Self {
            label: v01.label,
            min: v01.min,
            max: v01.max,
            description: v01.description,
            inference: v01.inference,
        }
    }
}

impl From<AssessmentV01> for Assessment {
    fn from(v01: AssessmentV01) -> Self {
        let mut bands: Vec<MaturityBand> = v01.bands.into_iter().map(Into::into).collect();
        bands.sort_by_key(|band| (band.min, band.max));
        Self {
            assessment_id: v01.id,
            title: v01.title,
            description: v01.description,
            sections: v01
                .sections
                .into_iter()
                .map(|(id, section)| (id, section.into()))
                .collect(),
            bands,
        }
    }
}

impl Assessment {
    /// Parses a single versioned assessment document and validates it.
    pub fn from_yaml(content: &[u8]) -> Result<Self, ConfigError> {
        let VersionConfig::V01 { assessment } = serde_yml::from_slice::<VersionConfig>(content)?;
        let assessment: Assessment = assessment.into();
        assessment.validate()?;
        Ok(assessment)
    }

    /// All questions in the order they are asked.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.sections.values().flat_map(|section| section.questions.values())
    }

    #[must_use]
    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.sections
            .values()
            .find_map(|section| section.questions.get(question_id))
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.sections.values().map(|section| section.questions.len()).sum()
    }

    /// Sum of the highest option score of every question.
    ///
    /// Saturates at `u32::MAX`. Validated banks never get there.
    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.checked_max_score().unwrap_or(u32::MAX)
    }

    fn checked_max_score(&self) -> Option<u32> {
        self.questions()
            .map(Question::max_score)
            .try_fold(0u32, u32::checked_add)
    }

    pub fn validate(&self) -> Result<(), BankError> {
        let mut ids = HashSet::new();
        for question in self.questions() {
            if !ids.insert(question.id.as_str()) {
                return Err(BankError::DuplicateQuestion(question.id.clone()));
            }
            if question.options.is_empty() {
                return Err(BankError::NoOptions(question.id.clone()));
            }
        }
        if ids.is_empty() {
            return Err(BankError::NoQuestions);
        }
        let max_score = self.checked_max_score().ok_or(BankError::ScoreOverflow)?;
        validate_bands(&self.bands, max_score)
    }
}

/// Bands have to be sorted and cover `0..=max_score` without gaps or overlaps.
fn validate_bands(bands: &[MaturityBand], max_score: u32) -> Result<(), BankError> {
    if bands.is_empty() {
        return Err(BankError::NoBands);
    }
    let mut expected = 0;
    for band in bands {
        if band.min > band.max {
            return Err(BankError::InvalidBandRange {
                label: band.label.clone(),
                min: band.min,
                max: band.max,
            });
        }
        if band.min > expected {
            return Err(BankError::BandGap {
                label: band.label.clone(),
                expected,
                found: band.min,
            });
        }
        if band.min < expected {
            return Err(BankError::BandOverlap {
                label: band.label.clone(),
                expected,
                found: band.min,
            });
        }
        expected = band.max.saturating_add(1);
    }
    let covered = expected - 1;
    if covered != max_score {
        return Err(BankError::BandsDoNotCover { covered, max_score });
    }
    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct AssessmentConfig {
    pub assessments: IndexMap<String, Assessment>,
}

impl AssessmentConfig {
    /// The assessments that ship with the binary.
    pub fn builtin() -> Result<Self, ConfigError> {
        let assessment = Assessment::from_yaml(DATA_MATURITY_YAML.as_bytes())?;
        Ok(Self {
            assessments: IndexMap::from([(assessment.assessment_id.clone(), assessment)]),
        })
    }

    #[must_use]
    pub fn get(&self, assessment_id: &str) -> Option<&Assessment> {
        self.assessments.get(assessment_id)
    }

    #[must_use]
    pub fn assessments(&self) -> &IndexMap<String, Assessment> {
        &self.assessments
    }

    #[must_use]
    pub fn ids(&self) -> HashSet<&String> {
        self.assessments.keys().collect()
    }
}

pub async fn load(loader: &FileSystemLoader) -> Result<AssessmentConfig, ConfigError> {
    tracing::debug!("Loading assessments");
    let mut res = IndexMap::new();
    for file in loader.load_dir_sorted("").await? {
        let VersionConfig::V01 { assessment } = serde_yml::from_slice::<VersionConfig>(&file.content)
            .map_err(|err| LoadingError::yaml(&file.key, err))?;
        let assessment: Assessment = assessment.into();
        assessment
            .validate()
            .map_err(|err| LoadingError::invalid(&file.key, err))?;
        if res.contains_key(&assessment.assessment_id) {
            return Err(ConfigError::DuplicateAssessment(assessment.assessment_id));
        }
        res.insert(assessment.assessment_id.clone(), assessment);
    }
    tracing::debug!(assessments = ?res.keys().collect::<Vec<_>>(), "loaded assessment configuration");
    Ok(AssessmentConfig { assessments: res })
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn test_builtin_assessment() {
        let config = AssessmentConfig::builtin().unwrap();
        let assessment = config.get(DATA_MATURITY_ID).unwrap();
        let per_section = assessment
            .sections
            .values()
            .map(|section| section.questions.len())
            .collect::<Vec<_>>();
        assert_eq!(per_section, [4, 5, 6, 3]);
        assert_eq!(assessment.question_count(), 18);
        assert_eq!(assessment.max_score(), 54);
        let labels = assessment.bands.iter().map(|b| b.label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, ["Fragmented", "Emerging", "Integrated", "Data-Native"]);
    }

    #[test]
    fn test_bands_partition_builtin_range() {
        let config = AssessmentConfig::builtin().unwrap();
        let assessment = config.get(DATA_MATURITY_ID).unwrap();
        for score in 0..=assessment.max_score() {
            let matching = assessment.bands.iter().filter(|band| band.contains(score)).count();
            assert_eq!(matching, 1, "score {score} matched {matching} bands");
        }
    }

    #[test]
    fn test_validate_bands() {
        assert_eq!(validate_bands(&[band("a", 0, 4), band("b", 5, 9)], 9), Ok(()));
        assert_eq!(validate_bands(&[], 9), Err(BankError::NoBands));
        assert_eq!(
            validate_bands(&[band("a", 1, 9)], 9),
            Err(BankError::BandGap {
                label: "a".to_owned(),
                expected: 0,
                found: 1
            })
        );
        assert_eq!(
            validate_bands(&[band("a", 0, 4), band("b", 6, 9)], 9),
            Err(BankError::BandGap {
                label: "b".to_owned(),
                expected: 5,
                found: 6
            })
        );
        assert_eq!(
            validate_bands(&[band("a", 0, 5), band("b", 5, 9)], 9),
            Err(BankError::BandOverlap {
                label: "b".to_owned(),
                expected: 6,
                found: 5
            })
        );
        assert_eq!(
            validate_bands(&[band("a", 0, 4), band("b", 5, 8)], 9),
            Err(BankError::BandsDoNotCover {
                covered: 8,
                max_score: 9
            })
        );
        assert_eq!(
            validate_bands(&[band("a", 3, 2)], 9),
            Err(BankError::InvalidBandRange {
                label: "a".to_owned(),
                min: 3,
                max: 2
            })
        );
    }

    #[test]
    fn test_duplicate_question_across_sections() {
        let yaml = r#"
version: "0.1"
assessment:
  id: dup
  title: Duplicate
  sections:
    - id: one
      title: One
      questions:
        - id: q
          text: Q?
          options: [{ label: "no", score: 0 }, { label: "yes", score: 1 }]
    - id: two
      title: Two
      questions:
        - id: q
          text: Q again?
          options: [{ label: "no", score: 0 }, { label: "yes", score: 1 }]
  bands:
    - { label: Low, min: 0, max: 2, description: low, inference: low }
"#;
        let Err(ConfigError::Bank(err)) = Assessment::from_yaml(yaml.as_bytes()) else {
            panic!("expected a bank error");
        };
        assert_eq!(err, BankError::DuplicateQuestion("q".to_owned()));
    }

    #[test]
    fn test_max_score_overflow() {
        let yaml = r#"
version: "0.1"
assessment:
  id: huge
  title: Huge
  sections:
    - id: one
      title: One
      questions:
        - id: a
          text: A?
          options: [{ label: "no", score: 0 }, { label: "yes", score: 3000000000 }]
        - id: b
          text: B?
          options: [{ label: "no", score: 0 }, { label: "yes", score: 3000000000 }]
  bands:
    - { label: Low, min: 0, max: 4294967295, description: low, inference: low }
"#;
        let Err(ConfigError::Bank(err)) = Assessment::from_yaml(yaml.as_bytes()) else {
            panic!("expected a bank error");
        };
        assert_eq!(err, BankError::ScoreOverflow);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let yaml = r#"
version: "0.1"
assessment:
  id: extra
  title: Extra
  colour: red
  sections: []
  bands: []
"#;
        assert!(matches!(Assessment::from_yaml(yaml.as_bytes()), Err(ConfigError::Yaml(_))));
    }

    #[test(tokio::test)]
    async fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("maturity.assessment.yaml"), DATA_MATURITY_YAML).unwrap();
        let config = load(&FileSystemLoader::new(dir.path().to_path_buf())).await.unwrap();
        assert_eq!(config.ids(), HashSet::from([&DATA_MATURITY_ID.to_owned()]));
    }
}
