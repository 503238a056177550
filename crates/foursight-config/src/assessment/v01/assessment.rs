use foursight_utils::id_map::{ItemId, id_map};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct AssessmentV01 {
    /// # Unique identifier for the assessment
    /// This ID is used to select the assessment from the command line.
    pub id: String,
    /// # Title of the assessment
    pub title: String,
    /// # Introduction shown before the first question
    #[serde(default)]
    pub description: Option<String>,
    #[serde(with = "id_map")]
    #[schemars(with = "Vec::<SectionV01>")]
    /// # Sections of the assessment
    /// Questions are asked section by section, in the order given here.
    pub sections: IndexMap<String, SectionV01>,
    /// # Maturity bands
    /// Named score ranges. Together they have to cover every score from zero to the
    /// sum of the highest option score of every question.
    pub bands: Vec<BandV01>,
}

#[derive(Deserialize, Debug, Clone, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct SectionV01 {
    /// # Unique identifier of the section
    pub id: String,
    /// # Title of the section
    pub title: String,
    #[serde(with = "id_map")]
    #[schemars(with = "Vec::<QuestionV01>")]
    /// # Questions of the section
    pub questions: IndexMap<String, QuestionV01>,
}

impl ItemId for SectionV01 {
    type IdType = String;

    fn id(&self) -> Self::IdType {
        self.id.clone()
    }
}

#[derive(Deserialize, Debug, Clone, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct QuestionV01 {
    /// # Unique identifier of the question
    /// Has to be unique across all sections of the assessment.
    pub id: String,
    /// # Question text
    pub text: String,
    /// # Answer options
    pub options: Vec<OptionV01>,
}

impl ItemId for QuestionV01 {
    type IdType = String;

    fn id(&self) -> Self::IdType {
        self.id.clone()
    }
}

#[derive(Deserialize, Debug, Clone, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct OptionV01 {
    pub label: String,
    /// # Score added to the total when this option is picked
    pub score: u32,
}

#[derive(Deserialize, Debug, Clone, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct BandV01 {
    pub label: String,
    /// # Lowest score of the band (inclusive)
    pub min: u32,
    /// # Highest score of the band (inclusive)
    pub max: u32,
    pub description: String,
    /// # What the band means for the reader
    pub inference: String,
}
