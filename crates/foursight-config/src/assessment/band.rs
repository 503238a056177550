use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MaturityBand {
    pub label: String,
    /// Lowest total score of the band, inclusive
    pub min: u32,
    /// Highest total score of the band, inclusive
    pub max: u32,
    pub description: String,
    pub inference: String,
}

impl MaturityBand {
    #[must_use]
    pub fn contains(&self, score: u32) -> bool {
        (self.min..=self.max).contains(&score)
    }
}
