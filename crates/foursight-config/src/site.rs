use crate::assessment::{self, AssessmentConfig};
use crate::error::ConfigError;
use crate::publication::{self, PublicationCatalog};
use foursight_utils::loader::FileSystemLoader;
use std::path::Path;

const ASSESSMENT_DIR: &str = "assessments";
const PUBLICATION_DIR: &str = "publications";

/// Everything the site serves from configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub assessments: AssessmentConfig,
    pub publications: PublicationCatalog,
}

impl SiteConfig {
    pub fn builtin() -> Result<Self, ConfigError> {
        Ok(Self {
            assessments: AssessmentConfig::builtin()?,
            publications: PublicationCatalog::builtin()?,
        })
    }

    /// Loads `assessments/` and `publications/` below `dir`.
    /// A missing sub directory falls back to the bundled defaults.
    pub async fn load(dir: &Path) -> Result<Self, ConfigError> {
        let assessment_dir = dir.join(ASSESSMENT_DIR);
        let assessments = if tokio::fs::try_exists(&assessment_dir).await.unwrap_or(false) {
            assessment::load(&FileSystemLoader::new(assessment_dir)).await?
        } else {
            tracing::debug!(?dir, "no assessment directory, using bundled assessments");
            AssessmentConfig::builtin()?
        };

        let publication_dir = dir.join(PUBLICATION_DIR);
        let publications = if tokio::fs::try_exists(&publication_dir).await.unwrap_or(false) {
            publication::load(&FileSystemLoader::new(publication_dir)).await?
        } else {
            tracing::debug!(?dir, "no publication directory, using bundled publications");
            PublicationCatalog::builtin()?
        };

        Ok(Self {
            assessments,
            publications,
        })
    }
}
