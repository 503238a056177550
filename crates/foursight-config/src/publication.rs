use crate::error::ConfigError;
use chrono::NaiveDate;
use foursight_utils::id_map::{ItemId, id_map};
use foursight_utils::loader::error::LoadingError;
use foursight_utils::loader::FileSystemLoader;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Category filter value that matches every publication.
pub const ALL_CATEGORIES: &str = "All";

const PUBLICATIONS_YAML: &str = include_str!("../assets/publications.yaml");

#[derive(Deserialize, Debug, JsonSchema)]
#[serde(tag = "version")]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub enum VersionConfig {
    #[serde(rename = "0.1")]
    V01 {
        #[serde(with = "id_map")]
        #[schemars(with = "Vec::<Publication>")]
        publications: IndexMap<String, Publication>,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Publication {
    pub id: u32,
    /// # URL slug
    /// Identifies the publication towards the engagement API.
    pub slug: String,
    pub category: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub author_role: String,
    pub read_time_minutes: u32,
    pub published: NaiveDate,
    #[serde(default)]
    pub featured: bool,
}

impl ItemId for Publication {
    type IdType = String;

    fn id(&self) -> Self::IdType {
        self.slug.clone()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PublicationCatalog {
    publications: IndexMap<String, Publication>,
}

impl PublicationCatalog {
    #[must_use]
    pub fn new(publications: impl IntoIterator<Item = Publication>) -> Self {
        Self {
            publications: publications.into_iter().map(|p| (p.slug.clone(), p)).collect(),
        }
    }

    pub fn builtin() -> Result<Self, ConfigError> {
        let VersionConfig::V01 { publications } = serde_yml::from_str::<VersionConfig>(PUBLICATIONS_YAML)?;
        Ok(Self { publications })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Publication> {
        self.publications.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.publications.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.publications.is_empty()
    }

    #[must_use]
    pub fn get_by_slug(&self, slug: &str) -> Option<&Publication> {
        self.publications.get(slug)
    }

    #[must_use]
    pub fn get_by_id(&self, id: u32) -> Option<&Publication> {
        self.publications.values().find(|p| p.id == id)
    }

    /// [`ALL_CATEGORIES`] followed by every category in the order it first appears.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories = vec![ALL_CATEGORIES];
        for publication in self.publications.values() {
            if !categories.contains(&publication.category.as_str()) {
                categories.push(publication.category.as_str());
            }
        }
        categories
    }

    /// Publications in `category` whose title or excerpt contains `query`, ignoring case.
    pub fn filter<'a>(&'a self, category: &'a str, query: &str) -> impl Iterator<Item = &'a Publication> + 'a {
        let query = query.to_lowercase();
        self.publications.values().filter(move |p| {
            let matches_category = category == ALL_CATEGORIES || p.category == category;
            let matches_query =
                p.title.to_lowercase().contains(&query) || p.excerpt.to_lowercase().contains(&query);
            matches_category && matches_query
        })
    }

    /// Other publications of the same category.
    pub fn related<'a>(&'a self, publication: &'a Publication, limit: usize) -> impl Iterator<Item = &'a Publication> + 'a {
        self.publications
            .values()
            .filter(move |p| p.category == publication.category && p.id != publication.id)
            .take(limit)
    }
}

pub async fn load(loader: &FileSystemLoader) -> Result<PublicationCatalog, ConfigError> {
    tracing::debug!("Loading publications");
    let mut res = IndexMap::new();
    let mut ids = HashSet::new();
    for file in loader.load_dir_sorted("").await? {
        let VersionConfig::V01 { publications } = serde_yml::from_slice::<VersionConfig>(&file.content)
            .map_err(|err| LoadingError::yaml(&file.key, err))?;
        for (slug, publication) in publications {
            if res.contains_key(&slug) {
                return Err(LoadingError::invalid(&file.key, format!("publication {slug} is defined more than once")).into());
            }
            if !ids.insert(publication.id) {
                return Err(LoadingError::invalid(&file.key, format!("publication id {} is used more than once", publication.id)).into());
            }
            res.insert(slug, publication);
        }
    }
    tracing::debug!(count = res.len(), "loaded publications");
    Ok(PublicationCatalog { publications: res })
}
