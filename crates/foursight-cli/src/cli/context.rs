use crate::opt::Global;
use anyhow::{Context, Result, anyhow};
use foursight::{ApiClient, Authenticator, Config, FileSessionStore};
use foursight_config::SiteConfig;
use foursight_config::publication::Publication;
use std::path::PathBuf;
use std::time::Duration;

const SESSION_FILE: &str = "session.json";

pub(crate) async fn site_config(global: &Global) -> Result<SiteConfig> {
    match &global.config_dir {
        Some(dir) => SiteConfig::load(dir)
            .await
            .with_context(|| format!("Failed to load configuration from {}", dir.display())),
        None => Ok(SiteConfig::builtin()?),
    }
}

pub(crate) fn session_file(global: &Global) -> Result<PathBuf> {
    match &global.session_file {
        Some(path) => Ok(path.clone()),
        None => dirs::data_dir()
            .map(|dir| dir.join(crate::cli::BIN_NAME).join(SESSION_FILE))
            .ok_or_else(|| anyhow!("No data directory found, pass --session-file")),
    }
}

pub(crate) fn api_client(global: &Global) -> Result<ApiClient> {
    let config = Config::new(global.api_url.clone());
    Ok(ApiClient::new(config, Duration::from_secs(global.timeout_secs))?)
}

pub(crate) fn authenticator(global: &Global) -> Result<Authenticator<FileSessionStore>> {
    Ok(Authenticator::new(
        api_client(global)?,
        FileSessionStore::new(session_file(global)?),
    ))
}

/// Client carrying the stored session, or an anonymous one if there is none.
pub(crate) async fn restored_client(global: &Global) -> Result<ApiClient> {
    let mut authenticator = authenticator(global)?;
    authenticator.restore().await?;
    Ok(authenticator.into_client())
}

/// Engagement is only offered for publications of the catalog.
pub(crate) async fn publication(global: &Global, slug: &str) -> Result<Publication> {
    let site = site_config(global).await?;
    site.publications
        .get_by_slug(slug)
        .cloned()
        .ok_or_else(|| anyhow!("Unknown publication {slug}"))
}
