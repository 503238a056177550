pub mod assessment;
pub mod error;
pub mod publication;
mod site;

pub use site::SiteConfig;
