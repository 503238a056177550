use crate::cli::context;
use crate::opt::{Global, Publications};
use anyhow::{Result, anyhow};
use foursight_config::publication::Publication;

fn summary(publication: &Publication) -> String {
    format!(
        "{}{} [{}] {} ({} min read, {})",
        if publication.featured { "★ " } else { "" },
        publication.slug,
        publication.category,
        publication.title,
        publication.read_time_minutes,
        publication.published.format("%b %-d, %Y"),
    )
}

pub(crate) async fn exec(global: &Global, command: Publications) -> Result<()> {
    let site = context::site_config(global).await?;
    let catalog = &site.publications;
    match command {
        Publications::List { category, query } => {
            let mut found = 0;
            for publication in catalog.filter(&category, &query) {
                println!("{}", summary(publication));
                found += 1;
            }
            if found == 0 {
                println!("No publications found");
            }
        }
        Publications::Categories => {
            for category in catalog.categories() {
                println!("{category}");
            }
        }
        Publications::Show { slug, related } => {
            let publication = catalog
                .get_by_slug(&slug)
                .ok_or_else(|| anyhow!("Unknown publication {slug}"))?;
            println!("{}", publication.title);
            println!("{} · {}", publication.author, publication.author_role);
            println!("{}\n", summary(publication));
            println!("{}", publication.excerpt);

            let related = catalog.related(publication, related).collect::<Vec<_>>();
            if !related.is_empty() {
                println!("\nRelated:");
                for publication in related {
                    println!("  {}", summary(publication));
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use foursight_config::publication::PublicationCatalog;

    #[test]
    fn test_summary() {
        let catalog = PublicationCatalog::builtin().unwrap();
        let featured = catalog.get_by_id(1).unwrap();
        let line = summary(featured);
        assert!(line.starts_with("★ future-of-ai-powered-business-intelligence"), "{line}");
        assert!(line.contains(&featured.title));
    }
}
