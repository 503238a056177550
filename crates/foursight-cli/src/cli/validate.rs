use crate::opt::Validate;
use anyhow::{Error, Result, anyhow};
use foursight_config::SiteConfig;

pub(crate) async fn exec(opt: Validate) -> Result<(), Error> {
    if !tokio::fs::try_exists(&opt.dir).await? {
        return Err(anyhow!("{} does not exist", opt.dir.display()));
    }
    let site = SiteConfig::load(&opt.dir).await?;

    for assessment in site.assessments.assessments().values() {
        println!(
            "Assessment {}: {} questions in {} sections, max score {}, bands {}",
            assessment.assessment_id,
            assessment.question_count(),
            assessment.sections.len(),
            assessment.max_score(),
            assessment
                .bands
                .iter()
                .map(|band| format!("{} ({}-{})", band.label, band.min, band.max))
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    println!(
        "Publications: {} in categories {}",
        site.publications.len(),
        site.publications.categories()[1..].join(", ")
    );
    println!("Configuration in {} is ok 👌", opt.dir.display());
    Ok(())
}
