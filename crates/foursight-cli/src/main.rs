mod cli;

use anyhow::Result;
use clap::Parser;
use cli::opt;
use foursight_utils::tracing::TracingConfig;
use tracing::level_filters::LevelFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let opt = opt::Cli::parse();
    let _guard = foursight_utils::tracing::setup(
        TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .sentry_dsn(opt.global.sentry_dsn.clone())
            .env(opt.global.env.clone())
            .default_level(if opt.global.debug {
                LevelFilter::DEBUG
            } else {
                LevelFilter::WARN
            })
            .build(),
    )?;
    cli::exec(opt.global, opt.command).await
}
