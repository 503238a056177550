use clap::{Args, Parser, Subcommand};
use foursight::DEFAULT_API_URL;
use foursight_config::assessment::DATA_MATURITY_ID;
use foursight_config::publication::ALL_CATEGORIES;
use foursight_model::engagement::VoteType;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Parser)]
#[command(name = super::BIN_NAME, about = "Data maturity assessment and publication engagement")]
pub(crate) struct Cli {
    #[command(flatten)]
    pub global: Global,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct Global {
    #[arg(long, env = "FOURSIGHT_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub(crate) api_url: Url,

    #[arg(
        long,
        env = "FOURSIGHT_SESSION_FILE",
        global = true,
        help = "Where the session token is kept [default: <data dir>/foursight/session.json]"
    )]
    pub(crate) session_file: Option<PathBuf>,

    #[arg(long, default_value_t = 30, global = true, help = "Timeout of a single API request")]
    pub(crate) timeout_secs: u64,

    #[arg(
        long,
        env = "FOURSIGHT_CONFIG_DIR",
        global = true,
        help = "Directory with assessments/ and publications/ to use instead of the bundled ones"
    )]
    pub(crate) config_dir: Option<PathBuf>,

    #[arg(long = "sentry-dsn", env = "SENTRY_DSN", global = true, help = "Sentry url")]
    pub(crate) sentry_dsn: Option<String>,

    #[arg(long, default_value = "dev", global = true, help = "Set the environment used by sentry")]
    pub(crate) env: String,

    #[arg(short, long, global = true)]
    pub(crate) debug: bool,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Take an assessment and print the maturity band
    Assess(Assess),

    /// Check a configuration directory
    Validate(Validate),

    /// Write the JSON schemas of the configuration files
    Schema(Schema),

    #[command(subcommand)]
    Publications(Publications),

    SignIn(SignIn),

    SignUp(SignUp),

    SignOut,

    /// Show the signed in user
    Whoami,

    /// Show the votes of a publication
    Votes(Slug),

    /// Vote on a publication. Repeating your current vote withdraws it.
    Vote(Vote),

    /// List the comments of a publication
    Comments(Slug),

    Comment(Comment),

    /// Delete one of your comments
    Uncomment(Uncomment),
}

#[derive(Debug, Parser)]
pub(crate) struct Assess {
    #[arg(long, default_value = DATA_MATURITY_ID)]
    pub(crate) assessment: String,

    #[arg(long, help = "YAML file mapping question ids to scores, skips the interactive prompt")]
    pub(crate) answers: Option<PathBuf>,

    #[arg(long, help = "Print the result as JSON")]
    pub(crate) json: bool,
}

#[derive(Debug, Parser)]
pub(crate) struct Validate {
    #[arg(required = true)]
    pub(crate) dir: PathBuf,
}

#[derive(Debug, Parser)]
pub(crate) struct Schema {
    #[arg(required = true)]
    pub(crate) output_folder: String,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Publications {
    List {
        #[arg(long, default_value = ALL_CATEGORIES)]
        category: String,

        #[arg(long, short, default_value = "", help = "Matches title or excerpt, ignoring case")]
        query: String,
    },

    Categories,

    Show {
        slug: String,

        #[arg(long, default_value_t = 2)]
        related: usize,
    },
}

#[derive(Debug, Parser)]
pub(crate) struct SignIn {
    #[arg(long)]
    pub(crate) email: String,

    #[arg(long, env = "FOURSIGHT_PASSWORD", hide_env_values = true)]
    pub(crate) password: String,
}

#[derive(Debug, Parser)]
pub(crate) struct SignUp {
    #[arg(long)]
    pub(crate) username: String,

    #[arg(long)]
    pub(crate) email: String,

    #[arg(long, env = "FOURSIGHT_PASSWORD", hide_env_values = true)]
    pub(crate) password: String,

    #[arg(long)]
    pub(crate) confirm_password: String,
}

#[derive(Debug, Parser)]
pub(crate) struct Slug {
    pub(crate) slug: String,
}

#[derive(Debug, Parser)]
pub(crate) struct Vote {
    pub(crate) slug: String,

    #[arg(help = "up or down")]
    pub(crate) vote_type: VoteType,
}

#[derive(Debug, Parser)]
pub(crate) struct Comment {
    pub(crate) slug: String,

    pub(crate) text: String,
}

#[derive(Debug, Parser)]
pub(crate) struct Uncomment {
    pub(crate) slug: String,

    pub(crate) comment_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_vote() {
        let cli = Cli::try_parse_from(["foursight", "vote", "data-governance-modern-enterprise", "down"]).unwrap();
        let Commands::Vote(vote) = cli.command else {
            panic!("expected vote");
        };
        assert_eq!(vote.vote_type, VoteType::Down);
        assert_eq!(cli.global.timeout_secs, 30);
        assert!(Cli::try_parse_from(["foursight", "vote", "x", "sideways"]).is_err());
    }
}
