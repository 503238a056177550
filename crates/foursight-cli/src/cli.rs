mod account;
mod assess;
mod context;
mod engagement;
pub(crate) mod opt;
mod publications;
mod schema;
mod validate;

use crate::opt::{Commands, Global};
use anyhow::Error;

pub(crate) const BIN_NAME: &str = "foursight";

pub(crate) async fn exec(global: Global, command: Commands) -> Result<(), Error> {
    match command {
        Commands::Assess(o) => assess::exec(&global, o).await,
        Commands::Validate(o) => validate::exec(o).await,
        Commands::Schema(o) => schema::exec(o),
        Commands::Publications(o) => publications::exec(&global, o).await,
        Commands::SignIn(o) => account::sign_in(&global, o).await,
        Commands::SignUp(o) => account::sign_up(&global, o).await,
        Commands::SignOut => account::sign_out(&global).await,
        Commands::Whoami => account::whoami(&global).await,
        Commands::Votes(o) => engagement::votes(&global, o).await,
        Commands::Vote(o) => engagement::vote(&global, o).await,
        Commands::Comments(o) => engagement::comments(&global, o).await,
        Commands::Comment(o) => engagement::comment(&global, o).await,
        Commands::Uncomment(o) => engagement::uncomment(&global, o).await,
    }
}
