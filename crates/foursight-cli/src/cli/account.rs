use crate::cli::context;
use crate::opt::{Global, SignIn, SignUp};
use anyhow::Result;
use foursight_core::auth::SignUpForm;

pub(crate) async fn sign_in(global: &Global, opt: SignIn) -> Result<()> {
    let mut authenticator = context::authenticator(global)?;
    let session = authenticator.sign_in(&opt.email, &opt.password).await?;
    println!("Signed in as {}", session.user.username);
    Ok(())
}

pub(crate) async fn sign_up(global: &Global, opt: SignUp) -> Result<()> {
    let form = SignUpForm {
        username: opt.username,
        email: opt.email,
        password: opt.password,
        confirm_password: opt.confirm_password,
    };
    let mut authenticator = context::authenticator(global)?;
    let session = authenticator.sign_up(&form).await?;
    println!("Welcome, {}!", session.user.username);
    Ok(())
}

pub(crate) async fn sign_out(global: &Global) -> Result<()> {
    let mut authenticator = context::authenticator(global)?;
    authenticator.logout().await?;
    println!("Signed out");
    Ok(())
}

pub(crate) async fn whoami(global: &Global) -> Result<()> {
    let mut authenticator = context::authenticator(global)?;
    match authenticator.restore().await? {
        Some(session) => println!(
            "{} <{}>, member since {}",
            session.user.username, session.user.email, session.user.created_at
        ),
        None => println!("Not signed in"),
    }
    Ok(())
}
