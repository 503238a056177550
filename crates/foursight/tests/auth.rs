use foursight::error::AuthError;
use foursight::{ApiClient, Authenticator, Config, DEFAULT_API_URL, FileSessionStore, SessionStore};
use foursight_core::ActionError;
use foursight_core::auth::SignUpForm;
use foursight_test_helpers::MockBackend;
use foursight_test_helpers::fixtures::{self, EMAIL, PASSWORD, TOKEN};
use std::time::Duration;
use tempfile::TempDir;
use test_log::test;

struct Setup {
    backend: MockBackend,
    store: FileSessionStore,
    _dir: TempDir,
}

impl Setup {
    async fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        Self {
            backend: MockBackend::start().await,
            store: FileSessionStore::new(dir.path().join("session.json")),
            _dir: dir,
        }
    }

    fn authenticator(&self) -> Authenticator<FileSessionStore> {
        let config = Config::new(self.backend.uri().parse().unwrap());
        let client = ApiClient::new(config, Duration::from_secs(5)).unwrap();
        Authenticator::new(client, self.store.clone())
    }
}

fn sign_up_form(password: &str, confirm_password: &str) -> SignUpForm {
    SignUpForm {
        username: "mara".to_owned(),
        email: EMAIL.to_owned(),
        password: password.to_owned(),
        confirm_password: confirm_password.to_owned(),
    }
}

#[test(tokio::test)]
async fn test_sign_in_persists_token() {
    let setup = Setup::new().await;
    setup.backend.mount_sign_in(EMAIL, PASSWORD, &fixtures::token()).await;

    let mut auth = setup.authenticator();
    let session = auth.sign_in(EMAIL, PASSWORD).await.unwrap();
    assert_eq!(session.user, fixtures::user());
    assert_eq!(session.token, TOKEN);
    assert_eq!(setup.store.load_token().await.unwrap().as_deref(), Some(TOKEN));
}

#[test(tokio::test)]
async fn test_sign_in_failure_shows_detail() {
    let setup = Setup::new().await;
    setup
        .backend
        .mount_error("POST", "/auth/signin", 401, Some("Incorrect email or password"))
        .await;

    let mut auth = setup.authenticator();
    let Err(AuthError::Action(err)) = auth.sign_in(EMAIL, "wrong").await else {
        panic!("expected sign in to fail");
    };
    assert_eq!(err.to_string(), "Incorrect email or password");
    assert!(auth.session().is_none());
    assert_eq!(setup.store.load_token().await.unwrap(), None);
}

#[test(tokio::test)]
async fn test_sign_up_validates_before_request() {
    let setup = Setup::new().await;
    let mut auth = setup.authenticator();

    let Err(AuthError::Action(err)) = auth.sign_up(&sign_up_form("hunter22", "hunter23")).await else {
        panic!("expected mismatch");
    };
    assert_eq!(err, ActionError::validation("Passwords do not match"));

    let Err(AuthError::Action(err)) = auth.sign_up(&sign_up_form("abc", "abc")).await else {
        panic!("expected short password");
    };
    assert_eq!(err, ActionError::validation("Password must be at least 6 characters"));
    assert!(setup.backend.received().await.is_empty());
}

#[test(tokio::test)]
async fn test_sign_up() {
    let setup = Setup::new().await;
    setup
        .backend
        .mount_sign_up("mara", EMAIL, PASSWORD, &fixtures::token())
        .await;

    let mut auth = setup.authenticator();
    let session = auth.sign_up(&sign_up_form(PASSWORD, PASSWORD)).await.unwrap();
    assert_eq!(session.user.username, "mara");
    assert_eq!(setup.store.load_token().await.unwrap().as_deref(), Some(TOKEN));
}

#[test(tokio::test)]
async fn test_sign_up_server_error_falls_back() {
    let setup = Setup::new().await;
    setup.backend.mount_error("POST", "/auth/signup", 500, None).await;

    let mut auth = setup.authenticator();
    let Err(AuthError::Action(err)) = auth.sign_up(&sign_up_form(PASSWORD, PASSWORD)).await else {
        panic!("expected sign up to fail");
    };
    assert_eq!(err, ActionError::network("Sign up failed"));
}

#[test(tokio::test)]
async fn test_restore_valid_token() {
    let setup = Setup::new().await;
    setup.store.save_token(TOKEN).await.unwrap();
    setup.backend.mount_me(TOKEN, &fixtures::user()).await;

    let mut auth = setup.authenticator();
    let session = auth.restore().await.unwrap().unwrap();
    assert_eq!(session.user, fixtures::user());
    assert!(auth.client().session().is_some());
}

#[test(tokio::test)]
async fn test_restore_removes_rejected_token() {
    let setup = Setup::new().await;
    setup.store.save_token("expired").await.unwrap();
    setup
        .backend
        .mount_error("GET", "/auth/me", 401, Some("Could not validate credentials"))
        .await;

    let mut auth = setup.authenticator();
    assert!(auth.restore().await.unwrap().is_none());
    assert!(auth.session().is_none());
    assert_eq!(setup.store.load_token().await.unwrap(), None);
}

#[test(tokio::test)]
async fn test_restore_keeps_token_on_server_error() {
    let setup = Setup::new().await;
    setup.store.save_token(TOKEN).await.unwrap();
    setup.backend.mount_error("GET", "/auth/me", 503, None).await;

    let mut auth = setup.authenticator();
    let Err(AuthError::Action(err)) = auth.restore().await else {
        panic!("expected restore to fail");
    };
    assert_eq!(err, ActionError::network("Failed to restore session"));
    assert!(auth.session().is_none());
    assert_eq!(setup.store.load_token().await.unwrap(), Some(TOKEN.to_owned()));

    setup.backend.mount_me(TOKEN, &fixtures::user()).await;
    assert!(auth.restore().await.unwrap().is_some());
}

#[test(tokio::test)]
async fn test_restore_without_token() {
    let setup = Setup::new().await;
    let mut auth = setup.authenticator();
    assert!(auth.restore().await.unwrap().is_none());
    assert!(setup.backend.received().await.is_empty());
}

#[test(tokio::test)]
async fn test_logout() {
    let setup = Setup::new().await;
    setup.backend.mount_sign_in(EMAIL, PASSWORD, &fixtures::token()).await;
    let mut auth = setup.authenticator();
    auth.sign_in(EMAIL, PASSWORD).await.unwrap();

    auth.logout().await.unwrap();
    assert!(auth.session().is_none());
    assert_eq!(setup.store.load_token().await.unwrap(), None);
}

#[test(tokio::test)]
async fn test_refresh_user_failure_logs_out() {
    let setup = Setup::new().await;
    setup.backend.mount_sign_in(EMAIL, PASSWORD, &fixtures::token()).await;
    setup.backend.mount_error("GET", "/auth/me", 401, None).await;
    let mut auth = setup.authenticator();
    auth.sign_in(EMAIL, PASSWORD).await.unwrap();

    let Err(AuthError::Action(err)) = auth.refresh_user().await else {
        panic!("expected refresh to fail");
    };
    assert!(err.is_auth_required());
    assert!(auth.session().is_none());
    assert_eq!(setup.store.load_token().await.unwrap(), None);
}

#[test]
fn test_default_api_url() {
    let config = Config::new(DEFAULT_API_URL.parse().unwrap());
    assert_eq!(
        config.base_url.endpoint(&["auth", "me"]).unwrap().as_str(),
        "http://localhost:8001/auth/me"
    );
}
