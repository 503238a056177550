use foursight_model::engagement::{Comment, Votes};
use foursight_model::login::Token;
use foursight_model::user::User;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Fake of the engagement API on a local port.
///
/// Every `mount_*` call answers exactly one matching request unless noted.
/// Mocks are matched in the order they were mounted.
pub struct MockBackend {
    server: MockServer,
}

impl MockBackend {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        tracing::debug!(uri = %server.uri(), "started mock backend");
        Self { server }
    }

    #[must_use]
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    #[must_use]
    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// All requests the backend has seen so far.
    pub async fn received(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    pub async fn mount_sign_in(&self, email: &str, password: &str, token: &Token) {
        Mock::given(method("POST"))
            .and(path("/auth/signin"))
            .and(body_json(json!({"email": email, "password": password})))
            .respond_with(ResponseTemplate::new(200).set_body_json(token))
            .up_to_n_times(1)
            .mount(&self.server)
            .await;
    }

    pub async fn mount_sign_up(&self, username: &str, email: &str, password: &str, token: &Token) {
        Mock::given(method("POST"))
            .and(path("/auth/signup"))
            .and(body_json(json!({"username": username, "email": email, "password": password})))
            .respond_with(ResponseTemplate::new(200).set_body_json(token))
            .up_to_n_times(1)
            .mount(&self.server)
            .await;
    }

    /// Answers every `/auth/me` request made with `token`.
    pub async fn mount_me(&self, token: &str, user: &User) {
        Mock::given(method("GET"))
            .and(path("/auth/me"))
            .and(header("authorization", format!("Bearer {token}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(user))
            .mount(&self.server)
            .await;
    }

    /// Answers every vote count request of the publication.
    pub async fn mount_votes(&self, slug: &str, votes: &Votes) {
        Mock::given(method("GET"))
            .and(path(format!("/posts/{slug}/votes")))
            .respond_with(ResponseTemplate::new(200).set_body_json(votes))
            .mount(&self.server)
            .await;
    }

    pub async fn mount_vote(&self, slug: &str, token: &str, vote_type: &str, votes: &Votes) {
        Mock::given(method("POST"))
            .and(path(format!("/posts/{slug}/votes")))
            .and(header("authorization", format!("Bearer {token}")))
            .and(body_json(json!({"vote_type": vote_type})))
            .respond_with(ResponseTemplate::new(200).set_body_json(votes))
            .up_to_n_times(1)
            .mount(&self.server)
            .await;
    }

    /// Answers every comment list request of the publication.
    pub async fn mount_comments(&self, slug: &str, comments: &[Comment]) {
        Mock::given(method("GET"))
            .and(path(format!("/posts/{slug}/comments")))
            .respond_with(ResponseTemplate::new(200).set_body_json(comments))
            .mount(&self.server)
            .await;
    }

    pub async fn mount_add_comment(&self, slug: &str, token: &str, comment: &Comment) {
        Mock::given(method("POST"))
            .and(path(format!("/posts/{slug}/comments")))
            .and(header("authorization", format!("Bearer {token}")))
            .and(body_json(json!({"text": comment.text})))
            .respond_with(ResponseTemplate::new(201).set_body_json(comment))
            .up_to_n_times(1)
            .mount(&self.server)
            .await;
    }

    pub async fn mount_delete_comment(&self, slug: &str, token: &str, comment_id: &str) {
        Mock::given(method("DELETE"))
            .and(path(format!("/posts/{slug}/comments/{comment_id}")))
            .and(header("authorization", format!("Bearer {token}")))
            .respond_with(ResponseTemplate::new(204))
            .up_to_n_times(1)
            .mount(&self.server)
            .await;
    }

    /// Fails one request with `status`, carrying `detail` in the body when given.
    pub async fn mount_error(&self, http_method: &str, request_path: &str, status: u16, detail: Option<&str>) {
        let response = match detail {
            Some(detail) => ResponseTemplate::new(status).set_body_json(json!({"detail": detail})),
            None => ResponseTemplate::new(status),
        };
        Mock::given(method(http_method))
            .and(path(request_path))
            .respond_with(response)
            .up_to_n_times(1)
            .mount(&self.server)
            .await;
    }
}
