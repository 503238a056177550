use crate::error::{Error, HttpError, InternalError};
use crate::session::Session;
use async_trait::async_trait;
use foursight_http::{BaseHttpClient, HttpClient, HttpRequest, HttpResponse};
use foursight_model::engagement::{Comment, CommentRequest, VoteRequest, VoteType, Votes};
use foursight_model::login::{SignInRequest, SignUpRequest, Token};
use foursight_model::user::User;
use http::{HeaderMap, HeaderValue, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8001";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: ApiUrl,
}

impl Config {
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url: ApiUrl { url: base_url },
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiUrl {
    pub url: Url,
}

impl ApiUrl {
    /// Appends `segments` to the base url, escaping each one.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, InternalError> {
        let mut url = self.url.clone();
        url.path_segments_mut()
            .map_err(|()| InternalError::CannotBeABase(self.url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

fn build_request(url: &Url, method: Method, headers: HeaderMap, body: Vec<u8>) -> Result<HttpRequest, Error> {
    let mut request_builder = http::request::Request::builder().method(method).uri(url.as_str());
    if let Some(header_map) = request_builder.headers_mut() {
        header_map.extend(headers);
    }
    request_builder.body(body).map_err(|err| HttpError::from(err).into())
}

fn json_body<B: Serialize + Sync>(headers: &mut HeaderMap, body: &B) -> Result<Vec<u8>, Error> {
    headers.insert(http::header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    serde_json::to_vec(body).map_err(Into::into)
}

fn bearer(token: &str) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();
    let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(InternalError::from)?;
    value.set_sensitive(true);
    headers.insert(http::header::AUTHORIZATION, value);
    Ok(headers)
}

#[async_trait]
pub trait BaseClient: Sync {
    fn get_http_client(&self) -> &HttpClient;
    fn get_config(&self) -> &Config;

    async fn api_send_request<T: DeserializeOwned + Send>(&self, request: HttpRequest) -> Result<HttpResponse<T>, HttpError> {
        tracing::debug!(method = %request.method(), uri = %request.uri(), "Sending API request");
        self.get_http_client()
            .request_json(request)
            .await
            .map_err(HttpError::from)
    }

    async fn api_request<T: DeserializeOwned + Send>(
        &self,
        method: Method,
        path: &[&str],
        headers: HeaderMap,
    ) -> Result<T, Error> {
        let url = self.get_config().base_url.endpoint(path)?;
        let request = build_request(&url, method, headers, vec![])?;
        let res = self.api_send_request(request).await?;
        Ok(res.into_body())
    }

    async fn api_json_request<B: Serialize + Sync, T: DeserializeOwned + Send>(
        &self,
        method: Method,
        path: &[&str],
        mut headers: HeaderMap,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.get_config().base_url.endpoint(path)?;
        let body = json_body(&mut headers, body)?;
        let request = build_request(&url, method, headers, body)?;
        let res = self.api_send_request(request).await?;
        Ok(res.into_body())
    }

    async fn api_empty_request(&self, method: Method, path: &[&str], headers: HeaderMap) -> Result<(), Error> {
        let url = self.get_config().base_url.endpoint(path)?;
        let request = build_request(&url, method, headers, vec![])?;
        tracing::debug!(method = %request.method(), uri = %request.uri(), "Sending API request");
        self.get_http_client()
            .request_empty(request)
            .await
            .map_err(HttpError::from)?;
        Ok(())
    }
}

/// Endpoints that do not need a session.
#[async_trait]
pub trait PublicClient: BaseClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Token, Error> {
        self.api_json_request(
            Method::POST,
            &["auth", "signin"],
            HeaderMap::new(),
            &SignInRequest { email, password },
        )
        .await
    }

    async fn sign_up(&self, username: &str, email: &str, password: &str) -> Result<Token, Error> {
        self.api_json_request(
            Method::POST,
            &["auth", "signup"],
            HeaderMap::new(),
            &SignUpRequest {
                username,
                email,
                password,
            },
        )
        .await
    }

    /// Validates `token` by fetching its user.
    async fn user_for_token(&self, token: &str) -> Result<User, Error> {
        self.api_request(Method::GET, &["auth", "me"], bearer(token)?).await
    }
}

impl<T> PublicClient for T where T: BaseClient {}

/// Endpoints that send the session token, either required or when present.
#[async_trait]
pub trait SecureClient: PublicClient {
    fn get_session(&self) -> Option<&Session>;

    fn auth_headers(&self) -> Result<HeaderMap, Error> {
        let session = self.get_session().ok_or(Error::Unauthenticated)?;
        bearer(&session.token)
    }

    fn optional_auth_headers(&self) -> Result<HeaderMap, Error> {
        self.get_session()
            .map_or_else(|| Ok(HeaderMap::new()), |session| bearer(&session.token))
    }

    async fn me(&self) -> Result<User, Error> {
        self.api_request(Method::GET, &["auth", "me"], self.auth_headers()?)
            .await
    }

    async fn votes(&self, slug: &str) -> Result<Votes, Error> {
        self.api_request(Method::GET, &["posts", slug, "votes"], self.optional_auth_headers()?)
            .await
    }

    async fn vote(&self, slug: &str, vote_type: VoteType) -> Result<Votes, Error> {
        self.api_json_request(
            Method::POST,
            &["posts", slug, "votes"],
            self.auth_headers()?,
            &VoteRequest { vote_type },
        )
        .await
    }

    async fn comments(&self, slug: &str) -> Result<Vec<Comment>, Error> {
        self.api_request(Method::GET, &["posts", slug, "comments"], self.optional_auth_headers()?)
            .await
    }

    async fn comment(&self, slug: &str, text: &str) -> Result<Comment, Error> {
        self.api_json_request(
            Method::POST,
            &["posts", slug, "comments"],
            self.auth_headers()?,
            &CommentRequest { text },
        )
        .await
    }

    async fn uncomment(&self, slug: &str, comment_id: &str) -> Result<(), Error> {
        self.api_empty_request(
            Method::DELETE,
            &["posts", slug, "comments", comment_id],
            self.auth_headers()?,
        )
        .await
    }
}
