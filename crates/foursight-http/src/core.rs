use async_trait::async_trait;
use serde::de::DeserializeOwned;

pub type HttpRequest = http::request::Request<Vec<u8>>;

pub type HttpResponse<T> = http::response::Response<T>;

/// Executes prepared requests. Non-success status codes are returned as errors.
#[async_trait]
pub trait BaseHttpClient: Send + Sync + Clone {
    type Error;

    async fn request_json<T: DeserializeOwned + Send>(&self, request: HttpRequest) -> Result<HttpResponse<T>, Self::Error>;

    /// For endpoints that answer with an empty body, e.g. `204 No Content`.
    async fn request_empty(&self, request: HttpRequest) -> Result<HttpResponse<()>, Self::Error>;
}
