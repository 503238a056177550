use async_trait::async_trait;
use std::future::Future;
use std::time::{Duration, Instant};

use crate::core::{BaseHttpClient, HttpRequest, HttpResponse};
use crate::error::Error;
use reqwest::{Request, Response};
use serde::de::DeserializeOwned;
use tokio::time::timeout;

/// Upper bound for a single request including reading the body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Single attempt client, failed requests are not retried.
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl ReqwestHttpClient {
    pub fn new(timeout: Duration) -> Result<Self, Error> {
        let mut client_builder = reqwest::ClientBuilder::new();
        client_builder = client_builder.redirect(reqwest::redirect::Policy::none());

        let client = client_builder.build()?;

        Ok(Self { client, timeout })
    }

    fn build_request(&self, request: HttpRequest) -> Result<Request, Error> {
        let (parts, body) = request.into_parts();
        self.client
            .request(parts.method, parts.uri.to_string())
            .headers(parts.headers)
            .body(body)
            .build()
            .map_err(Into::into)
    }

    async fn execute_request(&self, request: HttpRequest) -> Result<Response, Error> {
        let method = request.method().clone();
        let uri = request.uri().clone();
        let request = self.build_request(request)?;
        let started = Instant::now();
        let response = self.client.execute(request).await;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let response = match response {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!(%method, %uri, elapsed_ms, error = &err as &dyn std::error::Error, "request failed");
                return Err(err.into());
            }
        };
        let status = response.status();
        tracing::debug!(%method, %uri, %status, elapsed_ms, "received response");

        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(Error::StatusCode { status, body })
        }
    }

    async fn bounded<T>(&self, operation: impl Future<Output = Result<T, Error>>) -> Result<T, Error> {
        timeout(self.timeout, operation).await.map_err(|_| Error::Timeout)?
    }
}

fn response_builder(response: &Response) -> http::response::Builder {
    let mut http_response = http::response::Response::builder().status(response.status());
    if let Some(header_map) = http_response.headers_mut() {
        header_map.extend(response.headers().clone());
    }
    http_response
}

#[async_trait]
impl BaseHttpClient for ReqwestHttpClient {
    type Error = Error;

    async fn request_json<T: DeserializeOwned + Send>(&self, request: HttpRequest) -> Result<HttpResponse<T>, Self::Error> {
        self.bounded(async move {
            let response = self.execute_request(request).await?;
            let builder = response_builder(&response);
            let json = response.json().await?;
            builder.body(json).map_err(Into::into)
        })
        .await
    }

    async fn request_empty(&self, request: HttpRequest) -> Result<HttpResponse<()>, Self::Error> {
        self.bounded(async move {
            let response = self.execute_request(request).await?;
            response_builder(&response).body(()).map_err(Into::into)
        })
        .await
    }
}
