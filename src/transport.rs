use async_trait::async_trait;
use reqwest::{Client, Request};

use crate::error::AlertError;
use crate::types::HttpResponse;

/// Issues a single GET with query parameters and hands back the reply.
/// Implementations return every status as `Ok`; only failures to get a
/// reply at all are errors.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str, params: &[(&str, &str)]) -> Result<HttpResponse, AlertError>;
}

#[derive(Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, AlertError> {
        let http = Client::builder().build()?;
        Ok(Self { http })
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }

    /// Query values are percent-encoded here.
    pub fn build_request(&self, url: &str, params: &[(&str, &str)]) -> reqwest::Result<Request> {
        self.http.get(url).query(params).build()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, params: &[(&str, &str)]) -> Result<HttpResponse, AlertError> {
        // reqwest errors carry the full URL, which includes the bot token.
        let req = self
            .build_request(url, params)
            .map_err(reqwest::Error::without_url)?;
        let resp = self
            .http
            .execute(req)
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = match resp.text().await {
            Ok(body) => body,
            // The status is the useful part of a failed reply; keep it.
            Err(_) if !status.is_success() => String::new(),
            Err(e) => return Err(e.without_url().into()),
        };

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
