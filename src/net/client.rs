// HTTP client for the parks site and the place-search API.
// Returns response bodies as text whatever the status code.

use reqwest::{
    Client, Response,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::Serialize;
use url::Url;

use crate::error::{Result, ScoutError};

const USER_AGENT_VALUE: &str = concat!("parkscout/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper around a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(ScoutError::Http)?;

        Ok(Self { client })
    }

    /// GET `url` and return the body.
    pub async fn get_text(&self, url: &Url) -> Result<String> {
        let response = self.client.get(url.clone()).send().await?;
        Self::read_body(response).await
    }

    /// GET `url` with query parameters and return the body.
    pub async fn get_text_with_params<T: Serialize + ?Sized>(
        &self,
        url: &Url,
        params: &T,
    ) -> Result<String> {
        let response = self
            .client
            .get(url.clone())
            .query(params)
            .send()
            .await?;
        Self::read_body(response).await
    }

    /// Error statuses are not failures here; the body is handed on unchanged.
    async fn read_body(response: Response) -> Result<String> {
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %response.url(), %status, "non-success response");
        }
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    #[tokio::test]
    async fn test_error_status_body_is_returned() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing.htm"))
            .respond_with(ResponseTemplate::new(404).set_body_string("<h1>Not Found</h1>"))
            .mount(&server)
            .await;

        let client = HttpClient::new().unwrap();
        let url = Url::parse(&format!("{}/missing.htm", server.uri())).unwrap();

        let body = client.get_text(&url).await.unwrap();
        assert_eq!(body, "<h1>Not Found</h1>");
    }

    #[tokio::test]
    async fn test_query_params_are_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("origin", "49931"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new().unwrap();
        let url = Url::parse(&format!("{}/search", server.uri())).unwrap();

        let body = client
            .get_text_with_params(&url, &[("origin", "49931")])
            .await
            .unwrap();
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_http_error() {
        let client = HttpClient::new().unwrap();
        let url = Url::parse("http://127.0.0.1:9/").unwrap();

        let err = client.get_text(&url).await.unwrap_err();
        assert!(matches!(err, ScoutError::Http(_)));
    }
}
