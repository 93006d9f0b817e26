//! HTTP client for the company listing endpoint.

use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use super::types::Company;

/// Everything that can go wrong while loading the listing.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("HTTP error! status: {status} - {reason}")]
    Status { status: u16, reason: String },
    /// Connect, TLS, or body read failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The body was not a JSON array of companies.
    #[error("malformed company listing: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Thin wrapper over a `reqwest::Client` bound to one listing URL.
#[derive(Debug, Clone)]
pub struct CompanyClient {
    http: Client,
    url: String,
}

impl CompanyClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issue the single GET and decode the body. No retries, no timeout.
    pub async fn fetch_companies(&self) -> Result<Vec<Company>, FetchError> {
        let response = self.http.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.bytes().await?;
        debug!("Received {} bytes from {}", body.len(), self.url);
        let companies = serde_json::from_slice(&body)?;
        Ok(companies)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;

    pub(crate) const LISTING: &str = r#"[
        {"name":"Maple Works","country":"Canada","industry":"Manufacturing","numberOfEmployees":12345},
        {"name":"Outback Data","country":"Australia","industry":"Technology","numberOfEmployees":50}
    ]"#;

    /// Serve `router` on an ephemeral local port and return its base URL.
    pub(crate) async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn decodes_a_successful_listing() {
        let base = serve(Router::new().route("/data", get(|| async { LISTING }))).await;
        let client = CompanyClient::new(format!("{base}/data"));

        let companies = client.fetch_companies().await.unwrap();
        assert_eq!(companies.len(), 2);
        assert_eq!(companies[0].name, "Maple Works");
        assert_eq!(companies[0].number_of_employees, 12345);
        assert_eq!(companies[1].country, "Australia");
    }

    #[tokio::test]
    async fn server_error_carries_status_and_reason() {
        let base = serve(Router::new().route(
            "/data",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        ))
        .await;
        let client = CompanyClient::new(format!("{base}/data"));

        let err = client.fetch_companies().await.unwrap_err();
        match &err {
            FetchError::Status { status, reason } => {
                assert_eq!(*status, 500);
                assert_eq!(reason, "Internal Server Error");
            }
            other => panic!("expected status error, got {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "HTTP error! status: 500 - Internal Server Error"
        );
    }

    #[tokio::test]
    async fn not_found_is_a_status_error() {
        let base = serve(Router::new()).await;
        let client = CompanyClient::new(format!("{base}/data"));

        let err = client.fetch_companies().await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let base = serve(Router::new().route("/data", get(|| async { "{not json" }))).await;
        let client = CompanyClient::new(format!("{base}/data"));

        let err = client.fetch_companies().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        // Bind then drop to get a port nobody listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = CompanyClient::new(format!("http://{addr}/data"));
        let err = client.fetch_companies().await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }
}
