//! Async fetch worker task.
//!
//! Runs the one startup request on the tokio runtime and reports back over a
//! channel, so the render loop keeps animating the loading indicator while
//! the request is in flight. The UI thread never touches `reqwest`.

use tokio::sync::mpsc;
use tracing::{error, info};

use super::client::CompanyClient;
use super::types::FetchEvent;

/// Fetch the listing once and emit exactly one `FetchEvent`.
pub async fn run(client: CompanyClient, evt_tx: mpsc::Sender<FetchEvent>) {
    info!("Fetching companies from {}", client.url());

    let event = match client.fetch_companies().await {
        Ok(companies) => {
            info!("Fetched {} companies", companies.len());
            FetchEvent::Loaded(companies)
        }
        Err(e) => {
            error!("Error fetching data: {e}");
            FetchEvent::Failed(e.to_string())
        }
    };

    // The receiver is gone only if the UI already quit.
    let _ = evt_tx.send(event).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;

    use crate::fetch::client::tests::{serve, LISTING};

    #[tokio::test]
    async fn success_sends_loaded_once() {
        let base = serve(Router::new().route("/data", get(|| async { LISTING }))).await;
        let (tx, mut rx) = mpsc::channel(4);

        run(CompanyClient::new(format!("{base}/data")), tx).await;

        match rx.recv().await {
            Some(FetchEvent::Loaded(companies)) => assert_eq!(companies.len(), 2),
            other => panic!("expected Loaded, got {other:?}"),
        }
        // Sender was moved into `run` and dropped: nothing else follows.
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn server_error_sends_failed() {
        let base = serve(Router::new().route(
            "/data",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        ))
        .await;
        let (tx, mut rx) = mpsc::channel(4);

        run(CompanyClient::new(format!("{base}/data")), tx).await;

        match rx.recv().await {
            Some(FetchEvent::Failed(message)) => assert!(message.contains("500")),
            other => panic!("expected Failed, got {other:?}"),
        }
    }
}
