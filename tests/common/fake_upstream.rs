//! Fake roadmap API server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves `GET /api/v2/m365` with whatever body and status the test
//! configured, and counts requests so tests can check that every search
//! re-fetches.
//!
//! # Example
//!
//! ```rust,no_run
//! let api = FakeUpstream::start().await.unwrap();
//! api.set_payload(upstream_payload()).await;
//! let feed = HttpFeed::new(api.feed_url(), Duration::from_secs(5)).unwrap();
//! ```

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

struct ApiState {
    status: StatusCode,
    body: String,
    hits: usize,
}

/// Handle to the running fake upstream.
pub struct FakeUpstream {
    addr: SocketAddr,
    state: Arc<Mutex<ApiState>>,
}

impl FakeUpstream {
    /// Start the server on a random port with an empty `value` array.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(ApiState {
            status: StatusCode::OK,
            body: r#"{"value":[]}"#.to_string(),
            hits: 0,
        }));

        let app = Router::new()
            .route("/api/v2/m365", get(roadmap))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    /// Full URL of the feed endpoint.
    pub fn feed_url(&self) -> String {
        format!("http://{}/api/v2/m365", self.addr)
    }

    /// Serve `payload` with 200 OK from now on.
    pub async fn set_payload(&self, payload: serde_json::Value) {
        self.set_raw(StatusCode::OK, payload.to_string()).await;
    }

    /// Serve an arbitrary status and body from now on.
    pub async fn set_raw(&self, status: StatusCode, body: impl Into<String>) {
        let mut state = self.state.lock().await;
        state.status = status;
        state.body = body.into();
    }

    /// Number of feed requests served so far.
    pub async fn hits(&self) -> usize {
        self.state.lock().await.hits
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn roadmap(State(state): State<Arc<Mutex<ApiState>>>) -> impl IntoResponse {
    let mut state = state.lock().await;
    state.hits += 1;
    (
        state.status,
        [("content-type", "application/json")],
        state.body.clone(),
    )
}
