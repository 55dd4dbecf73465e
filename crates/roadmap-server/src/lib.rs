//! roadmap-server: HTTP transport for the roadmap search tool.
//!
//! A thin JSON layer: requests are marshalled into a
//! [`FilterSpec`](roadmap_core::FilterSpec), results come back as
//! [`SearchResult`](roadmap_core::SearchResult) JSON. All search semantics
//! live in `roadmap-core`.
//!
//! | Route | |
//! |-------|-|
//! | `GET /healthz` | liveness |
//! | `GET /tools` | tool description |
//! | `GET /search?...` | search from query parameters |
//! | `POST /search` | search from a JSON body |
//! | `GET /features/{id}` | single feature by roadmap ID |

pub mod routes;
pub mod tool;

use roadmap_core::{Clock, QueryEngine, RecordSource};
use std::sync::Arc;
use tokio::net::TcpListener;

pub use routes::router;

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve<S, C>(engine: QueryEngine<S, C>, addr: &str) -> anyhow::Result<()>
where
    S: RecordSource + 'static,
    C: Clock + 'static,
{
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "roadmap server listening");

    axum::serve(listener, router(Arc::new(engine)))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutdown requested");
        })
        .await?;
    Ok(())
}
