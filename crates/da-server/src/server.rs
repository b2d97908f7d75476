//! # DA Server
//!
//! Alt-DA HTTP surface over a [`DaStore`].
//!
//! | Route | Behavior |
//! |-------|----------|
//! | `POST /put` | Store the body, respond with the wire commitment |
//! | `GET /get/0x{commitment}` | Respond with the stored blob |
//! | `GET /health` | Liveness |
//!
//! Wire commitments are `[0x01][version][payload]`; only the generic type is
//! served.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use sunrise_alt_da::{decode_wire, parse_hex, DaStore, InvalidCommitment, StoreError};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn, Span};

use crate::error::ServerError;

/// DA server with explicit start/stop.
pub struct DaServer {
    addr: String,
    store: Arc<dyn DaStore>,
    span: Span,
    running: Option<Running>,
}

struct Running {
    local_addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    handle: JoinHandle<std::io::Result<()>>,
}

impl DaServer {
    /// `addr` is `host:port`; port `0` picks a free port.
    pub fn new(addr: impl Into<String>, store: Arc<dyn DaStore>, span: Span) -> Self {
        Self {
            addr: addr.into(),
            store,
            span,
            running: None,
        }
    }

    /// Bind and start serving in the background.
    pub async fn start(&mut self) -> Result<(), ServerError> {
        if self.running.is_some() {
            return Err(ServerError::AlreadyStarted);
        }

        let listener = TcpListener::bind(&self.addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: self.addr.clone(),
                source,
            })?;
        let local_addr = listener.local_addr().map_err(|source| ServerError::Bind {
            addr: self.addr.clone(),
            source,
        })?;

        let router = build_router(AppState {
            store: Arc::clone(&self.store),
            span: self.span.clone(),
        });

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        info!(
            parent: &self.span,
            addr = %local_addr,
            backend = self.store.name(),
            "DA server listening"
        );

        self.running = Some(Running {
            local_addr,
            shutdown_tx,
            handle,
        });
        Ok(())
    }

    /// Bound address while running.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.running.as_ref().map(|r| r.local_addr)
    }

    /// Base URL while running, e.g. `http://127.0.0.1:3100`.
    pub fn endpoint(&self) -> Option<String> {
        self.local_addr().map(|addr| format!("http://{}", addr))
    }

    /// Stop accepting connections and wait for in-flight requests.
    pub async fn stop(&mut self) -> Result<(), ServerError> {
        let running = self.running.take().ok_or(ServerError::NotStarted)?;
        let _ = running.shutdown_tx.send(());

        match running.handle.await {
            Ok(Ok(())) => {
                info!(parent: &self.span, "DA server stopped");
                Ok(())
            }
            Ok(Err(e)) => Err(ServerError::Serve(e.to_string())),
            Err(e) => Err(ServerError::Serve(e.to_string())),
        }
    }
}

#[derive(Clone)]
struct AppState {
    store: Arc<dyn DaStore>,
    span: Span,
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/put", post(handle_put))
        .route("/put/", post(handle_put))
        .route("/get/:commitment", get(handle_get))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn handle_put(State(state): State<AppState>, body: Bytes) -> Result<Response, HandlerError> {
    put_blob(&state, &body)
        .await
        .map_err(|e| e.logged(&state.span))
}

async fn handle_get(
    State(state): State<AppState>,
    Path(commitment): Path<String>,
) -> Result<Response, HandlerError> {
    get_blob(&state, &commitment)
        .await
        .map_err(|e| e.logged(&state.span))
}

async fn put_blob(state: &AppState, body: &[u8]) -> Result<Response, HandlerError> {
    let commitment = state.store.put(body).await?;
    info!(
        parent: &state.span,
        size = body.len(),
        commitment = ?commitment,
        "stored blob"
    );

    Ok((
        [(header::CONTENT_TYPE, "application/octet-stream")],
        commitment.to_wire(),
    )
        .into_response())
}

async fn get_blob(state: &AppState, commitment: &str) -> Result<Response, HandlerError> {
    let wire = parse_hex(commitment)?;
    let encoded = decode_wire(&wire)?;
    let locator = state.store.codec().decode(encoded)?;

    let blob = state.store.get(locator).await?;
    Ok((
        [(header::CONTENT_TYPE, "application/octet-stream")],
        blob,
    )
        .into_response())
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "da-server",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Handler failure mapped onto an HTTP status.
#[derive(Debug)]
enum HandlerError {
    Commitment(InvalidCommitment),
    Store(StoreError),
}

impl From<InvalidCommitment> for HandlerError {
    fn from(e: InvalidCommitment) -> Self {
        Self::Commitment(e)
    }
}

impl From<StoreError> for HandlerError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

impl HandlerError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Commitment(_) => StatusCode::BAD_REQUEST,
            Self::Store(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Record the failure under the server span.
    fn logged(self, span: &Span) -> Self {
        match &self {
            Self::Commitment(e) => warn!(parent: span, error = %e, "rejected commitment"),
            Self::Store(e) if e.is_not_found() => {
                info!(parent: span, error = %e, "blob not found")
            }
            Self::Store(e) => error!(parent: span, error = %e, "store request failed"),
        }
        self
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Commitment(e) => e.to_string(),
            Self::Store(e) => e.to_string(),
        };
        (self.status(), message).into_response()
    }
}
