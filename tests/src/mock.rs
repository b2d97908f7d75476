//! # Mock Sunrise Service
//!
//! In-process stand-in for the Sunrise data publishing API, bound to
//! `127.0.0.1:0`. Blobs are kept in memory exactly as received (base64).

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use parking_lot::{Mutex, RwLock};
use serde::Deserialize;
use sunrise_alt_da::adapters::api::{
    GetBlobResponse, PublishRequest, PublishResponse, GET_BLOB_PATH, PUBLISH_PATH,
};
use tokio::task::JoinHandle;

/// Shared mock state; tests flip the knobs while the service runs.
#[derive(Default)]
pub struct MockState {
    blobs: RwLock<HashMap<String, String>>,
    requests: Mutex<Vec<PublishRequest>>,
    publish_count: AtomicUsize,
    publish_received: AtomicUsize,
    /// Answer every publish with HTTP 500.
    pub fail_publish: AtomicBool,
    /// Delay applied to every publish before it is stored.
    pub publish_delay: Mutex<Option<Duration>>,
    /// Delay applied to every fetch.
    pub get_delay: Mutex<Option<Duration>>,
}

impl MockState {
    /// Publishes that completed and were stored.
    pub fn publish_count(&self) -> usize {
        self.publish_count.load(Ordering::SeqCst)
    }

    /// Publish requests that reached the service, finished or not.
    pub fn publish_received(&self) -> usize {
        self.publish_received.load(Ordering::SeqCst)
    }

    /// Every publish request received so far.
    pub fn requests(&self) -> Vec<PublishRequest> {
        self.requests.lock().clone()
    }

    pub fn stored(&self) -> usize {
        self.blobs.read().len()
    }
}

/// Running mock service.
pub struct MockSunrise {
    addr: SocketAddr,
    pub state: Arc<MockState>,
    handle: JoinHandle<()>,
}

impl MockSunrise {
    pub async fn spawn() -> Self {
        let state = Arc::new(MockState::default());
        let router = Router::new()
            .route(PUBLISH_PATH, post(publish))
            .route(GET_BLOB_PATH, get(get_blob))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock sunrise");
        let addr = listener.local_addr().expect("mock sunrise addr");
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockSunrise {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Address with nothing listening on it.
pub async fn unreachable_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind unused port");
    let addr = listener.local_addr().expect("unused port addr");
    drop(listener);
    format!("http://{}", addr)
}

async fn publish(
    State(state): State<Arc<MockState>>,
    Json(request): Json<PublishRequest>,
) -> Result<Json<PublishResponse>, StatusCode> {
    state.publish_received.fetch_add(1, Ordering::SeqCst);
    let delay = *state.publish_delay.lock();
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    if state.fail_publish.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    let id = state.publish_count.fetch_add(1, Ordering::SeqCst);
    let metadata_uri = format!("ipfs://mock-{}", id);
    state
        .blobs
        .write()
        .insert(metadata_uri.clone(), request.blob.clone());
    state.requests.lock().push(request);

    Ok(Json(PublishResponse { metadata_uri }))
}

#[derive(Deserialize)]
struct GetBlobQuery {
    metadata_uri: String,
}

async fn get_blob(
    State(state): State<Arc<MockState>>,
    Query(query): Query<GetBlobQuery>,
) -> Json<GetBlobResponse> {
    let delay = *state.get_delay.lock();
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    // Unknown locators get an empty envelope, like the real service.
    let blob = state
        .blobs
        .read()
        .get(&query.metadata_uri)
        .cloned()
        .unwrap_or_default();
    Json(GetBlobResponse { blob })
}
