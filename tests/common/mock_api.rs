//! Mock identity/photo API for profile source tests.

#![allow(dead_code)]

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

pub const IDENTITY_BODY: &str = r#"{"results":[{"name":{"title":"Ms","first":"Ayu","last":"Lestari"},"location":{"city":"Surabaya"}}]}"#;
pub const PHOTO_BODY: &str = r#"{"urls":{"regular":"https://images.test/ayu.jpg"},"user":{"name":"Rina Foto"}}"#;

/// A canned response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn error(status: u16) -> Self {
        Self {
            status,
            body: r#"{"error":"mock failure"}"#.to_string(),
        }
    }
}

#[derive(Clone)]
struct MockState {
    identity: Arc<Mutex<VecDeque<MockResponse>>>,
    photo: Arc<Mutex<VecDeque<MockResponse>>>,
    photo_queries: Arc<Mutex<Vec<String>>>,
}

/// Serves `/api/` and `/photos/random`.
///
/// Each path pops queued responses first and falls back to a valid payload.
pub struct MockApi {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockApi {
    pub async fn start() -> Self {
        let state = MockState {
            identity: Arc::new(Mutex::new(VecDeque::new())),
            photo: Arc::new(Mutex::new(VecDeque::new())),
            photo_queries: Arc::new(Mutex::new(Vec::new())),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/api/", get(identity))
            .route("/photos/random", get(photo))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn enqueue_identity(&self, resp: MockResponse) {
        self.state.identity.lock().await.push_back(resp);
    }

    pub async fn enqueue_photo(&self, resp: MockResponse) {
        self.state.photo.lock().await.push_back(resp);
    }

    /// Raw query strings seen by the photo endpoint.
    pub async fn photo_queries(&self) -> Vec<String> {
        self.state.photo_queries.lock().await.clone()
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn identity(State(state): State<MockState>) -> Response {
    let next = state.identity.lock().await.pop_front();
    respond(next.unwrap_or_else(|| MockResponse::json(IDENTITY_BODY)))
}

async fn photo(State(state): State<MockState>, uri: Uri) -> Response {
    state
        .photo_queries
        .lock()
        .await
        .push(uri.query().unwrap_or_default().to_string());
    let next = state.photo.lock().await.pop_front();
    respond(next.unwrap_or_else(|| MockResponse::json(PHOTO_BODY)))
}

fn respond(resp: MockResponse) -> Response {
    let status = StatusCode::from_u16(resp.status).unwrap();
    (status, [("content-type", "application/json")], resp.body).into_response()
}
