//! Mock REST API for exercising the HTTP fetcher.
//!
//! Every request is recorded and answered with the next queued reply; an
//! empty queue answers `200 []`.

#![allow(dead_code)]

use axum::extract::State;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::{watch, Mutex};

/// Method and path of a request the server received.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub method: String,
    pub path: String,
}

/// Status and JSON body of a queued reply.
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

    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: serde_json::json!({ "error": message }).to_string(),
        }
    }
}

#[derive(Clone, Default)]
struct Script {
    hits: Arc<Mutex<Vec<Hit>>>,
    replies: Arc<Mutex<VecDeque<MockResponse>>>,
}

pub struct MockApi {
    pub addr: SocketAddr,
    script: Script,
    shutdown: watch::Sender<bool>,
}

impl MockApi {
    /// Bind an ephemeral port and serve until dropped.
    pub async fn start() -> Self {
        let script = Script::default();
        let app = Router::new()
            .route("/{*path}", any(reply))
            .with_state(script.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("mock server has no address");

        let (shutdown, mut stop) = watch::channel(false);
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = stop.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            script,
            shutdown,
        }
    }

    pub async fn enqueue_response(&self, reply: MockResponse) {
        self.script.replies.lock().await.push_back(reply);
    }

    pub async fn captured_requests(&self) -> Vec<Hit> {
        self.script.hits.lock().await.clone()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn reply(State(script): State<Script>, method: Method, uri: Uri) -> Response {
    script.hits.lock().await.push(Hit {
        method: method.to_string(),
        path: uri.path().to_string(),
    });

    let next = script.replies.lock().await.pop_front();
    let MockResponse { status, body } = next.unwrap_or_else(|| MockResponse::json("[]"));
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}
