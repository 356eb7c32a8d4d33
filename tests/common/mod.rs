//! Shared test utilities and fake fetchers.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use pagestore::config::ApiConfig;
use pagestore::model::{Post, User};
use pagestore::resource::{FetchError, Fetcher};
use pagestore::store::{AppState, Store};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::oneshot;

// -- Fixtures -----------------------------------------------------------------

pub fn user(id: u64, name: &str) -> User {
    User {
        id,
        name: name.to_string(),
        username: name.to_lowercase().replace(' ', "."),
        email: String::new(),
    }
}

pub fn post(id: u64, title: &str) -> Post {
    Post {
        id,
        user_id: 1,
        title: title.to_string(),
        body: format!("body of {}", title),
    }
}

/// API config pointing at a mock server.
pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
        ..ApiConfig::default()
    }
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Yield to spawned tasks until `done` holds for the store's state.
pub async fn wait_for(store: &Store, done: impl Fn(&AppState) -> bool) {
    tokio::time::timeout(Duration::from_secs(2), async {
        while !done(&*store.get_state()) {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("state never reached");
}

/// Yield to spawned tasks until `done` holds.
pub async fn wait_until(done: impl Fn() -> bool) {
    tokio::time::timeout(Duration::from_secs(2), async {
        while !done() {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("condition never reached");
}

// -- Fake fetchers ------------------------------------------------------------

/// Settles every request immediately with the same result.
pub struct StaticFetcher<T> {
    result: Result<Vec<T>, String>,
    calls: Arc<AtomicUsize>,
}

impl<T> StaticFetcher<T> {
    pub fn ok(items: Vec<T>) -> Self {
        Self {
            result: Ok(items),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl<T: Clone + Send + Sync + 'static> Fetcher<T> for StaticFetcher<T> {
    async fn fetch(&self) -> Result<Vec<T>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone().map_err(FetchError::Unavailable)
    }
}

pub type Settle<T> = oneshot::Sender<Result<Vec<T>, FetchError>>;

/// Hands each request the next scripted response channel, so a test decides
/// when and in what order requests settle.
pub struct ScriptedFetcher<T> {
    pending: Mutex<VecDeque<oneshot::Receiver<Result<Vec<T>, FetchError>>>>,
    started: Arc<AtomicUsize>,
}

impl<T> ScriptedFetcher<T> {
    /// Script `count` requests; returns the fetcher and one sender per request.
    pub fn new(count: usize) -> (Self, Vec<Settle<T>>) {
        let mut senders = Vec::with_capacity(count);
        let mut pending = VecDeque::with_capacity(count);
        for _ in 0..count {
            let (tx, rx) = oneshot::channel();
            senders.push(tx);
            pending.push_back(rx);
        }
        (
            Self {
                pending: Mutex::new(pending),
                started: Arc::new(AtomicUsize::new(0)),
            },
            senders,
        )
    }

    /// Number of requests that have taken their response channel.
    pub fn started(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.started)
    }
}

impl<T: Send + 'static> Fetcher<T> for ScriptedFetcher<T> {
    async fn fetch(&self) -> Result<Vec<T>, FetchError> {
        let next = self.pending.lock().pop_front();
        self.started.fetch_add(1, Ordering::SeqCst);
        match next {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(FetchError::Unavailable("script dropped".into()))),
            None => Err(FetchError::Unavailable("unscripted request".into())),
        }
    }
}
