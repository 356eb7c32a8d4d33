//! Request/response lifecycle for one remote collection.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use crate::model::{Post, User};
use crate::store::Store;

use super::action::ResourceAction;
use super::fetcher::Fetcher;
use super::kind::{Posts, ResourceKind, Users};

/// Drives a resource slice through `LOADING` and then `SUCCEEDED` or
/// `FAILED`.
///
/// Requests are never cancelled or fenced. When several overlap, each one
/// settles the slice as it completes, so the last settlement decides the
/// final status and items.
pub struct ResourceController<R, F> {
    store: Store,
    fetcher: Arc<F>,
    in_flight: Arc<AtomicUsize>,
    _kind: PhantomData<fn() -> R>,
}

pub type UsersController<F> = ResourceController<Users, F>;
pub type PostsController<F> = ResourceController<Posts, F>;

impl<R, F> ResourceController<R, F>
where
    R: ResourceKind,
    F: Fetcher<R::Item>,
{
    pub fn new(store: Store, fetcher: F) -> Self {
        Self {
            store,
            fetcher: Arc::new(fetcher),
            in_flight: Arc::new(AtomicUsize::new(0)),
            _kind: PhantomData,
        }
    }

    /// Mark the resource as loading, then fetch it on a spawned task.
    ///
    /// The loading action is dispatched before this returns. The returned
    /// handle completes once the settling action has been dispatched; it
    /// never carries the fetch error. Must be called within a Tokio runtime.
    pub fn request(&self) -> JoinHandle<()> {
        let request_id = Uuid::new_v4();
        let overlapping = self.in_flight.fetch_add(1, Ordering::SeqCst);
        self.store.dispatch(R::wrap(ResourceAction::Loading));

        let span = tracing::debug_span!("fetch", resource = R::NAME, %request_id);
        span.in_scope(|| tracing::debug!(overlapping, "Request issued"));

        let store = self.store.clone();
        let fetcher = Arc::clone(&self.fetcher);
        let in_flight = Arc::clone(&self.in_flight);

        tokio::spawn(
            async move {
                let result = fetcher.fetch().await;

                let still_pending = in_flight.fetch_sub(1, Ordering::SeqCst).saturating_sub(1);
                if still_pending > 0 {
                    tracing::debug!(still_pending, "Settling while other requests are in flight");
                }

                match result {
                    Ok(items) => {
                        tracing::debug!(count = items.len(), "Request succeeded");
                        store.dispatch(R::wrap(ResourceAction::Succeeded { items }));
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Request failed");
                        store.dispatch(R::wrap(ResourceAction::Failed));
                    }
                }
            }
            .instrument(span),
        )
    }

    /// Requests issued and not yet settled.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn store(&self) -> &Store {
        &self.store
    }
}

impl<F: Fetcher<User>> ResourceController<Users, F> {
    pub fn request_users(&self) -> JoinHandle<()> {
        self.request()
    }
}

impl<F: Fetcher<Post>> ResourceController<Posts, F> {
    pub fn request_posts(&self) -> JoinHandle<()> {
        self.request()
    }
}
