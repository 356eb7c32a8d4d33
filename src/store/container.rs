//! The store: current state tree, dispatch, and subscriber notification.

use std::sync::{Arc, Weak};

use parking_lot::{Mutex, ReentrantMutex};

use super::action::{Action, InvalidActionError, RawAction};
use super::tree::{self, AppState};

type Listener = Arc<dyn Fn(&Arc<AppState>) + Send + Sync>;

struct StoreInner {
    state: Arc<AppState>,
    listeners: Vec<(u64, Listener)>,
    next_listener_id: u64,
}

/// Owner of the application state.
///
/// Cloning yields another handle to the same store; independent stores are
/// created with [`Store::new`]. Dispatches are serialized: one runs to
/// completion, notifications included, before the next one starts. A
/// listener may dispatch from inside a notification.
#[derive(Clone)]
pub struct Store {
    inner: Arc<Mutex<StoreInner>>,
    dispatching: Arc<ReentrantMutex<()>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create a store holding default slices.
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    /// Create a store from a preloaded tree.
    pub fn with_state(state: AppState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                state: Arc::new(state),
                listeners: Vec::new(),
                next_listener_id: 0,
            })),
            dispatching: Arc::new(ReentrantMutex::new(())),
        }
    }

    /// The current tree.
    pub fn get_state(&self) -> Arc<AppState> {
        Arc::clone(&self.inner.lock().state)
    }

    /// Apply `action` and, if the tree changed, notify every listener in
    /// registration order.
    ///
    /// Listeners registered or removed while the notification pass runs do
    /// not affect that pass. Each listener receives the tree current at the
    /// moment it is called, so a dispatch nested in an earlier listener is
    /// already visible to the later ones.
    pub fn dispatch(&self, action: impl Into<Action>) {
        let action = action.into();
        let kind = action.kind();
        let _serial = self.dispatching.lock();

        let listeners = {
            let mut inner = self.inner.lock();
            let next = tree::reduce(&inner.state, action);
            if Arc::ptr_eq(&next, &inner.state) {
                tracing::trace!(kind, "Dispatch left state unchanged");
                return;
            }
            inner.state = next;
            inner
                .listeners
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect::<Vec<Listener>>()
        };

        tracing::trace!(kind, listeners = listeners.len(), "Dispatch committed");
        for listener in &listeners {
            let current = self.get_state();
            listener(&current);
        }
    }

    /// Dispatch a serialized action.
    ///
    /// # Errors
    /// Returns [`InvalidActionError`] when the action has no type or its
    /// payload does not decode. The tree is untouched in that case. Unknown
    /// types are accepted and change nothing.
    pub fn dispatch_raw(&self, raw: RawAction) -> Result<(), InvalidActionError> {
        match Action::parse(raw) {
            Ok(Some(action)) => {
                self.dispatch(action);
                Ok(())
            }
            Ok(None) => {
                tracing::trace!("Ignoring action with unknown type");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Rejected action");
                Err(e)
            }
        }
    }

    /// Dispatch a JSON-encoded `{ "type": ..., "payload": ... }` action.
    pub fn dispatch_json(&self, json: &str) -> Result<(), InvalidActionError> {
        let raw: RawAction = serde_json::from_str(json).map_err(|e| {
            tracing::warn!(error = %e, "Rejected action");
            InvalidActionError::Json(e)
        })?;
        self.dispatch_raw(raw)
    }

    /// Register `listener` to run after every committed dispatch.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&Arc<AppState>) + Send + Sync + 'static,
    {
        let mut inner = self.inner.lock();
        let id = inner.next_listener_id;
        inner.next_listener_id += 1;
        inner.listeners.push((id, Arc::new(listener)));

        Subscription {
            id,
            store: Arc::downgrade(&self.inner),
        }
    }

    /// Register `listener` for one slice.
    ///
    /// The listener runs only when `select` yields a different `Arc` than
    /// the one seen at the previous notification.
    pub fn subscribe_slice<T, S, F>(&self, select: S, listener: F) -> Subscription
    where
        T: Send + Sync + 'static,
        S: Fn(&AppState) -> &Arc<T> + Send + Sync + 'static,
        F: Fn(&Arc<T>) + Send + Sync + 'static,
    {
        let initial = self.get_state();
        let last = Mutex::new(Arc::clone(select(&initial)));
        self.subscribe(move |state| {
            let current = select(&**state);
            {
                let mut last = last.lock();
                if Arc::ptr_eq(&last, current) {
                    return;
                }
                *last = Arc::clone(current);
            }
            listener(current);
        })
    }

    pub fn listener_count(&self) -> usize {
        self.inner.lock().listeners.len()
    }
}

/// Handle returned by [`Store::subscribe`].
///
/// Dropping it leaves the listener registered.
pub struct Subscription {
    id: u64,
    store: Weak<Mutex<StoreInner>>,
}

impl Subscription {
    /// Remove the listener. Has no effect once the store is gone.
    pub fn unsubscribe(self) {
        if let Some(store) = self.store.upgrade() {
            store.lock().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}
