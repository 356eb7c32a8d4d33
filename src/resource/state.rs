use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::store::slice::SliceState;

use super::status::Status;

/// Bounds shared by every item of a remote collection.
pub trait Record:
    Clone + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

impl<T> Record for T where
    T: Clone + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

/// A remote collection and the status of its last request.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    /// Items of the last successful response, in the order received.
    pub items: Vec<T>,
    pub status: Status,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            status: Status::Idle,
        }
    }
}

impl<T: Record> SliceState for ResourceState<T> {}

impl<T> ResourceState<T> {
    /// Items that may be rendered as current data.
    ///
    /// Returns `None` unless the last settled request succeeded, so stale
    /// items kept during `Loading` or after `Failed` are never shown as fresh.
    pub fn fresh_items(&self) -> Option<&[T]> {
        self.status.is_fresh().then_some(self.items.as_slice())
    }
}
