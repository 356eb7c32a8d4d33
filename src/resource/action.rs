use crate::store::slice::SliceAction;

use super::state::Record;

/// Lifecycle actions of one remote collection.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceAction<T> {
    /// A request was issued.
    Loading,
    /// A request settled with a response.
    Succeeded { items: Vec<T> },
    /// A request settled with an error.
    Failed,
}

impl<T: Record> SliceAction for ResourceAction<T> {}
