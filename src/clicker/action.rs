use serde::{Deserialize, Serialize};

use crate::store::slice::SliceAction;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClickerAction {
    /// Add a signed delta to the counter.
    Shift { delta: i64 },
}

impl SliceAction for ClickerAction {}
