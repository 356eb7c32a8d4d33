use serde::{Deserialize, Serialize};

use crate::store::slice::SliceState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClickerState {
    pub value: i64,
}

impl SliceState for ClickerState {}
