use serde::{Deserialize, Serialize};

/// Lifecycle of a remote resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Never requested.
    #[default]
    Idle,
    /// A request is in flight. Items, if any, are stale.
    Loading,
    /// The last settled request succeeded.
    Succeeded,
    /// The last settled request failed.
    Failed,
}

impl Status {
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_failed(self) -> bool {
        matches!(self, Self::Failed)
    }

    /// Whether the items may be shown as current data.
    pub fn is_fresh(self) -> bool {
        matches!(self, Self::Succeeded)
    }
}
