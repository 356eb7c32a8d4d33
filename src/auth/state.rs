use crate::store::slice::SliceState;

/// Current authentication session.
///
/// The gate only ever reads `is_authenticated`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub username: Option<String>,
}

impl SliceState for AuthState {}
