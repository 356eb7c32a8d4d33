use crate::store::slice::SliceAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    /// Login or registration completed.
    LoggedIn { username: String },
    /// Session ended or expired.
    LoggedOut,
}

impl SliceAction for AuthAction {}
