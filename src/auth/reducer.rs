use crate::store::slice::Reducer;

use super::action::AuthAction;
use super::state::AuthState;

pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthState;
    type Action = AuthAction;

    fn reduce(_state: Self::State, action: Self::Action) -> Self::State {
        match action {
            AuthAction::LoggedIn { username } => AuthState {
                is_authenticated: true,
                username: Some(username),
            },
            AuthAction::LoggedOut => AuthState::default(),
        }
    }
}
