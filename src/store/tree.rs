//! The state tree and the combined reducer.

use std::sync::Arc;

use crate::auth::{AuthReducer, AuthState};
use crate::clicker::{ClickerReducer, ClickerState};
use crate::model::{Post, User};
use crate::resource::{ResourceReducer, ResourceState};

use super::action::Action;
use super::slice::Reducer;

/// One version of the whole application state.
///
/// Each slice sits behind its own `Arc`. A dispatch builds a new tree that
/// shares every untouched slice with the previous one, so subscribers detect
/// change with `Arc::ptr_eq` instead of deep comparison. Nothing hands out
/// `&mut` access to a published tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub clicker: Arc<ClickerState>,
    pub users: Arc<ResourceState<User>>,
    pub posts: Arc<ResourceState<Post>>,
    pub auth: Arc<AuthState>,
}

/// Route `action` to its slice's reducer.
///
/// Returns the same `Arc` when the addressed slice comes out structurally
/// equal, otherwise a new tree sharing all other slices.
pub fn reduce(state: &Arc<AppState>, action: Action) -> Arc<AppState> {
    let mut next = (**state).clone();

    let changed = match action {
        Action::Clicker(action) => apply::<ClickerReducer>(&mut next.clicker, action),
        Action::Users(action) => apply::<ResourceReducer<User>>(&mut next.users, action),
        Action::Posts(action) => apply::<ResourceReducer<Post>>(&mut next.posts, action),
        Action::Auth(action) => apply::<AuthReducer>(&mut next.auth, action),
    };

    if changed {
        Arc::new(next)
    } else {
        Arc::clone(state)
    }
}

fn apply<R: Reducer>(slot: &mut Arc<R::State>, action: R::Action) -> bool {
    let reduced = R::reduce((**slot).clone(), action);
    if reduced == **slot {
        return false;
    }
    *slot = Arc::new(reduced);
    true
}
