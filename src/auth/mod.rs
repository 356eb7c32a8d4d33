//! Authentication session slice and the render-time gate for protected views.
//!
//! - `state.rs` - session (`is_authenticated`, username)
//! - `action.rs` - login / logout
//! - `reducer.rs` - session transitions
//! - `gate.rs` - `AuthGate`, the `with_auth` wrapper

mod action;
mod gate;
mod reducer;
mod state;

pub use action::AuthAction;
pub use gate::{with_auth, AuthGate, GateOutcome, View};
pub use reducer::AuthReducer;
pub use state::AuthState;
