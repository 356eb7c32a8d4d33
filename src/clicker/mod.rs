//! Counter slice.
//!
//! - `state.rs` - `{ value }`
//! - `action.rs` - `CLICKER_SHIFT`
//! - `reducer.rs` - unbounded signed shift

mod action;
mod reducer;
mod state;

pub use action::ClickerAction;
pub use reducer::ClickerReducer;
pub use state::ClickerState;
