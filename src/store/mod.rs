//! Centralized, action-driven state container.
//!
//! - `slice.rs` - `SliceAction`, `SliceState`, `Reducer` traits
//! - `action.rs` - the closed action set and its wire form
//! - `tree.rs` - `AppState` and the combined reducer
//! - `container.rs` - `Store`, `Subscription`

pub mod action;
mod container;
pub mod slice;
pub mod tree;

pub use action::{Action, InvalidActionError, RawAction};
pub use container::{Store, Subscription};
pub use tree::AppState;
