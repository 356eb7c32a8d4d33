//! Remote collection resources.
//!
//! A resource slice holds the items of the last successful response and the
//! status of the latest settled request. The pattern is generic; `users`
//! and `posts` are its two instances.
//!
//! - `status.rs` - `IDLE` / `LOADING` / `SUCCEEDED` / `FAILED`
//! - `state.rs` - slice value
//! - `action.rs` - lifecycle actions
//! - `reducer.rs` - lifecycle transitions
//! - `kind.rs` - binding of a collection to its slice and tags
//! - `fetcher.rs` - network boundary
//! - `controller.rs` - request orchestration

mod action;
mod controller;
mod fetcher;
mod kind;
mod reducer;
mod state;
mod status;

pub use action::ResourceAction;
pub use controller::{PostsController, ResourceController, UsersController};
pub use fetcher::{FetchError, Fetcher, HttpFetcher};
pub use kind::{Posts, ResourceKind, ResourceTags, Users};
pub use reducer::ResourceReducer;
pub use state::{Record, ResourceState};
pub use status::Status;
