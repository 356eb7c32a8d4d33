//! Client-side state and data lifecycle for a small single-page application.
//!
//! - [`store`] - state tree, actions, dispatch and subscriptions
//! - [`clicker`], [`auth`], [`resource`] - slices and their reducers
//! - [`resource::ResourceController`] - async fetch lifecycle
//! - [`auth::AuthGate`] - render-time authorization
//! - [`routes`], [`views`] - route table and text views used by the binary

pub mod auth;
pub mod clicker;
pub mod config;
pub mod logging;
pub mod model;
pub mod resource;
pub mod routes;
pub mod store;
pub mod views;
