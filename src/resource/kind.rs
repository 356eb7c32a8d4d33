use std::sync::Arc;

use crate::model::{Post, User};
use crate::store::action::{self, Action};
use crate::store::tree::AppState;

use super::action::ResourceAction;
use super::state::{Record, ResourceState};

/// Action tags of one resource's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceTags {
    pub loading: &'static str,
    pub succeeded: &'static str,
    pub failed: &'static str,
}

impl ResourceTags {
    /// Tag of a lifecycle action.
    pub fn tag_of<T>(&self, action: &ResourceAction<T>) -> &'static str {
        match action {
            ResourceAction::Loading => self.loading,
            ResourceAction::Succeeded { .. } => self.succeeded,
            ResourceAction::Failed => self.failed,
        }
    }
}

/// Binds a remote collection to its slice of the state tree.
pub trait ResourceKind: Send + Sync + 'static {
    type Item: Record;

    /// Slice name, used in logs.
    const NAME: &'static str;

    const TAGS: ResourceTags;

    /// Address a lifecycle action to this resource's slice.
    fn wrap(action: ResourceAction<Self::Item>) -> Action;

    /// Read this resource's slice from the tree.
    fn select(state: &AppState) -> &Arc<ResourceState<Self::Item>>;
}

/// The `users` slice.
pub struct Users;

impl ResourceKind for Users {
    type Item = User;

    const NAME: &'static str = "users";

    const TAGS: ResourceTags = ResourceTags {
        loading: action::USERS_LOADING,
        succeeded: action::USERS_SUCCEEDED,
        failed: action::USERS_FAILED,
    };

    fn wrap(action: ResourceAction<User>) -> Action {
        Action::Users(action)
    }

    fn select(state: &AppState) -> &Arc<ResourceState<User>> {
        &state.users
    }
}

/// The `posts` slice.
pub struct Posts;

impl ResourceKind for Posts {
    type Item = Post;

    const NAME: &'static str = "posts";

    const TAGS: ResourceTags = ResourceTags {
        loading: action::POSTS_LOADING,
        succeeded: action::POSTS_SUCCEEDED,
        failed: action::POSTS_FAILED,
    };

    fn wrap(action: ResourceAction<Post>) -> Action {
        Action::Posts(action)
    }

    fn select(state: &AppState) -> &Arc<ResourceState<Post>> {
        &state.posts
    }
}
