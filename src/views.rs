//! Plain-text views over store slices.
//!
//! Each view is a pure function of its props. Resource views gate on
//! status so stale items are never shown as current.

use std::fmt::Display;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::auth::View;
use crate::clicker::ClickerState;
use crate::model::{Post, User};
use crate::resource::{ResourceState, Status};

/// Items that carry a stable list key.
pub trait Keyed {
    fn key(&self) -> u64;
}

impl Keyed for User {
    fn key(&self) -> u64 {
        self.id
    }
}

impl Keyed for Post {
    fn key(&self) -> u64 {
        self.id
    }
}

pub struct ClickerView;

impl View for ClickerView {
    type Props = ClickerState;
    type Output = String;

    fn render(&self, props: &ClickerState) -> String {
        format!("[ {} ]  (+)  (-)", props.value)
    }
}

/// Loader, error line or keyed list, depending on the resource status.
pub struct ResourceListView<T> {
    title: &'static str,
    _item: PhantomData<fn(&T)>,
}

impl<T> ResourceListView<T> {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            _item: PhantomData,
        }
    }
}

impl<T: Keyed + Display> View for ResourceListView<T> {
    type Props = ResourceState<T>;
    type Output = String;

    fn render(&self, props: &ResourceState<T>) -> String {
        match props.status {
            Status::Idle => String::new(),
            Status::Loading => "Loading...".to_string(),
            Status::Failed => format!("Failed to load {}.", self.title),
            Status::Succeeded => props
                .items
                .iter()
                .map(|item| format!("#{} {}\n", item.key(), item))
                .collect(),
        }
    }
}

pub struct PostPageProps {
    pub posts: Arc<ResourceState<Post>>,
    pub id: u64,
}

/// A single post, looked up by id in the posts slice.
pub struct PostView;

impl View for PostView {
    type Props = PostPageProps;
    type Output = String;

    fn render(&self, props: &PostPageProps) -> String {
        match props.posts.status {
            Status::Idle => String::new(),
            Status::Loading => "Loading...".to_string(),
            Status::Failed => "Failed to load posts.".to_string(),
            Status::Succeeded => match props.posts.items.iter().find(|post| post.id == props.id) {
                Some(post) => format!("{}\n\n{}", post.title, post.body),
                None => format!("Post #{} not found.", props.id),
            },
        }
    }
}
