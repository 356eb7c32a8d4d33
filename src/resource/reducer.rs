use std::marker::PhantomData;

use crate::store::slice::Reducer;

use super::action::ResourceAction;
use super::state::{Record, ResourceState};
use super::status::Status;

/// Reducer for any remote collection slice.
pub struct ResourceReducer<T>(PhantomData<T>);

impl<T: Record> Reducer for ResourceReducer<T> {
    type State = ResourceState<T>;
    type Action = ResourceAction<T>;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            // Stale items stay; status gates their display.
            ResourceAction::Loading => ResourceState {
                items: state.items,
                status: Status::Loading,
            },
            ResourceAction::Succeeded { items } => ResourceState {
                items,
                status: Status::Succeeded,
            },
            ResourceAction::Failed => ResourceState {
                items: state.items,
                status: Status::Failed,
            },
        }
    }
}
