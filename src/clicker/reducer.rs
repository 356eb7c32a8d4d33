use crate::store::slice::Reducer;

use super::action::ClickerAction;
use super::state::ClickerState;

pub struct ClickerReducer;

impl Reducer for ClickerReducer {
    type State = ClickerState;
    type Action = ClickerAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            // Bounding is left to the views.
            ClickerAction::Shift { delta } => ClickerState {
                value: state.value.wrapping_add(delta),
            },
        }
    }
}
