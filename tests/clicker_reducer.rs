use pagestore::clicker::{ClickerAction, ClickerReducer, ClickerState};
use pagestore::store::slice::Reducer;

#[test]
fn shift_up_twice_and_down_once_yields_one() {
    let state = ClickerState::default();
    let state = ClickerReducer::reduce(state, ClickerAction::Shift { delta: 1 });
    let state = ClickerReducer::reduce(state, ClickerAction::Shift { delta: 1 });
    let state = ClickerReducer::reduce(state, ClickerAction::Shift { delta: -1 });
    assert_eq!(state.value, 1);
}

#[test]
fn final_value_is_sum_of_deltas() {
    let deltas = [7, -3, 0, 12, -40, 5, 1];
    let state = deltas
        .iter()
        .fold(ClickerState::default(), |state, &delta| {
            ClickerReducer::reduce(state, ClickerAction::Shift { delta })
        });
    assert_eq!(state.value, deltas.iter().sum::<i64>());
}

#[test]
fn order_of_deltas_does_not_matter() {
    let forward = [4, -9, 2, 11];
    let run = |deltas: &[i64]| {
        deltas.iter().fold(ClickerState::default(), |state, &delta| {
            ClickerReducer::reduce(state, ClickerAction::Shift { delta })
        })
    };
    let mut reversed = forward;
    reversed.reverse();
    assert_eq!(run(&forward), run(&reversed));
}

#[test]
fn large_delta_is_not_bounded() {
    let state = ClickerReducer::reduce(
        ClickerState { value: -5 },
        ClickerAction::Shift { delta: 1_000_000 },
    );
    assert_eq!(state.value, 999_995);
}
