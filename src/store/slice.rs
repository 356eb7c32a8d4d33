//! Base traits for state slices.
//!
//! ```text
//! Action ──→ Reducer ──→ Slice ──→ Store ──→ Subscribers
//!    ↑                                           │
//!    └───────────────────────────────────────────┘
//! ```
//!
//! - **SliceState**: immutable value of one region of the state tree
//! - **SliceAction**: tagged description of a change addressed to one slice
//! - **Reducer**: pure function that computes the next slice value

/// Marker trait for slice actions.
///
/// Actions carry data only. Each one belongs to exactly one slice, and
/// only that slice's reducer reacts to it.
pub trait SliceAction: Clone + Send + 'static {}

/// Marker trait for slice state.
///
/// Slices should be:
/// - Immutable (Clone to create the next value)
/// - Comparable (PartialEq lets the store keep the old `Arc` when nothing changed)
/// - Defaulted (the tree starts from `Default` slices)
pub trait SliceState: Clone + PartialEq + Default + Send + Sync + 'static {}

/// Reducer transforms slice state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure, total function: (State, Action) -> State
pub trait Reducer {
    /// The slice this reducer operates on.
    type State: SliceState;

    /// The actions this reducer handles.
    type Action: SliceAction;

    /// Process an action and return the next slice value.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}
