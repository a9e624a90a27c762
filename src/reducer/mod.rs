//! Pure state-transition functions and their composition.
//!
//! A reducer computes the next state from the prior state and an action. It
//! must be total and deterministic, perform no I/O, and return its input
//! unchanged for any action it does not recognize. That default-case contract
//! is what makes reducers composable: the combinator can hand every action to
//! every slice and the uninterested slices no-op.

pub mod filter;
pub mod item;
pub mod items;

use crate::actions::Action;

/// A pure state-transition function over state type `S`.
///
/// Implemented directly by combinators generated with [`combine_reducers!`],
/// and by any `Fn(&S, &Action) -> S` closure through the blanket impl.
pub trait Reducer<S> {
    /// Compute the next state. Must not mutate `state` or observe anything
    /// beyond its arguments.
    fn reduce(&self, state: &S, action: &Action) -> S;
}

impl<S, F> Reducer<S> for F
where
    F: Fn(&S, &Action) -> S,
{
    fn reduce(&self, state: &S, action: &Action) -> S {
        self(state, action)
    }
}

/// Compose slice reducers, keyed by field name, into one reducer over a
/// composite state struct.
///
/// For every listed field `f`, the generated reducer computes
/// `next.f = slice_reducer(&prior.f, action)`. Each slice sees only its own
/// field plus the whole action; it cannot read or write siblings. The field
/// list must cover the state struct exactly, so adding a field to the state
/// without wiring a reducer for it fails to compile.
///
/// ```
/// use undertow::{combine_reducers, Action};
///
/// #[derive(Clone, Debug, Default, PartialEq)]
/// struct Counts {
///     ticks: u64,
/// }
///
/// fn ticks(state: &u64, _action: &Action) -> u64 {
///     *state
/// }
///
/// combine_reducers! {
///     pub struct CountsReducer for Counts {
///         ticks: ticks,
///     }
/// }
/// ```
#[macro_export]
macro_rules! combine_reducers {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident for $state:ident {
            $($field:ident : $slice:path),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default)]
        $vis struct $name;

        impl $crate::reducer::Reducer<$state> for $name {
            fn reduce(
                &self,
                state: &$state,
                action: &$crate::actions::Action,
            ) -> $state {
                $state {
                    $($field: $slice(&state.$field, action),)+
                }
            }
        }
    };
}
