//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, EMPTY_QUERY_MESSAGE, LookupState};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Lookup actions =====
        Action::QueryChange(query) => {
            state.query = query;
            DispatchResult::changed()
        }

        Action::LookupSubmit(query) => {
            state.query = query.clone();

            // Validation short-circuit: no network call, Loading never entered
            if query.trim().is_empty() {
                state.lookup = LookupState::Failure(EMPTY_QUERY_MESSAGE.to_string());
                return DispatchResult::changed();
            }

            state.lookup = LookupState::Loading;
            state.tick_count = 0;
            DispatchResult::changed_with(Effect::Lookup { query })
        }

        Action::LookupDidLoad(reading) => {
            state.lookup = LookupState::Success(reading);
            DispatchResult::changed()
        }

        Action::LookupDidError(message) => {
            state.lookup = LookupState::Failure(message);
            DispatchResult::changed()
        }

        // ===== Global actions =====
        Action::Render => DispatchResult::changed(),

        Action::Tick => {
            if state.loading_anim_active() {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{NOT_FOUND_MESSAGE, TRANSIENT_MESSAGE};
    use crate::state::WeatherReading;

    fn paris() -> WeatherReading {
        WeatherReading {
            city: "Paris, FR".into(),
            temperature: 18.2,
            windspeed: 11.4,
        }
    }

    #[test]
    fn test_submit_sets_loading_and_emits_effect() {
        let mut state = AppState::default();
        state.tick_count = 9;

        let result = reducer(&mut state, Action::LookupSubmit("Paris".into()));

        assert!(result.changed);
        assert!(state.lookup.is_loading());
        assert_eq!(state.tick_count, 0);
        assert_eq!(result.effects.len(), 1);
        assert!(
            matches!(&result.effects[0], Effect::Lookup { query } if query == "Paris")
        );
    }

    #[test]
    fn test_empty_submit_fails_without_effect() {
        for input in ["", "   ", "\t \n"] {
            let mut state = AppState::default();

            let result = reducer(&mut state, Action::LookupSubmit(input.into()));

            assert!(result.changed);
            assert!(result.effects.is_empty(), "no network call for {:?}", input);
            assert!(!state.lookup.is_loading());
            assert_eq!(state.lookup.error(), Some(EMPTY_QUERY_MESSAGE));
        }
    }

    #[test]
    fn test_submit_carries_untrimmed_query() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::LookupSubmit("  Paris ".into()));

        assert!(
            matches!(&result.effects[0], Effect::Lookup { query } if query == "  Paris ")
        );
    }

    #[test]
    fn test_did_load_replaces_loading() {
        let mut state = AppState::default();
        reducer(&mut state, Action::LookupSubmit("Paris".into()));

        let result = reducer(&mut state, Action::LookupDidLoad(paris()));

        assert!(result.changed);
        assert_eq!(state.lookup.reading(), Some(&paris()));
    }

    #[test]
    fn test_did_error_replaces_loading() {
        let mut state = AppState::default();
        reducer(&mut state, Action::LookupSubmit("Nowhereville".into()));

        reducer(&mut state, Action::LookupDidError(NOT_FOUND_MESSAGE.into()));

        assert_eq!(state.lookup.error(), Some(NOT_FOUND_MESSAGE));
    }

    #[test]
    fn test_new_submit_clears_prior_outcome() {
        let mut state = AppState::default();
        reducer(&mut state, Action::LookupSubmit("Paris".into()));
        reducer(&mut state, Action::LookupDidLoad(paris()));

        reducer(&mut state, Action::LookupSubmit("London".into()));

        assert!(state.lookup.is_loading());
        assert_eq!(state.lookup.reading(), None);
        assert_eq!(state.lookup.error(), None);
    }

    #[test]
    fn test_identical_sequences_yield_identical_state() {
        let run = || {
            let mut state = AppState::default();
            reducer(&mut state, Action::QueryChange("Paris".into()));
            reducer(&mut state, Action::LookupSubmit("Paris".into()));
            reducer(&mut state, Action::LookupDidLoad(paris()));
            state
        };

        let first = run();
        let second = run();

        assert_eq!(first.query, second.query);
        assert_eq!(first.lookup, second.lookup);
    }

    // Overlapping lookups are not cancelled; whichever completion arrives
    // last determines the final state.
    #[test]
    fn test_last_completion_wins() {
        let mut state = AppState::default();
        reducer(&mut state, Action::LookupSubmit("Paris".into()));
        reducer(&mut state, Action::LookupSubmit("London".into()));

        reducer(&mut state, Action::LookupDidError(TRANSIENT_MESSAGE.into()));
        reducer(&mut state, Action::LookupDidLoad(paris()));

        assert_eq!(state.lookup.reading(), Some(&paris()));

        reducer(&mut state, Action::LookupSubmit("Paris".into()));
        reducer(&mut state, Action::LookupSubmit("London".into()));
        reducer(&mut state, Action::LookupDidLoad(paris()));
        reducer(&mut state, Action::LookupDidError(TRANSIENT_MESSAGE.into()));

        assert_eq!(state.lookup.error(), Some(TRANSIENT_MESSAGE));
    }

    #[test]
    fn test_tick_only_animates_while_loading() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::Tick);
        assert!(!result.changed);
        assert_eq!(state.tick_count, 0);

        reducer(&mut state, Action::LookupSubmit("Paris".into()));
        let result = reducer(&mut state, Action::Tick);
        assert!(result.changed);
        assert_eq!(state.tick_count, 1);

        reducer(&mut state, Action::LookupDidLoad(paris()));
        let result = reducer(&mut state, Action::Tick);
        assert!(!result.changed);
    }
}
