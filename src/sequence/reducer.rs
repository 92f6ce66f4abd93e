//! Reducer for the reveal sequence.

use crate::mvi::Reducer;

use super::intent::SequenceIntent;
use super::state::{SequenceState, Stage};

/// Reducer for sequence stage transitions.
///
/// Pure function — showing/hiding surfaces, scheduling timers and loading
/// the resource are handled by the controller around the dispatch call.
pub struct SequenceReducer;

impl Reducer for SequenceReducer {
    type State = SequenceState;
    type Intent = SequenceIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SequenceIntent::Start => SequenceState {
                stage: Stage::Loading,
                hero_open: false,
                run: state.run + 1,
                ..state
            },

            SequenceIntent::WelcomeShown => match state.stage {
                Stage::Loading => SequenceState {
                    stage: Stage::Welcome,
                    ..state
                },
                // Only the loader hands over to the welcome overlay
                _ => state,
            },

            SequenceIntent::HeroRevealed { presented } => SequenceState {
                stage: Stage::Hero,
                hero_open: presented,
                ..state
            },

            SequenceIntent::ResourceLoaded => SequenceState {
                resource_loaded: true,
                ..state
            },

            SequenceIntent::Closed => SequenceState {
                hero_open: false,
                resource_loaded: false,
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(stage: Stage) -> SequenceState {
        SequenceState {
            stage,
            run: 1,
            ..SequenceState::default()
        }
    }

    #[test]
    fn start_enters_loading_and_counts_run() {
        let state = SequenceReducer::reduce(SequenceState::default(), SequenceIntent::Start);
        assert_eq!(state.stage, Stage::Loading);
        assert_eq!(state.run, 1);

        let again = SequenceReducer::reduce(state, SequenceIntent::Start);
        assert_eq!(again.run, 2);
    }

    #[test]
    fn start_from_hero_closes_panel_but_keeps_resource() {
        let state = SequenceState {
            stage: Stage::Hero,
            hero_open: true,
            resource_loaded: true,
            run: 1,
        };
        let new = SequenceReducer::reduce(state, SequenceIntent::Start);
        assert_eq!(new.stage, Stage::Loading);
        assert!(!new.hero_open);
        assert!(new.resource_loaded);
    }

    #[test]
    fn loading_welcome_shown_transitions_to_welcome() {
        let new = SequenceReducer::reduce(at(Stage::Loading), SequenceIntent::WelcomeShown);
        assert_eq!(new.stage, Stage::Welcome);
    }

    #[test]
    fn hero_welcome_shown_is_noop() {
        let new = SequenceReducer::reduce(at(Stage::Hero), SequenceIntent::WelcomeShown);
        assert_eq!(new, at(Stage::Hero));
    }

    #[test]
    fn hero_revealed_from_any_stage() {
        for stage in [Stage::Loading, Stage::Welcome, Stage::Hero] {
            let new = SequenceReducer::reduce(
                at(stage),
                SequenceIntent::HeroRevealed { presented: true },
            );
            assert_eq!(new.stage, Stage::Hero);
            assert!(new.hero_open);
        }
    }

    #[test]
    fn hero_revealed_without_surface_is_not_open() {
        let new = SequenceReducer::reduce(
            at(Stage::Welcome),
            SequenceIntent::HeroRevealed { presented: false },
        );
        assert_eq!(new.stage, Stage::Hero);
        assert!(!new.hero_open);
    }

    #[test]
    fn closed_keeps_stage_and_resets_resource() {
        let state = SequenceState {
            stage: Stage::Hero,
            hero_open: true,
            resource_loaded: true,
            run: 3,
        };
        let new = SequenceReducer::reduce(state, SequenceIntent::Closed);
        assert_eq!(new.stage, Stage::Hero);
        assert!(!new.hero_open);
        assert!(!new.resource_loaded);
        assert_eq!(new.run, 3);
    }
}
