// Game state machine
//
// Normal is the only state that accepts clicks. Victory and Defeat are
// terminal: once reached, nothing moves the game out of them.

use crate::region::{OutcomeKind, Region};

/// Game state enum for tracking the current outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Normal,
    Victory,
    Defeat,
}

impl Default for GameState {
    fn default() -> Self {
        GameState::Normal
    }
}

impl GameState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameState::Normal)
    }

    /// The scene drawn while in this state
    pub fn scene(&self) -> Scene {
        match self {
            GameState::Normal => Scene::Islands,
            GameState::Victory => Scene::Victory,
            GameState::Defeat => Scene::Defeat,
        }
    }
}

/// Static full-screen images the game can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scene {
    Islands,
    Victory,
    Defeat,
}

/// What a region kind does when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeEffect {
    /// State after the click, `None` to stay where we are
    pub next_state: Option<GameState>,
    /// Console line printed for the player
    pub message: &'static str,
}

impl OutcomeKind {
    /// Kind -> (transition, message) table
    pub fn effect(&self) -> OutcomeEffect {
        match self {
            OutcomeKind::Neutral => OutcomeEffect {
                next_state: None,
                message: "This is a normal island.",
            },
            OutcomeKind::Victory => OutcomeEffect {
                next_state: Some(GameState::Victory),
                message: "Victory!",
            },
            OutcomeKind::Defeat => OutcomeEffect {
                next_state: Some(GameState::Defeat),
                message: "Defeat!",
            },
        }
    }
}

/// Result of feeding one qualifying click into the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickOutcome {
    pub state: GameState,
    pub message: Option<&'static str>,
}

impl ClickOutcome {
    fn unchanged(state: GameState) -> Self {
        ClickOutcome { state, message: None }
    }

    pub fn changed_from(&self, previous: GameState) -> bool {
        self.state != previous
    }
}

/// Pure transition: (state, hit region) -> new state + diagnostic.
///
/// Terminal states and misses leave the state untouched and say nothing.
pub fn apply_click(state: GameState, hit: Option<&Region>) -> ClickOutcome {
    if state.is_terminal() {
        return ClickOutcome::unchanged(state);
    }

    match hit {
        Some(region) => {
            let effect = region.kind().effect();
            ClickOutcome {
                state: effect.next_state.unwrap_or(state),
                message: Some(effect.message),
            }
        }
        None => ClickOutcome::unchanged(state),
    }
}
