// Session - per-run state owned by the frame loop
//
// Holds the single game-state value and the pointer debouncer. Nothing else
// in the game is mutable after startup.

use sdl2::rect::Point;
use tracing::debug;

use crate::input_system::{ClickDebouncer, InputContext};
use crate::region::RegionCatalog;

use super::state::{apply_click, ClickOutcome, GameState};

pub struct Session {
    state: GameState,
    debouncer: ClickDebouncer,
}

impl Session {
    pub fn new() -> Self {
        Session {
            state: GameState::Normal,
            debouncer: ClickDebouncer::new(),
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn input_context(&self) -> InputContext {
        InputContext::for_state(self.state)
    }

    /// Feed one frame's pointer sample into the session.
    ///
    /// `pressed` is the primary button's current status. `locate` converts the
    /// pointer to logical coordinates and is only called for a qualifying click
    /// while the game still accepts input.
    ///
    /// Returns the click outcome when a qualifying click was processed.
    pub fn handle_pointer<F>(
        &mut self,
        pressed: bool,
        catalog: &RegionCatalog,
        locate: F,
    ) -> Option<ClickOutcome>
    where
        F: FnOnce() -> Option<Point>,
    {
        // Always track the button, even when finished
        let fresh_press = self.debouncer.update(pressed);

        if !fresh_press || self.input_context() == InputContext::Finished {
            return None;
        }

        let point = locate()?;
        let hit = catalog.find_hit(point);
        if let Some(region) = hit {
            debug!(x = point.x(), y = point.y(), region = region.label(), "island_clicked");
        }

        let outcome = apply_click(self.state, hit);
        self.state = outcome.state;
        Some(outcome)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
