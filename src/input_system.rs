use sdl2::event::{Event, WindowEvent};
use sdl2::EventPump;

use crate::game::GameState;

/// Actions produced by the platform event queue
///
/// Pointer clicks are not events here: the primary button is sampled once
/// per frame and debounced by `ClickDebouncer`.
#[derive(Debug, Clone, PartialEq)]
pub enum GameAction {
    /// Window close requested
    Quit,
    /// Window resized to (width, height) in window pixels
    Resized(u32, u32),
}

/// Input context determines whether pointer input is considered at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Game running, islands can be clicked
    Exploring,
    /// Victory or defeat reached, clicks are ignored
    Finished,
}

impl InputContext {
    pub fn for_state(state: GameState) -> Self {
        if state.is_terminal() {
            InputContext::Finished
        } else {
            InputContext::Exploring
        }
    }
}

/// InputSystem drains SDL2 events and produces GameActions
///
/// # Architecture
///
/// Input processing happens in two parts each frame:
/// 1. `poll_events()` drains the queue (quit, resize)
/// 2. The frame loop samples the mouse state and runs it through a `ClickDebouncer`
pub struct InputSystem;

impl InputSystem {
    pub fn new() -> Self {
        InputSystem
    }

    /// Drain all pending SDL2 events and return the actions they map to
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        event_pump
            .poll_iter()
            .filter_map(|event| self.translate(event))
            .collect()
    }

    fn translate(&self, event: Event) -> Option<GameAction> {
        match event {
            Event::Quit { .. } => Some(GameAction::Quit),
            Event::Window {
                win_event: WindowEvent::SizeChanged(w, h),
                ..
            } => Some(GameAction::Resized(w.max(0) as u32, h.max(0) as u32)),
            _ => {
                // Everything else is irrelevant to a point-and-click board
                None
            }
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Edge detector for the primary pointer button
///
/// One physical press may span many frames. `update()` reports `true` only on
/// the frame the button goes from released to pressed.
#[derive(Debug, Clone, Default)]
pub struct ClickDebouncer {
    held: bool,
}

impl ClickDebouncer {
    pub fn new() -> Self {
        ClickDebouncer { held: false }
    }

    /// Record this frame's button status; returns true on a fresh press
    pub fn update(&mut self, pressed: bool) -> bool {
        let fresh = pressed && !self.held;
        self.held = pressed;
        fresh
    }
}
