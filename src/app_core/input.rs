//! Terminal-agnostic input event types.
//!
//! The crossterm adapter in the `hsmeta-tiers` binary converts raw events
//! into these before calling the reducer.

/// Key codes the tier list reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppKeyCode {
    Char(char),
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Esc,
}

#[derive(Debug, Clone, Copy)]
pub struct AppKeyEvent {
    pub code: AppKeyCode,
    pub ctrl: bool,
    /// `true` when the key was released (ignored by the reducer).
    pub is_release: bool,
}

impl AppKeyEvent {
    pub fn new(code: AppKeyCode) -> Self {
        Self {
            code,
            ctrl: false,
            is_release: false,
        }
    }
}
