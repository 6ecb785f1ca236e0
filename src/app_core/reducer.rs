//! Key handling for the tier list.

use crate::app_core::input::{AppKeyCode, AppKeyEvent};
use crate::app_core::state::AppState;

/// Handle a terminal-agnostic key event, mutating `app` in place.
pub fn handle_key_event(app: &mut AppState, event: AppKeyEvent) {
    if event.is_release {
        return;
    }

    match event.code {
        AppKeyCode::Char('q') | AppKeyCode::Esc => app.should_quit = true,
        AppKeyCode::Char('c') if event.ctrl => app.should_quit = true,
        AppKeyCode::Up | AppKeyCode::Char('k') => app.move_selection(-1),
        AppKeyCode::Down | AppKeyCode::Char('j') => app.move_selection(1),
        AppKeyCode::Home | AppKeyCode::Char('g') => app.select_first(),
        AppKeyCode::End | AppKeyCode::Char('G') => app.select_last(),
        AppKeyCode::PageUp => app.move_selection(-(app.page_size.max(1) as i32)),
        AppKeyCode::PageDown => app.move_selection(app.page_size.max(1) as i32),
        _ => {}
    }
}
