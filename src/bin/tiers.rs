//! # hsmeta-tiers
//!
//! Terminal tier list of the current HSReplay ranked meta.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use hsmeta::app_core::input::{AppKeyCode, AppKeyEvent};
use hsmeta::app_core::reducer;
use hsmeta::app_core::state::AppState;
use hsmeta::fetch::Fetcher;
use hsmeta::{logging, meta, model, theme, ui};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

fn crossterm_to_app_key_event(
    code: KeyCode,
    modifiers: KeyModifiers,
    kind: KeyEventKind,
) -> Option<AppKeyEvent> {
    if matches!(kind, KeyEventKind::Release) {
        return None;
    }

    let key_code = match code {
        KeyCode::Char(c) => AppKeyCode::Char(c),
        KeyCode::Up => AppKeyCode::Up,
        KeyCode::Down => AppKeyCode::Down,
        KeyCode::Home => AppKeyCode::Home,
        KeyCode::End => AppKeyCode::End,
        KeyCode::PageUp => AppKeyCode::PageUp,
        KeyCode::PageDown => AppKeyCode::PageDown,
        KeyCode::Esc => AppKeyCode::Esc,
        _ => return None,
    };

    Some(AppKeyEvent {
        code: key_code,
        ctrl: modifiers.contains(KeyModifiers::CONTROL),
        is_release: false,
    })
}

fn load_app() -> Result<AppState> {
    let fetcher = Fetcher::new()?;
    let payloads = fetcher.fetch_all()?;

    let archetypes = model::parse_archetypes(&payloads.archetypes)?;
    let stats = model::parse_deck_popularity_stats(&payloads.deck_popularity_stats)?;
    let decks = meta::rank_decks(&stats, &archetypes);
    tracing::debug!(
        archetypes = archetypes.len(),
        ranked = decks.len(),
        as_of = %stats.as_of,
        "meta ranked"
    );

    Ok(AppState::new(decks, stats.as_of, theme::hsreplay_theme()))
}

fn main() -> Result<()> {
    logging::init();

    // Fetch before touching the terminal so failures print normally.
    let mut app = load_app()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    terminal.draw(|f| ui::ui(f, app))?;

    while !app.should_quit {
        match event::read()? {
            Event::Key(key) => {
                if let Some(event) = crossterm_to_app_key_event(key.code, key.modifiers, key.kind) {
                    reducer::handle_key_event(app, event);
                }
                terminal.draw(|f| ui::ui(f, app))?;
            }
            Event::Resize(_, _) => {
                terminal.draw(|f| ui::ui(f, app))?;
            }
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_events_dropped() {
        assert!(
            crossterm_to_app_key_event(KeyCode::Char('q'), KeyModifiers::NONE, KeyEventKind::Release)
                .is_none()
        );
    }

    #[test]
    fn test_ctrl_modifier_carried() {
        let event =
            crossterm_to_app_key_event(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press)
                .unwrap();
        assert_eq!(event.code, AppKeyCode::Char('c'));
        assert!(event.ctrl);
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        assert!(crossterm_to_app_key_event(KeyCode::Tab, KeyModifiers::NONE, KeyEventKind::Press).is_none());
    }
}
