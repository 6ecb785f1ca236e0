use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app_core::state::{AppState, TierRow};
use crate::meta::RankedDeck;

/// Main UI entry point that renders the entire application layout.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Tier table
            Constraint::Length(3), // Headline + selected deck link
        ])
        .split(f.area());

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background)),
        f.area(),
    );

    render_tier_table(f, app, chunks[0]);
    render_footer(f, app, chunks[1]);
}

fn render_tier_table(f: &mut Frame, app: &mut AppState, area: Rect) {
    let theme = &app.theme;
    let title = format!(
        " Hearthstone meta · {} decks · as of {} ",
        app.deck_count(),
        app.as_of
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(Span::styled(title, theme.title));

    // Borders plus the column header row.
    app.page_size = area.height.saturating_sub(3).max(1) as usize;

    if app.rows.is_empty() {
        let empty = Paragraph::new("No ranked decks")
            .style(theme.muted)
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = app
        .rows
        .iter()
        .map(|row| match row {
            TierRow::Header(tier) => Row::new(vec![Cell::from(tier.label())]).style(theme.tier_header),
            TierRow::Deck(deck) => Row::new(vec![
                Cell::from(class_label(&deck.archetype.player_class_name)),
                Cell::from(deck.archetype.name.clone()),
                Cell::from(Span::styled(
                    format_win_rate(deck.win_rate()),
                    theme.band_style(deck.band()),
                )),
                Cell::from(Span::styled(deck.stats.total_games.to_string(), theme.muted)),
            ])
            .style(theme.text),
        })
        .collect();

    let header = Row::new(vec!["Class", "Deck", "Win rate", "Games"]).style(theme.title);

    let table = Table::new(
        rows,
        [
            Constraint::Length(13),
            Constraint::Min(16),
            Constraint::Length(9),
            Constraint::Length(9),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(theme.row_selected)
    .highlight_symbol("▶ ");

    f.render_stateful_widget(table, area, &mut app.table_state);
}

fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = &app.theme;
    let width = area.width as usize;

    let headline = app.headline.as_deref().unwrap_or("No deck data available");
    let link = app
        .selected_deck()
        .map(RankedDeck::hsreplay_url)
        .unwrap_or_default();

    let lines = vec![
        Line::from(Span::styled(truncate_to_width(headline, width), theme.text)),
        Line::from(Span::styled(truncate_to_width(&link, width), theme.muted)),
    ];

    let footer = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(theme.border),
    );
    f.render_widget(footer, area);
}

/// "DEMONHUNTER" -> "Demon Hunter", "MAGE" -> "Mage".
pub fn class_label(player_class_name: &str) -> String {
    if player_class_name.eq_ignore_ascii_case("DEMONHUNTER") {
        return "Demon Hunter".to_string();
    }
    let lower = player_class_name.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn format_win_rate(win_rate: f64) -> String {
    if win_rate.is_nan() {
        "n/a".to_string()
    } else {
        format!("{:.1}%", win_rate)
    }
}

/// Cuts `text` to at most `max_width` display columns, ending in "…" when shortened.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::RankedDeck;
    use crate::model::{Archetype, DeckStats};
    use crate::theme;
    use ratatui::{Terminal, backend::TestBackend};

    fn make_deck(id: i64, name: &str, class: &str, win_rate: f64) -> RankedDeck {
        RankedDeck {
            stats: DeckStats {
                archetype_id: id,
                total_games: 4321,
                pct_of_class: 12.0,
                pct_of_total: 1.5,
                win_rate,
            },
            archetype: Archetype {
                id,
                name: name.to_string(),
                player_class: 0,
                player_class_name: class.to_string(),
                url: format!("/archetypes/{}/", id),
                standard_ccp_signature_core: None,
                wild_ccp_signature_core: None,
            },
        }
    }

    fn render_to_string(app: &mut AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_class_label() {
        assert_eq!(class_label("DEMONHUNTER"), "Demon Hunter");
        assert_eq!(class_label("WARLOCK"), "Warlock");
        assert_eq!(class_label(""), "");
    }

    #[test]
    fn test_format_win_rate() {
        assert_eq!(format_win_rate(53.456), "53.5%");
        assert_eq!(format_win_rate(f64::NAN), "n/a");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefgh", 5), "abcd…");
        assert_eq!(truncate_to_width("🦀🦀🦀", 4), "🦀…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_renders_tiers_and_footer() {
        let decks = vec![
            make_deck(1, "Pirate Warrior", "WARRIOR", 56.2),
            make_deck(2, "Big Shaman", "SHAMAN", 47.0),
        ];
        let mut app = AppState::new(decks, "2024-05-01".to_string(), theme::hsreplay_theme());

        let screen = render_to_string(&mut app, 80, 14);

        assert!(screen.contains("Tier 1"));
        assert!(screen.contains("Tier 3"));
        assert!(!screen.contains("Tier 2"));
        assert!(screen.contains("Pirate Warrior"));
        assert!(screen.contains("56.2%"));
        assert!(screen.contains("as of 2024-05-01"));
        assert!(screen.contains("https://hsreplay.net/archetypes/1/"));
        assert_eq!(app.page_size, 8);
    }

    #[test]
    fn test_renders_empty_state() {
        let mut app = AppState::new(Vec::new(), "now".to_string(), theme::hsreplay_theme());
        let screen = render_to_string(&mut app, 60, 10);
        assert!(screen.contains("No ranked decks"));
        assert!(screen.contains("No deck data available"));
    }
}
