//! Tier list state: flattened rows plus the table selection.

use crate::meta::{self, RankedDeck, Tier};
use crate::theme::ThemeConfig;
use ratatui::widgets::TableState;

/// One visual row of the tier table.
#[derive(Debug, Clone, PartialEq)]
pub enum TierRow {
    Header(Tier),
    Deck(RankedDeck),
}

impl TierRow {
    pub fn is_deck(&self) -> bool {
        matches!(self, TierRow::Deck(_))
    }
}

pub struct AppState {
    /// Tier headers interleaved with their decks, best tier first
    pub rows: Vec<TierRow>,
    /// Selection state managed by ratatui; always points at a deck row
    pub table_state: TableState,
    pub theme: ThemeConfig,
    /// Summary of the top deck, if any deck was ranked
    pub headline: Option<String>,
    /// Aggregation timestamp reported by HSReplay
    pub as_of: String,
    /// Rows visible in the table on the last render, used for paging
    pub page_size: usize,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(decks: Vec<RankedDeck>, as_of: String, theme: ThemeConfig) -> Self {
        let headline = meta::headline(&decks);
        let rows = flatten_tiers(&decks);

        let mut app = Self {
            rows,
            table_state: TableState::default(),
            theme,
            headline,
            as_of,
            page_size: 10,
            should_quit: false,
        };
        app.select_first();
        app
    }

    pub fn deck_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_deck()).count()
    }

    pub fn selected_deck(&self) -> Option<&RankedDeck> {
        match self.rows.get(self.table_state.selected()?) {
            Some(TierRow::Deck(deck)) => Some(deck),
            _ => None,
        }
    }

    pub fn select_first(&mut self) {
        let first = self.rows.iter().position(TierRow::is_deck);
        self.table_state.select(first);
    }

    pub fn select_last(&mut self) {
        let last = self.rows.iter().rposition(TierRow::is_deck);
        self.table_state.select(last);
    }

    /// Moves by `delta` deck rows, skipping tier headers and clamping at both ends.
    pub fn move_selection(&mut self, delta: i32) {
        let deck_rows: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.is_deck())
            .map(|(idx, _)| idx)
            .collect();
        if deck_rows.is_empty() {
            self.table_state.select(None);
            return;
        }

        let current = self
            .table_state
            .selected()
            .and_then(|selected| deck_rows.iter().position(|&idx| idx == selected))
            .unwrap_or(0);
        let target = (current as i64 + delta as i64).clamp(0, deck_rows.len() as i64 - 1);
        self.table_state.select(Some(deck_rows[target as usize]));
    }
}

/// Tier header followed by its decks, for every non-empty tier.
pub fn flatten_tiers(decks: &[RankedDeck]) -> Vec<TierRow> {
    let mut rows = Vec::with_capacity(decks.len() + Tier::ALL.len());
    for (tier, members) in meta::group_into_tiers(decks) {
        rows.push(TierRow::Header(tier));
        rows.extend(members.into_iter().cloned().map(TierRow::Deck));
    }
    rows
}
