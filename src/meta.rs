//! Deck ranking: joins deck stats with archetypes and buckets them into tiers.

use std::cmp::Ordering;
use std::fmt;

use crate::fetch::HSREPLAY_BASE_URL;
use crate::model::{Archetype, DeckPopularityStats, DeckStats};

/// Tier buckets, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    T1,
    T2,
    T3,
    T4,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::T1, Tier::T2, Tier::T3, Tier::T4];

    /// Lowest whole win-rate percentage that still qualifies for this tier.
    pub fn floor(self) -> i64 {
        match self {
            Tier::T1 => 55,
            Tier::T2 => 50,
            Tier::T3 => 45,
            Tier::T4 => 0,
        }
    }

    /// Only the integer part of the rate is compared, so 54.9 is still T2.
    pub fn from_win_rate(win_rate: f64) -> Self {
        if win_rate.is_nan() {
            return Tier::T4;
        }
        let whole = win_rate.trunc() as i64;
        Tier::ALL
            .into_iter()
            .find(|tier| whole >= tier.floor())
            .unwrap_or(Tier::T4)
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::T1 => "Tier 1",
            Tier::T2 => "Tier 2",
            Tier::T3 => "Tier 3",
            Tier::T4 => "Tier 4",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let short = match self {
            Tier::T1 => "T1",
            Tier::T2 => "T2",
            Tier::T3 => "T3",
            Tier::T4 => "T4",
        };
        f.write_str(short)
    }
}

/// Coarse grading of a win rate, used for colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinRateBand {
    Strong,
    Fair,
    Weak,
}

impl WinRateBand {
    pub fn from_win_rate(win_rate: f64) -> Self {
        if win_rate.is_nan() {
            return WinRateBand::Weak;
        }
        let whole = win_rate.trunc() as i64;
        if whole > 50 {
            WinRateBand::Strong
        } else if whole > 40 {
            WinRateBand::Fair
        } else {
            WinRateBand::Weak
        }
    }
}

/// Deck stats paired with the archetype they describe.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedDeck {
    pub stats: DeckStats,
    pub archetype: Archetype,
}

impl RankedDeck {
    pub fn win_rate(&self) -> f64 {
        self.stats.win_rate
    }

    pub fn tier(&self) -> Tier {
        Tier::from_win_rate(self.stats.win_rate)
    }

    pub fn band(&self) -> WinRateBand {
        WinRateBand::from_win_rate(self.stats.win_rate)
    }

    /// Absolute link to the archetype page on hsreplay.net.
    pub fn hsreplay_url(&self) -> String {
        format!("{}{}", HSREPLAY_BASE_URL, self.archetype.url)
    }
}

/// Flattens the per-class lists in metadata class order.
pub fn combine_decks(stats: &DeckPopularityStats) -> Vec<DeckStats> {
    stats
        .series
        .metadata
        .keys()
        .filter_map(|class| stats.series.data.get(class))
        .flat_map(|decks| decks.iter().cloned())
        .collect()
}

/// Decks with no matching archetype are dropped.
pub fn attach_archetypes(decks: Vec<DeckStats>, archetypes: &[Archetype]) -> Vec<RankedDeck> {
    let by_id: foldhash::HashMap<i64, &Archetype> =
        archetypes.iter().map(|archetype| (archetype.id, archetype)).collect();

    decks
        .into_iter()
        .filter_map(|stats| {
            let archetype = by_id.get(&stats.archetype_id)?;
            Some(RankedDeck {
                stats,
                archetype: (*archetype).clone(),
            })
        })
        .collect()
}

/// Highest win rate first. Ties keep their input order; NaN goes last.
pub fn sort_by_win_rate(decks: &mut [RankedDeck]) {
    decks.sort_by(|a, b| match (a.win_rate().is_nan(), b.win_rate().is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.win_rate().total_cmp(&a.win_rate()),
    });
}

pub fn rank_decks(stats: &DeckPopularityStats, archetypes: &[Archetype]) -> Vec<RankedDeck> {
    let mut decks = attach_archetypes(combine_decks(stats), archetypes);
    sort_by_win_rate(&mut decks);
    decks
}

/// Groups decks by tier, T1 first. Empty tiers are left out.
pub fn group_into_tiers(decks: &[RankedDeck]) -> Vec<(Tier, Vec<&RankedDeck>)> {
    Tier::ALL
        .into_iter()
        .filter_map(|tier| {
            let members: Vec<&RankedDeck> =
                decks.iter().filter(|deck| deck.tier() == tier).collect();
            (!members.is_empty()).then_some((tier, members))
        })
        .collect()
}

/// One-sentence summary of the best deck.
pub fn headline(decks: &[RankedDeck]) -> Option<String> {
    let top = decks.first()?;
    Some(format!(
        "Currently the best performing deck is {} with a win rate of {}%",
        top.archetype.name,
        top.win_rate()
    ))
}
