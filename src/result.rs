//! Result types returned by scorepad transitions and queries.

use crate::category::Category;

/// Outcome of a successful category selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreAssigned {
    /// The player who scored.
    pub player_index: usize,
    /// The category that was filled.
    pub category: Category,
    /// Points written into the category.
    pub points: u16,
    /// Whether this selection finished the round.
    pub round_over: bool,
    /// The player to move next (`None` once the round is over).
    pub next_player: Option<usize>,
}

/// Totals derived from a scoresheet.
///
/// These are never stored; they are computed from the scored categories each
/// time they are requested, so they cannot drift from the entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    /// Sum of Ones through Sixes.
    pub subtotal: u32,
    /// Upper-section bonus (0 until the threshold is reached).
    pub bonus: u32,
    /// Subtotal plus bonus.
    pub upper_total: u32,
    /// Sum of Three of a Kind through Chance.
    pub lower_total: u32,
    /// Upper total plus lower total.
    pub grand_total: u32,
    /// Earlier rounds' grand totals plus this one, when series are enabled.
    pub series_total: Option<u32>,
}
