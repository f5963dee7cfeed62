//! Players at the table.

use alloc::string::String;

use crate::options::ScorepadOptions;
use crate::result::Totals;
use crate::scoresheet::Scoresheet;

/// A player: a display name, the current round's scoresheet, and the series
/// carried over from earlier rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    sheet: Scoresheet,
    series: u32,
    rounds_completed: u32,
}

impl Player {
    /// Creates a player with an empty scoresheet.
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            name,
            sheet: Scoresheet::new(),
            series: 0,
            rounds_completed: 0,
        }
    }

    /// Returns the player's name. Names are not required to be unique.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the scoresheet for the current round.
    #[must_use]
    pub const fn scoresheet(&self) -> &Scoresheet {
        &self.sheet
    }

    pub(crate) const fn scoresheet_mut(&mut self) -> &mut Scoresheet {
        &mut self.sheet
    }

    /// Sum of the grand totals of rounds folded into the series.
    #[must_use]
    pub const fn series(&self) -> u32 {
        self.series
    }

    /// Number of finished rounds folded into the series.
    #[must_use]
    pub const fn rounds_completed(&self) -> u32 {
        self.rounds_completed
    }

    /// Computes the derived totals for the current round.
    #[must_use]
    pub fn totals(&self, options: &ScorepadOptions) -> Totals {
        let base = options.series.then_some(self.series);
        self.sheet.totals(options, base)
    }

    /// Folds the finished round into the series (if enabled) and clears the
    /// scoresheet.
    pub(crate) fn finish_round(&mut self, options: &ScorepadOptions) {
        if options.series {
            self.series += self.totals(options).grand_total;
            self.rounds_completed += 1;
        }
        self.sheet.clear();
    }
}
