//! A player's scoresheet for one round.

use crate::category::Category;
use crate::options::ScorepadOptions;
use crate::result::Totals;

/// Scores for the thirteen categories of one round.
///
/// An entry is `None` until the category is scored, and once set it cannot
/// be overwritten until the sheet is cleared for a new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Scoresheet {
    entries: [Option<u16>; Category::COUNT],
}

impl Scoresheet {
    /// Creates an empty scoresheet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: [None; Category::COUNT],
        }
    }

    /// Returns the score for `category`, if it has been played.
    #[must_use]
    pub const fn get(&self, category: Category) -> Option<u16> {
        self.entries[category.index()]
    }

    /// Returns whether `category` has been played.
    #[must_use]
    pub const fn is_set(&self, category: Category) -> bool {
        self.get(category).is_some()
    }

    /// Writes `points` into `category`.
    ///
    /// Returns `false` without changing anything if the category was already
    /// scored.
    pub const fn set(&mut self, category: Category, points: u16) -> bool {
        let entry = &mut self.entries[category.index()];
        if entry.is_some() {
            return false;
        }
        *entry = Some(points);
        true
    }

    /// Returns whether every category has been played.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(Option::is_some)
    }

    /// Categories still open this round, in scoresheet order.
    pub fn open_categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|&c| !self.is_set(c))
    }

    /// Number of categories played.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Clears every entry for a new round.
    pub const fn clear(&mut self) {
        *self = Self::new();
    }

    fn section_sum(&self, section: &[Category]) -> u32 {
        section
            .iter()
            .filter_map(|&c| self.get(c))
            .map(u32::from)
            .sum()
    }

    /// Computes the derived totals. Unplayed categories count as zero.
    ///
    /// `series_base` is the sum of grand totals from earlier rounds; pass
    /// `None` when series accumulation is disabled.
    #[must_use]
    pub fn totals(&self, options: &ScorepadOptions, series_base: Option<u32>) -> Totals {
        let subtotal = self.section_sum(&Category::UPPER);
        let bonus = if subtotal >= u32::from(options.upper_bonus_threshold) {
            u32::from(options.upper_bonus)
        } else {
            0
        };
        let upper_total = subtotal + bonus;
        let lower_total = self.section_sum(&Category::LOWER);
        let grand_total = upper_total + lower_total;

        Totals {
            subtotal,
            bonus,
            upper_total,
            lower_total,
            grand_total,
            series_total: series_base.map(|base| base + grand_total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(scores: &[(Category, u16)]) -> Scoresheet {
        let mut sheet = Scoresheet::new();
        for &(category, points) in scores {
            assert!(sheet.set(category, points));
        }
        sheet
    }

    #[test]
    fn entries_are_write_once() {
        let mut sheet = Scoresheet::new();
        assert!(sheet.set(Category::Chance, 22));
        assert!(!sheet.set(Category::Chance, 5));
        assert_eq!(sheet.get(Category::Chance), Some(22));
        assert_eq!(sheet.filled(), 1);
    }

    #[test]
    fn bonus_at_threshold() {
        let options = ScorepadOptions::default();
        let below = sheet(&[(Category::Sixes, 30), (Category::Fives, 25), (Category::Fours, 7)]);
        let totals = below.totals(&options, None);
        assert_eq!(totals.subtotal, 62);
        assert_eq!(totals.bonus, 0);

        let at = sheet(&[(Category::Sixes, 30), (Category::Fives, 25), (Category::Fours, 8)]);
        let totals = at.totals(&options, None);
        assert_eq!(totals.subtotal, 63);
        assert_eq!(totals.bonus, 35);
        assert_eq!(totals.upper_total, 98);
    }

    #[test]
    fn totals_split_sections() {
        let options = ScorepadOptions::default();
        let sheet = sheet(&[
            (Category::Twos, 6),
            (Category::FullHouse, 25),
            (Category::Chance, 17),
        ]);
        let totals = sheet.totals(&options, Some(200));
        assert_eq!(totals.upper_total, 6);
        assert_eq!(totals.lower_total, 42);
        assert_eq!(totals.grand_total, 48);
        assert_eq!(totals.series_total, Some(248));
        assert_eq!(sheet.totals(&options, Some(200)), totals);
    }

    #[test]
    fn open_categories_shrink_to_empty() {
        let mut sheet = Scoresheet::new();
        assert_eq!(sheet.open_categories().count(), Category::COUNT);
        for category in Category::ALL {
            assert!(!sheet.is_complete());
            sheet.set(category, 0);
        }
        assert!(sheet.is_complete());
        assert_eq!(sheet.open_categories().next(), None);

        sheet.clear();
        assert_eq!(sheet.filled(), 0);
    }
}
