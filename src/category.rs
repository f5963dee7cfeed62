//! Scorable categories and scoresheet rows.

use core::fmt;
use core::str::FromStr;

use crate::error::CategoryParseError;

/// One of the thirteen categories a player fills during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Sum of ones.
    Ones,
    /// Sum of twos.
    Twos,
    /// Sum of threes.
    Threes,
    /// Sum of fours.
    Fours,
    /// Sum of fives.
    Fives,
    /// Sum of sixes.
    Sixes,
    /// Sum of all dice with at least three of one face.
    ThreeOfAKind,
    /// Sum of all dice with at least four of one face.
    FourOfAKind,
    /// Three of one face and two of another (or five of a kind).
    FullHouse,
    /// Four consecutive faces.
    SmallStraight,
    /// Five consecutive faces.
    LargeStraight,
    /// Five of one face.
    Yahtzee,
    /// Sum of all dice.
    Chance,
}

impl Category {
    /// Number of scorable categories.
    pub const COUNT: usize = 13;

    /// All categories in scoresheet order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Ones,
        Self::Twos,
        Self::Threes,
        Self::Fours,
        Self::Fives,
        Self::Sixes,
        Self::ThreeOfAKind,
        Self::FourOfAKind,
        Self::FullHouse,
        Self::SmallStraight,
        Self::LargeStraight,
        Self::Yahtzee,
        Self::Chance,
    ];

    /// The six upper-section categories.
    pub const UPPER: [Self; 6] = [
        Self::Ones,
        Self::Twos,
        Self::Threes,
        Self::Fours,
        Self::Fives,
        Self::Sixes,
    ];

    /// The seven lower-section categories.
    pub const LOWER: [Self; 7] = [
        Self::ThreeOfAKind,
        Self::FourOfAKind,
        Self::FullHouse,
        Self::SmallStraight,
        Self::LargeStraight,
        Self::Yahtzee,
        Self::Chance,
    ];

    /// Position of the category in [`Category::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns whether the category belongs to the upper section.
    #[must_use]
    pub const fn is_upper(self) -> bool {
        self.face().is_some()
    }

    /// The counted face for an upper-section category.
    #[must_use]
    pub const fn face(self) -> Option<u8> {
        match self {
            Self::Ones => Some(1),
            Self::Twos => Some(2),
            Self::Threes => Some(3),
            Self::Fours => Some(4),
            Self::Fives => Some(5),
            Self::Sixes => Some(6),
            _ => None,
        }
    }

    /// Stable string key, e.g. `"threeOfAKind"`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Ones => "ones",
            Self::Twos => "twos",
            Self::Threes => "threes",
            Self::Fours => "fours",
            Self::Fives => "fives",
            Self::Sixes => "sixes",
            Self::ThreeOfAKind => "threeOfAKind",
            Self::FourOfAKind => "fourOfAKind",
            Self::FullHouse => "fullHouse",
            Self::SmallStraight => "smallStraight",
            Self::LargeStraight => "largeStraight",
            Self::Yahtzee => "yahtzee",
            Self::Chance => "chance",
        }
    }

    /// Human-readable label as printed on the scoresheet.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ones => "Ones",
            Self::Twos => "Twos",
            Self::Threes => "Threes",
            Self::Fours => "Fours",
            Self::Fives => "Fives",
            Self::Sixes => "Sixes",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::FourOfAKind => "Four of a Kind",
            Self::FullHouse => "Full House",
            Self::SmallStraight => "Sm. Straight",
            Self::LargeStraight => "Lg. Straight",
            Self::Yahtzee => "Yahtzee",
            Self::Chance => "Chance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or(CategoryParseError::UnknownCategory)
    }
}

/// A row of the printed scoresheet: a scorable category or a computed total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Row {
    /// A scorable category.
    Category(Category),
    /// Sum of the upper section.
    Subtotal,
    /// Upper-section bonus.
    Bonus,
    /// Subtotal plus bonus.
    UpperTotal,
    /// Sum of the lower section.
    LowerTotal,
    /// Upper total plus lower total.
    GrandTotal,
    /// Grand totals of earlier rounds plus the current grand total.
    SeriesTotal,
}

impl Row {
    /// Every row in printed order.
    pub const ALL: [Self; 19] = [
        Self::Category(Category::Ones),
        Self::Category(Category::Twos),
        Self::Category(Category::Threes),
        Self::Category(Category::Fours),
        Self::Category(Category::Fives),
        Self::Category(Category::Sixes),
        Self::Subtotal,
        Self::Bonus,
        Self::UpperTotal,
        Self::Category(Category::ThreeOfAKind),
        Self::Category(Category::FourOfAKind),
        Self::Category(Category::FullHouse),
        Self::Category(Category::SmallStraight),
        Self::Category(Category::LargeStraight),
        Self::Category(Category::Yahtzee),
        Self::Category(Category::Chance),
        Self::LowerTotal,
        Self::GrandTotal,
        Self::SeriesTotal,
    ];

    /// Returns whether the row is computed rather than selected by a player.
    #[must_use]
    pub const fn is_computed(self) -> bool {
        !matches!(self, Self::Category(_))
    }

    /// Returns whether the row is printed as an emphasised total.
    #[must_use]
    pub const fn is_header(self) -> bool {
        matches!(self, Self::UpperTotal | Self::GrandTotal | Self::SeriesTotal)
    }

    /// Stable string key, e.g. `"grandTotal"`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Category(c) => c.key(),
            Self::Subtotal => "subtotal",
            Self::Bonus => "bonus",
            Self::UpperTotal => "upperTotal",
            Self::LowerTotal => "lowerTotal",
            Self::GrandTotal => "grandTotal",
            Self::SeriesTotal => "seriesTotal",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Category(c) => c.label(),
            Self::Subtotal => "Sum",
            Self::Bonus => "Bonus",
            Self::UpperTotal => "Upper Total",
            Self::LowerTotal => "Lower Total",
            Self::GrandTotal => "GRAND TOTAL",
            Self::SeriesTotal => "SERIES TOTAL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.key().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn unknown_and_computed_keys_are_rejected() {
        assert_eq!(
            "grandTotal".parse::<Category>(),
            Err(CategoryParseError::UnknownCategory)
        );
        assert_eq!(
            "FullHouse".parse::<Category>(),
            Err(CategoryParseError::UnknownCategory)
        );
    }

    #[test]
    fn sections_partition_all_categories() {
        assert!(Category::UPPER.iter().all(|c| c.is_upper()));
        assert!(Category::LOWER.iter().all(|c| !c.is_upper()));
        assert_eq!(
            Category::UPPER.len() + Category::LOWER.len(),
            Category::COUNT
        );
        for (i, c) in Category::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn rows_list_each_category_once() {
        let scorable = Row::ALL.iter().filter(|r| !r.is_computed()).count();
        assert_eq!(scorable, Category::COUNT);
        assert_eq!(Row::ALL.last().map(|r| r.label()), Some("SERIES TOTAL"));
    }
}
