//! Category scoring for a five-die hand.
//!
//! Scoring is pure: it never looks at the scoresheet, only at the dice. The
//! rules follow the house scorepad, where five of a kind also counts as a
//! full house.

use crate::category::Category;
use crate::error::CategoryParseError;
use crate::hand::Hand;

/// Points for a full house.
pub const FULL_HOUSE: u16 = 25;
/// Points for a small straight.
pub const SMALL_STRAIGHT: u16 = 30;
/// Points for a large straight.
pub const LARGE_STRAIGHT: u16 = 40;
/// Points for a yahtzee.
pub const YAHTZEE: u16 = 50;

/// Bit mask of the faces present in `counts` (bit 0 = ones).
fn face_mask(counts: &[u8; 6]) -> u8 {
    counts
        .iter()
        .enumerate()
        .filter(|&(_, &n)| n > 0)
        .fold(0, |mask, (i, _)| mask | (1 << i))
}

/// Returns whether `mask` contains `run` consecutive faces.
fn has_run(mask: u8, run: u32) -> bool {
    let window = (1u8 << run) - 1;
    (0..=(6 - run)).any(|shift| mask & (window << shift) == window << shift)
}

/// Scores `hand` in `category`.
///
/// The hand is assumed to be established (all five dice showing a face);
/// dice that do not show a face contribute nothing.
///
/// # Example
///
/// ```
/// use yzpad::{Category, Hand, score};
///
/// let hand = Hand::from_dice([5, 5, 5, 5, 5]);
/// assert_eq!(score(Category::Yahtzee, &hand), 50);
/// assert_eq!(score(Category::FullHouse, &hand), 25);
/// ```
#[must_use]
pub fn score(category: Category, hand: &Hand) -> u16 {
    let counts = hand.face_counts();
    let sum = hand.sum();
    let max_count = counts.iter().copied().max().unwrap_or(0);

    match category {
        Category::Ones
        | Category::Twos
        | Category::Threes
        | Category::Fours
        | Category::Fives
        | Category::Sixes => category.face().map_or(0, |face| {
            u16::from(counts[usize::from(face - 1)]) * u16::from(face)
        }),
        Category::ThreeOfAKind => {
            if max_count >= 3 {
                sum
            } else {
                0
            }
        }
        Category::FourOfAKind => {
            if max_count >= 4 {
                sum
            } else {
                0
            }
        }
        Category::FullHouse => {
            let pair_and_triple = counts.contains(&3) && counts.contains(&2);
            if pair_and_triple || counts.contains(&5) {
                FULL_HOUSE
            } else {
                0
            }
        }
        Category::SmallStraight => {
            if has_run(face_mask(&counts), 4) {
                SMALL_STRAIGHT
            } else {
                0
            }
        }
        Category::LargeStraight => {
            if has_run(face_mask(&counts), 5) {
                LARGE_STRAIGHT
            } else {
                0
            }
        }
        Category::Yahtzee => {
            if counts.contains(&5) {
                YAHTZEE
            } else {
                0
            }
        }
        Category::Chance => sum,
    }
}

/// Scores `hand` in the category named by `key` (e.g. `"smallStraight"`).
///
/// # Errors
///
/// Returns an error if `key` does not name a scorable category.
pub fn score_key(key: &str, hand: &Hand) -> Result<u16, CategoryParseError> {
    let category = key.parse::<Category>()?;
    Ok(score(category, hand))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(category: Category, dice: [u8; 5]) -> u16 {
        score(category, &Hand::from_dice(dice))
    }

    #[test]
    fn upper_section_counts_matching_faces() {
        assert_eq!(s(Category::Ones, [1, 1, 2, 3, 1]), 3);
        assert_eq!(s(Category::Fours, [4, 4, 2, 3, 1]), 8);
        assert_eq!(s(Category::Sixes, [1, 2, 3, 4, 5]), 0);
        assert_eq!(s(Category::Sixes, [6, 6, 6, 6, 6]), 30);
    }

    #[test]
    fn of_a_kind_sums_all_dice() {
        assert_eq!(s(Category::ThreeOfAKind, [3, 3, 3, 2, 6]), 17);
        assert_eq!(s(Category::ThreeOfAKind, [3, 3, 2, 2, 6]), 0);
        assert_eq!(s(Category::FourOfAKind, [5, 5, 5, 5, 1]), 21);
        assert_eq!(s(Category::FourOfAKind, [5, 5, 5, 1, 1]), 0);
        assert_eq!(s(Category::FourOfAKind, [2, 2, 2, 2, 2]), 10);
    }

    #[test]
    fn full_house_accepts_five_of_a_kind() {
        assert_eq!(s(Category::FullHouse, [2, 2, 3, 3, 3]), 25);
        assert_eq!(s(Category::FullHouse, [5, 5, 5, 5, 5]), 25);
        assert_eq!(s(Category::FullHouse, [2, 2, 3, 3, 4]), 0);
        assert_eq!(s(Category::FullHouse, [2, 3, 3, 3, 3]), 0);
    }

    #[test]
    fn straights() {
        assert_eq!(s(Category::SmallStraight, [1, 2, 3, 4, 6]), 30);
        assert_eq!(s(Category::SmallStraight, [6, 5, 4, 3, 3]), 30);
        assert_eq!(s(Category::SmallStraight, [1, 2, 3, 4, 5]), 30);
        assert_eq!(s(Category::SmallStraight, [1, 2, 3, 5, 6]), 0);
        assert_eq!(s(Category::LargeStraight, [1, 2, 3, 4, 5]), 40);
        assert_eq!(s(Category::LargeStraight, [6, 2, 5, 3, 4]), 40);
        assert_eq!(s(Category::LargeStraight, [1, 2, 3, 4, 6]), 0);
    }

    #[test]
    fn yahtzee_and_chance() {
        assert_eq!(s(Category::Yahtzee, [5, 5, 5, 5, 5]), 50);
        assert_eq!(s(Category::Yahtzee, [5, 5, 5, 5, 4]), 0);
        assert_eq!(s(Category::Chance, [6, 6, 6, 6, 6]), 30);
        assert_eq!(s(Category::Chance, [1, 2, 1, 2, 1]), 7);
    }

    #[test]
    fn every_hand_scores_within_bounds() {
        for n in 0..7776u32 {
            let mut dice = [0u8; 5];
            let mut rest = n;
            for d in &mut dice {
                *d = (rest % 6) as u8 + 1;
                rest /= 6;
            }
            let hand = Hand::from_dice(dice);
            for category in Category::ALL {
                assert!(score(category, &hand) <= 50, "{category} {dice:?}");
            }
        }
    }

    #[test]
    fn impossible_faces_score_nothing() {
        let hand = Hand::from_dice([7, 7, 7, 7, 7]);
        for category in Category::ALL {
            assert_eq!(score(category, &hand), 0, "{category}");
        }
        assert_eq!(s(Category::Chance, [6, 6, 0, 8, 1]), 13);
    }

    #[test]
    fn score_by_key() {
        let hand = Hand::from_dice([1, 2, 3, 4, 5]);
        assert_eq!(score_key("largeStraight", &hand), Ok(40));
        assert_eq!(
            score_key("bonus", &hand),
            Err(CategoryParseError::UnknownCategory)
        );
    }
}
