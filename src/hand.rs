//! The five dice of a turn.

use core::fmt;

use rand::Rng;

use crate::die::{FACES, HAND_SIZE, UNSET, is_face};

/// The five dice of the current turn, together with their held flags.
///
/// A freshly created hand is unrolled: every die reads 0 until it is rolled
/// or set manually. Held dice keep their face across rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hand {
    dice: [u8; HAND_SIZE],
    held: [bool; HAND_SIZE],
}

impl Hand {
    /// Creates an unrolled hand with no dice held.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dice: [UNSET; HAND_SIZE],
            held: [false; HAND_SIZE],
        }
    }

    /// Creates a hand from known faces with no dice held.
    ///
    /// Note: This function does not validate the faces. Values outside 1..=6
    /// are accepted but the hand will not count as established, and such
    /// dice score nothing.
    #[must_use]
    pub const fn from_dice(dice: [u8; HAND_SIZE]) -> Self {
        Self {
            dice,
            held: [false; HAND_SIZE],
        }
    }

    /// Returns the die faces.
    #[must_use]
    pub const fn dice(&self) -> [u8; HAND_SIZE] {
        self.dice
    }

    /// Returns the held flags, aligned with [`Hand::dice`].
    #[must_use]
    pub const fn held(&self) -> [bool; HAND_SIZE] {
        self.held
    }

    /// Returns the face of the die at `index`.
    #[must_use]
    pub fn die(&self, index: usize) -> Option<u8> {
        self.dice.get(index).copied()
    }

    /// Returns whether the die at `index` is held.
    #[must_use]
    pub fn is_held(&self, index: usize) -> bool {
        self.held.get(index).copied().unwrap_or(false)
    }

    /// Returns whether every die shows a face, i.e. the hand may be scored.
    #[must_use]
    pub fn is_established(&self) -> bool {
        self.dice.iter().all(|&d| is_face(d))
    }

    /// Returns whether no die has been rolled or set.
    #[must_use]
    pub fn is_unrolled(&self) -> bool {
        self.dice.iter().all(|&d| d == UNSET)
    }

    /// Sum of all faces. Dice that do not show a face count as zero.
    #[must_use]
    pub fn sum(&self) -> u16 {
        self.dice
            .iter()
            .filter(|&&d| is_face(d))
            .map(|&d| u16::from(d))
            .sum()
    }

    /// Number of dice showing each face; index 0 holds the count of ones.
    #[must_use]
    pub fn face_counts(&self) -> [u8; FACES as usize] {
        let mut counts = [0u8; FACES as usize];
        for &d in &self.dice {
            if is_face(d) {
                counts[usize::from(d - 1)] += 1;
            }
        }
        counts
    }

    /// Rerolls every die that is not held.
    pub fn roll<R: Rng>(&mut self, rng: &mut R) {
        for (die, held) in self.dice.iter_mut().zip(self.held) {
            if !held {
                *die = rng.random_range(1..=FACES);
            }
        }
    }

    /// Flips the held flag of the die at `index` and returns the new flag.
    pub fn toggle_hold(&mut self, index: usize) -> Option<bool> {
        let held = self.held.get_mut(index)?;
        *held = !*held;
        Some(*held)
    }

    /// Sets the face of the die at `index`.
    pub fn set_die(&mut self, index: usize, face: u8) -> Option<()> {
        *self.dice.get_mut(index)? = face;
        Some(())
    }

    /// Clears the hand back to unrolled with no dice held.
    pub const fn clear(&mut self) {
        *self = Self::new();
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (&die, held)) in self.dice.iter().zip(self.held).enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match (die, held) {
                (UNSET, _) => f.write_str("-")?,
                (d, true) => write!(f, "[{d}]")?,
                (d, false) => write!(f, "{d}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn roll_keeps_held_dice() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut hand = Hand::from_dice([2, 2, 2, 2, 2]);
        hand.toggle_hold(0);
        hand.toggle_hold(4);

        for _ in 0..20 {
            hand.roll(&mut rng);
            assert_eq!(hand.die(0), Some(2));
            assert_eq!(hand.die(4), Some(2));
            assert!(hand.is_established());
        }
    }

    #[test]
    fn established_requires_every_die() {
        let mut hand = Hand::new();
        assert!(hand.is_unrolled());
        assert!(!hand.is_established());

        hand.set_die(0, 4);
        assert!(!hand.is_unrolled());
        assert!(!hand.is_established());
    }

    #[test]
    fn face_counts_and_display() {
        let mut hand = Hand::from_dice([1, 3, 3, 6, 6]);
        hand.toggle_hold(1);
        assert_eq!(hand.face_counts(), [1, 0, 2, 0, 0, 2]);
        assert_eq!(hand.sum(), 19);
        assert_eq!(hand.to_string(), "1 [3] 3 6 6");
        assert_eq!(Hand::new().to_string(), "- - - - -");
    }

    #[test]
    fn sum_skips_dice_without_a_face() {
        assert_eq!(Hand::from_dice([7, 7, 7, 7, 7]).sum(), 0);
        assert_eq!(Hand::from_dice([0, 2, 9, 4, 0]).sum(), 6);
    }
}
