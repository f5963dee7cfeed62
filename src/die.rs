//! Die faces and manual adjustments.

/// Number of dice in a hand.
pub const HAND_SIZE: usize = 5;

/// Number of faces on a die.
pub const FACES: u8 = 6;

/// Face value of a die that has not been rolled yet this turn.
pub const UNSET: u8 = 0;

/// A manual change to a single die, used to transcribe a physically rolled hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DieAdjust {
    /// Set the die to an exact face (1..=6).
    Set(u8),
    /// Step the face up or down, wrapping around (6 -> 1 and 1 -> 6).
    ///
    /// Stepping an unset die up lands on 1, stepping it down lands on 6.
    Step(i8),
}

impl DieAdjust {
    /// Applies the adjustment to `face`.
    ///
    /// Returns `None` if the resulting face would be outside 1..=6.
    #[must_use]
    pub const fn apply(self, face: u8) -> Option<u8> {
        match self {
            Self::Set(value) => {
                if is_face(value) {
                    Some(value)
                } else {
                    None
                }
            }
            Self::Step(0) => {
                if is_face(face) {
                    Some(face)
                } else {
                    None
                }
            }
            Self::Step(delta) => {
                let delta = delta as i16;
                let zero_based = if is_face(face) {
                    face as i16 - 1 + delta
                } else if delta > 0 {
                    delta - 1
                } else {
                    delta
                };
                Some(zero_based.rem_euclid(FACES as i16) as u8 + 1)
            }
        }
    }
}

/// Returns whether `value` is a valid die face.
#[must_use]
pub const fn is_face(value: u8) -> bool {
    value >= 1 && value <= FACES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_wraps_in_both_directions() {
        assert_eq!(DieAdjust::Step(1).apply(6), Some(1));
        assert_eq!(DieAdjust::Step(-1).apply(1), Some(6));
        assert_eq!(DieAdjust::Step(2).apply(3), Some(5));
    }

    #[test]
    fn step_from_unset() {
        assert_eq!(DieAdjust::Step(1).apply(UNSET), Some(1));
        assert_eq!(DieAdjust::Step(-1).apply(UNSET), Some(6));
        assert_eq!(DieAdjust::Step(0).apply(UNSET), None);
    }

    #[test]
    fn set_rejects_out_of_range() {
        assert_eq!(DieAdjust::Set(4).apply(UNSET), Some(4));
        assert_eq!(DieAdjust::Set(0).apply(3), None);
        assert_eq!(DieAdjust::Set(7).apply(3), None);
    }
}
