//! Scorepad configuration options.

/// Configuration options for a scorepad.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use yzpad::ScorepadOptions;
///
/// let options = ScorepadOptions::default()
///     .with_series(true)
///     .with_manual_dice(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScorepadOptions {
    /// Rolls granted at the start of every turn.
    pub rolls_per_turn: u8,
    /// Upper-section sum needed for the bonus.
    pub upper_bonus_threshold: u16,
    /// Bonus points awarded once the threshold is reached.
    pub upper_bonus: u16,
    /// Whether grand totals accumulate across rounds.
    pub series: bool,
    /// Whether dice may be set by hand instead of rolled.
    pub manual_dice: bool,
}

impl Default for ScorepadOptions {
    fn default() -> Self {
        Self {
            rolls_per_turn: 3,
            upper_bonus_threshold: 63,
            upper_bonus: 35,
            series: false,
            manual_dice: false,
        }
    }
}

impl ScorepadOptions {
    /// Sets the number of rolls per turn. Zero is raised to one, since a turn
    /// without a roll could never be scored.
    ///
    /// # Example
    ///
    /// ```
    /// use yzpad::ScorepadOptions;
    ///
    /// let options = ScorepadOptions::default().with_rolls_per_turn(4);
    /// assert_eq!(options.rolls_per_turn, 4);
    /// assert_eq!(options.with_rolls_per_turn(0).rolls_per_turn, 1);
    /// ```
    #[must_use]
    pub const fn with_rolls_per_turn(mut self, rolls: u8) -> Self {
        self.rolls_per_turn = if rolls == 0 { 1 } else { rolls };
        self
    }

    /// Sets the upper-section sum needed for the bonus.
    ///
    /// # Example
    ///
    /// ```
    /// use yzpad::ScorepadOptions;
    ///
    /// let options = ScorepadOptions::default().with_upper_bonus_threshold(60);
    /// assert_eq!(options.upper_bonus_threshold, 60);
    /// ```
    #[must_use]
    pub const fn with_upper_bonus_threshold(mut self, threshold: u16) -> Self {
        self.upper_bonus_threshold = threshold;
        self
    }

    /// Sets the upper-section bonus.
    ///
    /// # Example
    ///
    /// ```
    /// use yzpad::ScorepadOptions;
    ///
    /// let options = ScorepadOptions::default().with_upper_bonus(50);
    /// assert_eq!(options.upper_bonus, 50);
    /// ```
    #[must_use]
    pub const fn with_upper_bonus(mut self, bonus: u16) -> Self {
        self.upper_bonus = bonus;
        self
    }

    /// Sets whether grand totals accumulate across rounds.
    ///
    /// # Example
    ///
    /// ```
    /// use yzpad::ScorepadOptions;
    ///
    /// let options = ScorepadOptions::default().with_series(true);
    /// assert!(options.series);
    /// ```
    #[must_use]
    pub const fn with_series(mut self, enabled: bool) -> Self {
        self.series = enabled;
        self
    }

    /// Sets whether dice may be set by hand.
    ///
    /// # Example
    ///
    /// ```
    /// use yzpad::ScorepadOptions;
    ///
    /// let options = ScorepadOptions::default().with_manual_dice(true);
    /// assert!(options.manual_dice);
    /// ```
    #[must_use]
    pub const fn with_manual_dice(mut self, enabled: bool) -> Self {
        self.manual_dice = enabled;
        self
    }
}
