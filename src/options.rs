//! Game configuration options.

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack_state::GameOptions;
///
/// let options = GameOptions::default().with_decks(6).with_hand_capacity(8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of decks combined into the shoe on each shuffle.
    pub decks: u8,
    /// Capacity reserved for each hand when it is dealt.
    pub hand_capacity: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 3,
            hand_capacity: 5,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_state::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the capacity hint for newly dealt hands.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_state::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_capacity(8);
    /// assert_eq!(options.hand_capacity, 8);
    /// ```
    #[must_use]
    pub const fn with_hand_capacity(mut self, capacity: usize) -> Self {
        self.hand_capacity = capacity;
        self
    }
}
