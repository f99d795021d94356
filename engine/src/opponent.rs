//! Opponent hand state and the dialog gate.

use janken_types::Hand;

/// The opponent's current hand.
///
/// Only [`HandScheduler`](crate::HandScheduler) assigns to it; everything else reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpponentState {
    hand: Hand,
    revision: u64,
}

impl OpponentState {
    #[must_use]
    pub const fn new(hand: Hand) -> Self {
        Self { hand, revision: 0 }
    }

    #[must_use]
    pub const fn hand(&self) -> Hand {
        self.hand
    }

    /// Number of assignments so far. Advances even when the draw repeats
    /// the previous hand.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn assign(&mut self, hand: Hand) {
        self.hand = hand;
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for OpponentState {
    fn default() -> Self {
        Self::new(Hand::Rock)
    }
}

/// Whether a result dialog is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DialogFlag {
    open: bool,
}

impl DialogFlag {
    pub const OPEN: Self = Self { open: true };
    pub const CLOSED: Self = Self { open: false };

    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }
}

impl From<bool> for DialogFlag {
    fn from(open: bool) -> Self {
        Self { open }
    }
}
