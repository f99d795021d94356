//! Round outcomes.

use crate::Hand;

/// Outcome of a round, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Judgement {
    Lose,
    Draw,
    Win,
}

impl Judgement {
    /// Text shown in the result dialog.
    #[must_use]
    pub const fn result(self) -> &'static str {
        match self {
            Judgement::Lose => "負け",
            Judgement::Draw => "引き分け",
            Judgement::Win => "勝ち",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Judgement::Lose => "lose",
            Judgement::Draw => "draw",
            Judgement::Win => "win",
        }
    }
}

/// Judge `player` against `opponent`.
///
/// Equal hands draw. Paper beats rock, rock beats scissors and scissors
/// beats paper; every other pairing loses.
#[must_use]
pub const fn judge(player: Hand, opponent: Hand) -> Judgement {
    match (player, opponent) {
        (Hand::Paper, Hand::Paper) | (Hand::Rock, Hand::Rock) | (Hand::Scissors, Hand::Scissors) => {
            Judgement::Draw
        }
        (Hand::Paper, Hand::Rock) | (Hand::Rock, Hand::Scissors) | (Hand::Scissors, Hand::Paper) => {
            Judgement::Win
        }
        _ => Judgement::Lose,
    }
}

/// Per-session win/lose/draw counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl Tally {
    pub fn record(&mut self, judgement: Judgement) {
        let slot = match judgement {
            Judgement::Win => &mut self.wins,
            Judgement::Lose => &mut self.losses,
            Judgement::Draw => &mut self.draws,
        };
        *slot = slot.saturating_add(1);
    }

    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.wins
            .saturating_add(self.losses)
            .saturating_add(self.draws)
    }
}

#[cfg(test)]
mod tests {
    use super::{Judgement, Tally, judge};
    use crate::Hand;

    #[test]
    fn same_hand_draws() {
        for hand in Hand::ALL {
            assert_eq!(judge(hand, hand), Judgement::Draw);
        }
    }

    #[test]
    fn winning_pairs() {
        assert_eq!(judge(Hand::Paper, Hand::Rock), Judgement::Win);
        assert_eq!(judge(Hand::Rock, Hand::Scissors), Judgement::Win);
        assert_eq!(judge(Hand::Scissors, Hand::Paper), Judgement::Win);
    }

    #[test]
    fn losing_pairs() {
        assert_eq!(judge(Hand::Rock, Hand::Paper), Judgement::Lose);
        assert_eq!(judge(Hand::Scissors, Hand::Rock), Judgement::Lose);
        assert_eq!(judge(Hand::Paper, Hand::Scissors), Judgement::Lose);
    }

    #[test]
    fn judgement_is_antisymmetric() {
        for a in Hand::ALL {
            for b in Hand::ALL {
                if a == b {
                    continue;
                }
                match judge(a, b) {
                    Judgement::Win => assert_eq!(judge(b, a), Judgement::Lose),
                    Judgement::Lose => assert_eq!(judge(b, a), Judgement::Win),
                    Judgement::Draw => panic!("{a} vs {b} must not draw"),
                }
            }
        }
    }

    #[test]
    fn judge_agrees_with_beats() {
        for hand in Hand::ALL {
            assert_eq!(judge(hand, hand.beats()), Judgement::Win);
        }
    }

    #[test]
    fn result_text() {
        assert_eq!(Judgement::Lose.result(), "負け");
        assert_eq!(Judgement::Draw.result(), "引き分け");
        assert_eq!(Judgement::Win.result(), "勝ち");
    }

    #[test]
    fn tally_counts_each_outcome() {
        let mut tally = Tally::default();
        tally.record(Judgement::Win);
        tally.record(Judgement::Win);
        tally.record(Judgement::Draw);
        tally.record(Judgement::Lose);
        assert_eq!(tally.wins, 2);
        assert_eq!(tally.draws, 1);
        assert_eq!(tally.losses, 1);
        assert_eq!(tally.rounds(), 4);
    }
}
