//! Hand pictures for the opponent panel.

use janken_engine::{Hand, UiOptions};

pub(crate) const ART_HEIGHT: u16 = 6;

const ROCK: [&str; 6] = [
    "    _______   ",
    "---'   ____)  ",
    "      (_____) ",
    "      (_____) ",
    "      (____)  ",
    "---.__(___)   ",
];

const PAPER: [&str; 6] = [
    "    _______        ",
    "---'   ____)____   ",
    "          ______)  ",
    "          _______) ",
    "         _______)  ",
    "---.__________)    ",
];

const SCISSORS: [&str; 6] = [
    "    _______        ",
    "---'   ____)____   ",
    "          ______)  ",
    "       __________) ",
    "      (____)       ",
    "---.__(___)        ",
];

const ROCK_UNICODE: [&str; 6] = [
    "    ╭───────╮  ",
    "────╯   ╭───┤  ",
    "       ╭┴────┤ ",
    "       ├─────┤ ",
    "       ├────╯  ",
    "────╮  ╰───╯   ",
];

const PAPER_UNICODE: [&str; 6] = [
    "    ╭───────╮        ",
    "────╯   ╭───┴─────╮  ",
    "        ╰─────────┤  ",
    "        ╭──────────┤ ",
    "        ╰─────────┤  ",
    "────╮  ╶─────────╯   ",
];

const SCISSORS_UNICODE: [&str; 6] = [
    "    ╭───────╮        ",
    "────╯   ╭───┴─────╮  ",
    "        ╰─────────┤  ",
    "        ╭──────────╯ ",
    "       ╭┴────╮       ",
    "────╮  ╰────╯        ",
];

/// Picture of `hand`; box-drawing strokes unless `ascii_only` is set.
#[must_use]
pub(crate) fn hand_art(hand: Hand, options: UiOptions) -> &'static [&'static str] {
    match (hand, options.ascii_only) {
        (Hand::Rock, true) => &ROCK,
        (Hand::Paper, true) => &PAPER,
        (Hand::Scissors, true) => &SCISSORS,
        (Hand::Rock, false) => &ROCK_UNICODE,
        (Hand::Paper, false) => &PAPER_UNICODE,
        (Hand::Scissors, false) => &SCISSORS_UNICODE,
    }
}

#[cfg(test)]
mod tests {
    use janken_engine::{Hand, UiOptions};

    use super::{ART_HEIGHT, hand_art};

    const ASCII: UiOptions = UiOptions {
        ascii_only: true,
        high_contrast: false,
        reduced_motion: false,
    };

    #[test]
    fn every_hand_has_distinct_art() {
        for options in [ASCII, UiOptions::default()] {
            let arts: Vec<_> = Hand::ALL
                .iter()
                .map(|hand| hand_art(*hand, options))
                .collect();
            assert_ne!(arts[0], arts[1]);
            assert_ne!(arts[1], arts[2]);
            assert_ne!(arts[0], arts[2]);
            for art in arts {
                assert_eq!(art.len(), usize::from(ART_HEIGHT));
            }
        }
    }

    #[test]
    fn ascii_only_selects_plain_art() {
        for hand in Hand::ALL {
            assert!(hand_art(hand, ASCII).iter().all(|line| line.is_ascii()));
            assert!(
                hand_art(hand, UiOptions::default())
                    .iter()
                    .any(|line| !line.is_ascii())
            );
        }
    }

    #[test]
    fn rows_within_a_picture_share_a_width() {
        for options in [ASCII, UiOptions::default()] {
            for hand in Hand::ALL {
                let art = hand_art(hand, options);
                let width = art[0].chars().count();
                assert!(art.iter().all(|line| line.chars().count() == width));
            }
        }
    }
}
