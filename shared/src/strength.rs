use serde::Serialize;
use strum::Display;

use crate::validation::pwd_validation::{has_digit, has_uppercase};

pub const MAX_STRENGTH_SCORE: u8 = 4;

/// Length must exceed this to earn a point. Stricter than the minimum
/// length a valid password needs (6 characters).
const LENGTH_BONUS_ABOVE: usize = 6;

/// Password robustness in `0..=4`, one point per satisfied heuristic.
#[derive(Serialize, Debug, Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct StrengthScore(u8);

#[derive(Serialize, Display, Debug, Copy, Clone, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StrengthBand {
    Weak,
    Medium,
    Strong,
}

impl StrengthScore {
    #[must_use]
    pub fn of(password: &str) -> Self {
        let heuristics = [
            password.chars().count() > LENGTH_BONUS_ABOVE,
            has_uppercase(password),
            has_digit(password),
            has_symbol(password),
        ];

        Self(heuristics.into_iter().map(u8::from).sum())
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn band(self) -> StrengthBand {
        match self.0 {
            0 | 1 => StrengthBand::Weak,
            2 => StrengthBand::Medium,
            _ => StrengthBand::Strong,
        }
    }

    /// Width of the strength bar in percent.
    #[must_use]
    pub const fn fill_percent(self) -> u8 {
        self.0 * 25
    }
}

/// Band to show for `password`, `None` while the password is empty.
#[must_use]
pub fn strength_indicator(password: &str) -> Option<StrengthBand> {
    (!password.is_empty()).then(|| StrengthScore::of(password).band())
}

fn has_symbol(v: &str) -> bool {
    v.chars().any(|c| !c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod test {
    use super::{strength_indicator, StrengthBand, StrengthScore, MAX_STRENGTH_SCORE};
    use pretty_assertions::assert_eq;

    fn score(pwd: &str) -> u8 {
        StrengthScore::of(pwd).value()
    }

    #[test]
    fn test_scores() {
        assert_eq!(score(""), 0);
        assert_eq!(score("Ab1"), 2);
        assert_eq!(score("Abcdefg1"), 3);
        assert_eq!(score("abcdefg"), 1);
        assert_eq!(score("Abcdefg1!"), MAX_STRENGTH_SCORE);
        assert_eq!(score("!"), 1);
    }

    #[test]
    fn test_score_is_idempotent() {
        for pwd in ["", "Ab1", "abcdefg", "Abcdefg1!", "\u{f1}x"] {
            assert_eq!(StrengthScore::of(pwd), StrengthScore::of(pwd));
        }
    }

    #[test]
    fn test_length_bonus_is_strictly_above_six() {
        // six characters is enough to be valid but earns no length point
        assert_eq!(score("abcdef"), 0);
        assert_eq!(score("abcdefg"), 1);
    }

    #[test]
    fn test_non_ascii_counts_as_symbol() {
        assert_eq!(score("\u{f1}"), 1);
    }

    #[test]
    fn test_bands() {
        assert_eq!(StrengthScore::of("abcdefg").band(), StrengthBand::Weak);
        assert_eq!(StrengthScore::of("Ab1").band(), StrengthBand::Medium);
        assert_eq!(StrengthScore::of("Abcdefg1").band(), StrengthBand::Strong);
        assert_eq!(StrengthScore::of("Abcdefg1!").band(), StrengthBand::Strong);
        assert_eq!(StrengthScore::of("").band(), StrengthBand::Weak);
    }

    #[test]
    fn test_band_labels() {
        assert_eq!(StrengthBand::Weak.to_string(), "weak");
        assert_eq!(StrengthBand::Medium.to_string(), "medium");
        assert_eq!(StrengthBand::Strong.to_string(), "strong");
    }

    #[test]
    fn test_indicator_suppressed_when_empty() {
        assert_eq!(strength_indicator(""), None);
        assert_eq!(strength_indicator("a"), Some(StrengthBand::Weak));
    }

    #[test]
    fn test_fill_percent() {
        assert_eq!(StrengthScore::of("").fill_percent(), 0);
        assert_eq!(StrengthScore::of("Ab1").fill_percent(), 50);
        assert_eq!(StrengthScore::of("Abcdefg1!").fill_percent(), 100);
    }
}
