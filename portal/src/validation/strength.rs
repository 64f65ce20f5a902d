//! Additive password strength meter shown next to the password field.

/// Label for each meter level, indexed by the number of satisfied criteria.
const LABELS: [&str; 6] = ["", "Very Weak", "Weak", "Fair", "Good", "Strong"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordStrength {
    pub level: u8,
    pub label: &'static str,
}

/// Score a password by counting satisfied criteria: minimum length,
/// a lowercase letter, an uppercase letter, a digit, and a special
/// character. Empty input scores zero with a blank label so the meter
/// stays hidden until the user types.
pub fn score(password: &str) -> PasswordStrength {
    if password.is_empty() {
        return PasswordStrength {
            level: 0,
            label: LABELS[0],
        };
    }

    let mut level = 0u8;
    if password.chars().count() >= 8 {
        level += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        level += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        level += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        level += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        level += 1;
    }

    PasswordStrength {
        level,
        label: LABELS[level as usize],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_password_hides_the_meter() {
        let strength = score("");
        assert_eq!(strength.level, 0);
        assert_eq!(strength.label, "");
    }

    #[test]
    fn single_criterion_is_very_weak() {
        assert_eq!(score("a").label, "Very Weak");
        assert_eq!(score("7").label, "Very Weak");
    }

    #[test]
    fn each_criterion_adds_one_level() {
        assert_eq!(score("aaaa").level, 1);
        assert_eq!(score("aaaA").level, 2);
        assert_eq!(score("aaA1").level, 3);
        assert_eq!(score("aaaaaaA1").level, 4);
        assert_eq!(score("aaaaaaA1!").level, 5);
    }

    #[test]
    fn labels_track_levels() {
        assert_eq!(score("aaaaaaaa").label, "Weak");
        assert_eq!(score("aaaaaaaA").label, "Fair");
        assert_eq!(score("aaaaaaA1").label, "Good");
        assert_eq!(score("aaaaaA1!").label, "Strong");
        assert_eq!(score("Aa1!aaaa"), PasswordStrength { level: 5, label: "Strong" });
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Eight characters even though the first is multibyte.
        assert_eq!(score("ábcdefgh").level, 3);
    }

    #[test]
    fn non_ascii_counts_as_special() {
        assert_eq!(score("é").level, 1);
        assert_eq!(score("aé").level, 2);
    }

    proptest! {
        #[test]
        fn level_stays_in_range_and_label_matches(password in ".{0,64}") {
            let strength = score(&password);
            prop_assert!(strength.level <= 5);
            prop_assert_eq!(strength.label, LABELS[strength.level as usize]);
        }

        #[test]
        fn nonempty_passwords_score_at_least_one(password in ".{1,64}") {
            prop_assert!(score(&password).level >= 1);
        }
    }
}
