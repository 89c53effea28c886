//! Skill name validation.
//!
//! A name is accepted when, with every hyphen removed, it is non-empty and
//! made only of alphanumeric characters, and the name as given (hyphens
//! included) is already lowercase. Letters and digits are judged in the
//! Unicode sense, so `café` and `技能` pass. There is no length limit and no
//! rule about where hyphens may appear.

use crate::error::InitError;

/// Validate a proposed skill name.
pub fn validate_name(name: &str) -> Result<(), InitError> {
    let stripped: String = name.chars().filter(|&c| c != '-').collect();

    let alphanumeric = !stripped.is_empty() && stripped.chars().all(char::is_alphanumeric);
    let lowercase = name == name.to_lowercase();

    if alphanumeric && lowercase {
        Ok(())
    } else {
        Err(InitError::InvalidName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn is_invalid(name: &str) -> bool {
        matches!(validate_name(name), Err(InitError::InvalidName(n)) if n == name)
    }

    #[test]
    fn accepts_simple_names() {
        for name in ["pdf-export", "dup", "a", "v2", "123", "my-skill-2"] {
            assert!(validate_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn hyphen_placement_is_not_checked() {
        for name in ["-lead", "trail-", "double--hyphen"] {
            assert!(validate_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_empty_and_hyphen_only() {
        assert!(is_invalid(""));
        assert!(is_invalid("-"));
        assert!(is_invalid("---"));
    }

    #[test]
    fn rejects_uppercase_and_symbols() {
        assert!(is_invalid("Bad_Name"));
        assert!(is_invalid("MySkill"));
        assert!(is_invalid("my_skill"));
        assert!(is_invalid("my skill"));
        assert!(is_invalid("my.skill"));
        assert!(is_invalid("../escape"));
        assert!(is_invalid("a/b"));
    }

    #[test]
    fn unicode_letters() {
        assert!(validate_name("caf\u{00e9}").is_ok());
        assert!(validate_name("\u{6280}\u{80fd}").is_ok());
        assert!(is_invalid("\u{041d}\u{0410}\u{0412}\u{042b}\u{041a}"));
    }

    #[test]
    fn error_message_names_the_input() {
        let err = validate_name("Bad_Name").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Name 'Bad_Name' must be lowercase alphanumeric with hyphens."
        );
    }

    proptest! {
        #[test]
        fn prop_lowercase_digits_and_hyphens_are_accepted(name in "[a-z0-9-]{0,12}[a-z0-9][a-z0-9-]{0,12}") {
            prop_assert!(validate_name(&name).is_ok());
        }

        #[test]
        fn prop_any_uppercase_fails(prefix in "[a-z0-9_-]{0,8}", upper in "[A-Z]", suffix in "[a-zA-Z0-9_-]{0,8}") {
            let name = format!("{prefix}{upper}{suffix}");
            prop_assert!(is_invalid(&name));
        }

        #[test]
        fn prop_other_symbols_fail(prefix in "[a-z0-9-]{0,8}", symbol in "[_./ !@#$%^&*()+=~]", suffix in "[a-z0-9-]{0,8}") {
            let name = format!("{prefix}{symbol}{suffix}");
            prop_assert!(is_invalid(&name));
        }
    }
}
