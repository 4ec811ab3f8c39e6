use leetmetric_engine::validate_username;
use leetmetric_types::InputError;
use proptest::prelude::*;
use proptest::test_runner::Config;

fn outside_alphabet() -> impl Strategy<Value = char> {
    any::<char>().prop_filter("outside [A-Za-z0-9_-]", |c| {
        !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
    })
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn too_short_is_invalid_format(name in "[A-Za-z0-9_-]{1,2}") {
        prop_assert_eq!(validate_username(&name), Err(InputError::InvalidFormat));
    }

    #[test]
    fn too_long_is_invalid_format(name in "[A-Za-z0-9_-]{26,64}") {
        prop_assert_eq!(validate_username(&name), Err(InputError::InvalidFormat));
    }

    #[test]
    fn foreign_character_is_invalid_format(
        head in "[A-Za-z0-9_-]{1,12}",
        bad in outside_alphabet(),
        tail in "[A-Za-z0-9_-]{1,12}"
    ) {
        let raw = format!("{head}{bad}{tail}");
        prop_assert_eq!(validate_username(&raw), Err(InputError::InvalidFormat));
    }

    #[test]
    fn valid_name_comes_back_trimmed_and_case_preserved(
        name in "[A-Za-z0-9_-]{3,25}",
        left in "[ \\t\\r\\n]{0,6}",
        right in "[ \\t\\r\\n]{0,6}"
    ) {
        let raw = format!("{left}{name}{right}");
        let username = validate_username(&raw).expect("valid username");
        prop_assert_eq!(username.as_str(), name.as_str());
    }

    #[test]
    fn blank_input_is_empty(blank in "[ \\t\\r\\n]{0,8}") {
        prop_assert_eq!(validate_username(&blank), Err(InputError::EmptyInput));
    }
}
