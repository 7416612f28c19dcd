use proptest::prelude::*;

use metadata_json_lint::version_range::{VersionRange, is_open_ended};

fn version() -> impl Strategy<Value = (u64, u64, u64)> {
    (0u64..50, 0u64..50, 0u64..50)
}

proptest! {
    #[test]
    fn test_lower_bound_only_is_open_ended((major, minor, patch) in version()) {
        let expr = format!(">= {major}.{minor}.{patch}");
        prop_assert_eq!(is_open_ended(&expr).unwrap(), true);

        let expr = format!("> {major}.{minor}.{patch}");
        prop_assert_eq!(is_open_ended(&expr).unwrap(), true);
    }

    #[test]
    fn test_lower_and_upper_bound_is_bounded(
        (major, minor, patch) in version(),
        bump in 1u64..10,
    ) {
        let expr = format!(">= {major}.{minor}.{patch} < {}.0.0", major + bump);
        prop_assert_eq!(is_open_ended(&expr).unwrap(), false);
    }

    #[test]
    fn test_tilde_and_caret_are_bounded((major, minor, patch) in version()) {
        for op in ["~", "^", "~>"] {
            let expr = format!("{op}{major}.{minor}.{patch}");
            prop_assert_eq!(is_open_ended(&expr).unwrap(), false, "{}", expr);
        }
    }

    #[test]
    fn test_union_with_open_alternative_is_open_ended(
        (major, minor, _) in version(),
        later in 50u64..100,
    ) {
        let expr = format!("{major}.{minor}.x || >= {later}.0.0");
        prop_assert_eq!(is_open_ended(&expr).unwrap(), true);
    }

    #[test]
    fn test_parse_never_panics(input in ".*") {
        let _ = VersionRange::parse(&input);
    }

    #[test]
    fn test_parse_range_like_input_never_panics(
        input in "[<>=~^ |0-9.x*-]{0,40}",
    ) {
        let _ = VersionRange::parse(&input);
    }
}
