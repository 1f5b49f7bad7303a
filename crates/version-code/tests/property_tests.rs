//! Property-based tests for the encoding invariants.

use proptest::prelude::*;
use version_code::{
    encode, ParsedVersion, PreRelease, HISTORICAL_CODE, HISTORICAL_VERSION, NUMBER_SPAN,
};

/// Known kinds plus arbitrary unknown identifiers.
fn kind() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("alpha".to_string()),
        Just("beta".to_string()),
        Just("rc".to_string()),
        unknown_kind(),
    ]
}

/// Unsaturated pre-release suffix.
fn pre_release() -> impl Strategy<Value = Option<PreRelease>> {
    prop::option::of((kind(), 0..NUMBER_SPAN).prop_map(|(k, n)| PreRelease::new(k.as_str(), n)))
}

/// Different unknown identifiers with the same number share a code even
/// though `Ord` tells them apart.
fn shares_unknown_band(a: &ParsedVersion, b: &ParsedVersion) -> bool {
    match (&a.pre_release, &b.pre_release) {
        (Some(pa), Some(pb)) => {
            a.core() == b.core()
                && !pa.kind.is_known()
                && !pb.kind.is_known()
                && pa.number == pb.number
        }
        _ => false,
    }
}

/// Versions that fit the default scheme.
fn version() -> impl Strategy<Value = ParsedVersion> {
    (0u64..=200, 0u64..=99, 0u64..=99, pre_release()).prop_map(|(major, minor, patch, pre)| {
        ParsedVersion {
            major,
            minor,
            patch,
            pre_release: pre,
        }
    })
}

proptest! {
    #[test]
    fn code_order_matches_version_order(a in version(), b in version()) {
        let ca = encode(&a).unwrap();
        let cb = encode(&b).unwrap();
        if shares_unknown_band(&a, &b) {
            prop_assert_eq!(ca, cb, "{} vs {}", a, b);
        } else {
            prop_assert_eq!(a.cmp(&b), ca.cmp(&cb), "{} vs {}", a, b);
        }
    }

    #[test]
    fn stable_codes_end_in_zero(major in 0u64..=200, minor in 0u64..=99, patch in 0u64..=99) {
        let code = encode(&ParsedVersion::stable(major, minor, patch)).unwrap();
        prop_assert_eq!(code.get() % 10, 0);
    }

    #[test]
    fn encoding_is_deterministic(v in version()) {
        let s = v.to_string();
        let first = encode(&ParsedVersion::parse(&s).unwrap()).unwrap();
        let second = encode(&ParsedVersion::parse(&s).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn large_numbers_saturate(
        (major, minor, patch) in (0u64..=200, 0u64..=99, 0u64..=99),
        k in kind(),
        n in (NUMBER_SPAN - 1)..u64::MAX,
    ) {
        let top = encode(&ParsedVersion::pre(major, minor, patch, k.as_str(), NUMBER_SPAN - 1)).unwrap();
        let over = encode(&ParsedVersion::pre(major, minor, patch, k.as_str(), n)).unwrap();
        prop_assert_eq!(top, over);
    }

    #[test]
    fn unknown_kinds_stay_below_alpha(
        (major, minor, patch) in (0u64..=200, 0u64..=99, 0u64..=99),
        name in unknown_kind(),
        n in any::<u64>(),
    ) {
        let unknown = encode(&ParsedVersion::pre(major, minor, patch, name.as_str(), n)).unwrap();
        let alpha = encode(&ParsedVersion::pre(major, minor, patch, "alpha", 1)).unwrap();
        prop_assert!(unknown < alpha);
    }

    #[test]
    fn later_versions_clear_the_historical_code(v in version()) {
        let historical = ParsedVersion::parse(HISTORICAL_VERSION).unwrap();
        prop_assume!(v > historical);
        prop_assert!(encode(&v).unwrap().get() > HISTORICAL_CODE, "{}", v);
    }
}
