//! App version comparison.
//!
//! Versions are dot-separated numeric parts. Parts are compared numerically,
//! missing parts count as 0 and non-numeric parts are coerced to 0, so
//! "1.14.0", "1.14" and "01.014.00000" all compare equal. An absent version
//! never compares: every comparator returns false when either side is `None`.

use std::cmp::Ordering;

/// Digits of one version part without leading zeros; missing and
/// non-numeric parts are 0 (the empty digit string)
fn part_digits(part: Option<&str>) -> &str {
    match part.map(str::trim) {
        Some(p) if !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()) => {
            p.trim_start_matches('0')
        }
        _ => "",
    }
}

/// Numeric ordering of two digit strings of any length
fn compare_digits(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Part-by-part ordering of two present versions
fn compare(current: &str, other: &str) -> Ordering {
    let current_parts: Vec<&str> = current.split('.').collect();
    let other_parts: Vec<&str> = other.split('.').collect();
    let len = current_parts.len().max(other_parts.len());

    for i in 0..len {
        let c = part_digits(current_parts.get(i).copied());
        let o = part_digits(other_parts.get(i).copied());
        match compare_digits(c, o) {
            Ordering::Equal => continue,
            decided => return decided,
        }
    }

    Ordering::Equal
}

fn matches(current: Option<&str>, other: Option<&str>, expected: Ordering) -> bool {
    match (current, other) {
        (Some(current), Some(other)) => compare(current, other) == expected,
        _ => false,
    }
}

/// True when both versions are present and numerically equal part by part
pub fn are_app_versions_equal(current: Option<&str>, other: Option<&str>) -> bool {
    matches(current, other, Ordering::Equal)
}

/// True when both versions are present and `current` is strictly greater
pub fn is_current_app_version_greater_than_app_version(
    current: Option<&str>,
    other: Option<&str>,
) -> bool {
    matches(current, other, Ordering::Greater)
}

/// True when both versions are present and `current` is strictly lower
pub fn is_current_app_version_lower_than_app_version(
    current: Option<&str>,
    other: Option<&str>,
) -> bool {
    matches(current, other, Ordering::Less)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "0", "1", "1.0", "1.14", "1.14.0", "1.14.5", "1.2.10", "2.0.0", "2.13.10", "2.14.5",
        "10.0", "01.014.00000", "abc", "1.x.3", "18446744073709551616",
    ];

    #[test]
    fn test_equal_ignores_padding_and_leading_zeros() {
        assert!(are_app_versions_equal(Some("1.14.0"), Some("1.14")));
        assert!(are_app_versions_equal(Some("1.14"), Some("01.014.00000")));
        assert!(are_app_versions_equal(Some("001.000014.05"), Some("01.014.00005")));
        assert!(!are_app_versions_equal(Some("1.14.1"), Some("1.14")));
    }

    #[test]
    fn test_lower_and_greater_scenarios() {
        assert!(is_current_app_version_lower_than_app_version(Some("1.14.5"), Some("2.0.0")));
        assert!(!is_current_app_version_greater_than_app_version(Some("1.14.5"), Some("2.0.0")));
        assert!(is_current_app_version_greater_than_app_version(Some("2.14.5"), Some("2.13.10")));
        assert!(!is_current_app_version_lower_than_app_version(Some("2.14.5"), Some("2.13.10")));
        assert!(is_current_app_version_greater_than_app_version(Some("1.2.10"), Some("1.2.9")));
    }

    #[test]
    fn test_absent_versions_never_compare() {
        for v in [None, Some("1.0.0")] {
            assert!(!are_app_versions_equal(None, v));
            assert!(!are_app_versions_equal(v, None));
            assert!(!is_current_app_version_greater_than_app_version(None, v));
            assert!(!is_current_app_version_greater_than_app_version(v, None));
            assert!(!is_current_app_version_lower_than_app_version(None, v));
            assert!(!is_current_app_version_lower_than_app_version(v, None));
        }
    }

    #[test]
    fn test_malformed_parts_are_zero() {
        assert!(are_app_versions_equal(Some("abc"), Some("0")));
        assert!(are_app_versions_equal(Some("1.x.3"), Some("1.0.3")));
        assert!(are_app_versions_equal(Some(""), Some("0.0")));
        assert!(is_current_app_version_lower_than_app_version(Some("1.beta"), Some("1.1")));
    }

    #[test]
    fn test_oversized_parts_keep_their_magnitude() {
        let huge = Some("18446744073709551616.0");
        assert!(is_current_app_version_greater_than_app_version(huge, Some("1.0")));
        assert!(!is_current_app_version_lower_than_app_version(huge, Some("1.0")));
        assert!(!are_app_versions_equal(huge, Some("0")));
        assert!(are_app_versions_equal(huge, Some("000018446744073709551616")));
        assert!(is_current_app_version_greater_than_app_version(
            Some("1.99999999999999999999"),
            Some("1.5")
        ));
        assert!(is_current_app_version_lower_than_app_version(
            Some("2.99999999999999999998"),
            Some("2.99999999999999999999")
        ));
    }

    #[test]
    fn test_self_is_neither_greater_nor_lower() {
        for &v in SAMPLES {
            assert!(are_app_versions_equal(Some(v), Some(v)), "{} == {}", v, v);
            assert!(!is_current_app_version_greater_than_app_version(Some(v), Some(v)));
            assert!(!is_current_app_version_lower_than_app_version(Some(v), Some(v)));
        }
    }

    #[test]
    fn test_antisymmetry() {
        for &a in SAMPLES {
            for &b in SAMPLES {
                let (a, b) = (Some(a), Some(b));
                let greater = is_current_app_version_greater_than_app_version(a, b);
                let lower = is_current_app_version_lower_than_app_version(a, b);
                let equal = are_app_versions_equal(a, b);

                assert_eq!(
                    [greater, lower, equal].iter().filter(|x| **x).count(),
                    1,
                    "exactly one relation must hold for {:?} vs {:?}",
                    a,
                    b
                );
                assert_eq!(greater, is_current_app_version_lower_than_app_version(b, a));
                assert_eq!(lower, is_current_app_version_greater_than_app_version(b, a));
            }
        }
    }
}
