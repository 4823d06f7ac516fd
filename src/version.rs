//! Version string normalization.

use tracing::debug;

/// Normalize a raw version string.
///
/// Absent and whitespace-only values become `None`. Anything else is kept
/// exactly as given, surrounding whitespace included.
///
/// - `None` -> `None`
/// - `"  "` -> `None`
/// - `"6.1.11"` -> `Some("6.1.11")`
pub(crate) fn normalize(raw: Option<&str>) -> Option<String> {
    match raw {
        Some(value) if !value.trim().is_empty() => Some(value.to_string()),
        _ => None,
    }
}

/// Strip a pre-release or build qualifier from a driver version.
///
/// The version is cut at the first `-`, unless that hyphen is the first
/// character, in which case the input is returned unchanged.
///
/// - `5.10.0-alpha01` -> `5.10.0`
/// - `5.10.0` -> `5.10.0`
/// - `-beta` -> `-beta`
pub(crate) fn strip_qualifier(version: &str) -> &str {
    match version.find('-') {
        Some(idx) if idx > 0 => {
            debug!(version, stripped = &version[..idx], "Stripped driver version qualifier");
            &version[..idx]
        }
        _ => version,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_absent() {
        assert_eq!(normalize(None), None);
    }

    #[test]
    fn test_normalize_blank() {
        assert_eq!(normalize(Some("")), None);
        assert_eq!(normalize(Some("   ")), None);
        assert_eq!(normalize(Some("\t\n")), None);
    }

    #[test]
    fn test_normalize_keeps_value_untrimmed() {
        assert_eq!(normalize(Some("6.1.11")), Some("6.1.11".to_string()));
        assert_eq!(normalize(Some(" 6.1.11 ")), Some(" 6.1.11 ".to_string()));
    }

    #[test]
    fn test_strip_qualifier_prerelease() {
        assert_eq!(strip_qualifier("5.10.0-alpha01"), "5.10.0");
    }

    #[test]
    fn test_strip_qualifier_first_hyphen_only() {
        assert_eq!(strip_qualifier("5.10.0-rc1-SNAPSHOT"), "5.10.0");
    }

    #[test]
    fn test_strip_qualifier_no_hyphen() {
        assert_eq!(strip_qualifier("5.10.0"), "5.10.0");
    }

    #[test]
    fn test_strip_qualifier_leading_hyphen() {
        assert_eq!(strip_qualifier("-beta"), "-beta");
    }
}
