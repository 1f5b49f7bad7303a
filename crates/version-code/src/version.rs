//! Version strings and their parsed form.
//!
//! Accepts `[v]MAJOR.MINOR.PATCH[-KIND[.NUMBER]]`, for example `v1.2.3`,
//! `1.2.3-beta.4` or `v2.0.0-rc1`.
//!
//! # Examples
//!
//! ```
//! use version_code::{ParsedVersion, PreReleaseKind};
//!
//! let v = ParsedVersion::parse("v1.1.0-alpha.2").unwrap();
//! assert_eq!(v.core(), (1, 1, 0));
//! assert_eq!(v.pre_release.as_ref().map(|p| &p.kind), Some(&PreReleaseKind::Alpha));
//!
//! let stable = ParsedVersion::parse("1.1.0").unwrap();
//! assert!(stable > v);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

static VERSION_RE: OnceLock<Regex> = OnceLock::new();
static SUFFIX_RE: OnceLock<Regex> = OnceLock::new();

const VERSION_EXPRESSION: &str = r"^[vV]?(\d+)\.(\d+)\.(\d+)(?:-(\S+))?$";
const SUFFIX_EXPRESSION: &str = r"^([A-Za-z]+)\.?(\d+)?$";

fn cached<'a>(once_lock: &'a OnceLock<Regex>, pattern: &str) -> &'a Regex {
    once_lock.get_or_init(|| Regex::new(pattern).expect("Invalid regex pattern"))
}

/// Pre-release label.
///
/// The set is open: any identifier that is not `alpha`, `beta` or `rc`
/// is kept as [`PreReleaseKind::Other`] and ranks below all known kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreReleaseKind {
    /// Any unrecognized identifier.
    Other(String),
    /// `alpha`
    Alpha,
    /// `beta`
    Beta,
    /// `rc`
    Rc,
}

impl PreReleaseKind {
    /// Priority used for ordering and encoding. Stable releases sit above
    /// every kind at [`STABLE_RANK`](crate::scheme::STABLE_RANK).
    pub const fn rank(&self) -> u64 {
        match self {
            PreReleaseKind::Other(_) => 0,
            PreReleaseKind::Alpha => 1,
            PreReleaseKind::Beta => 2,
            PreReleaseKind::Rc => 3,
        }
    }

    /// Identifier as it appears in a version string.
    pub fn as_str(&self) -> &str {
        match self {
            PreReleaseKind::Other(name) => name,
            PreReleaseKind::Alpha => "alpha",
            PreReleaseKind::Beta => "beta",
            PreReleaseKind::Rc => "rc",
        }
    }

    /// Returns `true` unless the kind is [`PreReleaseKind::Other`].
    pub fn is_known(&self) -> bool {
        !matches!(self, PreReleaseKind::Other(_))
    }
}

impl From<&str> for PreReleaseKind {
    // Matching is exact: `Alpha` or `RC` are unknown kinds.
    fn from(s: &str) -> Self {
        match s {
            "alpha" => PreReleaseKind::Alpha,
            "beta" => PreReleaseKind::Beta,
            "rc" => PreReleaseKind::Rc,
            other => PreReleaseKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for PreReleaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialOrd for PreReleaseKind {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PreReleaseKind {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (PreReleaseKind::Other(a), PreReleaseKind::Other(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Pre-release suffix: a kind plus its number (`beta.2`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PreRelease {
    /// Label.
    pub kind: PreReleaseKind,
    /// Defaults to 1 when the suffix has no number. An explicit `0` is
    /// kept as written and orders below `.1` of the same kind.
    pub number: u64,
}

impl PreRelease {
    /// Build a pre-release suffix from a kind identifier and number.
    pub fn new(kind: impl Into<PreReleaseKind>, number: u64) -> Self {
        PreRelease {
            kind: kind.into(),
            number,
        }
    }
}

impl PartialOrd for PreRelease {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PreRelease {
    /// Rank first, then number. Two different unknown identifiers only
    /// fall back to comparing their text when rank and number tie, which
    /// keeps the order total.
    ///
    /// That text tie-break is finer than the encoding: `zeta.1` and
    /// `alef.1` compare unequal but share one code, as saturated numbers
    /// do.
    fn cmp(&self, other: &Self) -> Ordering {
        self.kind
            .rank()
            .cmp(&other.kind.rank())
            .then(self.number.cmp(&other.number))
            .then_with(|| self.kind.cmp(&other.kind))
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.kind, self.number)
    }
}

/// A version string split into its fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedVersion {
    /// Major version number
    pub major: u64,
    /// Minor version number
    pub minor: u64,
    /// Patch version number
    pub patch: u64,
    /// `None` for a stable release.
    pub pre_release: Option<PreRelease>,
}

impl ParsedVersion {
    /// A stable version.
    pub const fn stable(major: u64, minor: u64, patch: u64) -> Self {
        ParsedVersion {
            major,
            minor,
            patch,
            pre_release: None,
        }
    }

    /// A pre-release version.
    pub fn pre(
        major: u64,
        minor: u64,
        patch: u64,
        kind: impl Into<PreReleaseKind>,
        number: u64,
    ) -> Self {
        ParsedVersion {
            major,
            minor,
            patch,
            pre_release: Some(PreRelease::new(kind, number)),
        }
    }

    /// Parse a version string.
    ///
    /// # Errors
    ///
    /// * [`Error::Format`] if `input` does not match
    ///   `[v]MAJOR.MINOR.PATCH[-KIND[.NUMBER]]`
    /// * [`Error::Range`] if major, minor or patch does not fit in a `u64`
    ///
    /// A pre-release number too large for a `u64` saturates instead of
    /// failing.
    ///
    /// # Examples
    ///
    /// ```
    /// use version_code::ParsedVersion;
    ///
    /// let v = ParsedVersion::parse("v2.0.0-rc").unwrap();
    /// assert_eq!(v.pre_release.unwrap().number, 1);
    ///
    /// assert!(ParsedVersion::parse("2.0").unwrap_err().is_format());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(Error::format(input, "empty version"));
        }

        let Some(caps) = cached(&VERSION_RE, VERSION_EXPRESSION).captures(input) else {
            tracing::debug!("Rejected version string: {:?}", input);
            return Err(Error::format(
                input,
                "expected [v]MAJOR.MINOR.PATCH[-KIND[.NUMBER]]",
            ));
        };

        let component = |idx: usize, field: &'static str| -> Result<u64> {
            let digits = &caps[idx];
            digits
                .parse::<u64>()
                .map_err(|_| Error::range(field, digits, u64::MAX))
        };

        let major = component(1, "major")?;
        let minor = component(2, "minor")?;
        let patch = component(3, "patch")?;

        let pre_release = caps.get(4).map(|suffix| parse_suffix(suffix.as_str()));

        let version = ParsedVersion {
            major,
            minor,
            patch,
            pre_release,
        };
        tracing::trace!("Parsed {:?} as {}", input, version);
        Ok(version)
    }

    /// `(major, minor, patch)`.
    pub fn core(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }

    /// Returns `true` when there is no pre-release suffix.
    pub fn is_stable(&self) -> bool {
        self.pre_release.is_none()
    }
}

/// Split `beta.2` / `rc1` / `dev` into kind and number. Anything else
/// (`pre-release.1`, `4`, `beta.1.2`) is kept whole as an unknown kind
/// numbered 1.
fn parse_suffix(suffix: &str) -> PreRelease {
    let Some(caps) = cached(&SUFFIX_RE, SUFFIX_EXPRESSION).captures(suffix) else {
        tracing::trace!("Unrecognized pre-release suffix {:?}", suffix);
        return PreRelease::new(PreReleaseKind::Other(suffix.to_string()), 1);
    };

    // Only digits can reach here, so a parse failure means overflow.
    let number = caps
        .get(2)
        .map(|n| n.as_str().parse::<u64>().unwrap_or(u64::MAX))
        .unwrap_or(1);
    PreRelease::new(&caps[1], number)
}

impl FromStr for ParsedVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ParsedVersion::parse(s)
    }
}

impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(ref pre) = self.pre_release {
            write!(f, "-{}", pre)?;
        }
        Ok(())
    }
}

impl PartialOrd for ParsedVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ParsedVersion {
    /// Numeric triple first. For equal triples a stable release outranks
    /// every pre-release.
    fn cmp(&self, other: &Self) -> Ordering {
        self.core()
            .cmp(&other.core())
            .then_with(|| match (&self.pre_release, &other.pre_release) {
                (None, None) => Ordering::Equal,
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (Some(a), Some(b)) => a.cmp(b),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stable() {
        let v = ParsedVersion::parse("1.0.41").unwrap();
        assert_eq!(v.core(), (1, 0, 41));
        assert!(v.is_stable());

        assert_eq!(ParsedVersion::parse("v1.0.41").unwrap(), v);
        assert_eq!(ParsedVersion::parse("V1.0.41").unwrap(), v);
    }

    #[test]
    fn test_parse_prerelease() {
        let v = ParsedVersion::parse("v2.0.0-beta.3").unwrap();
        assert_eq!(v.core(), (2, 0, 0));
        assert_eq!(v.pre_release, Some(PreRelease::new("beta", 3)));
        assert!(!v.is_stable());
    }

    #[test]
    fn test_parse_prerelease_default_number() {
        let v = ParsedVersion::parse("1.0.0-rc").unwrap();
        assert_eq!(v.pre_release, Some(PreRelease::new(PreReleaseKind::Rc, 1)));
    }

    #[test]
    fn test_parse_prerelease_without_dot() {
        let v = ParsedVersion::parse("1.0.0-alpha4").unwrap();
        assert_eq!(v.pre_release, Some(PreRelease::new("alpha", 4)));
    }

    #[test]
    fn test_parse_unknown_kind() {
        let v = ParsedVersion::parse("1.0.0-preview.7").unwrap();
        let pre = v.pre_release.unwrap();
        assert_eq!(pre.kind, PreReleaseKind::Other("preview".to_string()));
        assert!(!pre.kind.is_known());
        assert_eq!(pre.number, 7);
    }

    #[test]
    fn test_parse_kind_is_case_sensitive() {
        let v = ParsedVersion::parse("1.0.0-RC.1").unwrap();
        assert_eq!(
            v.pre_release.unwrap().kind,
            PreReleaseKind::Other("RC".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_bad_grammar() {
        for input in [
            "",
            "1",
            "1.0",
            "1.0.x",
            "1.0.0.0",
            "vv1.0.0",
            "x1.0.0",
            " 1.0.0",
            "1.0.0 ",
            "1.0.0-",
            "1.0.0-beta 2",
            "1.0.0+build.5",
            "-1.0.0",
        ] {
            let err = ParsedVersion::parse(input).unwrap_err();
            assert!(err.is_format(), "{input:?} gave {err:?}");
        }
    }

    #[test]
    fn test_parse_unrecognized_suffix_is_unknown_kind() {
        for (input, suffix) in [
            ("1.0.0-pre-release.1", "pre-release.1"),
            ("1.0.0-alpha-hotfix", "alpha-hotfix"),
            ("1.0.0-4", "4"),
            ("1.0.0-beta.1.2", "beta.1.2"),
            ("v2.1.0-rc.1+build.7", "rc.1+build.7"),
        ] {
            let v = ParsedVersion::parse(input).unwrap();
            assert_eq!(
                v.pre_release,
                Some(PreRelease::new(PreReleaseKind::Other(suffix.to_string()), 1)),
                "{input}"
            );
        }
    }

    #[test]
    fn test_parse_trailing_dot_suffix() {
        let v = ParsedVersion::parse("1.0.0-beta.").unwrap();
        assert_eq!(v.pre_release, Some(PreRelease::new("beta", 1)));
    }

    #[test]
    fn test_parse_component_overflow_is_range_error() {
        let err = ParsedVersion::parse("1.99999999999999999999999.0").unwrap_err();
        assert!(matches!(err, Error::Range { field: "minor", .. }));
    }

    #[test]
    fn test_parse_prerelease_number_saturates() {
        let v = ParsedVersion::parse("1.0.0-beta.99999999999999999999999").unwrap();
        assert_eq!(v.pre_release.unwrap().number, u64::MAX);
    }

    #[test]
    fn test_from_str() {
        let v: ParsedVersion = "3.2.1-alpha.1".parse().unwrap();
        assert_eq!(v, ParsedVersion::pre(3, 2, 1, "alpha", 1));
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(ParsedVersion::parse("v1.2.3").unwrap().to_string(), "1.2.3");
        assert_eq!(
            ParsedVersion::parse("v1.2.3-rc").unwrap().to_string(),
            "1.2.3-rc.1"
        );
    }

    #[test]
    fn test_kind_ordering() {
        let other = PreReleaseKind::from("nightly");
        assert!(other < PreReleaseKind::Alpha);
        assert!(PreReleaseKind::Alpha < PreReleaseKind::Beta);
        assert!(PreReleaseKind::Beta < PreReleaseKind::Rc);
    }

    #[test]
    fn test_version_ordering() {
        let ordered = [
            "1.0.0-unknown.99",
            "1.0.0-alpha.1",
            "1.0.0-alpha.2",
            "1.0.0-beta.1",
            "1.0.0-beta.2",
            "1.0.0-rc.1",
            "1.0.0-rc.2",
            "1.0.0",
            "1.0.1-alpha.1",
            "1.1.0-unknown.1",
            "1.1.0",
            "2.0.0-alpha.1",
        ];
        let parsed: Vec<ParsedVersion> = ordered
            .iter()
            .map(|s| ParsedVersion::parse(s).unwrap())
            .collect();
        for pair in parsed.windows(2) {
            assert!(pair[0] < pair[1], "{} < {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_unknown_kinds_order_by_number_first() {
        let a = ParsedVersion::pre(1, 0, 0, "zeta", 1);
        let b = ParsedVersion::pre(1, 0, 0, "alef", 2);
        assert!(a < b);
    }
}
