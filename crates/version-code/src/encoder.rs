//! Version-to-integer encoding.
//!
//! # Examples
//!
//! ```
//! use version_code::version_code;
//!
//! let alpha = version_code("v1.0.0-alpha.1").unwrap();
//! let stable = version_code("v1.0.0").unwrap();
//! assert!(alpha < stable);
//! assert_eq!(stable.get() % 10, 0);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::scheme::Scheme;
use crate::version::ParsedVersion;

/// An encoded version code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionCode(u64);

impl VersionCode {
    /// The raw integer.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns `true` if the trailing digit is 0, the marker every stable
    /// release carries. Pre-release codes may also end in 0.
    pub const fn is_stable_marked(self) -> bool {
        self.0 % 10 == 0
    }
}

impl From<VersionCode> for u64 {
    fn from(code: VersionCode) -> Self {
        code.0
    }
}

impl fmt::Display for VersionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Scheme {
    /// Encode a parsed version.
    ///
    /// # Errors
    ///
    /// * [`Error::Scheme`] if this scheme fails [`validate`](Self::validate)
    /// * [`Error::Range`] when minor or patch would spill into the next
    ///   component, when the base overflows `u64`, or when the result falls
    ///   outside `0..=max_code`
    pub fn encode(&self, version: &ParsedVersion) -> Result<VersionCode> {
        self.validate()?;

        let code = self.position(version)? + i128::from(self.compat_offset);
        if code < 0 {
            tracing::debug!("Code for {} falls below zero", version);
            return Err(Error::range("version code", code, self.max_code));
        }
        if code > i128::from(self.max_code) {
            tracing::debug!("Code {} for {} exceeds platform limit", code, version);
            return Err(Error::range("version code", code, self.max_code));
        }

        // 0..=max_code always fits in a u64.
        let code = code as u64;
        tracing::debug!("Encoded {} as {}", version, code);
        Ok(VersionCode(code))
    }

    /// Signed code before the compatibility offset is added. The scheme must
    /// already be validated.
    fn position(&self, version: &ParsedVersion) -> Result<i128> {
        let max_minor = self.max_minor();
        if version.minor > max_minor {
            tracing::debug!("Minor component of {} out of range", version);
            return Err(Error::range("minor", version.minor, max_minor));
        }
        let max_patch = self.max_patch();
        if version.patch > max_patch {
            tracing::debug!("Patch component of {} out of range", version);
            return Err(Error::range("patch", version.patch, max_patch));
        }

        let base = version
            .major
            .checked_mul(self.w_major)
            .and_then(|b| b.checked_add(version.minor * self.w_minor))
            .and_then(|b| b.checked_add(version.patch * self.w_patch))
            .ok_or_else(|| Error::range("major", version.major, u64::MAX / self.w_major))?;
        let base = i128::from(base);

        Ok(match &version.pre_release {
            None => base + (10 - base % 10) % 10,
            Some(pre) => {
                let number = pre.number.min(self.number_span - 1);
                let adjustment = pre.kind.rank() * self.number_span + number;
                base - i128::from(self.max_adjustment()) + i128::from(adjustment)
            }
        })
    }

    /// Parse and encode in one step.
    pub fn encode_str(&self, version: &str) -> Result<VersionCode> {
        self.encode(&ParsedVersion::parse(version)?)
    }

    /// Smallest compatibility offset (a multiple of 10) for which every
    /// version after `historical` encodes strictly above `published`.
    ///
    /// The current `compat_offset` is ignored. Relies on the next version
    /// after `historical` encoding at least one above it. That holds unless
    /// `historical` already sits at a saturated pre-release number, so pin
    /// such versions with care.
    ///
    /// # Examples
    ///
    /// ```
    /// use version_code::{ParsedVersion, Scheme, COMPAT_OFFSET, HISTORICAL_CODE, HISTORICAL_VERSION};
    ///
    /// let historical = ParsedVersion::parse(HISTORICAL_VERSION).unwrap();
    /// let offset = Scheme::DEFAULT
    ///     .solve_compat_offset(&historical, HISTORICAL_CODE)
    ///     .unwrap();
    /// assert_eq!(offset, COMPAT_OFFSET);
    /// ```
    pub fn solve_compat_offset(&self, historical: &ParsedVersion, published: u64) -> Result<u64> {
        let unshifted = self.with_compat_offset(0);
        unshifted.validate()?;

        // raw may be negative. Solve raw + 1 + offset > published.
        let raw = unshifted.position(historical)?;
        let needed = (i128::from(published) - raw).max(0);
        let offset = (needed + 9) / 10 * 10;
        let offset = u64::try_from(offset)
            .map_err(|_| Error::range("version code", offset, u64::MAX))?;

        tracing::debug!(
            "Compatibility offset for {} (published {}): {}",
            historical,
            published,
            offset
        );
        Ok(offset)
    }

    /// Encode each version and report whether the codes strictly increase
    /// in the given order.
    ///
    /// # Errors
    ///
    /// The first parse or encode failure.
    pub fn check_ordering(&self, versions: &[&str]) -> Result<bool> {
        let codes = versions
            .iter()
            .map(|v| self.encode_str(v))
            .collect::<Result<Vec<_>>>()?;

        Ok(codes.windows(2).all(|pair| pair[0] < pair[1]))
    }
}

/// Encode with [`Scheme::DEFAULT`].
pub fn encode(version: &ParsedVersion) -> Result<VersionCode> {
    Scheme::DEFAULT.encode(version)
}

/// Parse and encode with [`Scheme::DEFAULT`].
///
/// # Examples
///
/// ```
/// use version_code::version_code;
///
/// assert_eq!(version_code("v1.0.0").unwrap().get(), 10_001_290);
/// assert!(version_code("v1.1.0-alpha.2").unwrap().get() > 10_100_989);
/// ```
pub fn version_code(version: &str) -> Result<VersionCode> {
    Scheme::DEFAULT.encode_str(version)
}
