//! Error types for version parsing and encoding.
//!
//! Parsing and encoding fail with a single [`Error`] type. Only `Format` and
//! `Range` are reachable through the default scheme:
//!
//! ```text
//! Error
//! ├── Format   input does not match [v]MAJOR.MINOR.PATCH[-KIND[.NUMBER]]
//! ├── Range    a component (or the resulting code) does not fit the scheme
//! └── Scheme   a hand-built scheme failed validation (never Scheme::DEFAULT)
//! ```
//!
//! [`SchemeError`] is what [`Scheme::validate`](crate::Scheme::validate)
//! reports.
//!
//! # Examples
//!
//! ```rust
//! use version_code::{version_code, Error};
//!
//! match version_code("1.2") {
//!     Err(Error::Format { input, .. }) => assert_eq!(input, "1.2"),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while parsing or encoding a version.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input string does not match the version grammar.
    #[error("invalid version format {input:?}: {reason}")]
    Format {
        /// The rejected input, verbatim.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// A numeric component is outside the range the scheme can encode.
    ///
    /// Major, minor and patch are never clamped. Only the pre-release number
    /// saturates.
    #[error("{field} {value} is out of range (max {max})")]
    Range {
        /// Which component overflowed (`"major"`, `"minor"`, `"patch"` or
        /// `"version code"`).
        field: &'static str,
        /// The offending value as written or computed.
        value: String,
        /// Largest accepted value for `field`.
        max: u64,
    },

    /// The scheme itself is inconsistent. [`Scheme::DEFAULT`](crate::Scheme::DEFAULT)
    /// is checked at compile time and never produces this.
    #[error("invalid encoding scheme: {0}")]
    Scheme(#[from] SchemeError),
}

impl Error {
    pub(crate) fn format(input: &str, reason: &'static str) -> Self {
        Error::Format {
            input: input.to_string(),
            reason,
        }
    }

    pub(crate) fn range(field: &'static str, value: impl ToString, max: u64) -> Self {
        Error::Range {
            field,
            value: value.to_string(),
            max,
        }
    }

    /// Returns `true` for [`Error::Format`].
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format { .. })
    }

    /// Returns `true` for [`Error::Range`].
    pub fn is_range(&self) -> bool {
        matches!(self, Error::Range { .. })
    }

    /// Returns `true` for [`Error::Scheme`].
    pub fn is_scheme(&self) -> bool {
        matches!(self, Error::Scheme(_))
    }
}

/// Structural problems with a [`Scheme`](crate::Scheme).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SchemeError {
    /// A weight is zero, not smaller than the weight above it, or does not
    /// divide it evenly.
    #[error("weights must strictly decrease and divide each other: major={major}, minor={minor}, patch={patch}")]
    Weights {
        /// Major weight.
        major: u64,
        /// Minor weight.
        minor: u64,
        /// Patch weight.
        patch: u64,
    },

    /// Stable rounding needs the patch weight to be a multiple of 10.
    #[error("patch weight {0} is not a multiple of 10")]
    PatchWeightNotDecimal(u64),

    /// The pre-release bands do not fit under one patch step.
    #[error("pre-release span {max_adjustment} does not fit below patch weight {w_patch}")]
    AdjustmentTooWide {
        /// `4 * number_span`.
        max_adjustment: u64,
        /// Patch weight.
        w_patch: u64,
    },

    /// Each kind needs room for at least one number above zero.
    #[error("number span {0} is too small")]
    NumberSpanTooSmall(u64),

    /// A non-decimal offset would break the trailing zero of stable codes.
    #[error("compatibility offset {0} is not a multiple of 10")]
    OffsetNotDecimal(u64),
}
