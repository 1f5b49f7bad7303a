//! Encoding constants.
//!
//! A [`Scheme`] bundles every number the encoder depends on. The crate ships
//! one frozen scheme, [`Scheme::DEFAULT`]; codes already published with it
//! must never change, so its values are not runtime-configurable.
//!
//! ```text
//! code = major * W_MAJOR + minor * W_MINOR + patch * W_PATCH      (base)
//!      - MAX_ADJUSTMENT + rank * NUMBER_SPAN + min(n, SPAN - 1)   (pre-release only)
//!      + COMPAT_OFFSET
//! ```

use serde::{Deserialize, Serialize};

use crate::error::SchemeError;

/// Weight of the major component.
pub const W_MAJOR: u64 = 10_000_000;

/// Weight of the minor component.
pub const W_MINOR: u64 = 100_000;

/// Weight of the patch component.
pub const W_PATCH: u64 = 1_000;

/// Pre-release numbers per kind. Numbers at or above `NUMBER_SPAN - 1`
/// share the top code of their band.
pub const NUMBER_SPAN: u64 = 100;

/// Conceptual rank of a stable release, one above `rc`.
pub const STABLE_RANK: u64 = 4;

/// Distance from `base` down to the lowest pre-release band.
pub const MAX_ADJUSTMENT: u64 = STABLE_RANK * NUMBER_SPAN;

/// Version whose code was published before this scheme existed.
pub const HISTORICAL_VERSION: &str = "v1.1.0-alpha.1";

/// The code that was published for [`HISTORICAL_VERSION`].
pub const HISTORICAL_CODE: u64 = 10_100_989;

/// Added to every code so that anything after [`HISTORICAL_VERSION`]
/// lands above [`HISTORICAL_CODE`].
///
/// Without it `v1.1.0-alpha.2` encodes to 10_099_702, so the offset must
/// exceed 10_100_989 - 10_099_702 = 1_287. The smallest multiple of 10 above
/// that is 1_290.
pub const COMPAT_OFFSET: u64 = 1_290;

/// Largest `versionCode` Google Play accepts.
pub const MAX_VERSION_CODE: u64 = 2_100_000_000;

/// Encoding parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scheme {
    /// Major weight.
    pub w_major: u64,
    /// Minor weight.
    pub w_minor: u64,
    /// Patch weight.
    pub w_patch: u64,
    /// Numbers per pre-release kind.
    pub number_span: u64,
    /// Constant added to every code.
    pub compat_offset: u64,
    /// Largest code the target platform accepts.
    pub max_code: u64,
}

const _: () = assert!(Scheme::DEFAULT.is_consistent());

impl Scheme {
    /// The frozen scheme used by [`encode`](crate::encode) and
    /// [`version_code`](crate::version_code).
    pub const DEFAULT: Scheme = Scheme {
        w_major: W_MAJOR,
        w_minor: W_MINOR,
        w_patch: W_PATCH,
        number_span: NUMBER_SPAN,
        compat_offset: COMPAT_OFFSET,
        max_code: MAX_VERSION_CODE,
    };

    /// Copy of this scheme with a different compatibility offset.
    pub const fn with_compat_offset(self, compat_offset: u64) -> Self {
        Scheme {
            compat_offset,
            ..self
        }
    }

    /// Copy of this scheme with a different platform ceiling.
    pub const fn with_max_code(self, max_code: u64) -> Self {
        Scheme { max_code, ..self }
    }

    /// `STABLE_RANK * number_span`.
    pub const fn max_adjustment(&self) -> u64 {
        STABLE_RANK.saturating_mul(self.number_span)
    }

    /// Largest minor that does not collide with the next major.
    ///
    /// Only meaningful for a scheme that passes [`validate`](Self::validate).
    pub const fn max_minor(&self) -> u64 {
        self.w_major / self.w_minor - 1
    }

    /// Largest patch that does not collide with the next minor.
    pub const fn max_patch(&self) -> u64 {
        self.w_minor / self.w_patch - 1
    }

    /// Check the constraints that make the encoding monotonic.
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemeError`] found.
    pub const fn validate(&self) -> Result<(), SchemeError> {
        if self.w_patch == 0
            || self.w_minor <= self.w_patch
            || self.w_major <= self.w_minor
            || self.w_minor % self.w_patch != 0
            || self.w_major % self.w_minor != 0
        {
            return Err(SchemeError::Weights {
                major: self.w_major,
                minor: self.w_minor,
                patch: self.w_patch,
            });
        }
        if self.w_patch % 10 != 0 {
            return Err(SchemeError::PatchWeightNotDecimal(self.w_patch));
        }
        if self.number_span < 2 {
            return Err(SchemeError::NumberSpanTooSmall(self.number_span));
        }
        if self.max_adjustment() >= self.w_patch {
            return Err(SchemeError::AdjustmentTooWide {
                max_adjustment: self.max_adjustment(),
                w_patch: self.w_patch,
            });
        }
        if self.compat_offset % 10 != 0 {
            return Err(SchemeError::OffsetNotDecimal(self.compat_offset));
        }
        Ok(())
    }

    /// `validate().is_ok()`, usable in `const` context.
    pub const fn is_consistent(&self) -> bool {
        self.validate().is_ok()
    }
}

impl Default for Scheme {
    fn default() -> Self {
        Scheme::DEFAULT
    }
}
