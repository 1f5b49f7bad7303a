//! # version-code
//!
//! Integer version codes for semantic version strings.
//!
//! App stores such as Google Play identify every upload by a single integer
//! that must strictly increase between releases. This crate maps
//! `[v]MAJOR.MINOR.PATCH[-KIND[.NUMBER]]` onto such an integer so that:
//!
//! - newer `MAJOR.MINOR.PATCH` triples always get larger codes
//! - for one triple, `stable > rc > beta > alpha > anything else`
//! - higher pre-release numbers get larger codes within their kind
//! - stable codes end in `0`
//! - every version after `v1.1.0-alpha.1` lands above the `10100989` that was
//!   already published for it
//!
//! ## Quick Start
//!
//! ```rust
//! use version_code::{version_code, Result};
//!
//! fn main() -> Result<()> {
//!     let beta = version_code("v2.4.0-beta.3")?;
//!     let stable = version_code("v2.4.0")?;
//!
//!     assert!(beta < stable);
//!     assert!(stable.is_stable_marked());
//!     println!("versionCode = {stable}");
//!     Ok(())
//! }
//! ```
//!
//! ## Custom Schemes
//!
//! [`Scheme::DEFAULT`] is frozen. Other weightings can be built and checked
//! with [`Scheme::validate`], but codes from different schemes are not
//! comparable.
//!
//! ```rust
//! use version_code::{ParsedVersion, Scheme};
//!
//! let scheme = Scheme::DEFAULT.with_compat_offset(0);
//! assert!(scheme.validate().is_ok());
//!
//! let v = ParsedVersion::parse("1.0.0").unwrap();
//! assert_eq!(scheme.encode(&v).unwrap().get(), 10_000_000);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod encoder;
pub mod error;
pub mod scheme;
pub mod version;

pub use encoder::{encode, version_code, VersionCode};
pub use error::{Error, Result, SchemeError};
pub use scheme::{
    Scheme, COMPAT_OFFSET, HISTORICAL_CODE, HISTORICAL_VERSION, MAX_ADJUSTMENT, MAX_VERSION_CODE,
    NUMBER_SPAN, STABLE_RANK, W_MAJOR, W_MINOR, W_PATCH,
};
pub use version::{ParsedVersion, PreRelease, PreReleaseKind};
