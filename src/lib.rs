//! # semver-next
//!
//! A library for decomposing a semantic version string and computing every
//! next version it could become.
//!
//! Automation pipelines rarely hold a pristine `MAJOR.MINOR.PATCH` string:
//! tags look like `v1.2.3`, commit labels like `1.2`, and sometimes all
//! that's known is `1`. This crate runs such inputs through a two-stage
//! pipeline — a tolerant [coercion](coerce) step that normalizes the loose
//! numeric prefix, then a strict parser producing an immutable [`Version`] —
//! and derives the eight next versions, one per [`ReleaseType`].
//!
//! ## Examples
//!
//! Quickly get a next version:
//!
//! ```
//! use semver_next::prelude::*;
//!
//! let version = Version::parse(&coerce("v1.2.3-beta.1")).unwrap();
//! let next = version
//!     .increment(ReleaseType::Prerelease, None, IdentifierBase::Unspecified)
//!     .unwrap();
//! assert_eq!("1.2.3-beta.2", next.to_string());
//! ```
//!
//! Or assemble the whole next-version set at once:
//!
//! ```
//! use semver_next::prelude::*;
//!
//! let report = Report::from_raw("1", None, IdentifierBase::Unspecified).unwrap();
//! assert_eq!("1.0.0", report.version().to_string());
//! assert_eq!("2.0.0", report.next(ReleaseType::Major).to_string());
//! assert_eq!("1.0.1-0", report.next(ReleaseType::Prerelease).to_string());
//! ```
//!
//! ## Important Terms
//!
//! - **Canonical form**: the unique, minimal-width rendering of a version —
//!   no leading zeros, all three numeric components explicit. [`Version`]'s
//!   `Display` implementation always emits it.
//! - **Identifier**: a single dot-delimited component of a prerelease or
//!   build sequence, modeled by [`Identifier`].
//! - **Precedence**: the total order among versions, implemented by
//!   [`Version`]'s `Ord`. Build metadata carries no precedence weight.
//! - **Identifier base**: the starting numeral (0 or 1) used when an
//!   increment mints a new numeric prerelease identifier, modeled by
//!   [`IdentifierBase`].
//!
//! ## Errors
//!
//! Every failure is a synchronous [`Error`] naming the offending input; a
//! parse failure is terminal and no increments are attempted. All
//! operations are pure functions of their inputs — nothing is persisted
//! between calls.
#![warn(missing_docs)]

mod coerce;
mod error;
mod identifier;
mod increment;
mod report;
mod version;

pub use crate::coerce::coerce;
pub use crate::error::Error;
pub use crate::identifier::Identifier;
pub use crate::increment::{IdentifierBase, ReleaseType};
pub use crate::report::Report;
pub use crate::version::Version;

/// A convenience module appropriate for glob imports (`use semver_next::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::coerce::coerce;
    #[doc(no_inline)]
    pub use crate::Error;
    #[doc(no_inline)]
    pub use crate::Identifier;
    #[doc(no_inline)]
    pub use crate::IdentifierBase;
    #[doc(no_inline)]
    pub use crate::ReleaseType;
    #[doc(no_inline)]
    pub use crate::Report;
    #[doc(no_inline)]
    pub use crate::Version;
}
