//! # pastver
//!
//! A library for comparing versions of the Typst compiler across its release
//! history.
//!
//! The compiler's past spans three ways of writing a version down: the early
//! alphas used a classic semantic triple (`0.0.2`), the beta period stamped
//! each build with its ship date (`2023-01-30`), and numbered releases resumed
//! from `v0.1.0` onward, with nightly "post" snapshots cut between releases
//! (`post-v0.8.0 nightly 12`). pastver normalizes all three into one
//! [`Version`] value with a single total order that follows the real timeline,
//! so client code can compare the running compiler against any historical
//! milestone and branch on the result.
//!
//! ## Examples
//!
//! Branch on where the running compiler sits in history:
//!
//! ```
//! use pastver::prelude::*;
//! use pastver::registry;
//!
//! // Supplied by the host environment as an already-typed value.
//! let current = Version::semantic(0, 8, 0);
//!
//! if current >= registry::V0_7_0 {
//!     // safe to rely on behavior introduced in v0.7.0
//! }
//! assert!(current < registry::V0_9_0);
//! assert!(registry::V2023_03_28 < current);
//! assert_eq!("0.8.0", current.to_string());
//! ```
//!
//! Nightly snapshots sort strictly between the release they were cut after and
//! the release they are working toward:
//!
//! ```
//! use pastver::prelude::*;
//! use pastver::registry;
//!
//! let nightly = registry::post_v0_8_0(Target::Flat(9, 0), 12);
//! assert!(registry::V0_8_0 < nightly);
//! assert!(nightly < registry::V0_9_0);
//! assert_eq!("post-v0.8.0 nightly 12", nightly.to_string());
//! ```
//!
//! ## Important Terms
//!
//! - **Version**: one point in the compiler's release timeline, in any of the
//!   three notations. Modeled by the [`Version`] struct; `Copy`, immutable,
//!   and totally ordered.
//! - **Era**: the coarse stretch of history a version belongs to (alpha line,
//!   dated beta period, numbered releases). Modeled by [`Era`]; cross-notation
//!   ordering resolves by era first.
//! - **Registry**: the fixed catalog of named milestone constants in
//!   [`registry`], plus the `post_*` nightly constructors.
//!
//! Everything here is a pure function of its inputs: no I/O, no shared mutable
//! state, nothing that can block or fail at runtime. The only fallible surface
//! is the pair of checked constructors ([`Version::try_dated`],
//! [`Version::try_post`]) for hosts that hold unvalidated data.
#![warn(missing_docs)]

mod era;
mod error;
pub mod registry;
mod version;

pub use crate::era::Era;
pub use crate::error::VersionError;
pub use crate::version::{OrderKey, Target, Version};

/// A convenience module appropriate for glob imports (`use pastver::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::Era;
    #[doc(no_inline)]
    pub use crate::OrderKey;
    #[doc(no_inline)]
    pub use crate::Target;
    #[doc(no_inline)]
    pub use crate::Version;
    #[doc(no_inline)]
    pub use crate::VersionError;
}
