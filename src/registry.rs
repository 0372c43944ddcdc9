//! The milestone catalog: one named constant per release in the compiler's
//! history, constructed once at compile time and never recomputed.
//!
//! The catalog spans three eras. The `0.0.x` alphas came first; dated betas
//! ran from [`V2023_01_30`] through [`V2023_03_28`]; numbered releases resumed
//! with [`V0_1_0`] and continue through [`LATEST`]. Those two transition
//! points anchor every cross-era comparison.
//!
//! This module is purely a namespace. Nothing here can fail at runtime, and
//! adding a milestone is a source-level edit, not a registration API.
//!
//! ```
//! use pastver::registry;
//!
//! assert!(registry::V2023_01_30 < registry::V0_1_0);
//! assert_eq!(Some(registry::V0_8_0), registry::by_name("v0.8.0"));
//! ```

use crate::version::{Target, Version};

/// The first build handed to outside testers.
pub const V0_0_1: Version = Version::semantic(0, 0, 1);
/// Second alpha.
pub const V0_0_2: Version = Version::semantic(0, 0, 2);
/// Last of the alpha line.
pub const V0_0_3: Version = Version::semantic(0, 0, 3);

/// The first dated beta, and the start of the dated era.
pub const V2023_01_30: Version = Version::dated(2023, 1, 30);
/// Beta refresh of February 2.
pub const V2023_02_02: Version = Version::dated(2023, 2, 2);
/// Beta refresh of February 12.
pub const V2023_02_12: Version = Version::dated(2023, 2, 12);
/// Beta refresh of February 15.
pub const V2023_02_15: Version = Version::dated(2023, 2, 15);
/// Beta refresh of February 25.
pub const V2023_02_25: Version = Version::dated(2023, 2, 25);
/// The build that went out when the compiler's source opened up.
pub const V2023_03_21: Version = Version::dated(2023, 3, 21);
/// The last dated beta.
pub const V2023_03_28: Version = Version::dated(2023, 3, 28);

/// The release that resumed semantic numbering (2023-04-04).
pub const V0_1_0: Version = Version::semantic(0, 1, 0);
/// v0.2.0.
pub const V0_2_0: Version = Version::semantic(0, 2, 0);
/// v0.3.0.
pub const V0_3_0: Version = Version::semantic(0, 3, 0);
/// v0.4.0.
pub const V0_4_0: Version = Version::semantic(0, 4, 0);
/// v0.5.0.
pub const V0_5_0: Version = Version::semantic(0, 5, 0);
/// v0.6.0.
pub const V0_6_0: Version = Version::semantic(0, 6, 0);
/// v0.7.0, which reshuffled the compile command's argument order.
pub const V0_7_0: Version = Version::semantic(0, 7, 0);
/// v0.8.0.
pub const V0_8_0: Version = Version::semantic(0, 8, 0);
/// v0.9.0.
pub const V0_9_0: Version = Version::semantic(0, 9, 0);

/// Alias for the newest cataloged release.
pub const LATEST: Version = V0_9_0;

/// Builds the nightly snapshot cut after [`V0_8_0`] with the given target and
/// revision.
pub const fn post_v0_8_0(target: Target, revision: u32) -> Version {
    Version::post(V0_8_0, target, revision)
}

/// Builds the nightly snapshot cut after [`V0_9_0`] with the given target and
/// revision.
pub const fn post_v0_9_0(target: Target, revision: u32) -> Version {
    Version::post(V0_9_0, target, revision)
}

/// Every cataloged milestone in release order, keyed by its canonical name.
pub static MILESTONES: &[(&str, Version)] = &[
    ("v0.0.1", V0_0_1),
    ("v0.0.2", V0_0_2),
    ("v0.0.3", V0_0_3),
    ("v2023-01-30", V2023_01_30),
    ("v2023-02-02", V2023_02_02),
    ("v2023-02-12", V2023_02_12),
    ("v2023-02-15", V2023_02_15),
    ("v2023-02-25", V2023_02_25),
    ("v2023-03-21", V2023_03_21),
    ("v2023-03-28", V2023_03_28),
    ("v0.1.0", V0_1_0),
    ("v0.2.0", V0_2_0),
    ("v0.3.0", V0_3_0),
    ("v0.4.0", V0_4_0),
    ("v0.5.0", V0_5_0),
    ("v0.6.0", V0_6_0),
    ("v0.7.0", V0_7_0),
    ("v0.8.0", V0_8_0),
    ("v0.9.0", V0_9_0),
];

/// Looks up a milestone by the canonical name listed in [`MILESTONES`].
///
/// This is a catalog lookup, not a version-string parser; names that aren't in
/// the catalog return `None`, even well-formed ones.
pub fn by_name(name: &str) -> Option<Version> {
    MILESTONES
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, version)| *version)
}
