use crate::{
    era::{self, Era},
    error::VersionError,
};
use chrono::{Datelike, NaiveDate};
use core::{
    cmp::Ordering,
    fmt::{self, Display},
};

/// Where a version sits relative to the release its key points at. Snapshots
/// sort below the release they are working toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Phase {
    Snapshot,
    Release,
}

/// The key a [`Version`] is ordered by.
///
/// Keys compare lexicographically: era first, then the timeline triple the
/// version occupies within that era, then the release phase, then the
/// snapshot's origin and serial. The induced order is total and matches the
/// real release history the [registry](crate::registry) encodes. Keys are
/// computed once, at construction, and stored in the value; comparing them
/// never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderKey {
    era: Era,
    timeline: [u32; 3],
    phase: Phase,
    origin: [u32; 3],
    serial: u32,
}

/// The three ways the compiler's history has written a version down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Notation {
    Semantic { major: u32, minor: u32, patch: u32 },
    Dated { year: u32, month: u32, day: u32 },
    Nightly { base: [u32; 3], target: [u32; 3], revision: u32 },
}

/// The release a nightly snapshot is working toward.
///
/// Two spellings appear at call sites: a flat `(minor, patch)` pair that
/// inherits the major number from the snapshot's base, and a fully-spelled
/// `((major, minor), patch)` form. Both name a single semantic triple, and
/// construction canonicalizes to it, so equivalent targets compare equal and
/// order identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// `(minor, patch)`, with the major number taken from the base.
    Flat(u32, u32),
    /// `((major, minor), patch)`, spelled out in full.
    Nested((u32, u32), u32),
}

impl Target {
    const fn resolve(self, base_major: u32) -> [u32; 3] {
        match self {
            Target::Flat(minor, patch) => [base_major, minor, patch],
            Target::Nested((major, minor), patch) => [major, minor, patch],
        }
    }
}

/// One point in the compiler's release timeline.
///
/// A `Version` is either a numbered release (`0.8.0`), a date-stamped beta
/// (`2023-01-30`), or a nightly snapshot cut after a numbered release
/// (`post-v0.8.0 nightly 12`). All three order against each other by their
/// position in the real timeline, so client code can branch on a single
/// comparison regardless of how the running compiler identifies itself:
///
/// ```
/// use pastver::prelude::*;
/// use pastver::registry;
///
/// let current = Version::semantic(0, 8, 0);
/// assert!(current >= registry::V0_7_0);
/// assert!(registry::V2023_03_28 < current);
/// ```
///
/// Versions are plain `Copy` values with no interior state; they are freely
/// shared across threads and comparing two of them consults nothing but the
/// values themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    notation: Notation,
    key: OrderKey,
}

impl Version {
    /// Returns the numbered release `major.minor.patch`.
    ///
    /// Triples below `0.1.0` are the pre-beta alpha line and sort before
    /// every dated beta; `0.1.0` and up sort after them.
    pub const fn semantic(major: u32, minor: u32, patch: u32) -> Self {
        let key = OrderKey {
            era: Era::of_semantic(major, minor, patch),
            timeline: [major, minor, patch],
            phase: Phase::Release,
            origin: [0; 3],
            serial: 0,
        };
        Self {
            notation: Notation::Semantic { major, minor, patch },
            key,
        }
    }

    /// Returns the date-stamped beta that shipped on `year-month-day`.
    ///
    /// Callers supply calendar-valid dates; nothing is parsed here. Passing an
    /// impossible date is a contract violation and fails an assertion at
    /// construction rather than producing a silently misordered value. Hosts
    /// holding unvalidated data should use [`Version::try_dated`].
    pub const fn dated(year: u32, month: u32, day: u32) -> Self {
        assert!(
            1 <= month && month <= 12,
            "dated versions need a real calendar date"
        );
        assert!(
            1 <= day && day <= days_in_month(year, month),
            "dated versions need a real calendar date"
        );
        let key = OrderKey {
            era: Era::Beta,
            timeline: [year, month, day],
            phase: Phase::Release,
            origin: [0; 3],
            serial: 0,
        };
        Self {
            notation: Notation::Dated { year, month, day },
            key,
        }
    }

    /// Returns the development snapshot cut after `base`, working toward
    /// `target`, with a monotonically increasing nightly `revision`
    /// disambiguating successive snapshots aimed at the same target.
    ///
    /// The snapshot sorts strictly after `base` and strictly before the
    /// numbered release equal to its resolved target; comparisons against any
    /// other version delegate to that position. `base` must itself be a
    /// numbered (semantic) release and `target` must come after it; both
    /// contracts are asserted at construction. Hosts holding unvalidated data
    /// should use [`Version::try_post`].
    pub const fn post(base: Version, target: Target, revision: u32) -> Self {
        let base_triple = match base.notation {
            Notation::Semantic { major, minor, patch } => [major, minor, patch],
            _ => panic!("a nightly's base should be a numbered release"),
        };
        let target_triple = target.resolve(base_triple[0]);
        assert!(
            era::triple_lt(base_triple, target_triple),
            "a nightly's target should come after its base"
        );
        let key = OrderKey {
            era: Era::of_semantic(target_triple[0], target_triple[1], target_triple[2]),
            timeline: target_triple,
            phase: Phase::Snapshot,
            origin: base_triple,
            serial: revision,
        };
        Self {
            notation: Notation::Nightly {
                base: base_triple,
                target: target_triple,
                revision,
            },
            key,
        }
    }

    /// Checked companion to [`Version::dated`], validating the date through
    /// [`chrono::NaiveDate`].
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::InvalidDateArguments`] if the arguments don't
    /// name a real calendar date.
    pub fn try_dated(year: u32, month: u32, day: u32) -> Result<Self, VersionError> {
        i32::try_from(year)
            .ok()
            .and_then(|y| NaiveDate::from_ymd_opt(y, month, day))
            .map(|_| Self::dated(year, month, day))
            .ok_or(VersionError::InvalidDateArguments { year, month, day })
    }

    /// Returns the date-stamped beta that shipped on `date`.
    ///
    /// Interop constructor for hosts that already carry a [`NaiveDate`] for
    /// the running build. Dates before the common era are a contract
    /// violation.
    pub fn dated_on(date: NaiveDate) -> Self {
        let year = date.year();
        assert!(year > 0, "dated versions sit in the common era");
        Self::dated(year as u32, date.month(), date.day())
    }

    /// Checked companion to [`Version::post`].
    ///
    /// # Errors
    ///
    /// - Returns [`VersionError::NightlyBaseNotSemantic`] if `base` is not a
    ///   numbered release.
    /// - Returns [`VersionError::TargetNotAfterBase`] if the resolved target
    ///   is at or before `base`.
    pub fn try_post(base: Version, target: Target, revision: u32) -> Result<Self, VersionError> {
        let base_triple = match base.notation {
            Notation::Semantic { major, minor, patch } => [major, minor, patch],
            _ => {
                return Err(VersionError::NightlyBaseNotSemantic {
                    base: base.to_string(),
                })
            }
        };
        let target_triple = target.resolve(base_triple[0]);
        if !era::triple_lt(base_triple, target_triple) {
            return Err(VersionError::TargetNotAfterBase {
                base: base.to_string(),
                target: format!(
                    "{}.{}.{}",
                    target_triple[0], target_triple[1], target_triple[2]
                ),
            });
        }
        Ok(Self::post(base, target, revision))
    }

    /// Returns the key this version is ordered by.
    ///
    /// [`Version`] implements [`Ord`] through this key, so `<`/`<=`/`==`
    /// comparisons between versions are usually all callers need; the key
    /// itself is exposed for callers that want to store or index by it.
    pub const fn order_key(&self) -> OrderKey {
        self.key
    }

    /// Returns the era this version belongs to. A nightly snapshot reports
    /// the era of the release it targets.
    pub const fn era(&self) -> Era {
        self.key.era
    }

    /// Returns true if this version is a nightly snapshot rather than a
    /// shipped release.
    pub const fn is_nightly(&self) -> bool {
        matches!(self.notation, Notation::Nightly { .. })
    }

    /// Returns this version's numeric components for structural inspection,
    /// without re-deriving any comparison semantics.
    ///
    /// The layout is fixed per notation and callers must not assume one
    /// meaning across notations beyond these documented indices:
    ///
    /// - numbered release: `[major, minor, patch]` (index 1 is the minor
    ///   number),
    /// - dated beta: `[year, month, day]`,
    /// - nightly snapshot: `[base major, base minor, base patch, target
    ///   major, target minor, target patch, revision]`.
    pub fn parts(&self) -> Vec<u32> {
        match self.notation {
            Notation::Semantic { major, minor, patch } => vec![major, minor, patch],
            Notation::Dated { year, month, day } => vec![year, month, day],
            Notation::Nightly {
                base,
                target,
                revision,
            } => vec![
                base[0], base[1], base[2], target[0], target[1], target[2], revision,
            ],
        }
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    /// Compares two versions by timeline position. The order is total: any
    /// two versions, related or not, resolve to exactly one of less, equal,
    /// or greater.
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl Display for Version {
    /// Renders the version for presentation, deterministically and
    /// locale-independently. Never use the rendering for ordering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.notation {
            Notation::Semantic { major, minor, patch } => {
                write!(f, "{major}.{minor}.{patch}")
            }
            Notation::Dated { year, month, day } => {
                write!(f, "{year:04}-{month:02}-{day:02}")
            }
            Notation::Nightly { base, revision, .. } => {
                write!(
                    f,
                    "post-v{}.{}.{} nightly {}",
                    base[0], base[1], base[2], revision
                )
            }
        }
    }
}

const fn is_leap_year(year: u32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

const fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn semantic_orders_lexicographically() {
        let cases = [
            (Version::semantic(0, 3, 0), Version::semantic(0, 8, 0)),
            (Version::semantic(0, 8, 0), Version::semantic(0, 8, 1)),
            (Version::semantic(0, 9, 9), Version::semantic(1, 0, 0)),
            (Version::semantic(0, 0, 1), Version::semantic(0, 0, 2)),
        ];

        for (lesser, greater) in cases {
            assert!(lesser < greater);
            assert!(greater > lesser);
        }
    }

    #[test]
    fn dated_orders_by_calendar() {
        let cases = [
            (Version::dated(2023, 1, 30), Version::dated(2023, 2, 25)),
            (Version::dated(2023, 2, 25), Version::dated(2023, 3, 21)),
            (Version::dated(2022, 12, 31), Version::dated(2023, 1, 1)),
        ];

        for (lesser, greater) in cases {
            assert!(lesser < greater);
        }
    }

    #[test]
    fn eras_do_not_interleave() {
        let alpha = Version::semantic(0, 0, 3);
        let beta = Version::dated(2023, 1, 30);
        let release = Version::semantic(0, 1, 0);

        assert!(alpha < beta);
        assert!(beta < release);
        assert!(alpha < release);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(7)]
    #[case(4096)]
    fn nightly_sits_between_base_and_target(#[case] revision: u32) {
        let base = Version::semantic(0, 8, 0);
        let nightly = Version::post(base, Target::Flat(9, 0), revision);

        assert!(base < nightly);
        assert!(nightly < Version::semantic(0, 9, 0));
    }

    #[test]
    fn nightly_revisions_order_same_target_snapshots() {
        let base = Version::semantic(0, 8, 0);
        let earlier = Version::post(base, Target::Flat(9, 0), 3);
        let later = Version::post(base, Target::Flat(9, 0), 4);

        assert!(earlier < later);
        assert_eq!(earlier, Version::post(base, Target::Flat(9, 0), 3));
    }

    #[test]
    fn nested_and_flat_targets_agree() {
        let base = Version::semantic(0, 8, 0);
        let flat = Version::post(base, Target::Flat(9, 0), 3);
        let nested = Version::post(base, Target::Nested((0, 9), 0), 3);

        assert_eq!(flat, nested);
        assert_eq!(flat.cmp(&nested), Ordering::Equal);
    }

    #[test]
    fn unrelated_comparisons_delegate_to_the_bounds() {
        let nightly = Version::post(Version::semantic(0, 8, 0), Target::Flat(9, 0), 12);

        // far past and far future, both notations
        assert!(Version::semantic(0, 0, 1) < nightly);
        assert!(Version::dated(2023, 3, 28) < nightly);
        assert!(nightly < Version::semantic(0, 9, 1));
        assert!(nightly < Version::semantic(1, 0, 0));
    }

    #[rstest]
    #[case(Version::semantic(0, 8, 0), "0.8.0")]
    #[case(Version::semantic(10, 20, 30), "10.20.30")]
    #[case(Version::dated(2023, 1, 30), "2023-01-30")]
    #[case(Version::dated(2023, 12, 4), "2023-12-04")]
    #[case(
        Version::post(Version::semantic(0, 8, 0), Target::Flat(9, 0), 12),
        "post-v0.8.0 nightly 12"
    )]
    fn rendering_is_stable(#[case] version: Version, #[case] expected: &str) {
        assert_eq!(expected, version.to_string());
        // no hidden state: rendering twice yields the same string
        assert_eq!(version.to_string(), version.to_string());
    }

    #[test]
    fn parts_expose_the_documented_layouts() {
        assert_eq!(vec![0, 8, 0], Version::semantic(0, 8, 0).parts());
        assert_eq!(vec![2023, 1, 30], Version::dated(2023, 1, 30).parts());

        let nightly = Version::post(Version::semantic(0, 8, 0), Target::Flat(9, 0), 12);
        assert_eq!(vec![0, 8, 0, 0, 9, 0, 12], nightly.parts());
        assert_eq!(nightly.parts(), nightly.parts());

        // index 1 is the minor number for numbered releases
        assert_eq!(8, Version::semantic(0, 8, 0).parts()[1]);
    }

    #[test]
    fn accessors_report_notation_and_era() {
        assert_eq!(Era::Alpha, Version::semantic(0, 0, 2).era());
        assert_eq!(Era::Beta, Version::dated(2023, 2, 12).era());
        assert_eq!(Era::Release, Version::semantic(0, 8, 0).era());

        let nightly = Version::post(Version::semantic(0, 8, 0), Target::Flat(9, 0), 1);
        assert_eq!(Era::Release, nightly.era());
        assert!(nightly.is_nightly());
        assert!(!Version::semantic(0, 8, 0).is_nightly());
    }

    #[test]
    #[should_panic(expected = "real calendar date")]
    fn dated_rejects_impossible_dates() {
        Version::dated(2023, 2, 30);
    }

    #[test]
    #[should_panic(expected = "numbered release")]
    fn post_rejects_a_dated_base() {
        Version::post(Version::dated(2023, 1, 30), Target::Flat(9, 0), 0);
    }

    #[test]
    #[should_panic(expected = "come after its base")]
    fn post_rejects_a_backward_target() {
        Version::post(Version::semantic(0, 8, 0), Target::Flat(7, 0), 0);
    }

    #[test]
    fn try_dated_checks_the_calendar() {
        let cases = [
            (2023, 1, 30, true),
            (2024, 2, 29, true), // leap year
            (2023, 2, 29, false),
            (2023, 13, 1, false),
            (2023, 0, 1, false),
        ];

        for (year, month, day, passes) in cases {
            let version = Version::try_dated(year, month, day);
            if passes {
                assert_eq!(Ok(Version::dated(year, month, day)), version);
            } else {
                assert_eq!(
                    Err(VersionError::InvalidDateArguments { year, month, day }),
                    version
                );
            }
        }
    }

    #[test]
    fn try_post_reports_misuse() {
        let base = Version::semantic(0, 8, 0);

        let ok = Version::try_post(base, Target::Flat(9, 0), 2);
        assert_eq!(Ok(Version::post(base, Target::Flat(9, 0), 2)), ok);

        let dated_base = Version::try_post(Version::dated(2023, 1, 30), Target::Flat(9, 0), 2);
        assert!(matches!(
            dated_base,
            Err(VersionError::NightlyBaseNotSemantic { .. })
        ));

        let backward = Version::try_post(base, Target::Nested((0, 8), 0), 2);
        assert_eq!(
            Err(VersionError::TargetNotAfterBase {
                base: "0.8.0".to_string(),
                target: "0.8.0".to_string(),
            }),
            backward
        );
    }

    #[test]
    fn dated_on_matches_dated() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 30).unwrap();
        assert_eq!(Version::dated(2023, 1, 30), Version::dated_on(date));
    }
}
