/// Errors from the checked constructor variants ([`try_dated`] and
/// [`try_post`]). The primary constructors assert their contracts instead and
/// never return these.
///
/// [`try_dated`]: crate::Version::try_dated
/// [`try_post`]: crate::Version::try_post
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum VersionError {
    /// The year, month, and day arguments don't name a real calendar date.
    #[error("explicit year ({year}), month ({month}), and day ({day}) arguments cannot be made into a valid date")]
    InvalidDateArguments {
        /// The offending year argument.
        year: u32,
        /// The offending month argument.
        month: u32,
        /// The offending day argument.
        day: u32,
    },

    /// A nightly snapshot was given a base that isn't a numbered release.
    #[error("a nightly's base should be a numbered release, but `{base}` is not")]
    NightlyBaseNotSemantic {
        /// The rendering of the offending base version.
        base: String,
    },

    /// A nightly snapshot was given a target at or before its base.
    #[error("a nightly's target `{target}` should come after its base `{base}`")]
    TargetNotAfterBase {
        /// The rendering of the snapshot's base release.
        base: String,
        /// The rendering of the resolved target release.
        target: String,
    },
}
