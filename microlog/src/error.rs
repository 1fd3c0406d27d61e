use microlog_api::ArgKind;

use crate::printf::Specifier;

/// A mismatch between a format string and its arguments, found by [`check`](crate::printf::check).
///
/// Formatting itself never fails, these only describe how the output will deviate from the intent.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum FormatError {
    /// A conversion has no argument left to consume.
    #[error("conversion {index} ({specifier}) has no argument")]
    MissingArgument {
        /// Position of the conversion among all conversions, starting at 0.
        index: usize,
        /// The conversion.
        specifier: Specifier,
    },
    /// A conversion is paired with an argument of a different kind.
    #[error("conversion {index} expects {expected} but the argument is {found}")]
    MismatchedArgument {
        /// Position of the conversion among all conversions, starting at 0.
        index: usize,
        /// The kind the conversion consumes.
        expected: ArgKind,
        /// The kind that was passed.
        found: ArgKind,
    },
    /// More arguments were passed than the format string consumes.
    #[error("{count} argument(s) are never used")]
    UnusedArguments {
        /// Number of surplus arguments.
        count: usize,
    },
}
