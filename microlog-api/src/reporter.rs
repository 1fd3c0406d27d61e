//! The error reporting capability.

use crate::Arg;

/// Reports a printf-style message.
///
/// Reporters are shared by reference, usually as `&dyn ErrorReporter`.
///
/// # Example
///
/// ```rust
/// use microlog_api::{Arg, ErrorReporter};
///
/// struct Discard;
///
/// impl ErrorReporter for Discard {
///     fn report(&self, _format: &str, _args: &[Arg<'_>]) -> i32 {
///         0
///     }
/// }
///
/// let reporter: &dyn ErrorReporter = &Discard;
/// assert_eq!(reporter.report("tensor %s has %d dims", &[Arg::Text("input"), Arg::Int(4)]), 0);
/// ```
pub trait ErrorReporter {
    /// Renders `format` with `args` and returns a status code, `0` meaning success.
    ///
    /// `%d`, `%s` and `%f` take the next [`Arg`] in order.
    fn report(&self, format: &str, args: &[Arg<'_>]) -> i32;
}

impl<T> ErrorReporter for &T
where
    T: ErrorReporter + ?Sized,
{
    fn report(&self, format: &str, args: &[Arg<'_>]) -> i32 {
        (**self).report(format, args)
    }
}
