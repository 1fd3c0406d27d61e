/// Reports a printf-style message through an [`ErrorReporter`](crate::ErrorReporter), returning its status.
///
/// Each argument is converted with [`Arg::from`](crate::Arg), so integers up to 32 bits, `&str` and floats can be
/// passed directly.
///
/// # Examples
///
/// ```rust
/// use microlog::test_helpers::RecordingLog;
/// use microlog::{MicroErrorReporter, report};
///
/// let backend = RecordingLog::new();
/// let reporter = MicroErrorReporter::new(backend.clone());
///
/// report!(reporter, "Didn't find op for builtin opcode '%s'", "CONV_2D");
/// report!(reporter, "Tensor %d has scale %f", 3u8, 0.5f32);
/// report!(reporter, "Invoke failed");
///
/// assert_eq!(
///     backend.rendered(),
///     "Didn't find op for builtin opcode 'CONV_2D'\r\nTensor 3 has scale 0.5\r\nInvoke failed\r\n",
/// );
/// ```
#[macro_export]
macro_rules! report {
    ($reporter:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::ErrorReporter::report(&$reporter, $format, &[$($crate::Arg::from($arg)),*])
    };
}
