use microlog_api::{Arg, DebugLog, ErrorReporter};

use crate::printf::debug_log_printf;

/// An [`ErrorReporter`] writing every report straight to a [`DebugLog`] backend.
///
/// Reports always succeed with status `0`, the backend has no way to signal failure.
///
/// The reporter is not `Clone`, share it by reference instead:
///
/// ```rust,compile_fail
/// use microlog::MicroErrorReporter;
/// use microlog::test_helpers::RecordingLog;
///
/// let reporter = MicroErrorReporter::new(RecordingLog::new());
/// let copy: MicroErrorReporter<RecordingLog> = reporter.clone();
/// ```
///
/// # Examples
///
/// ```rust
/// use microlog::test_helpers::RecordingLog;
/// use microlog::{ErrorReporter, MicroErrorReporter, report};
///
/// fn allocate(reporter: &dyn ErrorReporter, requested: i32, available: i32) {
///     report!(reporter, "Requested %d bytes, only %d available", requested, available);
/// }
///
/// let backend = RecordingLog::new();
/// let reporter = MicroErrorReporter::new(backend.clone());
/// allocate(&reporter, 1024, 512);
///
/// assert_eq!(backend.rendered(), "Requested 1024 bytes, only 512 available\r\n");
/// ```
#[derive(Debug)]
pub struct MicroErrorReporter<B> {
    backend: B,
}

impl<B> MicroErrorReporter<B> {
    /// Creates a reporter writing to `backend`.
    ///
    /// The backend is not initialized, see [`init`](Self::init).
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Returns the backend this reporter writes to.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B> MicroErrorReporter<B>
where
    B: DebugLog,
{
    /// Initializes the backend.
    pub fn init(&self) {
        self.backend.init();
    }
}

impl<B> ErrorReporter for MicroErrorReporter<B>
where
    B: DebugLog,
{
    fn report(&self, format: &str, args: &[Arg<'_>]) -> i32 {
        debug_log_printf(&self.backend, format, args);
        0
    }
}
