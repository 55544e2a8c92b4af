/// ProgressReporter port for operational messages
///
/// Everything the tool has to say while it works goes through this port, so
/// stdout stays reserved for the report itself.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports progress of a multi-step operation, e.g. scope reconstruction
    ///
    /// # Arguments
    /// * `current` - Steps done so far
    /// * `total` - Total number of steps
    /// * `message` - Optional label for the current step
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
