/// ProgressReporter port for reporting progress during resolution
///
/// Progress goes to a side channel (stderr for the CLI) so that stdout only
/// carries the resolved references.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports step progress
    ///
    /// # Arguments
    /// * `current` - Number of completed steps
    /// * `total` - Total number of steps
    /// * `message` - Optional message describing the current step
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
