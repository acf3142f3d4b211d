/// DiagnosticReporter port for surfacing what happened during a run
///
/// Warnings and notices are never fatal; they tell the user which entry,
/// region or input was skipped or adjusted. Implementations write them
/// somewhere visible without interfering with stdout output.
pub trait DiagnosticReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports a recoverable problem (skipped entry, missing region, ...)
    ///
    /// # Arguments
    /// * `message` - The warning message
    fn report_warning(&self, message: &str);

    /// Reports a user-facing notice raised by an action
    fn report_notice(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
