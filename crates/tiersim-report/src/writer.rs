//! The `ReportWriter` trait implemented by all reporters.

use tiersim_engine::MetricsRecord;

use crate::OutputResult;

/// Trait implemented by the CSV and console reporters.
///
/// All methods are infallible from the engine's perspective — the
/// [`ReportSink`][crate::ReportSink] adapter stores errors and hands them
/// back after the run.
pub trait ReportWriter {
    /// Write one round row.
    fn write_record(&mut self, record: &MetricsRecord) -> OutputResult<()>;

    /// Flush and close whatever the reporter holds open.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Fan-out to two reporters, e.g. console plus CSV.
///
/// The first reporter's error short-circuits the second, so on failure the
/// pair may diverge by one row; the stored error tells you which run to
/// distrust.
impl<A: ReportWriter, B: ReportWriter> ReportWriter for (A, B) {
    fn write_record(&mut self, record: &MetricsRecord) -> OutputResult<()> {
        self.0.write_record(record)?;
        self.1.write_record(record)
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.0.finish()?;
        self.1.finish()
    }
}
