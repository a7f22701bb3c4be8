//! `ReportSink<W>` — bridges `MetricsSink` to a `ReportWriter`.

use tiersim_engine::{MetricsRecord, MetricsSink};

use crate::writer::ReportWriter;
use crate::{OutputError, OutputResult};

/// A [`MetricsSink`] that forwards every record to a [`ReportWriter`].
///
/// Writer errors are stored internally because sink methods have no return
/// value. After the run, check with [`take_error`][Self::take_error]; only
/// the first error is kept, since everything after it describes the same
/// broken stream.
pub struct ReportSink<W: ReportWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: ReportWriter> ReportSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after the run.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer, e.g. to inspect what was written.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: ReportWriter> MetricsSink for ReportSink<W> {
    fn record(&mut self, record: &MetricsRecord) {
        let result = self.writer.write_record(record);
        self.store_err(result);
    }

    fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
