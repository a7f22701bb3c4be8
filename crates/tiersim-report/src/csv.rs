//! CSV reporter.
//!
//! Rows are serde-serialized [`MetricsRecord`]s, so the header line comes
//! straight from the record's column renames and can never drift from the
//! schema.

use std::fs;
use std::fs::File;
use std::io;
use std::path::Path;

use csv::Writer;
use tiersim_engine::MetricsRecord;

use crate::writer::ReportWriter;
use crate::{OutputError, OutputResult};

/// Writes round metrics to one CSV stream.
pub struct CsvReporter<W: io::Write> {
    inner:    Writer<W>,
    finished: bool,
}

impl CsvReporter<File> {
    /// Create (or truncate) `path`, creating parent directories as needed.
    pub fn create(path: &Path) -> OutputResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self { inner: Writer::from_path(path)?, finished: false })
    }
}

impl<W: io::Write> CsvReporter<W> {
    /// Wrap any `Write`, e.g. a `Vec<u8>` in tests.
    pub fn from_writer(writer: W) -> Self {
        Self { inner: Writer::from_writer(writer), finished: false }
    }

    /// Flush and recover the underlying writer.
    pub fn into_inner(self) -> OutputResult<W> {
        self.inner
            .into_inner()
            .map_err(|e| OutputError::Io(e.into_error()))
    }
}

impl<W: io::Write> ReportWriter for CsvReporter<W> {
    fn write_record(&mut self, record: &MetricsRecord) -> OutputResult<()> {
        self.inner.serialize(record)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }
}
