//! `tiersim-report` — round-metrics output for the tiersim engine.
//!
//! | Module      | Contents                                             |
//! |-------------|------------------------------------------------------|
//! | [`writer`]  | The `ReportWriter` trait and tuple fan-out           |
//! | [`csv`]     | `CsvReporter` — serde rows, header from the schema   |
//! | [`console`] | `ConsoleReporter` — aligned table on any `Write`     |
//! | [`sink`]    | `ReportSink` — adapts a writer to `MetricsSink`      |
//! | [`error`]   | `OutputError`, `OutputResult<T>`                     |
//!
//! # Usage
//!
//! ```rust,ignore
//! use tiersim_report::{ConsoleReporter, CsvReporter, ReportSink};
//!
//! let writers = (
//!     ConsoleReporter::stdout(),
//!     CsvReporter::create(Path::new("results/round_metrics.csv"))?,
//! );
//! let mut sink = ReportSink::new(writers);
//! sim.run(&mut sink);
//! if let Some(e) = sink.take_error() {
//!     eprintln!("report error: {e}");
//! }
//! ```

pub mod console;
pub mod csv;
pub mod error;
pub mod sink;
pub mod writer;


pub use console::ConsoleReporter;
pub use csv::CsvReporter;
pub use error::{OutputError, OutputResult};
pub use sink::ReportSink;
pub use writer::ReportWriter;
