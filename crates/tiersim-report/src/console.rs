//! Console reporter: a left-aligned table on any `Write`.
//!
//! The header and the dash rule print together with the first record, each
//! column sized to the wider of its label and its first value. Widths stay
//! frozen after that, so a late wide value can overhang its column — the
//! table stays readable and nothing is ever truncated.

use std::io;
use std::io::Write;

use tiersim_engine::MetricsRecord;

use crate::writer::ReportWriter;
use crate::OutputResult;

/// Column labels, in record order. Must agree with the record's serde
/// renames so the console and the CSV describe the same schema.
pub const LABELS: [&str; 19] = [
    "Round",
    "Devices",
    "Workload",
    "Avg_Pos",
    "Handovers",
    "HO_Delay(ms)",
    "Signal(dB)",
    "CPU (%)",
    "Memory (%)",
    "Storage (%)",
    "Paradigm",
    "Avg_Tx(ms)",
    "Avg_Prop(ms)",
    "Tx_Cost",
    "Proc_Cost",
    "Energy",
    "Conges(%)",
    "Flag",
    "Failed",
];

/// Writes round metrics as an aligned text table.
pub struct ConsoleReporter<W: io::Write> {
    out:    W,
    widths: Option<Vec<usize>>,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: io::Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, widths: None }
    }

    /// Recover the underlying writer, e.g. to inspect test output.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: io::Write> ReportWriter for ConsoleReporter<W> {
    fn write_record(&mut self, record: &MetricsRecord) -> OutputResult<()> {
        let cells = cells(record);

        if self.widths.is_none() {
            let widths: Vec<usize> = LABELS
                .iter()
                .zip(cells.iter())
                .map(|(label, cell)| label.len().max(cell.len()))
                .collect();
            let header: Vec<String> = LABELS
                .iter()
                .zip(&widths)
                .map(|(label, &w)| format!("{label:<w$}"))
                .collect();
            writeln!(self.out, "{}", header.join(" | "))?;
            let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
            writeln!(self.out, "{}", rule.join("-+-"))?;
            self.widths = Some(widths);
        }

        if let Some(widths) = &self.widths {
            let row: Vec<String> = cells
                .iter()
                .zip(widths)
                .map(|(cell, &w)| format!("{cell:<w$}"))
                .collect();
            writeln!(self.out, "{}", row.join(" | "))?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Format one record into table cells: two decimals for every float
/// column, four for energy, plain display for the rest.
fn cells(r: &MetricsRecord) -> [String; 19] {
    [
        r.round.to_string(),
        r.devices.to_string(),
        format!("{:.2}", r.workload_kb),
        format!("{:.2}", r.avg_position),
        r.handovers.to_string(),
        format!("{:.2}", r.handover_delay_ms),
        format!("{:.2}", r.signal_db),
        format!("{:.2}", r.cpu_pct),
        format!("{:.2}", r.memory_pct),
        format!("{:.2}", r.storage_pct),
        r.paradigm.clone(),
        format!("{:.2}", r.avg_tx_ms),
        format!("{:.2}", r.avg_prop_ms),
        format!("{:.2}", r.tx_cost),
        format!("{:.2}", r.proc_cost),
        format!("{:.4}", r.energy),
        format!("{:.2}", r.congestion_pct),
        r.flag.to_string(),
        r.failed.to_string(),
    ]
}
