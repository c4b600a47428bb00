use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{anyhow, Context, Result};

use super::joint_angles::{AnglePair, JointAngleSeries};
use crate::common::Timestamp;

pub const REPORT_COLUMNS: [&str; 9] = [
    "Timestamp",
    "Flexion (1-2)",
    "Flexion (2-3)",
    "Extension (1-2)",
    "Extension (2-3)",
    "Lateral Flexion (1-2)",
    "Lateral Flexion (2-3)",
    "Rotation (1-2)",
    "Rotation (2-3)",
];

/// Writes joint angle series as a tab separated table.
pub struct AngleReportWriter<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl AngleReportWriter<File> {
    pub fn create(file_path: &Path) -> Result<Self> {
        let file = File::create(file_path)
            .with_context(|| format!("failed to create {}", file_path.display()))?;
        Self::new(file)
    }
}

impl<W: Write> AngleReportWriter<W> {
    pub fn new(sink: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(sink);
        writer.write_record(REPORT_COLUMNS)?;

        Ok(Self { writer, rows: 0 })
    }

    pub fn write(&mut self, timestamp: Timestamp, angles: [AnglePair; 4]) -> Result<()> {
        let mut row = Vec::<String>::with_capacity(REPORT_COLUMNS.len());
        row.push(timestamp.to_string());
        for pair in angles {
            row.push(format_degrees(pair.pair_12));
            row.push(format_degrees(pair.pair_23));
        }
        self.writer.write_record(row)?;
        self.rows += 1;
        Ok(())
    }

    pub fn write_all(&mut self, series: &JointAngleSeries) -> Result<()> {
        for (timestamp, angles) in series.rows() {
            self.write(timestamp, angles)?;
        }
        Ok(())
    }

    /// Number of data rows written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|err| anyhow!("failed to flush angle report: {}", err.error()))
    }
}

// shortest round-trip form; the exponent is signed and at least two digits
// wide (`1e-07`, `1.5e+16`) to match numpy float text
fn format_degrees(value: f64) -> String {
    let shortest = format!("{:?}", value);
    let Some((mantissa, exponent)) = shortest.split_once('e') else {
        return shortest;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{}e{}{:0>2}", mantissa, sign, digits)
}
