//! CSV output backend.
//!
//! Creates `rounds.csv` in the configured output directory, one row per
//! round.  Lead time is written with 4 decimals, money with 2.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, RoundRow};

/// Column names, in write order.
pub const ROUND_HEADER: [&str; 25] = [
    "round",
    "d1", "d2", "d3", "d4", "d5", "d6",
    "x1", "x2", "x3", "x4", "x5", "x6",
    "b2_ini", "b3_ini", "b4_ini", "b5_ini", "b6_ini",
    "th", "wip", "lead", "revenue", "holding_cost", "fixed_cost", "profit",
];

/// Writes round rows to a CSV file.
pub struct CsvWriter {
    rounds:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) `rounds.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut rounds = Writer::from_path(dir.join("rounds.csv"))?;
        rounds.write_record(ROUND_HEADER)?;
        Ok(Self { rounds, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_round(&mut self, row: &RoundRow) -> OutputResult<()> {
        let mut record: Vec<String> = Vec::with_capacity(ROUND_HEADER.len());
        record.push(row.round.to_string());
        record.extend(row.dice.iter().map(u8::to_string));
        record.extend(row.production.iter().map(u32::to_string));
        record.extend(row.buffers.iter().map(u32::to_string));
        record.push(row.throughput.to_string());
        record.push(row.wip.to_string());
        record.push(format!("{:.4}", row.lead_time));
        record.push(format!("{:.2}", row.revenue));
        record.push(format!("{:.2}", row.holding_cost));
        record.push(format!("{:.2}", row.fixed_cost));
        record.push(format!("{:.2}", row.profit));
        self.rounds.write_record(&record)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rounds.flush()?;
        Ok(())
    }
}
