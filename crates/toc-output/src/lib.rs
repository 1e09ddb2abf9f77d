//! `toc-output` — round export for the dice-game simulator.
//!
//! | Backend | Files created |
//! |---------|---------------|
//! | CSV     | `rounds.csv`  |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`LineOutputObserver`], which implements `toc_sim::LineObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use toc_output::{CsvWriter, LineOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = LineOutputObserver::new(writer);
//! line.run_rounds(50, &mut obs);
//! obs.finish().unwrap();
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::LineOutputObserver;
pub use row::RoundRow;
pub use writer::OutputWriter;
