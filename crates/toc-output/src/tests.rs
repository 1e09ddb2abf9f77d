//! Tests for toc-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;
    use toc_core::{ParameterSet, SimulationState};

    use crate::csv::{CsvWriter, ROUND_HEADER};
    use crate::row::RoundRow;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn row(round: u64) -> RoundRow {
        RoundRow {
            round,
            dice:         [1, 2, 3, 4, 5, 6],
            production:   [2, 4, 6, 4, 10, 12],
            buffers:      [0, 1, 2, 3, 4],
            throughput:   12,
            wip:          10,
            lead_time:    2.0 / 3.0,
            revenue:      48.0,
            holding_cost: 1.234,
            fixed_cost:   0.5,
            profit:       47.5,
        }
    }

    #[test]
    fn csv_file_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("rounds.csv").exists());
    }

    #[test]
    fn csv_header_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("rounds.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ROUND_HEADER);
    }

    #[test]
    fn csv_row_formatting() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_round(&row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("rounds.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        let r = &rows[0];
        assert_eq!(r.len(), ROUND_HEADER.len());
        assert_eq!(&r[0], "3");       // round
        assert_eq!(&r[6], "6");       // d6
        assert_eq!(&r[12], "12");     // x6
        assert_eq!(&r[17], "4");      // b6_ini
        assert_eq!(&r[20], "0.6667"); // lead
        assert_eq!(&r[22], "1.23");   // holding cost
        assert_eq!(&r[24], "47.50");  // profit
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn row_from_initial_state() {
        let params = ParameterSet { initial_buffers: [5, 0, 0, 7, 0], ..ParameterSet::default() };
        let r = RoundRow::from(&SimulationState::initial(&params));
        assert_eq!(r.round, 0);
        assert_eq!(r.buffers, [5, 0, 0, 7, 0]);
        assert_eq!(r.wip, 12);
        assert_eq!(r.dice, [0; 6]);
    }
}

#[cfg(test)]
mod observer_tests {
    use tempfile::TempDir;
    use toc_core::ParameterSet;
    use toc_sim::Line;

    use crate::{CsvWriter, LineOutputObserver, OutputError, OutputResult, OutputWriter, RoundRow};

    /// Fails every write after the first `ok` rows.
    struct FlakyWriter {
        ok:      usize,
        written: usize,
    }

    impl OutputWriter for FlakyWriter {
        fn write_round(&mut self, _row: &RoundRow) -> OutputResult<()> {
            if self.written >= self.ok {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.written += 1;
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn one_row_per_round() {
        let dir = TempDir::new().unwrap();
        let mut obs = LineOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        let mut line = Line::new(ParameterSet::default());
        line.run_rounds(25, &mut obs);
        obs.finish().unwrap();
        assert_eq!(obs.rows_written(), 25);

        let mut rdr = csv::Reader::from_path(dir.path().join("rounds.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 25);
        assert_eq!(&rows[0][0], "1");
        assert_eq!(&rows[24][0], "25");
        // Round 1 is always starved at the last machine.
        assert_eq!(&rows[0][18], "0");
    }

    #[test]
    fn first_error_kept() {
        let mut obs = LineOutputObserver::new(FlakyWriter { ok: 2, written: 0 });
        let mut line = Line::new(ParameterSet::default());
        line.run_rounds(5, &mut obs);
        assert_eq!(obs.rows_written(), 2);
        assert!(obs.finish().is_err());
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().written, 2);
    }
}
