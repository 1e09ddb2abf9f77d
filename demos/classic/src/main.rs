//! classic — the dice game as played in a TOC classroom.
//!
//! Runs the six-machine line under push release, then switches the same
//! line to Drum-Buffer-Rope mid-game without resetting, and writes every
//! round to `./output/rounds.csv`.
//!
//! ```text
//! cargo run -p classic -- [params.json] [rounds-per-phase]
//! ```
//!
//! Set `RUST_LOG=debug` to see one log line per round.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use toc_core::{BufferTarget, LeadTimeMethod, ParameterSet, ReleasePolicy, SimulationState};
use toc_flow::{LeadTimeContext, LeadTimeEstimator, buffer_target_pieces};
use toc_output::{CsvWriter, LineOutputObserver, OutputWriter};
use toc_sim::{Line, LineObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_ROUNDS: u64 = 20;
const OUTPUT_DIR:     &str = "output";
const PRINT_EVERY:    u64 = 5;

// ── Observer wrapper to print progress ───────────────────────────────────────

struct BoardPrinter<W: OutputWriter> {
    inner: LineOutputObserver<W>,
}

impl<W: OutputWriter> LineObserver for BoardPrinter<W> {
    fn on_round_end(&mut self, state: &SimulationState) {
        self.inner.on_round_end(state);
        if state.round.0 % PRINT_EVERY == 0 {
            print_board(state);
        }
    }

    fn on_policy_change(&mut self, state: &SimulationState) {
        println!("  → release view for next round: {}", state.release_view);
    }
}

fn print_board(state: &SimulationState) {
    let buffers: Vec<String> = state.buffers().iter().map(ToString::to_string).collect();
    println!(
        "{}  dice {:?}  prod {:?}  buffers [{}]  TH {:>2}  WIP {:>3}  LT {:>6.2}  profit {:>8.2}",
        state.round,
        state.dice,
        state.production,
        buffers.join(", "),
        state.throughput,
        state.work_in_process,
        state.lead_time,
        state.ledger.operating_profit,
    );
}

fn load_params(path: Option<&Path>) -> Result<ParameterSet> {
    let Some(path) = path else {
        return Ok(ParameterSet::default());
    };
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let params: ParameterSet = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(params)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let params_path = args.next().map(PathBuf::from);
    let rounds: u64 = match args.next() {
        Some(n) => n.parse().context("rounds-per-phase must be a whole number")?,
        None => DEFAULT_ROUNDS,
    };

    let params = load_params(params_path.as_deref())?;

    println!("=== classic — dice game production line ===");
    println!(
        "Factors: {:?}  |  Seed: {}  |  Lead time: {}  |  Rounds per phase: {rounds}",
        params.capacity_factors, params.seed, params.lead_time_method,
    );
    println!();

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = BoardPrinter { inner: LineOutputObserver::new(writer) };

    let bottleneck = params.policy.bottleneck;
    let mut line = Line::new(params);
    let start = Instant::now();

    // 1. Push: every machine runs flat out.
    println!("-- Phase 1: push release --");
    line.run_rounds(rounds, &mut obs);
    let push_end = line.snapshot();

    // 2. Same line, Drum-Buffer-Rope from here on.
    println!();
    println!("-- Phase 2: DBR protecting {bottleneck} --");
    line.apply_policy(ReleasePolicy::constrained(bottleneck, BufferTarget::Days(3.0)), &mut obs);
    println!("  buffer target: {} pieces", buffer_target_pieces(line.params()));
    line.run_rounds(rounds, &mut obs);

    obs.inner.finish().context("writing rounds.csv")?;
    info!(rounds = line.round().0, elapsed_ms = start.elapsed().as_millis() as u64, "run finished");

    // 3. Summary.
    let end = line.state();
    println!();
    println!("=== Summary ===");
    println!(
        "Throughput: {} after push phase, {} at end (mean {:.3}/round)",
        push_end.cumulative_throughput,
        end.cumulative_throughput,
        end.mean_throughput(),
    );
    println!("WIP: {} after push phase, {} at end", push_end.work_in_process, end.work_in_process);
    println!(
        "Revenue {:.2}  |  Fixed {:.2}  |  Holding {:.2}  |  Profit {:.2}  |  ROI {:.2}%",
        end.ledger.revenue,
        end.ledger.fixed_cost,
        end.ledger.holding_cost,
        end.ledger.operating_profit,
        end.ledger.roi * 100.0,
    );

    // Every estimator on the final snapshot, for comparison.
    let ctx = LeadTimeContext {
        work_in_process: end.work_in_process,
        mean_throughput: end.mean_throughput(),
        pre_round:       &end.pre_round,
    };
    println!("Lead time by method:");
    for code in 1..=4u8 {
        let method = LeadTimeMethod::try_from(code)?;
        let name = method.to_string();
        println!("  {code}) {name:<12} {:>7.2}", method.estimate(line.params(), &ctx));
    }
    println!("Rows written: {}  →  {OUTPUT_DIR}/rounds.csv", obs.inner.rows_written());

    // The bottleneck's own mean capacity caps the line.
    let cap = line.params().mean_capacity(bottleneck);
    println!("Mean capacity at {bottleneck}: {cap:.1}/round");

    Ok(())
}
