//! Unit tests for toc-core primitives.

#[cfg(test)]
mod stage {
    use crate::{NUM_STAGES, Round, Stage, TocError};

    #[test]
    fn number_and_index() {
        let s = Stage::new(4).unwrap();
        assert_eq!(s.number(), 4);
        assert_eq!(s.index(), 3);
        assert_eq!(Stage::FIRST.index(), 0);
        assert_eq!(Stage::LAST.index(), NUM_STAGES - 1);
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(matches!(Stage::new(0), Err(TocError::InvalidStage(0))));
        assert!(matches!(Stage::try_from(7u8), Err(TocError::InvalidStage(7))));
    }

    #[test]
    fn all_in_line_order() {
        let numbers: Vec<u8> = Stage::all().map(Stage::number).collect();
        assert_eq!(numbers, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn display() {
        assert_eq!(Stage::new(2).unwrap().to_string(), "M2");
        assert_eq!(Round(3).to_string(), "R3");
        assert_eq!(Round::ZERO.next(), Round(1));
    }
}

#[cfg(test)]
mod stock {
    use crate::Stock;

    #[test]
    fn unbounded_counts_as_zero_in_sums() {
        assert_eq!(Stock::Unbounded.units_or_zero(), 0);
        assert_eq!(Stock::Units(7).units_or_zero(), 7);
    }

    #[test]
    fn limit_caps_by_capacity() {
        assert_eq!(Stock::Unbounded.limit(9), 9);
        assert_eq!(Stock::Units(3).limit(9), 3);
        assert_eq!(Stock::Units(12).limit(9), 9);
    }

    #[test]
    fn drain_and_receive() {
        assert_eq!(Stock::Units(5).drain(2), Stock::Units(3));
        assert_eq!(Stock::Units(1).drain(2), Stock::EMPTY);
        assert_eq!(Stock::Unbounded.drain(100), Stock::Unbounded);
        assert_eq!(Stock::Units(2).receive(4), Stock::Units(6));
        assert_eq!(Stock::Unbounded.receive(4), Stock::Units(4));
    }

    #[test]
    fn display() {
        assert_eq!(Stock::Unbounded.to_string(), "∞");
        assert_eq!(Stock::Units(11).to_string(), "11");
        assert!(Stock::Unbounded.as_f64().is_infinite());
    }
}

#[cfg(test)]
mod params {
    use crate::{
        BufferTarget, FinancialFormula, LeadTimeMethod, MIN_MONTE_CARLO_RUNS, ParameterSet,
        ReleaseMode, ReleasePolicy, Stage,
    };

    #[test]
    fn classic_defaults() {
        let p = ParameterSet::default();
        assert_eq!(p.capacity_factors, [2.0, 2.0, 2.0, 1.0, 2.0, 2.0]);
        assert_eq!(p.initial_buffers, [0; 5]);
        assert_eq!(p.seed, 12_345);
        assert_eq!(p.policy.mode, ReleaseMode::Push);
        assert_eq!(p.policy.bottleneck.number(), 4);
        assert_eq!(p.policy.target, BufferTarget::Days(3.0));
        assert_eq!(p.lead_time_method, LeadTimeMethod::LittlesLaw);
        assert_eq!(p.transfer_delay, 1);
    }

    #[test]
    fn mean_capacity_uses_half_die() {
        let p = ParameterSet::default();
        assert_eq!(p.mean_capacity(Stage::new(4).unwrap()), 3.5);
        assert_eq!(p.mean_capacity(Stage::FIRST), 7.0);
    }

    #[test]
    fn monte_carlo_runs_floor() {
        let p = ParameterSet { monte_carlo_runs: 3, ..ParameterSet::default() };
        assert_eq!(p.effective_monte_carlo_runs(), MIN_MONTE_CARLO_RUNS);
        let p = ParameterSet { monte_carlo_runs: 50, ..ParameterSet::default() };
        assert_eq!(p.effective_monte_carlo_runs(), 50);
    }

    #[test]
    fn lead_time_codes() {
        for code in 1..=4u8 {
            assert_eq!(LeadTimeMethod::try_from(code).unwrap().code(), code);
        }
        assert!(LeadTimeMethod::try_from(0).is_err());
        assert!(LeadTimeMethod::try_from(5).is_err());
    }

    #[test]
    fn with_policy_keeps_everything_else() {
        let p = ParameterSet::default();
        let dbr = ReleasePolicy::constrained(Stage::new(3).unwrap(), BufferTarget::Pieces(8));
        let q = p.with_policy(dbr);
        assert!(q.is_constrained());
        assert_eq!(q.seed, p.seed);
        assert_eq!(q.capacity_factors, p.capacity_factors);
    }

    #[test]
    fn profit_formulas() {
        let p = ParameterSet { sell_price: 4.0, variable_cost: 1.0, ..ParameterSet::default() };
        let rev = FinancialFormula::RevenueLessFixed.operating_profit(&p, 40.0, 5.0, 2.0, 10);
        let toc = FinancialFormula::Toc.operating_profit(&p, 40.0, 5.0, 2.0, 10);
        let net = FinancialFormula::NetOfCosts.operating_profit(&p, 40.0, 5.0, 2.0, 10);
        assert_eq!(rev, 35.0);
        assert_eq!(toc, 25.0);
        assert_eq!(net, 23.0);
    }
}

#[cfg(test)]
mod rng {
    use rand::{Rng, RngCore, SeedableRng};

    use crate::rng::LEAD_TIME_STREAM_OFFSET;
    use crate::{DiceRng, Mulberry32};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = DiceRng::new(12_345);
        let mut r2 = DiceRng::new(12_345);
        for _ in 0..100 {
            assert_eq!(r1.next_unit(), r2.next_unit());
        }
    }

    #[test]
    fn mulberry32_reference_value() {
        // First output of Mulberry32 seeded with 0.
        let mut r = Mulberry32::new(0);
        assert_eq!(r.next_u32(), 1_144_304_738);
    }

    #[test]
    fn units_in_half_open_interval() {
        let mut rng = DiceRng::new(7);
        for _ in 0..10_000 {
            let u = rng.next_unit();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn rolls_cover_all_faces() {
        let mut rng = DiceRng::new(99);
        let mut seen = [false; 6];
        for _ in 0..1_000 {
            let d = rng.roll();
            assert!((1..=6).contains(&d));
            seen[d as usize - 1] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn lead_time_stream_is_offset_seed() {
        let mut a = DiceRng::lead_time_stream(5);
        let mut b = DiceRng::new(5 + LEAD_TIME_STREAM_OFFSET);
        assert_eq!(a.roll_line(), b.roll_line());
        // Wraps instead of overflowing.
        let _ = DiceRng::lead_time_stream(u32::MAX);
    }

    #[test]
    fn works_with_rand_api() {
        let mut r = Mulberry32::from_seed(42u32.to_le_bytes());
        let v: u8 = r.gen_range(1..=6);
        assert!((1..=6).contains(&v));
        let mut buf = [0u8; 7];
        r.fill_bytes(&mut buf);
    }
}

#[cfg(test)]
mod state {
    use crate::{ParameterSet, Round, SimulationState, Stock};

    #[test]
    fn initial_from_params() {
        let p = ParameterSet { initial_buffers: [1, 2, 3, 4, 5], ..ParameterSet::default() };
        let s = SimulationState::initial(&p);
        assert_eq!(s.round, Round::ZERO);
        assert_eq!(s.pre_round[0], Stock::Unbounded);
        assert_eq!(s.pre_round[1..], [1, 2, 3, 4, 5].map(Stock::Units));
        assert_eq!(s.next_pre_round, s.pre_round);
        assert_eq!(s.production, [0; 6]);
        assert_eq!(s.work_in_process, 15);
        assert_eq!(s.mean_throughput(), 0.0);
        assert_eq!(s.buffers().len(), 5);
    }
}
