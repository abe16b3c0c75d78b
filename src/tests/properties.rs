//! Property-based checks of the censored concordance index.
//!
//! Times and estimates are drawn from small integer grids so that tied times
//! and tied risks occur often.

#[cfg(test)]
mod tests {
    use crate::concordance::censored::{
        concordance_index_censored_core, concordance_index_censored_weighted_core,
    };
    use crate::concordance::error::ConcordanceError;
    use crate::constants::{DEFAULT_TIED_TOL, TEST_STANDARD_TOL};
    use itertools::{izip, multiunzip};
    use proptest::prelude::*;

    type Dataset = (Vec<f64>, Vec<bool>, Vec<f64>);

    #[derive(Debug, Default, PartialEq)]
    struct PairCounts {
        concordant: usize,
        discordant: usize,
        tied_risk: usize,
        tied_time: usize,
    }

    /// O(n^2) reference: every ordered pair judged from the definition.
    fn brute_force(time: &[f64], event: &[bool], estimate: &[f64]) -> PairCounts {
        let mut counts = PairCounts::default();
        for i in 0..time.len() {
            if !event[i] {
                continue;
            }
            for j in 0..time.len() {
                if i == j {
                    continue;
                }
                let comparable = time[j] > time[i] || (time[j] == time[i] && !event[j]);
                if !comparable {
                    continue;
                }
                if time[j] == time[i] {
                    counts.tied_time += 1;
                }
                if (estimate[j] - estimate[i]).abs() <= DEFAULT_TIED_TOL {
                    counts.tied_risk += 1;
                } else if estimate[j] < estimate[i] {
                    counts.concordant += 1;
                } else {
                    counts.discordant += 1;
                }
            }
        }
        counts
    }

    fn arb_sample() -> impl Strategy<Value = (f64, bool, f64)> {
        (0u8..12, any::<bool>(), 0u8..8).prop_map(|(t, e, s)| (f64::from(t), e, f64::from(s) * 0.25))
    }

    fn arb_dataset() -> impl Strategy<Value = Dataset> {
        prop::collection::vec(arb_sample(), 2..40)
            .prop_map(|rows: Vec<(f64, bool, f64)>| -> Dataset { multiunzip(rows) })
    }

    fn arb_distinct_risk() -> impl Strategy<Value = Dataset> {
        (2usize..30)
            .prop_flat_map(|n| {
                (
                    prop::collection::vec(0u8..10, n),
                    prop::collection::vec(any::<bool>(), n),
                    Just((0..n).map(|i| i as f64).collect::<Vec<f64>>()).prop_shuffle(),
                )
            })
            .prop_map(|(t, e, s)| (t.into_iter().map(f64::from).collect(), e, s))
    }

    fn arb_distinct_times() -> impl Strategy<Value = (Vec<f64>, Vec<bool>)> {
        (
            prop::collection::btree_set(0u16..1000, 2..30),
            prop::collection::vec(any::<bool>(), 30),
        )
            .prop_map(|(times, events)| {
                let time: Vec<f64> = times.into_iter().map(f64::from).collect();
                let mut event = events[..time.len()].to_vec();
                event[0] = true;
                (time, event)
            })
    }

    proptest! {
        #[test]
        fn prop_matches_brute_force((time, event, estimate) in arb_dataset()) {
            prop_assume!(event.iter().any(|&e| e));
            let expected = brute_force(&time, &event, &estimate);
            match concordance_index_censored_core(&event, &time, &estimate, DEFAULT_TIED_TOL) {
                Ok(r) => {
                    let got = PairCounts {
                        concordant: r.concordant,
                        discordant: r.discordant,
                        tied_risk: r.tied_risk,
                        tied_time: r.tied_time,
                    };
                    prop_assert_eq!(got, expected);
                }
                Err(ConcordanceError::NoComparablePairs) => {
                    prop_assert_eq!(
                        expected.concordant + expected.discordant + expected.tied_risk,
                        0
                    );
                }
                Err(e) => prop_assert!(false, "unexpected error: {}", e),
            }
        }

        #[test]
        fn prop_range_and_pair_conservation((time, event, estimate) in arb_dataset()) {
            prop_assume!(event.iter().any(|&e| e));
            if let Ok(r) = concordance_index_censored_core(&event, &time, &estimate, DEFAULT_TIED_TOL) {
                prop_assert!((0.0..=1.0).contains(&r.c_index));
                prop_assert_eq!(r.comparable_pairs() as f64, r.denominator);
                prop_assert!(r.tied_time <= r.comparable_pairs());
            }
        }

        #[test]
        fn prop_negation_symmetry((time, event, estimate) in arb_distinct_risk()) {
            prop_assume!(event.iter().any(|&e| e));
            let negated: Vec<f64> = estimate.iter().map(|s| -s).collect();
            let forward = concordance_index_censored_core(&event, &time, &estimate, DEFAULT_TIED_TOL);
            let backward = concordance_index_censored_core(&event, &time, &negated, DEFAULT_TIED_TOL);
            if let (Ok(f), Ok(b)) = (forward, backward) {
                prop_assert_eq!(f.tied_risk, 0);
                prop_assert_eq!(f.concordant, b.discordant);
                prop_assert_eq!(f.discordant, b.concordant);
                prop_assert!((f.c_index - (1.0 - b.c_index)).abs() < TEST_STANDARD_TOL);
            }
        }

        #[test]
        fn prop_perfect_ranking((time, event) in arb_distinct_times()) {
            let estimate: Vec<f64> = time.iter().map(|t| -t).collect();
            let r = concordance_index_censored_core(&event, &time, &estimate, DEFAULT_TIED_TOL).unwrap();
            prop_assert_eq!(r.tied_risk, 0);
            prop_assert_eq!(r.discordant, 0);
            prop_assert!((r.c_index - 1.0).abs() < TEST_STANDARD_TOL);
        }

        #[test]
        fn prop_all_tied_risk_is_half((time, event, _) in arb_dataset(), level in -5.0f64..5.0) {
            prop_assume!(event.iter().any(|&e| e));
            let estimate = vec![level; time.len()];
            if let Ok(r) = concordance_index_censored_core(&event, &time, &estimate, DEFAULT_TIED_TOL) {
                prop_assert_eq!(r.tied_risk, r.comparable_pairs());
                prop_assert!((r.c_index - 0.5).abs() < TEST_STANDARD_TOL);
            }
        }

        #[test]
        fn prop_constant_weight_neutral((time, event, estimate) in arb_dataset(), w in 0.01f64..100.0) {
            prop_assume!(event.iter().any(|&e| e));
            let weights = vec![w; time.len()];
            let plain = concordance_index_censored_core(&event, &time, &estimate, DEFAULT_TIED_TOL);
            let weighted = concordance_index_censored_weighted_core(
                &event, &time, &estimate, &weights, DEFAULT_TIED_TOL,
            );
            match (plain, weighted) {
                (Ok(p), Ok(q)) => {
                    prop_assert!((p.c_index - q.c_index).abs() < TEST_STANDARD_TOL);
                    prop_assert_eq!(p.concordant, q.concordant);
                }
                (Err(p), Err(q)) => prop_assert_eq!(p, q),
                (p, q) => prop_assert!(false, "mismatch: {:?} vs {:?}", p, q),
            }
        }

        #[test]
        fn prop_sample_order_irrelevant((time, event, estimate) in arb_dataset()) {
            prop_assume!(event.iter().any(|&e| e));
            let (rt, re, rs): Dataset =
                multiunzip(izip!(&time, &event, &estimate).rev().map(|(&t, &e, &s)| (t, e, s)));
            let forward = concordance_index_censored_core(&event, &time, &estimate, DEFAULT_TIED_TOL);
            let reversed = concordance_index_censored_core(&re, &rt, &rs, DEFAULT_TIED_TOL);
            match (forward, reversed) {
                (Ok(f), Ok(r)) => {
                    prop_assert_eq!(f.concordant, r.concordant);
                    prop_assert_eq!(f.discordant, r.discordant);
                    prop_assert_eq!(f.tied_risk, r.tied_risk);
                    prop_assert_eq!(f.tied_time, r.tied_time);
                }
                (Err(f), Err(r)) => prop_assert_eq!(f, r),
                (f, r) => prop_assert!(false, "mismatch: {:?} vs {:?}", f, r),
            }
        }
    }
}
