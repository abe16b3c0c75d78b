#![no_main]
use libfuzzer_sys::fuzz_target;
use survival_concordance::{concordance_index_censored_weighted_core, ConcordanceError};

fuzz_target!(|data: &[u8]| {
    if data.len() < 20 {
        return;
    }
    let n = (data.len() / 20).min(500);
    let mut time = Vec::with_capacity(n);
    let mut event = Vec::with_capacity(n);
    let mut estimate = Vec::with_capacity(n);
    let mut weights = Vec::with_capacity(n);

    for i in 0..n {
        let offset = i * 20;
        let t = f64::from_le_bytes(data[offset..offset + 8].try_into().unwrap());
        let s = f64::from_le_bytes(data[offset + 8..offset + 16].try_into().unwrap());
        let w_raw = u32::from_le_bytes(data[offset + 16..offset + 20].try_into().unwrap());

        // the low bit of the weight word doubles as the event flag
        time.push(t.abs());
        estimate.push(s);
        event.push(w_raw & 1 == 1);
        weights.push(w_raw as f64 / u32::MAX as f64);
    }

    match concordance_index_censored_weighted_core(&event, &time, &estimate, &weights, 1e-8) {
        Ok(r) => {
            assert!((0.0..=1.0).contains(&r.c_index));
            assert!(r.comparable_pairs() > 0);
        }
        Err(ConcordanceError::Validation(_))
        | Err(ConcordanceError::InsufficientSamples { .. })
        | Err(ConcordanceError::AllCensored)
        | Err(ConcordanceError::NoComparablePairs)
        | Err(ConcordanceError::ZeroWeight) => {}
    }
});
