//! Comparable-pair enumeration for right-censored outcomes.
//!
//! Samples are scanned once in ascending time order, one group of equal times at
//! a time. An uncensored sample is comparable to every sample observed strictly
//! later, and to the censored samples that share its time. Two events at the
//! same instant are never comparable.

/// Ascending argsort of `event_time`. Equal times end up contiguous.
pub fn sort_order(event_time: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..event_time.len()).collect();
    order.sort_by(|&a, &b| event_time[a].total_cmp(&event_time[b]));
    order
}

/// Comparability masks keyed by sort position.
///
/// `masks[p]` is set only when the sample at sort position `p` is uncensored and
/// comparable to at least one other sample; `mask[q]` is true when the sample at
/// sort position `q` can be compared against it.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparablePairs {
    masks: Vec<Option<Vec<bool>>>,
    tied_time: usize,
}

impl ComparablePairs {
    /// True when no sample has anything to be compared against.
    pub fn is_empty(&self) -> bool {
        self.masks.iter().all(Option::is_none)
    }

    /// Number of samples holding a mask.
    pub fn len(&self) -> usize {
        self.masks.iter().filter(|m| m.is_some()).count()
    }

    pub fn tied_time(&self) -> usize {
        self.tied_time
    }

    /// Total number of comparable pairs across all masks.
    pub fn pair_count(&self) -> usize {
        self.iter()
            .map(|(_, mask)| mask.iter().filter(|&&c| c).count())
            .sum()
    }

    pub fn mask(&self, position: usize) -> Option<&[bool]> {
        self.masks.get(position).and_then(|m| m.as_deref())
    }

    /// Iterates `(sort_position, mask)` in ascending sort position.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[bool])> + '_ {
        self.masks
            .iter()
            .enumerate()
            .filter_map(|(pos, m)| m.as_deref().map(|mask| (pos, mask)))
    }
}

pub fn find_comparable(
    event_indicator: &[bool],
    event_time: &[f64],
    order: &[usize],
) -> ComparablePairs {
    let n = order.len();
    let mut masks: Vec<Option<Vec<bool>>> = vec![None; n];
    let mut tied_time = 0;

    let mut i = 0;
    while i < n {
        let current_time = event_time[order[i]];
        let mut end = i + 1;
        while end < n && event_time[order[end]] == current_time {
            end += 1;
        }

        let censored_in_group = order[i..end]
            .iter()
            .filter(|&&idx| !event_indicator[idx])
            .count();
        let later = n - end;

        if later + censored_in_group > 0 {
            for j in i..end {
                if !event_indicator[order[j]] {
                    continue;
                }
                let mut mask = vec![false; n];
                for (slot, &idx) in mask[i..end].iter_mut().zip(&order[i..end]) {
                    *slot = !event_indicator[idx];
                }
                mask[end..].fill(true);
                masks[j] = Some(mask);
                tied_time += censored_in_group;
            }
        }
        i = end;
    }

    ComparablePairs { masks, tied_time }
}
