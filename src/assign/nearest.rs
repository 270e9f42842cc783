//! Nearest-mean-color selection.
//!
//! The randomized strategy is split into three steps that compose:
//! [`color_distances`] scores every pool entry, [`nearest_k`] keeps the best
//! `k` indices, and [`choose_uniform`] draws one of them.

use crate::util::math::rgb_distance;
use rand::seq::IndexedRandom;
use rand::Rng;
use std::cmp::Ordering;

const RANK_NUM: usize = 24;
const RANK_DEN: usize = 1117;
const RANK_OFFSET: usize = 5;

/// Default number of candidates for the randomized strategy:
/// `ceil(24 / 1117 * pool_len + 5)`, evaluated in integers.
pub fn default_rank(pool_len: usize) -> usize {
    (RANK_NUM * pool_len + RANK_OFFSET * RANK_DEN).div_ceil(RANK_DEN)
}

/// Euclidean distance from `color` to every mean, in pool order.
pub fn color_distances(means: &[[f64; 3]], color: [f64; 3]) -> Vec<f64> {
    means.iter().map(|&mean| rgb_distance(mean, color)).collect()
}

/// Index of the smallest distance; ties resolve to the lowest index.
pub fn argmin(distances: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, &d) in distances.iter().enumerate() {
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((idx, d)),
        }
    }
    best.map(|(idx, _)| idx)
}

fn rank_cmp(distances: &[f64], a: usize, b: usize) -> Ordering {
    distances[a]
        .total_cmp(&distances[b])
        .then_with(|| a.cmp(&b))
}

/// Indices of the `k` smallest distances in ascending order.
///
/// Equal distances are ordered by index, so the result is deterministic and
/// `nearest_k(d, 1)` agrees with [`argmin`].
pub fn nearest_k(distances: &[f64], k: usize) -> Vec<usize> {
    let k = k.min(distances.len());
    if k == 0 {
        return Vec::new();
    }
    let mut order: Vec<usize> = (0..distances.len()).collect();
    if k < order.len() {
        order.select_nth_unstable_by(k - 1, |&a, &b| rank_cmp(distances, a, b));
        order.truncate(k);
    }
    order.sort_unstable_by(|&a, &b| rank_cmp(distances, a, b));
    order
}

/// Picks one candidate uniformly at random.
pub fn choose_uniform<R: Rng + ?Sized>(candidates: &[usize], rng: &mut R) -> Option<usize> {
    candidates.choose(rng).copied()
}
