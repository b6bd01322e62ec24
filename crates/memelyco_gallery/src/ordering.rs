//! Gallery ordering.

use memelyco_core::{MediaItem, SortMode};
use rand::Rng;

/// Sort newest first.
///
/// Stable: items with equal timestamps keep their relative order.
pub fn sort_chronological(items: &mut [MediaItem]) {
    items.sort_by(|a, b| b.created_at().cmp(a.created_at()));
}

/// Fisher–Yates shuffle: one backward pass, `j` uniform in `[0, i]`.
///
/// Every permutation is equally likely given a uniform `rng`.
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Order `items` in place according to `mode`.
pub fn apply_sort<R>(items: &mut [MediaItem], mode: SortMode, rng: &mut R)
where
    R: Rng + ?Sized,
{
    match mode {
        SortMode::Chronological => sort_chronological(items),
        SortMode::Random => shuffle(items, rng),
    }
}
