//! How often does a fresh shuffle of a row of `n` seats put at least one pair
//! of former neighbours next to each other again?

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatStats {
    pub n: usize,
    /// Permutations with at least one former neighbour pair still adjacent.
    pub repeats: u128,
    pub total: u128,
}

impl RepeatStats {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.repeats as f64 / self.total as f64 * 100.0
    }
}

/// Longest row whose permutation count still fits in a `u128`.
pub const MAX_SEATS: usize = 34;

/// `None` once `n!` no longer fits in a `u128`.
pub fn factorial(n: usize) -> Option<u128> {
    (1..=n as u128).try_fold(1u128, |acc, k| acc.checked_mul(k))
}

/// Exact count by enumerating the permutations that keep every former pair
/// apart. Cost grows with the answer, so keep `n` modest (about 12).
pub fn neighbour_repeats(n: usize) -> Option<RepeatStats> {
    let total = factorial(n)?;
    let mut used = vec![false; n];
    let clean = count_clean(n, None, 0, &mut used);
    Some(RepeatStats {
        n,
        repeats: total - clean,
        total,
    })
}

fn count_clean(n: usize, last: Option<usize>, placed: usize, used: &mut [bool]) -> u128 {
    if placed == n {
        return 1;
    }

    let mut count = 0;
    for seat in 0..n {
        if used[seat] {
            continue;
        }
        if let Some(prev) = last {
            if prev.abs_diff(seat) == 1 {
                continue;
            }
        }
        used[seat] = true;
        count += count_clean(n, Some(seat), placed + 1, used);
        used[seat] = false;
    }
    count
}
