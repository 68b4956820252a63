//! Three equivalent ways to compute `1 + 2 + ... + n`.
//!
//! Inputs are `u32` and results `u64`, so no input can overflow:
//! `u32::MAX * (u32::MAX + 1) / 2 < u64::MAX`.

/// Inputs checked by [`verify`].
pub const SAMPLE_INPUTS: [u32; 7] = [0, 1, 2, 5, 10, 100, 1000];

/// Closed form `n(n + 1) / 2`. O(1).
pub fn sum_to_n_a(n: u32) -> u64 {
    let n = u64::from(n);
    n * (n + 1) / 2
}

/// Explicit accumulation loop. O(n).
pub fn sum_to_n_b(n: u32) -> u64 {
    let mut sum = 0u64;
    for i in 1..=n {
        sum += u64::from(i);
    }
    sum
}

/// Iterator reduction over `1..=n`. O(n).
pub fn sum_to_n_c(n: u32) -> u64 {
    (1..=n).map(u64::from).fold(0, |acc, i| acc + i)
}

/// Results of the three implementations for one input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SumCheck {
    pub n: u32,
    pub a: u64,
    pub b: u64,
    pub c: u64,
}

impl SumCheck {
    pub fn run(n: u32) -> Self {
        SumCheck {
            n,
            a: sum_to_n_a(n),
            b: sum_to_n_b(n),
            c: sum_to_n_c(n),
        }
    }

    pub fn agrees(&self) -> bool {
        self.a == self.b && self.b == self.c
    }
}

/// Run all three on each input, logging any disagreement.
pub fn verify(inputs: &[u32]) -> Vec<SumCheck> {
    inputs
        .iter()
        .map(|&n| {
            let check = SumCheck::run(n);
            if check.agrees() {
                tracing::debug!(n, sum = check.a, "sum_to_n agrees");
            } else {
                tracing::warn!(?check, "sum_to_n implementations disagree");
            }
            check
        })
        .collect()
}
