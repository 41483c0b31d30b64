/// Sedgewick's gap numbers up to `limit`, smallest first.
///
/// The sequence interleaves `9 * (4^k - 2^k) + 1` and `2^k * (2^(k+4) - 12) + 1`
/// (`1, 5, 19, 41, 109, 209, 505, ...`). Generation stops once a value meets
/// or exceeds `limit`; values above `limit` are then dropped. The result
/// always starts with 1 when `limit >= 1`.
pub fn sedgewick_gaps(limit: usize) -> Vec<usize> {
    debug_assert!(limit >= 1, "limit must be at least 1");

    let mut gaps = Vec::new();
    let mut pow_2: usize = 1;
    let mut pow_4: usize = 1;

    loop {
        let (Some(even), Some(odd)) = (even_gap(pow_2, pow_4), odd_gap(pow_2)) else {
            break;
        };
        gaps.push(even);
        gaps.push(odd);
        if odd >= limit {
            break;
        }

        match (pow_2.checked_mul(2), pow_4.checked_mul(4)) {
            (Some(next_2), Some(next_4)) => {
                pow_2 = next_2;
                pow_4 = next_4;
            }
            _ => break,
        }
    }

    while gaps.last().is_some_and(|&gap| gap > limit) {
        gaps.pop();
    }
    gaps
}

#[inline]
fn even_gap(pow_2: usize, pow_4: usize) -> Option<usize> {
    (pow_4 - pow_2).checked_mul(9)?.checked_add(1)
}

#[inline]
fn odd_gap(pow_2: usize) -> Option<usize> {
    pow_2
        .checked_mul(16)?
        .checked_sub(12)?
        .checked_mul(pow_2)?
        .checked_add(1)
}
