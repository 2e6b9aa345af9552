/// Non-negative remainder of `value` divided by `count`.
///
/// `count` must be non-zero; callers special-case empty slide lists before getting here.
pub(crate) fn wrap(value: i64, count: usize) -> usize {
    debug_assert!(count > 0, "wrap: count must be non-zero");
    value.rem_euclid(count as i64) as usize
}

/// Rounds half-way cases towards positive infinity, matching how browsers round scroll ratios.
///
/// Implemented without `f64::round` so the crate keeps working without `std`.
pub(crate) fn round_half_up(x: f64) -> i64 {
    floor(x + 0.5)
}

fn floor(x: f64) -> i64 {
    let t = x as i64;
    if (t as f64) > x { t - 1 } else { t }
}
