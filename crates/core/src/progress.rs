//! Pure aggregation math for the dashboard and mock test summaries.

/// Integer completion percentage, floored.
///
/// Returns `0` when `total` is zero; a fresh tracker has nothing to complete
/// yet. The result never exceeds `100`.
#[must_use]
pub fn progress_percent(completed: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    let percent = u128::from(completed) * 100 / u128::from(total);
    u8::try_from(percent.min(100)).unwrap_or(100)
}

/// Round an average score to two decimal places, ties to even.
///
/// `None` means there were no scores at all and passes through untouched.
#[must_use]
pub fn rounded_average(average: Option<f64>) -> Option<f64> {
    average.map(|avg| (avg * 100.0).round_ties_even() / 100.0)
}

/// Arithmetic mean of the given scores, or `None` for an empty set.
#[must_use]
pub fn mean_score<I>(scores: I) -> Option<f64>
where
    I: IntoIterator<Item = i64>,
{
    let (sum, count) = scores
        .into_iter()
        .fold((0_i128, 0_u64), |(sum, count), s| (sum + i128::from(s), count + 1));
    if count == 0 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let mean = sum as f64 / count as f64;
    Some(mean)
}
