/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Rounds the exact decimal value of `value` to `decimals` places, ties to even.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// Mean of the present ratings, rounded to two decimals.
pub fn average_rating<I>(ratings: I) -> f64
where
    I: IntoIterator<Item = Option<i64>>,
{
    let values: Vec<f64> = ratings.into_iter().flatten().map(|r| r as f64).collect();
    round_to(mean(&values), 2)
}
