//! Strike grids.

/// Lowest strike of a chain as a fraction of spot.
pub const LOWER_STRIKE_FACTOR: f64 = 0.8;

/// Highest strike of a chain as a fraction of spot.
pub const UPPER_STRIKE_FACTOR: f64 = 1.2;

/// Returns `count` evenly spaced values over `[start, stop]`.
///
/// Both endpoints are included and the last value is exactly `stop`.
/// A single point yields `[start]` and zero points yield an empty vector.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::chain::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
/// assert!(linspace(3.0, 7.0, 0).is_empty());
/// ```
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
            values[count - 1] = stop;
            values
        }
    }
}

/// Strikes for a chain around `spot`: `count` points over `[0.8·S, 1.2·S]`.
#[inline]
pub fn strike_grid(spot: f64, count: usize) -> Vec<f64> {
    linspace(LOWER_STRIKE_FACTOR * spot, UPPER_STRIKE_FACTOR * spot, count)
}
