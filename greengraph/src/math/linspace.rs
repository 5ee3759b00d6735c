use num_traits::{Float, FromPrimitive};

/// Returns `n` evenly spaced values from `y_start` to `y_end`.
///
/// The last value is exactly `y_end` when `n > 1`. A single value is
/// just `y_start`.
pub fn linspace<T>(y_start: T, y_end: T, n: usize) -> impl Iterator<Item = T>
where
    T: Float + FromPrimitive,
{
    let last = n.saturating_sub(1);
    let dy = if last == 0 {
        T::zero()
    } else {
        (y_end - y_start) / T::from(last).unwrap()
    };
    (0..n).map(move |x| match x {
        0 => y_start,
        x if x == last => y_end,
        x => y_start + T::from(x).unwrap() * dy,
    })
}

#[cfg(test)]
mod tests {
    use super::linspace;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace() {
        let vals: Vec<f64> = linspace(0.0, 1.0, 5).collect();
        assert_eq!(vals, [0.0, 0.25, 0.5, 0.75, 1.0]);

        let vals: Vec<f64> = linspace(2.0, -2.0, 3).collect();
        assert_eq!(vals, [2.0, 0.0, -2.0]);
    }

    #[test]
    fn test_linspace_endpoints() {
        let vals: Vec<f32> = linspace(0.1, 0.7, 7).collect();
        assert_eq!(vals.len(), 7);
        assert_eq!(vals[0], 0.1);
        assert_eq!(vals[6], 0.7);
        assert_relative_eq!(vals[3], 0.4, max_relative = 1e-6);
    }

    #[test]
    fn test_linspace_degenerate() {
        assert_eq!(linspace(3.0_f64, 9.0, 1).collect::<Vec<_>>(), [3.0]);
        assert_eq!(linspace(3.0_f64, 9.0, 0).count(), 0);
    }
}
