use crate::{math::linspace, GreengraphError, C};
use geo::geometry::Coord;

/// Returns `steps` coordinates evenly spaced along the straight line
/// from `start` to `end`.
///
/// Latitude and longitude are interpolated independently, so the
/// path is a straight line in coordinate space, not a great circle.
/// The first coordinate is `start` and, when `steps > 1`, the last is
/// `end`. A single step yields only `start`.
pub fn interpolate(
    start: Coord<C>,
    end: Coord<C>,
    steps: usize,
) -> Result<Vec<Coord<C>>, GreengraphError> {
    if steps == 0 {
        return Err(GreengraphError::InvalidSteps(steps));
    }
    Ok(linspace(start.y, end.y, steps)
        .zip(linspace(start.x, end.x, steps))
        .map(|(y, x)| Coord { x, y })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::{interpolate, Coord, GreengraphError};
    use approx::assert_relative_eq;

    #[test]
    fn test_interpolate() {
        let path = interpolate(Coord { x: 1.0, y: 1.0 }, Coord { x: 10.0, y: 10.0 }, 10).unwrap();
        let expected: Vec<Coord> = (1..=10)
            .map(f64::from)
            .map(|v| Coord { x: v, y: v })
            .collect();
        assert_eq!(path, expected);
    }

    #[test]
    fn test_interpolate_endpoints() {
        let london = Coord {
            y: 51.507_350_9,
            x: -0.127_758_3,
        };
        let oxford = Coord {
            y: 51.752_020_9,
            x: -1.257_726_3,
        };
        for steps in 2..50 {
            let path = interpolate(london, oxford, steps).unwrap();
            assert_eq!(path.len(), steps);
            assert_eq!(path.first(), Some(&london));
            assert_eq!(path.last(), Some(&oxford));
        }

        let path = interpolate(london, oxford, 3).unwrap();
        assert_relative_eq!(path[1].y, (london.y + oxford.y) / 2.0, max_relative = 1e-12);
        assert_relative_eq!(path[1].x, (london.x + oxford.x) / 2.0, max_relative = 1e-12);
    }

    #[test]
    fn test_interpolate_single_step() {
        let start = Coord { x: 1.0, y: 2.0 };
        let end = Coord { x: 3.0, y: 4.0 };
        assert_eq!(interpolate(start, end, 1).unwrap(), [start]);
    }

    #[test]
    fn test_interpolate_zero_steps() {
        let coord = Coord { x: 0.0, y: 0.0 };
        assert!(matches!(
            interpolate(coord, coord, 0),
            Err(GreengraphError::InvalidSteps(0))
        ));
    }
}
