use crate::error::ConfigurationError;
use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// Total sweep of the arc in degrees.
pub const ARC_SWEEP: f64 = 180.0;
/// Angle of the first tick; 0 points straight up, so the arc runs left to right.
pub const START_ANGLE: f64 = -90.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Percentage bucket assigned to a tick from its index.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    From,
    Into,
)]
#[serde(transparent)]
pub struct Threshold(u32);

impl Threshold {
    /// `floor(index / count * 100)`. Divides by `count`, not `count - 1`, so the last
    /// threshold always stays below 100.
    pub fn for_index(index: usize, count: usize) -> Self {
        Self(((index as f64 / count as f64) * 100.0).floor() as u32)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

/// Canvas geometry. Everything is derived from the canvas width and tick height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcConfiguration {
    width: f64,
    height: f64,
    radius: f64,
    center: Point,
}

impl ArcConfiguration {
    pub fn new(canvas_width: f64, tick_height: f64) -> Self {
        let height = canvas_width / 2.0 + tick_height;
        let radius = canvas_width / 2.0 - tick_height / 2.0;
        Self {
            width: canvas_width,
            height,
            radius,
            center: Point::new(canvas_width / 2.0, height),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn center(&self) -> Point {
        self.center
    }
}

/// Where one tick sits on the arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub index: usize,
    /// Center of the tick on the arc.
    pub position: Point,
    /// Top-left corner of the unrotated draw rectangle.
    pub origin: Point,
    /// Rotation about `position`, in degrees.
    pub angle: f64,
    pub threshold: Threshold,
}

pub fn polar_to_cartesian(center: Point, radius: f64, angle: f64) -> Point {
    let radians = (angle - 90.0).to_radians();
    Point::new(
        radius * radians.cos() + center.x,
        radius * radians.sin() + center.y,
    )
}

pub fn layout(
    center: Point,
    radius: f64,
    count: usize,
    tick_width: f64,
    tick_height: f64,
) -> Result<Vec<Placement>, ConfigurationError> {
    if count < 2 {
        return Err(ConfigurationError::TooFewTicks { count });
    }
    let span = (count - 1) as f64;

    Ok((0..count)
        .map(|index| {
            // multiply before dividing so both endpoints land exactly on +-90
            let angle = (index as f64 * ARC_SWEEP) / span + START_ANGLE;
            let position = polar_to_cartesian(center, radius, angle);
            Placement {
                index,
                position,
                origin: position.offset(-tick_width / 2.0, -tick_height / 2.0),
                angle,
                threshold: Threshold::for_index(index, count),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_arc_configuration_is_derived_from_width() {
        let arc = ArcConfiguration::new(400.0, 8.0);
        assert_eq!(arc.height(), 208.0);
        assert_eq!(arc.radius(), 196.0);
        assert_eq!(arc.center(), Point::new(200.0, 208.0));
    }

    #[test]
    fn test_polar_axis_orientation() {
        let c = Point::new(100.0, 100.0);
        let up = polar_to_cartesian(c, 10.0, 0.0);
        let left = polar_to_cartesian(c, 10.0, -90.0);
        let right = polar_to_cartesian(c, 10.0, 90.0);

        assert!(approx(up.x, 100.0) && approx(up.y, 90.0));
        assert!(approx(left.x, 90.0) && approx(left.y, 100.0));
        assert!(approx(right.x, 110.0) && approx(right.y, 100.0));
    }

    #[test]
    fn test_layout_spans_half_circle_evenly() {
        for count in 2..=40 {
            let ticks = layout(Point::new(200.0, 208.0), 196.0, count, 4.0, 8.0).unwrap();
            assert_eq!(ticks.len(), count);
            assert_eq!(ticks[0].angle, -90.0);
            assert_eq!(ticks[count - 1].angle, 90.0);

            let step = 180.0 / (count - 1) as f64;
            for pair in ticks.windows(2) {
                assert!(approx(pair[1].angle - pair[0].angle, step));
            }
        }
    }

    #[test]
    fn test_origin_is_offset_by_half_size() {
        let ticks = layout(Point::new(50.0, 50.0), 40.0, 3, 4.0, 8.0).unwrap();
        for t in &ticks {
            assert!(approx(t.origin.x, t.position.x - 2.0));
            assert!(approx(t.origin.y, t.position.y - 4.0));
        }
        // middle tick points straight up
        assert!(approx(ticks[1].position.x, 50.0));
        assert!(approx(ticks[1].position.y, 10.0));
    }

    #[test]
    fn test_thresholds() {
        let ticks = layout(Point::default(), 1.0, 4, 1.0, 1.0).unwrap();
        let thresholds: Vec<u32> = ticks.iter().map(|t| t.threshold.value()).collect();
        assert_eq!(thresholds, vec![0, 25, 50, 75]);

        for count in 2..=250 {
            let ticks = layout(Point::default(), 1.0, count, 1.0, 1.0).unwrap();
            assert!(ticks.windows(2).all(|p| p[0].threshold <= p[1].threshold));
            assert!(ticks[count - 1].threshold.value() < 100);
            for t in &ticks {
                let expected = ((t.index as f64 / count as f64) * 100.0).floor() as u32;
                assert_eq!(t.threshold.value(), expected);
            }
        }
    }

    #[test]
    fn test_threshold_keeps_float_rounding() {
        // 29 / 100 * 100 evaluates to 28.999999999999996
        assert_eq!(Threshold::for_index(29, 100).value(), 28);
        assert_eq!(Threshold::for_index(1, 3).value(), 33);
    }

    #[test]
    fn test_too_few_ticks() {
        for count in [0, 1] {
            assert_eq!(
                layout(Point::default(), 1.0, count, 1.0, 1.0),
                Err(ConfigurationError::TooFewTicks { count })
            );
        }
    }
}
