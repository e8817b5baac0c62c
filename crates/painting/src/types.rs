use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LINE_WIDTH;
use crate::validation::{parse_color, validate_size, ValidationError};

pub use inkshare_ipc::PenSettings;

/// Straight-alpha color, each channel in 0.0..=1.0
pub type Rgba = [f32; 4];

pub const TRANSPARENT: Rgba = [0.0, 0.0, 0.0, 0.0];
pub const BLACK: Rgba = [0.0, 0.0, 0.0, 1.0];

/// A pointer sample in surface pixel coordinates (origin top-left)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<[f32; 2]> for Point {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f32; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

impl From<Point> for Vec2 {
    fn from(point: Point) -> Self {
        Vec2::new(point.x, point.y)
    }
}

/// Validated pen: parsed color and a positive width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    pub color: Rgba,
    pub width: f32,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            color: BLACK,
            width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl Pen {
    /// Resolve wire pen settings, rejecting unknown colors and non-positive sizes
    pub fn from_settings(settings: &PenSettings) -> Result<Self, ValidationError> {
        Ok(Self {
            color: parse_color(&settings.color)?,
            width: validate_size(settings.size)?,
        })
    }
}

/// One pen-down to pen-up gesture. Point order is drawing order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A stroke needs two points before anything is drawn
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2
    }

    /// Consecutive point pairs, one per drawn segment
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Points in the `[x, y]` wire layout
    pub fn to_wire(&self) -> Vec<[f32; 2]> {
        self.points.iter().copied().map(Into::into).collect()
    }
}

impl FromIterator<Point> for Stroke {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl From<&[[f32; 2]]> for Stroke {
    fn from(points: &[[f32; 2]]) -> Self {
        points.iter().copied().map(Point::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_segments() {
        let stroke = Stroke::from(&[[10.0, 10.0], [20.0, 10.0], [20.0, 20.0]][..]);
        let segments: Vec<_> = stroke.segments().collect();
        assert_eq!(
            segments,
            vec![
                (Point::new(10.0, 10.0), Point::new(20.0, 10.0)),
                (Point::new(20.0, 10.0), Point::new(20.0, 20.0)),
            ]
        );
    }

    #[test]
    fn test_short_strokes_have_no_segments() {
        let mut stroke = Stroke::new();
        assert!(!stroke.is_drawable());
        assert_eq!(stroke.segments().count(), 0);

        stroke.push(Point::new(1.0, 1.0));
        assert!(!stroke.is_drawable());
        assert_eq!(stroke.segments().count(), 0);
    }

    #[test]
    fn test_pen_from_settings() {
        let pen = Pen::from_settings(&PenSettings::new("#ff0000", 4.0)).unwrap();
        assert_eq!(pen.color, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(pen.width, 4.0);

        assert!(Pen::from_settings(&PenSettings::new("#ff0000", 0.0)).is_err());
        assert!(Pen::from_settings(&PenSettings::new("not-a-color", 2.0)).is_err());
    }

    #[test]
    fn test_wire_round_trip_keeps_order() {
        let wire = vec![[3.0, 4.0], [1.0, 2.0]];
        let stroke = Stroke::from(&wire[..]);
        assert_eq!(stroke.to_wire(), wire);
    }
}
