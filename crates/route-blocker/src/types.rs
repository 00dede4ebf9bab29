//! Coordinate and bounding-box value types

use geo::{Coord, Point, Rect};

/// A geodetic coordinate in degrees
///
/// Ranges are not enforced; latitude is expected in `[-90, 90]` and
/// longitude in `[-180, 180]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl Waypoint {
    /// Create a waypoint from latitude and longitude in degrees
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both coordinates are finite numbers
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl From<Point<f64>> for Waypoint {
    fn from(point: Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

impl From<Waypoint> for Point<f64> {
    fn from(waypoint: Waypoint) -> Self {
        Point::new(waypoint.longitude, waypoint.latitude)
    }
}

impl From<&gpx::Waypoint> for Waypoint {
    fn from(waypoint: &gpx::Waypoint) -> Self {
        waypoint.point().into()
    }
}

/// An axis-aligned box in latitude/longitude degrees
///
/// `north >= south` always holds for boxes produced by this crate. The
/// `east` field holds the padded *smaller* longitude and `west` the padded
/// *larger* one, so for positive padding `east < west`. Consumers rely on
/// this labeling; see [`crate::compute_bounds`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl Bounds {
    /// Latitude covered, in degrees
    #[inline]
    pub fn lat_span(&self) -> f64 {
        self.north - self.south
    }

    /// Convert to a `geo::Rect` with x as longitude and y as latitude
    ///
    /// `Rect` normalizes its corners, so the result always has
    /// `min().x <= max().x` regardless of the east/west labeling.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            Coord {
                x: self.east,
                y: self.south,
            },
            Coord {
                x: self.west,
                y: self.north,
            },
        )
    }
}
