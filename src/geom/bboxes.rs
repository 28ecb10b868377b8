//! Axis-aligned bounding boxes.
//!
//! Boxes are the only volume the navigation core knows about. Two scene objects
//! are neighbors when their boxes overlap, and a query point is matched to the
//! object whose box lies closest to it.

use crate::geom::point::Point;
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoxCorners")]
pub struct Aabb {
    pub min: Point,
    pub max: Point,
}

/// Unvalidated corners as they appear in serialized scenes.
#[derive(Deserialize)]
struct BoxCorners {
    min: Point,
    max: Point,
}

impl TryFrom<BoxCorners> for Aabb {
    type Error = anyhow::Error;

    fn try_from(value: BoxCorners) -> Result<Self> {
        Self::new(value.min, value.max)
    }
}

impl Aabb {
    /// Creates a box from its min and max corners.
    ///
    /// Fails if any coordinate is not finite or if `min` exceeds `max` on any axis.
    pub fn new(min: Point, max: Point) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(anyhow!("Bounding box corners must be finite: {min}, {max}"));
        }
        if min.x > max.x || min.y > max.y || min.z > max.z {
            return Err(anyhow!("Bounding box min {min} exceeds max {max}"));
        }
        Ok(Self { min, max })
    }

    /// Returns the bounding box holding all points `pts`.
    pub fn from_points(pts: &[Point]) -> Result<Self> {
        let first = pts
            .first()
            .ok_or_else(|| anyhow!("Cannot compute a bounding box of zero points"))?;
        let (pmin, pmax) = pts.iter().skip(1).fold((*first, *first), |(lo, hi), p| {
            (
                Point::new(lo.x.min(p.x), lo.y.min(p.y), lo.z.min(p.z)),
                Point::new(hi.x.max(p.x), hi.y.max(p.y), hi.z.max(p.z)),
            )
        });
        Self::new(pmin, pmax)
    }

    /// Creates a box centered at `center` with the given full extents.
    pub fn from_center(center: Point, size_x: f64, size_y: f64, size_z: f64) -> Result<Self> {
        let (hx, hy, hz) = (size_x / 2., size_y / 2., size_z / 2.);
        Self::new(
            Point::new(center.x - hx, center.y - hy, center.z - hz),
            Point::new(center.x + hx, center.y + hy, center.z + hz),
        )
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.,
            (self.min.y + self.max.y) / 2.,
            (self.min.z + self.max.z) / 2.,
        )
    }

    /// Checks whether a point is inside the box (boundary included).
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.min.x
            && pt.x <= self.max.x
            && pt.y >= self.min.y
            && pt.y <= self.max.y
            && pt.z >= self.min.z
            && pt.z <= self.max.z
    }

    /// Checks whether two boxes overlap. Touching boxes overlap.
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
            && self.min.z <= other.max.z
            && other.min.z <= self.max.z
    }

    /// Returns the point of the box closest to `pt`.
    ///
    /// Points inside the box are returned unchanged.
    pub fn closest_point(&self, pt: Point) -> Point {
        Point::new(
            pt.x.clamp(self.min.x, self.max.x),
            pt.y.clamp(self.min.y, self.max.y),
            pt.z.clamp(self.min.z, self.max.z),
        )
    }

    /// Euclidean distance from `pt` to the box (zero inside).
    pub fn distance_to(&self, pt: Point) -> f64 {
        pt.distance(&self.closest_point(pt))
    }
}

/// Checks whether two bounding boxes overlap (including touching).
pub fn intersects(a: &Aabb, b: &Aabb) -> bool {
    a.intersects(b)
}

/// Clamps `pt` into `bbox`.
pub fn closest_point(bbox: &Aabb, pt: Point) -> Point {
    bbox.closest_point(pt)
}
