use crate::geom::point::Point;
use crate::scene::SceneObject;

/// Candidate closest to a query point.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestNode<'a> {
    pub object: Option<&'a SceneObject>,
    pub distance: f64,
}

impl NearestNode<'_> {
    pub fn id(&self) -> Option<&str> {
        self.object.map(|o| o.id.as_str())
    }
}

/// Finds the candidate whose bounding box is closest to `point`.
///
/// Distance is measured to the nearest point of each box, so a point inside a
/// box is at distance 0. Ties go to the first candidate. An empty candidate
/// list gives no object and an infinite distance.
pub fn locate(point: Point, candidates: &[SceneObject]) -> NearestNode<'_> {
    let mut nearest = NearestNode {
        object: None,
        distance: f64::INFINITY,
    };
    for obj in candidates.iter() {
        let d = obj.bbox.distance_to(point);
        // Any candidate beats none, even at an infinite or NaN distance
        if nearest.object.is_none() || d < nearest.distance {
            nearest = NearestNode {
                object: Some(obj),
                distance: d,
            };
        }
    }
    nearest
}
