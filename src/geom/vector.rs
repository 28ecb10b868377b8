use crate::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
}

impl Vector {
    pub fn new(dx: f64, dy: f64, dz: f64) -> Self {
        Self { dx, dy, dz }
    }

    pub fn from_points(beg: Point, end: Point) -> Self {
        Self {
            dx: end.x - beg.x,
            dy: end.y - beg.y,
            dz: end.z - beg.z,
        }
    }

    /// Dot product between 2 vectors.
    pub fn dot(self, other: Self) -> f64 {
        self.dx * other.dx + self.dy * other.dy + self.dz * other.dz
    }

    /// Returns the length of the vector.
    ///
    /// Uses `hypot`, so large components do not overflow to infinity.
    pub fn length(&self) -> f64 {
        self.dx.hypot(self.dy).hypot(self.dz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let p0 = Point::new(1., 2., 3.);
        let p1 = Point::new(0., 0., 0.);
        assert_eq!(Vector::from_points(p0, p1), Vector::new(-1., -2., -3.));
        assert_eq!(Vector::from_points(p1, p0), Vector::new(1., 2., 3.));
    }

    #[test]
    fn test_length_and_dot() {
        let v = Vector::new(2., 3., 6.);
        assert!((v.length() - 7.).abs() < 1e-12);
        assert_eq!(v.dot(Vector::new(1., 0., 0.)), 2.);
        assert_eq!(v.dot(v), 49.);
    }

    #[test]
    fn test_length_of_large_vector() {
        let v = Vector::new(1e200, 1e200, 0.);
        assert!(v.length().is_finite());
        assert!((v.length() / 1e200 - 2f64.sqrt()).abs() < 1e-12);
    }
}
