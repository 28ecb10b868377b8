//! Errors reported at the navigation service boundary.
//!
//! "No answer" outcomes (no candidates, no path) are not errors; they come back
//! as `PathResult::unreachable()`. These variants cover bad caller input.

use thiserror::Error;

use crate::geom::point::Point;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NavError {
    /// A coordinate given as text could not be read as a finite number.
    #[error("Invalid coordinate {name}: '{value}' is not a finite number")]
    InvalidCoordinate { name: String, value: String },

    /// A query point has a NaN or infinite coordinate.
    #[error("Query point {name} is not finite: {point}")]
    NonFinitePoint { name: String, point: Point },
}

pub type NavResult<T> = Result<T, NavError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = NavError::InvalidCoordinate {
            name: "x1".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid coordinate x1: 'abc' is not a finite number"
        );

        let err = NavError::NonFinitePoint {
            name: "start".to_string(),
            point: Point::new(f64::NAN, 0., 0.),
        };
        assert!(err.to_string().starts_with("Query point start is not finite"));
    }

    #[test]
    fn test_into_anyhow() {
        let err: anyhow::Error = NavError::InvalidCoordinate {
            name: "y2".to_string(),
            value: "".to_string(),
        }
        .into();
        assert!(err.downcast_ref::<NavError>().is_some());
    }
}
