//! Point-to-point navigation over a scene.
//!
//! A query resolves both endpoints to their nearest candidate objects, builds
//! a proximity graph from the same candidates and runs a shortest-path search
//! between the two resolved ids. The graph is rebuilt for every query.

use tracing::{debug, info};

use super::builder::GraphBuilder;
use super::graph::PathResult;
use super::highlight::highlight_path;
use super::locator::locate;
use crate::config::NavConfig;
use crate::error::{NavError, NavResult};
use crate::geom::point::Point;
use crate::name::filter_by_prefix;
use crate::scene::{PaintTarget, SceneObject, SceneProvider};

/// Finds the shortest path between the candidates nearest to `start` and `end`.
///
/// Returns `PathResult::unreachable()` when either point cannot be resolved
/// (no candidates) or when the resolved objects are not connected.
#[tracing::instrument(level = "debug", skip(candidates), fields(candidates = candidates.len()))]
pub fn find_path(start: Point, end: Point, candidates: &[SceneObject]) -> PathResult {
    let start_node = locate(start, candidates);
    let end_node = locate(end, candidates);

    let (Some(start_obj), Some(end_obj)) = (start_node.object, end_node.object) else {
        debug!("Query endpoints could not be resolved to scene objects");
        return PathResult::unreachable();
    };
    debug!(
        start = %start_obj.id,
        start_distance = start_node.distance,
        end = %end_obj.id,
        end_distance = end_node.distance,
        "Resolved query endpoints"
    );

    let graph = GraphBuilder::new().build(candidates);
    graph.shortest_path(&start_obj.id, &end_obj.id)
}

/// Parses a coordinate given as text (e.g. from a query string).
pub fn parse_coordinate(name: &str, value: &str) -> NavResult<f64> {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(NavError::InvalidCoordinate {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Maps a ground-plane pair `(x, y)` to a 3D point of the Y-up model.
pub fn ground_point(x: f64, y: f64, vertical: f64) -> Point {
    Point::new(x, vertical, y)
}

fn check_finite(name: &str, point: Point) -> NavResult<Point> {
    if point.is_finite() {
        Ok(point)
    } else {
        Err(NavError::NonFinitePoint {
            name: name.to_string(),
            point,
        })
    }
}

/// Navigation queries against the current state of a scene.
pub struct NavigationService<P: SceneProvider> {
    provider: P,
    config: NavConfig,
}

impl<P: SceneProvider> NavigationService<P> {
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, NavConfig::new())
    }

    pub fn with_config(provider: P, config: NavConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// See [`find_path`].
    pub fn find_path(&self, start: Point, end: Point, candidates: &[SceneObject]) -> PathResult {
        find_path(start, end, candidates)
    }

    /// Candidate objects of the current scene snapshot, selected by the configured prefix.
    pub fn candidates(&self) -> Vec<SceneObject> {
        let snapshot = self.provider.snapshot();
        if self.config.candidate_prefix.is_empty() {
            snapshot
        } else {
            filter_by_prefix(&snapshot, &self.config.candidate_prefix)
        }
    }

    /// Finds a path between two points using the current scene candidates.
    pub fn find_path_in_scene(&self, start: Point, end: Point) -> NavResult<PathResult> {
        let start = check_finite("start", start)?;
        let end = check_finite("end", end)?;
        let candidates = self.candidates();
        let result = find_path(start, end, &candidates);
        if result.is_reachable() {
            info!(
                hops = result.path.len(),
                distance = result.distance,
                "Found path"
            );
        } else {
            info!(candidates = candidates.len(), "No path found");
        }
        Ok(result)
    }

    /// Finds a path between two ground-plane points given as text.
    ///
    /// The vertical coordinate comes from the config.
    pub fn find_path_xy(&self, x1: &str, y1: &str, x2: &str, y2: &str) -> NavResult<PathResult> {
        let start = ground_point(
            parse_coordinate("x1", x1)?,
            parse_coordinate("y1", y1)?,
            self.config.vertical,
        );
        let end = ground_point(
            parse_coordinate("x2", x2)?,
            parse_coordinate("y2", y2)?,
            self.config.vertical,
        );
        self.find_path_in_scene(start, end)
    }

    /// Recolors the targets on `result`'s path with the configured highlight color.
    pub fn highlight<T: PaintTarget>(&self, result: &PathResult, targets: &mut [T]) -> usize {
        highlight_path(result, targets, self.config.highlight_color)
    }
}
