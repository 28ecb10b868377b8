//! Graph construction from scene objects.
//!
//! Two objects are connected when their bounding boxes overlap (touching
//! counts). The edge weight is the distance between the object positions.
//! This is a proximity rule: overlapping boxes do not guarantee that the
//! represented road segments actually join.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::graph::Graph;
use crate::geom::bboxes::intersects;
use crate::scene::SceneObject;

#[derive(Debug, Clone, Copy, Default)]
pub struct GraphBuilder;

impl GraphBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Builds a fresh graph by testing every unordered pair of objects once.
    ///
    /// Every object becomes a vertex, including objects with no neighbors.
    /// Objects repeating an id already seen are skipped.
    pub fn build(&self, objects: &[SceneObject]) -> Graph {
        let mut seen = HashSet::new();
        let mut nodes: Vec<&SceneObject> = Vec::with_capacity(objects.len());
        for obj in objects.iter() {
            if seen.insert(obj.id.as_str()) {
                nodes.push(obj);
            } else {
                warn!(id = %obj.id, "Skipping scene object with duplicate id");
            }
        }

        let mut graph = Graph::new();
        for obj in nodes.iter() {
            graph.add_vertex(&obj.id);
        }

        for (i, obj1) in nodes.iter().enumerate() {
            for obj2 in nodes.iter().skip(i + 1) {
                if intersects(&obj1.bbox, &obj2.bbox) {
                    let weight = obj1.position.distance(&obj2.position);
                    graph.add_edge(&obj1.id, &obj2.id, weight);
                }
            }
        }

        debug!(
            vertices = graph.num_vertices(),
            edges = graph.num_edges(),
            "Built proximity graph"
        );
        graph
    }
}

/// Shorthand for `GraphBuilder::new().build(objects)`.
pub fn build_graph(objects: &[SceneObject]) -> Graph {
    GraphBuilder::new().build(objects)
}
