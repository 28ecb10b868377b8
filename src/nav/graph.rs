//! Undirected weighted graph with a shortest-path query.
//!
//! Vertices are object ids. Every edge is stored twice, once in the adjacency
//! list of each end, with the same weight. Parallel edges are allowed and do
//! not change shortest-path results.

use std::collections::HashMap;

use serde::{Serialize, Serializer};

use super::queue::{PriorityQueue, QueueEntry};

/// One half of an undirected edge, as stored in an adjacency list.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub neighbor: String,
    pub weight: f64,
}

/// An undirected edge listed once.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphEdge {
    pub id1: String,
    pub id2: String,
    pub weight: f64,
}

/// Result of a shortest-path query.
///
/// `path` is empty exactly when `distance` is infinite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub path: Vec<String>,
    /// Serialized as `null` when there is no path.
    #[serde(serialize_with = "serialize_distance")]
    pub distance: f64,
}

fn serialize_distance<S: Serializer>(distance: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if distance.is_finite() {
        serializer.serialize_f64(*distance)
    } else {
        serializer.serialize_none()
    }
}

impl PathResult {
    pub fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            distance: f64::INFINITY,
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<String, Vec<Edge>>,
    // Vertex ids in insertion order, so searches are deterministic
    order: Vec<String>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex without edges. Does nothing if it already exists.
    pub fn add_vertex(&mut self, id: &str) {
        if !self.adjacency.contains_key(id) {
            self.adjacency.insert(id.to_string(), Vec::new());
            self.order.push(id.to_string());
        }
    }

    /// Adds an undirected edge, inserting missing vertices.
    ///
    /// Weights must be non-negative for `shortest_path()` to be correct.
    pub fn add_edge(&mut self, u: &str, v: &str, weight: f64) {
        self.add_vertex(u);
        self.add_vertex(v);
        if let Some(edges) = self.adjacency.get_mut(u) {
            edges.push(Edge {
                neighbor: v.to_string(),
                weight,
            });
        }
        if let Some(edges) = self.adjacency.get_mut(v) {
            edges.push(Edge {
                neighbor: u.to_string(),
                weight,
            });
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Returns the adjacency list of `id` (empty for unknown vertices).
    pub fn neighbors(&self, id: &str) -> &[Edge] {
        self.adjacency.get(id).map(|e| e.as_slice()).unwrap_or(&[])
    }

    /// Vertex ids in insertion order.
    pub fn vertices(&self) -> &[String] {
        &self.order
    }

    pub fn num_vertices(&self) -> usize {
        self.order.len()
    }

    /// Number of undirected edges (parallel edges counted separately).
    pub fn num_edges(&self) -> usize {
        self.adjacency.values().map(|e| e.len()).sum::<usize>() / 2
    }

    /// Returns every undirected edge once, ordered by the first vertex.
    ///
    /// Self-loops are not listed.
    pub fn edges(&self) -> Vec<GraphEdge> {
        let position: HashMap<&str, usize> = self
            .order
            .iter()
            .enumerate()
            .map(|(i, id)| (id.as_str(), i))
            .collect();

        let mut edges = Vec::new();
        for (i, id) in self.order.iter().enumerate() {
            for edge in self.neighbors(id) {
                let j = position.get(edge.neighbor.as_str()).copied().unwrap_or(i);
                if i < j {
                    edges.push(GraphEdge {
                        id1: id.clone(),
                        id2: edge.neighbor.clone(),
                        weight: edge.weight,
                    });
                }
            }
        }
        edges
    }

    /// Dijkstra's shortest path from `start` to `end`.
    ///
    /// All vertices are put in the frontier up front. Improved distances are
    /// pushed as new entries and the outdated ones are left in place, so a
    /// vertex may be popped more than once.
    ///
    /// Unknown or disconnected vertices give `PathResult::unreachable()`.
    pub fn shortest_path(&self, start: &str, end: &str) -> PathResult {
        let Some((start, _)) = self.adjacency.get_key_value(start) else {
            return PathResult::unreachable();
        };
        let start = start.as_str();

        let mut distances: HashMap<&str, f64> = self
            .order
            .iter()
            .map(|id| (id.as_str(), f64::INFINITY))
            .collect();
        distances.insert(start, 0.);
        let mut previous: HashMap<&str, &str> = HashMap::new();

        let mut frontier = PriorityQueue::new();
        for id in self.order.iter() {
            let id = id.as_str();
            frontier.enqueue(id, distances[id]);
        }

        while let Some(QueueEntry { element: current, .. }) = frontier.dequeue() {
            let current_distance = distances[current];

            if current == end {
                if current_distance.is_infinite() {
                    break;
                }
                return PathResult {
                    path: reconstruct_path(&previous, start, current),
                    distance: current_distance,
                };
            }

            if current_distance.is_infinite() {
                continue;
            }

            for edge in self.neighbors(current) {
                let neighbor = edge.neighbor.as_str();
                let candidate = current_distance + edge.weight;
                if let Some(known) = distances.get_mut(neighbor) {
                    if candidate < *known {
                        *known = candidate;
                        previous.insert(neighbor, current);
                        frontier.enqueue(neighbor, candidate);
                    }
                }
            }
        }

        PathResult::unreachable()
    }
}

/// Walks predecessor links back from `end` to `start`.
fn reconstruct_path(previous: &HashMap<&str, &str>, start: &str, end: &str) -> Vec<String> {
    let mut path = vec![end.to_string()];
    let mut current = end;
    while current != start {
        match previous.get(current) {
            Some(&prev) => {
                path.push(prev.to_string());
                current = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn make_triangle() -> Graph {
        let mut g = Graph::new();
        g.add_edge("A", "B", 3.);
        g.add_edge("B", "C", 4.);
        g.add_edge("A", "C", 10.);
        g
    }

    #[test]
    fn test_add_edge_is_symmetric() {
        let g = make_triangle();
        assert_eq!(g.num_vertices(), 3);
        assert_eq!(g.num_edges(), 3);
        for id in g.vertices() {
            for edge in g.neighbors(id) {
                let back = g
                    .neighbors(&edge.neighbor)
                    .iter()
                    .filter(|e| e.neighbor == *id)
                    .count();
                assert_eq!(back, 1);
            }
        }
        assert_eq!(g.vertices(), &["A", "B", "C"]);
        assert!(g.neighbors("missing").is_empty());
    }

    #[test]
    fn test_edges_listed_once() {
        let g = make_triangle();
        let edges = g.edges();
        assert_eq!(edges.len(), 3);
        assert_eq!(
            edges[0],
            GraphEdge {
                id1: "A".to_string(),
                id2: "B".to_string(),
                weight: 3.
            }
        );
    }

    #[test]
    fn test_triangle_prefers_two_hops() {
        let g = make_triangle();
        let result = g.shortest_path("A", "C");
        assert_eq!(result.path, vec!["A", "B", "C"]);
        assert_eq!(result.distance, 7.);
    }

    #[test]
    fn test_identity_path() {
        let g = make_triangle();
        for id in ["A", "B", "C"] {
            let result = g.shortest_path(id, id);
            assert_eq!(result.path, vec![id]);
            assert_eq!(result.distance, 0.);
        }
    }

    #[test]
    fn test_isolated_vertex_identity_path() {
        let mut g = Graph::new();
        g.add_vertex("lonely");
        let result = g.shortest_path("lonely", "lonely");
        assert_eq!(result.path, vec!["lonely"]);
        assert_eq!(result.distance, 0.);
    }

    #[test]
    fn test_disconnected_is_unreachable() {
        let mut g = make_triangle();
        g.add_edge("X", "Y", 1.);
        let result = g.shortest_path("A", "Y");
        assert_eq!(result, PathResult::unreachable());
        assert!(!result.is_reachable());
    }

    #[test]
    fn test_unknown_vertices_are_unreachable() {
        let g = make_triangle();
        assert_eq!(g.shortest_path("nope", "A"), PathResult::unreachable());
        assert_eq!(g.shortest_path("A", "nope"), PathResult::unreachable());
        assert_eq!(Graph::new().shortest_path("A", "A"), PathResult::unreachable());
    }

    #[test]
    fn test_path_result_json() {
        let result = make_triangle().shortest_path("A", "C");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["distance"], serde_json::json!(7.0));
        assert_eq!(json["path"], serde_json::json!(["A", "B", "C"]));

        let json = serde_json::to_value(PathResult::unreachable()).unwrap();
        assert!(json["distance"].is_null());
        assert_eq!(json["path"], serde_json::json!([]));
    }

    #[test]
    fn test_parallel_edges() {
        let mut g = make_triangle();
        g.add_edge("A", "C", 1.);
        assert_eq!(g.num_edges(), 4);
        let result = g.shortest_path("A", "C");
        assert_eq!(result.path, vec!["A", "C"]);
        assert_eq!(result.distance, 1.);
    }

    #[test]
    fn test_distance_matches_path_weights() {
        // Grid-like graph with a few shortcuts
        let mut g = Graph::new();
        g.add_edge("a", "b", 1.);
        g.add_edge("b", "c", 2.);
        g.add_edge("c", "d", 1.);
        g.add_edge("a", "e", 2.5);
        g.add_edge("e", "d", 2.);
        g.add_edge("b", "e", 0.5);
        let result = g.shortest_path("a", "d");
        assert_eq!(result.path, vec!["a", "b", "e", "d"]);
        assert_eq!(result.distance, 3.5);

        let mut sum = 0.;
        for pair in result.path.windows(2) {
            sum += g
                .neighbors(&pair[0])
                .iter()
                .filter(|e| e.neighbor == pair[1])
                .map(|e| e.weight)
                .fold(f64::INFINITY, f64::min);
        }
        assert_eq!(sum, result.distance);
    }

    #[test]
    fn test_random_path_symmetry() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let mut g = Graph::new();
            let n = 12;
            for _ in 0..25 {
                let u = rng.gen_range(0..n);
                let v = rng.gen_range(0..n);
                let w: f64 = rng.gen_range(0.0..10.0);
                g.add_edge(&format!("n{u}"), &format!("n{v}"), w);
            }
            let ids = g.vertices().to_vec();
            for u in ids.iter() {
                for v in ids.iter() {
                    let forward = g.shortest_path(u, v);
                    let backward = g.shortest_path(v, u);
                    assert_eq!(forward.is_reachable(), backward.is_reachable());
                    if forward.is_reachable() {
                        assert!((forward.distance - backward.distance).abs() < 1e-9);
                        assert_eq!(forward.path.first(), Some(u));
                        assert_eq!(forward.path.last(), Some(v));
                    } else {
                        assert!(forward.distance.is_infinite());
                    }
                }
            }
        }
    }
}
