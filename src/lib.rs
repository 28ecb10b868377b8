pub mod config;
pub mod error;
pub mod geom;
pub mod io;
mod name;
pub mod nav;
pub mod scene;

// Prelude
pub use config::NavConfig;
pub use error::NavError;
pub use geom::bboxes::Aabb;
pub use geom::point::Point;
pub use geom::vector::Vector;
pub use name::{HasName, SortByName};
pub use nav::builder::{GraphBuilder, build_graph};
pub use nav::graph::{Graph, PathResult};
pub use nav::highlight::highlight_path;
pub use nav::locator::{NearestNode, locate};
pub use nav::queue::PriorityQueue;
pub use nav::service::{NavigationService, find_path};
pub use nav::tour::{CancelToken, Tour, TourState};
pub use scene::material::{Material, Paintable, Rgba};
pub use scene::{ObjectGroup, PaintTarget, Scene, SceneObject, SceneProvider};
