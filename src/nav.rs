//! Navigation core: proximity graph, shortest path and nearest-node lookup.

pub mod builder;
pub mod graph;
pub mod highlight;
pub mod locator;
pub mod queue;
pub mod service;
pub mod tour;
