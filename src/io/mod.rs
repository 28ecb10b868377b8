//! File I/O for scenes.

pub mod scene_file;

pub use scene_file::{from_scene_string, read_scene, to_scene_string, write_scene};
