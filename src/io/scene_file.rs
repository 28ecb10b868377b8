//! JSON scene files.
//!
//! A scene file is the serialized `Scene`: a name and a flat list of objects,
//! each with an id, a position, a bounding box and an optional surface
//! material. Boxes and id uniqueness are checked on load.

use crate::Scene;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Writes a scene to a JSON file.
///
/// # Example
/// ```no_run
/// use campusnav::{Point, Scene, SceneObject};
/// use campusnav::io::write_scene;
/// use std::path::Path;
///
/// let road = SceneObject::from_box("road_1", Point::new(0., 0., 0.), (2., 0.1, 1.)).unwrap();
/// let scene = Scene::from_objects("campus", vec![road]).unwrap();
/// write_scene(Path::new("campus.json"), &scene).unwrap();
/// ```
pub fn write_scene(path: &Path, scene: &Scene) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, scene)
        .with_context(|| format!("Failed to serialize scene to: {}", path.display()))?;

    Ok(())
}

/// Reads a scene from a JSON file.
pub fn read_scene(path: &Path) -> Result<Scene> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let scene: Scene = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to deserialize scene from: {}", path.display()))?;
    scene
        .validate()
        .with_context(|| format!("Invalid scene in: {}", path.display()))?;

    Ok(scene)
}

/// Serializes a scene to a JSON string.
pub fn to_scene_string(scene: &Scene) -> Result<String> {
    serde_json::to_string_pretty(scene).context("Failed to serialize scene to string")
}

/// Deserializes a scene from a JSON string.
pub fn from_scene_string(json: &str) -> Result<Scene> {
    let scene: Scene =
        serde_json::from_str(json).context("Failed to deserialize scene from string")?;
    scene.validate()?;
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::material::Material;
    use crate::{Point, SceneObject};
    use tempfile::tempdir;

    fn make_scene() -> Scene {
        let asphalt = Material::new("asphalt", (0.3, 0.3, 0.3, 1.0));
        let objects = vec![
            SceneObject::from_box("road_1", Point::new(0., 0., 0.), (2., 0.1, 1.))
                .unwrap()
                .with_material(asphalt.clone()),
            SceneObject::from_box("road_2", Point::new(2., 0., 0.), (2., 0.1, 1.))
                .unwrap()
                .with_material(asphalt),
            SceneObject::from_box("waypoint_gate", Point::new(0., 0.5, 0.), (0.2, 1., 0.2))
                .unwrap(),
        ];
        Scene::from_objects("campus", objects).unwrap()
    }

    #[test]
    fn test_write_and_read_scene() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("campus.json");

        let original = make_scene();
        write_scene(&path, &original)?;
        let loaded = read_scene(&path)?;

        assert_eq!(loaded.name, "campus");
        assert_eq!(loaded.objects(), original.objects());
        assert!(loaded.get("waypoint_gate").unwrap().surface.is_none());

        Ok(())
    }

    #[test]
    fn test_minimal_json() -> Result<()> {
        let json = r#"{
            "name": "tiny",
            "objects": [
                {
                    "id": "road_1",
                    "position": {"x": 0, "y": 0, "z": 0},
                    "bbox": {"min": {"x": -1, "y": 0, "z": -1}, "max": {"x": 1, "y": 0, "z": 1}}
                }
            ]
        }"#;
        let scene = from_scene_string(json)?;
        assert_eq!(scene.objects().len(), 1);
        assert!(to_scene_string(&scene)?.contains("\"road_1\""));
        Ok(())
    }

    #[test]
    fn test_rejects_inverted_box() {
        let json = r#"{
            "name": "bad",
            "objects": [
                {
                    "id": "road_1",
                    "position": {"x": 0, "y": 0, "z": 0},
                    "bbox": {"min": {"x": 1, "y": 0, "z": 0}, "max": {"x": -1, "y": 0, "z": 0}}
                }
            ]
        }"#;
        assert!(from_scene_string(json).is_err());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let json = r#"{
            "name": "dup",
            "objects": [
                {"id": "a", "position": {"x": 0, "y": 0, "z": 0},
                 "bbox": {"min": {"x": 0, "y": 0, "z": 0}, "max": {"x": 1, "y": 1, "z": 1}}},
                {"id": "a", "position": {"x": 0, "y": 0, "z": 0},
                 "bbox": {"min": {"x": 0, "y": 0, "z": 0}, "max": {"x": 1, "y": 1, "z": 1}}}
            ]
        }"#;
        let err = from_scene_string(json).unwrap_err();
        assert!(err.to_string().contains("duplicate object id"));
    }

    #[test]
    fn test_missing_file() {
        let err = read_scene(Path::new("/nonexistent/campus.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to open file"));
    }
}
