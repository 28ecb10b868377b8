//! Scene objects as seen by the navigation core.
//!
//! Rendering and asset loading live outside this crate. What the core needs
//! from a scene is a list of named objects with a world position and a
//! world-space bounding box, plus a way to recolor the ones on a path.

pub mod material;

use crate::geom::bboxes::Aabb;
use crate::geom::point::Point;
use crate::name::{HasName, filter_by_prefix};
use anyhow::{Result, anyhow};
use material::{Material, Paintable, Surface};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Named groups of scene objects, selected by id prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectGroup {
    Road,
    Location,
    Waypoint,
    Building,
}

impl ObjectGroup {
    pub fn prefix(&self) -> &'static str {
        match self {
            ObjectGroup::Road => "road_",
            ObjectGroup::Location => "location",
            ObjectGroup::Waypoint => "waypoint_",
            ObjectGroup::Building => "building",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub id: String,
    pub position: Point,
    pub bbox: Aabb,
    #[serde(default)]
    pub surface: Option<Surface>,
}

impl HasName for SceneObject {
    fn get_name(&self) -> &str {
        &self.id
    }
}

impl SceneObject {
    pub fn new(id: &str, position: Point, bbox: Aabb) -> Self {
        Self {
            id: id.to_string(),
            position,
            bbox,
            surface: None,
        }
    }

    /// Creates an object whose box is centered at `center` with sizes `(sx, sy, sz)`.
    pub fn from_box(id: &str, center: Point, size: (f64, f64, f64)) -> Result<Self> {
        let bbox = Aabb::from_center(center, size.0, size.1, size.2)?;
        Ok(Self::new(id, center, bbox))
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.surface = Some(Surface::new(material));
        self
    }
}

/// Named object that may or may not have a paintable surface.
pub trait PaintTarget: HasName {
    fn paintable_mut(&mut self) -> Option<&mut dyn Paintable>;
}

impl PaintTarget for SceneObject {
    fn paintable_mut(&mut self) -> Option<&mut dyn Paintable> {
        self.surface.as_mut().map(|s| s as &mut dyn Paintable)
    }
}

/// Source of the current set of scene objects.
pub trait SceneProvider {
    /// Returns a copy of the objects as they are now.
    fn snapshot(&self) -> Vec<SceneObject>;
}

impl<T: SceneProvider + ?Sized> SceneProvider for &T {
    fn snapshot(&self) -> Vec<SceneObject> {
        (**self).snapshot()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    pub name: String,
    objects: Vec<SceneObject>,
}

impl HasName for Scene {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl SceneProvider for Scene {
    fn snapshot(&self) -> Vec<SceneObject> {
        self.objects.clone()
    }
}

impl Scene {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            objects: Vec::new(),
        }
    }

    /// Creates a scene from objects. Fails on duplicate ids.
    pub fn from_objects(name: &str, objects: Vec<SceneObject>) -> Result<Self> {
        let mut scene = Self::new(name);
        for obj in objects {
            scene.add_object(obj)?;
        }
        Ok(scene)
    }

    pub fn add_object(&mut self, obj: SceneObject) -> Result<()> {
        if self.get(&obj.id).is_some() {
            return Err(anyhow!(
                "Scene '{}' already contains an object named '{}'",
                self.name,
                obj.id
            ));
        }
        self.objects.push(obj);
        Ok(())
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut [SceneObject] {
        &mut self.objects
    }

    pub fn get(&self, id: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    /// Returns objects whose id starts with `prefix`, in scene order.
    pub fn with_prefix(&self, prefix: &str) -> Vec<SceneObject> {
        filter_by_prefix(&self.objects, prefix)
    }

    pub fn group(&self, group: ObjectGroup) -> Vec<SceneObject> {
        self.with_prefix(group.prefix())
    }

    /// Checks that object ids are unique (scenes read from files bypass `add_object`).
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for obj in self.objects.iter() {
            if !seen.insert(obj.id.as_str()) {
                return Err(anyhow!(
                    "Scene '{}' contains duplicate object id '{}'",
                    self.name,
                    obj.id
                ));
            }
        }
        Ok(())
    }
}
