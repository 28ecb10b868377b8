use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// RGBA color tuple (red, green, blue, alpha) with values in 0.0..=1.0.
pub type Rgba = (f32, f32, f32, f32);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialData {
    pub name: String,
    pub color: Rgba,
}

/// Shared surface material.
///
/// Cloning a `Material` shares the underlying data. Changing the color of one
/// clone detaches it first, so other objects using the same material keep
/// their color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Material(Arc<MaterialData>);

impl Material {
    pub fn new(name: &str, color: Rgba) -> Self {
        Self(Arc::new(MaterialData {
            name: name.to_string(),
            color,
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn color(&self) -> Rgba {
        self.0.color
    }

    /// Returns true if both handles point at the same material data.
    pub fn is_shared_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Sets the color with copy-on-write semantics.
    pub fn set_color(&mut self, color: Rgba) {
        if self.0.color != color {
            Arc::make_mut(&mut self.0).color = color;
        }
    }
}

/// Something whose rendered color can be changed to mark it.
pub trait Paintable {
    fn set_highlight_color(&mut self, color: Rgba);
    fn highlight_color(&self) -> Rgba;
}

/// Renderable surface of a scene object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub material: Material,
}

impl Surface {
    pub fn new(material: Material) -> Self {
        Self { material }
    }
}

impl Paintable for Surface {
    fn set_highlight_color(&mut self, color: Rgba) {
        self.material.set_color(color);
    }

    fn highlight_color(&self) -> Rgba {
        self.material.color()
    }
}
