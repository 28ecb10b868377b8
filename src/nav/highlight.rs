use std::collections::HashSet;

use tracing::debug;

use super::graph::PathResult;
use crate::scene::PaintTarget;
use crate::scene::material::Rgba;

/// Recolors every target whose id is on the path.
///
/// Targets without a paintable surface are skipped. Returns the number of
/// surfaces recolored. Calling it again with the same path changes nothing.
pub fn highlight_path<T: PaintTarget>(
    result: &PathResult,
    targets: &mut [T],
    color: Rgba,
) -> usize {
    let on_path: HashSet<&str> = result.path.iter().map(|s| s.as_str()).collect();
    if on_path.is_empty() {
        return 0;
    }

    let mut count = 0;
    for target in targets.iter_mut() {
        if !on_path.contains(target.get_name()) {
            continue;
        }
        match target.paintable_mut() {
            Some(surface) => {
                surface.set_highlight_color(color);
                count += 1;
            }
            None => debug!(id = %target.get_name(), "Path object has no paintable surface"),
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::point::Point;
    use crate::name::HasName;
    use crate::scene::SceneObject;
    use crate::scene::material::{Material, Paintable};

    const GREY: Rgba = (0.5, 0.5, 0.5, 1.0);
    const RED: Rgba = (1.0, 0.0, 0.0, 1.0);

    fn make_objects() -> Vec<SceneObject> {
        let asphalt = Material::new("asphalt", GREY);
        vec![
            SceneObject::from_box("road_1", Point::new(0., 0., 0.), (1., 1., 1.))
                .unwrap()
                .with_material(asphalt.clone()),
            SceneObject::from_box("road_2", Point::new(1., 0., 0.), (1., 1., 1.))
                .unwrap()
                .with_material(asphalt.clone()),
            SceneObject::from_box("road_3", Point::new(2., 0., 0.), (1., 1., 1.)).unwrap(),
        ]
    }

    fn color_of(obj: &SceneObject) -> Option<Rgba> {
        obj.surface.as_ref().map(|s| s.highlight_color())
    }

    #[test]
    fn test_highlight_path() {
        let mut objects = make_objects();
        let result = PathResult {
            path: vec!["road_1".to_string(), "road_3".to_string()],
            distance: 2.,
        };
        let count = highlight_path(&result, &mut objects, RED);
        assert_eq!(count, 1);
        assert_eq!(color_of(&objects[0]), Some(RED));
        // Shares the material with road_1 but is not on the path
        assert_eq!(color_of(&objects[1]), Some(GREY));
        // No surface
        assert_eq!(objects[2].get_name(), "road_3");
        assert_eq!(color_of(&objects[2]), None);
    }

    #[test]
    fn test_highlight_is_idempotent() {
        let mut objects = make_objects();
        let result = PathResult {
            path: vec!["road_1".to_string(), "road_2".to_string()],
            distance: 1.,
        };
        assert_eq!(highlight_path(&result, &mut objects, RED), 2);
        let after_first = objects.clone();
        assert_eq!(highlight_path(&result, &mut objects, RED), 2);
        assert_eq!(objects, after_first);
    }

    #[test]
    fn test_unreachable_highlights_nothing() {
        let mut objects = make_objects();
        assert_eq!(highlight_path(&PathResult::unreachable(), &mut objects, RED), 0);
        assert_eq!(color_of(&objects[0]), Some(GREY));
    }
}
