//! glTF 2.0 importer (binary `.glb` or JSON `.gltf`).
//!
//! Only the node hierarchy is read: names and local TRS transforms. Meshes,
//! materials and buffers belong to the renderer.

use std::collections::HashSet;

use body_types::ScaleVector;
use tracing::{debug, info};

use crate::scene::Scene;
use crate::traits::SceneLoader;
use crate::types::{NodeId, SceneError, Transform};

/// Imports the default scene of a glTF asset, or its first scene when no
/// default is declared.
#[derive(Debug, Clone, Copy, Default)]
pub struct GltfLoader;

impl GltfLoader {
    pub fn new() -> Self {
        Self
    }
}

impl SceneLoader for GltfLoader {
    fn load(&self, bytes: &[u8]) -> Result<Scene, SceneError> {
        let gltf = gltf::Gltf::from_slice(bytes).map_err(|e| SceneError::Import {
            reason: e.to_string(),
        })?;

        let source = gltf
            .default_scene()
            .or_else(|| gltf.scenes().next())
            .ok_or(SceneError::NoScene)?;

        let mut scene = Scene::new();
        let root = scene.root();
        let mut seen = HashSet::new();

        let mut stack: Vec<(gltf::Node<'_>, NodeId)> =
            source.nodes().map(|node| (node, root)).collect();
        stack.reverse();

        while let Some((node, parent)) = stack.pop() {
            if !seen.insert(node.index()) {
                return Err(SceneError::Import {
                    reason: format!("node {} appears more than once in the hierarchy", node.index()),
                });
            }

            let name = node.name().map(sanitize_node_name);
            debug!(index = node.index(), name = ?name, "importing node");
            let id = scene.add_node(parent, name, node_transform(&node))?;

            let children: Vec<_> = node.children().collect();
            stack.extend(children.into_iter().rev().map(|child| (child, id)));
        }

        info!(nodes = scene.len(), "imported glTF scene");
        Ok(scene)
    }
}

fn node_transform(node: &gltf::Node<'_>) -> Transform {
    let (t, r, s) = node.transform().decomposed();
    Transform {
        translation: t.map(f64::from),
        rotation: r.map(f64::from),
        scale: ScaleVector::from(s.map(f64::from)),
    }
}

/// Normalize a node name the way web glTF viewers do before name lookup:
/// whitespace becomes `_` and the reserved characters `[ ] . : /` are dropped.
pub fn sanitize_node_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '[' | ']' | '.' | ':' | '/'))
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_replaces_whitespace_and_drops_reserved() {
        assert_eq!(sanitize_node_name("right calf"), "right_calf");
        assert_eq!(sanitize_node_name("torso.001"), "torso001");
        assert_eq!(sanitize_node_name("arm[L]:mesh/0"), "armLmesh0");
        assert_eq!(sanitize_node_name("neck"), "neck");
    }
}
