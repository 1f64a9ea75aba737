use body_types::{BodyPart, ScaleTarget};
use tracing::{debug, warn};

use crate::scene::Scene;
use crate::types::NodeId;

/// Resolves body parts to the scene nodes that own their transforms.
///
/// Built once when the model finishes loading. A part the asset does not
/// provide resolves to `None`; callers treat that as a no-op.
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    root: NodeId,
    parts: [Option<NodeId>; BodyPart::COUNT],
}

impl ModelRegistry {
    /// Index the first node (in pre-order) named after each part.
    pub fn build(scene: &Scene) -> Self {
        let mut parts = [None; BodyPart::COUNT];

        for id in scene.traverse() {
            let Some(name) = scene.node(id).and_then(|n| n.name.as_deref()) else {
                continue;
            };
            let Some(part) = BodyPart::from_node_name(name) else {
                continue;
            };
            let slot = &mut parts[part.index()];
            if slot.is_none() {
                *slot = Some(id);
            } else {
                debug!(%part, "ignoring duplicate node for part");
            }
        }

        let registry = Self {
            root: scene.root(),
            parts,
        };

        let missing = registry.missing();
        if !missing.is_empty() {
            warn!(?missing, "model is missing body parts; their bindings will be skipped");
        }
        registry
    }

    /// The whole-model root.
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn resolve(&self, part: BodyPart) -> Option<NodeId> {
        self.parts[part.index()]
    }

    pub fn resolve_target(&self, target: ScaleTarget) -> Option<NodeId> {
        match target {
            ScaleTarget::Root => Some(self.root),
            ScaleTarget::Part(part) => self.resolve(part),
        }
    }

    /// Parts the loaded model does not provide.
    pub fn missing(&self) -> Vec<BodyPart> {
        BodyPart::ALL
            .into_iter()
            .filter(|p| self.resolve(*p).is_none())
            .collect()
    }

    pub fn resolved(&self) -> impl Iterator<Item = (BodyPart, NodeId)> + '_ {
        BodyPart::ALL
            .into_iter()
            .filter_map(|p| self.resolve(p).map(|id| (p, id)))
    }
}
