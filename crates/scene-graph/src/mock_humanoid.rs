//! MockHumanoid: deterministic test double implementing SceneLoader.
//!
//! Builds a small rigid humanoid hierarchy without touching any asset file.
//! Individual parts can be left out to model partially-rigged assets.

use std::collections::BTreeSet;

use body_types::BodyPart;

use crate::scene::Scene;
use crate::traits::SceneLoader;
use crate::types::{NodeId, SceneError, Transform};

/// Name of the group node the parts hang under, below the model root.
pub const ARMATURE_NAME: &str = "humanoid";

#[derive(Debug, Clone)]
pub struct MockHumanoid {
    parts: BTreeSet<BodyPart>,
}

impl MockHumanoid {
    /// A humanoid exposing all nine parts.
    pub fn new() -> Self {
        Self {
            parts: BodyPart::ALL.into_iter().collect(),
        }
    }

    /// A humanoid exposing only the given parts.
    pub fn with_parts(parts: impl IntoIterator<Item = BodyPart>) -> Self {
        Self {
            parts: parts.into_iter().collect(),
        }
    }

    /// Drop a part from the hierarchy.
    pub fn without(mut self, part: BodyPart) -> Self {
        self.parts.remove(&part);
        self
    }

    pub fn build(&self) -> Scene {
        let mut scene = Scene::new();
        let root = scene.root();
        // Parent lookups cannot fail: every parent is inserted before its children.
        let add = |scene: &mut Scene, parent: NodeId, name: &str, t: [f64; 3]| {
            scene
                .add_node(parent, Some(name.to_string()), Transform::from_translation(t))
                .unwrap_or(parent)
        };

        let armature = add(&mut scene, root, ARMATURE_NAME, [0.0, 0.0, 0.0]);
        let pelvis = self.part_or_group(&mut scene, armature, BodyPart::Abdominal, [0.0, 1.0, 0.0]);
        let chest = self.part_or_group(&mut scene, pelvis, BodyPart::Torso, [0.0, 0.35, 0.0]);
        self.part_or_group(&mut scene, chest, BodyPart::Neck, [0.0, 0.3, 0.0]);
        self.part_or_group(&mut scene, chest, BodyPart::RightArm, [-0.25, 0.2, 0.0]);
        self.part_or_group(&mut scene, chest, BodyPart::LeftArm, [0.25, 0.2, 0.0]);
        let right_thigh = self.part_or_group(&mut scene, pelvis, BodyPart::RightThigh, [-0.1, -0.1, 0.0]);
        self.part_or_group(&mut scene, right_thigh, BodyPart::RightCalf, [0.0, -0.45, 0.0]);
        let left_thigh = self.part_or_group(&mut scene, pelvis, BodyPart::LeftThigh, [0.1, -0.1, 0.0]);
        self.part_or_group(&mut scene, left_thigh, BodyPart::LeftCalf, [0.0, -0.45, 0.0]);

        // An unrelated named node, so lookups have something to skip over.
        add(&mut scene, armature, "head", [0.0, 1.9, 0.0]);
        scene
    }

    /// Insert the part's node, or an unnamed group in its place when the
    /// part is excluded, so the rest of the hierarchy keeps its shape.
    fn part_or_group(&self, scene: &mut Scene, parent: NodeId, part: BodyPart, t: [f64; 3]) -> NodeId {
        let name = self
            .parts
            .contains(&part)
            .then(|| part.node_name().to_string());
        scene
            .add_node(parent, name, Transform::from_translation(t))
            .unwrap_or(parent)
    }
}

impl Default for MockHumanoid {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneLoader for MockHumanoid {
    /// Ignores `bytes`; the hierarchy is fixed.
    fn load(&self, _bytes: &[u8]) -> Result<Scene, SceneError> {
        Ok(self.build())
    }
}
