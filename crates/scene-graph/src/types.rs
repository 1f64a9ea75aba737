use body_types::ScaleVector;
use nalgebra::{Matrix4, Quaternion, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    /// Arena handle of a scene node.
    pub struct NodeId;
}

/// Local translation/rotation/scale of a node relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translation: [f64; 3],
    /// Unit quaternion, `[x, y, z, w]` order as in glTF.
    pub rotation: [f64; 4],
    pub scale: ScaleVector,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: [0.0; 3],
        rotation: [0.0, 0.0, 0.0, 1.0],
        scale: ScaleVector::ONE,
    };

    pub fn from_translation(translation: [f64; 3]) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Compose `T * R * S` as a homogeneous matrix.
    pub fn to_matrix(&self) -> Matrix4<f64> {
        let [tx, ty, tz] = self.translation;
        let [qx, qy, qz, qw] = self.rotation;
        let rotation = UnitQuaternion::from_quaternion(Quaternion::new(qw, qx, qy, qz));
        let scale = Vector3::new(self.scale.x, self.scale.y, self.scale.z);

        Matrix4::new_translation(&Vector3::new(tx, ty, tz))
            * rotation.to_homogeneous()
            * Matrix4::new_nonuniform_scaling(&scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A node in the loaded model hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneNode {
    pub name: Option<String>,
    pub transform: Transform,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// What the renderer reads for one node each frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub name: Option<String>,
    pub scale: ScaleVector,
    /// Column-major world matrix.
    pub world: [f32; 16],
}

/// Errors from scene construction and asset import.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SceneError {
    #[error("failed to import asset: {reason}")]
    Import { reason: String },

    #[error("asset contains no scene")]
    NoScene,

    #[error("node not found: {id:?}")]
    NodeNotFound { id: NodeId },
}
