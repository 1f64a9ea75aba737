use crate::scene::Scene;
use crate::types::SceneError;

/// Builds a [`Scene`] from raw asset bytes.
/// Implemented by [`GltfLoader`](crate::GltfLoader) (real glTF/GLB assets) and
/// [`MockHumanoid`](crate::MockHumanoid) (deterministic test double).
pub trait SceneLoader {
    fn load(&self, bytes: &[u8]) -> Result<Scene, SceneError>;
}
