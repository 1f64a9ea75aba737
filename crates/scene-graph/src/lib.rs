pub mod gltf_loader;
pub mod mock_humanoid;
pub mod registry;
pub mod scene;
pub mod traits;
pub mod types;

pub use gltf_loader::GltfLoader;
pub use mock_humanoid::MockHumanoid;
pub use registry::ModelRegistry;
pub use scene::Scene;
pub use traits::SceneLoader;
pub use types::*;
