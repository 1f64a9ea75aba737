use body_types::{BodyPart, ParameterId};
use scene_graph::NodeSnapshot;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::controls::ControlPanel;

/// Messages from the control surface (JavaScript) to the engine.
/// Serialized as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiToEngine {
    /// The host started fetching the model file.
    BeginLoad,
    /// A slider moved. `name` is a parameter wire name such as `"height"`.
    SetParameter { name: String, value: f64 },
    /// Restore every parameter to its default.
    ResetParameters,
    GetParameters,
    GetControls,
    /// Current node transforms, for the renderer.
    GetTransforms,
    /// The host could not fetch the model file.
    LoadFailed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterValue {
    pub name: ParameterId,
    pub value: f64,
}

/// Messages from the engine to the control surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EngineToUi {
    /// The session is waiting for the model; `queued` changes are held.
    Loading { queued: usize },

    /// The model finished loading; controls may be shown.
    Ready {
        session_id: Uuid,
        controls: ControlPanel,
        /// Parts the model does not provide. Their bindings are skipped.
        missing_parts: Vec<BodyPart>,
    },

    /// A parameter was clamped, stored and applied.
    ParameterChanged { name: ParameterId, value: f64 },

    /// The model is still loading; the change will be applied once it is.
    Queued { name: ParameterId, value: f64 },

    Parameters { values: Vec<ParameterValue> },

    Controls { panel: ControlPanel },

    Transforms { nodes: Vec<NodeSnapshot> },

    /// The model could not be loaded. No controls will be available.
    LoadError { message: String },

    Error { message: String },
}
