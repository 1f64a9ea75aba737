pub mod controls;
pub mod dispatch;
pub mod messages;
pub mod session_state;

#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

pub use controls::{control_panel, ControlDescriptor, ControlFolder, ControlPanel};
pub use dispatch::{complete_load, dispatch};
pub use messages::{EngineToUi, ParameterValue, UiToEngine};
pub use session_state::{BridgeError, LoadPhase, SessionState, SetOutcome};
