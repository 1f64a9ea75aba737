use body_types::ParameterId;
use scene_graph::SceneLoader;

use crate::controls::control_panel;
use crate::messages::{EngineToUi, ParameterValue, UiToEngine};
use crate::session_state::{BridgeError, SessionState, SetOutcome};

/// Dispatch a control-surface message to the session and return a response.
///
/// Errors never escape: they are reported as [`EngineToUi::Error`].
pub fn dispatch(state: &mut SessionState, msg: UiToEngine) -> EngineToUi {
    match handle_message(state, msg) {
        Ok(response) => response,
        Err(e) => EngineToUi::Error {
            message: e.to_string(),
        },
    }
}

/// Import the model bytes and finish the session's load.
///
/// Import failures are reported as [`EngineToUi::LoadError`] and leave the
/// session without controls.
pub fn complete_load(state: &mut SessionState, bytes: &[u8], loader: &dyn SceneLoader) -> EngineToUi {
    match state.complete_load(loader.load(bytes)) {
        Ok(_) => match ready_response(state) {
            Ok(response) => response,
            Err(e) => EngineToUi::Error {
                message: e.to_string(),
            },
        },
        Err(BridgeError::LoadFailed { reason }) => EngineToUi::LoadError { message: reason },
        Err(e) => EngineToUi::Error {
            message: e.to_string(),
        },
    }
}

fn handle_message(state: &mut SessionState, msg: UiToEngine) -> Result<EngineToUi, BridgeError> {
    match msg {
        UiToEngine::BeginLoad => Ok(EngineToUi::Loading {
            queued: state.begin_load()?,
        }),

        UiToEngine::SetParameter { name, value } => {
            let id: ParameterId = name.parse()?;
            match state.request_set(id, value)? {
                SetOutcome::Applied(value) => Ok(EngineToUi::ParameterChanged { name: id, value }),
                SetOutcome::Queued(value) => Ok(EngineToUi::Queued { name: id, value }),
            }
        }

        UiToEngine::ResetParameters => {
            state.engine_mut()?.reset_to_defaults();
            parameters_response(state)
        }

        UiToEngine::GetParameters => parameters_response(state),

        UiToEngine::GetControls => Ok(EngineToUi::Controls {
            panel: control_panel(state.engine()?.parameters()),
        }),

        UiToEngine::GetTransforms => Ok(EngineToUi::Transforms {
            nodes: state.engine()?.scene().snapshot(),
        }),

        UiToEngine::LoadFailed { reason } => {
            state.fail_load(reason.clone())?;
            Ok(EngineToUi::LoadError { message: reason })
        }
    }
}

fn ready_response(state: &SessionState) -> Result<EngineToUi, BridgeError> {
    let engine = state.engine()?;
    Ok(EngineToUi::Ready {
        session_id: engine.session_id(),
        controls: control_panel(engine.parameters()),
        missing_parts: engine.registry().missing(),
    })
}

fn parameters_response(state: &SessionState) -> Result<EngineToUi, BridgeError> {
    let values = state
        .engine()?
        .parameters()
        .iter()
        .map(|(spec, value)| ParameterValue {
            name: spec.id,
            value,
        })
        .collect();
    Ok(EngineToUi::Parameters { values })
}
