//! High-level session driver for scripted slider scenarios.
//!
//! Every call goes through the real message dispatch, so tests exercise the
//! same path the browser host does. Responses are recorded for inspection.

use binding_engine::BodyEngine;
use body_types::{BodyPart, ParameterId, ScaleTarget, ScaleVector};
use control_bridge::{complete_load, dispatch, EngineToUi, SessionState, UiToEngine};
use scene_graph::{GltfLoader, MockHumanoid, NodeSnapshot, SceneLoader};

use crate::assertions::assert_scale_eq;
use crate::helpers::HarnessError;

/// Drives one session through load and slider changes.
///
/// # Example
///
/// ```ignore
/// let mut s = SessionDriver::mock()?;
/// s.set("height", 1.2)?;
/// s.assert_scale(ScaleTarget::Root, ScaleVector::new(1.0, 1.2, 1.0))?;
/// ```
pub struct SessionDriver {
    state: SessionState,
    history: Vec<EngineToUi>,
}

impl SessionDriver {
    /// A session that has not loaded a model yet.
    pub fn new() -> Self {
        Self {
            state: SessionState::new(),
            history: Vec::new(),
        }
    }

    /// A session loaded with the full mock humanoid.
    pub fn mock() -> Result<Self, HarnessError> {
        Self::loaded(&MockHumanoid::new(), &[])
    }

    /// A session loaded from glTF or GLB bytes.
    pub fn gltf(bytes: &[u8]) -> Result<Self, HarnessError> {
        Self::loaded(&GltfLoader::new(), bytes)
    }

    fn loaded(loader: &dyn SceneLoader, bytes: &[u8]) -> Result<Self, HarnessError> {
        let mut driver = Self::new();
        driver.load(loader, bytes)?;
        Ok(driver)
    }

    // ── Session lifecycle ───────────────────────────────────────────

    /// Finish loading and return the parts the model lacks.
    pub fn load(
        &mut self,
        loader: &dyn SceneLoader,
        bytes: &[u8],
    ) -> Result<Vec<BodyPart>, HarnessError> {
        let response = complete_load(&mut self.state, bytes, loader);
        self.history.push(response.clone());
        match response {
            EngineToUi::Ready { missing_parts, .. } => Ok(missing_parts),
            other => Err(unexpected("load", other)),
        }
    }

    /// Send a raw message and return the response.
    pub fn send(&mut self, msg: UiToEngine) -> EngineToUi {
        let response = dispatch(&mut self.state, msg);
        self.history.push(response.clone());
        response
    }

    // ── Slider operations ───────────────────────────────────────────

    /// Move a slider. Returns the value the engine accepted, whether it
    /// was applied or queued.
    pub fn set(&mut self, name: &str, value: f64) -> Result<f64, HarnessError> {
        let response = self.send(UiToEngine::SetParameter {
            name: name.to_string(),
            value,
        });
        match response {
            EngineToUi::ParameterChanged { value, .. } | EngineToUi::Queued { value, .. } => {
                Ok(value)
            }
            EngineToUi::Error { message } => Err(HarnessError::DispatchError { message }),
            other => Err(unexpected("SetParameter", other)),
        }
    }

    /// Restore every slider to its default.
    pub fn reset(&mut self) -> Result<(), HarnessError> {
        match self.send(UiToEngine::ResetParameters) {
            EngineToUi::Parameters { .. } => Ok(()),
            EngineToUi::Error { message } => Err(HarnessError::DispatchError { message }),
            other => Err(unexpected("ResetParameters", other)),
        }
    }

    /// Snapshot of every node, in traversal order.
    pub fn transforms(&mut self) -> Result<Vec<NodeSnapshot>, HarnessError> {
        match self.send(UiToEngine::GetTransforms) {
            EngineToUi::Transforms { nodes } => Ok(nodes),
            EngineToUi::Error { message } => Err(HarnessError::DispatchError { message }),
            other => Err(unexpected("GetTransforms", other)),
        }
    }

    // ── Queries ─────────────────────────────────────────────────────

    pub fn engine(&self) -> Result<&BodyEngine, HarnessError> {
        self.state
            .engine()
            .map_err(|e| HarnessError::Engine(e.to_string()))
    }

    pub fn value(&self, id: ParameterId) -> Result<f64, HarnessError> {
        Ok(self.engine()?.get(id))
    }

    pub fn scale(&self, target: ScaleTarget) -> Result<ScaleVector, HarnessError> {
        self.engine()?
            .scale_of(target)
            .ok_or_else(|| HarnessError::AssertionFailed {
                detail: format!("{} is not present in the model", target),
            })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Every response received so far, oldest first.
    pub fn history(&self) -> &[EngineToUi] {
        &self.history
    }

    // ── Assertions ──────────────────────────────────────────────────

    pub fn assert_scale(&self, target: ScaleTarget, expected: ScaleVector) -> Result<(), HarnessError> {
        let actual = self.scale(target)?;
        assert_scale_eq(actual, expected, 1e-9, &target.to_string())
    }
}

impl Default for SessionDriver {
    fn default() -> Self {
        Self::new()
    }
}

fn unexpected(request: &str, response: EngineToUi) -> HarnessError {
    HarnessError::UnexpectedResponse {
        request: request.to_string(),
        response: format!("{:?}", response),
    }
}
