use binding_engine::params::STANDARD_SPECS;
use binding_engine::{BodyEngine, EngineConfig};
use body_types::{ParameterId, UnknownParameter};
use scene_graph::{Scene, SceneError};
use tracing::{error, info, warn};

/// Where the session is in its one-shot model load.
pub enum LoadPhase {
    /// Waiting for the asset. Parameter changes are held here, one per
    /// parameter, in the order they were first requested.
    Pending { queued: Vec<(ParameterId, f64)> },
    Ready(Box<BodyEngine>),
    /// The load failed; the session has no controllable body.
    Failed { reason: String },
}

/// Result of a parameter change request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SetOutcome {
    /// Stored (after clamping) and applied to the model.
    Applied(f64),
    /// Clamped and held until the model is loaded.
    Queued(f64),
}

/// The bridge-side session: configuration plus load gating around the engine.
pub struct SessionState {
    phase: LoadPhase,
    config: EngineConfig,
}

impl SessionState {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            phase: LoadPhase::Pending { queued: Vec::new() },
            config,
        }
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.phase, LoadPhase::Ready(_))
    }

    pub fn engine(&self) -> Result<&BodyEngine, BridgeError> {
        match &self.phase {
            LoadPhase::Ready(engine) => Ok(&**engine),
            LoadPhase::Pending { .. } => Err(BridgeError::NotLoaded),
            LoadPhase::Failed { reason } => Err(BridgeError::LoadFailed {
                reason: reason.clone(),
            }),
        }
    }

    pub fn engine_mut(&mut self) -> Result<&mut BodyEngine, BridgeError> {
        match &mut self.phase {
            LoadPhase::Ready(engine) => Ok(&mut **engine),
            LoadPhase::Pending { .. } => Err(BridgeError::NotLoaded),
            LoadPhase::Failed { reason } => Err(BridgeError::LoadFailed {
                reason: reason.clone(),
            }),
        }
    }

    /// Apply a parameter change, or queue it while the model is loading.
    pub fn request_set(&mut self, id: ParameterId, raw: f64) -> Result<SetOutcome, BridgeError> {
        match &mut self.phase {
            LoadPhase::Ready(engine) => Ok(SetOutcome::Applied(engine.set(id, raw))),
            LoadPhase::Pending { queued } => {
                let spec = self
                    .config
                    .parameters
                    .iter()
                    .find(|s| s.id == id)
                    .copied()
                    .unwrap_or(STANDARD_SPECS[id.index()]);
                let entry = queued.iter_mut().find(|(queued_id, _)| *queued_id == id);

                let Some(value) = spec.clamp(raw) else {
                    warn!(parameter = %id, "ignoring NaN parameter value");
                    let current = entry.map_or(spec.default, |(_, v)| *v);
                    return Ok(SetOutcome::Queued(current));
                };
                match entry {
                    Some(entry) => entry.1 = value,
                    None => queued.push((id, value)),
                }
                Ok(SetOutcome::Queued(value))
            }
            LoadPhase::Failed { reason } => Err(BridgeError::LoadFailed {
                reason: reason.clone(),
            }),
        }
    }

    /// Number of changes held for replay. Fails once the load has finished.
    pub fn begin_load(&self) -> Result<usize, BridgeError> {
        match &self.phase {
            LoadPhase::Pending { queued } => Ok(queued.len()),
            _ => Err(BridgeError::AlreadyLoaded),
        }
    }

    /// Finish the load with the imported scene, or with the import error.
    ///
    /// On success, queued changes are replayed in order. The load happens
    /// once; completing an already finished session is an error.
    pub fn complete_load(&mut self, scene: Result<Scene, SceneError>) -> Result<&BodyEngine, BridgeError> {
        let LoadPhase::Pending { queued } = &mut self.phase else {
            return Err(BridgeError::AlreadyLoaded);
        };
        let queued = std::mem::take(queued);

        let engine = scene
            .map_err(|e| e.to_string())
            .and_then(|scene| {
                BodyEngine::with_config(scene, self.config.clone()).map_err(|e| e.to_string())
            });

        match engine {
            Ok(mut engine) => {
                for (id, raw) in queued {
                    engine.set(id, raw);
                }
                info!(session = %engine.session_id(), "model loaded");
                self.phase = LoadPhase::Ready(Box::new(engine));
                self.engine()
            }
            Err(reason) => {
                self.mark_failed(reason.clone());
                Err(BridgeError::LoadFailed { reason })
            }
        }
    }

    /// Record a load failure reported by the host (e.g. the fetch failed).
    /// Queued changes are dropped.
    pub fn fail_load(&mut self, reason: String) -> Result<(), BridgeError> {
        if !matches!(self.phase, LoadPhase::Pending { .. }) {
            return Err(BridgeError::AlreadyLoaded);
        }
        self.mark_failed(reason);
        Ok(())
    }

    fn mark_failed(&mut self, reason: String) {
        error!(%reason, "model load failed");
        self.phase = LoadPhase::Failed { reason };
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors from the bridge layer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BridgeError {
    #[error("model not loaded yet")]
    NotLoaded,

    #[error("model failed to load: {reason}")]
    LoadFailed { reason: String },

    #[error("model load already completed")]
    AlreadyLoaded,

    #[error(transparent)]
    UnknownParameter(#[from] UnknownParameter),

    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}
