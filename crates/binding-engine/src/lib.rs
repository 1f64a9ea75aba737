pub mod apply;
pub mod config;
pub mod params;
pub mod rules;
pub mod types;

use body_types::{ParameterId, ScaleTarget, ScaleVector};
use scene_graph::{ModelRegistry, Scene};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

pub use apply::ApplyReport;
pub use config::EngineConfig;
pub use params::{ParameterSet, ParameterSpec};
pub use rules::RuleTable;
pub use types::{ConfigError, EngineError};

/// The body-scaling engine for one loaded model.
///
/// Owns the scene, the part registry, the parameter values and the rule
/// table. Every parameter change is applied to the scene before `set`
/// returns.
pub struct BodyEngine {
    session_id: Uuid,
    scene: Scene,
    registry: ModelRegistry,
    params: ParameterSet,
    rules: RuleTable,
    last_writes: ApplyReport,
}

impl BodyEngine {
    /// Create an engine with the standard ranges and rule table.
    pub fn new(scene: Scene) -> Self {
        Self::from_parts(scene, ParameterSet::standard(), RuleTable::standard())
    }

    pub fn with_config(scene: Scene, config: EngineConfig) -> Result<Self, EngineError> {
        let specs = config.indexed_specs()?;
        config.rules.validate()?;
        Ok(Self::from_parts(scene, ParameterSet::from_specs(specs), config.rules))
    }

    fn from_parts(scene: Scene, params: ParameterSet, rules: RuleTable) -> Self {
        let registry = ModelRegistry::build(&scene);
        let session_id = Uuid::new_v4();
        info!(
            session = %session_id,
            nodes = scene.len(),
            parts = registry.resolved().count(),
            "body engine ready"
        );
        Self {
            session_id,
            scene,
            registry,
            params,
            rules,
            last_writes: ApplyReport::default(),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Clamp and store a parameter value, then apply its rule to the scene.
    /// Returns the stored value. NaN is ignored and changes nothing.
    #[instrument(skip(self), fields(session = %self.session_id))]
    pub fn set(&mut self, id: ParameterId, raw: f64) -> f64 {
        if raw.is_nan() {
            warn!("ignoring NaN parameter value");
            return self.params.get(id);
        }

        let value = self.params.set(id, raw);
        let writes = self.rules.evaluate(id, value);
        self.last_writes = apply::apply_writes(&mut self.scene, &self.registry, &writes);
        debug!(
            value,
            applied = self.last_writes.applied.len(),
            skipped = self.last_writes.skipped.len(),
            "parameter applied"
        );
        value
    }

    /// [`set`](Self::set) by wire name, e.g. `"neckGirth"`.
    pub fn set_by_name(&mut self, name: &str, raw: f64) -> Result<f64, EngineError> {
        let id: ParameterId = name.parse()?;
        Ok(self.set(id, raw))
    }

    pub fn get(&self, id: ParameterId) -> f64 {
        self.params.get(id)
    }

    /// Set every parameter back to its default, applying each rule in turn.
    pub fn reset_to_defaults(&mut self) {
        for id in ParameterId::ALL {
            let default = self.params.spec(id).default;
            self.set(id, default);
        }
    }

    /// Current scale of a target, or `None` when the model lacks it.
    pub fn scale_of(&self, target: ScaleTarget) -> Option<ScaleVector> {
        let id = self.registry.resolve_target(target)?;
        self.scene.node(id).map(|n| n.transform.scale)
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.params
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }


    /// Writes applied and skipped by the most recent parameter change.
    pub fn last_writes(&self) -> &ApplyReport {
        &self.last_writes
    }
}
