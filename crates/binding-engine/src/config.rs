use body_types::ParameterId;
use serde::{Deserialize, Serialize};

use crate::params::{ParameterSpec, STANDARD_SPECS};
use crate::rules::RuleTable;
use crate::types::ConfigError;

/// Parameter ranges and the rule table for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "standard_parameters")]
    pub parameters: Vec<ParameterSpec>,
    #[serde(default)]
    pub rules: RuleTable,
}

fn standard_parameters() -> Vec<ParameterSpec> {
    STANDARD_SPECS.to_vec()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parameters: standard_parameters(),
            rules: RuleTable::standard(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON configuration. Omitted sections take
    /// their standard values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.indexed_specs()?;
        self.rules.validate()
    }

    /// One spec per parameter, indexed by [`ParameterId::index`].
    pub(crate) fn indexed_specs(&self) -> Result<[ParameterSpec; ParameterId::COUNT], ConfigError> {
        let mut slots: [Option<ParameterSpec>; ParameterId::COUNT] = [None; ParameterId::COUNT];

        for spec in &self.parameters {
            if !spec.min.is_finite() || !spec.max.is_finite() || spec.min > spec.max {
                return Err(ConfigError::InvalidRange {
                    id: spec.id,
                    min: spec.min,
                    max: spec.max,
                });
            }
            if !spec.contains(spec.default) {
                return Err(ConfigError::DefaultOutOfRange {
                    id: spec.id,
                    default: spec.default,
                });
            }
            let slot = &mut slots[spec.id.index()];
            if slot.is_some() {
                return Err(ConfigError::DuplicateParameter { id: spec.id });
            }
            *slot = Some(*spec);
        }

        let mut specs = STANDARD_SPECS;
        for id in ParameterId::ALL {
            specs[id.index()] = slots[id.index()].ok_or(ConfigError::MissingParameter { id })?;
        }
        Ok(specs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(EngineConfig::default().validate(), Ok(()));
    }

    #[test]
    fn empty_json_yields_standard_config() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn rejects_inverted_range() {
        let mut config = EngineConfig::default();
        config.parameters[1].min = 2.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange { id: ParameterId::Height, .. })
        ));
    }

    #[test]
    fn rejects_missing_and_duplicate_parameters() {
        let mut config = EngineConfig::default();
        config.parameters.pop();
        assert_eq!(
            config.validate(),
            Err(ConfigError::MissingParameter {
                id: ParameterId::CalfGirth
            })
        );

        let mut config = EngineConfig::default();
        config.parameters.push(config.parameters[0]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateParameter {
                id: ParameterId::ProportionalScale
            })
        );
    }

    #[test]
    fn rejects_default_outside_range() {
        let mut config = EngineConfig::default();
        config.parameters[3].default = 0.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DefaultOutOfRange { id: ParameterId::NeckGirth, .. })
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            EngineConfig::from_json("{ \"rules\": 3 }"),
            Err(ConfigError::Parse(_))
        ));
    }
}
