use body_types::ParameterId;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Range and default of one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    pub id: ParameterId,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl ParameterSpec {
    pub const fn new(id: ParameterId, min: f64, max: f64, default: f64) -> Self {
        Self {
            id,
            min,
            max,
            default,
        }
    }

    /// Clamp into `[min, max]`. NaN has no meaningful clamp and yields `None`.
    pub fn clamp(&self, raw: f64) -> Option<f64> {
        if raw.is_nan() {
            None
        } else {
            Some(raw.clamp(self.min, self.max))
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Ranges and defaults of the standard control panel.
pub const STANDARD_SPECS: [ParameterSpec; ParameterId::COUNT] = [
    ParameterSpec::new(ParameterId::ProportionalScale, 0.7, 1.3, 1.0),
    ParameterSpec::new(ParameterId::Height, 0.7, 1.3, 1.0),
    ParameterSpec::new(ParameterId::Weight, 0.7, 1.3, 1.0),
    ParameterSpec::new(ParameterId::NeckGirth, 0.0, 0.2, 0.05),
    ParameterSpec::new(ParameterId::BicepsGirth, 0.0, 0.2, 0.05),
    ParameterSpec::new(ParameterId::CalfGirth, 0.0, 0.2, 0.05),
];

/// Current values of the six body parameters.
///
/// Values never leave their declared range: every write is clamped.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    specs: [ParameterSpec; ParameterId::COUNT],
    values: [f64; ParameterId::COUNT],
}

impl ParameterSet {
    /// Build from validated specs, indexed by parameter. Every value starts at its default.
    pub(crate) fn from_specs(specs: [ParameterSpec; ParameterId::COUNT]) -> Self {
        let values = specs.map(|s| s.default);
        Self { specs, values }
    }

    pub fn standard() -> Self {
        Self::from_specs(STANDARD_SPECS)
    }

    /// Clamp `raw` into range, store it, and return the stored value.
    /// A NaN write is ignored and the current value returned.
    pub fn set(&mut self, id: ParameterId, raw: f64) -> f64 {
        let i = id.index();
        match self.specs[i].clamp(raw) {
            Some(value) => {
                self.values[i] = value;
                value
            }
            None => {
                warn!(parameter = %id, "ignoring NaN parameter value");
                self.values[i]
            }
        }
    }

    pub fn get(&self, id: ParameterId) -> f64 {
        self.values[id.index()]
    }

    pub fn spec(&self, id: ParameterId) -> &ParameterSpec {
        &self.specs[id.index()]
    }


    /// `(spec, current value)` pairs in parameter order.
    pub fn iter(&self) -> impl Iterator<Item = (&ParameterSpec, f64)> + '_ {
        self.specs.iter().zip(self.values.iter().copied())
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_defaults() {
        let params = ParameterSet::standard();
        assert_eq!(params.get(ParameterId::Height), 1.0);
        assert_eq!(params.get(ParameterId::NeckGirth), 0.05);
    }

    #[test]
    fn clamps_out_of_range_writes() {
        let mut params = ParameterSet::standard();
        assert_eq!(params.set(ParameterId::Weight, 5.0), 1.3);
        assert_eq!(params.set(ParameterId::Weight, -5.0), 0.7);
        assert_eq!(params.set(ParameterId::CalfGirth, f64::INFINITY), 0.2);
        assert_eq!(params.set(ParameterId::CalfGirth, f64::NEG_INFINITY), 0.0);
        assert_eq!(params.get(ParameterId::CalfGirth), 0.0);
    }

    #[test]
    fn nan_keeps_current_value() {
        let mut params = ParameterSet::standard();
        params.set(ParameterId::Height, 1.1);
        assert_eq!(params.set(ParameterId::Height, f64::NAN), 1.1);
        assert_eq!(params.get(ParameterId::Height), 1.1);
    }


    #[test]
    fn standard_specs_are_in_index_order() {
        for (i, spec) in STANDARD_SPECS.iter().enumerate() {
            assert_eq!(spec.id.index(), i);
            assert!(spec.contains(spec.default));
        }
    }
}
