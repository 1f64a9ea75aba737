use serde::{Deserialize, Serialize};

/// One of the six user-facing body parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterId {
    /// Uniform scale of the whole model.
    ProportionalScale,
    /// Vertical scale of the whole model.
    Height,
    /// Horizontal scale of the whole model. Also drives girth coupling.
    Weight,
    NeckGirth,
    BicepsGirth,
    CalfGirth,
}

impl ParameterId {
    pub const COUNT: usize = 6;

    pub const ALL: [ParameterId; Self::COUNT] = [
        ParameterId::ProportionalScale,
        ParameterId::Height,
        ParameterId::Weight,
        ParameterId::NeckGirth,
        ParameterId::BicepsGirth,
        ParameterId::CalfGirth,
    ];

    /// The identifier used on the wire by the control surface.
    pub fn wire_name(self) -> &'static str {
        match self {
            ParameterId::ProportionalScale => "proportionalScale",
            ParameterId::Height => "height",
            ParameterId::Weight => "weight",
            ParameterId::NeckGirth => "neckGirth",
            ParameterId::BicepsGirth => "bicepsGirth",
            ParameterId::CalfGirth => "calfGirth",
        }
    }

    /// The label shown next to the control.
    pub fn label(self) -> &'static str {
        match self {
            ParameterId::ProportionalScale => "Scale Model Proportionately",
            ParameterId::Height => "Height",
            ParameterId::Weight => "Weight",
            ParameterId::NeckGirth => "Neck girth",
            ParameterId::BicepsGirth => "Biceps girth",
            ParameterId::CalfGirth => "Calf girth",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for ParameterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl std::str::FromStr for ParameterId {
    type Err = UnknownParameter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.wire_name() == s)
            .ok_or_else(|| UnknownParameter {
                name: s.to_string(),
            })
    }
}

/// A parameter name outside the fixed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown parameter: {name}")]
pub struct UnknownParameter {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_parse() {
        for id in ParameterId::ALL {
            assert_eq!(id.wire_name().parse::<ParameterId>(), Ok(id));
        }
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "shoeSize".parse::<ParameterId>().unwrap_err();
        assert_eq!(err.name, "shoeSize");
    }

    #[test]
    fn serde_matches_wire_name() {
        for id in ParameterId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.wire_name()));
        }
    }
}
