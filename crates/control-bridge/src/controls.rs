use binding_engine::ParameterSet;
use body_types::ParameterId;
use serde::{Deserialize, Serialize};

/// One slider of the control surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlDescriptor {
    pub name: ParameterId,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlFolder {
    pub title: String,
    /// Whether the folder starts expanded.
    pub open: bool,
    pub controls: Vec<ControlDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlPanel {
    pub title: String,
    pub open: bool,
    pub folders: Vec<ControlFolder>,
}

impl ControlPanel {
    /// All controls, folder by folder.
    pub fn controls(&self) -> impl Iterator<Item = &ControlDescriptor> {
        self.folders.iter().flat_map(|f| f.controls.iter())
    }
}

fn descriptor(params: &ParameterSet, id: ParameterId) -> ControlDescriptor {
    let spec = params.spec(id);
    ControlDescriptor {
        name: id,
        label: id.label().to_string(),
        min: spec.min,
        max: spec.max,
        value: params.get(id),
    }
}

/// Describe the panel: one control per parameter, grouped as
/// "Human Size" → "Scale Proportionately" / "Anthropometrics".
pub fn control_panel(params: &ParameterSet) -> ControlPanel {
    let anthropometrics = [
        ParameterId::Height,
        ParameterId::Weight,
        ParameterId::NeckGirth,
        ParameterId::BicepsGirth,
        ParameterId::CalfGirth,
    ];

    ControlPanel {
        title: "Human Size".to_string(),
        open: true,
        folders: vec![
            ControlFolder {
                title: "Scale Proportionately".to_string(),
                open: false,
                controls: vec![descriptor(params, ParameterId::ProportionalScale)],
            },
            ControlFolder {
                title: "Anthropometrics".to_string(),
                open: true,
                controls: anthropometrics
                    .into_iter()
                    .map(|id| descriptor(params, id))
                    .collect(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_parameter_has_exactly_one_control() {
        let panel = control_panel(&ParameterSet::standard());
        let mut names: Vec<_> = panel.controls().map(|c| c.name).collect();
        names.sort();
        assert_eq!(names, ParameterId::ALL.to_vec());
    }

    #[test]
    fn controls_reflect_current_values() {
        let mut params = ParameterSet::standard();
        params.set(ParameterId::NeckGirth, 0.11);
        let panel = control_panel(&params);
        let neck = panel
            .controls()
            .find(|c| c.name == ParameterId::NeckGirth)
            .unwrap();
        assert_eq!(neck.value, 0.11);
        assert_eq!(neck.label, "Neck girth");
        assert_eq!((neck.min, neck.max), (0.0, 0.2));
    }
}
