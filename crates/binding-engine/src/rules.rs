//! Declarative parameter → scale-write table.
//!
//! Each parameter owns one [`Rule`]: an ordered list of [`Binding`]s. A binding
//! derives a value from the parameter, optionally gates it, and assigns it to
//! an ordered list of `(target, axis)` slots. Engine code never special-cases
//! a parameter; changing what a slider does is a change to this table.

use body_types::{Axis, BodyPart, ParameterId, ScaleTarget, ScaleWrite};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::types::ConfigError;

/// Weight is divided by this to get the torso/limb girth factor.
pub const GIRTH_DIVISOR: f64 = 7.0;

/// How a binding derives its written value from the parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ValueExpr {
    #[default]
    Identity,
    Divide { divisor: f64 },
}

impl ValueExpr {
    pub fn eval(&self, value: f64) -> f64 {
        match *self {
            ValueExpr::Identity => value,
            ValueExpr::Divide { divisor } => value / divisor,
        }
    }
}

/// Condition on the derived value; a binding whose guard fails writes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Guard {
    NonZero,
}

impl Guard {
    pub fn admits(&self, value: f64) -> bool {
        match self {
            Guard::NonZero => value != 0.0,
        }
    }
}

/// One scale component on one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteTarget {
    pub target: ScaleTarget,
    pub axis: Axis,
}

impl WriteTarget {
    pub const fn root(axis: Axis) -> Self {
        Self {
            target: ScaleTarget::Root,
            axis,
        }
    }

    pub const fn part(part: BodyPart, axis: Axis) -> Self {
        Self {
            target: ScaleTarget::Part(part),
            axis,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Binding {
    #[serde(default)]
    pub expr: ValueExpr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guard: Option<Guard>,
    pub targets: Vec<WriteTarget>,
}

impl Binding {
    pub fn identity(targets: Vec<WriteTarget>) -> Self {
        Self {
            expr: ValueExpr::Identity,
            guard: None,
            targets,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub parameter: ParameterId,
    pub bindings: Vec<Binding>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleTable {
    pub rules: Vec<Rule>,
}

/// x then y of each part: the horizontal girth axes of a limb segment.
fn girth(parts: &[BodyPart]) -> Vec<WriteTarget> {
    parts
        .iter()
        .flat_map(|&p| [WriteTarget::part(p, Axis::X), WriteTarget::part(p, Axis::Y)])
        .collect()
}

impl RuleTable {
    /// The coupling table of the standard control panel.
    ///
    /// Its weight coupling writes Abdominal x a second time where LeftCalf
    /// would be expected, so LeftCalf never follows weight. See
    /// [`RuleTable::symmetric`] for the corrected table.
    pub fn standard() -> Self {
        let mut coupled = girth(&[
            BodyPart::Torso,
            BodyPart::Abdominal,
            BodyPart::RightThigh,
            BodyPart::LeftThigh,
            BodyPart::RightCalf,
        ]);
        coupled.push(WriteTarget::part(BodyPart::Abdominal, Axis::X));
        Self::with_weight_coupling(coupled)
    }

    /// Standard table with the weight coupling covering both calves.
    pub fn symmetric() -> Self {
        Self::with_weight_coupling(girth(&[
            BodyPart::Torso,
            BodyPart::Abdominal,
            BodyPart::RightThigh,
            BodyPart::LeftThigh,
            BodyPart::RightCalf,
            BodyPart::LeftCalf,
        ]))
    }

    fn with_weight_coupling(coupled: Vec<WriteTarget>) -> Self {
        let rules = vec![
            Rule {
                parameter: ParameterId::ProportionalScale,
                bindings: vec![Binding::identity(
                    Axis::ALL.into_iter().map(WriteTarget::root).collect(),
                )],
            },
            Rule {
                parameter: ParameterId::Height,
                bindings: vec![Binding::identity(vec![WriteTarget::root(Axis::Y)])],
            },
            Rule {
                parameter: ParameterId::Weight,
                bindings: vec![
                    Binding::identity(vec![WriteTarget::root(Axis::Z), WriteTarget::root(Axis::X)]),
                    Binding {
                        expr: ValueExpr::Divide {
                            divisor: GIRTH_DIVISOR,
                        },
                        guard: Some(Guard::NonZero),
                        targets: coupled,
                    },
                ],
            },
            Rule {
                parameter: ParameterId::NeckGirth,
                bindings: vec![Binding::identity(girth(&[BodyPart::Neck]))],
            },
            Rule {
                parameter: ParameterId::BicepsGirth,
                bindings: vec![Binding::identity(girth(&[BodyPart::RightArm, BodyPart::LeftArm]))],
            },
            Rule {
                parameter: ParameterId::CalfGirth,
                bindings: vec![Binding::identity(girth(&[BodyPart::RightCalf, BodyPart::LeftCalf]))],
            },
        ];
        Self { rules }
    }

    pub fn rule(&self, parameter: ParameterId) -> Option<&Rule> {
        self.rules.iter().find(|r| r.parameter == parameter)
    }

    /// Turn a (clamped) parameter value into the ordered writes its rule produces.
    ///
    /// Pure: depends only on the table and the arguments.
    pub fn evaluate(&self, parameter: ParameterId, value: f64) -> Vec<ScaleWrite> {
        let Some(rule) = self.rule(parameter) else {
            return Vec::new();
        };

        let mut writes = Vec::new();
        for binding in &rule.bindings {
            let derived = binding.expr.eval(value);
            if let Some(guard) = binding.guard {
                if !guard.admits(derived) {
                    trace!(%parameter, derived, ?guard, "guard rejected binding");
                    continue;
                }
            }
            writes.extend(binding.targets.iter().map(|t| ScaleWrite {
                target: t.target,
                axis: t.axis,
                value: derived,
            }));
        }
        writes
    }

    /// Reject tables a session could not interpret sensibly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, rule) in self.rules.iter().enumerate() {
            if self.rules[..i].iter().any(|r| r.parameter == rule.parameter) {
                return Err(ConfigError::DuplicateRule { id: rule.parameter });
            }
            for binding in &rule.bindings {
                if let ValueExpr::Divide { divisor } = binding.expr {
                    if divisor == 0.0 || !divisor.is_finite() {
                        return Err(ConfigError::InvalidDivisor {
                            id: rule.parameter,
                            divisor,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::standard()
    }
}
