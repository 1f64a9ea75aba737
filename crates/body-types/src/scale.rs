use serde::{Deserialize, Serialize};

use crate::part::BodyPart;

/// A local coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

/// Per-axis multiplicative scale of a node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl ScaleVector {
    pub const ONE: ScaleVector = ScaleVector::new(1.0, 1.0, 1.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn uniform(s: f64) -> Self {
        Self::new(s, s, s)
    }

    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Assign one component. The previous value is replaced, not scaled.
    pub fn set(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
    }
}

impl Default for ScaleVector {
    fn default() -> Self {
        Self::ONE
    }
}

impl From<[f64; 3]> for ScaleVector {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

/// The node a scale write lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "part")]
pub enum ScaleTarget {
    /// The whole-model root.
    Root,
    Part(BodyPart),
}

impl std::fmt::Display for ScaleTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaleTarget::Root => f.write_str("root"),
            ScaleTarget::Part(part) => write!(f, "{part}"),
        }
    }
}

/// A single assignment of one scale component on one target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleWrite {
    pub target: ScaleTarget,
    pub axis: Axis,
    pub value: f64,
}
