use serde::{Deserialize, Serialize};

/// A named body segment with its own scale transform.
///
/// The set is closed: an asset exposes a part by naming one of its nodes
/// with the part's [`node_name`](BodyPart::node_name).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPart {
    Neck,
    Torso,
    Abdominal,
    RightArm,
    LeftArm,
    RightThigh,
    LeftThigh,
    RightCalf,
    LeftCalf,
}

impl BodyPart {
    pub const COUNT: usize = 9;

    /// Every part, in asset naming-convention order.
    pub const ALL: [BodyPart; Self::COUNT] = [
        BodyPart::Neck,
        BodyPart::Torso,
        BodyPart::Abdominal,
        BodyPart::RightArm,
        BodyPart::LeftArm,
        BodyPart::RightThigh,
        BodyPart::LeftThigh,
        BodyPart::RightCalf,
        BodyPart::LeftCalf,
    ];

    /// The node name the asset author must use for this part.
    pub fn node_name(self) -> &'static str {
        match self {
            BodyPart::Neck => "neck",
            BodyPart::Torso => "torso",
            BodyPart::Abdominal => "abdominal",
            BodyPart::RightArm => "right_arm",
            BodyPart::LeftArm => "left_arm",
            BodyPart::RightThigh => "right_thigh",
            BodyPart::LeftThigh => "left_thigh",
            BodyPart::RightCalf => "right_calf",
            BodyPart::LeftCalf => "left_calf",
        }
    }

    /// Match a scene node name against the naming convention.
    pub fn from_node_name(name: &str) -> Option<BodyPart> {
        Self::ALL.into_iter().find(|part| part.node_name() == name)
    }

    /// Dense index into per-part arrays.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for BodyPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.node_name())
    }
}
