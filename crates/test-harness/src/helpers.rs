//! Helper functions: error type and glTF humanoid fixtures.

use body_types::BodyPart;
use serde_json::{json, Value};

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("dispatch error: {message}")]
    DispatchError { message: String },

    #[error("unexpected response to {request}: {response}")]
    UnexpectedResponse { request: String, response: String },

    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("engine error: {0}")]
    Engine(String),
}

// ── glTF Fixtures ───────────────────────────────────────────────────────────

/// A glTF document with an armature node holding the given parts.
///
/// Torso carries neck and arms, abdominal carries the thighs, each thigh its
/// calf. Parts left out are replaced by unnamed nodes so the hierarchy keeps
/// its shape.
pub fn humanoid_gltf_json(parts: &[BodyPart]) -> String {
    // (part, parent index in the node list, translation)
    let layout: [(BodyPart, usize, [f64; 3]); 9] = [
        (BodyPart::Abdominal, 0, [0.0, 1.0, 0.0]),
        (BodyPart::Torso, 1, [0.0, 0.35, 0.0]),
        (BodyPart::Neck, 2, [0.0, 0.3, 0.0]),
        (BodyPart::RightArm, 2, [-0.25, 0.2, 0.0]),
        (BodyPart::LeftArm, 2, [0.25, 0.2, 0.0]),
        (BodyPart::RightThigh, 1, [-0.1, -0.1, 0.0]),
        (BodyPart::RightCalf, 6, [0.0, -0.45, 0.0]),
        (BodyPart::LeftThigh, 1, [0.1, -0.1, 0.0]),
        (BodyPart::LeftCalf, 8, [0.0, -0.45, 0.0]),
    ];

    let mut nodes: Vec<Value> = vec![json!({ "name": "humanoid" })];
    for (i, (part, parent, translation)) in layout.iter().enumerate() {
        let mut node = json!({ "translation": translation });
        if parts.contains(part) {
            node["name"] = json!(part.node_name());
        }
        nodes.push(node);
        let child = i + 1;
        let siblings = &mut nodes[*parent]["children"];
        match siblings.as_array_mut() {
            Some(list) => list.push(json!(child)),
            None => *siblings = json!([child]),
        }
    }

    json!({
        "asset": { "version": "2.0" },
        "scene": 0,
        "scenes": [ { "nodes": [0] } ],
        "nodes": nodes,
    })
    .to_string()
}

/// Wrap a glTF JSON document in a GLB container (JSON chunk only).
pub fn glb_from_json(json: &str) -> Vec<u8> {
    let mut chunk = json.as_bytes().to_vec();
    while chunk.len() % 4 != 0 {
        chunk.push(b' ');
    }
    let total = 12 + 8 + chunk.len();

    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(b"glTF");
    out.extend_from_slice(&2u32.to_le_bytes());
    out.extend_from_slice(&(total as u32).to_le_bytes());
    out.extend_from_slice(&(chunk.len() as u32).to_le_bytes());
    out.extend_from_slice(b"JSON");
    out.extend_from_slice(&chunk);
    out
}

/// A GLB humanoid exposing every part.
pub fn humanoid_glb() -> Vec<u8> {
    glb_from_json(&humanoid_gltf_json(&BodyPart::ALL))
}
