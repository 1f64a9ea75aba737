use body_types::ScaleWrite;
use scene_graph::{ModelRegistry, Scene};
use tracing::trace;

/// What happened to each write of one parameter change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplyReport {
    /// Writes assigned onto a node, in order.
    pub applied: Vec<ScaleWrite>,
    /// Writes whose target the model does not provide.
    pub skipped: Vec<ScaleWrite>,
}

/// Assign each write onto its resolved node.
///
/// Unresolved targets are skipped without affecting the remaining writes.
pub fn apply_writes(
    scene: &mut Scene,
    registry: &ModelRegistry,
    writes: &[ScaleWrite],
) -> ApplyReport {
    let mut report = ApplyReport::default();

    for write in writes {
        let node = registry
            .resolve_target(write.target)
            .and_then(|id| scene.node_mut(id));
        match node {
            Some(node) => {
                node.transform.scale.set(write.axis, write.value);
                report.applied.push(*write);
            }
            None => {
                trace!(target = %write.target, axis = ?write.axis, "skipping write to absent part");
                report.skipped.push(*write);
            }
        }
    }

    report
}
