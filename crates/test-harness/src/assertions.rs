//! Assertion helpers with diagnostic output.
//!
//! Failures name the context, the expected and the actual values.

use body_types::ScaleVector;
use scene_graph::NodeSnapshot;

use crate::helpers::HarnessError;

/// Assert every component of `actual` is within `tol` of `expected`.
pub fn assert_scale_eq(
    actual: ScaleVector,
    expected: ScaleVector,
    tol: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    let diffs = [
        (actual.x - expected.x).abs(),
        (actual.y - expected.y).abs(),
        (actual.z - expected.z).abs(),
    ];
    if diffs.iter().all(|d| *d <= tol) {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] expected scale ({:.4}, {:.4}, {:.4}), got ({:.4}, {:.4}, {:.4}) (tol={})",
                ctx, expected.x, expected.y, expected.z, actual.x, actual.y, actual.z, tol,
            ),
        })
    }
}

/// Assert that between two snapshots of the same scene only nodes named in
/// `allowed` changed scale.
pub fn assert_only_changed(
    before: &[NodeSnapshot],
    after: &[NodeSnapshot],
    allowed: &[&str],
    ctx: &str,
) -> Result<(), HarnessError> {
    if before.len() != after.len() {
        return Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] snapshots differ in size: {} vs {}",
                ctx,
                before.len(),
                after.len()
            ),
        });
    }

    let unexpected: Vec<String> = before
        .iter()
        .zip(after)
        .filter(|(b, a)| b.scale != a.scale)
        .map(|(_, a)| a.name.clone().unwrap_or_else(|| "<unnamed>".to_string()))
        .filter(|name| !allowed.contains(&name.as_str()))
        .collect();

    if unexpected.is_empty() {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] unexpected scale changes on {:?} (allowed: {:?})",
                ctx, unexpected, allowed
            ),
        })
    }
}
