use approx::assert_relative_eq;
use body_types::*;
use control_bridge::{EngineToUi, LoadPhase};
use scene_graph::{MockHumanoid, Scene};
use test_harness::assertions::assert_only_changed;
use test_harness::{HarnessError, SessionDriver};

#[test]
fn height_then_biceps_scenario() {
    let mut s = SessionDriver::mock().unwrap();
    s.set("height", 1.2).unwrap();
    s.set("bicepsGirth", 0.1).unwrap();

    s.assert_scale(ScaleTarget::Root, ScaleVector::new(1.0, 1.2, 1.0))
        .unwrap();
    s.assert_scale(ScaleTarget::Part(BodyPart::RightArm), ScaleVector::new(0.1, 0.1, 1.0))
        .unwrap();
    s.assert_scale(ScaleTarget::Part(BodyPart::LeftArm), ScaleVector::new(0.1, 0.1, 1.0))
        .unwrap();
    s.assert_scale(ScaleTarget::Part(BodyPart::Neck), ScaleVector::ONE)
        .unwrap();
}

#[test]
fn weight_touches_only_coupled_nodes() {
    let mut s = SessionDriver::mock().unwrap();
    let before = s.transforms().unwrap();
    s.set("weight", 1.05).unwrap();
    let after = s.transforms().unwrap();

    assert_only_changed(
        &before,
        &after,
        &[
            Scene::ROOT_NAME,
            "torso",
            "abdominal",
            "right_thigh",
            "left_thigh",
            "right_calf",
        ],
        "weight",
    )
    .unwrap();
    assert_relative_eq!(s.scale(ScaleTarget::Part(BodyPart::Torso)).unwrap().x, 0.15);
    s.assert_scale(ScaleTarget::Part(BodyPart::LeftCalf), ScaleVector::ONE)
        .unwrap();
}

#[test]
fn neck_is_independent_of_other_sliders() {
    let mut s = SessionDriver::mock().unwrap();
    let before = s.transforms().unwrap();
    s.set("neckGirth", 0.12).unwrap();
    let after = s.transforms().unwrap();

    assert_only_changed(&before, &after, &["neck"], "neckGirth").unwrap();
    let err = assert_only_changed(&before, &after, &[], "neckGirth").unwrap_err();
    assert!(err.to_string().contains("neck"));
}

#[test]
fn out_of_range_values_are_clamped() {
    let mut s = SessionDriver::mock().unwrap();
    assert_eq!(s.set("proportionalScale", 5.0).unwrap(), 1.3);
    assert_eq!(s.set("calfGirth", -1.0).unwrap(), 0.0);
    assert_eq!(s.value(ParameterId::ProportionalScale).unwrap(), 1.3);
    s.assert_scale(ScaleTarget::Part(BodyPart::LeftCalf), ScaleVector::new(0.0, 0.0, 1.0))
        .unwrap();
}

#[test]
fn unknown_slider_is_a_dispatch_error() {
    let mut s = SessionDriver::mock().unwrap();
    match s.set("shoeSize", 1.0) {
        Err(HarnessError::DispatchError { message }) => {
            assert_eq!(message, "unknown parameter: shoeSize")
        }
        other => panic!("expected DispatchError, got {other:?}"),
    }
}

#[test]
fn sliders_before_load_are_replayed() {
    let mut s = SessionDriver::new();
    assert_eq!(s.set("height", 5.0).unwrap(), 1.3);
    assert_eq!(s.set("height", 1.1).unwrap(), 1.1);
    assert!(matches!(s.state().phase(), LoadPhase::Pending { .. }));
    assert!(s.engine().is_err());

    let missing = s.load(&MockHumanoid::new(), &[]).unwrap();
    assert!(missing.is_empty());
    s.assert_scale(ScaleTarget::Root, ScaleVector::new(1.0, 1.1, 1.0))
        .unwrap();
    assert!(matches!(s.history()[0], EngineToUi::Queued { .. }));
    assert!(matches!(s.history()[1], EngineToUi::Queued { .. }));
    assert!(matches!(s.history()[2], EngineToUi::Ready { .. }));
}

#[test]
fn reset_restores_defaults() {
    let mut s = SessionDriver::mock().unwrap();
    s.set("weight", 1.3).unwrap();
    s.set("neckGirth", 0.2).unwrap();
    s.reset().unwrap();

    for id in ParameterId::ALL {
        let spec = s.engine().unwrap().parameters().spec(id);
        assert_eq!(s.value(id).unwrap(), spec.default);
    }
}

#[test]
fn missing_parts_are_reported_and_skipped() {
    let mut s = SessionDriver::new();
    let loader = MockHumanoid::new()
        .without(BodyPart::Neck)
        .without(BodyPart::LeftArm);
    let missing = s.load(&loader, &[]).unwrap();
    assert_eq!(missing, vec![BodyPart::Neck, BodyPart::LeftArm]);

    s.set("neckGirth", 0.1).unwrap();
    s.set("bicepsGirth", 0.1).unwrap();
    assert!(s.scale(ScaleTarget::Part(BodyPart::Neck)).is_err());
    s.assert_scale(ScaleTarget::Part(BodyPart::RightArm), ScaleVector::new(0.1, 0.1, 1.0))
        .unwrap();
}

#[test]
fn failed_assertion_reports_context() {
    let s = SessionDriver::mock().unwrap();
    let err = s
        .assert_scale(ScaleTarget::Root, ScaleVector::uniform(2.0))
        .unwrap_err();
    assert!(err.to_string().contains("root"), "{err}");
}
