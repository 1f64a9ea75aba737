use approx::assert_relative_eq;
use body_types::*;
use control_bridge::EngineToUi;
use scene_graph::GltfLoader;
use test_harness::helpers::{glb_from_json, humanoid_glb, humanoid_gltf_json};
use test_harness::{HarnessError, SessionDriver};

#[test]
fn glb_humanoid_resolves_every_part() {
    let mut s = SessionDriver::new();
    let missing = s.load(&GltfLoader::new(), &humanoid_glb()).unwrap();
    assert!(missing.is_empty(), "missing: {missing:?}");

    // model_root, humanoid, nine parts
    assert_eq!(s.engine().unwrap().scene().len(), 11);
}

#[test]
fn gltf_json_drives_the_same_rules() {
    let json = humanoid_gltf_json(&BodyPart::ALL);
    let mut s = SessionDriver::gltf(json.as_bytes()).unwrap();

    s.set("proportionalScale", 0.9).unwrap();
    s.set("calfGirth", 0.14).unwrap();
    s.assert_scale(ScaleTarget::Root, ScaleVector::uniform(0.9))
        .unwrap();
    s.assert_scale(ScaleTarget::Part(BodyPart::RightCalf), ScaleVector::new(0.14, 0.14, 1.0))
        .unwrap();

    // Weight overwrites the right calf girth it shares with calfGirth.
    s.set("weight", 0.77).unwrap();
    let calf = s.scale(ScaleTarget::Part(BodyPart::RightCalf)).unwrap();
    assert_relative_eq!(calf.x, 0.11);
    assert_relative_eq!(calf.y, 0.11);
    s.assert_scale(ScaleTarget::Part(BodyPart::LeftCalf), ScaleVector::new(0.14, 0.14, 1.0))
        .unwrap();
}

#[test]
fn partial_model_loads_with_missing_parts() {
    let json = humanoid_gltf_json(&[BodyPart::Torso, BodyPart::Abdominal]);
    let mut s = SessionDriver::new();
    let missing = s.load(&GltfLoader::new(), &glb_from_json(&json)).unwrap();
    assert_eq!(missing.len(), BodyPart::COUNT - 2);

    s.set("weight", 1.26).unwrap();
    assert_relative_eq!(s.scale(ScaleTarget::Part(BodyPart::Torso)).unwrap().y, 0.18);
}

#[test]
fn world_matrices_follow_root_scale() {
    let mut s = SessionDriver::gltf(&humanoid_glb()).unwrap();
    s.set("height", 1.3).unwrap();
    let nodes = s.transforms().unwrap();

    let root = &nodes[0];
    assert_eq!(root.name.as_deref(), Some("model_root"));
    // Column-major: element 5 is the y-axis scale.
    assert_relative_eq!(root.world[5], 1.3_f32);
}

#[test]
fn corrupt_bytes_fail_the_load() {
    let mut s = SessionDriver::new();
    s.set("height", 1.2).unwrap();
    match s.load(&GltfLoader::new(), b"glTF\x02\x00\x00\x00garbage") {
        Err(HarnessError::UnexpectedResponse { request, response }) => {
            assert_eq!(request, "load");
            assert!(response.starts_with("LoadError"), "{response}");
        }
        other => panic!("expected load failure, got {other:?}"),
    }
    assert!(matches!(
        s.history().last(),
        Some(EngineToUi::LoadError { .. })
    ));
    assert!(s.set("height", 1.0).is_err());
}
