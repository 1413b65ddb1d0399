//! Unit tests for scene_type.rs

use glam::Vec3;
use crate::error::Error;
use crate::scene::SceneType;

#[test]
fn test_from_index() {
    assert_eq!(SceneType::from_index(0).unwrap(), SceneType::Lit);
    assert_eq!(SceneType::from_index(1).unwrap(), SceneType::StressTest);
    assert!(matches!(SceneType::from_index(2), Err(Error::InvalidArgument(_))));
    assert_eq!(SceneType::StressTest.index(), 1);
}

#[test]
fn test_clear_colors() {
    assert_eq!(SceneType::Lit.clear_color(), [0.1, 0.1, 0.2, 1.0]);
    assert_eq!(SceneType::StressTest.clear_color(), [0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn test_default_camera() {
    let placement = SceneType::StressTest.default_camera();
    assert_eq!(placement.eye, Vec3::new(10.0, 3.0, 10.0));
    assert_eq!(placement.look_at, Vec3::new(-3.0, 4.0, 4.0));
    assert_eq!(SceneType::Lit.label(), "Typical Scene");
}
