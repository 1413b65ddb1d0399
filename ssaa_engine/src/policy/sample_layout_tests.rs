//! Unit tests for sample_layout.rs

use glam::Vec2;
use crate::policy::{AaMode, SampleKind, ROTATED_GRID_TAPS, ROTATED_GRID_TAP_WEIGHT};

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-5
}

#[test]
fn test_sample_count_matches_policy() {
    for mode in AaMode::ALL {
        let layout = mode.sample_layout();
        let policy = mode.policy();
        if policy.is_multisampled() {
            assert_eq!(layout.color_sample_count(), policy.sample_count as usize, "{:?}", mode);
        }
        if policy.sample_quality > 0 {
            assert_eq!(layout.samples.len(), policy.sample_quality as usize, "{:?}", mode);
        }
    }
}

#[test]
fn test_none_is_single_centred_sample() {
    let layout = AaMode::None.sample_layout();
    assert_eq!(layout.pixels, vec![Vec2::splat(0.5)]);
    assert_eq!(layout.samples.len(), 1);
    assert!(approx(layout.samples[0].position, Vec2::splat(0.5)));
    assert_eq!(layout.display_scale, 1.5);
}

#[test]
fn test_msaa2_positions() {
    let layout = AaMode::Msaa2x.sample_layout();
    assert!(approx(layout.samples[0].position, Vec2::new(0.625, 0.375)));
    assert!(approx(layout.samples[1].position, Vec2::new(0.375, 0.625)));
}

#[test]
fn test_eqaa_coverage_only_samples() {
    let layout = AaMode::Eqaa4f8x.sample_layout();
    assert_eq!(layout.samples.len(), 8);
    assert!(layout.samples[..4].iter().all(|s| s.kind == SampleKind::ColorAndCoverage));
    assert!(layout.samples[4..].iter().all(|s| s.kind == SampleKind::CoverageOnly));
}

#[test]
fn test_supersample_layouts() {
    let layout = AaMode::Ssaa2xHorizontal.sample_layout();
    assert_eq!(layout.pixels, vec![Vec2::new(0.25, 0.5), Vec2::new(0.75, 0.5)]);
    assert_eq!(layout.display_scale, 1.0);

    let layout = AaMode::Ssaa1_5x.sample_layout();
    assert!(approx(layout.pixels[0], Vec2::new(0.375, 0.125)));
    assert_eq!(layout.resolve_locations, vec![Vec2::splat(0.5)]);
}

#[test]
fn test_rotated_grid_resolve_locations() {
    let layout = AaMode::Ssaa4xRotatedGrid.sample_layout();
    assert_eq!(layout.resolve_locations.len(), 4);
    assert!(approx(layout.resolve_locations[0], Vec2::new(0.7, 0.95)));
    assert!(approx(layout.resolve_locations[3], Vec2::new(0.05, 0.7)));

    let weights: f32 = ROTATED_GRID_TAPS.iter().map(|_| ROTATED_GRID_TAP_WEIGHT).sum();
    assert!((weights - 1.0).abs() < 1e-6);
}
