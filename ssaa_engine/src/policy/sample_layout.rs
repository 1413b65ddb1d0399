/// Sample layouts per AA mode
///
/// Read-only description of where each mode places its shaded pixels,
/// samples and resolve taps inside one output pixel, in unit-pixel
/// coordinates with y pointing up. Consumed by sample-pattern overlays.

use glam::Vec2;
use crate::policy::AaMode;

/// Offsets of the four rotated-grid resolve taps, in destination texels
pub const ROTATED_GRID_TAPS: [Vec2; 4] = [
    Vec2::new(0.4, 0.9),
    Vec2::new(0.9, -0.4),
    Vec2::new(-0.4, -0.9),
    Vec2::new(-0.9, 0.4),
];

/// Weight of each rotated-grid resolve tap
pub const ROTATED_GRID_TAP_WEIGHT: f32 = 0.25;

// Standard multisample positions, in 1/16 pixel units around the centre
const MSAA2_TAPS: [(i32, i32); 2] = [(4, 4), (-4, -4)];
const MSAA4_TAPS: [(i32, i32); 4] = [(-2, -6), (6, -2), (-6, 2), (2, 6)];
const MSAA8_TAPS: [(i32, i32); 8] = [
    (1, -3), (-1, 3), (5, 1), (-3, -5), (-5, 5), (-7, -1), (3, 7), (7, -7),
];

// EQAA coverage positions; the leading half also carry color
const EQAA4_TAPS: [(i32, i32); 4] = [(-6, -6), (6, 6), (-2, 2), (2, -2)];
const EQAA8_TAPS: [(i32, i32); 8] = [
    (7, 6), (-7, -8), (-5, 5), (1, -5), (3, 7), (-3, -7), (-1, 1), (5, -1),
];
const EQAA16_TAPS: [(i32, i32); 16] = [
    (7, 6), (-7, -8), (-5, 5), (1, -5), (3, 7), (-3, -7), (-1, 1), (5, -1),
    (4, 2), (-8, -6), (-2, 3), (2, -3), (0, 4), (-4, -2), (-6, 0), (6, -4),
];

/// What a sample point stores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    /// Stores color and coverage
    ColorAndCoverage,
    /// Stores coverage only (EQAA)
    CoverageOnly,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub position: Vec2,
    pub kind: SampleKind,
}

/// Layout of one output pixel under an AA mode
#[derive(Debug, Clone, PartialEq)]
pub struct SampleLayout {
    /// Centres of the shaded (intermediate target) pixels
    pub pixels: Vec<Vec2>,
    /// Sample points
    pub samples: Vec<SamplePoint>,
    /// Points the resolve reads from
    pub resolve_locations: Vec<Vec2>,
    /// Zoom applied around the centre when displaying the layout
    pub display_scale: f32,
}

impl SampleLayout {
    /// Number of samples that store color
    pub fn color_sample_count(&self) -> usize {
        self.samples
            .iter()
            .filter(|s| s.kind == SampleKind::ColorAndCoverage)
            .count()
    }
}

fn tap_position(tap: (i32, i32)) -> Vec2 {
    let normalise = |v: i32| 0.5 + 0.5 * (v as f32 / 8.0);
    Vec2::new(0.25 + 0.5 * normalise(tap.0), 0.25 + 0.5 * (1.0 - normalise(tap.1)))
}

fn multisample_layout(taps: &[(i32, i32)], color_samples: usize) -> SampleLayout {
    let samples = taps
        .iter()
        .enumerate()
        .map(|(i, &tap)| SamplePoint {
            position: tap_position(tap),
            kind: if i < color_samples {
                SampleKind::ColorAndCoverage
            } else {
                SampleKind::CoverageOnly
            },
        })
        .collect();
    SampleLayout {
        pixels: vec![Vec2::splat(0.5)],
        samples,
        resolve_locations: vec![Vec2::splat(0.5)],
        display_scale: 1.5,
    }
}

fn supersample_layout(pixels: Vec<Vec2>, resolve_locations: Vec<Vec2>) -> SampleLayout {
    let samples = pixels
        .iter()
        .map(|&position| SamplePoint { position, kind: SampleKind::ColorAndCoverage })
        .collect();
    SampleLayout {
        pixels,
        samples,
        resolve_locations,
        display_scale: 1.0,
    }
}

fn ordered_grid(offset: Vec2) -> Vec<Vec2> {
    [(0.25, 0.25), (0.25, 0.75), (0.75, 0.25), (0.75, 0.75)]
        .iter()
        .map(|&(x, y)| Vec2::new(x, y) + offset)
        .collect()
}

impl AaMode {
    /// Sample layout of this mode
    pub fn sample_layout(self) -> SampleLayout {
        let centre = vec![Vec2::splat(0.5)];
        match self {
            AaMode::None => multisample_layout(&[(0, 0)], 1),
            AaMode::Msaa2x | AaMode::Ssaa2xPerSample => multisample_layout(&MSAA2_TAPS, 2),
            AaMode::Eqaa2f4x => multisample_layout(&EQAA4_TAPS, 2),
            AaMode::Msaa4x | AaMode::Ssaa4xPerSample => multisample_layout(&MSAA4_TAPS, 4),
            AaMode::Eqaa4f8x => multisample_layout(&EQAA8_TAPS, 4),
            AaMode::Msaa8x | AaMode::Ssaa8xPerSample => multisample_layout(&MSAA8_TAPS, 8),
            AaMode::Eqaa8f16x => multisample_layout(&EQAA16_TAPS, 8),
            AaMode::Ssaa2xHorizontal => supersample_layout(
                vec![Vec2::new(0.25, 0.5), Vec2::new(0.75, 0.5)],
                centre,
            ),
            AaMode::Ssaa2xVertical => supersample_layout(
                vec![Vec2::new(0.5, 0.25), Vec2::new(0.5, 0.75)],
                centre,
            ),
            AaMode::Ssaa4x => supersample_layout(ordered_grid(Vec2::ZERO), centre),
            AaMode::Ssaa4xRotatedGrid => supersample_layout(
                ordered_grid(Vec2::ZERO),
                ROTATED_GRID_TAPS.iter().map(|&tap| Vec2::splat(0.5) + 0.5 * tap).collect(),
            ),
            AaMode::Ssaa1_5x => supersample_layout(ordered_grid(Vec2::new(0.125, -0.125)), centre),
        }
    }
}

#[cfg(test)]
#[path = "sample_layout_tests.rs"]
mod tests;
