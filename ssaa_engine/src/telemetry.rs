//! Render target cost and per-pass GPU timings shown by the host

use std::fmt;
use crate::policy::{AaMode, RenderTargetFormat};

const MEGABYTE: f32 = 1024.0 * 1024.0;

/// Depth/stencil bytes per sample (D24S8)
const DEPTH_BYTES_PER_SAMPLE: f32 = 4.0;

/// Size and video memory cost of the intermediate targets
///
/// The color term covers the single-sample destination surface only; the
/// depth term scales with the sample count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetCost {
    pub width: u32,
    pub height: u32,
    pub sample_count: u32,
    pub color_megabytes: f32,
    pub depth_megabytes: f32,
}

impl TargetCost {
    /// Cost of the targets `mode` and `format` need for the given output size
    pub fn compute(output_width: u32, output_height: u32, mode: AaMode, format: RenderTargetFormat) -> Self {
        let policy = mode.policy();
        let (width, height) = policy.multiplier.scale(output_width, output_height);
        let pixels = output_width as f32 * policy.multiplier.x * output_height as f32 * policy.multiplier.y;

        Self {
            width,
            height,
            sample_count: policy.sample_count,
            color_megabytes: pixels * format.bytes_per_pixel() as f32 / MEGABYTE,
            depth_megabytes: pixels * DEPTH_BYTES_PER_SAMPLE * policy.sample_count as f32 / MEGABYTE,
        }
    }
}

impl fmt::Display for TargetCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Render target {}x{} ", self.width, self.height)?;
        if self.sample_count > 1 {
            write!(f, "({} samples) ", self.sample_count)?;
        }
        write!(
            f,
            "({:.1}Mb color, {:.1}Mb Z-buffer)",
            self.color_megabytes, self.depth_megabytes
        )
    }
}

// ===== PASS TIMINGS =====

/// GPU timer bracketing the scene pass
pub const SCENE_TIMER: &str = "Scene";

/// GPU timer bracketing the hardware resolve and the blit
pub const RESOLVE_TIMER: &str = "AA Resolve";

/// Frames averaged before a new pass cost is published
pub const PASS_TIMING_WINDOW: u32 = 11;

/// Rolling average of the scene and resolve pass costs
///
/// Measurements accumulate for `PASS_TIMING_WINDOW` frames, then the averages
/// are published and the accumulators restart. The published values hold
/// steady in between so the on-screen numbers stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PassTimings {
    scene_accumulated: f32,
    resolve_accumulated: f32,
    frames: u32,
    scene_milliseconds: f32,
    resolve_milliseconds: f32,
}

impl PassTimings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one frame's scene and resolve measurements, in milliseconds
    pub fn record(&mut self, scene_milliseconds: f32, resolve_milliseconds: f32) {
        self.scene_accumulated += scene_milliseconds;
        self.resolve_accumulated += resolve_milliseconds;
        self.frames += 1;

        if self.frames >= PASS_TIMING_WINDOW {
            let frames = self.frames as f32;
            self.scene_milliseconds = self.scene_accumulated / frames;
            self.resolve_milliseconds = self.resolve_accumulated / frames;
            self.scene_accumulated = 0.0;
            self.resolve_accumulated = 0.0;
            self.frames = 0;
        }
    }

    /// Last published average scene pass cost
    pub fn scene_milliseconds(&self) -> f32 {
        self.scene_milliseconds
    }

    /// Last published average resolve pass cost
    pub fn resolve_milliseconds(&self) -> f32 {
        self.resolve_milliseconds
    }

    /// Frames accumulated toward the next published average
    pub fn pending_frames(&self) -> u32 {
        self.frames
    }
}

impl fmt::Display for PassTimings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cost in milliseconds( Scene = {:.2}, Resolve = {:.2} )",
            self.scene_milliseconds, self.resolve_milliseconds
        )
    }
}

#[cfg(test)]
#[path = "telemetry_tests.rs"]
mod tests;
