/// Mode policy table
///
/// `AaMode::policy` is the one place that maps a mode to target sizing,
/// sample counts, shading rate, mip bias and resolve shader. Allocation,
/// scene rendering, resolve and telemetry all read from it.

use crate::policy::AaMode;

/// Scale applied to the output size to get the intermediate target size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolutionMultiplier {
    pub x: f32,
    pub y: f32,
}

impl ResolutionMultiplier {
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Intermediate target size for an output of `width` x `height` (truncated)
    pub fn scale(&self, width: u32, height: u32) -> (u32, u32) {
        (
            (width as f32 * self.x) as u32,
            (height as f32 * self.y) as u32,
        )
    }
}

/// How often the scene pixel shader runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadingRate {
    /// Once per pixel
    PerPixel,
    /// Once per sample
    PerSample,
}

/// Mip LOD bias applied to the scene samplers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MipBias {
    None,
    MinusOne,
    MinusOneAndHalf,
}

impl MipBias {
    /// Bias in mip levels
    pub fn value(self) -> f32 {
        match self {
            MipBias::None => 0.0,
            MipBias::MinusOne => -1.0,
            MipBias::MinusOneAndHalf => -1.5,
        }
    }
}

/// Pixel shader used by the blit onto the output surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveShader {
    /// Single bilinear tap
    Copy,
    /// Four weighted taps at the rotated-grid offsets
    RotatedGrid,
}

/// Everything the pipeline needs to know about one AA mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModePolicy {
    pub multiplier: ResolutionMultiplier,
    /// Hardware samples per pixel of the draw target
    pub sample_count: u32,
    /// Multisample quality level (coverage samples for EQAA)
    pub sample_quality: u32,
    pub shading: ShadingRate,
    pub mip_bias: MipBias,
    pub resolve_shader: ResolveShader,
}

impl ModePolicy {
    const fn base(multiplier: ResolutionMultiplier, sample_count: u32, sample_quality: u32) -> Self {
        Self {
            multiplier,
            sample_count,
            sample_quality,
            shading: ShadingRate::PerPixel,
            mip_bias: MipBias::None,
            resolve_shader: ResolveShader::Copy,
        }
    }

    const fn per_sample(sample_count: u32, mip_bias: MipBias) -> Self {
        Self {
            shading: ShadingRate::PerSample,
            mip_bias,
            ..Self::base(ResolutionMultiplier::ONE, sample_count, 0)
        }
    }

    /// Returns true if draws go to a separate multisample surface
    pub fn is_multisampled(&self) -> bool {
        self.sample_count > 1
    }
}

impl AaMode {
    /// Policy for this mode
    pub fn policy(self) -> ModePolicy {
        let one = ResolutionMultiplier::ONE;
        match self {
            AaMode::None => ModePolicy::base(one, 1, 0),
            AaMode::Msaa2x => ModePolicy::base(one, 2, 0),
            AaMode::Ssaa2xHorizontal => ModePolicy::base(ResolutionMultiplier::new(2.0, 1.0), 1, 0),
            AaMode::Ssaa2xVertical => ModePolicy::base(ResolutionMultiplier::new(1.0, 2.0), 1, 0),
            AaMode::Ssaa2xPerSample => ModePolicy::per_sample(2, MipBias::None),
            AaMode::Ssaa1_5x => ModePolicy::base(ResolutionMultiplier::new(1.5, 1.5), 1, 0),
            AaMode::Msaa4x => ModePolicy::base(one, 4, 0),
            AaMode::Ssaa4x => ModePolicy::base(ResolutionMultiplier::new(2.0, 2.0), 1, 0),
            AaMode::Ssaa4xPerSample => ModePolicy::per_sample(4, MipBias::MinusOne),
            AaMode::Ssaa4xRotatedGrid => ModePolicy {
                resolve_shader: ResolveShader::RotatedGrid,
                ..ModePolicy::base(ResolutionMultiplier::new(2.0, 2.0), 1, 0)
            },
            AaMode::Msaa8x => ModePolicy::base(one, 8, 0),
            AaMode::Ssaa8xPerSample => ModePolicy::per_sample(8, MipBias::MinusOneAndHalf),
            AaMode::Eqaa2f4x => ModePolicy::base(one, 2, 4),
            AaMode::Eqaa4f8x => ModePolicy::base(one, 4, 8),
            AaMode::Eqaa8f16x => ModePolicy::base(one, 8, 16),
        }
    }
}

#[cfg(test)]
#[path = "mode_policy_tests.rs"]
mod tests;
