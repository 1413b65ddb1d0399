/// Antialiasing mode selection

use crate::error::{Error, Result};
use crate::device::GraphicsDevice;
use crate::policy::RenderTargetFormat;

/// Antialiasing mode
///
/// Closed set, in UI order. The index of a variant is its position in the
/// host's mode selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AaMode {
    /// No antialiasing
    #[default]
    None,
    /// 2x hardware multisample
    Msaa2x,
    /// 2x supersample, double width
    Ssaa2xHorizontal,
    /// 2x supersample, double height
    Ssaa2xVertical,
    /// 2 samples shaded at sample frequency
    Ssaa2xPerSample,
    /// 1.5 x 1.5 supersample
    Ssaa1_5x,
    /// 4x hardware multisample
    Msaa4x,
    /// 4x supersample (2 x 2 ordered grid)
    Ssaa4x,
    /// 4 samples shaded at sample frequency, -1 mip bias
    Ssaa4xPerSample,
    /// 4x supersample with the rotated-grid resolve
    Ssaa4xRotatedGrid,
    /// 8x hardware multisample
    Msaa8x,
    /// 8 samples shaded at sample frequency, -1.5 mip bias
    Ssaa8xPerSample,
    /// 2 color samples, 4 coverage samples
    Eqaa2f4x,
    /// 4 color samples, 8 coverage samples
    Eqaa4f8x,
    /// 8 color samples, 16 coverage samples
    Eqaa8f16x,
}

impl AaMode {
    /// Every mode, in UI order
    pub const ALL: [AaMode; 15] = [
        AaMode::None,
        AaMode::Msaa2x,
        AaMode::Ssaa2xHorizontal,
        AaMode::Ssaa2xVertical,
        AaMode::Ssaa2xPerSample,
        AaMode::Ssaa1_5x,
        AaMode::Msaa4x,
        AaMode::Ssaa4x,
        AaMode::Ssaa4xPerSample,
        AaMode::Ssaa4xRotatedGrid,
        AaMode::Msaa8x,
        AaMode::Ssaa8xPerSample,
        AaMode::Eqaa2f4x,
        AaMode::Eqaa4f8x,
        AaMode::Eqaa8f16x,
    ];

    /// Last mode that does not need vendor EQAA support
    pub const LAST_STANDARD: AaMode = AaMode::Ssaa8xPerSample;

    /// Position of this mode in `ALL`
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Mode at UI index `index`
    pub fn from_index(index: u32) -> Result<AaMode> {
        AaMode::ALL
            .get(index as usize)
            .copied()
            .ok_or_else(|| Error::InvalidArgument(format!(
                "AA mode index {} out of range (0..{})",
                index,
                AaMode::ALL.len()
            )))
    }

    /// Short label shown in the mode selector
    pub fn label(self) -> &'static str {
        match self {
            AaMode::None => "None",
            AaMode::Msaa2x => "2x MSAA",
            AaMode::Ssaa2xHorizontal => "2x SSAA (Horiz.)",
            AaMode::Ssaa2xVertical => "2x SSAA (Vert.)",
            AaMode::Ssaa2xPerSample => "2x SSAA SF",
            AaMode::Ssaa1_5x => "1.5x1.5 SSAA",
            AaMode::Msaa4x => "4x MSAA",
            AaMode::Ssaa4x => "4x SSAA",
            AaMode::Ssaa4xPerSample => "4x SSAA SF",
            AaMode::Ssaa4xRotatedGrid => "4x SSAA RG",
            AaMode::Msaa8x => "8x MSAA",
            AaMode::Ssaa8xPerSample => "8x SSAA SF",
            AaMode::Eqaa2f4x => "2f4x EQAA",
            AaMode::Eqaa4f8x => "4f8x EQAA",
            AaMode::Eqaa8f16x => "8f16x EQAA",
        }
    }

    /// Verbose description shown next to the cost summary
    pub fn description(self) -> &'static str {
        match self {
            AaMode::None => "No Antialiasing",
            AaMode::Msaa2x => "2x Multisample Antialiasing",
            AaMode::Ssaa2xHorizontal => "2x Supersample AA Horizontal",
            AaMode::Ssaa2xVertical => "2x Supersample AA Vertical",
            AaMode::Ssaa2xPerSample => "Per-sample 2x Supersample AA",
            AaMode::Ssaa1_5x => "1.5 x 1.5 Supersample AA",
            AaMode::Msaa4x => "4x Multisample Antialiasing",
            AaMode::Ssaa4x => "4x Supersample AA",
            AaMode::Ssaa4xPerSample => "Per-sample 4x Supersample AA with -1 Mip LOD Bias",
            AaMode::Ssaa4xRotatedGrid => "4x Supersample AA with custom rotated grid resolve",
            AaMode::Msaa8x => "8x Multisample Antialiasing",
            AaMode::Ssaa8xPerSample => "Per-sample 8x Supersample AA with -1.5 Mip LOD Bias",
            AaMode::Eqaa2f4x => "2f4x Enhanced Quality AA",
            AaMode::Eqaa4f8x => "4f8x Enhanced Quality AA",
            AaMode::Eqaa8f16x => "8f16x Enhanced Quality AA",
        }
    }

    /// Returns true for the vendor EQAA modes
    pub fn is_eqaa(self) -> bool {
        matches!(self, AaMode::Eqaa2f4x | AaMode::Eqaa4f8x | AaMode::Eqaa8f16x)
    }

    /// Next mode in UI order, staying on the last reachable mode
    ///
    /// Without EQAA support the last reachable mode is `LAST_STANDARD`.
    pub fn next(self, include_eqaa: bool) -> AaMode {
        let last = if include_eqaa {
            AaMode::Eqaa8f16x
        } else {
            AaMode::LAST_STANDARD
        };
        if self.index() >= last.index() {
            return self;
        }
        AaMode::ALL[self.index() as usize + 1]
    }

    /// Previous mode in UI order, staying on `None`
    pub fn previous(self) -> AaMode {
        match self.index() {
            0 => self,
            i => AaMode::ALL[i as usize - 1],
        }
    }

    /// Returns true if `device` can allocate targets for this mode in every render target format
    pub fn is_supported(self, device: &dyn GraphicsDevice) -> bool {
        let policy = self.policy();
        if policy.sample_count == 1 {
            return true;
        }
        RenderTargetFormat::ALL.iter().all(|format| {
            device.multisample_quality_levels(format.texture_format(), policy.sample_count)
                > policy.sample_quality
        })
    }

    /// Returns true if `device` supports all three EQAA modes
    pub fn eqaa_supported(device: &dyn GraphicsDevice) -> bool {
        AaMode::ALL
            .iter()
            .filter(|mode| mode.is_eqaa())
            .all(|mode| mode.is_supported(device))
    }
}

#[cfg(test)]
#[path = "aa_mode_tests.rs"]
mod tests;
