/// Intermediate render target pixel format

use crate::error::{Error, Result};
use crate::device::TextureFormat;

/// Pixel format of the intermediate color targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderTargetFormat {
    /// 8 bits per channel
    #[default]
    Fmt8x4,
    /// 10-10-10-2
    Fmt1010102,
    /// 16-bit float per channel
    FmtFP16x4,
}

impl RenderTargetFormat {
    /// Every format, in UI order
    pub const ALL: [RenderTargetFormat; 3] = [
        RenderTargetFormat::Fmt8x4,
        RenderTargetFormat::Fmt1010102,
        RenderTargetFormat::FmtFP16x4,
    ];

    /// Position of this format in `ALL`
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Format at UI index `index`
    pub fn from_index(index: u32) -> Result<RenderTargetFormat> {
        RenderTargetFormat::ALL
            .get(index as usize)
            .copied()
            .ok_or_else(|| Error::InvalidArgument(format!(
                "render target format index {} out of range (0..{})",
                index,
                RenderTargetFormat::ALL.len()
            )))
    }

    /// Device texture format
    pub fn texture_format(self) -> TextureFormat {
        match self {
            RenderTargetFormat::Fmt8x4 => TextureFormat::R8G8B8A8_UNORM,
            RenderTargetFormat::Fmt1010102 => TextureFormat::R10G10B10A2_UNORM,
            RenderTargetFormat::FmtFP16x4 => TextureFormat::R16G16B16A16_SFLOAT,
        }
    }

    /// Bytes per pixel, used for cost estimation
    pub fn bytes_per_pixel(self) -> u32 {
        self.texture_format().bytes_per_pixel()
    }

    /// Label shown in the format selector
    pub fn label(self) -> &'static str {
        match self {
            RenderTargetFormat::Fmt8x4 => "R8G8B8A8",
            RenderTargetFormat::Fmt1010102 => "R10G10B10A2",
            RenderTargetFormat::FmtFP16x4 => "R16G16B16A16F",
        }
    }
}

#[cfg(test)]
#[path = "render_target_format_tests.rs"]
mod tests;
