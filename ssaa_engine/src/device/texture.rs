/// Texture trait, texture descriptor, and texture info

use bitflags::bitflags;

/// Texture pixel format
///
/// Covers the three intermediate render target formats and the
/// depth/stencil format used for every depth surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum TextureFormat {
    /// 8 bits per channel, unsigned normalized
    R8G8B8A8_UNORM,
    /// 10 bits per color channel + 2 bits alpha, unsigned normalized
    R10G10B10A2_UNORM,
    /// 16-bit float per channel
    R16G16B16A16_SFLOAT,
    /// 24-bit depth + 8-bit stencil
    D24_UNORM_S8_UINT,
}

impl TextureFormat {
    /// Size in bytes of one pixel (one sample) of this format
    pub fn bytes_per_pixel(&self) -> u32 {
        match self {
            TextureFormat::R8G8B8A8_UNORM => 4,
            TextureFormat::R10G10B10A2_UNORM => 4,
            TextureFormat::R16G16B16A16_SFLOAT => 8,
            TextureFormat::D24_UNORM_S8_UINT => 4,
        }
    }

    /// Returns true for depth/stencil formats
    pub fn is_depth_stencil(&self) -> bool {
        matches!(self, TextureFormat::D24_UNORM_S8_UINT)
    }
}

bitflags! {
    /// How a texture may be bound to the pipeline
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TextureUsage: u32 {
        /// Texture can be sampled in shaders
        const SAMPLED = 1 << 0;
        /// Texture can be used as a color render target
        const RENDER_TARGET = 1 << 1;
        /// Texture can be used as a depth/stencil attachment
        const DEPTH_STENCIL = 1 << 2;
    }
}

// ===== TEXTURE DESC =====

/// Descriptor for creating a 2D texture
#[derive(Debug, Clone)]
pub struct TextureDesc {
    /// Debug label
    pub label: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Pixel format
    pub format: TextureFormat,
    /// Usage flags
    pub usage: TextureUsage,
    /// Samples per pixel (1 = single-sampled)
    pub sample_count: u32,
    /// Multisample quality level (0 unless the device exposes extra coverage samples)
    pub sample_quality: u32,
}

// ===== TEXTURE INFO =====

/// Read-only properties of a created texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureInfo {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Pixel format
    pub format: TextureFormat,
    /// Usage flags
    pub usage: TextureUsage,
    /// Samples per pixel
    pub sample_count: u32,
    /// Multisample quality level
    pub sample_quality: u32,
}

impl TextureInfo {
    /// Returns true if this texture holds more than one sample per pixel
    pub fn is_multisampled(&self) -> bool {
        self.sample_count > 1
    }
}

impl From<&TextureDesc> for TextureInfo {
    fn from(desc: &TextureDesc) -> Self {
        Self {
            width: desc.width,
            height: desc.height,
            format: desc.format,
            usage: desc.usage,
            sample_count: desc.sample_count,
            sample_quality: desc.sample_quality,
        }
    }
}

// ===== TEXTURE TRAIT =====

/// Texture resource trait
///
/// Implemented by backend-specific texture types.
/// The texture is automatically destroyed when dropped.
pub trait Texture: Send + Sync {
    /// Get the read-only properties of this texture
    fn info(&self) -> &TextureInfo;
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
