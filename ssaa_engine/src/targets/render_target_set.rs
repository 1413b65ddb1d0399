/// One complete set of intermediate surfaces for a mode, format and output size

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::device::{
    GraphicsDevice, Texture, TextureDesc, TextureFormat, TextureUsage,
    RenderTargetView, DepthStencilView, ShaderResourceView,
};
use crate::policy::{AaMode, RenderTargetFormat};

/// Intermediate render target set
///
/// The destination surface is always single-sampled and is what the blit
/// reads. When the mode is multisampled a separate multisample surface is the
/// draw target and gets resolved into the destination. Every surface and view
/// is released when the set drops.
pub struct RenderTargetSet {
    width: u32,
    height: u32,
    format: RenderTargetFormat,
    sample_count: u32,
    destination: Arc<dyn Texture>,
    multisample: Option<Arc<dyn Texture>>,
    draw_view: Arc<dyn RenderTargetView>,
    destination_view: Arc<dyn ShaderResourceView>,
    depth: Arc<dyn Texture>,
    depth_view: Arc<dyn DepthStencilView>,
}

impl RenderTargetSet {
    /// Create every surface and view for `mode` at the scaled output size
    ///
    /// Surfaces created before a failing call are released on return.
    pub fn create(
        device: &dyn GraphicsDevice,
        output_width: u32,
        output_height: u32,
        mode: AaMode,
        format: RenderTargetFormat,
    ) -> Result<Self> {
        let policy = mode.policy();
        let (width, height) = policy.multiplier.scale(output_width, output_height);
        if width == 0 || height == 0 {
            return Err(Error::InvalidArgument(format!(
                "render target size {}x{} is empty",
                width, height
            )));
        }

        let destination = device.create_texture(TextureDesc {
            label: "ssaa_destination".to_string(),
            width,
            height,
            format: format.texture_format(),
            usage: TextureUsage::RENDER_TARGET | TextureUsage::SAMPLED,
            sample_count: 1,
            sample_quality: 0,
        })?;

        let multisample = if policy.is_multisampled() {
            Some(device.create_texture(TextureDesc {
                label: "ssaa_multisample".to_string(),
                width,
                height,
                format: format.texture_format(),
                usage: TextureUsage::RENDER_TARGET,
                sample_count: policy.sample_count,
                sample_quality: policy.sample_quality,
            })?)
        } else {
            None
        };

        let draw_view = device.create_render_target_view(multisample.as_ref().unwrap_or(&destination))?;
        let destination_view = device.create_shader_resource_view(&destination)?;

        let depth = device.create_texture(TextureDesc {
            label: "ssaa_depth".to_string(),
            width,
            height,
            format: TextureFormat::D24_UNORM_S8_UINT,
            usage: TextureUsage::DEPTH_STENCIL,
            sample_count: policy.sample_count,
            sample_quality: policy.sample_quality,
        })?;
        let depth_view = device.create_depth_stencil_view(&depth)?;

        Ok(Self {
            width,
            height,
            format,
            sample_count: policy.sample_count,
            destination,
            multisample,
            draw_view,
            destination_view,
            depth,
            depth_view,
        })
    }

    /// Width of every surface in the set
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of every surface in the set
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> RenderTargetFormat {
        self.format
    }

    /// Samples per pixel of the draw and depth surfaces
    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    /// Single-sample surface the blit reads
    pub fn destination(&self) -> &Arc<dyn Texture> {
        &self.destination
    }

    /// Multisample draw surface, if the mode has one
    pub fn multisample(&self) -> Option<&Arc<dyn Texture>> {
        self.multisample.as_ref()
    }

    /// View scene draws render into
    pub fn draw_view(&self) -> &Arc<dyn RenderTargetView> {
        &self.draw_view
    }

    /// Shader view of the destination surface
    pub fn destination_view(&self) -> &Arc<dyn ShaderResourceView> {
        &self.destination_view
    }

    /// Depth/stencil surface, sampled like the draw surface
    pub fn depth(&self) -> &Arc<dyn Texture> {
        &self.depth
    }

    pub fn depth_view(&self) -> &Arc<dyn DepthStencilView> {
        &self.depth_view
    }
}

#[cfg(test)]
#[path = "render_target_set_tests.rs"]
mod tests;
