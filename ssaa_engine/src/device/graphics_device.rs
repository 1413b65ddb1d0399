/// GraphicsDevice trait - resource factory interface

use std::sync::Arc;
use crate::error::Result;
use crate::device::{
    Texture, TextureDesc, TextureFormat, Buffer, BufferDesc, Shader, ShaderDesc,
    RenderTargetView, DepthStencilView, ShaderResourceView,
    Sampler, SamplerDesc, BlendState, BlendStateDesc,
    DepthStencilState, DepthStencilStateDesc, RasterizerState, RasterizerStateDesc,
    InputLayout, VertexLayout,
};

/// Graphics device trait
///
/// This is the central factory interface for creating GPU resources.
/// Implemented by backend-specific devices supplied by the host.
/// Every resource is released when its last `Arc` is dropped.
pub trait GraphicsDevice: Send + Sync {
    /// Create a 2D texture
    ///
    /// # Arguments
    ///
    /// * `desc` - Texture descriptor (size, format, usage, samples)
    ///
    /// # Returns
    ///
    /// A shared pointer to the created texture
    fn create_texture(&self, desc: TextureDesc) -> Result<Arc<dyn Texture>>;

    /// Create a render target view over a texture created with `TextureUsage::RENDER_TARGET`
    fn create_render_target_view(&self, texture: &Arc<dyn Texture>) -> Result<Arc<dyn RenderTargetView>>;

    /// Create a depth/stencil view over a texture created with `TextureUsage::DEPTH_STENCIL`
    fn create_depth_stencil_view(&self, texture: &Arc<dyn Texture>) -> Result<Arc<dyn DepthStencilView>>;

    /// Create a shader resource view over a texture created with `TextureUsage::SAMPLED`
    fn create_shader_resource_view(&self, texture: &Arc<dyn Texture>) -> Result<Arc<dyn ShaderResourceView>>;

    /// Create a buffer
    ///
    /// # Arguments
    ///
    /// * `desc` - Buffer descriptor, optionally carrying initial contents
    ///
    /// # Returns
    ///
    /// A shared pointer to the created buffer
    fn create_buffer(&self, desc: BufferDesc) -> Result<Arc<dyn Buffer>>;

    /// Create a shader from compiled bytecode
    fn create_shader(&self, desc: ShaderDesc) -> Result<Arc<dyn Shader>>;

    /// Create an input layout matching `layout` against the input signature of `vertex_shader`
    fn create_input_layout(
        &self,
        layout: &VertexLayout,
        vertex_shader: &Arc<dyn Shader>,
    ) -> Result<Arc<dyn InputLayout>>;

    /// Create a sampler
    fn create_sampler(&self, desc: SamplerDesc) -> Result<Arc<dyn Sampler>>;

    /// Create a blend state
    fn create_blend_state(&self, desc: BlendStateDesc) -> Result<Arc<dyn BlendState>>;

    /// Create a depth/stencil state
    fn create_depth_stencil_state(&self, desc: DepthStencilStateDesc) -> Result<Arc<dyn DepthStencilState>>;

    /// Create a rasterizer state
    fn create_rasterizer_state(&self, desc: RasterizerStateDesc) -> Result<Arc<dyn RasterizerState>>;

    /// Number of multisample quality levels supported for `format` at `sample_count`
    ///
    /// Returns 0 when the combination is not supported at all.
    fn multisample_quality_levels(&self, format: TextureFormat, sample_count: u32) -> u32;
}
