/// CommandContext trait - immediate-mode command recording

use std::sync::Arc;
use crate::error::Result;
use crate::device::{
    Buffer, Texture, TextureFormat, Shader, ShaderStage, Sampler, InputLayout,
    BlendState, DepthStencilState, RasterizerState,
    RenderTargetView, DepthStencilView, ShaderResourceView,
};

/// Viewport in render target pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Viewport {
    /// Viewport anchored at the origin covering `width` x `height`, depth range [0, 1]
    pub fn full(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }
}

/// Index buffer element type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexType {
    /// 16-bit indices (max 65535 vertices)
    U16,
    /// 32-bit indices
    U32,
}

impl IndexType {
    /// Size in bytes of one index element
    pub fn size_bytes(&self) -> u32 {
        match self {
            IndexType::U16 => 2,
            IndexType::U32 => 4,
        }
    }
}

/// Primitive topology
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveTopology {
    /// Triangle list
    TriangleList,
    /// Triangle strip
    TriangleStrip,
}

/// Immediate-mode command context
///
/// Commands execute in call order on the GPU queue owned by the host.
/// Every binding stays in effect until replaced.
pub trait CommandContext: Send {
    /// Bind color render targets and an optional depth/stencil view
    fn set_render_targets(
        &mut self,
        color: &[Arc<dyn RenderTargetView>],
        depth: Option<&Arc<dyn DepthStencilView>>,
    ) -> Result<()>;

    /// Clear a color render target to `color` (RGBA)
    fn clear_render_target(&mut self, view: &Arc<dyn RenderTargetView>, color: [f32; 4]) -> Result<()>;

    /// Clear the depth plane of a depth/stencil view
    fn clear_depth_stencil(&mut self, view: &Arc<dyn DepthStencilView>, depth: f32, stencil: u8) -> Result<()>;

    /// Set the viewport
    fn set_viewport(&mut self, viewport: Viewport) -> Result<()>;

    /// Bind a blend state
    fn set_blend_state(&mut self, state: &Arc<dyn BlendState>) -> Result<()>;

    /// Bind a depth/stencil state with a stencil reference value
    fn set_depth_stencil_state(&mut self, state: &Arc<dyn DepthStencilState>, stencil_ref: u32) -> Result<()>;

    /// Bind a rasterizer state
    fn set_rasterizer_state(&mut self, state: &Arc<dyn RasterizerState>) -> Result<()>;

    /// Bind samplers to consecutive slots of a shader stage
    fn set_samplers(
        &mut self,
        stage: ShaderStage,
        first_slot: u32,
        samplers: &[Arc<dyn Sampler>],
    ) -> Result<()>;

    /// Bind shader resource views to consecutive slots of a shader stage
    fn set_shader_resources(
        &mut self,
        stage: ShaderStage,
        first_slot: u32,
        views: &[Arc<dyn ShaderResourceView>],
    ) -> Result<()>;

    /// Bind constant buffers to consecutive slots of a shader stage
    fn set_constant_buffers(
        &mut self,
        stage: ShaderStage,
        first_slot: u32,
        buffers: &[Arc<dyn Buffer>],
    ) -> Result<()>;

    /// Bind a vertex input layout
    fn set_input_layout(&mut self, layout: &Arc<dyn InputLayout>) -> Result<()>;

    /// Bind a vertex buffer to stream 0
    fn set_vertex_buffer(&mut self, buffer: &Arc<dyn Buffer>, stride: u32, offset: u64) -> Result<()>;

    /// Bind an index buffer
    fn set_index_buffer(&mut self, buffer: &Arc<dyn Buffer>, index_type: IndexType, offset: u64) -> Result<()>;

    /// Set the primitive topology
    fn set_primitive_topology(&mut self, topology: PrimitiveTopology) -> Result<()>;

    /// Bind a vertex shader
    fn set_vertex_shader(&mut self, shader: &Arc<dyn Shader>) -> Result<()>;

    /// Bind a pixel shader
    fn set_pixel_shader(&mut self, shader: &Arc<dyn Shader>) -> Result<()>;

    /// Draw non-indexed vertices
    fn draw(&mut self, vertex_count: u32, first_vertex: u32) -> Result<()>;

    /// Draw indexed vertices
    fn draw_indexed(&mut self, index_count: u32, first_index: u32, vertex_offset: i32) -> Result<()>;

    /// Resolve a multisampled texture into a single-sample texture
    ///
    /// # Arguments
    ///
    /// * `destination` - Single-sample texture receiving the averaged samples
    /// * `source` - Multisampled texture of identical dimensions
    /// * `format` - Format both textures are interpreted as during the resolve
    fn resolve_subresource(
        &mut self,
        destination: &Arc<dyn Texture>,
        source: &Arc<dyn Texture>,
        format: TextureFormat,
    ) -> Result<()>;

    // ===== GPU TIMERS =====

    /// Start measuring the GPU time of the commands that follow
    ///
    /// Timers do not nest: `end_timer` must be called before the next
    /// `begin_timer`.
    fn begin_timer(&mut self, name: &str) -> Result<()>;

    /// Stop the running timer
    fn end_timer(&mut self) -> Result<()>;

    /// Latest completed measurement of timer `name`, in milliseconds
    ///
    /// GPU timestamps arrive late, so this usually reports an earlier frame.
    /// Returns `None` until a measurement for `name` is available.
    fn timer_milliseconds(&mut self, name: &str) -> Result<Option<f32>>;
}
