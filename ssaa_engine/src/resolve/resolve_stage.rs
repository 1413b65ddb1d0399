/// Resolve/blit stage: hardware resolve plus the full-screen quad blit

use std::sync::Arc;

use crate::error::Result;
use crate::device::{
    GraphicsDevice, CommandContext, Viewport, PrimitiveTopology,
    Buffer, BufferDesc, BufferUsage, Shader, ShaderAsset, ShaderLibrary, ShaderStage,
    InputLayout, Sampler, SamplerDesc, Filter, AddressMode,
    DepthStencilState, DepthStencilStateDesc, CompareOp,
    RenderTargetView, DepthStencilView,
};
use crate::policy::{ModePolicy, ResolveShader};
use crate::resolve::{BlitOrientation, QuadVertex, QUAD_VERTICES};
use crate::targets::RenderTargetSet;

/// Copies the intermediate target onto the host's output surface
pub struct ResolveStage {
    vertex_shader: Arc<dyn Shader>,
    copy_shader: Arc<dyn Shader>,
    rotated_grid_shader: Arc<dyn Shader>,
    input_layout: Arc<dyn InputLayout>,
    vertex_buffer: Arc<dyn Buffer>,
    sampler: Arc<dyn Sampler>,
    depth_state: Arc<dyn DepthStencilState>,
    orientation: BlitOrientation,
}

impl ResolveStage {
    pub fn new(
        device: &dyn GraphicsDevice,
        shaders: &ShaderLibrary,
        orientation: BlitOrientation,
    ) -> Result<Self> {
        let vertex_shader = shaders.get(&ShaderAsset::QUAD_VS)?;
        let input_layout = device.create_input_layout(&QuadVertex::layout(), &vertex_shader)?;

        let vertex_bytes: &[u8] = bytemuck::cast_slice(&QUAD_VERTICES);
        let vertex_buffer = device.create_buffer(BufferDesc {
            label: "quad_vertices".to_string(),
            size: vertex_bytes.len() as u64,
            usage: BufferUsage::Vertex,
            data: Some(vertex_bytes.to_vec()),
        })?;

        let sampler = device.create_sampler(SamplerDesc {
            label: "quad_linear_clamp".to_string(),
            filter: Filter::Linear,
            address_mode: AddressMode::Clamp,
            mip_lod_bias: 0.0,
            max_anisotropy: 1,
        })?;

        let depth_state = device.create_depth_stencil_state(DepthStencilStateDesc {
            label: "quad_depth_disabled".to_string(),
            depth_test_enable: false,
            depth_write_enable: false,
            depth_compare_op: CompareOp::Always,
        })?;

        Ok(Self {
            vertex_shader,
            copy_shader: shaders.get(&ShaderAsset::QUAD_COPY_PS)?,
            rotated_grid_shader: shaders.get(&ShaderAsset::QUAD_ROTATED_GRID_PS)?,
            input_layout,
            vertex_buffer,
            sampler,
            depth_state,
            orientation,
        })
    }

    /// Resolve `targets` (if multisampled) and blit the destination onto `output`
    ///
    /// The viewport covers the whole output surface.
    pub fn resolve(
        &self,
        context: &mut dyn CommandContext,
        targets: &RenderTargetSet,
        quad_constants: &Arc<dyn Buffer>,
        policy: &ModePolicy,
        output: &Arc<dyn RenderTargetView>,
        output_depth: &Arc<dyn DepthStencilView>,
    ) -> Result<()> {
        if let Some(multisample) = targets.multisample() {
            context.resolve_subresource(
                targets.destination(),
                multisample,
                targets.format().texture_format(),
            )?;
        }

        let output_info = output.info();
        context.set_render_targets(std::slice::from_ref(output), Some(output_depth))?;
        context.set_viewport(Viewport::full(output_info.width as f32, output_info.height as f32))?;
        context.set_depth_stencil_state(&self.depth_state, 0)?;
        context.set_samplers(ShaderStage::Fragment, 0, std::slice::from_ref(&self.sampler))?;
        context.set_shader_resources(ShaderStage::Fragment, 0, std::slice::from_ref(targets.destination_view()))?;
        context.set_constant_buffers(ShaderStage::Fragment, 1, std::slice::from_ref(quad_constants))?;
        context.set_input_layout(&self.input_layout)?;
        context.set_vertex_buffer(&self.vertex_buffer, std::mem::size_of::<QuadVertex>() as u32, 0)?;
        context.set_primitive_topology(PrimitiveTopology::TriangleList)?;
        context.set_vertex_shader(&self.vertex_shader)?;

        let pixel_shader = match policy.resolve_shader {
            ResolveShader::Copy => &self.copy_shader,
            ResolveShader::RotatedGrid => &self.rotated_grid_shader,
        };
        context.set_pixel_shader(pixel_shader)?;
        context.draw(6, self.orientation.first_vertex())
    }
}

#[cfg(test)]
#[path = "resolve_stage_tests.rs"]
mod tests;
