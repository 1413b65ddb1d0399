/// Scene renderer: draws the selected scene into the intermediate target

use std::sync::Arc;

use crate::error::Result;
use crate::device::{
    GraphicsDevice, CommandContext, Viewport, IndexType, PrimitiveTopology,
    Buffer, BufferDesc, BufferUsage, Shader, ShaderAsset, ShaderLibrary, ShaderStage,
    ShaderResourceView, InputLayout, Sampler, SamplerDesc, Filter, AddressMode,
    BlendState, BlendStateDesc, DepthStencilState, DepthStencilStateDesc, CompareOp,
    RasterizerState, RasterizerStateDesc,
};
use crate::policy::{MipBias, ModePolicy, ShadingRate};
use crate::targets::RenderTargetSet;
use crate::scene::{
    CameraView, SceneMesh, SceneType, SceneConstants, CubeVertex,
    cube_vertices, CUBE_INDICES, stress_test_transforms, mesh_vertex_layout,
};

/// Vertex and pixel shaders of one scene
struct ScenePass {
    vertex_shader: Arc<dyn Shader>,
    pixel_shader: Arc<dyn Shader>,
    per_sample_pixel_shader: Arc<dyn Shader>,
    input_layout: Arc<dyn InputLayout>,
}

impl ScenePass {
    fn new(
        device: &dyn GraphicsDevice,
        shaders: &ShaderLibrary,
        vs: &ShaderAsset,
        ps: &ShaderAsset,
        per_sample_ps: &ShaderAsset,
        layout: &crate::device::VertexLayout,
    ) -> Result<Self> {
        let vertex_shader = shaders.get(vs)?;
        let input_layout = device.create_input_layout(layout, &vertex_shader)?;
        Ok(Self {
            vertex_shader,
            pixel_shader: shaders.get(ps)?,
            per_sample_pixel_shader: shaders.get(per_sample_ps)?,
            input_layout,
        })
    }

    fn bind(&self, context: &mut dyn CommandContext, shading: ShadingRate) -> Result<()> {
        let pixel_shader = match shading {
            ShadingRate::PerPixel => &self.pixel_shader,
            ShadingRate::PerSample => &self.per_sample_pixel_shader,
        };
        context.set_input_layout(&self.input_layout)?;
        context.set_vertex_shader(&self.vertex_shader)?;
        context.set_pixel_shader(pixel_shader)
    }
}

/// Point and anisotropic samplers, one pair per mip bias
struct BiasedSamplers {
    none: [Arc<dyn Sampler>; 2],
    minus_one: [Arc<dyn Sampler>; 2],
    minus_one_and_half: [Arc<dyn Sampler>; 2],
}

impl BiasedSamplers {
    fn new(device: &dyn GraphicsDevice) -> Result<Self> {
        Ok(Self {
            none: Self::create_pair(device, MipBias::None)?,
            minus_one: Self::create_pair(device, MipBias::MinusOne)?,
            minus_one_and_half: Self::create_pair(device, MipBias::MinusOneAndHalf)?,
        })
    }

    fn create_pair(device: &dyn GraphicsDevice, bias: MipBias) -> Result<[Arc<dyn Sampler>; 2]> {
        let point = device.create_sampler(SamplerDesc {
            label: format!("scene_point_{:?}", bias),
            filter: Filter::Point,
            address_mode: AddressMode::Clamp,
            mip_lod_bias: bias.value(),
            max_anisotropy: 1,
        })?;
        let anisotropic = device.create_sampler(SamplerDesc {
            label: format!("scene_anisotropic_{:?}", bias),
            filter: Filter::Anisotropic,
            address_mode: AddressMode::Wrap,
            mip_lod_bias: bias.value(),
            max_anisotropy: 2,
        })?;
        Ok([point, anisotropic])
    }

    fn for_bias(&self, bias: MipBias) -> &[Arc<dyn Sampler>; 2] {
        match bias {
            MipBias::None => &self.none,
            MipBias::MinusOne => &self.minus_one,
            MipBias::MinusOneAndHalf => &self.minus_one_and_half,
        }
    }
}

/// Draws the lit scene or the stress test into the intermediate target
///
/// Owns its shaders, states, samplers and the stress-test cube; borrows the
/// host's mesh, camera and stress-test texture.
pub struct SceneRenderer {
    lit: ScenePass,
    stress_test: ScenePass,
    cube_vertex_buffer: Arc<dyn Buffer>,
    cube_index_buffer: Arc<dyn Buffer>,
    constants: Arc<dyn Buffer>,
    samplers: BiasedSamplers,
    opaque: Arc<dyn BlendState>,
    depth_state: Arc<dyn DepthStencilState>,
    cull_back: Arc<dyn RasterizerState>,
    transforms: Vec<glam::Mat4>,
    mesh: Arc<dyn SceneMesh>,
    camera: Arc<dyn CameraView>,
    stress_texture: Arc<dyn ShaderResourceView>,
}

impl SceneRenderer {
    pub fn new(
        device: &dyn GraphicsDevice,
        shaders: &ShaderLibrary,
        mesh: Arc<dyn SceneMesh>,
        camera: Arc<dyn CameraView>,
        stress_texture: Arc<dyn ShaderResourceView>,
    ) -> Result<Self> {
        let lit = ScenePass::new(
            device,
            shaders,
            &ShaderAsset::SCENE_VS,
            &ShaderAsset::SCENE_PS,
            &ShaderAsset::SCENE_PER_SAMPLE_PS,
            &mesh_vertex_layout(),
        )?;
        let stress_test = ScenePass::new(
            device,
            shaders,
            &ShaderAsset::STRESS_TEST_VS,
            &ShaderAsset::STRESS_TEST_PS,
            &ShaderAsset::STRESS_TEST_PER_SAMPLE_PS,
            &CubeVertex::layout(),
        )?;

        let vertices = cube_vertices();
        let vertex_bytes: &[u8] = bytemuck::cast_slice(&vertices);
        let cube_vertex_buffer = device.create_buffer(BufferDesc {
            label: "stress_test_cube_vertices".to_string(),
            size: vertex_bytes.len() as u64,
            usage: BufferUsage::Vertex,
            data: Some(vertex_bytes.to_vec()),
        })?;

        let index_bytes: &[u8] = bytemuck::cast_slice(&CUBE_INDICES);
        let cube_index_buffer = device.create_buffer(BufferDesc {
            label: "stress_test_cube_indices".to_string(),
            size: index_bytes.len() as u64,
            usage: BufferUsage::Index,
            data: Some(index_bytes.to_vec()),
        })?;

        let constants = device.create_buffer(BufferDesc {
            label: "scene_constants".to_string(),
            size: std::mem::size_of::<SceneConstants>() as u64,
            usage: BufferUsage::Constant,
            data: None,
        })?;

        let samplers = BiasedSamplers::new(device)?;

        let opaque = device.create_blend_state(BlendStateDesc::opaque("scene_opaque"))?;
        let depth_state = device.create_depth_stencil_state(DepthStencilStateDesc {
            label: "scene_depth".to_string(),
            depth_test_enable: true,
            depth_write_enable: true,
            depth_compare_op: CompareOp::Less,
        })?;
        let cull_back = device.create_rasterizer_state(RasterizerStateDesc {
            label: "scene_cull_back".to_string(),
            cull_back_faces: true,
            front_counter_clockwise: false,
            multisample_enable: true,
        })?;

        crate::ssaa_debug!("ssaa::SceneRenderer", "Scene resources created");

        Ok(Self {
            lit,
            stress_test,
            cube_vertex_buffer,
            cube_index_buffer,
            constants,
            samplers,
            opaque,
            depth_state,
            cull_back,
            transforms: stress_test_transforms(),
            mesh,
            camera,
            stress_texture,
        })
    }

    /// Draw `scene` into the draw surface of `targets`
    ///
    /// Binds and clears the draw and depth surfaces, then issues the scene's
    /// draws with the shaders and sampler bias of `policy`.
    pub fn draw(
        &self,
        context: &mut dyn CommandContext,
        targets: &RenderTargetSet,
        scene: SceneType,
        policy: &ModePolicy,
    ) -> Result<()> {
        let draw_view = targets.draw_view();
        let depth_view = targets.depth_view();

        context.set_render_targets(std::slice::from_ref(draw_view), Some(depth_view))?;
        context.set_blend_state(&self.opaque)?;
        context.clear_render_target(draw_view, scene.clear_color())?;
        context.clear_depth_stencil(depth_view, 1.0, 0)?;
        context.set_depth_stencil_state(&self.depth_state, 0)?;
        context.set_viewport(Viewport::full(targets.width() as f32, targets.height() as f32))?;
        context.set_rasterizer_state(&self.cull_back)?;

        context.set_samplers(ShaderStage::Fragment, 0, self.samplers.for_bias(policy.mip_bias))?;

        let view_projection = self.camera.view_projection_matrix();
        let eye = self.camera.eye_position();

        match scene {
            SceneType::Lit => {
                let constants = SceneConstants::lit(view_projection, eye);
                self.constants.update(0, constants.as_bytes())?;
                let buffers = std::slice::from_ref(&self.constants);
                context.set_constant_buffers(ShaderStage::Vertex, 0, buffers)?;
                context.set_constant_buffers(ShaderStage::Fragment, 0, buffers)?;
                self.lit.bind(context, policy.shading)?;
                self.mesh.render(context)
            }
            SceneType::StressTest => {
                self.stress_test.bind(context, policy.shading)?;
                self.draw_stress_test(context, view_projection, eye)
            }
        }
    }

    fn draw_stress_test(
        &self,
        context: &mut dyn CommandContext,
        view_projection: glam::Mat4,
        eye: glam::Vec3,
    ) -> Result<()> {
        context.set_shader_resources(ShaderStage::Fragment, 0, std::slice::from_ref(&self.stress_texture))?;
        context.set_vertex_buffer(&self.cube_vertex_buffer, std::mem::size_of::<CubeVertex>() as u32, 0)?;
        context.set_index_buffer(&self.cube_index_buffer, IndexType::U16, 0)?;
        context.set_primitive_topology(PrimitiveTopology::TriangleList)?;

        let buffers = std::slice::from_ref(&self.constants);
        context.set_constant_buffers(ShaderStage::Fragment, 0, buffers)?;

        for world in &self.transforms {
            let constants = SceneConstants::stress_test(*world, view_projection, eye);
            self.constants.update(0, constants.as_bytes())?;
            context.set_constant_buffers(ShaderStage::Vertex, 0, buffers)?;
            context.draw_indexed(CUBE_INDICES.len() as u32, 0, 0)?;
        }

        crate::ssaa_trace!("ssaa::SceneRenderer", "Issued {} stress test draws", self.transforms.len());
        Ok(())
    }
}

#[cfg(test)]
#[path = "scene_renderer_tests.rs"]
mod tests;
