/// Mock graphics device for unit tests (no GPU required)
///
/// Every resource created through `MockGraphicsDevice` holds a live token;
/// dropping the last `Arc` releases it, so tests can assert exactly how many
/// resources of each kind are alive. Creation calls can be made to fail on
/// demand, and `MockCommandContext` records every command it receives.

use std::sync::{Arc, Mutex, Weak};
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::device::{
    GraphicsDevice, CommandContext, Viewport, IndexType, PrimitiveTopology,
    Texture, TextureDesc, TextureInfo, TextureFormat, TextureUsage,
    RenderTargetView, DepthStencilView, ShaderResourceView,
    Buffer, BufferDesc, Shader, ShaderDesc, ShaderStage, ShaderAsset, ShaderSource,
    Sampler, SamplerDesc, BlendState, BlendStateDesc,
    DepthStencilState, DepthStencilStateDesc, RasterizerState, RasterizerStateDesc,
    InputLayout, VertexLayout,
};

// ============================================================================
// Live resource tracking
// ============================================================================

/// Kind of resource created by the mock device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Texture,
    RenderTargetView,
    DepthStencilView,
    ShaderResourceView,
    Buffer,
    Shader,
    InputLayout,
    Sampler,
    BlendState,
    DepthStencilState,
    RasterizerState,
}

#[derive(Default)]
struct Tracker {
    live: Mutex<FxHashMap<ResourceKind, usize>>,
    created: Mutex<Vec<String>>,
    calls: Mutex<usize>,
    fail_at_call: Mutex<Option<usize>>,
}

impl Tracker {
    fn acquire(self: &Arc<Self>, kind: ResourceKind, label: &str) -> Result<LiveToken> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            *calls += 1;
            *calls
        };

        {
            let mut fail_at = self.fail_at_call.lock().unwrap();
            if *fail_at == Some(call) {
                *fail_at = None;
                return Err(Error::OutOfMemory);
            }
        }

        *self.live.lock().unwrap().entry(kind).or_insert(0) += 1;
        self.created.lock().unwrap().push(format!("{:?}:{}", kind, label));

        Ok(LiveToken { kind, tracker: Arc::clone(self) })
    }
}

/// Decrements the live count of its kind when dropped
struct LiveToken {
    kind: ResourceKind,
    tracker: Arc<Tracker>,
}

impl Drop for LiveToken {
    fn drop(&mut self) {
        if let Ok(mut live) = self.tracker.live.lock() {
            if let Some(count) = live.get_mut(&self.kind) {
                *count -= 1;
            }
        }
    }
}

// ============================================================================
// Mock resources
// ============================================================================

pub struct MockTexture {
    pub label: String,
    info: TextureInfo,
    _token: Option<LiveToken>,
}

impl Texture for MockTexture {
    fn info(&self) -> &TextureInfo {
        &self.info
    }
}

pub struct MockRenderTargetView {
    info: TextureInfo,
    _token: Option<LiveToken>,
}

impl RenderTargetView for MockRenderTargetView {
    fn info(&self) -> &TextureInfo {
        &self.info
    }
}

pub struct MockDepthStencilView {
    info: TextureInfo,
    _token: Option<LiveToken>,
}

impl DepthStencilView for MockDepthStencilView {
    fn info(&self) -> &TextureInfo {
        &self.info
    }
}

pub struct MockShaderResourceView {
    info: TextureInfo,
    _token: Option<LiveToken>,
}

impl ShaderResourceView for MockShaderResourceView {
    fn info(&self) -> &TextureInfo {
        &self.info
    }
}

pub struct MockBuffer {
    pub label: String,
    data: Mutex<Vec<u8>>,
    _token: LiveToken,
}

impl MockBuffer {
    /// Current contents of the buffer
    pub fn contents(&self) -> Vec<u8> {
        self.data.lock().unwrap().clone()
    }
}

impl Buffer for MockBuffer {
    fn update(&self, offset: u64, data: &[u8]) -> Result<()> {
        let mut contents = self.data.lock().unwrap();
        let start = offset as usize;
        let end = start + data.len();
        if end > contents.len() {
            return Err(Error::InvalidResource(format!(
                "update of {} bytes at offset {} overflows buffer '{}' ({} bytes)",
                data.len(),
                offset,
                self.label,
                contents.len()
            )));
        }
        contents[start..end].copy_from_slice(data);
        Ok(())
    }

    fn size(&self) -> u64 {
        self.data.lock().unwrap().len() as u64
    }
}

pub struct MockShader {
    label: String,
    _token: LiveToken,
}

impl Shader for MockShader {
    fn label(&self) -> &str {
        &self.label
    }
}

pub struct MockInputLayout {
    layout: VertexLayout,
    _token: LiveToken,
}

impl InputLayout for MockInputLayout {
    fn layout(&self) -> &VertexLayout {
        &self.layout
    }
}

pub struct MockSampler {
    desc: SamplerDesc,
    _token: LiveToken,
}

impl Sampler for MockSampler {
    fn desc(&self) -> &SamplerDesc {
        &self.desc
    }
}

pub struct MockState {
    label: String,
    _token: LiveToken,
}

impl BlendState for MockState {
    fn label(&self) -> &str {
        &self.label
    }
}

impl DepthStencilState for MockState {
    fn label(&self) -> &str {
        &self.label
    }
}

impl RasterizerState for MockState {
    fn label(&self) -> &str {
        &self.label
    }
}

// ============================================================================
// Mock device
// ============================================================================

pub struct MockGraphicsDevice {
    tracker: Arc<Tracker>,
    buffers: Mutex<Vec<Weak<MockBuffer>>>,
    textures: Mutex<Vec<Weak<MockTexture>>>,
    quality_levels: Mutex<u32>,
}

impl MockGraphicsDevice {
    pub fn new() -> Self {
        Self {
            tracker: Arc::new(Tracker::default()),
            buffers: Mutex::new(Vec::new()),
            textures: Mutex::new(Vec::new()),
            quality_levels: Mutex::new(1),
        }
    }

    /// Make the creation call `successes + 1` calls from now fail with `OutOfMemory` (one shot)
    pub fn fail_after(&self, successes: usize) {
        let calls = *self.tracker.calls.lock().unwrap();
        *self.tracker.fail_at_call.lock().unwrap() = Some(calls + successes + 1);
    }

    /// Quality levels reported for every multisampled format (default 1)
    pub fn set_quality_levels(&self, levels: u32) {
        *self.quality_levels.lock().unwrap() = levels;
    }

    /// Number of live resources of `kind`
    pub fn live_count(&self, kind: ResourceKind) -> usize {
        self.tracker.live.lock().unwrap().get(&kind).copied().unwrap_or(0)
    }

    /// Number of live resources of every kind
    pub fn total_live(&self) -> usize {
        self.tracker.live.lock().unwrap().values().sum()
    }

    /// Total number of creation calls made (including failed ones)
    pub fn call_count(&self) -> usize {
        *self.tracker.calls.lock().unwrap()
    }

    /// `Kind:label` of every resource ever created, in creation order
    pub fn created(&self) -> Vec<String> {
        self.tracker.created.lock().unwrap().clone()
    }

    /// Info of every live texture, in creation order
    pub fn live_textures(&self) -> Vec<(String, TextureInfo)> {
        self.textures
            .lock()
            .unwrap()
            .iter()
            .filter_map(|weak| weak.upgrade())
            .map(|texture| (texture.label.clone(), texture.info.clone()))
            .collect()
    }

    /// Contents of the most recently created live buffer labelled `label`
    pub fn buffer_contents(&self, label: &str) -> Option<Vec<u8>> {
        self.buffers
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter_map(|weak| weak.upgrade())
            .find(|buffer| buffer.label == label)
            .map(|buffer| buffer.contents())
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn create_texture(&self, desc: TextureDesc) -> Result<Arc<dyn Texture>> {
        if desc.width == 0 || desc.height == 0 || desc.sample_count == 0 {
            return Err(Error::InvalidResource(format!(
                "texture '{}' has invalid size {}x{} x{}",
                desc.label, desc.width, desc.height, desc.sample_count
            )));
        }
        let token = self.tracker.acquire(ResourceKind::Texture, &desc.label)?;
        let texture = Arc::new(MockTexture {
            label: desc.label.clone(),
            info: TextureInfo::from(&desc),
            _token: Some(token),
        });
        self.textures.lock().unwrap().push(Arc::downgrade(&texture));
        Ok(texture)
    }

    fn create_render_target_view(&self, texture: &Arc<dyn Texture>) -> Result<Arc<dyn RenderTargetView>> {
        let info = texture.info().clone();
        if !info.usage.contains(TextureUsage::RENDER_TARGET) {
            return Err(Error::InvalidResource("texture is not a render target".to_string()));
        }
        let token = self.tracker.acquire(ResourceKind::RenderTargetView, "rtv")?;
        Ok(Arc::new(MockRenderTargetView { info, _token: Some(token) }))
    }

    fn create_depth_stencil_view(&self, texture: &Arc<dyn Texture>) -> Result<Arc<dyn DepthStencilView>> {
        let info = texture.info().clone();
        if !info.usage.contains(TextureUsage::DEPTH_STENCIL) {
            return Err(Error::InvalidResource("texture is not a depth/stencil target".to_string()));
        }
        let token = self.tracker.acquire(ResourceKind::DepthStencilView, "dsv")?;
        Ok(Arc::new(MockDepthStencilView { info, _token: Some(token) }))
    }

    fn create_shader_resource_view(&self, texture: &Arc<dyn Texture>) -> Result<Arc<dyn ShaderResourceView>> {
        let info = texture.info().clone();
        if !info.usage.contains(TextureUsage::SAMPLED) {
            return Err(Error::InvalidResource("texture is not sampled".to_string()));
        }
        let token = self.tracker.acquire(ResourceKind::ShaderResourceView, "srv")?;
        Ok(Arc::new(MockShaderResourceView { info, _token: Some(token) }))
    }

    fn create_buffer(&self, desc: BufferDesc) -> Result<Arc<dyn Buffer>> {
        let mut data = vec![0u8; desc.size as usize];
        if let Some(initial) = &desc.data {
            if initial.len() > data.len() {
                return Err(Error::InvalidResource(format!(
                    "initial data of buffer '{}' exceeds its size",
                    desc.label
                )));
            }
            data[..initial.len()].copy_from_slice(initial);
        }
        let token = self.tracker.acquire(ResourceKind::Buffer, &desc.label)?;
        let buffer = Arc::new(MockBuffer {
            label: desc.label,
            data: Mutex::new(data),
            _token: token,
        });
        self.buffers.lock().unwrap().push(Arc::downgrade(&buffer));
        Ok(buffer)
    }

    fn create_shader(&self, desc: ShaderDesc) -> Result<Arc<dyn Shader>> {
        if desc.code.is_empty() {
            return Err(Error::InitializationFailed(format!("shader '{}' has no bytecode", desc.label)));
        }
        let token = self.tracker.acquire(ResourceKind::Shader, desc.label)?;
        Ok(Arc::new(MockShader { label: desc.label.to_string(), _token: token }))
    }

    fn create_input_layout(
        &self,
        layout: &VertexLayout,
        vertex_shader: &Arc<dyn Shader>,
    ) -> Result<Arc<dyn InputLayout>> {
        if !layout.is_consistent() {
            return Err(Error::InvalidResource(format!(
                "vertex layout does not match '{}'",
                vertex_shader.label()
            )));
        }
        let token = self.tracker.acquire(ResourceKind::InputLayout, vertex_shader.label())?;
        Ok(Arc::new(MockInputLayout { layout: layout.clone(), _token: token }))
    }

    fn create_sampler(&self, desc: SamplerDesc) -> Result<Arc<dyn Sampler>> {
        let token = self.tracker.acquire(ResourceKind::Sampler, &desc.label)?;
        Ok(Arc::new(MockSampler { desc, _token: token }))
    }

    fn create_blend_state(&self, desc: BlendStateDesc) -> Result<Arc<dyn BlendState>> {
        let token = self.tracker.acquire(ResourceKind::BlendState, &desc.label)?;
        Ok(Arc::new(MockState { label: desc.label, _token: token }))
    }

    fn create_depth_stencil_state(&self, desc: DepthStencilStateDesc) -> Result<Arc<dyn DepthStencilState>> {
        let token = self.tracker.acquire(ResourceKind::DepthStencilState, &desc.label)?;
        Ok(Arc::new(MockState { label: desc.label, _token: token }))
    }

    fn create_rasterizer_state(&self, desc: RasterizerStateDesc) -> Result<Arc<dyn RasterizerState>> {
        let token = self.tracker.acquire(ResourceKind::RasterizerState, &desc.label)?;
        Ok(Arc::new(MockState { label: desc.label, _token: token }))
    }

    fn multisample_quality_levels(&self, _format: TextureFormat, sample_count: u32) -> u32 {
        match sample_count {
            1 | 2 | 4 | 8 => *self.quality_levels.lock().unwrap(),
            _ => 0,
        }
    }
}

/// Untracked output surface pair standing in for the host's back buffer
pub fn mock_output(width: u32, height: u32) -> (Arc<dyn RenderTargetView>, Arc<dyn DepthStencilView>) {
    let color = TextureInfo {
        width,
        height,
        format: TextureFormat::R8G8B8A8_UNORM,
        usage: TextureUsage::RENDER_TARGET,
        sample_count: 1,
        sample_quality: 0,
    };
    let depth = TextureInfo {
        format: TextureFormat::D24_UNORM_S8_UINT,
        usage: TextureUsage::DEPTH_STENCIL,
        ..color.clone()
    };
    (
        Arc::new(MockRenderTargetView { info: color, _token: None }),
        Arc::new(MockDepthStencilView { info: depth, _token: None }),
    )
}

/// Untracked sampled texture view standing in for a host-loaded texture
pub fn mock_texture_view(width: u32, height: u32) -> Arc<dyn ShaderResourceView> {
    Arc::new(MockShaderResourceView {
        info: TextureInfo {
            width,
            height,
            format: TextureFormat::R8G8B8A8_UNORM,
            usage: TextureUsage::SAMPLED,
            sample_count: 1,
            sample_quality: 0,
        },
        _token: None,
    })
}

// ============================================================================
// Mock shader source
// ============================================================================

/// Serves a few placeholder bytes for every asset except the ones listed as missing
#[derive(Default)]
pub struct MockShaderSource {
    pub missing: Vec<&'static str>,
}

impl ShaderSource for MockShaderSource {
    fn load(&self, asset: &ShaderAsset) -> Result<Vec<u8>> {
        if self.missing.contains(&asset.name) {
            return Err(Error::InitializationFailed(format!("shader '{}' not found", asset.name)));
        }
        Ok(asset.name.as_bytes().to_vec())
    }
}

// ============================================================================
// Mock command context
// ============================================================================

/// A command received by `MockCommandContext`
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCommand {
    SetRenderTargets { color: Vec<TextureInfo>, depth: Option<TextureInfo> },
    ClearRenderTarget { info: TextureInfo, color: [f32; 4] },
    ClearDepthStencil { info: TextureInfo, depth: f32, stencil: u8 },
    SetViewport(Viewport),
    SetBlendState(String),
    SetDepthStencilState(String),
    SetRasterizerState(String),
    SetSamplers { stage: ShaderStage, first_slot: u32, samplers: Vec<SamplerDesc> },
    SetShaderResources { stage: ShaderStage, first_slot: u32, views: Vec<TextureInfo> },
    SetConstantBuffers { stage: ShaderStage, first_slot: u32, sizes: Vec<u64> },
    SetInputLayout { stride: u32 },
    SetVertexBuffer { stride: u32, offset: u64 },
    SetIndexBuffer { index_type: IndexType, offset: u64 },
    SetPrimitiveTopology(PrimitiveTopology),
    SetVertexShader(String),
    SetPixelShader(String),
    Draw { vertex_count: u32, first_vertex: u32 },
    DrawIndexed { index_count: u32, first_index: u32, vertex_offset: i32 },
    ResolveSubresource { destination: TextureInfo, source: TextureInfo, format: TextureFormat },
    BeginTimer(String),
    EndTimer,
}

#[derive(Default)]
pub struct MockCommandContext {
    pub commands: Vec<RecordedCommand>,
    running_timer: Option<String>,
    timings: FxHashMap<String, f32>,
}

impl MockCommandContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Measurement `timer_milliseconds(name)` reports from now on
    pub fn set_timing(&mut self, name: &str, milliseconds: f32) {
        self.timings.insert(name.to_string(), milliseconds);
    }

    /// Number of recorded commands matching `predicate`
    pub fn count(&self, predicate: impl Fn(&RecordedCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| predicate(c)).count()
    }

    /// Position of the first recorded command matching `predicate`
    pub fn position(&self, predicate: impl Fn(&RecordedCommand) -> bool) -> Option<usize> {
        self.commands.iter().position(predicate)
    }
}

impl CommandContext for MockCommandContext {
    fn set_render_targets(
        &mut self,
        color: &[Arc<dyn RenderTargetView>],
        depth: Option<&Arc<dyn DepthStencilView>>,
    ) -> Result<()> {
        self.commands.push(RecordedCommand::SetRenderTargets {
            color: color.iter().map(|v| v.info().clone()).collect(),
            depth: depth.map(|d| d.info().clone()),
        });
        Ok(())
    }

    fn clear_render_target(&mut self, view: &Arc<dyn RenderTargetView>, color: [f32; 4]) -> Result<()> {
        self.commands.push(RecordedCommand::ClearRenderTarget { info: view.info().clone(), color });
        Ok(())
    }

    fn clear_depth_stencil(&mut self, view: &Arc<dyn DepthStencilView>, depth: f32, stencil: u8) -> Result<()> {
        self.commands.push(RecordedCommand::ClearDepthStencil { info: view.info().clone(), depth, stencil });
        Ok(())
    }

    fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        self.commands.push(RecordedCommand::SetViewport(viewport));
        Ok(())
    }

    fn set_blend_state(&mut self, state: &Arc<dyn BlendState>) -> Result<()> {
        self.commands.push(RecordedCommand::SetBlendState(state.label().to_string()));
        Ok(())
    }

    fn set_depth_stencil_state(&mut self, state: &Arc<dyn DepthStencilState>, _stencil_ref: u32) -> Result<()> {
        self.commands.push(RecordedCommand::SetDepthStencilState(state.label().to_string()));
        Ok(())
    }

    fn set_rasterizer_state(&mut self, state: &Arc<dyn RasterizerState>) -> Result<()> {
        self.commands.push(RecordedCommand::SetRasterizerState(state.label().to_string()));
        Ok(())
    }

    fn set_samplers(&mut self, stage: ShaderStage, first_slot: u32, samplers: &[Arc<dyn Sampler>]) -> Result<()> {
        self.commands.push(RecordedCommand::SetSamplers {
            stage,
            first_slot,
            samplers: samplers.iter().map(|s| s.desc().clone()).collect(),
        });
        Ok(())
    }

    fn set_shader_resources(
        &mut self,
        stage: ShaderStage,
        first_slot: u32,
        views: &[Arc<dyn ShaderResourceView>],
    ) -> Result<()> {
        self.commands.push(RecordedCommand::SetShaderResources {
            stage,
            first_slot,
            views: views.iter().map(|v| v.info().clone()).collect(),
        });
        Ok(())
    }

    fn set_constant_buffers(&mut self, stage: ShaderStage, first_slot: u32, buffers: &[Arc<dyn Buffer>]) -> Result<()> {
        self.commands.push(RecordedCommand::SetConstantBuffers {
            stage,
            first_slot,
            sizes: buffers.iter().map(|b| b.size()).collect(),
        });
        Ok(())
    }

    fn set_input_layout(&mut self, layout: &Arc<dyn InputLayout>) -> Result<()> {
        self.commands.push(RecordedCommand::SetInputLayout { stride: layout.layout().stride });
        Ok(())
    }

    fn set_vertex_buffer(&mut self, _buffer: &Arc<dyn Buffer>, stride: u32, offset: u64) -> Result<()> {
        self.commands.push(RecordedCommand::SetVertexBuffer { stride, offset });
        Ok(())
    }

    fn set_index_buffer(&mut self, _buffer: &Arc<dyn Buffer>, index_type: IndexType, offset: u64) -> Result<()> {
        self.commands.push(RecordedCommand::SetIndexBuffer { index_type, offset });
        Ok(())
    }

    fn set_primitive_topology(&mut self, topology: PrimitiveTopology) -> Result<()> {
        self.commands.push(RecordedCommand::SetPrimitiveTopology(topology));
        Ok(())
    }

    fn set_vertex_shader(&mut self, shader: &Arc<dyn Shader>) -> Result<()> {
        self.commands.push(RecordedCommand::SetVertexShader(shader.label().to_string()));
        Ok(())
    }

    fn set_pixel_shader(&mut self, shader: &Arc<dyn Shader>) -> Result<()> {
        self.commands.push(RecordedCommand::SetPixelShader(shader.label().to_string()));
        Ok(())
    }

    fn draw(&mut self, vertex_count: u32, first_vertex: u32) -> Result<()> {
        self.commands.push(RecordedCommand::Draw { vertex_count, first_vertex });
        Ok(())
    }

    fn draw_indexed(&mut self, index_count: u32, first_index: u32, vertex_offset: i32) -> Result<()> {
        self.commands.push(RecordedCommand::DrawIndexed { index_count, first_index, vertex_offset });
        Ok(())
    }

    fn resolve_subresource(
        &mut self,
        destination: &Arc<dyn Texture>,
        source: &Arc<dyn Texture>,
        format: TextureFormat,
    ) -> Result<()> {
        let destination = destination.info().clone();
        let source = source.info().clone();
        if destination.width != source.width || destination.height != source.height {
            return Err(Error::InvalidResource("resolve between textures of different sizes".to_string()));
        }
        if destination.format != format || source.format != format {
            return Err(Error::InvalidResource("resolve format mismatch".to_string()));
        }
        self.commands.push(RecordedCommand::ResolveSubresource { destination, source, format });
        Ok(())
    }

    fn begin_timer(&mut self, name: &str) -> Result<()> {
        if let Some(running) = &self.running_timer {
            return Err(Error::BackendError(format!("timer {} is still running", running)));
        }
        self.running_timer = Some(name.to_string());
        self.commands.push(RecordedCommand::BeginTimer(name.to_string()));
        Ok(())
    }

    fn end_timer(&mut self) -> Result<()> {
        if self.running_timer.take().is_none() {
            return Err(Error::BackendError("no timer is running".to_string()));
        }
        self.commands.push(RecordedCommand::EndTimer);
        Ok(())
    }

    fn timer_milliseconds(&mut self, name: &str) -> Result<Option<f32>> {
        Ok(self.timings.get(name).copied())
    }
}

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
