//! Antialiaser: the object the host drives
//!
//! Holds the current selection (AA mode, render target format, scene) and,
//! once initialized, every GPU resource the pipeline owns. Mode, format and
//! size changes rebuild the intermediate targets synchronously; `render`
//! draws the scene into them and blits the result onto the host's output.
//!
//! # Example
//!
//! ```ignore
//! let mut antialiaser = Antialiaser::new(Config::default());
//! antialiaser.init(host, &DirectoryShaderSource::new("shaders"))?;
//! antialiaser.set_aa_mode(AaMode::Msaa4x)?;
//! antialiaser.render(&back_buffer, &back_buffer_depth)?;
//! antialiaser.collect_timings()?;
//! println!("{}", antialiaser.describe());
//! println!("{}", antialiaser.pass_timings());
//! ```

use std::sync::{Arc, Mutex};

use crate::error::{Error, Result};
use crate::config::Config;
use crate::device::{
    GraphicsDevice, CommandContext, RenderTargetView, DepthStencilView, ShaderResourceView,
    ShaderLibrary, ShaderSource,
};
use crate::policy::{AaMode, RenderTargetFormat, SampleLayout};
use crate::scene::{CameraView, SceneMesh, SceneRenderer, SceneType};
use crate::resolve::ResolveStage;
use crate::targets::TargetAllocator;
use crate::telemetry::{PassTimings, TargetCost, RESOLVE_TIMER, SCENE_TIMER};

/// Collaborators the host hands over at `init`
///
/// The antialiaser keeps these alive until `deinit` but never mutates them.
pub struct HostResources {
    pub device: Arc<dyn GraphicsDevice>,
    pub context: Arc<Mutex<dyn CommandContext>>,
    /// Mesh drawn by the lit scene
    pub mesh: Arc<dyn SceneMesh>,
    pub camera: Arc<dyn CameraView>,
    /// Alpha-tested texture applied to the stress-test cubes
    pub stress_texture: Arc<dyn ShaderResourceView>,
    /// Output surface width at init
    pub width: u32,
    /// Output surface height at init
    pub height: u32,
}

/// Everything created by `init`
struct Pipeline {
    device: Arc<dyn GraphicsDevice>,
    context: Arc<Mutex<dyn CommandContext>>,
    scene_renderer: SceneRenderer,
    resolve_stage: ResolveStage,
    allocator: TargetAllocator,
    eqaa_supported: bool,
}

/// Antialiasing render target manager and resolve pipeline
pub struct Antialiaser {
    config: Config,
    mode: AaMode,
    format: RenderTargetFormat,
    scene: SceneType,
    width: u32,
    height: u32,
    description: String,
    timings: PassTimings,
    pipeline: Option<Pipeline>,
}

impl Antialiaser {
    /// Create an uninitialized antialiaser
    pub fn new(config: Config) -> Self {
        let mut antialiaser = Self {
            config,
            mode: config.initial_mode,
            format: config.initial_format,
            scene: config.initial_scene,
            width: 0,
            height: 0,
            description: String::new(),
            timings: PassTimings::new(),
            pipeline: None,
        };
        antialiaser.update_description();
        antialiaser
    }

    pub fn is_initialized(&self) -> bool {
        self.pipeline.is_some()
    }

    // ===== LIFECYCLE =====

    /// Load shaders, create every owned resource and allocate the targets
    ///
    /// On failure nothing is kept and the antialiaser stays uninitialized.
    pub fn init(&mut self, host: HostResources, shaders: &dyn ShaderSource) -> Result<()> {
        if self.pipeline.is_some() {
            return Err(Error::InitializationFailed("antialiaser is already initialized".to_string()));
        }

        let (width, height) = (host.width, host.height);
        let mut pipeline = Self::create_pipeline(host, shaders, &self.config)
            .map_err(|e| {
                crate::ssaa_error!("ssaa::Antialiaser", "Init failed: {}", e);
                e
            })?;

        let mut mode = self.config.initial_mode;
        if !mode.is_supported(pipeline.device.as_ref()) {
            crate::ssaa_warn!(
                "ssaa::Antialiaser",
                "{} is not supported by the device, starting with {}",
                mode.label(), AaMode::None.label()
            );
            mode = AaMode::None;
        }

        pipeline
            .allocator
            .rebuild(pipeline.device.as_ref(), width, height, mode, self.config.initial_format)?;

        self.mode = mode;
        self.format = self.config.initial_format;
        self.scene = self.config.initial_scene;
        self.width = width;
        self.height = height;
        self.pipeline = Some(pipeline);
        self.update_description();

        crate::ssaa_info!(
            "ssaa::Antialiaser",
            "Initialized: {}, {}, {}",
            self.mode.label(), self.format.label(), self.scene.label()
        );
        Ok(())
    }

    fn create_pipeline(host: HostResources, shaders: &dyn ShaderSource, config: &Config) -> Result<Pipeline> {
        let HostResources { device, context, mesh, camera, stress_texture, .. } = host;
        let library = ShaderLibrary::load(device.as_ref(), shaders)?;
        let scene_renderer = SceneRenderer::new(device.as_ref(), &library, mesh, camera, stress_texture)?;
        let resolve_stage = ResolveStage::new(device.as_ref(), &library, config.blit_orientation)?;
        let allocator = TargetAllocator::new(device.as_ref())?;
        let eqaa_supported = AaMode::eqaa_supported(device.as_ref());

        Ok(Pipeline {
            device,
            context,
            scene_renderer,
            resolve_stage,
            allocator,
            eqaa_supported,
        })
    }

    /// Release every owned resource and restore the configured selection
    pub fn deinit(&mut self) -> Result<()> {
        if self.pipeline.take().is_none() {
            return Err(Error::NotInitialized);
        }

        self.mode = self.config.initial_mode;
        self.format = self.config.initial_format;
        self.scene = self.config.initial_scene;
        self.width = 0;
        self.height = 0;
        self.timings = PassTimings::new();
        self.update_description();

        crate::ssaa_info!("ssaa::Antialiaser", "Deinitialized");
        Ok(())
    }

    /// Reallocate the targets for a new output size
    ///
    /// A zero dimension releases the targets and frames are skipped until
    /// the next non-zero resize.
    pub fn on_resize(&mut self, width: u32, height: u32) -> Result<()> {
        let pipeline = self.pipeline.as_mut().ok_or(Error::NotInitialized)?;

        self.width = width;
        self.height = height;
        let result = pipeline
            .allocator
            .rebuild(pipeline.device.as_ref(), width, height, self.mode, self.format);
        self.update_description();

        crate::ssaa_debug!("ssaa::Antialiaser", "Resized to {}x{}", width, height);
        result
    }

    // ===== SELECTION =====

    /// Switch AA mode and rebuild the targets
    ///
    /// Selecting the current mode does nothing. Modes the device cannot
    /// create are rejected without a state change.
    pub fn set_aa_mode(&mut self, mode: AaMode) -> Result<()> {
        let pipeline = self.pipeline.as_ref().ok_or(Error::NotInitialized)?;
        if mode == self.mode {
            return Ok(());
        }
        if !mode.is_supported(pipeline.device.as_ref()) {
            return Err(Error::InvalidArgument(format!(
                "{} is not supported by the device",
                mode.label()
            )));
        }

        self.apply_selection(mode, self.format)?;
        crate::ssaa_info!("ssaa::Antialiaser", "AA mode set to {}", mode.label());
        Ok(())
    }

    /// `set_aa_mode` by UI index
    pub fn set_aa_mode_index(&mut self, index: u32) -> Result<()> {
        self.set_aa_mode(AaMode::from_index(index)?)
    }

    /// Step to the next or previous AA mode and return the new mode
    ///
    /// EQAA modes are only reached when the device supports them.
    pub fn cycle_aa_mode(&mut self, forward: bool) -> Result<AaMode> {
        let pipeline = self.pipeline.as_ref().ok_or(Error::NotInitialized)?;
        let next = if forward {
            self.mode.next(pipeline.eqaa_supported)
        } else {
            self.mode.previous()
        };
        self.set_aa_mode(next)?;
        Ok(self.mode)
    }

    /// Switch render target format; always rebuilds the targets
    pub fn set_format(&mut self, format: RenderTargetFormat) -> Result<()> {
        if self.pipeline.is_none() {
            return Err(Error::NotInitialized);
        }

        self.apply_selection(self.mode, format)?;
        crate::ssaa_info!("ssaa::Antialiaser", "Render target format set to {}", format.label());
        Ok(())
    }

    /// `set_format` by UI index
    pub fn set_format_index(&mut self, index: u32) -> Result<()> {
        self.set_format(RenderTargetFormat::from_index(index)?)
    }

    /// Switch scene; targets are left alone
    pub fn set_scene(&mut self, scene: SceneType) -> Result<()> {
        if self.pipeline.is_none() {
            return Err(Error::NotInitialized);
        }

        self.scene = scene;
        self.update_description();
        crate::ssaa_info!("ssaa::Antialiaser", "Scene set to {}", scene.label());
        Ok(())
    }

    /// `set_scene` by UI index
    pub fn set_scene_index(&mut self, index: u32) -> Result<()> {
        self.set_scene(SceneType::from_index(index)?)
    }

    /// Rebuild for `mode` and `format`, falling back to the current
    /// selection if that fails
    fn apply_selection(&mut self, mode: AaMode, format: RenderTargetFormat) -> Result<()> {
        let (width, height) = (self.width, self.height);
        let (previous_mode, previous_format) = (self.mode, self.format);
        let pipeline = self.pipeline.as_mut().ok_or(Error::NotInitialized)?;
        let device = pipeline.device.as_ref();

        if let Err(e) = pipeline.allocator.rebuild(device, width, height, mode, format) {
            crate::ssaa_error!(
                "ssaa::Antialiaser",
                "Switching to {} ({}) failed: {}",
                mode.label(), format.label(), e
            );
            if let Err(restore) = pipeline
                .allocator
                .rebuild(device, width, height, previous_mode, previous_format)
            {
                crate::ssaa_error!(
                    "ssaa::Antialiaser",
                    "Restoring {} ({}) failed: {}",
                    previous_mode.label(), previous_format.label(), restore
                );
            }
            return Err(e);
        }

        self.mode = mode;
        self.format = format;
        self.update_description();
        Ok(())
    }

    // ===== FRAME =====

    /// Draw the scene into the intermediate target and resolve it onto `output`
    ///
    /// The scene pass and the resolve pass are each bracketed by a GPU timer
    /// (`SCENE_TIMER`, `RESOLVE_TIMER`).
    pub fn render(
        &self,
        output: &Arc<dyn RenderTargetView>,
        output_depth: &Arc<dyn DepthStencilView>,
    ) -> Result<()> {
        let pipeline = self.pipeline.as_ref().ok_or(Error::NotInitialized)?;

        let targets = match pipeline.allocator.targets() {
            Some(targets) => targets,
            None if self.width == 0 || self.height == 0 => {
                crate::ssaa_trace!("ssaa::Antialiaser", "Output is empty, frame skipped");
                return Ok(());
            }
            None => {
                return Err(Error::InvalidResource("render targets are not allocated".to_string()));
            }
        };

        let policy = self.mode.policy();
        let mut context = pipeline
            .context
            .lock()
            .map_err(|_| crate::ssaa_err!("ssaa::Antialiaser", "Command context lock poisoned"))?;

        // Each timer is closed even when its pass fails
        context.begin_timer(SCENE_TIMER)?;
        let scene = pipeline.scene_renderer.draw(&mut *context, targets, self.scene, &policy);
        context.end_timer()?;
        scene?;

        context.begin_timer(RESOLVE_TIMER)?;
        let resolve = pipeline.resolve_stage.resolve(
            &mut *context,
            targets,
            pipeline.allocator.quad_constants(),
            &policy,
            output,
            output_depth,
        );
        context.end_timer()?;
        resolve
    }

    /// Fold the latest scene and resolve timer results into `pass_timings`
    ///
    /// Call once per frame. A timer with no result yet counts as zero.
    pub fn collect_timings(&mut self) -> Result<()> {
        let pipeline = self.pipeline.as_ref().ok_or(Error::NotInitialized)?;
        let (scene, resolve) = {
            let mut context = pipeline
                .context
                .lock()
                .map_err(|_| crate::ssaa_err!("ssaa::Antialiaser", "Command context lock poisoned"))?;
            (
                context.timer_milliseconds(SCENE_TIMER)?.unwrap_or(0.0),
                context.timer_milliseconds(RESOLVE_TIMER)?.unwrap_or(0.0),
            )
        };

        self.timings.record(scene, resolve);
        Ok(())
    }

    // ===== QUERIES =====

    /// Render target size and cost, e.g.
    /// `Render target 1920x1080 (4 samples) (7.9Mb color, 31.6Mb Z-buffer)`
    pub fn describe(&self) -> &str {
        &self.description
    }

    /// Verbose description of the current AA mode
    pub fn aa_description(&self) -> &'static str {
        self.mode.description()
    }

    pub fn aa_mode(&self) -> AaMode {
        self.mode
    }

    pub fn format(&self) -> RenderTargetFormat {
        self.format
    }

    pub fn scene(&self) -> SceneType {
        self.scene
    }

    /// Output size the targets were last built for
    pub fn output_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Sample positions of the current mode, for the sample-pattern overlay
    pub fn sample_layout(&self) -> SampleLayout {
        self.mode.sample_layout()
    }

    /// Averaged GPU cost of the scene and resolve passes, e.g.
    /// `Cost in milliseconds( Scene = 1.42, Resolve = 0.18 )`
    pub fn pass_timings(&self) -> &PassTimings {
        &self.timings
    }

    /// Size and memory cost of the current targets
    pub fn target_cost(&self) -> TargetCost {
        TargetCost::compute(self.width, self.height, self.mode, self.format)
    }

    /// Modes the device can create, in UI order
    pub fn supported_modes(&self) -> Result<Vec<AaMode>> {
        let pipeline = self.pipeline.as_ref().ok_or(Error::NotInitialized)?;
        Ok(AaMode::ALL
            .iter()
            .copied()
            .filter(|mode| mode.is_supported(pipeline.device.as_ref()))
            .collect())
    }

    fn update_description(&mut self) {
        self.description = self.target_cost().to_string();
    }
}

#[cfg(test)]
#[path = "antialiaser_tests.rs"]
mod tests;
