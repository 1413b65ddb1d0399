/// Shader trait, shader descriptor and shader asset loading

use std::path::{Path, PathBuf};
use std::sync::Arc;
use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use crate::device::GraphicsDevice;

/// Shader stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Fragment/Pixel shader
    Fragment,
}

/// Descriptor for creating a shader
#[derive(Debug, Clone)]
pub struct ShaderDesc<'a> {
    /// Asset name, used for logging and debugging
    pub label: &'a str,
    /// Compiled shader bytecode
    pub code: &'a [u8],
    /// Shader stage
    pub stage: ShaderStage,
    /// Entry point function name
    pub entry_point: String,
}

/// Shader resource trait
///
/// Implemented by backend-specific shader types.
/// The shader is automatically destroyed when dropped.
pub trait Shader: Send + Sync {
    /// Asset name this shader was created from
    fn label(&self) -> &str;
}

// ===== SHADER ASSETS =====

/// A compiled shader program the antialiaser loads at init time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderAsset {
    /// Asset name, resolved by a `ShaderSource`
    pub name: &'static str,
    /// Stage the program runs in
    pub stage: ShaderStage,
    /// Entry point function name
    pub entry_point: &'static str,
}

impl ShaderAsset {
    pub const SCENE_VS: Self = Self::vertex("scene_vs");
    pub const SCENE_PS: Self = Self::fragment("scene_ps");
    pub const SCENE_PER_SAMPLE_PS: Self = Self::fragment("scene_per_sample_ps");
    pub const STRESS_TEST_VS: Self = Self::vertex("stress_test_vs");
    pub const STRESS_TEST_PS: Self = Self::fragment("stress_test_ps");
    pub const STRESS_TEST_PER_SAMPLE_PS: Self = Self::fragment("stress_test_per_sample_ps");
    pub const QUAD_VS: Self = Self::vertex("quad_vs");
    pub const QUAD_COPY_PS: Self = Self::fragment("quad_copy_ps");
    pub const QUAD_ROTATED_GRID_PS: Self = Self::fragment("quad_rotated_grid_ps");

    /// Every asset loaded by `Antialiaser::init`
    pub const ALL: [ShaderAsset; 9] = [
        Self::SCENE_VS,
        Self::SCENE_PS,
        Self::SCENE_PER_SAMPLE_PS,
        Self::STRESS_TEST_VS,
        Self::STRESS_TEST_PS,
        Self::STRESS_TEST_PER_SAMPLE_PS,
        Self::QUAD_VS,
        Self::QUAD_COPY_PS,
        Self::QUAD_ROTATED_GRID_PS,
    ];

    const fn vertex(name: &'static str) -> Self {
        Self { name, stage: ShaderStage::Vertex, entry_point: "main" }
    }

    const fn fragment(name: &'static str) -> Self {
        Self { name, stage: ShaderStage::Fragment, entry_point: "main" }
    }
}

/// Supplies compiled shader bytecode by asset name
pub trait ShaderSource {
    /// Load the bytecode of `asset`
    fn load(&self, asset: &ShaderAsset) -> Result<Vec<u8>>;
}

/// Reads shader bytecode from `<directory>/<asset name>.<extension>`
#[derive(Debug, Clone)]
pub struct DirectoryShaderSource {
    directory: PathBuf,
    extension: String,
}

impl DirectoryShaderSource {
    /// Create a source reading `.spv` files from `directory`
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            extension: "spv".to_string(),
        }
    }

    /// Use a different file extension (without the leading dot)
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.to_string();
        self
    }

    /// Directory shader files are read from
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Full path of the file backing `asset`
    pub fn path_for(&self, asset: &ShaderAsset) -> PathBuf {
        self.directory.join(format!("{}.{}", asset.name, self.extension))
    }
}

impl ShaderSource for DirectoryShaderSource {
    fn load(&self, asset: &ShaderAsset) -> Result<Vec<u8>> {
        let path = self.path_for(asset);
        std::fs::read(&path).map_err(|e| {
            Error::InitializationFailed(format!(
                "shader '{}' could not be read from {}: {}",
                asset.name,
                path.display(),
                e
            ))
        })
    }
}

// ===== SHADER LIBRARY =====

/// Every shader the antialiaser uses, created once at init
pub struct ShaderLibrary {
    shaders: FxHashMap<&'static str, Arc<dyn Shader>>,
}

impl ShaderLibrary {
    /// Load and create every asset in `ShaderAsset::ALL`
    ///
    /// Any missing or rejected shader fails the whole load.
    pub fn load(device: &dyn GraphicsDevice, source: &dyn ShaderSource) -> Result<Self> {
        let mut shaders = FxHashMap::default();
        for asset in ShaderAsset::ALL.iter() {
            let code = source.load(asset)?;
            let shader = device
                .create_shader(ShaderDesc {
                    label: asset.name,
                    code: &code,
                    stage: asset.stage,
                    entry_point: asset.entry_point.to_string(),
                })
                .map_err(|e| Error::InitializationFailed(format!(
                    "shader '{}' could not be created: {}",
                    asset.name, e
                )))?;
            crate::ssaa_debug!("ssaa::ShaderLibrary", "Created shader '{}' ({} bytes)", asset.name, code.len());
            shaders.insert(asset.name, shader);
        }
        Ok(Self { shaders })
    }

    /// Shader created from `asset`
    pub fn get(&self, asset: &ShaderAsset) -> Result<Arc<dyn Shader>> {
        self.shaders
            .get(asset.name)
            .cloned()
            .ok_or_else(|| Error::InvalidResource(format!("shader '{}' is not loaded", asset.name)))
    }

    /// Number of loaded shaders
    pub fn len(&self) -> usize {
        self.shaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shaders.is_empty()
    }
}

#[cfg(test)]
#[path = "shader_tests.rs"]
mod tests;
