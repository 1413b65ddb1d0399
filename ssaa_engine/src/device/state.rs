/// Fixed-function state objects: samplers, blend, depth/stencil, rasterizer,
/// and vertex input layouts

use crate::device::BufferFormat;

// ===== SAMPLER =====

/// Texture filtering for minification, magnification and mip selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// Nearest texel, nearest mip
    Point,
    /// Bilinear within a mip, linear between mips
    Linear,
    /// Anisotropic filtering
    Anisotropic,
}

/// Texture coordinate addressing outside [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressMode {
    /// Clamp to edge texel
    Clamp,
    /// Repeat the texture
    Wrap,
}

/// Descriptor for creating a sampler
#[derive(Debug, Clone, PartialEq)]
pub struct SamplerDesc {
    /// Debug label
    pub label: String,
    /// Filter mode
    pub filter: Filter,
    /// Addressing for U, V and W
    pub address_mode: AddressMode,
    /// Offset added to the computed mip level
    pub mip_lod_bias: f32,
    /// Maximum anisotropy (1 = off)
    pub max_anisotropy: u32,
}

/// Sampler resource trait
pub trait Sampler: Send + Sync {
    /// Get the descriptor this sampler was created from
    fn desc(&self) -> &SamplerDesc;
}

// ===== BLEND STATE =====

/// Color write mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorWriteMask {
    pub r: bool,
    pub g: bool,
    pub b: bool,
    pub a: bool,
}

impl ColorWriteMask {
    /// All channels enabled
    pub const ALL: Self = Self { r: true, g: true, b: true, a: true };
}

impl Default for ColorWriteMask {
    fn default() -> Self {
        Self::ALL
    }
}

/// Descriptor for creating a blend state
#[derive(Debug, Clone, PartialEq)]
pub struct BlendStateDesc {
    /// Debug label
    pub label: String,
    /// Enable blending
    pub blend_enable: bool,
    /// Color write mask
    pub write_mask: ColorWriteMask,
}

impl BlendStateDesc {
    /// Blending disabled, all channels written
    pub fn opaque(label: &str) -> Self {
        Self {
            label: label.to_string(),
            blend_enable: false,
            write_mask: ColorWriteMask::ALL,
        }
    }
}

/// Blend state resource trait
pub trait BlendState: Send + Sync {
    /// Debug label
    fn label(&self) -> &str;
}

// ===== DEPTH/STENCIL STATE =====

/// Comparison operator for depth tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// Pass if value < reference
    Less,
    /// Always pass
    Always,
}

/// Descriptor for creating a depth/stencil state
#[derive(Debug, Clone, PartialEq)]
pub struct DepthStencilStateDesc {
    /// Debug label
    pub label: String,
    /// Enable depth testing
    pub depth_test_enable: bool,
    /// Enable writing to depth buffer
    pub depth_write_enable: bool,
    /// Depth comparison operator
    pub depth_compare_op: CompareOp,
}

/// Depth/stencil state resource trait
pub trait DepthStencilState: Send + Sync {
    /// Debug label
    fn label(&self) -> &str;
}

// ===== RASTERIZER STATE =====

/// Descriptor for creating a rasterizer state
#[derive(Debug, Clone, PartialEq)]
pub struct RasterizerStateDesc {
    /// Debug label
    pub label: String,
    /// Discard back-facing triangles
    pub cull_back_faces: bool,
    /// Counter-clockwise vertices define the front face
    pub front_counter_clockwise: bool,
    /// Rasterize with multisample coverage when the target has samples
    pub multisample_enable: bool,
}

/// Rasterizer state resource trait
pub trait RasterizerState: Send + Sync {
    /// Debug label
    fn label(&self) -> &str;
}

// ===== VERTEX INPUT =====

/// Vertex attribute description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Attribute location in shader
    pub location: u32,
    /// Format of the attribute (data type and component count)
    pub format: BufferFormat,
    /// Offset in bytes from the start of the vertex
    pub offset: u32,
}

/// Vertex input layout for a single interleaved vertex stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexLayout {
    /// Stride in bytes between consecutive vertices
    pub stride: u32,
    /// Vertex attributes
    pub attributes: Vec<VertexAttribute>,
}

impl VertexLayout {
    /// Returns true if every attribute fits inside the stride
    pub fn is_consistent(&self) -> bool {
        self.attributes
            .iter()
            .all(|a| a.offset + a.format.size_bytes() <= self.stride)
    }
}

/// Input layout resource trait (vertex layout bound to a vertex shader signature)
pub trait InputLayout: Send + Sync {
    /// Vertex layout this input layout was created from
    fn layout(&self) -> &VertexLayout;
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
