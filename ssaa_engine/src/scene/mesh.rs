/// Mesh collaborator

use crate::error::Result;
use crate::device::{BufferFormat, CommandContext, VertexAttribute, VertexLayout};

/// Externally owned mesh drawn by the lit scene
///
/// `render` binds its own vertex/index buffers and issues its draws. Shaders,
/// input layout and constant buffers are already bound when it is called.
pub trait SceneMesh: Send + Sync {
    fn render(&self, context: &mut dyn CommandContext) -> Result<()>;
}

/// Vertex layout the lit-scene mesh must use (24 bytes)
///
/// position f32x3, packed normal, half-float uv, packed tangent.
pub fn mesh_vertex_layout() -> VertexLayout {
    VertexLayout {
        stride: 24,
        attributes: vec![
            VertexAttribute { location: 0, format: BufferFormat::R32G32B32_SFLOAT, offset: 0 },
            VertexAttribute { location: 1, format: BufferFormat::R10G10B10A2_UNORM, offset: 12 },
            VertexAttribute { location: 2, format: BufferFormat::R16G16_SFLOAT, offset: 16 },
            VertexAttribute { location: 3, format: BufferFormat::R10G10B10A2_UNORM, offset: 20 },
        ],
    }
}
