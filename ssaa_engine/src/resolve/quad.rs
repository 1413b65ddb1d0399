/// Full-screen quad geometry and the blit constant block

use bytemuck::{Pod, Zeroable};
use crate::device::{BufferFormat, VertexAttribute, VertexLayout};

/// Blit quad vertex: clip-space position and texture coordinate (20 bytes)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl QuadVertex {
    const fn new(x: f32, y: f32, u: f32, v: f32) -> Self {
        Self { position: [x, y, 0.5], uv: [u, v] }
    }

    /// Vertex layout matching the quad vertex shader
    pub fn layout() -> VertexLayout {
        VertexLayout {
            stride: std::mem::size_of::<QuadVertex>() as u32,
            attributes: vec![
                VertexAttribute { location: 0, format: BufferFormat::R32G32B32_SFLOAT, offset: 0 },
                VertexAttribute { location: 1, format: BufferFormat::R32G32_SFLOAT, offset: 12 },
            ],
        }
    }
}

/// Two triangle lists of six vertices each
///
/// Vertices 0..6 map the destination upright, 6..12 flip it vertically.
pub const QUAD_VERTICES: [QuadVertex; 12] = [
    QuadVertex::new(-1.0, -1.0, 0.0, 1.0),
    QuadVertex::new(-1.0, 1.0, 0.0, 0.0),
    QuadVertex::new(1.0, -1.0, 1.0, 1.0),
    QuadVertex::new(-1.0, 1.0, 0.0, 0.0),
    QuadVertex::new(1.0, 1.0, 1.0, 0.0),
    QuadVertex::new(1.0, -1.0, 1.0, 1.0),
    QuadVertex::new(-1.0, -1.0, 0.0, 0.0),
    QuadVertex::new(-1.0, 1.0, 0.0, 1.0),
    QuadVertex::new(1.0, -1.0, 1.0, 0.0),
    QuadVertex::new(-1.0, 1.0, 0.0, 1.0),
    QuadVertex::new(1.0, 1.0, 1.0, 1.0),
    QuadVertex::new(1.0, -1.0, 1.0, 0.0),
];

/// Which half of `QUAD_VERTICES` the blit draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlitOrientation {
    #[default]
    Upright,
    Flipped,
}

impl BlitOrientation {
    /// First vertex of the six-vertex draw
    pub fn first_vertex(self) -> u32 {
        match self {
            BlitOrientation::Upright => 0,
            BlitOrientation::Flipped => 6,
        }
    }
}

/// Destination surface size and its reciprocal, read by the blit shaders
/// (pixel-shader slot 1)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct QuadConstants {
    pub width: f32,
    pub height: f32,
    pub inv_width: f32,
    pub inv_height: f32,
}

impl QuadConstants {
    pub fn new(width: u32, height: u32) -> Self {
        let width = width as f32;
        let height = height as f32;
        Self {
            width,
            height,
            inv_width: 1.0 / width,
            inv_height: 1.0 / height,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
#[path = "quad_tests.rs"]
mod tests;
