/// Render target, depth-stencil and shader-resource views

use crate::device::TextureInfo;

/// View of a texture that can be bound as a color render target
///
/// Created by `GraphicsDevice::create_render_target_view`, or supplied by the
/// host for the final output surface.
pub trait RenderTargetView: Send + Sync {
    /// Properties of the viewed texture
    fn info(&self) -> &TextureInfo;
}

/// View of a texture that can be bound as a depth/stencil attachment
pub trait DepthStencilView: Send + Sync {
    /// Properties of the viewed texture
    fn info(&self) -> &TextureInfo;
}

/// View of a texture that shaders can sample from
pub trait ShaderResourceView: Send + Sync {
    /// Properties of the viewed texture
    fn info(&self) -> &TextureInfo;
}
