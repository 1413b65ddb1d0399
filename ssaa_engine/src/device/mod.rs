/// Graphics device module - GPU resource factory, command context and resource traits

pub mod graphics_device;
pub mod command_context;
pub mod texture;
pub mod view;
pub mod buffer;
pub mod shader;
pub mod state;

pub use graphics_device::*;
pub use command_context::*;
pub use texture::*;
pub use view::*;
pub use buffer::*;
pub use shader::*;
pub use state::*;

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_device;
