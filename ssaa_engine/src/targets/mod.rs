//! Targets module - the intermediate surfaces the scene is drawn into.

mod render_target_set;
mod target_allocator;

pub use render_target_set::RenderTargetSet;
pub use target_allocator::TargetAllocator;
