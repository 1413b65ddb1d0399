/// Render target allocator: owns the current intermediate target set

use std::sync::Arc;

use crate::error::Result;
use crate::device::{Buffer, BufferDesc, BufferUsage, GraphicsDevice};
use crate::policy::{AaMode, RenderTargetFormat};
use crate::resolve::QuadConstants;
use crate::targets::RenderTargetSet;

/// Owns the intermediate target set and the blit constant buffer
///
/// `rebuild` always releases the previous set before creating the next one,
/// so at most one set is alive at any time. After a failed rebuild the
/// allocator is empty.
pub struct TargetAllocator {
    targets: Option<RenderTargetSet>,
    quad_constants: Arc<dyn Buffer>,
}

impl TargetAllocator {
    /// Create an empty allocator and its constant buffer
    pub fn new(device: &dyn GraphicsDevice) -> Result<Self> {
        let quad_constants = device.create_buffer(BufferDesc {
            label: "quad_constants".to_string(),
            size: std::mem::size_of::<QuadConstants>() as u64,
            usage: BufferUsage::Constant,
            data: None,
        })?;

        Ok(Self {
            targets: None,
            quad_constants,
        })
    }

    /// Destroy the current set and allocate one for the given parameters
    ///
    /// An output with a zero dimension leaves the allocator empty.
    pub fn rebuild(
        &mut self,
        device: &dyn GraphicsDevice,
        output_width: u32,
        output_height: u32,
        mode: AaMode,
        format: RenderTargetFormat,
    ) -> Result<()> {
        self.targets = None;

        if output_width == 0 || output_height == 0 {
            crate::ssaa_warn!(
                "ssaa::TargetAllocator",
                "Output is {}x{}, no render targets allocated",
                output_width, output_height
            );
            return Ok(());
        }

        let targets = RenderTargetSet::create(device, output_width, output_height, mode, format)
            .map_err(|e| {
                crate::ssaa_error!(
                    "ssaa::TargetAllocator",
                    "Render targets for {} ({}) failed: {}",
                    mode.label(), format.label(), e
                );
                e
            })?;

        let constants = QuadConstants::new(targets.width(), targets.height());
        self.quad_constants.update(0, constants.as_bytes())?;

        crate::ssaa_info!(
            "ssaa::TargetAllocator",
            "Render targets {}x{} {} x{} samples",
            targets.width(), targets.height(), format.label(), targets.sample_count()
        );

        self.targets = Some(targets);
        Ok(())
    }

    /// Release the current set, if any
    pub fn release(&mut self) {
        if self.targets.take().is_some() {
            crate::ssaa_debug!("ssaa::TargetAllocator", "Render targets released");
        }
    }

    /// Current target set, `None` when empty
    pub fn targets(&self) -> Option<&RenderTargetSet> {
        self.targets.as_ref()
    }

    /// Constant buffer holding the destination size, bound during the blit
    pub fn quad_constants(&self) -> &Arc<dyn Buffer> {
        &self.quad_constants
    }
}

#[cfg(test)]
#[path = "target_allocator_tests.rs"]
mod tests;
