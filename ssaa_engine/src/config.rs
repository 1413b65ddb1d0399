//! Antialiaser configuration
//!
//! Initial selections applied at `init` and restored by `deinit`, plus the
//! blit orientation for hosts whose output surface is stored bottom-up.

use crate::policy::{AaMode, RenderTargetFormat};
use crate::resolve::BlitOrientation;
use crate::scene::SceneType;

/// Configuration passed to `Antialiaser::new`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// AA mode selected by `init`
    pub initial_mode: AaMode,
    /// Render target format selected by `init`
    pub initial_format: RenderTargetFormat,
    /// Scene selected by `init`
    pub initial_scene: SceneType,
    /// Which half of the blit quad is drawn
    pub blit_orientation: BlitOrientation,
}

impl Config {
    pub fn with_mode(mut self, mode: AaMode) -> Self {
        self.initial_mode = mode;
        self
    }

    pub fn with_format(mut self, format: RenderTargetFormat) -> Self {
        self.initial_format = format;
        self
    }

    pub fn with_scene(mut self, scene: SceneType) -> Self {
        self.initial_scene = scene;
        self
    }

    pub fn with_blit_orientation(mut self, orientation: BlitOrientation) -> Self {
        self.blit_orientation = orientation;
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
