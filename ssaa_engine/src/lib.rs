/*!
# SSAA Engine

Antialiasing render target manager and resolve pipeline.

Given an AA mode (MSAA, several SSAA variants, EQAA), the engine allocates the
intermediate render targets at the right resolution multiplier, sample count
and quality level, draws a scene into them with mode-appropriate shaders and
mip bias, and resolves the result onto the host's output surface, either with
a hardware multisample resolve followed by a copy blit or with a custom
rotated-grid downsample.

The engine never touches a concrete GPU API: the host implements
`GraphicsDevice` and `CommandContext` and hands them over at `init`.

## Architecture

- **Policy**: `AaMode` and `RenderTargetFormat`, mapped to a `ModePolicy` in one table
- **Targets**: `TargetAllocator` owning the current `RenderTargetSet`
- **Scene**: `SceneRenderer` drawing the lit scene or the alpha stress test
- **Resolve**: `ResolveStage`, hardware resolve plus full-screen quad blit
- **Telemetry**: `TargetCost` (render target size and memory) and `PassTimings` (GPU cost per pass)
- **Antialiaser**: the state machine the host drives
*/

// Internal modules
mod error;
pub mod log;
pub mod config;
pub mod device;
pub mod policy;
pub mod targets;
pub mod scene;
pub mod resolve;
pub mod telemetry;
pub mod antialiaser;

// Main ssaa namespace module
pub mod ssaa {
    // Error types
    pub use crate::error::{Error, Result};

    // Entry point
    pub use crate::antialiaser::{Antialiaser, HostResources};
    pub use crate::config::Config;
    pub use crate::telemetry::{
        TargetCost, PassTimings, PASS_TIMING_WINDOW, SCENE_TIMER, RESOLVE_TIMER,
    };

    // Logging sub-module (types only, macros are exported at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, set_logger, reset_logger};
    }

    // Graphics device abstraction implemented by the host
    pub mod device {
        pub use crate::device::*;
    }

    // Modes, formats and sample layouts
    pub mod policy {
        pub use crate::policy::*;
    }

    // Scene collaborators and content
    pub mod scene {
        pub use crate::scene::*;
    }

    // Render targets and blit
    pub mod targets {
        pub use crate::targets::*;
    }

    pub mod resolve {
        pub use crate::resolve::*;
    }
}

// Re-export math library at crate root
pub use glam;
