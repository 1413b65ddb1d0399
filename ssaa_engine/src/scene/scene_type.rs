/// Scene selection

use glam::Vec3;
use crate::error::{Error, Result};

/// Scene drawn into the intermediate target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SceneType {
    /// Lit, textured mesh supplied by the host
    #[default]
    Lit,
    /// Grid of alpha-tested cubes
    StressTest,
}

/// Eye and look-at point for a scene's default view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPlacement {
    pub eye: Vec3,
    pub look_at: Vec3,
}

impl SceneType {
    /// Every scene, in UI order
    pub const ALL: [SceneType; 2] = [SceneType::Lit, SceneType::StressTest];

    /// Position of this scene in `ALL`
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Scene at UI index `index`
    pub fn from_index(index: u32) -> Result<SceneType> {
        SceneType::ALL
            .get(index as usize)
            .copied()
            .ok_or_else(|| Error::InvalidArgument(format!(
                "scene index {} out of range (0..{})",
                index,
                SceneType::ALL.len()
            )))
    }

    /// Label shown in the scene selector
    pub fn label(self) -> &'static str {
        match self {
            SceneType::Lit => "Typical Scene",
            SceneType::StressTest => "Alpha Stress Test",
        }
    }

    /// Color the intermediate target is cleared to
    pub fn clear_color(self) -> [f32; 4] {
        match self {
            SceneType::Lit => [0.1, 0.1, 0.2, 1.0],
            SceneType::StressTest => [0.0, 0.0, 0.0, 1.0],
        }
    }

    /// Where the host places its camera when this scene is selected
    pub fn default_camera(self) -> CameraPlacement {
        match self {
            SceneType::Lit => CameraPlacement {
                eye: Vec3::new(210.0, 134.3, -240.2),
                look_at: Vec3::new(209.5, 134.6, -239.3),
            },
            SceneType::StressTest => CameraPlacement {
                eye: Vec3::new(10.0, 3.0, 10.0),
                look_at: Vec3::new(-3.0, 4.0, 4.0),
            },
        }
    }
}

#[cfg(test)]
#[path = "scene_type_tests.rs"]
mod tests;
