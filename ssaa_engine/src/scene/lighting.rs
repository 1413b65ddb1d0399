/// Scene lighting and the per-draw scene constant block

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};

/// Direction the sun shines in
pub const SUN_DIRECTION: Vec3 = Vec3::new(-0.5, -0.2, 0.5);
pub const SUN_COLOR: Vec4 = Vec4::new(0.3, 0.3, 0.25, 0.0);
pub const AMBIENT_COLOR: Vec4 = Vec4::new(0.02, 0.02, 0.05, 0.0);

/// Point all three spot lights aim at
pub const SPOT_LOOK_AT: Vec3 = Vec3::new(2.4, 430.0, 336.0);
pub const SPOT_POSITIONS: [Vec3; 3] = [
    Vec3::new(-386.0, 176.0, -166.0),
    Vec3::new(191.0, 55.0, -356.0),
    Vec3::new(459.0, 24.0, 187.0),
];
pub const SPOT_COLORS: [Vec4; 3] = [
    Vec4::new(0.6, 0.6, 2.0, 1.0),
    Vec4::new(1.5, 0.3, 0.3, 1.0),
    Vec4::new(0.2, 1.7, 0.2, 1.0),
];
/// Spot light range, stored in the w of the position
pub const SPOT_RADIUS: f32 = 2000.0;
/// Cosine of the spot cone angle, stored in the w of the direction
pub const SPOT_CONE_COS: f32 = 0.86;

/// Constant buffer shared by the scene vertex and pixel shaders (slot 0)
///
/// Matrices are column-major, matching glam.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct SceneConstants {
    pub world_view_projection: Mat4,
    pub world: Mat4,
    pub eye_position: Vec4,
    pub sun_direction: Vec4,
    pub sun_color: Vec4,
    pub ambient_color: Vec4,
    pub spot_position_and_radius: [Vec4; 3],
    pub spot_direction_and_angle: [Vec4; 3],
    pub spot_color: [Vec4; 3],
}

impl SceneConstants {
    /// Constants for the lit scene: identity world, sun direction negated
    /// so the pixel shader can dot it with the normal directly
    pub fn lit(view_projection: Mat4, eye: Vec3) -> Self {
        Self {
            world_view_projection: view_projection,
            world: Mat4::IDENTITY,
            sun_direction: (-SUN_DIRECTION.normalize()).extend(0.0),
            ..Self::with_lights(eye)
        }
    }

    /// Constants for one stress-test cube at `world`
    pub fn stress_test(world: Mat4, view_projection: Mat4, eye: Vec3) -> Self {
        Self {
            world_view_projection: view_projection * world,
            world,
            sun_direction: SUN_DIRECTION.normalize().extend(0.0),
            ..Self::with_lights(eye)
        }
    }

    fn with_lights(eye: Vec3) -> Self {
        let mut position_and_radius = [Vec4::ZERO; 3];
        let mut direction_and_angle = [Vec4::ZERO; 3];
        for (i, position) in SPOT_POSITIONS.iter().enumerate() {
            position_and_radius[i] = position.extend(SPOT_RADIUS);
            direction_and_angle[i] = (*position - SPOT_LOOK_AT).normalize().extend(SPOT_CONE_COS);
        }

        Self {
            world_view_projection: Mat4::IDENTITY,
            world: Mat4::IDENTITY,
            eye_position: eye.extend(1.0),
            sun_direction: Vec4::ZERO,
            sun_color: SUN_COLOR,
            ambient_color: AMBIENT_COLOR,
            spot_position_and_radius: position_and_radius,
            spot_direction_and_angle: direction_and_angle,
            spot_color: SPOT_COLORS,
        }
    }

    /// Raw bytes for a buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
#[path = "lighting_tests.rs"]
mod tests;
