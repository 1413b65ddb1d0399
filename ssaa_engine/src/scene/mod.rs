//! Scene module - the two scene variants drawn into the intermediate target.
//!
//! The mesh and camera are host collaborators; this module only borrows them.

mod camera;
mod mesh;
mod scene_type;
mod lighting;
mod scene_renderer;

pub use camera::{Camera, CameraView};
pub use mesh::{SceneMesh, mesh_vertex_layout};
pub use scene_type::{SceneType, CameraPlacement};
pub use lighting::{
    SceneConstants, SUN_DIRECTION, SUN_COLOR, AMBIENT_COLOR,
    SPOT_LOOK_AT, SPOT_POSITIONS, SPOT_COLORS, SPOT_RADIUS, SPOT_CONE_COS,
};
pub use stress_test::{
    CubeVertex, cube_vertices, CUBE_INDICES, STRESS_TEST_DRAW_COUNT, stress_test_transforms,
};
pub use scene_renderer::SceneRenderer;
