/// Camera collaborator.
///
/// The antialiaser queries the camera once per frame and never moves it.
/// The host owns and drives the camera.

use std::sync::RwLock;
use glam::{Mat4, Vec3};

/// Read-only camera interface queried by the scene renderer
pub trait CameraView: Send + Sync {
    /// View matrix (world to camera).
    fn view_matrix(&self) -> Mat4;

    /// Projection matrix (camera to clip).
    fn projection_matrix(&self) -> Mat4;

    /// Eye position in world space.
    fn eye_position(&self) -> Vec3;

    /// Combined view-projection matrix (projection * view).
    fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Low-level camera. A passive data container that computes nothing.
///
/// The caller computes view and projection from whatever high-level
/// controller it runs and stores the results here.
#[derive(Debug, Clone)]
pub struct Camera {
    view_matrix: Mat4,
    projection_matrix: Mat4,
    eye_position: Vec3,
}

impl Camera {
    /// Create a new camera with the given matrices and eye position.
    pub fn new(view: Mat4, projection: Mat4, eye: Vec3) -> Self {
        Self {
            view_matrix: view,
            projection_matrix: projection,
            eye_position: eye,
        }
    }

    // ===== SETTERS =====

    /// Set the view matrix and the eye position it was built from.
    pub fn set_view(&mut self, matrix: Mat4, eye: Vec3) {
        self.view_matrix = matrix;
        self.eye_position = eye;
    }

    /// Set the projection matrix.
    pub fn set_projection(&mut self, matrix: Mat4) {
        self.projection_matrix = matrix;
    }
}

impl CameraView for Camera {
    fn view_matrix(&self) -> Mat4 {
        self.view_matrix
    }

    fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }

    fn eye_position(&self) -> Vec3 {
        self.eye_position
    }
}

// A poisoned lock still holds the last camera the host wrote.
impl<C: CameraView> CameraView for RwLock<C> {
    fn view_matrix(&self) -> Mat4 {
        self.read().unwrap_or_else(|e| e.into_inner()).view_matrix()
    }

    fn projection_matrix(&self) -> Mat4 {
        self.read().unwrap_or_else(|e| e.into_inner()).projection_matrix()
    }

    fn eye_position(&self) -> Vec3 {
        self.read().unwrap_or_else(|e| e.into_inner()).eye_position()
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
