use crate::core::math::transform::TransformFactory;
use nalgebra::{Matrix4, Point3, Vector3};

/// First-person camera owning the view and projection matrices.
///
/// Left-handed convention: `forward` points down +Z by default, y is up.
/// An external controller mutates origin and forward between frames; the
/// pipeline only reads the cached matrices and the world-space origin.
#[derive(Debug, Clone)]
pub struct Camera {
    pub origin: Point3<f32>,
    pub forward: Vector3<f32>,
    pub up: Vector3<f32>,
    pub right: Vector3<f32>,

    /// Vertical field of view in degrees.
    pub fov_angle: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,

    view_matrix: Matrix4<f32>,
    projection_matrix: Matrix4<f32>,
}

impl Camera {
    pub fn new(origin: Point3<f32>, fov_angle: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            origin,
            forward: Vector3::z(),
            up: Vector3::y(),
            right: Vector3::x(),
            fov_angle,
            aspect_ratio,
            near,
            far,
            view_matrix: Matrix4::identity(),
            projection_matrix: Matrix4::identity(),
        };
        camera.update_matrices();
        camera
    }

    /// Rebuilds the orthonormal basis from `forward` and recomputes the
    /// cached view and projection matrices. Call once per frame after any
    /// navigation input.
    pub fn update_matrices(&mut self) {
        self.forward = self.forward.normalize();
        self.right = Vector3::y().cross(&self.forward).normalize();
        self.up = self.forward.cross(&self.right);

        self.view_matrix =
            TransformFactory::view(&self.origin, &self.right, &self.up, &self.forward);
        self.projection_matrix = TransformFactory::perspective(
            self.aspect_ratio,
            self.fov_angle.to_radians(),
            self.near,
            self.far,
        );
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        self.view_matrix
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        self.projection_matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_camera_looks_down_positive_z() {
        let camera = Camera::new(Point3::new(0.0, 0.0, -10.0), 60.0, 4.0 / 3.0, 0.1, 100.0);
        assert_relative_eq!(camera.forward.z, 1.0, epsilon = 1e-6);
        assert_relative_eq!(camera.right.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(camera.up.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn view_matrix_places_points_in_front_of_the_camera() {
        let camera = Camera::new(Point3::new(0.0, 0.0, -10.0), 60.0, 1.0, 0.1, 100.0);
        let view_pos = camera.view_matrix().transform_point(&Point3::origin());
        assert_relative_eq!(view_pos.z, 10.0, epsilon = 1e-5);
        assert_relative_eq!(view_pos.x, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn basis_stays_orthonormal_after_looking_around() {
        let mut camera = Camera::new(Point3::origin(), 60.0, 1.0, 0.1, 100.0);
        camera.forward = Vector3::new(0.4, 0.3, 0.8);
        camera.update_matrices();

        assert_relative_eq!(camera.forward.norm(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(camera.forward.dot(&camera.right), 0.0, epsilon = 1e-5);
        assert_relative_eq!(camera.forward.dot(&camera.up), 0.0, epsilon = 1e-5);
        assert_relative_eq!(camera.right.dot(&camera.up), 0.0, epsilon = 1e-5);
    }
}
