use nalgebra::{Matrix4, Point2, Point3, Vector3};

//=================================
// Transform Matrix Factory
//=================================

/// Factory for creating transformation matrices.
///
/// Manually implemented to keep full control over the coordinate system:
/// the pipeline is left-handed (camera looks down +Z, y up) and the
/// projection maps depth into [0, 1].
pub struct TransformFactory;

#[rustfmt::skip]
impl TransformFactory {
    /// Creates a rotation matrix around the X-axis.
    pub fn rotation_x(angle_rad: f32) -> Matrix4<f32> {
        let c = angle_rad.cos();
        let s = angle_rad.sin();
        Matrix4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, c,  -s,   0.0,
            0.0, s,   c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Creates a rotation matrix around the Y-axis.
    pub fn rotation_y(angle_rad: f32) -> Matrix4<f32> {
        let c = angle_rad.cos();
        let s = angle_rad.sin();
        Matrix4::new(
            c,   0.0, s,   0.0,
            0.0, 1.0, 0.0, 0.0,
           -s,   0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Creates a rotation matrix around the Z-axis.
    pub fn rotation_z(angle_rad: f32) -> Matrix4<f32> {
        let c = angle_rad.cos();
        let s = angle_rad.sin();
        Matrix4::new(
            c,  -s,   0.0, 0.0,
            s,   c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Creates a translation matrix.
    pub fn translation(translation: &Vector3<f32>) -> Matrix4<f32> {
        Matrix4::new(
            1.0, 0.0, 0.0, translation.x,
            0.0, 1.0, 0.0, translation.y,
            0.0, 0.0, 1.0, translation.z,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Creates a non-uniform scaling matrix.
    pub fn scaling(scale: &Vector3<f32>) -> Matrix4<f32> {
        Matrix4::new(
            scale.x, 0.0,     0.0,     0.0,
            0.0,     scale.y, 0.0,     0.0,
            0.0,     0.0,     scale.z, 0.0,
            0.0,     0.0,     0.0,     1.0,
        )
    }

    /// Creates a View matrix (Look-At, Left-Handed).
    ///
    /// Expects an orthonormal basis; transforms world space into camera
    /// space where +Z points into the screen.
    pub fn view(
        origin: &Point3<f32>,
        right: &Vector3<f32>,
        up: &Vector3<f32>,
        forward: &Vector3<f32>,
    ) -> Matrix4<f32> {
        let o = origin.coords;
        Matrix4::new(
            right.x,   right.y,   right.z,   -right.dot(&o),
            up.x,      up.y,      up.z,      -up.dot(&o),
            forward.x, forward.y, forward.z, -forward.dot(&o),
            0.0,       0.0,       0.0,       1.0,
        )
    }

    /// Creates a Perspective Projection matrix (Left-Handed).
    ///
    /// Maps the view frustum so NDC x,y land in [-1, 1] and depth in [0, 1],
    /// with clip-space w carrying the view-space depth.
    pub fn perspective(aspect_ratio: f32, fov_y_rad: f32, near: f32, far: f32) -> Matrix4<f32> {
        let f = 1.0 / (fov_y_rad / 2.0).tan();
        let range = far / (far - near);

        Matrix4::new(
            f / aspect_ratio, 0.0, 0.0,   0.0,
            0.0,              f,   0.0,   0.0,
            0.0,              0.0, range, -range * near,
            0.0,              0.0, 1.0,   0.0,
        )
    }
}

//=================================
// Viewport Mapping
//=================================

/// Converts NDC x,y to screen/pixel coordinates.
/// The Y-axis is flipped: NDC +Y is up, screen rows grow downward.
#[inline]
pub fn ndc_to_screen(ndc_x: f32, ndc_y: f32, width: f32, height: f32) -> Point2<f32> {
    Point2::new(
        (ndc_x + 1.0) * 0.5 * width,
        (1.0 - ndc_y) * 0.5 * height,
    )
}
