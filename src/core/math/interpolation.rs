use crate::core::geometry::{Fragment, TransformedVertex};
use nalgebra::{Point2, Vector2, Vector3};

const EPSILON: f32 = 1e-6;

/// Evaluates the three edge functions of a triangle at point `p`.
///
/// For edge i (vertex i -> vertex i+1) the signed 2D cross product of the
/// edge vector and the vector from the edge start to `p` is the raw
/// barycentric weight of the *opposite* vertex (i+2). `winding` (+1 or -1)
/// flips the orientation test so alternating strip triangles share one
/// inside/outside convention.
///
/// Returns `None` as soon as one weight is negative: the point is outside
/// and the remaining edges need not be evaluated.
pub fn edge_weights(
    p: Point2<f32>,
    vertices: &[Point2<f32>; 3],
    winding: f32,
) -> Option<[f32; 3]> {
    let mut weights = [0.0f32; 3];
    for i in 0..3 {
        let a = vertices[i];
        let b = vertices[(i + 1) % 3];
        let edge = b - a;
        let to_p = p - a;
        let cross = (edge.x * to_p.y - edge.y * to_p.x) * winding;
        if cross < 0.0 {
            return None;
        }
        weights[(i + 2) % 3] = cross;
    }
    Some(weights)
}

/// Normalizes raw edge-function weights so they sum to 1.
///
/// The raw sum equals twice the triangle's screen-space area; a sum near
/// zero means the triangle is degenerate (collinear vertices) and such
/// triangles contribute no pixels.
pub fn normalize_weights(weights: &[f32; 3]) -> Option<[f32; 3]> {
    let sum = weights[0] + weights[1] + weights[2];
    if sum.abs() < EPSILON {
        return None;
    }
    let inv = 1.0 / sum;
    Some([weights[0] * inv, weights[1] * inv, weights[2] * inv])
}

/// Interpolates depth across a triangle, perspective-correct.
///
/// Screen-space z is not an affine function of barycentric position after
/// projection, so the reciprocal is interpolated and inverted:
/// z = 1 / (w0/z0 + w1/z1 + w2/z2).
///
/// Returns `None` when a vertex depth or the reciprocal sum is too close to
/// zero to invert, or when the inputs are not finite.
pub fn interpolate_depth(weights: &[f32; 3], depths: &[f32; 3]) -> Option<f32> {
    let mut reciprocal_sum = 0.0f32;
    for i in 0..3 {
        if depths[i].abs() < EPSILON {
            return None;
        }
        reciprocal_sum += weights[i] / depths[i];
    }
    if !reciprocal_sum.is_finite() || reciprocal_sum.abs() < EPSILON {
        return None;
    }
    Some(1.0 / reciprocal_sum)
}

/// Computes perspective-correct interpolation weights from normalized
/// barycentric weights and the vertices' clip-space w values.
///
/// Each attribute must be weighted by weight_i / w_i and the sum divided by
/// the total reciprocal; a plain linear blend of the raw weights is
/// geometrically wrong under perspective projection.
pub fn perspective_weights(weights: &[f32; 3], ws: &[f32; 3]) -> Option<[f32; 3]> {
    let mut corrected = [0.0f32; 3];
    let mut sum = 0.0f32;
    for i in 0..3 {
        if ws[i].abs() < EPSILON {
            return None;
        }
        corrected[i] = weights[i] / ws[i];
        sum += corrected[i];
    }
    if !sum.is_finite() || sum.abs() < EPSILON {
        return None;
    }
    let inv = 1.0 / sum;
    Some([corrected[0] * inv, corrected[1] * inv, corrected[2] * inv])
}

/// Blends the three vertices' attributes with perspective-correct weights
/// into one fragment bundle.
///
/// UV is clamped to [0, 1] after interpolation to guard against numerical
/// drift at triangle edges.
pub fn interpolate_attributes(
    vertices: &[&TransformedVertex; 3],
    weights: &[f32; 3],
    depth: f32,
) -> Fragment {
    let mut color = Vector3::zeros();
    let mut uv = Vector2::zeros();
    let mut normal = Vector3::zeros();
    let mut tangent = Vector3::zeros();
    let mut view_dir = Vector3::zeros();

    for i in 0..3 {
        let v = vertices[i];
        let w = weights[i];
        color += v.color * w;
        uv += v.uv * w;
        normal += v.normal * w;
        tangent += v.tangent * w;
        view_dir += v.view_dir * w;
    }

    Fragment {
        color,
        uv: Vector2::new(uv.x.clamp(0.0, 1.0), uv.y.clamp(0.0, 1.0)),
        normal,
        tangent,
        view_dir,
        depth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn right_triangle() -> [Point2<f32>; 3] {
        // Wound so that interior points produce non-negative weights.
        [
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 4.0),
        ]
    }

    #[test]
    fn interior_weights_are_non_negative_and_sum_to_twice_the_area() {
        let tri = right_triangle();
        let weights = edge_weights(Point2::new(1.0, 1.0), &tri, 1.0).expect("inside");
        assert!(weights.iter().all(|w| *w >= 0.0));
        // Area is 8, so the raw weights sum to 16.
        assert_relative_eq!(weights.iter().sum::<f32>(), 16.0, epsilon = 1e-4);
    }

    #[test]
    fn exterior_points_short_circuit() {
        let tri = right_triangle();
        assert!(edge_weights(Point2::new(-1.0, 1.0), &tri, 1.0).is_none());
        assert!(edge_weights(Point2::new(3.0, 3.0), &tri, 1.0).is_none());
    }

    #[test]
    fn winding_flip_preserves_classification_for_reversed_triangles() {
        // The same triangle traversed backwards is inside-out for the
        // default convention but inside again with the flipped winding,
        // as happens for odd strip triangles.
        let reversed = [
            Point2::new(0.0, 4.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 0.0),
        ];
        let p = Point2::new(1.0, 1.0);
        assert!(edge_weights(p, &reversed, 1.0).is_none());
        assert!(edge_weights(p, &reversed, -1.0).is_some());
    }

    #[test]
    fn vertex_weights_normalize_to_unit_corners() {
        let tri = right_triangle();
        // Evaluate just inside a corner; the matching weight dominates.
        let raw = edge_weights(Point2::new(0.01, 0.01), &tri, 1.0).expect("inside");
        let norm = normalize_weights(&raw).expect("non-degenerate");
        assert!(norm[0] > 0.99);
        assert_relative_eq!(norm.iter().sum::<f32>(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn degenerate_triangles_are_rejected_by_normalization() {
        assert!(normalize_weights(&[0.0, 0.0, 0.0]).is_none());
    }

    #[test]
    fn depth_interpolation_reproduces_vertex_depths() {
        let depths = [0.25, 0.5, 0.75];
        for i in 0..3 {
            let mut weights = [0.0; 3];
            weights[i] = 1.0;
            let d = interpolate_depth(&weights, &depths).expect("finite");
            assert_relative_eq!(d, depths[i], epsilon = 1e-6);
        }
    }

    #[test]
    fn depth_interpolation_uses_reciprocals_not_a_linear_blend() {
        let depths = [0.2, 0.4, 0.4];
        let weights = [0.5, 0.25, 0.25];
        let d = interpolate_depth(&weights, &depths).expect("finite");
        // 1 / (0.5/0.2 + 0.25/0.4 + 0.25/0.4) = 0.25, not the linear 0.3.
        assert_relative_eq!(d, 0.25, epsilon = 1e-6);
        assert!((d - 0.3).abs() > 0.01);
    }

    #[test]
    fn zero_depth_vertices_are_rejected() {
        assert!(interpolate_depth(&[1.0, 0.0, 0.0], &[0.0, 0.5, 0.5]).is_none());
    }

    #[test]
    fn perspective_weights_reproduce_vertices_exactly() {
        let ws = [2.0, 5.0, 9.0];
        for i in 0..3 {
            let mut weights = [0.0; 3];
            weights[i] = 1.0;
            let pw = perspective_weights(&weights, &ws).expect("finite");
            assert_relative_eq!(pw[i], 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn perspective_weights_favor_the_nearer_vertex() {
        // Mid-edge in screen space between a near (w=1) and far (w=3)
        // vertex: the correct weight pulls towards the near vertex.
        let pw = perspective_weights(&[0.5, 0.5, 0.0], &[1.0, 3.0, 1.0]).expect("finite");
        assert!(pw[0] > pw[1]);
        assert_relative_eq!(pw[0] + pw[1] + pw[2], 1.0, epsilon = 1e-5);
    }
}
