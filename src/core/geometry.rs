use nalgebra::{Point3, Vector2, Vector3, Vector4};

/// A single model-space vertex as produced by the mesh loader.
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    /// Position in local object space.
    pub position: Point3<f32>,
    /// Base color, each channel in [0, 1].
    pub color: Vector3<f32>,
    /// Texture coordinates (UV).
    pub uv: Vector2<f32>,
    /// Unit normal for lighting calculations.
    pub normal: Vector3<f32>,
    /// Tangent vector for normal mapping.
    pub tangent: Vector3<f32>,
}

impl Vertex {
    pub fn new(position: Point3<f32>, color: Vector3<f32>, uv: Vector2<f32>) -> Self {
        Self {
            position,
            color,
            uv,
            normal: Vector3::new(0.0, 0.0, -1.0),
            tangent: Vector3::x(),
        }
    }
}

/// A vertex after the transformation stage, living in screen space.
///
/// `position` packs four values: x and y are pixel coordinates, z is the
/// post-divide depth in [0, 1], and w is the retained clip-space w (the
/// view-space depth) needed for perspective-correct interpolation.
#[derive(Debug, Clone, Copy)]
pub struct TransformedVertex {
    pub position: Vector4<f32>,
    pub color: Vector3<f32>,
    pub uv: Vector2<f32>,
    /// Unit normal in world space.
    pub normal: Vector3<f32>,
    /// Tangent in world space (not necessarily unit length).
    pub tangent: Vector3<f32>,
    /// Unit vector from the world-space vertex towards the camera.
    pub view_dir: Vector3<f32>,
}

/// Interpolated per-pixel attribute bundle handed to the shader.
#[derive(Debug, Clone, Copy)]
pub struct Fragment {
    pub color: Vector3<f32>,
    pub uv: Vector2<f32>,
    pub normal: Vector3<f32>,
    pub tangent: Vector3<f32>,
    pub view_dir: Vector3<f32>,
    /// Perspective-correct depth in [0, 1].
    pub depth: f32,
}

/// How a mesh's index buffer encodes triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Consecutive, non-overlapping groups of three indices.
    TriangleList,
    /// Triangle k reuses indices k, k+1, k+2; winding alternates per triangle.
    TriangleStrip,
}

/// One triangle drawn from an index buffer, with its winding normalized.
///
/// `winding` is +1.0 or -1.0 and multiplies the edge-function results so the
/// rasterizer keeps a single inside/outside convention for both topologies.
#[derive(Debug, Clone, Copy)]
pub struct TriangleIndices {
    pub indices: [usize; 3],
    pub winding: f32,
}

/// Iterator adapter turning an index buffer plus topology tag into a
/// normalized triangle stream.
pub struct Triangles<'a> {
    indices: &'a [u32],
    topology: Topology,
    cursor: usize,
}

/// Yields the triangles encoded by `indices` under the given topology.
/// Trailing indices that do not complete a triangle are ignored.
pub fn triangles(indices: &[u32], topology: Topology) -> Triangles<'_> {
    Triangles {
        indices,
        topology,
        cursor: 0,
    }
}

impl Iterator for Triangles<'_> {
    type Item = TriangleIndices;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor + 3 > self.indices.len() {
            return None;
        }

        let window = &self.indices[self.cursor..self.cursor + 3];
        let triangle = match self.topology {
            Topology::TriangleList => {
                self.cursor += 3;
                TriangleIndices {
                    indices: [window[0] as usize, window[1] as usize, window[2] as usize],
                    winding: 1.0,
                }
            }
            Topology::TriangleStrip => {
                // Every other strip triangle is wound the opposite way.
                let winding = if self.cursor % 2 == 0 { 1.0 } else { -1.0 };
                self.cursor += 1;
                TriangleIndices {
                    indices: [window[0] as usize, window[1] as usize, window[2] as usize],
                    winding,
                }
            }
        };
        Some(triangle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_topology_yields_disjoint_triples() {
        let indices = [0u32, 1, 2, 2, 1, 3];
        let tris: Vec<_> = triangles(&indices, Topology::TriangleList).collect();
        assert_eq!(tris.len(), 2);
        assert_eq!(tris[0].indices, [0, 1, 2]);
        assert_eq!(tris[1].indices, [2, 1, 3]);
        assert_eq!(tris[0].winding, 1.0);
        assert_eq!(tris[1].winding, 1.0);
    }

    #[test]
    fn list_topology_ignores_trailing_indices() {
        let indices = [0u32, 1, 2, 3, 4];
        assert_eq!(triangles(&indices, Topology::TriangleList).count(), 1);
    }

    #[test]
    fn strip_topology_slides_and_alternates_winding() {
        let indices = [0u32, 1, 2, 3, 4];
        let tris: Vec<_> = triangles(&indices, Topology::TriangleStrip).collect();
        assert_eq!(tris.len(), 3);
        assert_eq!(tris[0].indices, [0, 1, 2]);
        assert_eq!(tris[1].indices, [1, 2, 3]);
        assert_eq!(tris[2].indices, [2, 3, 4]);
        assert_eq!(tris[0].winding, 1.0);
        assert_eq!(tris[1].winding, -1.0);
        assert_eq!(tris[2].winding, 1.0);
    }

    #[test]
    fn short_buffers_yield_nothing() {
        assert_eq!(triangles(&[0u32, 1], Topology::TriangleStrip).count(), 0);
        assert_eq!(triangles(&[], Topology::TriangleList).count(), 0);
    }
}
