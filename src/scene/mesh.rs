use crate::core::geometry::{Topology, Vertex};
use nalgebra::{Matrix4, Point3, Vector2, Vector3};

/// A collection of vertices and indices representing a 3D object.
///
/// The world transform may be mutated between frames (e.g. by the rotation
/// animation); the pipeline treats it as read-only input for a given frame.
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub topology: Topology,
    pub world_transform: Matrix4<f32>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>, topology: Topology) -> Self {
        Self {
            vertices,
            indices,
            topology,
            world_transform: Matrix4::identity(),
        }
    }

    /// A colored triangle in front of the default camera, used as a
    /// fallback scene when no objects could be loaded.
    pub fn demo_triangle() -> Self {
        let positions = [
            Point3::new(0.0, 4.0, 2.0),
            Point3::new(3.0, -2.0, 2.0),
            Point3::new(-3.0, -2.0, 2.0),
        ];
        let colors = [
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        ];
        let uvs = [
            Vector2::new(0.5, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(0.0, 1.0),
        ];

        let vertices = positions
            .iter()
            .zip(colors.iter().zip(uvs.iter()))
            .map(|(p, (c, uv))| Vertex {
                position: *p,
                color: *c,
                uv: *uv,
                // Faces the default camera on -Z.
                normal: Vector3::new(0.0, 0.0, -1.0),
                tangent: Vector3::x(),
            })
            .collect();

        Self::new(vertices, vec![0, 1, 2], Topology::TriangleList)
    }
}
