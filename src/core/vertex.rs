use crate::core::geometry::{TransformedVertex, Vertex};
use crate::core::math::transform::ndc_to_screen;
use crate::scene::camera::Camera;
use crate::scene::mesh::Mesh;
use nalgebra::{Matrix4, Vector4};

/// The vertex transformation stage.
///
/// Maps every mesh vertex through world, view and projection into screen
/// space, producing one `TransformedVertex` per input vertex in the same
/// order. Pure function of its inputs; the output is rebuilt from scratch
/// every frame because world transforms may change per frame.
pub fn transform_vertices(
    mesh: &Mesh,
    camera: &Camera,
    width: usize,
    height: usize,
) -> Vec<TransformedVertex> {
    let world = mesh.world_transform;
    let world_view_projection = camera.projection_matrix() * camera.view_matrix() * world;

    mesh.vertices
        .iter()
        .map(|v| transform_vertex(v, &world, &world_view_projection, camera, width, height))
        .collect()
}

fn transform_vertex(
    vertex: &Vertex,
    world: &Matrix4<f32>,
    world_view_projection: &Matrix4<f32>,
    camera: &Camera,
    width: usize,
    height: usize,
) -> TransformedVertex {
    let clip = world_view_projection * vertex.position.to_homogeneous();

    // Perspective divide. A vertex at or behind the camera plane produces
    // non-finite or out-of-range coordinates here; the frustum reject and
    // the [0,1] depth-range test downstream drop such triangles.
    let w = clip.w;
    let ndc_x = clip.x / w;
    let ndc_y = clip.y / w;
    let ndc_z = clip.z / w;
    let screen = ndc_to_screen(ndc_x, ndc_y, width as f32, height as f32);

    // Normals and tangents live in world space only; no perspective divide.
    // The normal is renormalized after the transform (rotation/uniform-scale
    // assumption), the tangent is left unnormalized.
    let normal_matrix = world.fixed_view::<3, 3>(0, 0);
    let normal = (normal_matrix * vertex.normal).normalize();
    let tangent = normal_matrix * vertex.tangent;

    let world_pos = world.transform_point(&vertex.position);
    let view_dir = (camera.origin - world_pos).normalize();

    TransformedVertex {
        position: Vector4::new(screen.x, screen.y, ndc_z, w),
        color: vertex.color,
        uv: vertex.uv,
        normal,
        tangent,
        view_dir,
    }
}
