use crate::core::geometry::{Topology, Vertex, triangles};
use crate::scene::mesh::Mesh;
use log::{info, warn};
use nalgebra::{Point3, Vector2, Vector3};
use std::path::Path;

/// Loads an OBJ file and returns a unified triangle-list Mesh.
///
/// All sub-meshes are merged. OBJ carries no tangents, so they are
/// generated from the UV layout after loading.
pub fn load_obj(path: &str) -> Result<Mesh, String> {
    let path_obj = Path::new(path);
    if !path_obj.exists() {
        return Err(format!("File not found: {}", path));
    }

    info!("Loading OBJ file: {}", path);

    let load_options = tobj::LoadOptions {
        triangulate: true,
        single_index: true, // Unifies indices for Position/Normal/UV
        ..Default::default()
    };

    let (models, _materials) = tobj::load_obj(path_obj, &load_options)
        .map_err(|e| format!("Failed to load OBJ: {}", e))?;

    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    let mut index_offset = 0u32;

    for model in models {
        let mesh = &model.mesh;
        let num_vertices = mesh.positions.len() / 3;

        let has_normals = !mesh.normals.is_empty();
        let has_texcoords = !mesh.texcoords.is_empty();
        let has_colors = mesh.vertex_color.len() == mesh.positions.len();

        if !has_normals {
            warn!(
                "Mesh '{}' is missing normals. Using default (0, 1, 0).",
                model.name
            );
        }

        for i in 0..num_vertices {
            let position = Point3::new(
                mesh.positions[i * 3],
                mesh.positions[i * 3 + 1],
                mesh.positions[i * 3 + 2],
            );

            let normal = if has_normals {
                Vector3::new(
                    mesh.normals[i * 3],
                    mesh.normals[i * 3 + 1],
                    mesh.normals[i * 3 + 2],
                )
            } else {
                Vector3::y()
            };

            // OBJ UV origin is bottom-left; the sampler's is top-left.
            let uv = if has_texcoords {
                Vector2::new(mesh.texcoords[i * 2], 1.0 - mesh.texcoords[i * 2 + 1])
            } else {
                Vector2::zeros()
            };

            let color = if has_colors {
                Vector3::new(
                    mesh.vertex_color[i * 3],
                    mesh.vertex_color[i * 3 + 1],
                    mesh.vertex_color[i * 3 + 2],
                )
            } else {
                Vector3::repeat(1.0)
            };

            vertices.push(Vertex {
                position,
                color,
                uv,
                normal,
                tangent: Vector3::x(),
            });
        }

        // OBJ faces are counter-clockwise; the pipeline's front faces are
        // clockwise in screen space (left-handed convention), so swap the
        // last two indices of every face.
        for face in mesh.indices.chunks_exact(3) {
            indices.push(face[0] + index_offset);
            indices.push(face[2] + index_offset);
            indices.push(face[1] + index_offset);
        }

        index_offset += num_vertices as u32;
    }

    compute_tangents(&mut vertices, &indices);

    info!(
        "OBJ loaded. Total vertices: {}, total indices: {}",
        vertices.len(),
        indices.len()
    );

    Ok(Mesh::new(vertices, indices, Topology::TriangleList))
}

/// Generates per-vertex tangents from triangle UV deltas.
///
/// Per-triangle tangents are accumulated on each referenced vertex, then
/// orthogonalized against the vertex normal (Gram-Schmidt). Triangles with
/// a degenerate UV mapping are skipped; untouched vertices keep their
/// default tangent.
pub fn compute_tangents(vertices: &mut [Vertex], indices: &[u32]) {
    let mut accumulated = vec![Vector3::zeros(); vertices.len()];

    for triangle in triangles(indices, Topology::TriangleList) {
        let [i0, i1, i2] = triangle.indices;
        let (v0, v1, v2) = (&vertices[i0], &vertices[i1], &vertices[i2]);

        let edge1 = v1.position - v0.position;
        let edge2 = v2.position - v0.position;
        let duv1 = v1.uv - v0.uv;
        let duv2 = v2.uv - v0.uv;

        let determinant = duv1.x * duv2.y - duv2.x * duv1.y;
        if determinant.abs() < 1e-8 {
            continue;
        }

        let tangent = (edge1 * duv2.y - edge2 * duv1.y) / determinant;
        accumulated[i0] += tangent;
        accumulated[i1] += tangent;
        accumulated[i2] += tangent;
    }

    for (vertex, tangent) in vertices.iter_mut().zip(accumulated) {
        if tangent.norm_squared() < 1e-12 {
            continue;
        }
        // Orthogonalize against the normal.
        let orthogonal = tangent - vertex.normal * vertex.normal.dot(&tangent);
        if orthogonal.norm_squared() > 1e-12 {
            vertex.tangent = orthogonal.normalize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn tangents_follow_the_u_axis_of_the_uv_layout() {
        // A quad in the xy plane with u growing along +x.
        let mut vertices = vec![
            Vertex {
                position: Point3::new(0.0, 0.0, 0.0),
                color: Vector3::repeat(1.0),
                uv: Vector2::new(0.0, 1.0),
                normal: Vector3::new(0.0, 0.0, -1.0),
                tangent: Vector3::x(),
            },
            Vertex {
                position: Point3::new(1.0, 0.0, 0.0),
                color: Vector3::repeat(1.0),
                uv: Vector2::new(1.0, 1.0),
                normal: Vector3::new(0.0, 0.0, -1.0),
                tangent: Vector3::x(),
            },
            Vertex {
                position: Point3::new(0.0, 1.0, 0.0),
                color: Vector3::repeat(1.0),
                uv: Vector2::new(0.0, 0.0),
                normal: Vector3::new(0.0, 0.0, -1.0),
                tangent: Vector3::x(),
            },
            Vertex {
                position: Point3::new(1.0, 1.0, 0.0),
                color: Vector3::repeat(1.0),
                uv: Vector2::new(1.0, 0.0),
                normal: Vector3::new(0.0, 0.0, -1.0),
                tangent: Vector3::x(),
            },
        ];
        let indices = [0u32, 1, 2, 2, 1, 3];

        compute_tangents(&mut vertices, &indices);

        for vertex in &vertices {
            assert_relative_eq!(vertex.tangent.x, 1.0, epsilon = 1e-5);
            assert_relative_eq!(vertex.tangent.norm(), 1.0, epsilon = 1e-5);
            // Orthogonal to the normal.
            assert_relative_eq!(vertex.tangent.dot(&vertex.normal), 0.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn degenerate_uv_mappings_keep_the_default_tangent() {
        let mut vertices = vec![
            Vertex::new(Point3::new(0.0, 0.0, 0.0), Vector3::repeat(1.0), Vector2::zeros()),
            Vertex::new(Point3::new(1.0, 0.0, 0.0), Vector3::repeat(1.0), Vector2::zeros()),
            Vertex::new(Point3::new(0.0, 1.0, 0.0), Vector3::repeat(1.0), Vector2::zeros()),
        ];
        let indices = [0u32, 1, 2];

        compute_tangents(&mut vertices, &indices);
        for vertex in &vertices {
            assert_eq!(vertex.tangent, Vector3::x());
        }
    }

    #[test]
    fn missing_files_are_reported_not_panicked() {
        assert!(load_obj("definitely/not/here.obj").is_err());
    }
}
