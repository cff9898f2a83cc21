use crate::scene::material::TextureSet;
use crate::scene::mesh::Mesh;
use nalgebra::Matrix4;

/// A mesh instance in the scene together with its texture channels.
///
/// `base_transform` is the placement from the config; the animation layer
/// composes the per-frame rotation on top of it into the mesh's world
/// transform.
pub struct SceneObject {
    pub mesh: Mesh,
    pub textures: TextureSet,
    pub base_transform: Matrix4<f32>,
}

impl SceneObject {
    pub fn new(mesh: Mesh, textures: TextureSet, base_transform: Matrix4<f32>) -> Self {
        let mut object = Self {
            mesh,
            textures,
            base_transform,
        };
        object.mesh.world_transform = base_transform;
        object
    }
}
