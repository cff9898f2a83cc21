use crate::scene::texture::Texture;
use std::sync::Arc;

/// The four logical texture channels a mesh can carry.
///
/// Any channel may be absent; the shader falls back to vertex color for
/// diffuse, the geometric normal for the normal map, and neutral constants
/// for specular and glossiness.
#[derive(Debug, Clone, Default)]
pub struct TextureSet {
    pub diffuse: Option<Arc<Texture>>,
    pub normal: Option<Arc<Texture>>,
    pub specular: Option<Arc<Texture>>,
    pub glossiness: Option<Arc<Texture>>,
}
