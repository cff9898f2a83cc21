use crate::core::math::transform::TransformFactory;
use crate::io::config::{Config, ObjectConfig};
use crate::io::obj_loader::load_obj;
use crate::scene::camera::Camera;
use crate::scene::context::RenderContext;
use crate::scene::light::{LightSettings, ShadingMode, ShadingOptions};
use crate::scene::material::TextureSet;
use crate::scene::mesh::Mesh;
use crate::scene::scene_object::SceneObject;
use crate::scene::texture::Texture;
use log::{info, warn};
use nalgebra::{Matrix4, Point3, Vector3};
use std::sync::Arc;

/// Builds the full render context from the parsed config.
///
/// Objects that fail to load are skipped with a warning; an empty scene
/// falls back to the built-in demo triangle so there is always something on
/// screen.
pub fn init_render_context(config: &Config) -> RenderContext {
    let aspect_ratio = config.render.width as f32 / config.render.height as f32;
    let camera = Camera::new(
        Point3::from(config.camera.position),
        config.camera.fov,
        aspect_ratio,
        config.camera.near,
        config.camera.far,
    );

    let light = LightSettings {
        direction: Vector3::from(config.light.direction).normalize(),
        intensity: config.light.intensity,
        ambient: Vector3::from(config.light.ambient),
        shininess: config.light.shininess,
    };

    let mode = ShadingMode::parse(&config.shading.mode).unwrap_or_else(|| {
        warn!(
            "Unknown shading mode '{}', using 'combined'",
            config.shading.mode
        );
        ShadingMode::Combined
    });
    let options = ShadingOptions {
        mode,
        use_normal_map: config.shading.use_normal_map,
        visualize_depth: config.shading.visualize_depth,
    };

    let mut objects = Vec::new();
    for object_config in &config.objects {
        match build_object(object_config) {
            Ok(object) => objects.push(object),
            Err(e) => warn!("Skipping object '{}': {}", object_config.path, e),
        }
    }

    if objects.is_empty() {
        info!("No scene objects loaded; using the built-in demo triangle");
        objects.push(SceneObject::new(
            Mesh::demo_triangle(),
            TextureSet::default(),
            Matrix4::identity(),
        ));
    }

    RenderContext::new(
        camera,
        light,
        options,
        objects,
        config.shading.rotate_meshes,
        config.shading.rotation_speed,
    )
}

fn build_object(config: &ObjectConfig) -> Result<SceneObject, String> {
    let mesh = load_obj(&config.path)?;

    let textures = TextureSet {
        diffuse: load_channel(&config.diffuse_texture)?,
        normal: load_channel(&config.normal_texture)?,
        specular: load_channel(&config.specular_texture)?,
        glossiness: load_channel(&config.gloss_texture)?,
    };

    let translation = TransformFactory::translation(&Vector3::from(config.position));
    let rotation = TransformFactory::rotation_z(config.rotation[2].to_radians())
        * TransformFactory::rotation_y(config.rotation[1].to_radians())
        * TransformFactory::rotation_x(config.rotation[0].to_radians());
    let scaling = TransformFactory::scaling(&Vector3::from(config.scale));

    Ok(SceneObject::new(
        mesh,
        textures,
        translation * rotation * scaling,
    ))
}

fn load_channel(path: &Option<String>) -> Result<Option<Arc<Texture>>, String> {
    match path {
        Some(p) => Ok(Some(Arc::new(Texture::load(p)?))),
        None => Ok(None),
    }
}
