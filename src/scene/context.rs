use crate::core::math::transform::TransformFactory;
use crate::scene::camera::Camera;
use crate::scene::light::{LightSettings, ShadingOptions};
use crate::scene::scene_object::SceneObject;

/// Holds all scene resources required for rendering a frame.
pub struct RenderContext {
    pub camera: Camera,
    pub light: LightSettings,
    pub options: ShadingOptions,
    pub objects: Vec<SceneObject>,

    pub rotate_meshes: bool,
    /// Radians per second for the mesh rotation animation.
    pub rotation_speed: f32,
    orientation: f32,
}

impl RenderContext {
    pub fn new(
        camera: Camera,
        light: LightSettings,
        options: ShadingOptions,
        objects: Vec<SceneObject>,
        rotate_meshes: bool,
        rotation_speed: f32,
    ) -> Self {
        Self {
            camera,
            light,
            options,
            objects,
            rotate_meshes,
            rotation_speed,
            orientation: 0.0,
        }
    }

    /// Advances the rotation animation and rebuilds each mesh's world
    /// transform. Runs between frames; during a frame the transforms are
    /// read-only.
    pub fn advance_rotation(&mut self, dt: f32) {
        if !self.rotate_meshes {
            return;
        }
        self.orientation += self.rotation_speed * dt;
        let rotation = TransformFactory::rotation_y(self.orientation);
        for object in &mut self.objects {
            object.mesh.world_transform = rotation * object.base_transform;
        }
    }
}
