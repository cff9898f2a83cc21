use crate::core::geometry::Fragment;
use crate::scene::light::{LightSettings, ShadingMode, ShadingOptions};
use crate::scene::material::TextureSet;
use nalgebra::{Matrix3, Vector3};
use std::f32::consts::PI;

/// Diffuse reflectance coefficient for the Lambert term.
const DIFFUSE_REFLECTANCE: f32 = 1.0;

/// Depth sub-range remapped to greyscale by the depth visualization.
const DEPTH_VIS_NEAR: f32 = 0.995;
const DEPTH_VIS_FAR: f32 = 1.0;

/// Per-pixel shading for one mesh: light configuration, mode switches and
/// the mesh's texture channels, borrowed for the duration of a frame.
pub struct FragmentShader<'a> {
    pub light: &'a LightSettings,
    pub mode: ShadingMode,
    pub use_normal_map: bool,
    pub visualize_depth: bool,
    pub textures: &'a TextureSet,
}

impl<'a> FragmentShader<'a> {
    pub fn new(light: &'a LightSettings, options: &ShadingOptions, textures: &'a TextureSet) -> Self {
        Self {
            light,
            mode: options.mode,
            use_normal_map: options.use_normal_map,
            visualize_depth: options.visualize_depth,
            textures,
        }
    }

    /// Computes the color for one fragment.
    ///
    /// Returns `None` when the surface faces away from the light; the
    /// fragment then contributes nothing and the color buffer keeps its
    /// current value.
    pub fn shade(&self, fragment: &Fragment) -> Option<Vector3<f32>> {
        if self.visualize_depth {
            return Some(Self::depth_color(fragment.depth));
        }

        let normal = self.surface_normal(fragment);
        let observed_area = normal.dot(&-self.light.direction);
        if observed_area <= 0.0 {
            return None;
        }

        let color = match self.mode {
            ShadingMode::ObservedArea => Vector3::repeat(observed_area),
            ShadingMode::Diffuse => self.diffuse(fragment) * (self.light.intensity * observed_area),
            ShadingMode::Specular => self.specular(fragment, &normal) * observed_area,
            ShadingMode::Combined => {
                let diffuse = self.diffuse(fragment) * self.light.intensity;
                let specular = self.specular(fragment, &normal);
                (diffuse + specular + self.light.ambient) * observed_area
            }
        };
        Some(color)
    }

    /// The shading normal: either the interpolated geometric normal or the
    /// normal-map sample brought into world space through the
    /// tangent/bitangent/normal basis.
    fn surface_normal(&self, fragment: &Fragment) -> Vector3<f32> {
        let geometric = fragment.normal.normalize();

        if !self.use_normal_map {
            return geometric;
        }
        let Some(map) = &self.textures.normal else {
            return geometric;
        };

        let bitangent = geometric.cross(&fragment.tangent);
        let tangent_to_world = Matrix3::from_columns(&[fragment.tangent, bitangent, geometric]);

        // Texel channels encode a direction: remap [0, 1] to [-1, 1].
        let sample = map.sample(fragment.uv.x, fragment.uv.y);
        let tangent_normal = sample * 2.0 - Vector3::repeat(1.0);

        (tangent_to_world * tangent_normal).normalize()
    }

    /// Lambertian diffuse reflectance.
    fn diffuse(&self, fragment: &Fragment) -> Vector3<f32> {
        let sample = match &self.textures.diffuse {
            Some(texture) => texture.sample(fragment.uv.x, fragment.uv.y),
            None => fragment.color,
        };
        sample * (DIFFUSE_REFLECTANCE / PI)
    }

    /// Phong specular term: the light direction mirrored about the normal,
    /// compared against the view direction, raised to the glossiness
    /// exponent.
    fn specular(&self, fragment: &Fragment, normal: &Vector3<f32>) -> Vector3<f32> {
        let incident = self.light.direction;
        let reflected = incident - normal * (2.0 * normal.dot(&incident));
        let view_dir = fragment.view_dir.normalize();
        let cos_alpha = reflected.dot(&view_dir).max(0.0);

        let exponent = match &self.textures.glossiness {
            Some(texture) => texture.sample(fragment.uv.x, fragment.uv.y).x * self.light.shininess,
            None => self.light.shininess,
        };
        let strength = match &self.textures.specular {
            Some(texture) => texture.sample(fragment.uv.x, fragment.uv.y),
            None => Vector3::repeat(1.0),
        };

        strength * cos_alpha.powf(exponent)
    }

    /// Greyscale remap of the depth buffer's tight usable sub-range.
    pub fn depth_color(depth: f32) -> Vector3<f32> {
        let remapped = ((depth - DEPTH_VIS_NEAR) / (DEPTH_VIS_FAR - DEPTH_VIS_NEAR)).clamp(0.0, 1.0);
        Vector3::repeat(remapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::scene::texture::Texture;
    use nalgebra::Vector2;
    use std::sync::Arc;

    fn fragment(normal: Vector3<f32>) -> Fragment {
        Fragment {
            color: Vector3::repeat(1.0),
            uv: Vector2::zeros(),
            normal,
            tangent: Vector3::x(),
            view_dir: Vector3::new(0.0, 0.0, -1.0),
            depth: 0.5,
        }
    }

    fn head_on_light() -> LightSettings {
        LightSettings {
            direction: Vector3::new(0.0, 0.0, 1.0),
            intensity: 1.0,
            ambient: Vector3::zeros(),
            shininess: 25.0,
        }
    }

    #[test]
    fn observed_area_mode_is_white_for_a_light_facing_surface() {
        let light = head_on_light();
        let textures = TextureSet::default();
        let shader = FragmentShader {
            light: &light,
            mode: ShadingMode::ObservedArea,
            use_normal_map: false,
            visualize_depth: false,
            textures: &textures,
        };

        let color = shader
            .shade(&fragment(Vector3::new(0.0, 0.0, -1.0)))
            .expect("lit fragment");
        assert_relative_eq!(color.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(color.y, 1.0, epsilon = 1e-6);
        assert_relative_eq!(color.z, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn back_facing_surfaces_contribute_nothing() {
        let light = head_on_light();
        let textures = TextureSet::default();
        let shader = FragmentShader {
            light: &light,
            mode: ShadingMode::ObservedArea,
            use_normal_map: false,
            visualize_depth: false,
            textures: &textures,
        };

        assert!(shader.shade(&fragment(Vector3::new(0.0, 0.0, 1.0))).is_none());
    }

    #[test]
    fn diffuse_mode_applies_the_lambert_formula() {
        let light = LightSettings {
            intensity: PI,
            ..head_on_light()
        };
        let textures = TextureSet::default();
        let shader = FragmentShader {
            light: &light,
            mode: ShadingMode::Diffuse,
            use_normal_map: false,
            visualize_depth: false,
            textures: &textures,
        };

        // observed_area = 1, intensity = pi, so color = vertex color / pi * pi.
        let color = shader
            .shade(&fragment(Vector3::new(0.0, 0.0, -1.0)))
            .expect("lit fragment");
        assert_relative_eq!(color.x, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn specular_peaks_at_mirror_alignment() {
        // Light travels +z onto a surface facing -z; the mirror reflection
        // travels back along -z, straight into the view direction.
        let light = head_on_light();
        let textures = TextureSet::default();
        let shader = FragmentShader {
            light: &light,
            mode: ShadingMode::Specular,
            use_normal_map: false,
            visualize_depth: false,
            textures: &textures,
        };

        let color = shader
            .shade(&fragment(Vector3::new(0.0, 0.0, -1.0)))
            .expect("lit fragment");
        // cos_alpha = 1 so the full strength survives the exponent.
        assert_relative_eq!(color.x, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn normal_map_reorients_the_surface_normal() {
        // A flat normal map pointing along tangent-space +z leaves the
        // geometric normal unchanged.
        let flat = Arc::new(Texture::from_texels(
            1,
            1,
            vec![Vector3::new(0.5, 0.5, 1.0)],
        ));
        let light = head_on_light();
        let textures = TextureSet {
            normal: Some(flat),
            ..TextureSet::default()
        };
        let shader = FragmentShader {
            light: &light,
            mode: ShadingMode::ObservedArea,
            use_normal_map: true,
            visualize_depth: false,
            textures: &textures,
        };

        let color = shader
            .shade(&fragment(Vector3::new(0.0, 0.0, -1.0)))
            .expect("lit fragment");
        assert_relative_eq!(color.x, 1.0, epsilon = 1e-2);
    }

    #[test]
    fn depth_visualization_bypasses_lighting() {
        let light = head_on_light();
        let textures = TextureSet::default();
        let shader = FragmentShader {
            light: &light,
            mode: ShadingMode::Combined,
            use_normal_map: false,
            visualize_depth: true,
            textures: &textures,
        };

        // Even a back-facing fragment produces a depth color.
        let mut frag = fragment(Vector3::new(0.0, 0.0, 1.0));
        frag.depth = 0.9975;
        let color = shader.shade(&frag).expect("depth color");
        assert_relative_eq!(color.x, 0.5, epsilon = 1e-3);
        assert_relative_eq!(color.x, color.y, epsilon = 1e-6);
    }
}
