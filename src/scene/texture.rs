use log::info;
use nalgebra::Vector3;
use std::path::Path;

/// A decoded 2D grid of RGB texels.
///
/// Sampling is nearest-neighbor by normalized UV with the texel index
/// clamped to the grid, so u = 1.0 or v = 1.0 stays in bounds.
#[derive(Debug, Clone)]
pub struct Texture {
    width: usize,
    height: usize,
    texels: Vec<Vector3<f32>>,
}

impl Texture {
    /// Decodes an image file into a texel grid.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path_ref = path.as_ref();
        let img = image::open(path_ref)
            .map_err(|e| format!("Failed to load texture {:?}: {}", path_ref, e))?
            .to_rgb8();

        let width = img.width() as usize;
        let height = img.height() as usize;
        if width == 0 || height == 0 {
            return Err(format!("Texture {:?} has zero dimension", path_ref));
        }

        let texels = img
            .pixels()
            .map(|p| {
                Vector3::new(
                    p[0] as f32 / 255.0,
                    p[1] as f32 / 255.0,
                    p[2] as f32 / 255.0,
                )
            })
            .collect();

        info!("Loaded texture: {:?} ({}x{})", path_ref, width, height);

        Ok(Self {
            width,
            height,
            texels,
        })
    }

    /// Builds a texture from raw texels; row-major, top-left origin.
    pub fn from_texels(width: usize, height: usize, texels: Vec<Vector3<f32>>) -> Self {
        assert!(width > 0 && height > 0 && texels.len() == width * height);
        Self {
            width,
            height,
            texels,
        }
    }

    /// Nearest-neighbor sample; `u`, `v` are expected pre-clamped to [0, 1].
    pub fn sample(&self, u: f32, v: f32) -> Vector3<f32> {
        let x = ((u * self.width as f32) as usize).min(self.width - 1);
        let y = ((v * self.height as f32) as usize).min(self.height - 1);
        self.texels[y * self.width + x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker2x2() -> Texture {
        Texture::from_texels(
            2,
            2,
            vec![
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
                Vector3::new(0.0, 0.0, 1.0),
                Vector3::new(1.0, 1.0, 1.0),
            ],
        )
    }

    #[test]
    fn samples_the_expected_texel() {
        let tex = checker2x2();
        assert_eq!(tex.sample(0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(tex.sample(0.75, 0.0), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(tex.sample(0.0, 0.75), Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn boundary_uv_stays_in_bounds() {
        let tex = checker2x2();
        // u = v = 1.0 must clamp to the last texel, not index out of range.
        assert_eq!(tex.sample(1.0, 1.0), Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(tex.sample(1.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
    }
}
