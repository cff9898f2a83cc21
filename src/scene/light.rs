use nalgebra::Vector3;

/// Which per-pixel lighting formula the shader applies.
///
/// A closed set dispatched by a single match per pixel; the first two are
/// primarily debugging aids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadingMode {
    /// The raw observed-area term replicated across RGB.
    ObservedArea,
    /// Lambertian diffuse only.
    Diffuse,
    /// Phong specular only.
    Specular,
    /// Diffuse + specular + ambient.
    Combined,
}

impl ShadingMode {
    /// Advances to the next mode, wrapping around after `Combined`.
    pub fn cycle(self) -> Self {
        match self {
            ShadingMode::ObservedArea => ShadingMode::Diffuse,
            ShadingMode::Diffuse => ShadingMode::Specular,
            ShadingMode::Specular => ShadingMode::Combined,
            ShadingMode::Combined => ShadingMode::ObservedArea,
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "observed_area" => Some(ShadingMode::ObservedArea),
            "diffuse" => Some(ShadingMode::Diffuse),
            "specular" => Some(ShadingMode::Specular),
            "combined" => Some(ShadingMode::Combined),
            _ => None,
        }
    }
}

/// Global directional light plus shading constants.
///
/// Mutated only between frames (config reload, UI); read-only while a frame
/// rasterizes.
#[derive(Debug, Clone)]
pub struct LightSettings {
    /// Unit direction the light travels (towards the scene).
    pub direction: Vector3<f32>,
    pub intensity: f32,
    pub ambient: Vector3<f32>,
    /// Multiplier applied to the glossiness-map exponent.
    pub shininess: f32,
}

impl Default for LightSettings {
    fn default() -> Self {
        Self {
            direction: Vector3::new(0.577, -0.577, 0.577),
            intensity: 7.0,
            ambient: Vector3::new(0.025, 0.025, 0.025),
            shininess: 25.0,
        }
    }
}

/// Per-frame shading switches surfaced to the UI layer.
#[derive(Debug, Clone, Copy)]
pub struct ShadingOptions {
    pub mode: ShadingMode,
    pub use_normal_map: bool,
    /// Bypasses shading and shows the remapped depth buffer instead.
    pub visualize_depth: bool,
}

impl Default for ShadingOptions {
    fn default() -> Self {
        Self {
            mode: ShadingMode::Combined,
            use_normal_map: true,
            visualize_depth: false,
        }
    }
}
