use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub light: LightConfig,
    #[serde(default)]
    pub shading: ShadingConfig,
    #[serde(default)]
    pub objects: Vec<ObjectConfig>,
}

#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
    #[serde(default = "default_background")]
    pub background_color: [f32; 3],
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background_color: default_background(),
            output: default_output(),
        }
    }
}

fn default_width() -> usize {
    800
}
fn default_height() -> usize {
    600
}
fn default_background() -> [f32; 3] {
    [0.39, 0.39, 0.39]
}
fn default_output() -> String {
    "softraster_buffer.bmp".to_string()
}

#[derive(Debug, Deserialize)]
pub struct CameraConfig {
    #[serde(default = "default_camera_position")]
    pub position: [f32; 3],
    #[serde(default = "default_fov")]
    pub fov: f32,
    #[serde(default = "default_near")]
    pub near: f32,
    #[serde(default = "default_far")]
    pub far: f32,
    #[serde(default = "default_speed")]
    pub speed: f32,
    #[serde(default = "default_sensitivity")]
    pub sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: default_camera_position(),
            fov: default_fov(),
            near: default_near(),
            far: default_far(),
            speed: default_speed(),
            sensitivity: default_sensitivity(),
        }
    }
}

fn default_camera_position() -> [f32; 3] {
    [0.0, 0.0, -10.0]
}
fn default_fov() -> f32 {
    60.0
}
fn default_near() -> f32 {
    0.1
}
fn default_far() -> f32 {
    100.0
}
fn default_speed() -> f32 {
    10.0
}
fn default_sensitivity() -> f32 {
    0.005
}

#[derive(Debug, Deserialize)]
pub struct LightConfig {
    #[serde(default = "default_light_direction")]
    pub direction: [f32; 3],
    #[serde(default = "default_intensity")]
    pub intensity: f32,
    #[serde(default = "default_ambient")]
    pub ambient: [f32; 3],
    #[serde(default = "default_shininess")]
    pub shininess: f32,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            direction: default_light_direction(),
            intensity: default_intensity(),
            ambient: default_ambient(),
            shininess: default_shininess(),
        }
    }
}

fn default_light_direction() -> [f32; 3] {
    [0.577, -0.577, 0.577]
}
fn default_intensity() -> f32 {
    7.0
}
fn default_ambient() -> [f32; 3] {
    [0.025, 0.025, 0.025]
}
fn default_shininess() -> f32 {
    25.0
}

#[derive(Debug, Deserialize)]
pub struct ShadingConfig {
    /// "observed_area", "diffuse", "specular" or "combined".
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_true")]
    pub use_normal_map: bool,
    #[serde(default = "default_false")]
    pub visualize_depth: bool,
    #[serde(default = "default_true")]
    pub rotate_meshes: bool,
    /// Radians per second.
    #[serde(default = "default_rotation_speed")]
    pub rotation_speed: f32,
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            use_normal_map: default_true(),
            visualize_depth: default_false(),
            rotate_meshes: default_true(),
            rotation_speed: default_rotation_speed(),
        }
    }
}

fn default_mode() -> String {
    "combined".to_string()
}
fn default_rotation_speed() -> f32 {
    std::f32::consts::FRAC_PI_4
}
fn default_true() -> bool {
    true
}
fn default_false() -> bool {
    false
}

#[derive(Debug, Deserialize)]
pub struct ObjectConfig {
    pub path: String,

    #[serde(default)]
    pub position: [f32; 3],
    /// Euler rotation in degrees (x, y, z).
    #[serde(default)]
    pub rotation: [f32; 3],
    #[serde(default = "default_scale")]
    pub scale: [f32; 3],

    pub diffuse_texture: Option<String>,
    pub normal_texture: Option<String>,
    pub specular_texture: Option<String>,
    pub gloss_texture: Option<String>,
}

fn default_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content =
            fs::read_to_string(path).map_err(|e| format!("Failed to read config file: {}", e))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse TOML: {}", e))
    }
}
