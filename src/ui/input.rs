use crate::scene::camera::Camera;
use minifb::{Key, MouseButton, MouseMode, Window};
use nalgebra::Vector3;
use std::f32::consts::PI;

/// Keyboard/mouse camera navigation, applied between frames.
///
/// WASD moves along the camera basis, E/Q move up/down, holding the right
/// mouse button looks around. The controller owns yaw/pitch and rebuilds
/// the camera's forward vector from them.
pub struct CameraController {
    pub speed: f32,
    pub sensitivity: f32,

    yaw: f32,
    pitch: f32,
    last_mouse_pos: Option<(f32, f32)>,
}

impl CameraController {
    pub fn new(speed: f32, sensitivity: f32, camera: &Camera) -> Self {
        // Left-handed forward from yaw/pitch: yaw 0 looks down +Z.
        let forward = camera.forward;
        let pitch = forward.y.asin();
        let yaw = forward.x.atan2(forward.z);

        Self {
            speed,
            sensitivity,
            yaw,
            pitch,
            last_mouse_pos: None,
        }
    }

    pub fn update(&mut self, window: &Window, camera: &mut Camera, dt: f32) {
        // --- Keyboard movement along the camera basis ---
        let mut move_dir = Vector3::zeros();

        if window.is_key_down(Key::W) {
            move_dir += camera.forward;
        }
        if window.is_key_down(Key::S) {
            move_dir -= camera.forward;
        }
        if window.is_key_down(Key::D) {
            move_dir += camera.right;
        }
        if window.is_key_down(Key::A) {
            move_dir -= camera.right;
        }
        if window.is_key_down(Key::E) {
            move_dir += Vector3::y();
        }
        if window.is_key_down(Key::Q) {
            move_dir -= Vector3::y();
        }

        if move_dir.norm_squared() > 1e-6 {
            camera.origin += move_dir.normalize() * self.speed * dt;
        }

        // --- Mouse look (right button held) ---
        if window.get_mouse_down(MouseButton::Right) {
            if let Some((x, y)) = window.get_mouse_pos(MouseMode::Pass) {
                if let Some((last_x, last_y)) = self.last_mouse_pos {
                    let dx = x - last_x;
                    let dy = y - last_y;

                    self.yaw += dx * self.sensitivity;
                    self.pitch -= dy * self.sensitivity;
                    // Clamp pitch to avoid flipping over the poles.
                    self.pitch = self.pitch.clamp(-PI / 2.0 + 0.01, PI / 2.0 - 0.01);

                    camera.forward = Vector3::new(
                        self.yaw.sin() * self.pitch.cos(),
                        self.pitch.sin(),
                        self.yaw.cos() * self.pitch.cos(),
                    );
                }
                self.last_mouse_pos = Some((x, y));
            }
        } else {
            self.last_mouse_pos = None;
        }

        // Matrices must reflect this frame's navigation.
        camera.update_matrices();
    }
}
