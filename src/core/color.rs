use nalgebra::Vector3;

/// Clamps each channel to [0, 1] and packs into 0x00RRGGBB.
///
/// Shading may legally produce values above 1.0 (e.g. strong specular
/// highlights); the clamp here is mandatory so the buffer never holds an
/// unbounded channel.
pub fn pack_color(color: Vector3<f32>) -> u32 {
    let r = (color.x.clamp(0.0, 1.0) * 255.0) as u32;
    let g = (color.y.clamp(0.0, 1.0) * 255.0) as u32;
    let b = (color.z.clamp(0.0, 1.0) * 255.0) as u32;
    (r << 16) | (g << 8) | b
}

/// Unpacks a 0x00RRGGBB value back into channel floats in [0, 1].
pub fn unpack_color(packed: u32) -> Vector3<f32> {
    Vector3::new(
        ((packed >> 16) & 0xFF) as f32 / 255.0,
        ((packed >> 8) & 0xFF) as f32 / 255.0,
        (packed & 0xFF) as f32 / 255.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_and_unpacks_primary_colors() {
        assert_eq!(pack_color(Vector3::new(1.0, 0.0, 0.0)), 0x00FF0000);
        assert_eq!(pack_color(Vector3::new(0.0, 1.0, 0.0)), 0x0000FF00);
        assert_eq!(pack_color(Vector3::new(0.0, 0.0, 1.0)), 0x000000FF);

        let grey = unpack_color(pack_color(Vector3::repeat(0.5)));
        assert!((grey.x - 0.5).abs() < 0.01);
    }

    #[test]
    fn out_of_range_channels_are_clamped() {
        assert_eq!(pack_color(Vector3::new(4.0, -1.0, 1.0)), 0x00FF00FF);
    }
}
