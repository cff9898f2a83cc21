use log::{error, info};
use rayon::prelude::*;
use std::path::Path;

/// Saves a packed 0x00RRGGBB buffer to an image file.
///
/// The format follows the file extension (.bmp, .png, ...). Rows are
/// converted in parallel; each output row depends on exactly one input row.
pub fn save_buffer_to_image(buffer: &[u32], width: usize, height: usize, path: &str) {
    let mut bytes = vec![0u8; width * height * 3];

    bytes
        .par_chunks_mut(width * 3)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..width {
                let packed = buffer[y * width + x];
                row[x * 3] = ((packed >> 16) & 0xFF) as u8;
                row[x * 3 + 1] = ((packed >> 8) & 0xFF) as u8;
                row[x * 3 + 2] = (packed & 0xFF) as u8;
            }
        });

    let Some(img) = image::RgbImage::from_raw(width as u32, height as u32, bytes) else {
        error!("Buffer size does not match {}x{}", width, height);
        return;
    };

    match img.save(Path::new(path)) {
        Ok(()) => info!("Saved color buffer to '{}'", path),
        Err(e) => error!("Failed to save image to '{}': {}", path, e),
    }
}
