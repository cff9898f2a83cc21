use crate::core::framebuffer::FrameBuffer;
use crate::core::geometry::TransformedVertex;
use crate::core::math::interpolation::{
    edge_weights, interpolate_attributes, interpolate_depth, normalize_weights,
    perspective_weights,
};
use crate::pipeline::shading::FragmentShader;
use nalgebra::Point2;

/// Draws triangles into the framebuffer: bounding-box scan, edge-function
/// inside test, perspective-correct depth test, then shading.
pub struct Rasterizer {
    pub width: usize,
    pub height: usize,
}

impl Rasterizer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Cheap whole-triangle visibility test in screen space: a triangle
    /// with any vertex outside the viewport is dropped entirely rather than
    /// clipped. Lossy near the edges, never wrong about fully-visible
    /// triangles. Non-finite coordinates (vertex at or behind the camera
    /// plane) also count as outside.
    pub fn is_outside_viewport(&self, vertices: &[&TransformedVertex; 3]) -> bool {
        let width = self.width as f32;
        let height = self.height as f32;
        vertices.iter().any(|v| {
            let p = v.position;
            !(p.x >= 0.0 && p.x <= width && p.y >= 0.0 && p.y <= height)
        })
    }

    /// Integer screen bounds of the triangle, grown by a one-pixel margin
    /// and clamped to the viewport. `None` when the box misses the viewport
    /// entirely.
    fn bounding_box(&self, vertices: &[Point2<f32>; 3]) -> Option<(usize, usize, usize, usize)> {
        let min_x = vertices[0].x.min(vertices[1].x).min(vertices[2].x).floor() as i64 - 1;
        let min_y = vertices[0].y.min(vertices[1].y).min(vertices[2].y).floor() as i64 - 1;
        let max_x = vertices[0].x.max(vertices[1].x).max(vertices[2].x).ceil() as i64 + 1;
        let max_y = vertices[0].y.max(vertices[1].y).max(vertices[2].y).ceil() as i64 + 1;

        if max_x < 0 || max_y < 0 || min_x >= self.width as i64 || min_y >= self.height as i64 {
            return None;
        }

        Some((
            min_x.max(0) as usize,
            min_y.max(0) as usize,
            max_x.min(self.width as i64 - 1) as usize,
            max_y.min(self.height as i64 - 1) as usize,
        ))
    }

    /// Rasterizes one triangle whose winding has already been normalized by
    /// the topology adapter.
    ///
    /// Every candidate pixel center inside the bounding box is tested
    /// against the three edge functions; survivors get a perspective-correct
    /// depth test and, on pass, perspective-correct attributes and shading.
    /// Degenerate triangles (near-zero area) contribute no pixels.
    pub fn draw_triangle(
        &self,
        framebuffer: &mut FrameBuffer,
        vertices: &[&TransformedVertex; 3],
        winding: f32,
        shader: &FragmentShader,
    ) {
        let screen = [
            Point2::new(vertices[0].position.x, vertices[0].position.y),
            Point2::new(vertices[1].position.x, vertices[1].position.y),
            Point2::new(vertices[2].position.x, vertices[2].position.y),
        ];
        let depths = [
            vertices[0].position.z,
            vertices[1].position.z,
            vertices[2].position.z,
        ];
        let ws = [
            vertices[0].position.w,
            vertices[1].position.w,
            vertices[2].position.w,
        ];

        let Some((min_x, min_y, max_x, max_y)) = self.bounding_box(&screen) else {
            return;
        };

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let pixel_center = Point2::new(x as f32 + 0.5, y as f32 + 0.5);

                let Some(raw) = edge_weights(pixel_center, &screen, winding) else {
                    continue;
                };
                let Some(weights) = normalize_weights(&raw) else {
                    continue;
                };

                let Some(depth) = interpolate_depth(&weights, &depths) else {
                    continue;
                };
                // Near/far range check; also rejects NaN from a bad divide.
                if !(0.0..=1.0).contains(&depth) {
                    continue;
                }
                if !framebuffer.depth_test_and_set(x, y, depth) {
                    continue;
                }

                let Some(corrected) = perspective_weights(&weights, &ws) else {
                    continue;
                };
                let fragment = interpolate_attributes(vertices, &corrected, depth);
                if let Some(color) = shader.shade(&fragment) {
                    framebuffer.set_pixel(x, y, color);
                }
            }
        }
    }
}
