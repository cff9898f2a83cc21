use crate::core::framebuffer::FrameBuffer;
use crate::core::geometry::triangles;
use crate::core::rasterizer::Rasterizer;
use crate::core::vertex::transform_vertices;
use crate::pipeline::shading::FragmentShader;
use crate::scene::context::RenderContext;
use nalgebra::Vector3;

/// The frame driver: owns the buffers and produces one complete frame per
/// call, recomputed from scratch.
pub struct Renderer {
    pub framebuffer: FrameBuffer,
    pub rasterizer: Rasterizer,
    pub background: Vector3<f32>,
}

impl Renderer {
    pub fn new(width: usize, height: usize, background: Vector3<f32>) -> Self {
        Self {
            framebuffer: FrameBuffer::new(width, height),
            rasterizer: Rasterizer::new(width, height),
            background,
        }
    }

    /// Renders one frame: clear both buffers, then for every mesh transform
    /// its vertices and push each visible triangle through the rasterizer.
    ///
    /// Meshes are assumed validated; an out-of-range index is a
    /// precondition violation and panics rather than producing a partial
    /// render.
    pub fn render_frame(&mut self, context: &RenderContext) {
        let width = self.framebuffer.width;
        let height = self.framebuffer.height;

        self.framebuffer.clear(self.background);

        for object in &context.objects {
            let transformed = transform_vertices(&object.mesh, &context.camera, width, height);
            let shader = FragmentShader::new(&context.light, &context.options, &object.textures);

            for triangle in triangles(&object.mesh.indices, object.mesh.topology) {
                let [i0, i1, i2] = triangle.indices;
                let vertices = [&transformed[i0], &transformed[i1], &transformed[i2]];

                if self.rasterizer.is_outside_viewport(&vertices) {
                    continue;
                }
                self.rasterizer.draw_triangle(
                    &mut self.framebuffer,
                    &vertices,
                    triangle.winding,
                    &shader,
                );
            }
        }
    }
}
