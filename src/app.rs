use crate::io::config::Config;
use crate::io::image::save_buffer_to_image;
use crate::pipeline::renderer::Renderer;
use crate::scene::loader::init_render_context;
use crate::ui::input::CameraController;
use log::info;
use minifb::{Key, KeyRepeat, Window, WindowOptions};
use nalgebra::Vector3;
use std::time::Instant;

/// Runs the interactive window: renders a frame per iteration, presents it
/// and applies navigation plus the runtime shading controls.
pub fn run_gui(config: Config) {
    let width = config.render.width;
    let height = config.render.height;

    info!("Starting GUI mode ({}x{})...", width, height);
    info!(
        "Controls: WASD/E/Q=Move, RightClick=Look, F4=Depth buffer, F5=Rotation, \
         F6=Normal map, F7=Shading mode, X=Save image"
    );

    let mut window = Window::new(
        "softraster",
        width,
        height,
        WindowOptions {
            resize: false,
            ..WindowOptions::default()
        },
    )
    .unwrap_or_else(|e| panic!("{}", e));
    window.set_target_fps(60);

    let mut context = init_render_context(&config);
    let mut renderer = Renderer::new(width, height, Vector3::from(config.render.background_color));
    let mut cam_controller =
        CameraController::new(config.camera.speed, config.camera.sensitivity, &context.camera);

    let mut frame_count = 0u32;
    let mut last_fps_update = Instant::now();
    let mut last_frame_time = Instant::now();

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let now = Instant::now();
        let dt = (now - last_frame_time).as_secs_f32();
        last_frame_time = now;

        // --- Runtime controls (edge-triggered) ---
        if window.is_key_pressed(Key::F4, KeyRepeat::No) {
            context.options.visualize_depth = !context.options.visualize_depth;
            info!("Depth visualization: {}", context.options.visualize_depth);
        }
        if window.is_key_pressed(Key::F5, KeyRepeat::No) {
            context.rotate_meshes = !context.rotate_meshes;
            info!("Mesh rotation: {}", context.rotate_meshes);
        }
        if window.is_key_pressed(Key::F6, KeyRepeat::No) {
            context.options.use_normal_map = !context.options.use_normal_map;
            info!("Normal mapping: {}", context.options.use_normal_map);
        }
        if window.is_key_pressed(Key::F7, KeyRepeat::No) {
            context.options.mode = context.options.mode.cycle();
            info!("Shading mode: {:?}", context.options.mode);
        }
        if window.is_key_pressed(Key::X, KeyRepeat::No) {
            save_buffer_to_image(
                renderer.framebuffer.pixels(),
                width,
                height,
                &config.render.output,
            );
        }

        // --- Per-frame updates, then the frame itself ---
        cam_controller.update(&window, &mut context.camera, dt);
        context.advance_rotation(dt);
        renderer.render_frame(&context);

        window
            .update_with_buffer(renderer.framebuffer.pixels(), width, height)
            .unwrap();

        frame_count += 1;
        if last_fps_update.elapsed().as_secs_f32() >= 2.0 {
            window.set_title(&format!(
                "softraster - {:.1} FPS - {:?}",
                frame_count as f32 / last_fps_update.elapsed().as_secs_f32(),
                context.options.mode,
            ));
            frame_count = 0;
            last_fps_update = Instant::now();
        }
    }
}

/// Renders a single frame headless and saves it to the configured output.
pub fn run_cli(config: Config) {
    info!("Starting headless mode...");
    let context = init_render_context(&config);

    let mut renderer = Renderer::new(
        config.render.width,
        config.render.height,
        Vector3::from(config.render.background_color),
    );

    let start_time = Instant::now();
    renderer.render_frame(&context);
    info!("Frame rendered in {:.2?}", start_time.elapsed());

    save_buffer_to_image(
        renderer.framebuffer.pixels(),
        config.render.width,
        config.render.height,
        &config.render.output,
    );
}
