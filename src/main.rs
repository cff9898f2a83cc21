use clap::Parser;
use log::warn;
use softraster::app;
use softraster::io::config::Config;

#[derive(Parser, Debug)]
#[command(name = "softraster", about = "CPU software rasterizer", version)]
struct Args {
    /// Path to the TOML scene configuration.
    #[arg(long, default_value = "scene.toml")]
    config: String,

    /// Render a single frame and save it instead of opening a window.
    #[arg(long)]
    headless: bool,

    /// Override the configured output image path.
    #[arg(long)]
    output: Option<String>,

    /// Override the configured render width.
    #[arg(long)]
    width: Option<usize>,

    /// Override the configured render height.
    #[arg(long)]
    height: Option<usize>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut config = Config::load(&args.config).unwrap_or_else(|e| {
        warn!("{}; falling back to the default scene", e);
        Config::default()
    });

    if let Some(output) = args.output {
        config.render.output = output;
    }
    if let Some(width) = args.width {
        config.render.width = width;
    }
    if let Some(height) = args.height {
        config.render.height = height;
    }

    if args.headless {
        app::run_cli(config);
    } else {
        app::run_gui(config);
    }
}
