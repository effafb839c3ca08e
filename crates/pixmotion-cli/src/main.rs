//! Command line renderer for pixmotion scenes

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use pixmotion::config::SceneConfig;
use pixmotion::{CurveRegistry, FrameRenderer, Widget};

mod output;

#[derive(Parser, Debug)]
#[command(name = "pixmotion", version, about = "Render animated pixel scenes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a scene to an animated GIF and/or PNG frames
    Render {
        /// Scene description (JSON)
        scene: PathBuf,
        /// GIF output path, defaults to the scene path with a .gif extension
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Also write every frame as a PNG into this directory
        #[arg(long)]
        png_dir: Option<PathBuf>,
        /// Override the scene's frame delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u32>,
    },
    /// Print canvas size and frame count of a scene
    Info {
        /// Scene description (JSON)
        scene: PathBuf,
    },
}

struct LoadedScene {
    config: SceneConfig,
    root: std::sync::Arc<dyn Widget>,
    renderer: FrameRenderer,
}

fn load_scene(path: &Path) -> Result<LoadedScene> {
    let config = SceneConfig::from_path(path)
        .with_context(|| format!("failed to load scene {}", path.display()))?;
    let root = config
        .root
        .build(&CurveRegistry::new())
        .with_context(|| format!("invalid scene {}", path.display()))?;
    let renderer = FrameRenderer::new(config.width, config.height)?.with_max_frames(config.max_frames);

    Ok(LoadedScene {
        config,
        root,
        renderer,
    })
}

fn render(
    scene_path: &Path,
    output: Option<PathBuf>,
    png_dir: Option<PathBuf>,
    delay_ms: Option<u32>,
) -> Result<()> {
    let scene = load_scene(scene_path)?;
    let frames = scene.renderer.render(scene.root.as_ref())?;
    if frames.is_empty() {
        bail!("scene {} produced no frames", scene_path.display());
    }

    let delay_ms = delay_ms.unwrap_or(scene.config.delay_ms);
    info!(
        "rendered {} frames of {}x{} from {}",
        frames.len(),
        scene.config.width,
        scene.config.height,
        scene_path.display()
    );

    if let Some(dir) = &png_dir {
        output::write_png_frames(&frames, dir)?;
    }

    // Without --png-dir a GIF is always produced
    if output.is_some() || png_dir.is_none() {
        let gif_path = output.unwrap_or_else(|| scene_path.with_extension("gif"));
        output::write_gif(&frames, delay_ms, &gif_path)?;
    }

    Ok(())
}

fn describe(scene_path: &Path) -> Result<String> {
    let scene = load_scene(scene_path)?;
    let frame_count = scene.root.frame_count();
    let rendered = scene.renderer.frame_total(scene.root.as_ref());
    let seconds = f64::from(rendered) * f64::from(scene.config.delay_ms) / 1000.0;

    Ok(format!(
        "size: {}x{}\nframes: {frame_count} ({rendered} rendered)\nplayback: {seconds:.2}s at {}ms per frame",
        scene.config.width, scene.config.height, scene.config.delay_ms
    ))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Render {
            scene,
            output,
            png_dir,
            delay_ms,
        } => render(&scene, output, png_dir, delay_ms),
        Command::Info { scene } => {
            println!("{}", describe(&scene)?);
            Ok(())
        }
    }
}
