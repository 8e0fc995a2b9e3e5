//! Render the spark effect to a sequence of PNG frames.

use anyhow::{Context, Result};
use clap::Parser;
use sparks::prelude::*;
use sparks::load_preset;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sparks", version, about = "Render a spark particle emitter to PNG frames")]
struct Cli {
    /// JSON emitter preset (defaults to the 200-particle spark burst)
    #[arg(long)]
    preset: Option<PathBuf>,

    /// Sprite image stamped at each particle (defaults to a procedural glow)
    #[arg(long)]
    sprite: Option<PathBuf>,

    #[arg(long, default_value_t = 640)]
    width: u32,

    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Number of frames to render
    #[arg(long, default_value_t = 60)]
    frames: u32,

    /// Frames per animation second
    #[arg(long, default_value_t = 30.0)]
    fps: f64,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Use alpha blending instead of additive
    #[arg(long)]
    alpha: bool,

    /// Output directory
    #[arg(long, short, default_value = "frames")]
    out: PathBuf,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = match &cli.preset {
        Some(path) => load_preset(path)
            .with_context(|| format!("reading preset {}", path.display()))?,
        None => EmitterConfig::sparks(),
    };

    let sprite = match &cli.sprite {
        Some(path) => Sprite::from_file(path)?,
        None => Sprite::glow(6, [255, 190, 90]),
    };

    let mut emitter = Emitter::new(config);
    if let Some(seed) = cli.seed {
        emitter = emitter.with_seed(seed);
    }
    log::info!("emitter seed {:#x}", emitter.seed());

    let blend = if cli.alpha {
        BlendMode::Alpha
    } else {
        BlendMode::Additive
    };

    let mut canvas = Canvas::new(cli.width, cli.height, Rgba([0, 0, 0, 255]));
    let mut scene = EmitterScene::new(emitter);
    let sequence = FrameSequence {
        frames: cli.frames,
        fps: cli.fps,
        blend,
    };

    let written = render_frames(&mut scene, &sprite, &mut canvas, &cli.out, &sequence)
        .with_context(|| format!("rendering frames into {}", cli.out.display()))?;

    log::info!("wrote {} frames to {}", written.len(), cli.out.display());
    Ok(())
}
