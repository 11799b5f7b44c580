use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use spherecast::logging::init_logging;
use spherecast::ppm::PpmFile;
use spherecast::render::{self, RenderSettings};
use spherecast::scene::{Scene, SPHERES};

const MAX_THREADS: i64 = 16;

/// Cast one ray per pixel into a field of random spheres and write the result as PPM
#[derive(Parser, Debug)]
#[command(
    version,
    after_help = "For example, 'spherecast 8 result.ppm' renders with 8 worker threads."
)]
struct Args {
    /// 0: use every available core, 1~16: use exactly that many worker threads
    #[arg(value_parser = clap::value_parser!(u8).range(0..=MAX_THREADS))]
    threads: u8,

    /// Where to write the PPM image
    output: PathBuf,

    /// Seed for scene generation; omit for a different scene every run
    #[arg(long)]
    seed: Option<u64>,

    /// Render a scene previously saved with --save-scene instead of generating one
    #[arg(long, value_name = "JSON")]
    scene: Option<PathBuf>,

    /// Save the rendered scene as JSON
    #[arg(long, value_name = "JSON")]
    save_scene: Option<PathBuf>,

    /// Log debug detail
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(if args.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info });
    run(&args)
}

fn run(args: &Args) -> Result<()> {
    // Open the output first so a bad path fails before any rendering
    let output = PpmFile::create(&args.output)
        .with_context(|| format!("Failed to open image {}", args.output.display()))?;

    // Phase 1: build the scene
    let scene = match &args.scene {
        Some(path) => Scene::load(path).with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => match args.seed {
            Some(seed) => Scene::build(SPHERES, &mut StdRng::seed_from_u64(seed)),
            None => Scene::build(SPHERES, &mut rand::thread_rng()),
        },
    };
    log::info!("Scene ready with {} spheres", scene.len());
    for (i, sphere) in scene.iter().enumerate() {
        log::debug!("sphere {:2}: {:?}", i, sphere);
    }
    if let Some(path) = &args.save_scene {
        scene.save(path).with_context(|| format!("Failed to save scene {}", path.display()))?;
    }

    // Phase 2: render every pixel
    let settings = RenderSettings::default();
    let start = Instant::now();
    let rendered = if args.threads == 0 {
        render::render(&scene, &settings)
    } else {
        let pool = render::thread_pool(args.threads as usize).context("Failed to start worker threads")?;
        render::render_in(&pool, &scene, &settings)
    };
    let image = rendered.context("Render failed")?;
    log::info!(
        "Rendered {}x{} with {} in {:.3}s",
        settings.width,
        settings.height,
        match args.threads {
            0 => "all cores".to_owned(),
            n => format!("{} threads", n),
        },
        start.elapsed().as_secs_f64()
    );

    // Phase 3: serialize
    output.write(&image)
        .with_context(|| format!("Failed to write image {}", args.output.display()))?;

    Ok(())
}
