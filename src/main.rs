mod cli;
mod logging;
mod render;
mod watch;

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use tilelight_lighting::{LightMap, LightingConfig};
use tilelight_world::{TileMap, WorldView};

use cli::{Args, Command, RenderArgs, SeesArgs};

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = logging::install(&args.logging) {
        eprintln!("tilelight: logging setup failed: {e}");
        return ExitCode::FAILURE;
    }
    let res = match args.command {
        Command::Render(r) => run_render(&r),
        Command::Sees(s) => run_sees(&s),
    };
    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!(target: "cli", "{e}");
            eprintln!("tilelight: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(args_config: Option<&std::path::Path>) -> Result<LightingConfig, Box<dyn Error>> {
    match args_config {
        Some(path) => {
            log::info!(target: "cli", "lighting config {}", path.display());
            LightingConfig::from_path(path)
        }
        None => Ok(LightingConfig::default()),
    }
}

fn run_render(args: &RenderArgs) -> Result<(), Box<dyn Error>> {
    render_once(args)?;
    if args.watch {
        watch::run(args, || {
            if let Err(e) = render_once(args) {
                log::warn!(target: "cli", "re-render failed: {e}");
            }
        })?;
    }
    Ok(())
}

fn render_once(args: &RenderArgs) -> Result<(), Box<dyn Error>> {
    let config = load_config(args.config.as_deref())?;
    let map = TileMap::load_scene(&args.scene)?;
    let center = args.center.unwrap_or_else(|| map.observer());
    let mut lm = LightMap::new(&config);
    lm.generate(&map, center, args.outdoor, args.observer_light);
    let out = if args.values {
        render::values(&lm)
    } else {
        render::levels(&lm, map.observer())
    };
    print!("{out}");
    Ok(())
}

fn run_sees(args: &SeesArgs) -> Result<(), Box<dyn Error>> {
    let config = load_config(args.config.as_deref())?;
    let map = TileMap::load_scene(&args.scene)?;
    let mut lm = LightMap::new(&config);
    // Occlusion only; no light needs to be emitted.
    lm.prepare(&map, args.from);
    let seen = lm.has_line_of_sight(args.from, args.to, args.range);
    println!("{} -> {}: {}", args.from, args.to, if seen { "visible" } else { "blocked" });
    Ok(())
}
