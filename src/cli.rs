//! Command line option parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tilelight_geom::IVec2;

use crate::logging::LoggingArgs;

#[derive(Clone, Debug, Parser)]
#[command(name = "tilelight", version, about = "Tile light maps for 2D grid worlds")]
pub(crate) struct Args {
    #[command(flatten)]
    pub(crate) logging: LoggingArgs,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Clone, Debug, Subcommand)]
pub(crate) enum Command {
    /// Generate a light map for a scene and print it.
    Render(RenderArgs),
    /// Check line of sight between two cells of a scene.
    Sees(SeesArgs),
}

#[derive(Clone, Debug, clap::Args)]
pub(crate) struct RenderArgs {
    /// Scene file (TOML).
    pub(crate) scene: PathBuf,

    /// Lighting configuration; built-in defaults when omitted.
    #[arg(long, value_name = "FILE")]
    pub(crate) config: Option<PathBuf>,

    /// Window center; defaults to the scene's observer.
    #[arg(long, value_name = "X,Y", value_parser = parse_cell)]
    pub(crate) center: Option<IVec2>,

    /// Natural light level outdoors (0 at night or underground).
    #[arg(long, default_value_t = 0.0)]
    pub(crate) outdoor: f32,

    /// Light carried by the observer.
    #[arg(long = "observer-light", default_value_t = 0.0)]
    pub(crate) observer_light: f32,

    /// Print ambient values instead of light levels.
    #[arg(long)]
    pub(crate) values: bool,

    /// Re-render whenever the scene or config file changes.
    #[arg(long)]
    pub(crate) watch: bool,
}

#[derive(Clone, Debug, clap::Args)]
pub(crate) struct SeesArgs {
    pub(crate) scene: PathBuf,

    #[arg(value_parser = parse_cell, value_name = "X,Y")]
    pub(crate) from: IVec2,

    #[arg(value_parser = parse_cell, value_name = "X,Y")]
    pub(crate) to: IVec2,

    /// Maximum distance along either axis.
    #[arg(long)]
    pub(crate) range: Option<u32>,

    #[arg(long, value_name = "FILE")]
    pub(crate) config: Option<PathBuf>,
}

/// Parses `X,Y` (surrounding parentheses and spaces allowed).
fn parse_cell(s: &str) -> Result<IVec2, String> {
    let t = s.trim().trim_start_matches('(').trim_end_matches(')');
    let (x, y) = t.split_once(',').ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x = x.trim().parse::<i32>().map_err(|e| format!("bad x in '{s}': {e}"))?;
    let y = y.trim().parse::<i32>().map_err(|e| format!("bad y in '{s}': {e}"))?;
    Ok(IVec2::new(x, y))
}
