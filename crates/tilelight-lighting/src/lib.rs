//! Per-turn 2D illumination: an occlusion cache, perimeter ray-cast point and
//! arc lights, light level queries, and line of sight.
#![forbid(unsafe_code)]

pub mod config;
mod emitter;
mod generate;
pub mod grid;
mod lightmap;
pub mod occlusion;
pub mod rules;

pub use config::{Levels, LightingConfig, Luminance, Threshold};
pub use grid::Grid2;
pub use lightmap::{LightMap, LitLevel};
pub use occlusion::OcclusionCache;
pub use rules::LightRules;
