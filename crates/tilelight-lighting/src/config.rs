//! Lighting configuration: window sizes, thresholds, and the light and
//! translucency rule tables.

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tilelight_geom::IVec2;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct LightingConfig {
    #[serde(default)]
    pub window: Window,
    #[serde(default)]
    pub levels: Levels,
    #[serde(default)]
    pub sources: SourceTable,
    #[serde(default)]
    pub occlusion: OcclusionTable,
}

impl LightingConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|e| format!("reading {}: {e}", path.display()))?;
        Self::from_toml_str(&s)
    }
}

/// Half-extents of the two windows around the center cell.
#[derive(Clone, Debug, Deserialize)]
pub struct Window {
    #[serde(default = "default_visible_x")]
    pub visible_x: i32,
    #[serde(default = "default_visible_y")]
    pub visible_y: i32,
    #[serde(default = "default_cache_x")]
    pub cache_x: i32,
    #[serde(default = "default_cache_y")]
    pub cache_y: i32,
}
fn default_visible_x() -> i32 {
    12
}
fn default_visible_y() -> i32 {
    12
}
fn default_cache_x() -> i32 {
    24
}
fn default_cache_y() -> i32 {
    24
}
impl Default for Window {
    fn default() -> Self {
        Self {
            visible_x: default_visible_x(),
            visible_y: default_visible_y(),
            cache_x: default_cache_x(),
            cache_y: default_cache_y(),
        }
    }
}

impl Window {
    pub fn visible(&self) -> IVec2 {
        IVec2::new(self.visible_x.max(0), self.visible_y.max(0))
    }

    /// The cache never shrinks below the visible window.
    pub fn cache(&self) -> IVec2 {
        let v = self.visible();
        if self.cache_x < v.x || self.cache_y < v.y {
            log::warn!(
                target: "lighting",
                "cache window {}x{} smaller than visible window {}x{}, clamping",
                self.cache_x, self.cache_y, v.x, v.y
            );
        }
        IVec2::new(self.cache_x.max(v.x), self.cache_y.max(v.y))
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Levels {
    /// Dim floor: minimum light on any emitting cell, and the LOW level.
    #[serde(default = "default_ambient_low")]
    pub ambient_low: f32,
    #[serde(default = "default_ambient_lit")]
    pub ambient_lit: f32,
    /// Sources at or below this only light their own cell.
    #[serde(default = "default_source_local")]
    pub source_local: f32,
    #[serde(default = "default_source_bright")]
    pub source_bright: f32,
    #[serde(default = "default_vehicle_light_min")]
    pub vehicle_light_min: f32,
}
fn default_ambient_low() -> f32 {
    1.0
}
fn default_ambient_lit() -> f32 {
    2.0
}
fn default_source_local() -> f32 {
    0.1
}
fn default_source_bright() -> f32 {
    10.0
}
fn default_vehicle_light_min() -> f32 {
    2.0
}
impl Default for Levels {
    fn default() -> Self {
        Self {
            ambient_low: default_ambient_low(),
            ambient_lit: default_ambient_lit(),
            source_local: default_source_local(),
            source_bright: default_source_bright(),
            vehicle_light_min: default_vehicle_light_min(),
        }
    }
}

impl Levels {
    pub const SOLID: f32 = 0.0;
    pub const CLEAR: f32 = 1.0;

    /// Radius at which inverse-square falloff drops below the dim floor.
    pub fn light_range(&self, luminance: f32) -> i32 {
        let low = if self.ambient_low > 0.0 { self.ambient_low } else { 1.0 };
        ((luminance.max(0.0) / low).sqrt() + 1.0) as i32
    }

    pub fn resolve(&self, lum: Luminance) -> f32 {
        match lum {
            Luminance::Value(v) => v,
            Luminance::Level(Threshold::Low) => self.ambient_low,
            Luminance::Level(Threshold::Lit) => self.ambient_lit,
            Luminance::Level(Threshold::Local) => self.source_local,
            Luminance::Level(Threshold::Bright) => self.source_bright,
        }
    }
}

/// A luminance given either as a number or by naming one of the thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Luminance {
    Value(f32),
    Level(Threshold),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Threshold {
    Low,
    Lit,
    Local,
    Bright,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NamedSource {
    pub name: String,
    pub luminance: Luminance,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FieldSource {
    pub kind: String,
    /// Exact density match; `None` applies to densities without their own rule.
    #[serde(default)]
    pub density: Option<u8>,
    pub luminance: Luminance,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SourceTable {
    #[serde(default)]
    pub terrain: Vec<NamedSource>,
    /// Matched only when the item is alone on its cell.
    #[serde(default)]
    pub items: Vec<NamedSource>,
    #[serde(default)]
    pub fields: Vec<FieldSource>,
    #[serde(default)]
    pub creatures: Vec<NamedSource>,
    #[serde(default = "default_on_fire")]
    pub on_fire: Luminance,
}
fn default_on_fire() -> Luminance {
    Luminance::Value(3.0)
}

fn named(name: &str, luminance: Luminance) -> NamedSource {
    NamedSource { name: name.into(), luminance }
}

fn field_src(kind: &str, density: Option<u8>, luminance: Luminance) -> FieldSource {
    FieldSource { kind: kind.into(), density, luminance }
}

impl Default for SourceTable {
    fn default() -> Self {
        use Luminance::{Level, Value};
        Self {
            terrain: vec![
                named("lava", Value(50.0)),
                named("console", Value(3.0)),
                named("emergency_light", Value(3.0)),
            ],
            items: vec![named("flashlight_on", Value(20.0)), named("candle_lit", Value(4.0))],
            fields: vec![
                field_src("fire", Some(3), Value(160.0)),
                field_src("fire", Some(2), Value(60.0)),
                field_src("fire", None, Value(16.0)),
                field_src("fire_vent", None, Value(8.0)),
                field_src("flame_burst", None, Value(8.0)),
                field_src("electricity", Some(3), Value(8.0)),
                field_src("electricity", Some(2), Value(1.0)),
                // Marks the cell without propagating.
                field_src("electricity", None, Level(Threshold::Local)),
            ],
            creatures: vec![
                named("zombie_electric", Value(1.0)),
                named("turret", Value(2.0)),
                named("flaming_eye", Level(Threshold::Bright)),
                named("manhack", Level(Threshold::Local)),
            ],
            on_fire: default_on_fire(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OcclusionMode {
    /// Density 3 is solid, density 2 scales by `factor`, density 1 is clear.
    Graded,
    /// Scales by `factor` at any density.
    Scale,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FieldOcclusionRule {
    pub kind: String,
    pub mode: OcclusionMode,
    #[serde(default = "default_factor")]
    pub factor: f32,
}
fn default_factor() -> f32 {
    0.5
}

/// Translucency rules for fields the world reports as non-transparent.
/// Kinds without a rule are solid.
#[derive(Clone, Debug, Deserialize)]
pub struct OcclusionTable {
    #[serde(default)]
    pub fields: Vec<FieldOcclusionRule>,
}

impl Default for OcclusionTable {
    fn default() -> Self {
        let rule = |kind: &str, mode| FieldOcclusionRule { kind: kind.into(), mode, factor: default_factor() };
        Self {
            fields: vec![
                rule("smoke", OcclusionMode::Graded),
                rule("toxic_gas", OcclusionMode::Graded),
                rule("tear_gas", OcclusionMode::Graded),
                rule("nuke_gas", OcclusionMode::Scale),
            ],
        }
    }
}
