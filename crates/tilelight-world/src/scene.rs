//! TOML scene files: a glyph map plus the facts placed on it.

use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tilelight_geom::IVec2;

use crate::map::TileMap;
use crate::registry::{RegistryConfig, TerrainRegistry};
use crate::types::{Creature, Field, Vehicle};

#[derive(Clone, Debug, Deserialize)]
pub struct SceneConfig {
    /// Map rows, north to south. Every row must have the same length.
    pub rows: Vec<String>,
    /// Extra or overriding glyphs, mapped to terrain names.
    #[serde(default)]
    pub legend: HashMap<char, String>,
    #[serde(default)]
    pub observer: Option<IVec2>,
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub fields: Vec<PlacedField>,
    #[serde(default)]
    pub items: Vec<PlacedItem>,
    #[serde(default)]
    pub creatures: Vec<Creature>,
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PlacedField {
    pub at: IVec2,
    #[serde(flatten)]
    pub field: Field,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PlacedItem {
    pub at: IVec2,
    pub name: String,
}

impl SceneConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|e| format!("reading {}: {e}", path.display()))?;
        Self::from_toml_str(&s)
    }

    pub fn build(self) -> Result<TileMap, Box<dyn Error>> {
        let registry = TerrainRegistry::from_config(RegistryConfig::builtin().merged(self.registry))?;
        let height = self.rows.len() as i32;
        let width = self.rows.first().map(|r| r.chars().count()).unwrap_or(0) as i32;
        let fill = registry
            .get(0)
            .map(|t| t.name.clone())
            .ok_or("terrain registry is empty")?;
        let mut map = TileMap::new(registry, width, height, &fill)?;
        for (y, row) in self.rows.iter().enumerate() {
            let len = row.chars().count() as i32;
            if len != width {
                return Err(format!("row {y} has {len} cells, expected {width}").into());
            }
            for (x, glyph) in row.chars().enumerate() {
                let p = IVec2::new(x as i32, y as i32);
                match self.legend.get(&glyph) {
                    Some(name) => map.set_terrain(p, name)?,
                    None => {
                        let id = map
                            .registry()
                            .id_by_glyph(glyph)
                            .ok_or_else(|| format!("unknown glyph '{glyph}' at {p}"))?;
                        map.set_terrain_id(p, id)?;
                    }
                }
            }
        }
        for f in self.fields {
            if !map.registry().has_field(&f.field.kind) {
                log::warn!(target: "scene", "field '{}' at {} has no transparency entry", f.field.kind, f.at);
            }
            map.set_field(f.at, f.field);
        }
        for item in self.items {
            map.add_item(item.at, item.name);
        }
        for c in self.creatures {
            map.add_creature(c);
        }
        for v in self.vehicles {
            map.add_vehicle(v);
        }
        if let Some(p) = self.observer {
            map.set_observer(p);
        }
        log::debug!(target: "scene", "built {}x{} map", width, height);
        Ok(map)
    }
}

impl TileMap {
    pub fn load_scene(path: impl AsRef<Path>) -> Result<TileMap, Box<dyn Error>> {
        SceneConfig::from_path(path)?.build()
    }
}
