use std::collections::HashMap;
use std::error::Error;

use serde::Deserialize;

use crate::types::Field;

pub type TerrainId = u16;

#[derive(Clone, Debug, Deserialize)]
pub struct TerrainDef {
    pub name: String,
    #[serde(default)]
    pub glyph: Option<char>,
    #[serde(default = "default_true")]
    pub transparent: bool,
    /// Roofed terrain; everything else is open to the sky.
    #[serde(default)]
    pub indoors: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FieldDef {
    pub name: String,
    /// Transparency per density, index 0 = density 1.
    #[serde(default)]
    pub transparent: Vec<bool>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub terrain: Vec<TerrainDef>,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

fn default_true() -> bool {
    true
}

fn terrain(name: &str, glyph: char, transparent: bool, indoors: bool) -> TerrainDef {
    TerrainDef { name: name.into(), glyph: Some(glyph), transparent, indoors }
}

fn field(name: &str, transparent: [bool; 3]) -> FieldDef {
    FieldDef { name: name.into(), transparent: transparent.to_vec() }
}

impl RegistryConfig {
    /// Terrain and field kinds known without any configuration.
    pub fn builtin() -> Self {
        Self {
            terrain: vec![
                terrain("grass", '.', true, false),
                terrain("dirt", ',', true, false),
                terrain("pavement", '_', true, false),
                terrain("floor", '\'', true, true),
                terrain("wall", '#', false, true),
                terrain("window", '"', true, true),
                terrain("door_closed", '+', false, true),
                terrain("door_open", '/', true, true),
                terrain("tree", 'T', false, false),
                terrain("lava", '~', true, false),
                terrain("console", '6', false, true),
                terrain("emergency_light", '!', true, true),
            ],
            fields: vec![
                field("fire", [true, true, true]),
                field("fire_vent", [true, true, true]),
                field("flame_burst", [true, true, true]),
                field("electricity", [true, true, true]),
                field("smoke", [true, false, false]),
                field("toxic_gas", [true, false, false]),
                field("tear_gas", [true, false, false]),
                field("nuke_gas", [true, false, false]),
                field("blood", [true, true, true]),
            ],
        }
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Appends `other`; later definitions replace earlier ones of the same name.
    pub fn merged(mut self, other: RegistryConfig) -> Self {
        self.terrain.extend(other.terrain);
        self.fields.extend(other.fields);
        self
    }
}

#[derive(Clone, Debug)]
pub struct TerrainType {
    pub id: TerrainId,
    pub name: String,
    pub glyph: Option<char>,
    pub transparent: bool,
    pub indoors: bool,
}

#[derive(Clone, Debug, Default)]
pub struct TerrainRegistry {
    pub terrain: Vec<TerrainType>,
    pub by_name: HashMap<String, TerrainId>,
    pub by_glyph: HashMap<char, TerrainId>,
    fields: HashMap<String, Vec<bool>>,
}

impl TerrainRegistry {
    pub fn builtin() -> Self {
        // Builtin names are unique and few enough to never overflow the id space.
        Self::from_config(RegistryConfig::builtin()).unwrap_or_default()
    }

    pub fn from_config(cfg: RegistryConfig) -> Result<Self, Box<dyn Error>> {
        let mut reg = TerrainRegistry::default();
        for def in cfg.terrain {
            if let Some(&id) = reg.by_name.get(&def.name) {
                let ty = &mut reg.terrain[id as usize];
                if let Some(old) = ty.glyph {
                    reg.by_glyph.remove(&old);
                }
                ty.glyph = def.glyph;
                ty.transparent = def.transparent;
                ty.indoors = def.indoors;
                if let Some(g) = def.glyph {
                    reg.by_glyph.insert(g, id);
                }
                continue;
            }
            let id = TerrainId::try_from(reg.terrain.len())
                .map_err(|_| format!("too many terrain types (at '{}')", def.name))?;
            reg.by_name.insert(def.name.clone(), id);
            if let Some(g) = def.glyph {
                reg.by_glyph.insert(g, id);
            }
            reg.terrain.push(TerrainType {
                id,
                name: def.name,
                glyph: def.glyph,
                transparent: def.transparent,
                indoors: def.indoors,
            });
        }
        for def in cfg.fields {
            reg.fields.insert(def.name, def.transparent);
        }
        Ok(reg)
    }

    #[inline]
    pub fn get(&self, id: TerrainId) -> Option<&TerrainType> {
        self.terrain.get(id as usize)
    }

    pub fn id_by_name(&self, name: &str) -> Option<TerrainId> {
        self.by_name.get(name).copied()
    }

    pub fn id_by_glyph(&self, glyph: char) -> Option<TerrainId> {
        self.by_glyph.get(&glyph).copied()
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Unknown kinds are treated as transparent; a density past the end of
    /// the table uses the last entry.
    pub fn field_transparent(&self, f: &Field) -> bool {
        let Some(table) = self.fields.get(&f.kind) else {
            return true;
        };
        let idx = (f.density.max(1) as usize - 1).min(table.len().saturating_sub(1));
        table.get(idx).copied().unwrap_or(true)
    }
}
