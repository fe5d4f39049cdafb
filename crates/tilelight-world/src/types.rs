use serde::Deserialize;
use tilelight_geom::IVec2;

/// A field (fire, smoke, gas...) occupying one cell. Density runs 1..=3.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Field {
    pub kind: String,
    #[serde(default = "default_density")]
    pub density: u8,
}

fn default_density() -> u8 {
    1
}

impl Field {
    pub fn new(kind: impl Into<String>, density: u8) -> Self {
        Self { kind: kind.into(), density }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Creature {
    pub pos: IVec2,
    pub kind: String,
    #[serde(default)]
    pub on_fire: bool,
}

impl Creature {
    pub fn new(pos: IVec2, kind: impl Into<String>) -> Self {
        Self { pos, kind: kind.into(), on_fire: false }
    }
}

/// One mounted stack of a vehicle: its position relative to the vehicle
/// origin and the features relevant to light.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct VehiclePart {
    pub offset: IVec2,
    #[serde(default = "default_true")]
    pub external: bool,
    #[serde(default)]
    pub opaque: bool,
    #[serde(default = "default_hp")]
    pub hp: i32,
    /// `Some(open)` for openable parts (doors, hatches).
    #[serde(default)]
    pub open: Option<bool>,
    /// Power of a light feature mounted here, if any.
    #[serde(default)]
    pub light: Option<f32>,
}

fn default_true() -> bool {
    true
}

fn default_hp() -> i32 {
    100
}

impl VehiclePart {
    pub fn new(offset: IVec2) -> Self {
        Self { offset, external: true, opaque: false, hp: default_hp(), open: None, light: None }
    }

    /// Opaque, intact, and not an opened door.
    #[inline]
    pub fn blocks_light(&self) -> bool {
        self.opaque && self.hp > 0 && self.open != Some(true)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Vehicle {
    pub pos: IVec2,
    /// Facing in degrees; 0 is east, 90 is south.
    #[serde(default)]
    pub facing: i32,
    #[serde(default)]
    pub lights_on: bool,
    #[serde(default)]
    pub parts: Vec<VehiclePart>,
}

impl Vehicle {
    pub fn new(pos: IVec2, facing: i32) -> Self {
        Self { pos, facing, lights_on: false, parts: Vec::new() }
    }

    pub fn external_parts(&self) -> impl Iterator<Item = &VehiclePart> + '_ {
        self.parts.iter().filter(|p| p.external)
    }

    #[inline]
    pub fn part_position(&self, part: &VehiclePart) -> IVec2 {
        self.pos + part.offset
    }
}
