//! World facts consumed by the lighting core, plus an in-memory tile map.
#![forbid(unsafe_code)]

pub mod map;
pub mod registry;
pub mod scene;
pub mod types;
pub mod view;

pub use map::TileMap;
pub use registry::{FieldDef, RegistryConfig, TerrainDef, TerrainId, TerrainRegistry};
pub use scene::SceneConfig;
pub use types::{Creature, Field, Vehicle, VehiclePart};
pub use view::WorldView;
