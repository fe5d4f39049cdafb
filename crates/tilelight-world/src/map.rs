use std::error::Error;

use hashbrown::HashMap;
use tilelight_geom::IVec2;

use crate::registry::{TerrainId, TerrainRegistry};
use crate::types::{Creature, Field, Vehicle};
use crate::view::WorldView;

/// A bounded rectangular map anchored at (0, 0).
///
/// Cells outside the rectangle read as open ground: transparent, outdoors,
/// with no terrain name, fields or items.
#[derive(Clone, Debug)]
pub struct TileMap {
    registry: TerrainRegistry,
    width: i32,
    height: i32,
    cells: Vec<TerrainId>,
    fields: HashMap<IVec2, Field>,
    items: HashMap<IVec2, Vec<String>>,
    creatures: Vec<Creature>,
    vehicles: Vec<Vehicle>,
    observer: IVec2,
}

impl TileMap {
    pub fn new(registry: TerrainRegistry, width: i32, height: i32, fill: &str) -> Result<Self, Box<dyn Error>> {
        if width <= 0 || height <= 0 {
            return Err(format!("map size must be positive, got {width}x{height}").into());
        }
        let id = registry
            .id_by_name(fill)
            .ok_or_else(|| format!("unknown terrain '{fill}'"))?;
        Ok(Self {
            registry,
            width,
            height,
            cells: vec![id; (width * height) as usize],
            fields: HashMap::new(),
            items: HashMap::new(),
            creatures: Vec::new(),
            vehicles: Vec::new(),
            observer: IVec2::new(width / 2, height / 2),
        })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn registry(&self) -> &TerrainRegistry {
        &self.registry
    }

    #[inline]
    pub fn in_bounds(&self, p: IVec2) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    #[inline]
    fn idx(&self, p: IVec2) -> Option<usize> {
        self.in_bounds(p).then(|| (p.y * self.width + p.x) as usize)
    }

    pub fn set_terrain(&mut self, p: IVec2, name: &str) -> Result<(), Box<dyn Error>> {
        let id = self
            .registry
            .id_by_name(name)
            .ok_or_else(|| format!("unknown terrain '{name}'"))?;
        self.set_terrain_id(p, id)
    }

    pub fn set_terrain_id(&mut self, p: IVec2, id: TerrainId) -> Result<(), Box<dyn Error>> {
        let i = self.idx(p).ok_or_else(|| format!("position {p} is off the map"))?;
        self.cells[i] = id;
        Ok(())
    }

    pub fn terrain_id(&self, p: IVec2) -> Option<TerrainId> {
        self.idx(p).map(|i| self.cells[i])
    }

    pub fn set_field(&mut self, p: IVec2, field: Field) {
        self.fields.insert(p, field);
    }

    pub fn clear_field(&mut self, p: IVec2) -> Option<Field> {
        self.fields.remove(&p)
    }

    pub fn add_item(&mut self, p: IVec2, name: impl Into<String>) {
        self.items.entry(p).or_default().push(name.into());
    }

    pub fn add_creature(&mut self, creature: Creature) {
        self.creatures.push(creature);
    }

    pub fn add_vehicle(&mut self, vehicle: Vehicle) {
        self.vehicles.push(vehicle);
    }

    pub fn vehicles_mut(&mut self) -> &mut Vec<Vehicle> {
        &mut self.vehicles
    }

    pub fn set_observer(&mut self, p: IVec2) {
        self.observer = p;
    }
}

impl WorldView for TileMap {
    fn terrain(&self, p: IVec2) -> Option<&str> {
        let id = self.terrain_id(p)?;
        self.registry.get(id).map(|t| t.name.as_str())
    }

    fn terrain_transparent(&self, p: IVec2) -> bool {
        self.terrain_id(p)
            .and_then(|id| self.registry.get(id))
            .is_none_or(|t| t.transparent)
    }

    fn field_at(&self, p: IVec2) -> Option<&Field> {
        self.fields.get(&p)
    }

    fn field_transparent(&self, field: &Field) -> bool {
        self.registry.field_transparent(field)
    }

    fn items_at(&self, p: IVec2) -> &[String] {
        self.items.get(&p).map(Vec::as_slice).unwrap_or(&[])
    }

    fn is_outside(&self, p: IVec2) -> bool {
        self.terrain_id(p)
            .and_then(|id| self.registry.get(id))
            .is_none_or(|t| !t.indoors)
    }

    fn observer(&self) -> IVec2 {
        self.observer
    }

    fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> TileMap {
        TileMap::new(TerrainRegistry::builtin(), 8, 6, "grass").unwrap()
    }

    #[test]
    fn off_map_reads_as_open_ground() {
        let m = map();
        let p = IVec2::new(-3, 40);
        assert_eq!(m.terrain(p), None);
        assert!(m.terrain_transparent(p));
        assert!(m.is_outside(p));
        assert!(m.items_at(p).is_empty());
    }

    #[test]
    fn terrain_flags_follow_registry() {
        let mut m = map();
        let p = IVec2::new(2, 3);
        m.set_terrain(p, "wall").unwrap();
        assert_eq!(m.terrain(p), Some("wall"));
        assert!(!m.terrain_transparent(p));
        assert!(!m.is_outside(p));
        assert!(m.set_terrain(p, "marble").is_err());
        assert!(m.set_terrain(IVec2::new(8, 0), "wall").is_err());
    }

    #[test]
    fn items_and_fields_are_sparse() {
        let mut m = map();
        let p = IVec2::new(1, 1);
        m.add_item(p, "candle_lit");
        m.add_item(p, "rock");
        assert_eq!(m.items_at(p).len(), 2);
        m.set_field(p, Field::new("smoke", 2));
        assert_eq!(m.field_at(p).map(|f| f.density), Some(2));
        assert!(!m.field_transparent(m.field_at(p).unwrap()));
        assert_eq!(m.clear_field(p).map(|f| f.kind), Some("smoke".to_string()));
        assert!(m.field_at(p).is_none());
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert!(TileMap::new(TerrainRegistry::builtin(), 0, 4, "grass").is_err());
        assert!(TileMap::new(TerrainRegistry::builtin(), 4, 4, "lava_lamp").is_err());
    }
}
