use proptest::prelude::*;
use tilelight_geom::IVec2;
use tilelight_world::{Field, TerrainRegistry, TileMap, WorldView};

const W: i32 = 16;
const H: i32 = 9;

fn map() -> TileMap {
    TileMap::new(TerrainRegistry::builtin(), W, H, "floor").unwrap()
}

proptest! {
    #[test]
    fn off_map_is_open_ground(x in -50i32..50, y in -50i32..50) {
        prop_assume!(x < 0 || x >= W || y < 0 || y >= H);
        let mut m = map();
        let p = IVec2::new(x, y);
        prop_assert!(m.set_terrain(p, "wall").is_err());
        prop_assert_eq!(m.terrain(p), None);
        prop_assert!(m.terrain_transparent(p));
        prop_assert!(m.is_outside(p));
        prop_assert!(m.field_at(p).is_none());
    }

    #[test]
    fn in_bounds_cells_keep_their_facts(x in 0..W, y in 0..H, density in 1u8..=3) {
        let mut m = map();
        let p = IVec2::new(x, y);
        prop_assert!(!m.is_outside(p));
        m.set_terrain(p, "wall").unwrap();
        m.set_field(p, Field::new("smoke", density));
        prop_assert_eq!(m.terrain(p), Some("wall"));
        prop_assert!(!m.terrain_transparent(p));
        let f = m.field_at(p).unwrap();
        prop_assert_eq!(f.density, density);
        prop_assert_eq!(m.field_transparent(f), density == 1);
    }
}
