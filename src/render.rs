//! Text output of a generated light map.

use std::fmt::Write as _;

use tilelight_geom::IVec2;
use tilelight_lighting::{LightMap, LitLevel};

fn glyph(level: LitLevel) -> char {
    match level {
        LitLevel::Dark => ' ',
        LitLevel::Low => '.',
        LitLevel::Lit => '+',
        LitLevel::Bright => '*',
    }
}

/// One character per visible cell, north row first; the observer is `@`.
pub(crate) fn levels(lm: &LightMap, observer: IVec2) -> String {
    let h = lm.visible_extent();
    let mut out = String::new();
    for y in -h.y..=h.y {
        for x in -h.x..=h.x {
            let rel = IVec2::new(x, y);
            out.push(if lm.center() + rel == observer { '@' } else { glyph(lm.classify(rel)) });
        }
        out.push('\n');
    }
    out
}

/// Ambient value grid, one row per line.
pub(crate) fn values(lm: &LightMap) -> String {
    let h = lm.visible_extent();
    let mut out = String::new();
    for y in -h.y..=h.y {
        for x in -h.x..=h.x {
            let sep = if x == -h.x { "" } else { " " };
            let _ = write!(out, "{sep}{:7.2}", lm.ambient_at(IVec2::new(x, y)));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilelight_lighting::LightingConfig;
    use tilelight_world::{Field, TerrainRegistry, TileMap};

    fn small_config() -> LightingConfig {
        LightingConfig::from_toml_str("[window]\nvisible_x = 3\nvisible_y = 2\n").unwrap()
    }

    #[test]
    fn levels_draws_the_window() {
        let mut map = TileMap::new(TerrainRegistry::builtin(), 20, 20, "grass").unwrap();
        map.set_field(IVec2::new(10, 10), Field::new("fire", 3));
        map.set_observer(IVec2::new(8, 10));
        let mut lm = LightMap::new(&small_config());
        lm.generate(&map, IVec2::new(10, 10), 0.0, 0.0);
        let out = levels(&lm, IVec2::new(8, 10));
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r.chars().count() == 7));
        assert_eq!(rows[2], "+@+*+++");
    }

    #[test]
    fn values_prints_every_cell() {
        let map = TileMap::new(TerrainRegistry::builtin(), 20, 20, "grass").unwrap();
        let mut lm = LightMap::new(&small_config());
        lm.generate(&map, IVec2::new(10, 10), 30.0, 0.0);
        let out = values(&lm);
        assert_eq!(out.lines().count(), 5);
        for row in out.lines() {
            let cells: Vec<f32> = row.split_whitespace().map(|v| v.parse().unwrap()).collect();
            assert_eq!(cells, vec![30.0; 7]);
        }
    }
}
