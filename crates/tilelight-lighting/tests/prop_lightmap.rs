use proptest::prelude::*;
use tilelight_geom::IVec2;
use tilelight_lighting::{LightMap, LightingConfig, LitLevel};
use tilelight_world::{Field, TerrainRegistry, TileMap};

const C: IVec2 = IVec2::new(40, 40);

fn open_map() -> TileMap {
    let mut map = TileMap::new(TerrainRegistry::builtin(), 80, 80, "grass").unwrap();
    map.set_observer(C);
    map
}

fn near() -> impl Strategy<Value = IVec2> {
    (-20i32..=20, -20i32..=20).prop_map(|(x, y)| IVec2::new(x, y))
}

fn outside_visible() -> impl Strategy<Value = IVec2> {
    prop_oneof![
        (13i32..=60, -60i32..=60).prop_map(|(x, y)| IVec2::new(x, y)),
        (-60i32..=-13, -60i32..=60).prop_map(|(x, y)| IVec2::new(x, y)),
        (-60i32..=60, 13i32..=60).prop_map(|(x, y)| IVec2::new(x, y)),
        (-60i32..=60, -60i32..=-13).prop_map(|(x, y)| IVec2::new(x, y)),
    ]
}

#[derive(Clone, Debug)]
enum Feature {
    Wall(IVec2),
    Fire(IVec2, u8),
    Smoke(IVec2, u8),
    Candle(IVec2),
}

fn feature() -> impl Strategy<Value = Feature> {
    prop_oneof![
        near().prop_map(Feature::Wall),
        (near(), 1u8..=3).prop_map(|(p, d)| Feature::Fire(p, d)),
        (near(), 1u8..=3).prop_map(|(p, d)| Feature::Smoke(p, d)),
        near().prop_map(Feature::Candle),
    ]
}

fn build(features: &[Feature]) -> TileMap {
    let mut map = open_map();
    for f in features {
        match f {
            Feature::Wall(p) => map.set_terrain(C + *p, "wall").unwrap(),
            Feature::Fire(p, d) => map.set_field(C + *p, Field::new("fire", *d)),
            Feature::Smoke(p, d) => map.set_field(C + *p, Field::new("smoke", *d)),
            Feature::Candle(p) => map.add_item(C + *p, "candle_lit"),
        }
    }
    map
}

proptest! {
    #[test]
    fn outside_the_window_is_dark(features in prop::collection::vec(feature(), 0..12), q in outside_visible()) {
        let map = build(&features);
        let mut lm = LightMap::new(&LightingConfig::default());
        lm.generate(&map, C, 40.0, 6.0);
        prop_assert_eq!(lm.classify(q), LitLevel::Dark);
        prop_assert_eq!(lm.ambient_at(q), 0.0);
        prop_assert_eq!(lm.raw_source_at(q), 0.0);
    }

    #[test]
    fn generate_twice_gives_the_same_frame(features in prop::collection::vec(feature(), 0..16), outdoor in 0.0f32..80.0) {
        let map = build(&features);
        let mut lm = LightMap::new(&LightingConfig::default());
        lm.generate(&map, C, outdoor, 3.0);
        let first: Vec<u32> = lm.ambient_cells().iter().map(|v| v.to_bits()).collect();
        lm.generate(&map, C, outdoor, 3.0);
        let second: Vec<u32> = lm.ambient_cells().iter().map(|v| v.to_bits()).collect();
        prop_assert_eq!(first, second);
    }

    // In the open, light along an axis is exactly inverse-square out to the
    // range and zero beyond.
    #[test]
    fn open_field_falloff_along_axes(lum in 0.2f32..200.0, dir in 0usize..4) {
        let map = open_map();
        let mut lm = LightMap::new(&LightingConfig::default());
        lm.prepare(&map, C);
        lm.apply_point(C, lum);
        let range = lm.levels().light_range(lum);
        let step = IVec2::CARDINALS[dir];
        let mut prev = f32::INFINITY;
        let mut at = IVec2::ZERO;
        for k in 1..=12 {
            at += step;
            let a = lm.ambient_at(at);
            prop_assert!(a <= prev);
            if k <= range {
                let d = k as f32;
                prop_assert_eq!(a, lum / (d * d));
            } else {
                prop_assert_eq!(a, 0.0);
            }
            prev = a;
        }
    }

    #[test]
    fn brighter_source_never_darkens_open_ground(a in 0.0f32..120.0, extra in 0.0f32..80.0, at in near()) {
        let map = open_map();
        let mut dim = LightMap::new(&LightingConfig::default());
        let mut bright = LightMap::new(&LightingConfig::default());
        dim.prepare(&map, C);
        bright.prepare(&map, C);
        dim.apply_point(C + at, a);
        bright.apply_point(C + at, a + extra);
        for (lo, hi) in dim.ambient_cells().iter().zip(bright.ambient_cells()) {
            prop_assert!(hi >= lo);
        }
    }

    // With occluders a wider range walks different lines, so the guarantee
    // only holds while both luminances share a range.
    #[test]
    fn brighter_source_within_one_range_never_darkens(
        features in prop::collection::vec(feature(), 0..16),
        range in 2i32..=11,
        t in 0.0f32..1.0,
        u in 0.0f32..1.0,
    ) {
        let lo = ((range - 1) * (range - 1)) as f32 + 0.01;
        let hi = (range * range) as f32 - 0.01;
        let a = lo + t * (hi - lo);
        let b = a + u * (hi - a);
        let map = build(&features);
        let mut dim = LightMap::new(&LightingConfig::default());
        let mut bright = LightMap::new(&LightingConfig::default());
        prop_assume!(dim.levels().light_range(a) == dim.levels().light_range(b));
        dim.prepare(&map, C);
        bright.prepare(&map, C);
        dim.apply_point(C, a);
        bright.apply_point(C, b);
        for (lo, hi) in dim.ambient_cells().iter().zip(bright.ambient_cells()) {
            prop_assert!(hi >= lo);
        }
    }

    #[test]
    fn wall_in_between_blocks_sight(a in -20i32..=-2, b in -1i32..=1, c in 2i32..=20, y in -20i32..=20) {
        let mut map = open_map();
        map.set_terrain(C + IVec2::new(b, y), "wall").unwrap();
        let mut lm = LightMap::new(&LightingConfig::default());
        lm.prepare(&map, C);
        let from = C + IVec2::new(a, y);
        let to = C + IVec2::new(c, y);
        prop_assert!(!lm.has_line_of_sight(from, to, None));
        prop_assert!(!lm.has_line_of_sight(to, from, None));
        prop_assert!(lm.has_line_of_sight(from, C + IVec2::new(b, y), None));
    }

    #[test]
    fn open_field_sight_is_clear(p in near(), q in near()) {
        let map = open_map();
        let mut lm = LightMap::new(&LightingConfig::default());
        lm.prepare(&map, C);
        prop_assert!(lm.has_line_of_sight(C + p, C + q, None));
    }
}
