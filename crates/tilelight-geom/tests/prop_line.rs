use proptest::prelude::*;
use tilelight_geom::{IVec2, Line};

fn coord() -> impl Strategy<Value = IVec2> {
    (-64i32..=64, -64i32..=64).prop_map(|(x, y)| IVec2::new(x, y))
}

proptest! {
    // The walk always lands exactly on its end point
    #[test]
    fn walk_ends_at_target(a in coord(), b in coord()) {
        let last = Line::new(a, b).last();
        if a == b {
            prop_assert!(last.is_none());
        } else {
            prop_assert_eq!(last, Some(b));
        }
    }

    // One cell per unit of the dominant axis
    #[test]
    fn walk_length_is_chebyshev(a in coord(), b in coord()) {
        prop_assert_eq!(Line::new(a, b).count() as i32, (b - a).chebyshev());
    }

    // Consecutive cells touch (8-connected) and the dominant distance grows by one
    #[test]
    fn steps_are_adjacent_and_monotone(a in coord(), b in coord()) {
        let mut prev = a;
        for (i, p) in Line::new(a, b).enumerate() {
            prop_assert_eq!((p - prev).chebyshev(), 1);
            prop_assert_eq!((p - a).chebyshev(), i as i32 + 1);
            prev = p;
        }
    }

    // Walks are pure functions of their end points
    #[test]
    fn walk_is_deterministic(a in coord(), b in coord()) {
        let first: Vec<IVec2> = Line::new(a, b).collect();
        let second: Vec<IVec2> = Line::new(a, b).collect();
        prop_assert_eq!(first, second);
    }
}
