use tilelight_geom::{IVec2, Line};
use tilelight_world::WorldView;

use crate::config::Levels;
use crate::grid::Grid2;
use crate::rules::LightRules;

/// Per-cell transparency over the large window, rebuilt once per frame.
#[derive(Clone, Debug)]
pub struct OcclusionCache {
    center: IVec2,
    grid: Grid2<f32>,
}

impl OcclusionCache {
    pub fn new(half: IVec2) -> Self {
        Self { center: IVec2::ZERO, grid: Grid2::new(half, Levels::CLEAR) }
    }

    #[inline]
    pub fn half_extent(&self) -> IVec2 {
        self.grid.half_extent()
    }

    /// Whether an absolute position lies inside the cached window.
    #[inline]
    pub fn contains(&self, p: IVec2) -> bool {
        self.grid.contains(p - self.center)
    }

    /// Transparency at an absolute position, `None` outside the window.
    #[inline]
    pub fn transparency_at(&self, p: IVec2) -> Option<f32> {
        self.grid.get(p - self.center)
    }

    /// Recomputes every cell from the world around `center`.
    ///
    /// Terrain is applied first, then fields, then closed vehicle parts, so a
    /// later rule overwrites an earlier one on the same cell.
    pub fn rebuild<W: WorldView + ?Sized>(&mut self, world: &W, center: IVec2, rules: &LightRules) {
        self.center = center;
        self.grid.fill(Levels::CLEAR);

        for rel in self.grid.coords() {
            let p = center + rel;
            if !world.terrain_transparent(p) {
                self.grid.set(rel, Levels::SOLID);
                continue;
            }
            if let Some(field) = world.field_at(p) {
                if !world.field_transparent(field) {
                    self.grid.set(rel, rules.attenuate_field(field, Levels::CLEAR));
                }
            }
        }

        for v in world.vehicles() {
            for part in v.external_parts().filter(|p| p.blocks_light()) {
                // Parts outside the window are skipped by `set`.
                self.grid.set(v.part_position(part) - center, Levels::SOLID);
            }
        }
    }

    /// Overrides one cell until the next rebuild. Returns false outside the window.
    pub fn set_transparency(&mut self, p: IVec2, t: f32) -> bool {
        self.grid.set(p - self.center, t.clamp(Levels::SOLID, Levels::CLEAR))
    }

    /// Unobstructed sight from `from` to `to`, both absolute.
    ///
    /// Only cells strictly between the endpoints can block; the target's own
    /// opacity does not. `max_range` caps each axis delta separately.
    pub fn has_line_of_sight(&self, from: IVec2, to: IVec2, max_range: Option<u32>) -> bool {
        if !self.contains(from) || !self.contains(to) {
            return false;
        }
        if let Some(range) = max_range {
            let d = (to - from).abs();
            if d.x as u32 > range || d.y as u32 > range {
                return false;
            }
        }
        for p in Line::new(from, to) {
            if p == to {
                return true;
            }
            if self.transparency_at(p) == Some(Levels::SOLID) {
                return false;
            }
        }
        // Reached only when from == to.
        true
    }
}
