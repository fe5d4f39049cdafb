//! Point and arc emission by casting rays to the perimeter of a light's range.

use tilelight_geom::{IVec2, Line};

use crate::config::Levels;
use crate::grid::Grid2;
use crate::lightmap::LightMap;

impl LightMap {
    /// Adds an omnidirectional light at an absolute position.
    ///
    /// The origin cell (if visible) gets at least the dim floor of ambient and
    /// the unattenuated luminance as raw source. Lights above the local-only
    /// threshold also reach out to `light_range(luminance)`.
    pub fn apply_point(&mut self, origin: IVec2, luminance: f32) {
        log::trace!(target: "lighting", "point at {} luminance={:.2}", origin, luminance);
        let mut lit = Grid2::new(self.visible_extent(), false);
        let rel = origin - self.center;
        if lit.set(rel, true) {
            if let Some(a) = self.ambient.get_mut(rel) {
                *a += luminance.max(self.levels.ambient_low);
            }
            if let Some(s) = self.raw.get_mut(rel) {
                *s += luminance.max(0.0);
            }
        }

        if luminance <= self.levels.source_local {
            return;
        }
        let r = self.levels.light_range(luminance);
        for off in -r..=r {
            self.cast_ray(&mut lit, origin, origin + IVec2::new(off, -r), luminance);
            self.cast_ray(&mut lit, origin, origin + IVec2::new(off, r), luminance);
        }
        // Corners were covered by the rows.
        for off in (-r + 1)..r {
            self.cast_ray(&mut lit, origin, origin + IVec2::new(-r, off), luminance);
            self.cast_ray(&mut lit, origin, origin + IVec2::new(r, off), luminance);
        }
    }

    /// Adds a light confined to a cone around `facing` degrees (0 = east,
    /// 90 = south). The origin cell is always marked, whatever the facing.
    pub fn apply_arc(&mut self, origin: IVec2, facing: i32, luminance: f32) {
        if luminance <= self.levels.source_local {
            return;
        }
        log::trace!(target: "lighting", "arc at {} facing={} luminance={:.2}", origin, facing, luminance);
        let r = self.levels.light_range(luminance);
        self.apply_point(origin, self.levels.source_local);

        let mut lit = Grid2::new(self.visible_extent(), false);
        for target in arc_targets(r, facing) {
            self.cast_ray(&mut lit, origin, origin + target, luminance);
        }
    }

    fn cast_ray(&mut self, lit: &mut Grid2<bool>, origin: IVec2, target: IVec2, luminance: f32) {
        let mut transparency = Levels::CLEAR;
        for (step, p) in Line::new(origin, target).enumerate() {
            let rel = p - self.center;
            if let Some(seen) = lit.get_mut(rel) {
                if !*seen {
                    *seen = true;
                    let d = (step + 1) as f32;
                    if let Some(a) = self.ambient.get_mut(rel) {
                        *a += luminance / (d * d) * transparency;
                    }
                }
            }
            // A cell's own opacity only shades what lies beyond it.
            if let Some(t) = self.cache.transparency_at(p) {
                transparency *= t;
            }
            if transparency <= Levels::SOLID {
                break;
            }
        }
    }
}

/// Perimeter offsets of the square of half-width `range` that fall inside
/// the cone around `facing`. Span ends are interpolated over 45° at octant
/// boundaries and truncated toward the origin.
pub(crate) fn arc_targets(range: i32, facing: i32) -> Vec<IVec2> {
    let a = facing.rem_euclid(360);
    let r = range;
    let span = |deg: i32| (r as f32 * (deg as f32 / 45.0)) as i32;
    let mut out = Vec::new();

    // East
    if !(90..=270).contains(&a) {
        let lo = if a < 90 { -span(45 - a) } else { -r };
        let hi = if a > 270 { span(a - 315) } else { r };
        out.extend((lo..=hi).map(|oy| IVec2::new(r, oy)));
    }
    // South
    if a < 180 {
        let lo = if a < 90 { -span(a - 45) } else { -r };
        let hi = if a > 90 { span(135 - a) } else { r };
        out.extend((lo..=hi).map(|ox| IVec2::new(ox, r)));
    }
    // West
    if a > 90 && a < 270 {
        let lo = if a < 180 { -span(a - 135) } else { -r };
        let hi = if a > 180 { span(225 - a) } else { r };
        out.extend((lo..=hi).map(|oy| IVec2::new(-r, oy)));
    }
    // North
    if a > 180 {
        let lo = if a > 270 { -span(315 - a) } else { -r };
        let hi = if a < 270 { span(a - 225) } else { r };
        out.extend((lo..=hi).map(|ox| IVec2::new(ox, -r)));
    }
    out
}
