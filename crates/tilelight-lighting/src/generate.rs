//! Per-turn frame generation: walks every light fact in range and emits it.

use tilelight_geom::IVec2;
use tilelight_world::WorldView;

use crate::config::Levels;
use crate::lightmap::LightMap;

/// Facing for light entering through each of [`IVec2::CARDINALS`]: light
/// from an eastern opening travels west, and so on.
const INWARD_FACING: [i32; 4] = [180, 270, 0, 90];

impl LightMap {
    /// Recomputes the whole frame around `center`.
    ///
    /// `outdoor` is the natural light level outside (0 underground or at
    /// night); `observer_luminance` is the light the observer carries.
    pub fn generate<W: WorldView + ?Sized>(&mut self, world: &W, center: IVec2, outdoor: f32, observer_luminance: f32) {
        self.prepare(world, center);
        let low = self.levels.ambient_low;
        let mut emissions = 0usize;

        let direct = outdoor > low;
        let indirect = outdoor > self.levels.source_bright;
        if direct || indirect {
            for rel in self.ambient.coords() {
                // Daylight is the first contribution, so assign rather than add.
                if world.is_outside(center + rel) {
                    if direct {
                        self.ambient.set(rel, outdoor);
                    }
                } else if indirect {
                    self.ambient.set(rel, low);
                }
            }
        }

        if observer_luminance > low {
            self.apply_point(world.observer(), observer_luminance);
            emissions += 1;
        }

        let observer_outside = world.is_outside(world.observer());
        let cache_half = self.cache.half_extent();
        for y in -cache_half.y..=cache_half.y {
            for x in -cache_half.x..=cache_half.x {
                let p = center + IVec2::new(x, y);
                if outdoor > low && !world.is_outside(p) {
                    emissions += self.leak_daylight(world, p, outdoor, observer_outside);
                }
                emissions += self.apply_static_sources(world, p);
            }
        }

        for c in world.creatures() {
            if !self.cache.contains(c.pos) {
                continue;
            }
            if c.on_fire {
                self.apply_point(c.pos, self.rules.on_fire());
                emissions += 1;
            }
            if let Some(lum) = self.rules.creature(&c.kind) {
                self.apply_point(c.pos, lum);
                emissions += 1;
            }
        }

        for v in world.vehicles().iter().filter(|v| v.lights_on) {
            for part in v.external_parts() {
                let p = v.part_position(part);
                if !self.cache.contains(p) {
                    continue;
                }
                if let Some(power) = part.light {
                    if power > self.levels.vehicle_light_min {
                        self.apply_arc(p, v.facing, power);
                        emissions += 1;
                    }
                }
            }
        }

        log::debug!(
            target: "lighting",
            "generate center={} outdoor={:.2} observer={:.2} emissions={}",
            center, outdoor, observer_luminance, emissions
        );
    }

    /// Daylight streaming into an indoor cell from outdoor axis neighbors.
    fn leak_daylight<W: WorldView + ?Sized>(&mut self, world: &W, p: IVec2, outdoor: f32, observer_outside: bool) -> usize {
        let mut emitted = 0;
        for (dir, facing) in IVec2::CARDINALS.iter().zip(INWARD_FACING) {
            let n = p + *dir;
            if !self.cache.contains(n) || !world.is_outside(n) {
                continue;
            }
            // Only when the observer stands outdoors; kept as-is, see DESIGN.md.
            if observer_outside {
                self.ambient.set(p - self.center, outdoor);
            }
            if self.cache.transparency_at(p).is_some_and(|t| t > Levels::SOLID) {
                self.apply_arc(p, facing, outdoor);
                emitted += 1;
            }
        }
        emitted
    }

    /// Terrain, lone-item and field sources at one cell.
    fn apply_static_sources<W: WorldView + ?Sized>(&mut self, world: &W, p: IVec2) -> usize {
        let mut emitted = 0;
        if let Some(lum) = self.rules.single_item(world.items_at(p)) {
            self.apply_point(p, lum);
            emitted += 1;
        }
        if let Some(lum) = world.terrain(p).and_then(|t| self.rules.terrain(t)) {
            self.apply_point(p, lum);
            emitted += 1;
        }
        if let Some(lum) = world.field_at(p).and_then(|f| self.rules.field(f)) {
            self.apply_point(p, lum);
            emitted += 1;
        }
        emitted
    }
}
