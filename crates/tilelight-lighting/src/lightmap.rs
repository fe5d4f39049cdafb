use tilelight_geom::IVec2;
use tilelight_world::WorldView;

use crate::config::{Levels, LightingConfig};
use crate::grid::Grid2;
use crate::occlusion::OcclusionCache;
use crate::rules::LightRules;

/// Coarse light level of a visible cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LitLevel {
    Dark,
    Low,
    Lit,
    /// The cell itself hosts a strong light.
    Bright,
}

/// Illumination around one window center: accumulated ambient light and raw
/// source luminance over the visible window, plus the occlusion cache used
/// to propagate it.
///
/// Regenerated wholesale each turn with [`LightMap::generate`]; queries in
/// between read the last generated frame.
#[derive(Clone, Debug)]
pub struct LightMap {
    pub(crate) levels: Levels,
    pub(crate) rules: LightRules,
    pub(crate) center: IVec2,
    pub(crate) ambient: Grid2<f32>,
    pub(crate) raw: Grid2<f32>,
    pub(crate) cache: OcclusionCache,
}

impl LightMap {
    pub fn new(config: &LightingConfig) -> Self {
        let visible = config.window.visible();
        Self {
            levels: config.levels.clone(),
            rules: LightRules::compile(&config.sources, &config.occlusion, &config.levels),
            center: IVec2::ZERO,
            ambient: Grid2::new(visible, 0.0),
            raw: Grid2::new(visible, 0.0),
            cache: OcclusionCache::new(config.window.cache()),
        }
    }

    #[inline]
    pub fn center(&self) -> IVec2 {
        self.center
    }

    pub fn levels(&self) -> &Levels {
        &self.levels
    }

    pub fn occlusion(&self) -> &OcclusionCache {
        &self.cache
    }

    /// Mutable cache access for callers that patch occlusion between frames.
    pub fn occlusion_mut(&mut self) -> &mut OcclusionCache {
        &mut self.cache
    }

    /// Half-extent of the visible window.
    #[inline]
    pub fn visible_extent(&self) -> IVec2 {
        self.ambient.half_extent()
    }

    /// Rebuilds occlusion around `center` and clears both light grids.
    pub fn prepare<W: WorldView + ?Sized>(&mut self, world: &W, center: IVec2) {
        self.cache.rebuild(world, center, &self.rules);
        self.reset(center);
    }

    /// Clears both light grids and recenters them, keeping the cache as is.
    pub fn reset(&mut self, center: IVec2) {
        self.center = center;
        self.ambient.fill(0.0);
        self.raw.fill(0.0);
    }

    /// Accumulated light at an offset from the center; 0 outside the window.
    #[inline]
    pub fn ambient_at(&self, offset: IVec2) -> f32 {
        self.ambient.get(offset).unwrap_or(0.0)
    }

    /// Unattenuated luminance emitted from the cell itself.
    #[inline]
    pub fn raw_source_at(&self, offset: IVec2) -> f32 {
        self.raw.get(offset).unwrap_or(0.0)
    }

    pub fn classify(&self, offset: IVec2) -> LitLevel {
        let (Some(ambient), Some(raw)) = (self.ambient.get(offset), self.raw.get(offset)) else {
            return LitLevel::Dark;
        };
        if raw >= self.levels.source_bright {
            LitLevel::Bright
        } else if ambient >= self.levels.ambient_lit {
            LitLevel::Lit
        } else if ambient >= self.levels.ambient_low {
            LitLevel::Low
        } else {
            LitLevel::Dark
        }
    }

    /// See [`OcclusionCache::has_line_of_sight`]; coordinates are absolute.
    #[inline]
    pub fn has_line_of_sight(&self, from: IVec2, to: IVec2, max_range: Option<u32>) -> bool {
        self.cache.has_line_of_sight(from, to, max_range)
    }

    /// Raw ambient values, row-major over the visible window.
    pub fn ambient_cells(&self) -> &[f32] {
        self.ambient.as_slice()
    }

    pub fn raw_cells(&self) -> &[f32] {
        self.raw.as_slice()
    }
}
