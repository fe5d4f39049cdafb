//! Compiled lookup tables built from [`SourceTable`] and [`OcclusionTable`].

use hashbrown::HashMap;
use tilelight_world::Field;

use crate::config::{Levels, OcclusionMode, OcclusionTable, SourceTable};

#[derive(Clone, Debug, Default)]
struct FieldLight {
    exact: Vec<(u8, f32)>,
    fallback: Option<f32>,
}

/// Light-emission rules keyed by category and kind, with luminances resolved
/// against the configured thresholds.
#[derive(Clone, Debug, Default)]
pub struct LightRules {
    terrain: HashMap<String, f32>,
    items: HashMap<String, f32>,
    fields: HashMap<String, FieldLight>,
    creatures: HashMap<String, f32>,
    on_fire: f32,
    occlusion: HashMap<String, (OcclusionMode, f32)>,
}

impl LightRules {
    pub fn compile(sources: &SourceTable, occlusion: &OcclusionTable, levels: &Levels) -> Self {
        let mut rules = LightRules {
            on_fire: levels.resolve(sources.on_fire),
            ..Default::default()
        };
        for s in &sources.terrain {
            rules.terrain.insert(s.name.clone(), levels.resolve(s.luminance));
        }
        for s in &sources.items {
            rules.items.insert(s.name.clone(), levels.resolve(s.luminance));
        }
        for s in &sources.creatures {
            rules.creatures.insert(s.name.clone(), levels.resolve(s.luminance));
        }
        for f in &sources.fields {
            let entry = rules.fields.entry(f.kind.clone()).or_default();
            let lum = levels.resolve(f.luminance);
            match f.density {
                Some(d) => match entry.exact.iter_mut().find(|(ed, _)| *ed == d) {
                    Some(slot) => slot.1 = lum,
                    None => entry.exact.push((d, lum)),
                },
                None => entry.fallback = Some(lum),
            }
        }
        for r in &occlusion.fields {
            rules.occlusion.insert(r.kind.clone(), (r.mode, r.factor));
        }
        rules
    }

    #[inline]
    pub fn terrain(&self, name: &str) -> Option<f32> {
        self.terrain.get(name).copied()
    }

    /// Only a lone item on its cell counts.
    pub fn single_item(&self, items: &[String]) -> Option<f32> {
        match items {
            [only] => self.items.get(only.as_str()).copied(),
            _ => None,
        }
    }

    pub fn field(&self, f: &Field) -> Option<f32> {
        let rule = self.fields.get(f.kind.as_str())?;
        rule.exact
            .iter()
            .find(|(d, _)| *d == f.density)
            .map(|(_, l)| *l)
            .or(rule.fallback)
    }

    #[inline]
    pub fn creature(&self, kind: &str) -> Option<f32> {
        self.creatures.get(kind).copied()
    }

    #[inline]
    pub fn on_fire(&self) -> f32 {
        self.on_fire
    }

    /// New running transparency after passing a non-transparent field.
    pub fn attenuate_field(&self, f: &Field, transparency: f32) -> f32 {
        match self.occlusion.get(f.kind.as_str()) {
            Some((OcclusionMode::Graded, factor)) => match f.density {
                d if d >= 3 => Levels::SOLID,
                2 => transparency * factor,
                _ => transparency,
            },
            Some((OcclusionMode::Scale, factor)) => transparency * factor,
            None => Levels::SOLID,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LightingConfig;

    fn rules() -> LightRules {
        let cfg = LightingConfig::default();
        LightRules::compile(&cfg.sources, &cfg.occlusion, &cfg.levels)
    }

    #[test]
    fn field_density_falls_back() {
        let r = rules();
        assert_eq!(r.field(&Field::new("fire", 3)), Some(160.0));
        assert_eq!(r.field(&Field::new("fire", 2)), Some(60.0));
        assert_eq!(r.field(&Field::new("fire", 1)), Some(16.0));
        assert_eq!(r.field(&Field::new("electricity", 1)), Some(0.1));
        assert_eq!(r.field(&Field::new("smoke", 3)), None);
    }

    #[test]
    fn items_need_to_be_alone() {
        let r = rules();
        let one = vec!["candle_lit".to_string()];
        let two = vec!["candle_lit".to_string(), "rock".to_string()];
        assert_eq!(r.single_item(&one), Some(4.0));
        assert_eq!(r.single_item(&two), None);
        assert_eq!(r.single_item(&[]), None);
    }

    #[test]
    fn thresholds_resolve_by_name() {
        let r = rules();
        assert_eq!(r.creature("flaming_eye"), Some(10.0));
        assert_eq!(r.creature("manhack"), Some(0.1));
        assert_eq!(r.creature("zombie"), None);
        assert_eq!(r.on_fire(), 3.0);
    }

    #[test]
    fn field_attenuation_modes() {
        let r = rules();
        assert_eq!(r.attenuate_field(&Field::new("smoke", 3), 1.0), 0.0);
        assert_eq!(r.attenuate_field(&Field::new("smoke", 2), 1.0), 0.5);
        assert_eq!(r.attenuate_field(&Field::new("tear_gas", 1), 0.8), 0.8);
        assert_eq!(r.attenuate_field(&Field::new("nuke_gas", 1), 1.0), 0.5);
        assert_eq!(r.attenuate_field(&Field::new("acid", 1), 1.0), 0.0);
    }
}
