use tilelight_geom::IVec2;

use crate::types::{Creature, Field, Vehicle};

/// Read-only access to the world facts the lighting core needs.
///
/// All positions are absolute grid coordinates. Implementations answer for
/// any coordinate, including ones outside their own extent.
pub trait WorldView {
    /// Terrain name at `p`, or `None` off the map.
    fn terrain(&self, p: IVec2) -> Option<&str>;
    fn terrain_transparent(&self, p: IVec2) -> bool;
    fn field_at(&self, p: IVec2) -> Option<&Field>;
    /// Whether a field of this kind and density lets light through untouched.
    fn field_transparent(&self, field: &Field) -> bool;
    fn items_at(&self, p: IVec2) -> &[String];
    /// Open to the sky.
    fn is_outside(&self, p: IVec2) -> bool;
    fn observer(&self) -> IVec2;
    fn creatures(&self) -> &[Creature];
    fn vehicles(&self) -> &[Vehicle];
}
