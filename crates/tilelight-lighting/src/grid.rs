use tilelight_geom::IVec2;

/// Square-ish window of cells centered on the origin, stored row-major.
///
/// Coordinates are relative to the center and cover `-half..=half` on each
/// axis. Reads and writes outside that range return `None` / `false`.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid2<T> {
    half: IVec2,
    width: usize,
    cells: Vec<T>,
}

impl<T: Copy> Grid2<T> {
    pub fn new(half: IVec2, fill: T) -> Self {
        let half = IVec2::new(half.x.max(0), half.y.max(0));
        let width = (2 * half.x + 1) as usize;
        let height = (2 * half.y + 1) as usize;
        Self { half, width, cells: vec![fill; width * height] }
    }

    #[inline]
    pub fn half_extent(&self) -> IVec2 {
        self.half
    }

    #[inline]
    pub fn contains(&self, rel: IVec2) -> bool {
        rel.x.abs() <= self.half.x && rel.y.abs() <= self.half.y
    }

    #[inline]
    fn idx(&self, rel: IVec2) -> Option<usize> {
        if !self.contains(rel) {
            return None;
        }
        let x = (rel.x + self.half.x) as usize;
        let y = (rel.y + self.half.y) as usize;
        Some(y * self.width + x)
    }

    #[inline]
    pub fn get(&self, rel: IVec2) -> Option<T> {
        self.idx(rel).map(|i| self.cells[i])
    }

    #[inline]
    pub fn get_mut(&mut self, rel: IVec2) -> Option<&mut T> {
        let i = self.idx(rel)?;
        self.cells.get_mut(i)
    }

    /// Returns whether `rel` was inside the grid.
    #[inline]
    pub fn set(&mut self, rel: IVec2, v: T) -> bool {
        match self.get_mut(rel) {
            Some(c) => {
                *c = v;
                true
            }
            None => false,
        }
    }

    pub fn fill(&mut self, v: T) {
        self.cells.fill(v);
    }

    /// All relative coordinates, north row first.
    pub fn coords(&self) -> impl Iterator<Item = IVec2> + use<T> {
        let h = self.half;
        (-h.y..=h.y).flat_map(move |y| (-h.x..=h.x).map(move |x| IVec2::new(x, y)))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }
}
