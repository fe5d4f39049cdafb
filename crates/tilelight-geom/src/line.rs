//! Integer line walking (Bresenham) shared by light rays and sight checks.

use core::iter::FusedIterator;

use crate::IVec2;

/// Lazy walk of the cells between two points, exclusive of the start and
/// inclusive of the end.
///
/// The dominant axis advances by exactly one per step, so the n-th yielded
/// cell (counting from 1) lies `n` cells from the start along that axis.
/// Walking from a cell to itself yields nothing.
#[derive(Clone, Debug)]
pub struct Line {
    cur: IVec2,
    step: IVec2,
    ax: i32,
    ay: i32,
    err: i32,
    x_major: bool,
    remaining: u32,
}

impl Line {
    pub fn new(start: IVec2, end: IVec2) -> Self {
        let d = end - start;
        let ax = d.x.abs() << 1;
        let ay = d.y.abs() << 1;
        let step = IVec2::new(if start.x < end.x { 1 } else { -1 }, if start.y < end.y { 1 } else { -1 });
        // x leads only when strictly longer; diagonals walk y-major.
        let x_major = ax > ay;
        let err = if x_major { ay - (ax >> 1) } else { ax - (ay >> 1) };
        Self { cur: start, step, ax, ay, err, x_major, remaining: d.chebyshev() as u32 }
    }
}

impl Iterator for Line {
    type Item = IVec2;

    fn next(&mut self) -> Option<IVec2> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        if self.x_major {
            if self.err >= 0 {
                self.cur.y += self.step.y;
                self.err -= self.ax;
            }
            self.cur.x += self.step.x;
            self.err += self.ay;
        } else {
            if self.err >= 0 {
                self.cur.x += self.step.x;
                self.err -= self.ay;
            }
            self.cur.y += self.step.y;
            self.err += self.ax;
        }
        Some(self.cur)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Line {}
impl FusedIterator for Line {}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(a: (i32, i32), b: (i32, i32)) -> Vec<(i32, i32)> {
        Line::new(a.into(), b.into()).map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn axis_aligned_walks() {
        assert_eq!(walk((0, 0), (3, 0)), vec![(1, 0), (2, 0), (3, 0)]);
        assert_eq!(walk((0, 0), (0, -2)), vec![(0, -1), (0, -2)]);
    }

    #[test]
    fn shallow_slope_matches_classic_walk() {
        assert_eq!(walk((0, 0), (3, 1)), vec![(1, 0), (2, 1), (3, 1)]);
        assert_eq!(walk((0, 0), (3, 2)), vec![(1, 1), (2, 1), (3, 2)]);
    }

    #[test]
    fn diagonal_steps_both_axes() {
        assert_eq!(walk((2, 2), (-1, -1)), vec![(1, 1), (0, 0), (-1, -1)]);
    }

    #[test]
    fn self_walk_is_empty() {
        assert_eq!(Line::new(IVec2::new(5, 5), IVec2::new(5, 5)).count(), 0);
    }
}
