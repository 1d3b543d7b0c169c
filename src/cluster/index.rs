//! Neighbourhood queries for density clustering.
//!
//! Every implementation answers the same question, "which points lie within `eps` of
//! point `i`?", with the same predicate ([`Point::within`], self included), and
//! returns indices in ascending order. Choosing one over another changes running time,
//! never the labeling.

use std::collections::HashMap;

use crate::point::Point;

/// Which neighbourhood index a [`Dbscan`](super::Dbscan) run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndexKind {
    /// Linear scan over every point. O(n) per query, no setup cost.
    #[default]
    BruteForce,
    /// Uniform grid with square cells of side `eps`.
    ///
    /// Close to O(k) per query for k points in the surrounding cells; pays off once
    /// the dataset is more than a few hundred points and reasonably spread out.
    Grid,
}

pub(crate) trait NeighborIndex {
    /// Write the neighbourhood of `idx` (self included, ascending) into `out`.
    fn neighbors(&self, idx: usize, out: &mut Vec<usize>);
}

pub(crate) fn build<'a>(
    kind: IndexKind,
    points: &'a [Point],
    eps: f64,
) -> Box<dyn NeighborIndex + 'a> {
    match kind {
        IndexKind::BruteForce => Box::new(BruteForce::new(points, eps)),
        IndexKind::Grid => Box::new(Grid::new(points, eps)),
    }
}

pub(crate) struct BruteForce<'a> {
    points: &'a [Point],
    eps: f64,
}

impl<'a> BruteForce<'a> {
    pub(crate) fn new(points: &'a [Point], eps: f64) -> Self {
        Self { points, eps }
    }
}

impl NeighborIndex for BruteForce<'_> {
    fn neighbors(&self, idx: usize, out: &mut Vec<usize>) {
        out.clear();
        let p = &self.points[idx];
        out.extend(
            self.points
                .iter()
                .enumerate()
                .filter(|(_, q)| p.within(q, self.eps))
                .map(|(i, _)| i),
        );
    }
}

pub(crate) struct Grid<'a> {
    points: &'a [Point],
    eps: f64,
    cells: HashMap<(i64, i64), Vec<usize>>,
}

impl<'a> Grid<'a> {
    pub(crate) fn new(points: &'a [Point], eps: f64) -> Self {
        let mut grid = Self {
            points,
            eps,
            cells: HashMap::new(),
        };
        for (i, p) in points.iter().enumerate() {
            let key = grid.cell_of(p.x, p.y);
            grid.cells.entry(key).or_default().push(i);
        }
        grid
    }

    // `as` saturates, so far-out coordinates collapse into edge cells; the exact
    // distance check still decides membership.
    #[inline]
    fn cell_of(&self, x: f64, y: f64) -> (i64, i64) {
        (
            (x / self.eps).floor() as i64,
            (y / self.eps).floor() as i64,
        )
    }
}

impl NeighborIndex for Grid<'_> {
    fn neighbors(&self, idx: usize, out: &mut Vec<usize>) {
        out.clear();
        let p = &self.points[idx];

        // Pad by one cell so rounding in the cell computation can never hide a
        // point the exact predicate would accept.
        let (lo_x, lo_y) = self.cell_of(p.x - self.eps, p.y - self.eps);
        let (hi_x, hi_y) = self.cell_of(p.x + self.eps, p.y + self.eps);
        let (lo_x, lo_y) = (lo_x.saturating_sub(1), lo_y.saturating_sub(1));
        let (hi_x, hi_y) = (hi_x.saturating_add(1), hi_y.saturating_add(1));

        let mut take = |members: &[usize]| {
            out.extend(
                members
                    .iter()
                    .copied()
                    .filter(|&j| p.within(&self.points[j], self.eps)),
            );
        };

        // Near the edge of the f64 range the covering span can saturate to billions
        // of cells; walking the occupied cells is then the cheaper way round.
        let width = i128::from(hi_x) - i128::from(lo_x) + 1;
        let height = i128::from(hi_y) - i128::from(lo_y) + 1;
        if width.saturating_mul(height) > self.cells.len() as i128 {
            for (&(cx, cy), members) in &self.cells {
                if (lo_x..=hi_x).contains(&cx) && (lo_y..=hi_y).contains(&cy) {
                    take(members);
                }
            }
        } else {
            for cx in lo_x..=hi_x {
                for cy in lo_y..=hi_y {
                    if let Some(members) = self.cells.get(&(cx, cy)) {
                        take(members);
                    }
                }
            }
        }
        out.sort_unstable();
    }
}
