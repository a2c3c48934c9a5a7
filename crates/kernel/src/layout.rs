use rand::Rng;
use serde::Serialize;
use wumpus_common::Coord;

use crate::rules::{MIN_GRID_SIZE, PIT_COUNT};

/// Errors from building or validating a world layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("grid size {size} is too small (minimum {})", MIN_GRID_SIZE)]
    GridTooSmall { size: usize },
    #[error("{what} at {coord} is outside the {size}x{size} grid")]
    OutOfBounds {
        what: &'static str,
        coord: Coord,
        size: usize,
    },
    #[error("expected {} pits, found {found}", PIT_COUNT)]
    PitCount { found: usize },
    #[error("the wumpus cannot start on the agent's start cell")]
    WumpusAtStart,
    #[error("pit at {pit} overlaps the agent's start or the wumpus")]
    PitCollision { pit: Coord },
    #[error("gold at {gold} overlaps the agent's start, the wumpus, or a pit")]
    GoldCollision { gold: Coord },
}

/// Initial placement of every hazard and the prize.
///
/// The agent always starts on `Coord::ORIGIN`, so it is not stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub size: usize,
    pub wumpus: Coord,
    pub pits: Vec<Coord>,
    pub gold: Coord,
}

impl Layout {
    /// Draw a layout uniformly at random.
    ///
    /// Every location is rejection-sampled from the full grid against the
    /// cells placed before it: the wumpus avoids the start, each pit avoids the
    /// start and the wumpus (but not other pits), and the gold avoids all of
    /// them. On a grid so small that the pits leave no cell for the gold, the
    /// pits are drawn again.
    pub fn random<R: Rng>(size: usize, rng: &mut R) -> Result<Self, LayoutError> {
        if size < MIN_GRID_SIZE {
            return Err(LayoutError::GridTooSmall { size });
        }

        let start = Coord::ORIGIN;
        let wumpus = sample_excluding(size, rng, &[start]);
        loop {
            let pits: Vec<Coord> = (0..PIT_COUNT)
                .map(|_| sample_excluding(size, rng, &[start, wumpus]))
                .collect();

            let mut taken = vec![start, wumpus];
            taken.extend(&pits);
            if !has_free_cell(size, &taken) {
                tracing::trace!(?pits, "pits fill the grid, redrawing");
                continue;
            }

            let gold = sample_excluding(size, rng, &taken);
            let layout = Self {
                size,
                wumpus,
                pits,
                gold,
            };
            tracing::debug!(?layout, "placed hazards");
            return Ok(layout);
        }
    }

    /// Check every placement constraint a hand-written layout must satisfy.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let size = self.size;
        if size < MIN_GRID_SIZE {
            return Err(LayoutError::GridTooSmall { size });
        }
        if self.pits.len() != PIT_COUNT {
            return Err(LayoutError::PitCount {
                found: self.pits.len(),
            });
        }

        let placed = std::iter::once(("wumpus", self.wumpus))
            .chain(self.pits.iter().map(|&p| ("pit", p)))
            .chain(std::iter::once(("gold", self.gold)));
        for (what, coord) in placed {
            if !coord.in_bounds(size) {
                return Err(LayoutError::OutOfBounds { what, coord, size });
            }
        }

        let start = Coord::ORIGIN;
        if self.wumpus == start {
            return Err(LayoutError::WumpusAtStart);
        }
        if let Some(&pit) = self.pits.iter().find(|&&p| p == start || p == self.wumpus) {
            return Err(LayoutError::PitCollision { pit });
        }
        if self.gold == start || self.gold == self.wumpus || self.pits.contains(&self.gold) {
            return Err(LayoutError::GoldCollision { gold: self.gold });
        }
        Ok(())
    }
}

fn sample_excluding<R: Rng>(size: usize, rng: &mut R, exclude: &[Coord]) -> Coord {
    loop {
        let candidate = Coord::new(rng.random_range(0..size), rng.random_range(0..size));
        if !exclude.contains(&candidate) {
            return candidate;
        }
    }
}

/// Whether some cell of the grid is not in `taken`. A cell count that
/// overflows `usize` dwarfs any `taken` list.
fn has_free_cell(size: usize, taken: &[Coord]) -> bool {
    let mut distinct = taken.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    size.checked_mul(size).is_none_or(|cells| distinct.len() < cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fixed() -> Layout {
        Layout {
            size: 4,
            wumpus: Coord::new(0, 1),
            pits: vec![Coord::new(3, 3), Coord::new(3, 2), Coord::new(3, 1)],
            gold: Coord::new(2, 2),
        }
    }

    #[test]
    fn random_layout_respects_exclusions() {
        for seed in 0..500 {
            let mut rng = StdRng::seed_from_u64(seed);
            let layout = Layout::random(4, &mut rng).unwrap();
            assert_eq!(layout.validate(), Ok(()), "seed {seed}: {layout:?}");
            assert_eq!(layout.pits.len(), PIT_COUNT);
        }
    }

    #[test]
    fn random_layout_terminates_on_smallest_grid() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let layout = Layout::random(MIN_GRID_SIZE, &mut rng).unwrap();
            assert_eq!(layout.validate(), Ok(()), "seed {seed}");
        }
    }

    #[test]
    fn random_layout_on_huge_grid() {
        // The cell count of this grid does not fit in a usize.
        let size = 1usize << (usize::BITS / 2);
        let layout = Layout::random(size, &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(layout.validate(), Ok(()));
        assert_eq!(layout.size, size);
    }

    #[test]
    fn free_cell_counts_stacked_pits_once() {
        let start = Coord::ORIGIN;
        let wumpus = Coord::new(0, 1);
        let pit = Coord::new(1, 0);
        assert!(has_free_cell(2, &[start, wumpus, pit, pit, pit]));
        assert!(!has_free_cell(2, &[start, wumpus, pit, Coord::new(1, 1)]));
        assert!(has_free_cell(usize::MAX, &[start, wumpus]));
    }

    #[test]
    fn same_seed_same_layout() {
        let a = Layout::random(6, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = Layout::random(6, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn pits_may_share_a_cell() {
        // A 2x2 grid leaves two cells for three pit draws and needs one of
        // them for the gold, so every accepted layout stacks its pits.
        let duplicated = (0..200).any(|seed| {
            let layout = Layout::random(2, &mut StdRng::seed_from_u64(seed)).unwrap();
            let p = &layout.pits;
            p[0] == p[1] || p[1] == p[2] || p[0] == p[2]
        });
        assert!(duplicated);
    }

    #[test]
    fn grid_too_small_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            Layout::random(1, &mut rng),
            Err(LayoutError::GridTooSmall { size: 1 })
        );
    }

    #[test]
    fn validate_accepts_fixed_layout() {
        assert_eq!(fixed().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_collisions() {
        let mut l = fixed();
        l.wumpus = Coord::ORIGIN;
        assert_eq!(l.validate(), Err(LayoutError::WumpusAtStart));

        let mut l = fixed();
        l.pits[1] = l.wumpus;
        assert_eq!(
            l.validate(),
            Err(LayoutError::PitCollision {
                pit: Coord::new(0, 1)
            })
        );

        let mut l = fixed();
        l.gold = Coord::new(3, 3);
        assert_eq!(
            l.validate(),
            Err(LayoutError::GoldCollision {
                gold: Coord::new(3, 3)
            })
        );
    }

    #[test]
    fn validate_rejects_out_of_bounds_and_pit_count() {
        let mut l = fixed();
        l.gold = Coord::new(4, 0);
        assert!(matches!(
            l.validate(),
            Err(LayoutError::OutOfBounds { what: "gold", .. })
        ));

        let mut l = fixed();
        l.pits.pop();
        assert_eq!(l.validate(), Err(LayoutError::PitCount { found: 2 }));
    }
}
