//! Cross-product enumeration of the parameter grid.

use crate::schema::ParameterGrid;

/// One point of the grid, tagged with its position in enumeration order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Combination {
    pub index: usize,
    pub base_modulus: f64,
    pub surface_modulus: f64,
    pub surface_thickness: f64,
}

/// Visits base modulus (outer) -> surface modulus -> surface thickness (inner).
pub struct Combinations<'a> {
    grid: &'a ParameterGrid,
    next: usize,
    total: usize,
}

impl<'a> Combinations<'a> {
    pub(crate) fn new(grid: &'a ParameterGrid) -> Self {
        Self {
            grid,
            next: 0,
            total: grid.combination_count(),
        }
    }
}

impl Iterator for Combinations<'_> {
    type Item = Combination;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }
        let index = self.next;
        self.next += 1;

        let n_thk = self.grid.surface_thicknesses.len();
        let n_surf = self.grid.surface_moduli.len();
        let thk = index % n_thk;
        let surf = (index / n_thk) % n_surf;
        let base = index / (n_thk * n_surf);

        Some(Combination {
            index,
            base_modulus: self.grid.base_moduli[base],
            surface_modulus: self.grid.surface_moduli[surf],
            surface_thickness: self.grid.surface_thicknesses[thk],
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Combinations<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> ParameterGrid {
        ParameterGrid {
            surface_moduli: vec![2000.0, 3000.0],
            base_moduli: vec![300.0, 500.0],
            surface_thicknesses: vec![40.0, 50.0, 60.0],
        }
    }

    #[test]
    fn order_is_base_then_surface_then_thickness() {
        let grid = grid();
        let combos: Vec<_> = grid
            .combinations()
            .map(|c| (c.base_modulus, c.surface_modulus, c.surface_thickness))
            .collect();
        assert_eq!(combos.len(), 12);
        assert_eq!(combos[0], (300.0, 2000.0, 40.0));
        assert_eq!(combos[1], (300.0, 2000.0, 50.0));
        assert_eq!(combos[3], (300.0, 3000.0, 40.0));
        assert_eq!(combos[6], (500.0, 2000.0, 40.0));
        assert_eq!(combos[11], (500.0, 3000.0, 60.0));
    }

    #[test]
    fn every_combination_visited_once() {
        let grid = grid();
        let mut seen = Vec::new();
        for c in grid.combinations() {
            let key = (c.base_modulus, c.surface_modulus, c.surface_thickness);
            assert!(!seen.contains(&key), "duplicate combination {key:?}");
            seen.push(key);
        }
        assert_eq!(seen.len(), grid.combination_count());
        for (i, c) in grid.combinations().enumerate() {
            assert_eq!(c.index, i);
        }
    }

    #[test]
    fn empty_set_yields_nothing() {
        let grid = ParameterGrid {
            surface_moduli: vec![],
            base_moduli: vec![500.0],
            surface_thicknesses: vec![40.0],
        };
        assert_eq!(grid.combinations().count(), 0);
        assert_eq!(grid.combinations().len(), 0);
    }
}
