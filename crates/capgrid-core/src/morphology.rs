//! Morphology - fixed-size character shape mask
//!
//! A [`Morphology`] is the atomic unit of comparison and training: a 10x8
//! boolean mask where `true` marks an ink pixel. Each row is packed into a
//! `u8` bitmask, MSB first, so column 0 lives in bit 7. Equality is exact
//! structural equality over all 80 cells; there is no fuzzy matching
//! anywhere in the system.

use crate::error::{Error, Result};

/// Mask height in cells.
pub const MORPH_HEIGHT: usize = 10;

/// Mask width in cells.
pub const MORPH_WIDTH: usize = 8;

/// Total number of cells in a mask.
pub const MORPH_CELLS: usize = MORPH_HEIGHT * MORPH_WIDTH;

/// Fixed 10x8 boolean character mask.
///
/// # Examples
///
/// ```
/// use capgrid_core::Morphology;
///
/// let mut morph = Morphology::default();
/// morph.set(0, 0, true).unwrap();
/// assert!(morph.get(0, 0).unwrap());
/// assert_eq!(morph.ink_count(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Morphology {
    /// One bitmask per row, MSB = column 0.
    rows: [u8; MORPH_HEIGHT],
}

impl Morphology {
    /// Create a mask from raw row bitmasks (MSB = column 0).
    pub fn from_rows(rows: [u8; MORPH_HEIGHT]) -> Self {
        Self { rows }
    }

    /// Create a mask by evaluating `f(row, col)` for every cell.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut rows = [0u8; MORPH_HEIGHT];
        for (row, bits) in rows.iter_mut().enumerate() {
            for col in 0..MORPH_WIDTH {
                if f(row, col) {
                    *bits |= 0x80 >> col;
                }
            }
        }
        Self { rows }
    }

    /// Cell value at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CellOutOfBounds`] outside the fixed 10x8 mask.
    pub fn get(&self, row: usize, col: usize) -> Result<bool> {
        if row >= MORPH_HEIGHT || col >= MORPH_WIDTH {
            return Err(Error::CellOutOfBounds { row, col });
        }
        Ok(self.rows[row] & (0x80 >> col) != 0)
    }

    /// Set the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CellOutOfBounds`] outside the fixed 10x8 mask.
    pub fn set(&mut self, row: usize, col: usize, on: bool) -> Result<()> {
        if row >= MORPH_HEIGHT || col >= MORPH_WIDTH {
            return Err(Error::CellOutOfBounds { row, col });
        }
        if on {
            self.rows[row] |= 0x80 >> col;
        } else {
            self.rows[row] &= !(0x80 >> col);
        }
        Ok(())
    }

    /// The raw row bitmasks.
    pub fn rows(&self) -> &[u8; MORPH_HEIGHT] {
        &self.rows
    }

    /// Number of ink cells.
    pub fn ink_count(&self) -> u32 {
        self.rows.iter().map(|r| r.count_ones()).sum()
    }

    /// Iterate over all 80 cells in row-major order.
    ///
    /// This is the flattening used to build classifier feature vectors:
    /// cell `(row, col)` appears at index `row * 8 + col`.
    pub fn cells(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows
            .iter()
            .flat_map(|bits| (0..MORPH_WIDTH).map(move |col| bits & (0x80 >> col) != 0))
    }
}

impl std::fmt::Display for Morphology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bits in &self.rows {
            for col in 0..MORPH_WIDTH {
                let ch = if bits & (0x80 >> col) != 0 { '#' } else { '.' };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_blank() {
        let morph = Morphology::default();
        assert_eq!(morph.ink_count(), 0);
        assert!(morph.cells().all(|cell| !cell));
    }

    #[test]
    fn test_set_get_msb_packing() {
        let mut morph = Morphology::default();
        morph.set(3, 0, true).unwrap();
        morph.set(3, 7, true).unwrap();
        // Column 0 in the MSB, column 7 in the LSB
        assert_eq!(morph.rows()[3], 0b1000_0001);
        assert!(morph.get(3, 0).unwrap());
        assert!(morph.get(3, 7).unwrap());
        assert!(!morph.get(3, 4).unwrap());

        morph.set(3, 0, false).unwrap();
        assert_eq!(morph.rows()[3], 0b0000_0001);
    }

    #[test]
    fn test_cell_out_of_bounds() {
        let mut morph = Morphology::default();
        assert!(morph.get(10, 0).is_err());
        assert!(morph.get(0, 8).is_err());
        assert!(morph.set(10, 0, true).is_err());
    }

    #[test]
    fn test_one_cell_difference_is_distinct() {
        // Exact equality: a single differing cell separates two masks
        let a = Morphology::from_fn(|row, col| (row + col) % 2 == 0);
        let mut b = a;
        b.set(9, 7, !a.get(9, 7).unwrap()).unwrap();
        assert_ne!(a, b);
        b.set(9, 7, a.get(9, 7).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_fn_matches_cells_order() {
        let morph = Morphology::from_fn(|row, col| row == 2 && col == 5);
        let cells: Vec<bool> = morph.cells().collect();
        assert_eq!(cells.len(), MORPH_CELLS);
        assert!(cells[2 * MORPH_WIDTH + 5]);
        assert_eq!(cells.iter().filter(|c| **c).count(), 1);
    }

    #[test]
    fn test_display_renders_grid() {
        let mut morph = Morphology::default();
        morph.set(0, 1, true).unwrap();
        let text = morph.to_string();
        let first = text.lines().next().unwrap();
        assert_eq!(first, ".#......");
        assert_eq!(text.lines().count(), MORPH_HEIGHT);
    }
}
