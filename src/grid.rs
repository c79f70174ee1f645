//! A dense square grid sized at runtime.
//!
//! The type is `no_std` friendly (it only needs `alloc`). Cells are stored
//! row-major in a single `Vec`, and every accessor is bounds-checked so that
//! callers can turn stray coordinates into errors instead of panics.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use thiserror::Error;

/// Errors returned by grid operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Row or column index is out of bounds [0..size).
    #[error("IndexOutOfBounds: row={row}, col={col}")]
    IndexOutOfBounds { row: usize, col: usize },
}

/// Relative offsets of the eight surrounding cells.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A `size×size` grid of `T`.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `value`.
    pub fn filled(size: usize, value: T) -> Self {
        Grid {
            size,
            cells: vec![value; size * size],
        }
    }
}

impl<T: Clone + Default> Grid<T> {
    /// Create a grid with every cell set to `T::default()`.
    pub fn new(size: usize) -> Self {
        Self::filled(size, T::default())
    }
}

impl<T> Grid<T> {
    /// Create a grid by calling `f(row, col)` for every cell in row-major order.
    pub fn from_fn<F>(size: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let cells = (0..size * size).map(|i| f(i / size, i % size)).collect();
        Grid { size, cells }
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` when (row, col) lies inside the grid.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Gets the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<&T, GridError> {
        let idx = self.index_of(row, col)?;
        Ok(&self.cells[idx])
    }

    /// Mutable access to the cell at (row, col).
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, GridError> {
        let idx = self.index_of(row, col)?;
        Ok(&mut self.cells[idx])
    }

    /// Overwrites the cell at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), GridError> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    #[inline]
    fn index_of(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if self.contains(row, col) {
            Ok(row * self.size + col)
        } else {
            Err(GridError::IndexOutOfBounds { row, col })
        }
    }

    /// Iterator over the in-bounds neighbours of (row, col), excluding the
    /// cell itself.
    pub fn neighbors(&self, row: usize, col: usize) -> Neighbors {
        Neighbors {
            row,
            col,
            size: self.size,
            idx: 0,
        }
    }

    /// Iterator over `((row, col), &cell)` in row-major order.
    pub fn enumerate(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i / size, i % size), cell))
    }

    /// Iterator over the cells in row-major order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// Iterator over whole rows, top to bottom.
    pub fn rows(&self) -> core::slice::Chunks<'_, T> {
        self.cells.chunks(self.size.max(1))
    }

    /// Combine two same-sized grids cell by cell.
    pub fn zip_map<U, V, F>(&self, other: &Grid<U>, mut f: F) -> Grid<V>
    where
        F: FnMut((usize, usize), &T, &U) -> V,
    {
        debug_assert_eq!(self.size, other.size);
        let size = self.size;
        let cells = self
            .cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .map(|(i, (a, b))| f((i / size, i % size), a, b))
            .collect();
        Grid { size, cells }
    }
}

impl Grid<bool> {
    /// Number of `true` cells.
    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|&&b| b).count()
    }

    /// Iterator over the positions holding `true`.
    pub fn iter_set(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.enumerate()
            .filter_map(|(pos, &set)| if set { Some(pos) } else { None })
    }
}

impl<T: fmt::Debug> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for row in self.rows() {
            list.entry(&row);
        }
        list.finish()
    }
}

impl fmt::Display for Grid<bool> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.size {
            for c in 0..self.size {
                let bit = if self.cells[r * self.size + c] {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            if r + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the up-to-eight neighbours of a cell, clipped at the edges.
#[derive(Debug, Clone, Copy)]
pub struct Neighbors {
    row: usize,
    col: usize,
    size: usize,
    idx: usize,
}

impl Iterator for Neighbors {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < NEIGHBOR_OFFSETS.len() {
            let (dr, dc) = NEIGHBOR_OFFSETS[self.idx];
            self.idx += 1;
            let (Some(r), Some(c)) = (
                self.row.checked_add_signed(dr),
                self.col.checked_add_signed(dc),
            ) else {
                continue;
            };
            if r < self.size && c < self.size {
                return Some((r, c));
            }
        }
        None
    }
}
