//! Cell matrix with the B3/S23 transition and terminal-driven resizing.

use std::fmt;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::fill::FillSource;

/// A single cell of the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub alive: bool,
    /// Consecutive steps this cell has stayed alive. 0 while dead.
    pub alive_for_iterations: u32,
}

/// Age bucket used to pick a display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTier {
    /// Never survived a step (`< 1`).
    Fresh,
    /// `< 10`
    Young,
    /// `< 30`
    Mature,
    Ancient,
}

impl ColorTier {
    pub fn from_age(alive_for_iterations: u32) -> Self {
        match alive_for_iterations {
            0 => ColorTier::Fresh,
            1..=9 => ColorTier::Young,
            10..=29 => ColorTier::Mature,
            _ => ColorTier::Ancient,
        }
    }
}

impl Cell {
    fn fresh<F: FillSource + ?Sized>(fill: &mut F) -> Self {
        Self {
            alive: fill.next_alive(),
            alive_for_iterations: 0,
        }
    }

    pub fn color_tier(&self) -> ColorTier {
        ColorTier::from_age(self.alive_for_iterations)
    }

    #[inline]
    fn advance(&mut self, neighbors: u8) {
        match (self.alive, neighbors) {
            (true, 2) | (true, 3) => {
                self.alive_for_iterations = self.alive_for_iterations.saturating_add(1);
            }
            (true, _) => {
                self.alive = false;
                self.alive_for_iterations = 0;
            }
            (false, 3) => {
                self.alive = true;
                self.alive_for_iterations = self.alive_for_iterations.saturating_add(1);
            }
            _ => {}
        }
    }
}

/// Old and new `(height, width)` of a grid that actually changed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resize {
    pub from: (usize, usize),
    pub to: (usize, usize),
}

impl fmt::Display for Resize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}x{})->({}x{})",
            self.from.0, self.from.1, self.to.0, self.to.1
        )
    }
}

/// Addressable `(height, width)` for a terminal of `rows` x `cols`.
///
/// Double-height packs two cells into each terminal row; otherwise every
/// cell takes two columns.
pub fn grid_dimensions(rows: u16, cols: u16, double_height: bool) -> (usize, usize) {
    if double_height {
        (rows as usize * 2, cols as usize)
    } else {
        (rows as usize, cols as usize / 2)
    }
}

/// Row-major cell matrix, indexed `row * width + col`.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    cells: Vec<Cell>,
    height: usize,
    width: usize,
    // Alive bits of the previous generation, reused across steps.
    snapshot: Vec<bool>,
}

impl Grid {
    /// Creates a grid with every cell drawn from `fill`.
    pub fn new<F: FillSource + ?Sized>(height: usize, width: usize, fill: &mut F) -> Self {
        let cells = (0..height * width).map(|_| Cell::fresh(fill)).collect();
        Self {
            cells,
            height,
            width,
            snapshot: Vec::new(),
        }
    }

    /// Creates a dead grid with the given cells alive. Out-of-range positions are ignored.
    pub fn with_live_cells(height: usize, width: usize, live: &[(usize, usize)]) -> Self {
        let mut cells = vec![Cell::default(); height * width];
        for &(row, col) in live {
            if row < height && col < width {
                cells[row * width + col].alive = true;
            }
        }
        Self {
            cells,
            height,
            width,
            snapshot: Vec::new(),
        }
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.height && col < self.width {
            Some(&self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_some_and(|c| c.alive)
    }

    /// Cells of one row, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.height()`. Use [`Grid::cell`] for checked access.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.alive).count()
    }

    /// Applies one generation of Conway's rules to every cell.
    ///
    /// Neighbors are read from a snapshot of the previous generation, so the
    /// result does not depend on update order. Edges are hard walls.
    pub fn step(&mut self) {
        if self.height == 0 || self.width == 0 {
            return;
        }
        self.snapshot.clear();
        self.snapshot.extend(self.cells.iter().map(|c| c.alive));

        let (height, width) = (self.height, self.width);
        let prev = &self.snapshot;

        #[cfg(feature = "parallel")]
        self.cells
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(row, cells)| step_row(prev, height, width, row, cells));

        #[cfg(not(feature = "parallel"))]
        self.cells
            .chunks_mut(width)
            .enumerate()
            .for_each(|(row, cells)| step_row(prev, height, width, row, cells));
    }

    /// Resizes to `new_height` x `new_width`, keeping overlapping cells.
    ///
    /// Height is adjusted first (new rows use the old width), then width.
    /// Every exposed cell is freshly drawn from `fill` with age 0. Returns
    /// `None` without touching `fill` when the size is unchanged.
    pub fn resize<F: FillSource + ?Sized>(
        &mut self,
        new_height: usize,
        new_width: usize,
        fill: &mut F,
    ) -> Option<Resize> {
        let from = (self.height, self.width);
        if from == (new_height, new_width) {
            return None;
        }

        let width = self.width;
        if new_height > self.height {
            let added = (new_height - self.height) * width;
            self.cells.reserve(added);
            for _ in 0..added {
                self.cells.push(Cell::fresh(fill));
            }
        } else {
            self.cells.truncate(new_height * width);
        }
        self.height = new_height;

        if new_width != width {
            let keep = width.min(new_width);
            let mut cells = Vec::with_capacity(new_height * new_width);
            for row in 0..new_height {
                let start = row * width;
                cells.extend_from_slice(&self.cells[start..start + keep]);
                for _ in keep..new_width {
                    cells.push(Cell::fresh(fill));
                }
            }
            self.cells = cells;
            self.width = new_width;
        }

        Some(Resize {
            from,
            to: (new_height, new_width),
        })
    }

    /// Re-draws every cell from `fill` and clears all ages.
    pub fn randomize<F: FillSource + ?Sized>(&mut self, fill: &mut F) {
        for cell in &mut self.cells {
            *cell = Cell::fresh(fill);
        }
    }
}

fn step_row(prev: &[bool], height: usize, width: usize, row: usize, cells: &mut [Cell]) {
    for (col, cell) in cells.iter_mut().enumerate() {
        cell.advance(live_neighbors(prev, height, width, row, col));
    }
}

#[inline]
fn live_neighbors(prev: &[bool], height: usize, width: usize, row: usize, col: usize) -> u8 {
    let top = row.saturating_sub(1);
    let bottom = (row + 1).min(height - 1);
    let left = col.saturating_sub(1);
    let right = (col + 1).min(width - 1);

    let mut count = 0;
    for r in top..=bottom {
        for c in left..=right {
            if (r != row || c != col) && prev[r * width + c] {
                count += 1;
            }
        }
    }
    count
}
