// ABOUTME: Grid layout description and sidebar cell insertion.
// ABOUTME: New cells go at the second-to-last boundary so existing pane indices survive.

use ibar_core::Orientation;
use serde::{Deserialize, Serialize};

/// One rectangular pane, expressed as indices into the boundary vectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub col_start: usize,
    pub row_start: usize,
    pub col_end: usize,
    pub row_end: usize,
}

impl Cell {
    pub fn new(col_start: usize, row_start: usize, col_end: usize, row_end: usize) -> Self {
        Self {
            col_start,
            row_start,
            col_end,
            row_end,
        }
    }
}

/// A window's pane grid: split positions in [0, 1] plus one cell per pane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub cols: Vec<f32>,
    pub rows: Vec<f32>,
    pub cells: Vec<Cell>,
}

impl GridLayout {
    /// Layout of an unsplit window: one cell covering everything
    pub fn single_pane() -> Self {
        Self {
            cols: vec![0.0, 1.0],
            rows: vec![0.0, 1.0],
            cells: vec![Cell::new(0, 0, 1, 1)],
        }
    }

    pub fn pane_count(&self) -> usize {
        self.cells.len()
    }
}

/// Plans the sidebar cell and keeps the pristine layout for teardown.
///
/// The snapshot taken at construction is never touched; `add_cell` mutates
/// only the working copy, so the original can be reapplied verbatim when the
/// sidebar goes away.
#[derive(Debug)]
pub struct LayoutPlanner {
    current: GridLayout,
    original: GridLayout,
    sidebar_index: Option<usize>,
}

impl LayoutPlanner {
    pub fn new(layout: GridLayout) -> Self {
        Self {
            original: layout.clone(),
            current: layout,
            sidebar_index: None,
        }
    }

    /// Insert a sidebar cell and return its index (the previous pane count).
    ///
    /// `width` must lie strictly between the boundaries adjacent to the
    /// insertion point. No validation is performed; an out-of-range value
    /// yields a degenerate pane and is the caller's responsibility.
    pub fn add_cell(&mut self, width: f32, orientation: Orientation) -> usize {
        let index = self.current.cells.len();
        match orientation {
            Orientation::Vertical => {
                let at = self.current.cols.len() - 1;
                self.current.cols.insert(at, width);
                let cols = self.current.cols.len();
                let rows = self.current.rows.len();
                self.current.cells.push(Cell::new(cols - 2, 0, cols - 1, rows - 1));
            }
            Orientation::Horizontal => {
                let at = self.current.rows.len() - 1;
                self.current.rows.insert(at, width);
                let cols = self.current.cols.len();
                let rows = self.current.rows.len();
                self.current.cells.push(Cell::new(0, rows - 2, cols - 1, rows - 1));
            }
        }
        self.sidebar_index = Some(index);
        index
    }

    /// The live layout, suitable for handing to the host's layout-apply call
    pub fn current(&self) -> &GridLayout {
        &self.current
    }

    /// The snapshot captured at construction
    pub fn original(&self) -> &GridLayout {
        &self.original
    }

    /// Cell index of the sidebar, once one has been added
    pub fn sidebar_index(&self) -> Option<usize> {
        self.sidebar_index
    }
}
