// ABOUTME: Pane grid planning for the sidebar.
// ABOUTME: Adds a dedicated cell and preserves the original layout for restoration.

mod grid;

pub use grid::{Cell, GridLayout, LayoutPlanner};
