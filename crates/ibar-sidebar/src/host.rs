// ABOUTME: Abstract editor-host interface the sidebar core drives.
// ABOUTME: Narrow pane, layout, and buffer-edit surface with typed errors.

use ibar_core::Span;
use ibar_layout::GridLayout;

/// Opaque handle to an editor pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaneHandle(pub u64);

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("Unknown pane: {0:?}")]
    UnknownPane(PaneHandle),

    #[error("Pane {0:?} is read-only")]
    ReadOnly(PaneHandle),

    #[error("Offset range [{start}, {end}) is outside the buffer (length {len})")]
    OutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("Editor backend error: {0}")]
    Backend(String),
}

/// The editor-side collaborator.
///
/// All offsets are character offsets, matching what the editor's own buffer
/// API counts. Calls are synchronous: each one completes or fails before
/// returning, and failures propagate to the sidebar's caller without any
/// rollback of earlier calls.
pub trait HostEditor {
    /// Read the window's current pane grid
    fn layout(&self) -> Result<GridLayout, HostError>;

    /// Replace the window's pane grid
    fn set_layout(&mut self, layout: &GridLayout) -> Result<(), HostError>;

    /// Open a new empty pane in the focused cell
    fn create_pane(&mut self, name: &str) -> Result<PaneHandle, HostError>;

    fn close_pane(&mut self, pane: PaneHandle) -> Result<(), HostError>;

    /// Move focus to the cell at `index` in the layout's cell order
    fn focus_pane(&mut self, index: usize) -> Result<(), HostError>;

    /// Index of the currently focused cell
    fn active_pane_index(&self) -> usize;

    /// Width of the pane's viewport in pixels
    fn viewport_width_px(&self, pane: PaneHandle) -> Result<f32, HostError>;

    /// Average character advance in pixels
    fn em_width_px(&self, pane: PaneHandle) -> Result<f32, HostError>;

    fn set_read_only(&mut self, pane: PaneHandle, read_only: bool) -> Result<(), HostError>;

    /// Set a named boolean display option on the pane
    fn set_display_option(
        &mut self,
        pane: PaneHandle,
        option: &str,
        value: bool,
    ) -> Result<(), HostError>;

    /// Flip the window's minimap on or off
    fn toggle_minimap(&mut self) -> Result<(), HostError>;

    /// Insert `text` at `offset`, returning the number of characters inserted
    fn insert_text(
        &mut self,
        pane: PaneHandle,
        offset: usize,
        text: &str,
    ) -> Result<usize, HostError>;

    /// Remove the characters covered by `span`
    fn erase_range(&mut self, pane: PaneHandle, span: Span) -> Result<(), HostError>;
}
