// ABOUTME: In-memory editor host for tests and headless runs.
// ABOUTME: Simulates panes, string buffers, display options, and focus.

use std::collections::HashMap;

use ibar_core::Span;
use ibar_layout::GridLayout;

use crate::host::{HostEditor, HostError, PaneHandle};

#[derive(Debug)]
struct MemoryPane {
    name: String,
    buffer: String,
    read_only: bool,
    options: HashMap<String, bool>,
}

/// An editor window that exists only in memory.
///
/// Buffers are plain strings addressed by character offset, so multi-byte
/// text behaves the same as in a real editor. Edits against a read-only pane
/// are rejected, not silently dropped.
#[derive(Debug)]
pub struct MemoryHost {
    layout: GridLayout,
    panes: HashMap<PaneHandle, MemoryPane>,
    next_pane: u64,
    focused: usize,
    minimap: bool,
    viewport_px: f32,
    em_px: f32,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::with_metrics(640.0, 8.0)
    }

    /// Host with explicit viewport and character metrics; these determine
    /// the character width the sidebar computes at creation
    pub fn with_metrics(viewport_px: f32, em_px: f32) -> Self {
        Self {
            layout: GridLayout::single_pane(),
            panes: HashMap::new(),
            next_pane: 0,
            focused: 0,
            minimap: true,
            viewport_px,
            em_px,
        }
    }

    /// Buffer contents of `pane`, if it is still open
    pub fn pane_text(&self, pane: PaneHandle) -> Option<&str> {
        self.panes.get(&pane).map(|p| p.buffer.as_str())
    }

    pub fn pane_name(&self, pane: PaneHandle) -> Option<&str> {
        self.panes.get(&pane).map(|p| p.name.as_str())
    }

    pub fn pane_is_open(&self, pane: PaneHandle) -> bool {
        self.panes.contains_key(&pane)
    }

    pub fn pane_is_read_only(&self, pane: PaneHandle) -> bool {
        self.panes.get(&pane).is_some_and(|p| p.read_only)
    }

    /// Value of a display option previously set on the pane
    pub fn pane_option(&self, pane: PaneHandle, option: &str) -> Option<bool> {
        self.panes.get(&pane)?.options.get(option).copied()
    }

    pub fn open_pane_count(&self) -> usize {
        self.panes.len()
    }

    pub fn minimap_visible(&self) -> bool {
        self.minimap
    }

    fn pane(&self, pane: PaneHandle) -> Result<&MemoryPane, HostError> {
        self.panes.get(&pane).ok_or(HostError::UnknownPane(pane))
    }

    fn pane_mut(&mut self, pane: PaneHandle) -> Result<&mut MemoryPane, HostError> {
        self.panes.get_mut(&pane).ok_or(HostError::UnknownPane(pane))
    }
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte index of character number `offset`, or None past the end.
/// The one-past-the-end position is valid, like any insertion point.
fn byte_index(s: &str, offset: usize) -> Option<usize> {
    s.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .nth(offset)
}

impl HostEditor for MemoryHost {
    fn layout(&self) -> Result<GridLayout, HostError> {
        Ok(self.layout.clone())
    }

    fn set_layout(&mut self, layout: &GridLayout) -> Result<(), HostError> {
        self.layout = layout.clone();
        Ok(())
    }

    fn create_pane(&mut self, name: &str) -> Result<PaneHandle, HostError> {
        let handle = PaneHandle(self.next_pane);
        self.next_pane += 1;
        self.panes.insert(
            handle,
            MemoryPane {
                name: name.to_string(),
                buffer: String::new(),
                read_only: false,
                options: HashMap::new(),
            },
        );
        tracing::debug!("Opened pane {:?} ({})", handle, name);
        Ok(handle)
    }

    fn close_pane(&mut self, pane: PaneHandle) -> Result<(), HostError> {
        self.panes
            .remove(&pane)
            .map(|_| ())
            .ok_or(HostError::UnknownPane(pane))
    }

    fn focus_pane(&mut self, index: usize) -> Result<(), HostError> {
        self.focused = index;
        Ok(())
    }

    fn active_pane_index(&self) -> usize {
        self.focused
    }

    fn viewport_width_px(&self, pane: PaneHandle) -> Result<f32, HostError> {
        self.pane(pane)?;
        Ok(self.viewport_px)
    }

    fn em_width_px(&self, pane: PaneHandle) -> Result<f32, HostError> {
        self.pane(pane)?;
        Ok(self.em_px)
    }

    fn set_read_only(&mut self, pane: PaneHandle, read_only: bool) -> Result<(), HostError> {
        self.pane_mut(pane)?.read_only = read_only;
        Ok(())
    }

    fn set_display_option(
        &mut self,
        pane: PaneHandle,
        option: &str,
        value: bool,
    ) -> Result<(), HostError> {
        self.pane_mut(pane)?.options.insert(option.to_string(), value);
        Ok(())
    }

    fn toggle_minimap(&mut self) -> Result<(), HostError> {
        self.minimap = !self.minimap;
        Ok(())
    }

    fn insert_text(
        &mut self,
        pane: PaneHandle,
        offset: usize,
        text: &str,
    ) -> Result<usize, HostError> {
        let target = self.pane_mut(pane)?;
        if target.read_only {
            return Err(HostError::ReadOnly(pane));
        }
        let len = target.buffer.chars().count();
        let at = byte_index(&target.buffer, offset).ok_or(HostError::OutOfBounds {
            start: offset,
            end: offset,
            len,
        })?;
        target.buffer.insert_str(at, text);
        Ok(text.chars().count())
    }

    fn erase_range(&mut self, pane: PaneHandle, span: Span) -> Result<(), HostError> {
        let target = self.pane_mut(pane)?;
        if target.read_only {
            return Err(HostError::ReadOnly(pane));
        }
        let len = target.buffer.chars().count();
        let out_of_bounds = HostError::OutOfBounds {
            start: span.start,
            end: span.end,
            len,
        };
        if span.start > span.end {
            return Err(out_of_bounds);
        }
        match (
            byte_index(&target.buffer, span.start),
            byte_index(&target.buffer, span.end),
        ) {
            (Some(from), Some(to)) => {
                target.buffer.replace_range(from..to, "");
                Ok(())
            }
            _ => Err(out_of_bounds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_erase_use_character_offsets() {
        let mut host = MemoryHost::new();
        let pane = host.create_pane("test").unwrap();

        // Multi-byte characters count as one offset each
        assert_eq!(host.insert_text(pane, 0, "héllo wörld").unwrap(), 11);
        host.insert_text(pane, 5, "!").unwrap();
        assert_eq!(host.pane_text(pane), Some("héllo! wörld"));

        host.erase_range(pane, Span::new(5, 6)).unwrap();
        assert_eq!(host.pane_text(pane), Some("héllo wörld"));
    }

    #[test]
    fn read_only_pane_rejects_edits() {
        let mut host = MemoryHost::new();
        let pane = host.create_pane("test").unwrap();
        host.set_read_only(pane, true).unwrap();

        assert!(matches!(
            host.insert_text(pane, 0, "x"),
            Err(HostError::ReadOnly(_))
        ));
        assert!(matches!(
            host.erase_range(pane, Span::new(0, 0)),
            Err(HostError::ReadOnly(_))
        ));
    }

    #[test]
    fn erase_past_end_is_out_of_bounds() {
        let mut host = MemoryHost::new();
        let pane = host.create_pane("test").unwrap();
        host.insert_text(pane, 0, "abc").unwrap();

        assert!(matches!(
            host.erase_range(pane, Span::new(0, 4)),
            Err(HostError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn closed_pane_is_unknown() {
        let mut host = MemoryHost::new();
        let pane = host.create_pane("test").unwrap();
        host.close_pane(pane).unwrap();

        assert!(!host.pane_is_open(pane));
        assert!(matches!(
            host.insert_text(pane, 0, "x"),
            Err(HostError::UnknownPane(_))
        ));
    }
}
