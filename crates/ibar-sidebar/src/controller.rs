// ABOUTME: Sidebar lifecycle orchestration over the host editor.
// ABOUTME: Creates the pane, formats and tracks text blocks, restores the layout.

use ibar_core::{Config, Orientation, Span};
use ibar_layout::LayoutPlanner;
use ibar_ledger::{EntryId, RegionLedger};

use crate::host::{HostEditor, HostError, PaneHandle};

/// Pane display options forced off so the sidebar reads as plain text
const DISABLED_OPTIONS: [&str; 3] = ["line_numbers", "gutter", "draw_indent_guides"];

#[derive(Debug, thiserror::Error)]
pub enum SidebarError {
    #[error("Host editor call failed: {0}")]
    Host(#[from] HostError),

    #[error("Sidebar has not been created yet")]
    NotCreated,

    #[error("Sidebar already exists")]
    AlreadyCreated,

    #[error("Sidebar has been destroyed")]
    Destroyed,
}

#[derive(Debug)]
enum State {
    Uncreated,
    Created { pane: PaneHandle, chars_wide: usize },
    Destroyed,
}

/// Owns the sidebar's grid planning, region bookkeeping, and host calls.
///
/// Lifecycle is `create`, then any number of `add`/`delete` cycles, then
/// `destroy`. The window layout captured at construction is reapplied
/// verbatim on destroy. Host failures propagate unchanged and nothing is
/// rolled back; after a partial failure the caller's recourse is `destroy`.
pub struct SidebarController<H: HostEditor> {
    host: H,
    planner: LayoutPlanner,
    ledger: RegionLedger,
    orientation: Orientation,
    width: f32,
    delimiter: char,
    original_pane: usize,
    state: State,
}

impl<H: HostEditor> SidebarController<H> {
    /// Snapshot the host's current layout and focused pane
    pub fn new(host: H, config: &Config) -> Result<Self, SidebarError> {
        let layout = host.layout()?;
        let original_pane = host.active_pane_index();
        Ok(Self {
            host,
            planner: LayoutPlanner::new(layout),
            ledger: RegionLedger::new(),
            orientation: config.orientation,
            width: config.width,
            delimiter: config.delimiter,
            original_pane,
            state: State::Uncreated,
        })
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Handle of the sidebar pane while it exists
    pub fn pane(&self) -> Option<PaneHandle> {
        match self.state {
            State::Created { pane, .. } => Some(pane),
            _ => None,
        }
    }

    /// Character width computed for the pane at creation
    pub fn chars_wide(&self) -> Option<usize> {
        match self.state {
            State::Created { chars_wide, .. } => Some(chars_wide),
            _ => None,
        }
    }

    pub fn entry_count(&self) -> usize {
        self.ledger.len()
    }

    /// Live entries in buffer order
    pub fn entries(&self) -> &[ibar_ledger::TextEntry] {
        self.ledger.entries()
    }

    fn created(&self) -> Result<(PaneHandle, usize), SidebarError> {
        match self.state {
            State::Created { pane, chars_wide } => Ok((pane, chars_wide)),
            State::Uncreated => Err(SidebarError::NotCreated),
            State::Destroyed => Err(SidebarError::Destroyed),
        }
    }

    /// Split the window and materialize the sidebar pane.
    ///
    /// Applies the planned grid, opens a pane named `name` in the new cell,
    /// computes the pane's character width from viewport metrics, turns off
    /// line numbers, gutter, and indent guides, toggles the minimap, marks
    /// the pane read-only, and hands focus back to the originally active
    /// pane.
    pub fn create(&mut self, name: &str) -> Result<(), SidebarError> {
        match self.state {
            State::Uncreated => {}
            State::Created { .. } => return Err(SidebarError::AlreadyCreated),
            State::Destroyed => return Err(SidebarError::Destroyed),
        }

        let index = self.planner.add_cell(self.width, self.orientation);
        self.host.set_layout(self.planner.current())?;

        self.host.focus_pane(index)?;
        let pane = self.host.create_pane(name)?;
        let viewport = self.host.viewport_width_px(pane)?;
        let em = self.host.em_width_px(pane)?;
        let chars_wide = (viewport / em) as usize;

        for option in DISABLED_OPTIONS {
            self.host.set_display_option(pane, option, false)?;
        }
        self.host.toggle_minimap()?;
        self.host.set_read_only(pane, true)?;
        self.host.focus_pane(self.original_pane)?;

        self.state = State::Created { pane, chars_wide };
        tracing::info!(
            "Created sidebar pane {:?} in cell {}, {} chars wide",
            pane,
            index,
            chars_wide
        );
        Ok(())
    }

    /// Append a formatted block, returning a handle for later deletion.
    ///
    /// Empty text is a deliberate guard, not an error: nothing is written
    /// and no handle is returned. An empty title means no title line.
    pub fn add(
        &mut self,
        title: Option<&str>,
        text: &str,
    ) -> Result<Option<EntryId>, SidebarError> {
        let (pane, chars_wide) = self.created()?;
        if text.is_empty() {
            return Ok(None);
        }
        let title = title.filter(|t| !t.is_empty());
        let block = format_block(self.delimiter, chars_wide, title, text);

        self.host.set_read_only(pane, false)?;
        let inserted = self.host.insert_text(pane, self.ledger.cursor(), &block)?;
        self.host.set_read_only(pane, true)?;

        let span = self.ledger.append(inserted);
        let id = self.ledger.record(text, title, span);
        tracing::debug!("Added entry {:?} at [{}, {})", id, span.start, span.end);
        Ok(Some(id))
    }

    /// Erase an entry's block and shift the survivors.
    ///
    /// Unknown or already-deleted handles are ignored.
    pub fn delete(&mut self, id: EntryId) -> Result<(), SidebarError> {
        let (pane, _) = self.created()?;
        let Some(span) = self.ledger.entry(id).map(|e| e.span) else {
            tracing::debug!("Ignoring delete of untracked entry {:?}", id);
            return Ok(());
        };

        self.host.set_read_only(pane, false)?;
        self.host.erase_range(pane, span)?;
        self.host.set_read_only(pane, true)?;
        self.ledger.remove(id);
        tracing::debug!("Deleted entry {:?}, erased [{}, {})", id, span.start, span.end);
        Ok(())
    }

    /// Clear the buffer, close the pane, and restore the original layout
    pub fn destroy(&mut self) -> Result<(), SidebarError> {
        let (pane, _) = self.created()?;

        if let Some(index) = self.planner.sidebar_index() {
            self.host.focus_pane(index)?;
        }
        self.host.set_read_only(pane, false)?;
        let total = self.ledger.cursor();
        self.host.erase_range(pane, Span::new(0, total))?;
        self.ledger.remove_all();
        self.host.close_pane(pane)?;
        self.host.focus_pane(self.original_pane)?;
        self.host.set_layout(self.planner.original())?;

        self.state = State::Destroyed;
        tracing::info!("Destroyed sidebar pane {:?}, original layout restored", pane);
        Ok(())
    }
}

/// Build one sidebar block: a full-width rule line, an optional centered
/// title followed by a second rule, the body, then two blank lines.
///
/// The title is left-padded by half the free width, rounded down; a title
/// wider than the pane gets no padding and no truncation.
fn format_block(delimiter: char, width: usize, title: Option<&str>, text: &str) -> String {
    let rule: String = std::iter::repeat(delimiter).take(width).collect();
    let mut block = String::new();
    block.push_str(&rule);
    block.push('\n');
    if let Some(title) = title {
        let padding = width.saturating_sub(title.chars().count()) / 2;
        block.extend(std::iter::repeat(' ').take(padding));
        block.push_str(title);
        block.push('\n');
        block.push_str(&rule);
        block.push('\n');
    }
    block.push_str(text);
    block.push_str("\n\n\n");
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryHost;
    use ibar_layout::GridLayout;

    fn vertical_config() -> Config {
        Config {
            orientation: Orientation::Vertical,
            ..Config::default()
        }
    }

    /// Controller over a host whose metrics give a 20-character-wide pane
    fn created_sidebar() -> SidebarController<MemoryHost> {
        let host = MemoryHost::with_metrics(160.0, 8.0);
        let mut sidebar = SidebarController::new(host, &vertical_config()).unwrap();
        sidebar.create("Information").unwrap();
        sidebar
    }

    fn sidebar_text(sidebar: &SidebarController<MemoryHost>) -> &str {
        let pane = sidebar.pane().unwrap();
        sidebar.host().pane_text(pane).unwrap()
    }

    #[test]
    fn create_splits_window_and_configures_pane() {
        let sidebar = created_sidebar();
        let host = sidebar.host();
        let pane = sidebar.pane().unwrap();

        let layout = host.layout().unwrap();
        assert_eq!(layout.cols, vec![0.0, 0.75, 1.0]);
        assert_eq!(layout.pane_count(), 2);

        assert_eq!(sidebar.chars_wide(), Some(20));
        assert_eq!(host.pane_name(pane), Some("Information"));
        assert_eq!(host.pane_option(pane, "line_numbers"), Some(false));
        assert_eq!(host.pane_option(pane, "gutter"), Some(false));
        assert_eq!(host.pane_option(pane, "draw_indent_guides"), Some(false));
        assert!(!host.minimap_visible());
        assert!(host.pane_is_read_only(pane));
        // Focus went to the new cell for creation, then back
        assert_eq!(host.active_pane_index(), 0);
    }

    #[test]
    fn create_twice_fails() {
        let mut sidebar = created_sidebar();
        assert!(matches!(
            sidebar.create("Information"),
            Err(SidebarError::AlreadyCreated)
        ));
    }

    #[test]
    fn add_centers_title_in_pane_width() {
        let mut sidebar = created_sidebar();
        sidebar.add(Some("Item # 1"), "body").unwrap().unwrap();

        // Pane is 20 chars wide, title is 8: floor((20 - 8) / 2) = 6 spaces
        let expected = concat!(
            "--------------------\n",
            "      Item # 1\n",
            "--------------------\n",
            "body\n\n\n"
        );
        assert_eq!(sidebar_text(&sidebar), expected);
    }

    #[test]
    fn add_without_title_skips_title_lines() {
        let mut sidebar = created_sidebar();
        sidebar.add(None, "body").unwrap().unwrap();

        assert_eq!(sidebar_text(&sidebar), "--------------------\nbody\n\n\n");
    }

    #[test]
    fn empty_title_means_no_title_line() {
        let mut sidebar = created_sidebar();
        sidebar.add(Some(""), "body").unwrap().unwrap();

        assert_eq!(sidebar_text(&sidebar), "--------------------\nbody\n\n\n");
    }

    #[test]
    fn title_wider_than_pane_gets_no_padding() {
        let mut sidebar = created_sidebar();
        let title = "a title far wider than twenty columns";
        sidebar.add(Some(title), "body").unwrap().unwrap();

        let second_line = sidebar_text(&sidebar).lines().nth(1).unwrap();
        assert_eq!(second_line, title);
    }

    #[test]
    fn add_empty_text_is_guarded() {
        let mut sidebar = created_sidebar();

        let entry = sidebar.add(Some("X"), "").unwrap();

        assert!(entry.is_none());
        assert_eq!(sidebar.entry_count(), 0);
        assert_eq!(sidebar_text(&sidebar), "");
    }

    #[test]
    fn delete_shifts_surviving_entries() {
        let mut sidebar = created_sidebar();
        sidebar.add(None, "first").unwrap().unwrap();
        let second = sidebar.add(None, "second").unwrap().unwrap();
        sidebar.add(None, "third").unwrap().unwrap();

        sidebar.delete(second).unwrap();

        assert_eq!(sidebar.entry_count(), 2);
        let expected = concat!(
            "--------------------\nfirst\n\n\n",
            "--------------------\nthird\n\n\n"
        );
        assert_eq!(sidebar_text(&sidebar), expected);

        // The survivor's span slid left to close the gap
        let entries = sidebar.entries();
        assert_eq!(entries[0].span.start, 0);
        assert_eq!(entries[1].span.start, entries[0].span.end);
        assert_eq!(entries[1].span.end, expected.chars().count());
    }

    #[test]
    fn delete_twice_is_noop() {
        let mut sidebar = created_sidebar();
        let first = sidebar.add(None, "first").unwrap().unwrap();
        sidebar.add(None, "second").unwrap().unwrap();

        sidebar.delete(first).unwrap();
        let buffer_after_first = sidebar_text(&sidebar).to_string();
        sidebar.delete(first).unwrap();

        assert_eq!(sidebar_text(&sidebar), buffer_after_first);
        assert_eq!(sidebar.entry_count(), 1);
    }

    #[test]
    fn multibyte_text_keeps_offsets_consistent() {
        let mut sidebar = created_sidebar();
        let first = sidebar.add(None, "naïve café — über").unwrap().unwrap();
        sidebar.add(None, "plain ascii").unwrap().unwrap();

        sidebar.delete(first).unwrap();

        assert_eq!(
            sidebar_text(&sidebar),
            "--------------------\nplain ascii\n\n\n"
        );
    }

    #[test]
    fn destroy_restores_original_layout() {
        let mut sidebar = created_sidebar();
        let pane = sidebar.pane().unwrap();
        sidebar.add(Some("Item # 1"), "body").unwrap().unwrap();

        sidebar.destroy().unwrap();

        let host = sidebar.host();
        assert_eq!(host.layout().unwrap(), GridLayout::single_pane());
        assert!(!host.pane_is_open(pane));
        assert_eq!(host.open_pane_count(), 0);
        assert_eq!(host.active_pane_index(), 0);
        assert_eq!(sidebar.entry_count(), 0);
    }

    #[test]
    fn operations_need_created_state() {
        let host = MemoryHost::new();
        let mut sidebar = SidebarController::new(host, &vertical_config()).unwrap();
        assert!(matches!(
            sidebar.add(None, "text"),
            Err(SidebarError::NotCreated)
        ));
        assert!(matches!(sidebar.destroy(), Err(SidebarError::NotCreated)));

        sidebar.create("Information").unwrap();
        sidebar.destroy().unwrap();
        assert!(matches!(
            sidebar.add(None, "text"),
            Err(SidebarError::Destroyed)
        ));
        assert!(matches!(
            sidebar.create("Information"),
            Err(SidebarError::Destroyed)
        ));
    }

    #[test]
    fn block_padding_floors_odd_remainders() {
        // Width 21 with an 8-char title leaves 13 free: floor(13 / 2) = 6
        let block = format_block('-', 21, Some("Item # 1"), "body");
        let title_line = block.lines().nth(1).unwrap();
        assert_eq!(title_line, "      Item # 1");
    }
}
