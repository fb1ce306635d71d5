// ABOUTME: Demo entry point running a sidebar cycle against the in-memory host.
// ABOUTME: Creates the pane, adds two items, deletes one, and tears down.

use anyhow::Result;

use ibar_core::{Config, Orientation};
use ibar_sidebar::{HostEditor, MemoryHost, SidebarController};

const ITEM_ONE: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
Sed nec egestas massa. Nam ligula elit, sagittis ut rhoncus nec, suscipit vitae \
nunc. Suspendisse id ante ac metus adipiscing ornare eget eu quam. Morbi vel \
porta tortor. Fusce vehicula euismod libero, eget hendrerit nisi bibendum a.";

const ITEM_TWO: &str = "Nunc scelerisque egestas interdum. Sed pharetra semper \
nisl, nec posuere nibh tempus in. Maecenas ac urna libero. Integer et arcu at \
quam vulputate euismod non sed ante. Nullam luctus velit vel erat aliquam \
placerat lacinia lacus imperdiet.";

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut config = Config::load_or_default();
    config.orientation = Orientation::Vertical;

    let host = MemoryHost::with_metrics(640.0, 8.0);
    let mut sidebar = SidebarController::new(host, &config)?;

    sidebar.create(&config.pane_name)?;
    tracing::info!(
        "Sidebar created, layout: {:?}",
        sidebar.host().layout()?.cols
    );

    let first = sidebar.add(Some("Item # 1"), ITEM_ONE)?;
    sidebar.add(Some("Item # 2"), ITEM_TWO)?;

    if let Some(pane) = sidebar.pane() {
        if let Some(text) = sidebar.host().pane_text(pane) {
            println!("{text}");
        }
    }

    if let Some(first) = first {
        sidebar.delete(first)?;
    }
    tracing::info!("Entries after delete: {}", sidebar.entry_count());

    sidebar.destroy()?;
    tracing::info!(
        "Sidebar destroyed, layout restored: {:?}",
        sidebar.host().layout()?.cols
    );

    Ok(())
}
