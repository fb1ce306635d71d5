// ABOUTME: Sidebar orchestration over an abstract host editor.
// ABOUTME: Drives pane creation, formatted text blocks, and layout restoration.

mod controller;
mod host;
mod memory;

pub use controller::{SidebarController, SidebarError};
pub use host::{HostEditor, HostError, PaneHandle};
pub use memory::MemoryHost;

pub use ibar_core::Span;
pub use ibar_layout::GridLayout;
pub use ibar_ledger::{EntryId, TextEntry};
