// ABOUTME: Region ledger for the sidebar text buffer.
// ABOUTME: Tracks entry offset spans across out-of-order removals.

mod ledger;

pub use ledger::{EntryId, RegionLedger, TextEntry};
