// ABOUTME: Ordered record of text entries and their buffer spans.
// ABOUTME: Removal shifts every later span left by the removed length.

use ibar_core::Span;

/// Opaque handle to a recorded text entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(pub u64);

/// One block of sidebar text: the caller's unformatted strings plus the
/// formatted block's position in the buffer
#[derive(Debug, Clone)]
pub struct TextEntry {
    pub id: EntryId,
    pub text: String,
    pub title: Option<String>,
    pub span: Span,
}

/// Tracks entries inside one growing-and-shrinking buffer.
///
/// Entries are only ever appended at the write cursor and removed from
/// anywhere; spans stay pairwise disjoint and in insertion order. That
/// ordering is what makes suffix shifting on removal correct: everything
/// recorded after the removed entry sits strictly behind it in the buffer.
#[derive(Debug, Default)]
pub struct RegionLedger {
    entries: Vec<TextEntry>,
    cursor: usize,
    next_id: u64,
}

impl RegionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset just past the last character written
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Claim the next `len` characters of the buffer and advance the cursor.
    ///
    /// The caller is responsible for writing the text itself; the ledger
    /// never touches buffer contents.
    pub fn append(&mut self, len: usize) -> Span {
        let span = Span::new(self.cursor, self.cursor + len);
        self.cursor = span.end;
        span
    }

    /// Record a live entry covering `span`, returning its handle
    pub fn record(&mut self, text: &str, title: Option<&str>, span: Span) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(TextEntry {
            id,
            text: text.to_string(),
            title: title.map(str::to_string),
            span,
        });
        id
    }

    /// Look up a live entry by handle
    pub fn entry(&self, id: EntryId) -> Option<&TextEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Live entries in buffer order
    pub fn entries(&self) -> &[TextEntry] {
        &self.entries
    }

    /// Drop `id` and shift every later entry's span left by its length.
    ///
    /// Returns the shift amount, or 0 when the id is not live; removing an
    /// entry twice is a harmless no-op.
    pub fn remove(&mut self, id: EntryId) -> usize {
        let Some(position) = self.entries.iter().position(|e| e.id == id) else {
            return 0;
        };
        let removed = self.entries.remove(position);
        let amount = removed.span.len();
        for entry in &mut self.entries[position..] {
            entry.span.shift_left(amount);
        }
        self.cursor -= amount;
        amount
    }

    /// Force-clear every entry and the cursor for teardown.
    ///
    /// Returns the length of the whole tracked range `[0, cursor)`. Unlike
    /// `remove`, nothing needs to be a live entry and no suffix adjustment
    /// happens.
    pub fn remove_all(&mut self) -> usize {
        let total = self.cursor;
        self.entries.clear();
        self.cursor = 0;
        total
    }
}
