use crate::entry::RotationEntry;
use crate::error::{ErrorKind, Result};
use interop_catalog::LibraryRecord;
use rand::Rng;
use rand::seq::SliceRandom;

/// A fixed, non-empty sequence of [`RotationEntry`] and a cyclic cursor.
///
/// The sequence never changes after construction; [`tick`](Self::tick) is the
/// only mutation. The cursor is kept modulo the sequence length, so reading
/// is plain indexing and a long-running session can never overflow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation {
    entries: Box<[RotationEntry]>,
    cursor: usize,
}
impl Rotation {
    /// Rotates through `entries` in the given order.
    pub fn from_entries(entries: impl Into<Vec<RotationEntry>>) -> Result<Self> {
        let entries = entries.into();
        if entries.is_empty() {
            exn::bail!(ErrorKind::EmptyCatalog);
        }
        Ok(Self { entries: entries.into_boxed_slice(), cursor: 0 })
    }

    /// Builds a freshly shuffled rotation from the thread-local RNG.
    pub fn shuffled(records: &[LibraryRecord]) -> Result<Self> {
        Self::shuffled_with(records, &mut rand::thread_rng())
    }

    /// Builds a rotation shuffled by `rng`. Records missing either language
    /// are skipped.
    pub fn shuffled_with<R: Rng + ?Sized>(records: &[LibraryRecord], rng: &mut R) -> Result<Self> {
        let mut entries: Vec<_> = records.iter().filter_map(RotationEntry::from_record).collect();
        entries.shuffle(rng);
        Self::from_entries(entries)
    }

    /// Builds a rotation visiting `records[order[0]]`, `records[order[1]]`, …
    ///
    /// `order` must be a permutation of `0..records.len()`.
    pub fn with_permutation(records: &[LibraryRecord], order: &[usize]) -> Result<Self> {
        if order.len() != records.len() {
            exn::bail!(ErrorKind::InvalidPermutation(records.len()));
        }
        let mut seen = vec![false; records.len()];
        for &index in order {
            match seen.get_mut(index) {
                Some(slot) if !*slot => *slot = true,
                _ => exn::bail!(ErrorKind::InvalidPermutation(records.len())),
            }
        }
        let entries: Vec<_> = order.iter().filter_map(|&index| RotationEntry::from_record(&records[index])).collect();
        Self::from_entries(entries)
    }

    /// The entry currently on display.
    pub fn current(&self) -> &RotationEntry {
        // Infallible: construction rejects empty sequences and `tick` keeps
        // the cursor in bounds.
        &self.entries[self.cursor]
    }

    /// Advances to the next entry, wrapping after the last.
    pub fn tick(&mut self) {
        self.cursor = (self.cursor + 1) % self.entries.len();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn entries(&self) -> &[RotationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never `true` for a constructed rotation.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
