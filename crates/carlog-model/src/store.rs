use crate::error::{Result, StoreError};
use crate::record::{Record, RecordPatch};

/// Ordered, index-addressable collection of [`Record`]s.
///
/// Insertion order is meaningful: it survives encode/decode round-trips and
/// determines each record's position in the binary file. Indices are
/// positional (0-based) and shift on add/delete, so callers must not cache
/// them across mutations.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Append a record; its index is `len() - 1` afterwards.
    pub fn add(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Merge `patch` over the record at `index` and replace it wholesale.
    ///
    /// Fields the patch leaves unset are preserved unchanged.
    pub fn edit(&mut self, index: usize, patch: RecordPatch) -> Result<()> {
        let len = self.records.len();
        let slot = self
            .records
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, len })?;
        let merged = slot.merged(patch);
        *slot = merged;
        Ok(())
    }

    /// Remove the record at `index`, shifting later indices down by one.
    pub fn delete(&mut self, index: usize) -> Result<()> {
        if index >= self.records.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        self.records.remove(index);
        Ok(())
    }

    /// Replace the contents with an externally decoded sequence, preserving
    /// the given order.
    pub fn load(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    /// Append an externally decoded sequence, preserving the given order.
    pub fn extend(&mut self, records: Vec<Record>) {
        self.records.extend(records);
    }

    /// Point-in-time view of the sequence for codecs to serialize.
    pub fn snapshot(&self) -> &[Record] {
        &self.records
    }
}
