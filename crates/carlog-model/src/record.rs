use serde::{Deserialize, Serialize};

/// One car listing: sale date, brand name, and price.
///
/// A record is plain immutable data. The store's edit operation builds a
/// merged copy and replaces the stored value wholesale; nothing mutates a
/// record's fields in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Date token. The binary format stores exactly 8 bytes of 8-bit text;
    /// the store itself accepts any string and performs no calendar checks.
    pub date: String,
    /// Brand name, arbitrary Unicode text.
    pub brand_name: String,
    /// Price in whole currency units. Not range-checked.
    pub price: i32,
}

impl Record {
    pub fn new(date: impl Into<String>, brand_name: impl Into<String>, price: i32) -> Self {
        Self {
            date: date.into(),
            brand_name: brand_name.into(),
            price,
        }
    }

    /// Apply the patch's set fields over this record, returning the merged
    /// value. Unset fields are carried over unchanged.
    #[must_use]
    pub fn merged(&self, patch: RecordPatch) -> Record {
        Record {
            date: patch.date.unwrap_or_else(|| self.date.clone()),
            brand_name: patch.brand_name.unwrap_or_else(|| self.brand_name.clone()),
            price: patch.price.unwrap_or(self.price),
        }
    }
}

/// Field overrides for [`edit`](crate::RecordStore::edit).
///
/// `None` leaves the corresponding field unchanged. The default patch is
/// empty and merging it is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPatch {
    pub date: Option<String>,
    pub brand_name: Option<String>,
    pub price: Option<i32>,
}

impl RecordPatch {
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    #[must_use]
    pub fn with_brand_name(mut self, brand_name: impl Into<String>) -> Self {
        self.brand_name = Some(brand_name.into());
        self
    }

    #[must_use]
    pub fn with_price(mut self, price: i32) -> Self {
        self.price = Some(price);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merged_empty_patch_is_identity() {
        let record = Record::new("05.05.23", "Tesla Model S", 80000);
        assert_eq!(record.merged(RecordPatch::default()), record);
    }

    #[test]
    fn merged_overrides_only_set_fields() {
        let record = Record::new("05.05.23", "Tesla Model S", 80000);
        let merged = record.merged(RecordPatch::default().with_price(40000));
        assert_eq!(merged.date, "05.05.23");
        assert_eq!(merged.brand_name, "Tesla Model S");
        assert_eq!(merged.price, 40000);
    }

    #[test]
    fn record_serializes() {
        let record = Record::new("01.01.20", "VW", 15000);
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: Record = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
    }
}
