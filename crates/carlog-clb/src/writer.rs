//! CLB file writer.
//!
//! Provides functionality to write CARLOG binary (CLB) files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use carlog_model::Record;

use crate::error::{ClbError, Result};
use crate::layout::{DATE_LEN, HEADER_LEN, MAGIC, record_span};

/// CLB file writer.
pub struct ClbWriter<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> ClbWriter<W> {
    /// Create a new CLB writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Encode the records and write them out.
    pub fn write_records(mut self, records: &[Record]) -> Result<()> {
        let bytes = encode(records)?;
        self.writer.write_all(&bytes)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl ClbWriter<File> {
    /// Create a CLB file for writing.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(file))
    }
}

/// Write records to a CLB file.
///
/// This is a convenience function that creates the file and writes the
/// records.
pub fn write_clb(path: &Path, records: &[Record]) -> Result<()> {
    ClbWriter::create(path)?.write_records(records)
}

/// Encode records into a CLB byte buffer.
///
/// Preconditions are validated before any byte is produced: every date must
/// be exactly 8 ASCII characters (no truncation or padding), every brand
/// name must fit the i16 length prefix, and the record count must fit the
/// i32 header field. Each record contributes exactly its own span; there is
/// no alignment padding and no separators between records.
pub fn encode(records: &[Record]) -> Result<Vec<u8>> {
    validate_records(records)?;
    let count = records.len() as i32;

    let total = HEADER_LEN
        + records
            .iter()
            .map(|r| record_span(r.brand_name.encode_utf16().count()))
            .sum::<usize>();
    let mut out = Vec::with_capacity(total);

    out.extend_from_slice(&MAGIC.to_le_bytes());
    out.extend_from_slice(&count.to_le_bytes());
    for record in records {
        encode_record(&mut out, record);
    }

    debug_assert_eq!(out.len(), total);
    Ok(out)
}

/// Append one record block: 8 date bytes, i16 brand length, UTF-16LE brand
/// bytes, i32 price.
fn encode_record(out: &mut Vec<u8>, record: &Record) {
    out.extend_from_slice(record.date.as_bytes());

    let units: Vec<u16> = record.brand_name.encode_utf16().collect();
    out.extend_from_slice(&(units.len() as i16).to_le_bytes());
    for unit in units {
        out.extend_from_slice(&unit.to_le_bytes());
    }

    out.extend_from_slice(&record.price.to_le_bytes());
}

/// Validate encode preconditions.
fn validate_records(records: &[Record]) -> Result<()> {
    if i32::try_from(records.len()).is_err() {
        return Err(ClbError::TooManyRecords {
            count: records.len(),
        });
    }

    for (index, record) in records.iter().enumerate() {
        // The wire field is 8 bytes of 8-bit text: exactly 8 ASCII chars.
        if !record.date.is_ascii() || record.date.len() != DATE_LEN {
            return Err(ClbError::date_not_fixed_width(index, &record.date));
        }

        let units = record.brand_name.encode_utf16().count();
        if units > i16::MAX as usize {
            return Err(ClbError::BrandTooLong { index, units });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_is_header_only() {
        let bytes = encode(&[]).expect("encode");
        assert_eq!(bytes.len(), HEADER_LEN);
        assert_eq!(&bytes[0..2], &MAGIC.to_le_bytes());
        assert_eq!(&bytes[2..6], &0i32.to_le_bytes());
    }

    #[test]
    fn encodes_known_bytes() {
        let records = vec![Record::new("01.01.20", "VW", 15000)];
        let bytes = encode(&records).expect("encode");

        let mut expected = Vec::new();
        expected.extend_from_slice(&MAGIC.to_le_bytes());
        expected.extend_from_slice(&1i32.to_le_bytes());
        expected.extend_from_slice(b"01.01.20");
        expected.extend_from_slice(&2i16.to_le_bytes());
        expected.extend_from_slice(&(b'V' as u16).to_le_bytes());
        expected.extend_from_slice(&(b'W' as u16).to_le_bytes());
        expected.extend_from_slice(&15000i32.to_le_bytes());
        assert_eq!(bytes, expected);
    }

    #[test]
    fn sizes_records_independently() {
        // Emitted bytes per record depend only on that record's brand
        // length; a long neighbour must not pad the short one.
        let records = vec![
            Record::new("01.01.20", "Tesla Model S", 80000),
            Record::new("02.02.21", "", 500),
        ];
        let bytes = encode(&records).expect("encode");
        assert_eq!(bytes.len(), HEADER_LEN + record_span(13) + record_span(0));
    }

    #[test]
    fn rejects_short_date() {
        let records = vec![Record::new("1.1.20", "VW", 15000)];
        let err = encode(&records).unwrap_err();
        assert!(matches!(err, ClbError::DateNotFixedWidth { index: 0, .. }));
    }

    #[test]
    fn rejects_long_date() {
        let records = vec![Record::new("01.01.2020", "VW", 15000)];
        let err = encode(&records).unwrap_err();
        assert!(matches!(err, ClbError::DateNotFixedWidth { index: 0, .. }));
    }

    #[test]
    fn rejects_non_ascii_date() {
        // 8 characters but not 8 ASCII bytes.
        let records = vec![Record::new("01.01.2\u{e9}", "VW", 15000)];
        let err = encode(&records).unwrap_err();
        assert!(matches!(err, ClbError::DateNotFixedWidth { index: 0, .. }));
    }

    #[test]
    fn rejects_oversized_brand() {
        let brand = "a".repeat(i16::MAX as usize + 1);
        let records = vec![Record::new("01.01.20", brand, 0)];
        let err = encode(&records).unwrap_err();
        assert!(matches!(err, ClbError::BrandTooLong { index: 0, .. }));
    }

    #[test]
    fn negative_price_roundtrips_bytes() {
        let records = vec![Record::new("01.01.20", "", -1)];
        let bytes = encode(&records).expect("encode");
        assert_eq!(&bytes[bytes.len() - 4..], &(-1i32).to_le_bytes());
    }
}
