//! CLB file reader.
//!
//! Provides functionality to read CARLOG binary (CLB) files.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use carlog_model::Record;

use crate::error::{ClbError, Result};
use crate::layout::{DATE_LEN, HEADER_LEN, MAGIC, record_span};

/// CLB file reader.
///
/// Reads the whole stream into memory, then decodes it in one pass.
pub struct ClbReader<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> ClbReader<R> {
    /// Create a new CLB reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
        }
    }

    /// Read the entire stream and decode its records.
    pub fn read_records(mut self) -> Result<Vec<Record>> {
        let mut data = Vec::new();
        self.reader.read_to_end(&mut data)?;
        decode(&data)
    }
}

impl ClbReader<File> {
    /// Open a CLB file for reading.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ClbError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ClbError::Io(e)
            }
        })?;
        Ok(Self::new(file))
    }
}

/// Read a CLB file from a path.
///
/// This is a convenience function that opens and reads the file.
pub fn read_clb(path: &Path) -> Result<Vec<Record>> {
    ClbReader::open(path)?.read_records()
}

/// Decode a CLB byte buffer into records.
///
/// Either the full set of declared records is produced or an error is
/// returned; no partial results. A mismatched magic value fails fast with
/// [`ClbError::BadMagic`], and bytes remaining after the declared record
/// count fail with [`ClbError::TrailingBytes`].
pub fn decode(data: &[u8]) -> Result<Vec<Record>> {
    let header = data
        .get(..HEADER_LEN)
        .ok_or(ClbError::TruncatedHeader { len: data.len() })?;

    let magic = u16::from_le_bytes([header[0], header[1]]);
    if magic != MAGIC {
        return Err(ClbError::BadMagic { found: magic });
    }

    let count = i32::from_le_bytes([header[2], header[3], header[4], header[5]]);
    if count < 0 {
        return Err(ClbError::NegativeCount { count });
    }
    let count = count as usize;

    // Capacity is capped at what the buffer could actually hold; the
    // declared count is not trusted for allocation.
    let max_records = (data.len() - HEADER_LEN) / record_span(0);
    let mut records = Vec::with_capacity(count.min(max_records));

    let mut offset = HEADER_LEN;
    for index in 0..count {
        let (record, next) = decode_record(data, offset, index)?;
        records.push(record);
        offset = next;
    }

    if offset != data.len() {
        return Err(ClbError::TrailingBytes {
            extra: data.len() - offset,
        });
    }

    Ok(records)
}

/// Decode one record block starting at `offset`.
///
/// Returns the record and the offset of the next block. The cursor advances
/// by exactly `8 + 2 + L*2 + 4` bytes; every field read is bounds-checked
/// against the buffer, never against an assumed record size.
fn decode_record(data: &[u8], offset: usize, index: usize) -> Result<(Record, usize)> {
    let mut offset = offset;

    let date_bytes = read_field(data, offset, DATE_LEN, index)?;
    if !date_bytes.is_ascii() {
        return Err(ClbError::DateEncoding { index });
    }
    let date = String::from_utf8_lossy(date_bytes).into_owned();
    offset += DATE_LEN;

    let len_bytes = read_field(data, offset, 2, index)?;
    let brand_len = i16::from_le_bytes([len_bytes[0], len_bytes[1]]);
    if brand_len < 0 {
        return Err(ClbError::NegativeBrandLength {
            index,
            len: brand_len,
        });
    }
    let units = brand_len as usize;
    offset += 2;

    let brand_bytes = read_field(data, offset, units * 2, index)?;
    let code_units: Vec<u16> = brand_bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let brand_name =
        String::from_utf16(&code_units).map_err(|_| ClbError::BrandEncoding { index })?;
    offset += units * 2;

    let price_bytes = read_field(data, offset, 4, index)?;
    let price = i32::from_le_bytes([
        price_bytes[0],
        price_bytes[1],
        price_bytes[2],
        price_bytes[3],
    ]);
    offset += 4;

    Ok((
        Record {
            date,
            brand_name,
            price,
        },
        offset,
    ))
}

/// Read a field of `len` bytes at `offset`.
fn read_field(data: &[u8], offset: usize, len: usize, index: usize) -> Result<&[u8]> {
    data.get(offset..offset + len)
        .ok_or(ClbError::TruncatedRecord { index, offset })
}
