//! CARLOG binary (CLB) format reader and writer.
//!
//! CLB is a fixed/variable-layout binary format for car listing records: a
//! 2-byte magic header and a 4-byte record count, followed by one block per
//! record holding a fixed-width 8-byte date, a length-prefixed UTF-16LE
//! brand name, and a 4-byte price. All integers are little-endian. The
//! reader and writer agree on the layout with no external schema; see
//! [`layout`] for the byte map.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use carlog_model::Record;
//! use carlog_clb::{read_clb, write_clb};
//!
//! let records = vec![
//!     Record::new("01.01.20", "VW", 15000),
//!     Record::new("05.05.23", "Tesla Model S", 80000),
//! ];
//! write_clb(Path::new("cars.clb"), &records).unwrap();
//!
//! let back = read_clb(Path::new("cars.clb")).unwrap();
//! assert_eq!(back, records);
//! ```

mod error;
pub mod layout;
mod reader;
mod writer;

// Re-export error types
pub use error::{ClbError, Result};

// Re-export reader functionality
pub use reader::{ClbReader, decode, read_clb};

// Re-export writer functionality
pub use writer::{ClbWriter, encode, write_clb};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
