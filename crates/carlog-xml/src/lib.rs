//! XML document codec for car listing records.
//!
//! The document shape is a `<Document>` root with one `<Car>` element per
//! record, each carrying `<Date>`, `<BrandName>`, and `<Price>` leaves.
//! The codec preserves record order and field fidelity in both directions;
//! price round-trips through its decimal text form.

mod error;
mod reader;
mod writer;

pub use error::{Result, XmlError};
pub use reader::{decode, read_xml};
pub use writer::{encode, write_xml};
