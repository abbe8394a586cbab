//! XML document writer.
//!
//! Serializes records as a `<Document>` of `<Car>` elements with an XML
//! declaration and 2-space indentation.

use std::fs;
use std::io::Write;
use std::path::Path;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use carlog_model::Record;

use crate::error::Result;

/// Write records to an XML file.
pub fn write_xml(path: &Path, records: &[Record]) -> Result<()> {
    let text = encode(records)?;
    fs::write(path, text)?;
    Ok(())
}

/// Encode records as an XML document string.
///
/// Price is serialized back to its decimal text form; record order follows
/// the given sequence.
pub fn encode(records: &[Record]) -> Result<String> {
    let mut buf = Vec::new();
    let mut xml = Writer::new_with_indent(&mut buf, b' ', 2);

    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    xml.write_event(Event::Start(BytesStart::new("Document")))?;

    for record in records {
        xml.write_event(Event::Start(BytesStart::new("Car")))?;
        write_field(&mut xml, "Date", &record.date)?;
        write_field(&mut xml, "BrandName", &record.brand_name)?;
        write_field(&mut xml, "Price", &record.price.to_string())?;
        xml.write_event(Event::End(BytesEnd::new("Car")))?;
    }

    xml.write_event(Event::End(BytesEnd::new("Document")))?;

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write one leaf field element with text content.
fn write_field<W: Write>(xml: &mut Writer<W>, name: &str, value: &str) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new(name)))?;
    xml.write_event(Event::Text(BytesText::new(value)))?;
    xml.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_declaration_and_fields() {
        let records = vec![Record::new("01.01.20", "VW", 15000)];
        let text = encode(&records).expect("encode");
        assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(text.contains("<Document>"));
        assert!(text.contains("<Date>01.01.20</Date>"));
        assert!(text.contains("<BrandName>VW</BrandName>"));
        assert!(text.contains("<Price>15000</Price>"));
        assert!(text.ends_with("</Document>"));
    }

    #[test]
    fn encodes_empty_sequence() {
        let text = encode(&[]).expect("encode");
        assert!(text.contains("<Document>"));
        assert!(!text.contains("<Car>"));
    }

    #[test]
    fn escapes_markup_in_brand() {
        let records = vec![Record::new("01.01.20", "A<B>&C", 1)];
        let text = encode(&records).expect("encode");
        assert!(text.contains("A&lt;B&gt;&amp;C"));
    }

    #[test]
    fn serializes_negative_price_as_decimal_text() {
        let records = vec![Record::new("01.01.20", "VW", -5)];
        let text = encode(&records).expect("encode");
        assert!(text.contains("<Price>-5</Price>"));
    }
}
