//! XML document reader.
//!
//! Parses a `<Document>` of `<Car>` elements into records, preserving
//! document order.

use std::fs;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;

use carlog_model::Record;

use crate::error::{Result, XmlError};

/// Read records from an XML file.
pub fn read_xml(path: &Path) -> Result<Vec<Record>> {
    let text = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            XmlError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            XmlError::Io(e)
        }
    })?;
    decode(&text)
}

/// Decode an XML document into records.
///
/// The document root must be `<Document>`; each `<Car>` child contributes
/// one record with `<Date>`, `<BrandName>`, and `<Price>` fields. Price
/// text must parse as an i32, otherwise [`XmlError::MalformedPrice`] is
/// returned. Unknown elements are skipped.
pub fn decode(text: &str) -> Result<Vec<Record>> {
    let mut reader = Reader::from_str(text);

    let mut records = Vec::new();
    let mut saw_root = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if !saw_root => {
                if e.name().as_ref() != b"Document" {
                    return Err(XmlError::UnexpectedRoot {
                        found: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                    });
                }
                saw_root = true;
            }
            Event::Start(e) if e.name().as_ref() == b"Car" => {
                let record = parse_car(&mut reader, records.len())?;
                records.push(record);
            }
            Event::Empty(e) if e.name().as_ref() == b"Car" => {
                // A childless <Car/> has no date field at all.
                return Err(XmlError::missing_field(records.len(), "Date"));
            }
            Event::Start(e) => {
                // Unknown element: skip its whole subtree.
                skip_element(&mut reader, e.name().as_ref())?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(XmlError::MissingRoot);
    }
    Ok(records)
}

/// Parse one `<Car>` element body into a record.
fn parse_car(reader: &mut Reader<&[u8]>, index: usize) -> Result<Record> {
    let mut date = None;
    let mut brand_name = None;
    let mut price_text = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let field = e.name().as_ref().to_vec();
                let text = read_element_text(reader, &field)?;
                match field.as_slice() {
                    b"Date" => date = Some(text),
                    b"BrandName" => brand_name = Some(text),
                    b"Price" => price_text = Some(text),
                    _ => {}
                }
            }
            Event::Empty(e) => match e.name().as_ref() {
                b"Date" => date = Some(String::new()),
                b"BrandName" => brand_name = Some(String::new()),
                b"Price" => price_text = Some(String::new()),
                _ => {}
            },
            Event::End(e) if e.name().as_ref() == b"Car" => break,
            Event::Eof => return Err(XmlError::UnexpectedEof),
            _ => {}
        }
    }

    let date = date.ok_or_else(|| XmlError::missing_field(index, "Date"))?;
    let brand_name = brand_name.ok_or_else(|| XmlError::missing_field(index, "BrandName"))?;
    let price_text = price_text.ok_or_else(|| XmlError::missing_field(index, "Price"))?;
    let price = price_text
        .trim()
        .parse::<i32>()
        .map_err(|_| XmlError::malformed_price(index, price_text.trim()))?;

    Ok(Record {
        date,
        brand_name,
        price,
    })
}

/// Accumulate unescaped text until the named end tag.
fn read_element_text(reader: &mut Reader<&[u8]>, name: &[u8]) -> Result<String> {
    let mut text = String::new();
    loop {
        match reader.read_event()? {
            Event::Text(t) => {
                text.push_str(&t.decode().map_err(quick_xml::Error::from)?);
            }
            Event::GeneralRef(r) => {
                // Entity references arrive as separate events; resolve them
                // back to their textual value (e.g. `&amp;` -> `&`).
                let raw = r.decode().map_err(quick_xml::Error::from)?;
                let entity = format!("&{raw};");
                let resolved =
                    quick_xml::escape::unescape(&entity).map_err(quick_xml::Error::from)?;
                text.push_str(&resolved);
            }
            Event::End(e) if e.name().as_ref() == name => {
                // Trim edges of the whole field text, matching the reader's
                // former whole-node text trimming while keeping interior
                // whitespace (e.g. around resolved entities) intact.
                return Ok(text.trim().to_string());
            }
            Event::Eof => return Err(XmlError::UnexpectedEof),
            _ => {}
        }
    }
}

/// Consume events until the named element closes, tracking nesting depth.
fn skip_element(reader: &mut Reader<&[u8]>, name: &[u8]) -> Result<()> {
    let mut depth = 0usize;
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == name => depth += 1,
            Event::End(e) if e.name().as_ref() == name => {
                if depth == 0 {
                    return Ok(());
                }
                depth -= 1;
            }
            Event::Eof => return Err(XmlError::UnexpectedEof),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_document_in_order() {
        let text = "<Document>\
             <Car><Date>01.01.20</Date><BrandName>VW</BrandName><Price>15000</Price></Car>\
             <Car><Date>05.05.23</Date><BrandName>Tesla Model S</BrandName><Price>80000</Price></Car>\
             </Document>";
        let records = decode(text).expect("decode");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], Record::new("01.01.20", "VW", 15000));
        assert_eq!(records[1], Record::new("05.05.23", "Tesla Model S", 80000));
    }

    #[test]
    fn decodes_empty_document() {
        assert!(decode("<Document></Document>").expect("decode").is_empty());
        assert!(decode("<Document/>").expect("decode").is_empty());
    }

    #[test]
    fn decodes_empty_leaf_fields() {
        let text = "<Document><Car><Date>01.01.20</Date>\
             <BrandName/><Price>1</Price></Car></Document>";
        let records = decode(text).expect("decode");
        assert_eq!(records[0].brand_name, "");
    }

    #[test]
    fn rejects_malformed_price() {
        let text = "<Document><Car><Date>01.01.20</Date>\
             <BrandName>VW</BrandName><Price>cheap</Price></Car></Document>";
        let err = decode(text).unwrap_err();
        assert!(matches!(
            err,
            XmlError::MalformedPrice { index: 0, ref value } if value == "cheap"
        ));
    }

    #[test]
    fn rejects_missing_field() {
        let text = "<Document><Car><Date>01.01.20</Date><Price>1</Price></Car></Document>";
        let err = decode(text).unwrap_err();
        assert!(matches!(
            err,
            XmlError::MissingField {
                index: 0,
                field: "BrandName"
            }
        ));
    }

    #[test]
    fn rejects_wrong_root() {
        let err = decode("<Garage></Garage>").unwrap_err();
        assert!(matches!(err, XmlError::UnexpectedRoot { ref found } if found == "Garage"));
    }

    #[test]
    fn rejects_empty_input() {
        let err = decode("").unwrap_err();
        assert!(matches!(err, XmlError::MissingRoot));
    }

    #[test]
    fn unescapes_entities() {
        let text = "<Document><Car><Date>01.01.20</Date>\
             <BrandName>M&amp;M Motors</BrandName><Price>1</Price></Car></Document>";
        let records = decode(text).expect("decode");
        assert_eq!(records[0].brand_name, "M&M Motors");
    }

    #[test]
    fn skips_unknown_elements() {
        let text = "<Document><Dealer>ACME</Dealer>\
             <Car><Date>01.01.20</Date><BrandName>VW</BrandName>\
             <Color>blue</Color><Price>15000</Price></Car></Document>";
        let records = decode(text).expect("decode");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].brand_name, "VW");
    }
}
