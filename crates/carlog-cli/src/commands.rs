//! Convert and show command implementations.

use std::path::Path;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{debug, info};

use carlog_model::{Record, RecordStore};

use crate::cli::{ConvertArgs, FormatArg, ShowArgs};

/// Convert records from the input file to the output file.
///
/// The input is fully decoded and loaded into a store before any output is
/// written, so a decode failure never leaves a partial output file behind.
pub fn run_convert(args: &ConvertArgs) -> Result<()> {
    let from = resolve_format(args.from, &args.input)?;
    let to = resolve_format(args.to, &args.output)?;

    let mut store = RecordStore::new();
    store.load(read_records(from, &args.input)?);
    info!(
        input = %args.input.display(),
        record_count = store.len(),
        "loaded records"
    );

    write_records(to, &args.output, store.snapshot())?;
    info!(output = %args.output.display(), "wrote records");
    Ok(())
}

/// Decode the input file and print its records.
pub fn run_show(args: &ShowArgs) -> Result<()> {
    let from = resolve_format(args.from, &args.input)?;
    let records = read_records(from, &args.input)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Date", "Brand", "Price"]);
    for (index, record) in records.iter().enumerate() {
        table.add_row(vec![
            index.to_string(),
            record.date.clone(),
            record.brand_name.clone(),
            record.price.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn read_records(format: FormatArg, path: &Path) -> Result<Vec<Record>> {
    let records = match format {
        FormatArg::Xml => {
            carlog_xml::read_xml(path).with_context(|| format!("read {}", path.display()))?
        }
        FormatArg::Clb => {
            carlog_clb::read_clb(path).with_context(|| format!("read {}", path.display()))?
        }
    };
    debug!(record_count = records.len(), "decoded input");
    Ok(records)
}

fn write_records(format: FormatArg, path: &Path, records: &[Record]) -> Result<()> {
    match format {
        FormatArg::Xml => {
            carlog_xml::write_xml(path, records).with_context(|| format!("write {}", path.display()))
        }
        FormatArg::Clb => {
            carlog_clb::write_clb(path, records).with_context(|| format!("write {}", path.display()))
        }
    }
}

/// Resolve a declared format, falling back to the file extension.
fn resolve_format(declared: Option<FormatArg>, path: &Path) -> Result<FormatArg> {
    if let Some(format) = declared {
        return Ok(format);
    }
    match path.extension().and_then(|e| e.to_str()) {
        Some("xml") => Ok(FormatArg::Xml),
        Some("clb" | "bin" | "dat") => Ok(FormatArg::Clb),
        _ => bail!("unsupported file format: {}", path.display()),
    }
}
