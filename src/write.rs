use crate::data::AddressTotal;

/// Basic CSV exporter for per-address totals. The header row comes from the
/// `AddressTotal` field names; there is no index column.
pub fn write_totals<W: std::io::Write>(
    writer: W,
    totals: &[AddressTotal],
) -> Result<(), anyhow::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    if totals.is_empty() {
        // serialize() only emits the header alongside the first record
        wtr.write_record(["From Address", "Total Value"])?;
    }
    for total in totals {
        wtr.serialize(total)?;
    }
    wtr.flush()?;
    Ok(())
}
