use crate::data::{Error, MintRecord, REQUIRED_COLUMNS};
use tracing::debug;

/// Trait for doing something with a `MintRecord` read from a CSV export.
/// Used by the aggregation to accumulate totals, but also by mock tests to
/// check what comes out of a CSV stream.
pub trait RecordUser {
    fn use_record(&mut self, record: MintRecord) -> Result<(), Error>;
}

/// CSV importer for `MintRecord`s. The header is checked up front so that a
/// missing column is reported by name instead of as a row-level failure.
/// Cells are taken verbatim: a padded method or address is a different value.
pub fn read_records<R: std::io::Read, U: RecordUser>(
    reader: R,
    user: &mut U,
) -> Result<(), anyhow::Error> {
    let mut rdr = csv::ReaderBuilder::new().from_reader(reader);
    let headers = rdr.headers()?;
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(Error::MissingColumn(column).into());
        }
    }
    let mut rows = 0usize;
    for result in rdr.deserialize() {
        let record: MintRecord = result?;
        user.use_record(record)?;
        rows += 1;
    }
    debug!(rows, "read transaction export");
    Ok(())
}
