use hrr::input::{self, RawTransactionRecord};
use hrr::Result;

use std::{
    fs::File,
    io::BufReader,
    path::Path,
};

use csv::{ReaderBuilder, Trim};

/// Reads raw records from a `.json` payload or a CSV file. Records fail individually.
pub fn read_raw_records(filepath: &Path) -> Result<Vec<Result<RawTransactionRecord>>> {
    let is_json = filepath
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        let file = File::open(filepath)?;

        return input::parse_json_records(BufReader::new(file));
    }

    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(filepath)?;

    let records: Vec<Result<RawTransactionRecord>> = rdr
        .deserialize::<RawTransactionRecord>()
        .map(|record| record.map_err(anyhow::Error::from))
        .collect();

    return Ok(records);
}
