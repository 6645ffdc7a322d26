use hrr::{Result, RoleReport};

use csv::Writer;

/// Serializes reports into a CSV document, header row included
pub fn write_reports(reports: &[RoleReport]) -> Result<String> {
    let mut wtr = Writer::from_writer(vec![]);

    for report in reports {
        log::debug!("Serializing report: {report:?}");
        wtr.serialize(report)?;
    }

    let utf8 = wtr.into_inner()?;
    let string = String::from_utf8(utf8)?;

    return Ok(string);
}
