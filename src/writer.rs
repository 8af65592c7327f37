//! CSV serialization of the assembled copy-number list.

use std::path::Path;

use crate::error::Error;
use crate::extract::CopyNumberList;

/// Column order of the CNV file.
const HEADER: [&str; 9] = [
    "sample_id",
    "gene",
    "copy_number",
    "status",
    "attributes",
    "chromosome",
    "start_position",
    "end_position",
    "interpretation",
];

/// Write the copy-number list as a comma-separated file.
///
/// One row per record, in list order. The attributes bag occupies a
/// single cell holding its JSON text; an absent sample id is an empty
/// cell.
pub fn write_cnv_file(path: &Path, list: &CopyNumberList) -> Result<(), Error> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(HEADER)?;

    for record in &list.copy_numbers {
        let copy_number = record.copy_number.to_string();
        let attributes = serde_json::to_string(&record.attributes)?;
        writer.write_record([
            record.sample_id.as_deref().unwrap_or(""),
            record.gene.as_str(),
            copy_number.as_str(),
            record.status.as_str(),
            attributes.as_str(),
            record.chromosome.as_str(),
            record.start_position.as_str(),
            record.end_position.as_str(),
            record.interpretation.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
