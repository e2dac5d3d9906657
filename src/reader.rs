use bank::Result;

use std::{fs::File, path::Path};

use csv::{Reader, ReaderBuilder, Trim};

pub fn build_csv_reader(filepath: &Path) -> Result<Reader<File>> {
    let reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_path(filepath)?;

    return Ok(reader);
}
