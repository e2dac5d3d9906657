use bank::Result;

use csv::Writer;

use serde::Serialize;

pub fn write_rows_to_string<T: Serialize>(rows: &[T]) -> Result<String> {
    let mut wtr = Writer::from_writer(vec![]);

    for row in rows {
        wtr.serialize(row)?;
    }

    let utf8 = wtr.into_inner()?;
    let string = String::from_utf8(utf8)?;
    return Ok(string);
}
