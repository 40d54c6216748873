use calamine::{open_workbook, DataType, Reader, Xlsx};

use readiness_charts::RawTable;

use crate::draviz::*;

/// Reads a worksheet of an Excel workbook. The first row is the header.
///
/// Without a worksheet name, the first worksheet of the workbook is read.
pub fn read_excel_table(path: &str, worksheet_name: Option<&str>) -> DravizResult<RawTable> {
    debug!(
        "read_excel_table: path: {:?} worksheet: {:?}",
        path, worksheet_name
    );
    let mut workbook: Xlsx<_> = open_workbook(path).context(OpeningExcelSnafu { path })?;

    let wrange = match worksheet_name {
        Some(name) => workbook
            .worksheet_range(name)
            .context(MissingWorksheetSnafu { path, name })?
            .context(OpeningExcelSnafu { path })?,
        None => workbook
            .worksheet_range_at(0)
            .context(EmptyExcelSnafu { path })?
            .context(OpeningExcelSnafu { path })?,
    };

    let mut iter = wrange.rows();
    let header: Vec<String> = iter
        .next()
        .context(EmptyExcelSnafu { path })?
        .iter()
        .map(read_cell)
        .collect();
    debug!("read_excel_table: header: {:?}", header);

    let rows: Vec<Vec<String>> = iter.map(|row| row.iter().map(read_cell).collect()).collect();
    Ok(RawTable::new(header, rows))
}

// Numbers are stored as floats by most spreadsheets: the integral ones are
// written without decimals so that keys and codes read as integers.
fn read_cell(cell: &DataType) -> String {
    match cell {
        DataType::String(s) => s.clone(),
        DataType::Int(i) => i.to_string(),
        DataType::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        DataType::Float(f) => f.to_string(),
        DataType::Bool(true) => "True".to_string(),
        DataType::Bool(false) => "False".to_string(),
        DataType::Empty => "".to_string(),
        other => format!("{:?}", other),
    }
}
