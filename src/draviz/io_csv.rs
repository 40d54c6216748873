// Primitives for reading CSV files.

use readiness_charts::RawTable;

use crate::draviz::*;

pub fn read_csv_table(path: &str) -> DravizResult<RawTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .context(CsvOpenSnafu { path })?;

    // Files saved by spreadsheet programs may start with a byte order mark.
    let header: Vec<String> = rdr
        .headers()
        .context(CsvLineParseSnafu { path, lineno: 1_usize })?
        .iter()
        .map(|s| s.trim_start_matches('\u{feff}').to_string())
        .collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (idx, line_r) in rdr.records().enumerate() {
        // The header is line 1.
        let lineno = idx + 2;
        let line = line_r.context(CsvLineParseSnafu { path, lineno })?;
        debug!("read_csv_table: lineno: {:?} row: {:?}", lineno, line);
        rows.push(line.iter().map(|s| s.to_string()).collect());
    }
    Ok(RawTable::new(header, rows))
}
