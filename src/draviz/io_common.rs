use std::path::Path;

use readiness_charts::RawTable;

use crate::draviz::{io_csv::read_csv_table, io_excel::read_excel_table, *};

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum InputType {
    Csv,
    Excel,
}

impl InputType {
    pub fn parse(s: &str) -> DravizResult<InputType> {
        match s {
            "csv" => Ok(InputType::Csv),
            "excel" | "xlsx" => Ok(InputType::Excel),
            x => whatever!("unknown input type {:?} (expected csv or excel)", x),
        }
    }

    /// Guesses the type of a file from its extension. Anything that is not an
    /// Excel workbook is read as CSV.
    pub fn for_path(path: &str) -> InputType {
        match Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .as_deref()
        {
            Some("xlsx") | Some("xlsm") => InputType::Excel,
            _ => InputType::Csv,
        }
    }
}

pub fn simplify_file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(path)
        .to_string()
}

/// Splits a comma separated list, dropping the blank elements.
pub fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim())
        .filter(|x| !x.is_empty())
        .map(|x| x.to_string())
        .collect()
}

pub fn read_table(
    path: &str,
    forced_type: Option<InputType>,
    excel_worksheet_name: Option<&str>,
) -> DravizResult<RawTable> {
    let input_type = forced_type.unwrap_or_else(|| InputType::for_path(path));
    info!(
        "Attempting to read {} as {:?}",
        simplify_file_name(path),
        input_type
    );
    let table = match input_type {
        InputType::Csv => read_csv_table(path)?,
        InputType::Excel => read_excel_table(path, excel_worksheet_name)?,
    };
    debug!(
        "read_table: {}: header: {:?}, {} rows",
        simplify_file_name(path),
        table.header,
        table.rows.len()
    );
    Ok(table)
}
