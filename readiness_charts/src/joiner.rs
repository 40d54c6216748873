//! Joins the answers to the questions and resolves the labels of the answer codes.

use log::{debug, info, warn};
use std::collections::{HashMap, HashSet};

use crate::config::*;
use crate::labels::{AnswerLabelMap, CodeDomain};

/// The answers, enriched with their questions, ready to be projected.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct JoinOutput {
    /// In the order of the answers table.
    pub records: Vec<JoinedRecord>,
    /// The labels of the chart domain, in code order. Used as the axis legend.
    pub legend: Vec<String>,
    pub label_map: &'static AnswerLabelMap,
    pub domain: CodeDomain,
    /// The answers that referred to an unknown question.
    pub dropped: Vec<DroppedAnswer>,
}

/// Joins the answers to the questions.
///
/// This is an inner join on the question key: answers to unknown questions are
/// dropped (or rejected in strict mode) and questions without answers do not
/// appear. The records follow the order of the answers table, so that calling
/// this function twice on the same input gives the same output.
///
/// Errors:
/// * `UnsupportedLanguage` if the language of the options has no labels
/// * `Schema` with all the missing columns of both tables
/// * `MalformedValue` if an answer code is not an integer
/// * `JoinIntegrity` in strict mode, if an answer was dropped
/// * `EmptyResult` if no answer is left
pub fn join(
    questions: &RawTable,
    answers: &RawTable,
    options: &JoinOptions,
) -> Result<JoinOutput, ChartErrors> {
    let label_map = AnswerLabelMap::for_tag(&options.language)?;
    check_schema(questions, answers, &options.columns)?;

    let question_list = read_questions(questions, &options.columns)?;
    let answer_list = read_answers(answers, &options.columns)?;
    info!(
        "join: {} questions, {} answers, language: {}",
        question_list.len(),
        answer_list.len(),
        label_map.language().tag()
    );

    let mut question_by_key: HashMap<String, Question> = HashMap::new();
    for q in question_list {
        if question_by_key.contains_key(&q.key) {
            warn!("join: question {:?} is defined more than once, keeping the first definition", q.key);
        } else {
            question_by_key.insert(q.key.clone(), q);
        }
    }

    let mut records: Vec<JoinedRecord> = Vec::new();
    let mut dropped: Vec<DroppedAnswer> = Vec::new();
    for (row, a) in answer_list {
        if options.applicability_filter && a.applicable == Some(false) {
            debug!("join: row {}: not applicable, skipping {:?}", row, a);
            continue;
        }
        if let Some(group) = &options.group_filter {
            if a.group_id != group.trim() {
                continue;
            }
        }
        match question_by_key.get(&a.question_key) {
            Some(q) => {
                records.push(JoinedRecord {
                    group_id: a.group_id,
                    question_key: q.key.clone(),
                    question_text: q.text.clone(),
                    enumerated_text: enumerate_text(&q.key, &q.text),
                    shorthand: q.shorthand.clone(),
                    code: a.code,
                    label: label_map.resolve(a.code).to_string(),
                });
            }
            None => {
                dropped.push(DroppedAnswer {
                    row,
                    group_id: a.group_id,
                    question_key: a.question_key,
                });
            }
        }
    }

    if !dropped.is_empty() {
        let missing_keys = distinct_keys(&dropped);
        if options.strict {
            return Err(ChartErrors::JoinIntegrity { missing_keys });
        }
        warn!(
            "join: dropped {} answers to unknown questions {:?}",
            dropped.len(),
            missing_keys
        );
    }

    if records.is_empty() {
        return Err(ChartErrors::EmptyResult);
    }

    let domain = label_map.domain(options.not_relevant);
    info!(
        "join: {} records, {} dropped, legend: {:?}",
        records.len(),
        dropped.len(),
        domain.labels()
    );
    Ok(JoinOutput {
        records,
        legend: domain.labels(),
        label_map,
        domain,
        dropped,
    })
}

/// The text of a question, prefixed by its key: `"3: Is the data validated?"`.
pub fn enumerate_text(key: &str, text: &str) -> String {
    format!("{}: {}", key, text)
}

/// Reads the questions table.
pub fn read_questions(table: &RawTable, columns: &ColumnNames) -> Result<Vec<Question>, ChartErrors> {
    let key_idx = required_index(table, "questions", &columns.question_key)?;
    let text_idx = required_index(table, "questions", &columns.question_text)?;
    let shorthand_idx = table.column_index(&columns.shorthand);

    let mut res: Vec<Question> = Vec::new();
    for (row, line) in table.rows.iter().enumerate() {
        let key = RawTable::cell(line, key_idx);
        if key.is_empty() {
            warn!("read_questions: row {}: no question key, skipping", row);
            continue;
        }
        let shorthand = shorthand_idx
            .map(|idx| RawTable::cell(line, idx))
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());
        res.push(Question {
            key: normalize_key(key),
            text: RawTable::cell(line, text_idx).to_string(),
            shorthand,
        });
    }
    Ok(res)
}

/// Reads the answers table, along with the position of each answer in the table.
///
/// Answers without a code are skipped: they cannot be charted.
pub fn read_answers(
    table: &RawTable,
    columns: &ColumnNames,
) -> Result<Vec<(usize, Answer)>, ChartErrors> {
    let group_idx = required_index(table, "answers", &columns.group)?;
    let key_idx = required_index(table, "answers", &columns.answer_question_key)?;
    let code_idx = required_index(table, "answers", &columns.answer_code)?;
    let applicable_idx = table.column_index(&columns.applicable);

    let mut res: Vec<(usize, Answer)> = Vec::new();
    for (row, line) in table.rows.iter().enumerate() {
        let code_s = RawTable::cell(line, code_idx);
        if code_s.is_empty() {
            warn!("read_answers: row {}: no answer code, skipping", row);
            continue;
        }
        let code = parse_code(code_s).ok_or_else(|| ChartErrors::MalformedValue {
            table: "answers".to_string(),
            column: columns.answer_code.clone(),
            row,
            value: code_s.to_string(),
        })?;
        let applicable = applicable_idx.and_then(|idx| parse_bool(RawTable::cell(line, idx)));
        res.push((
            row,
            Answer {
                group_id: RawTable::cell(line, group_idx).to_string(),
                question_key: normalize_key(RawTable::cell(line, key_idx)),
                code,
                applicable,
            },
        ));
    }
    Ok(res)
}

fn check_schema(
    questions: &RawTable,
    answers: &RawTable,
    columns: &ColumnNames,
) -> Result<(), ChartErrors> {
    let required = [
        ("questions", questions, &columns.question_key),
        ("questions", questions, &columns.question_text),
        ("answers", answers, &columns.group),
        ("answers", answers, &columns.answer_question_key),
        ("answers", answers, &columns.answer_code),
    ];
    let missing_columns: Vec<String> = required
        .iter()
        .filter(|(_, table, name)| table.column_index(name).is_none())
        .map(|(table_name, _, name)| format!("{}.{}", table_name, name))
        .collect();
    if missing_columns.is_empty() {
        Ok(())
    } else {
        Err(ChartErrors::Schema { missing_columns })
    }
}

fn required_index(table: &RawTable, table_name: &str, name: &str) -> Result<usize, ChartErrors> {
    table.column_index(name).ok_or_else(|| ChartErrors::Schema {
        missing_columns: vec![format!("{}.{}", table_name, name)],
    })
}

// Integer keys are compared as numbers: "01" and "1" are the same question.
fn normalize_key(s: &str) -> String {
    let s = s.trim();
    match s.parse::<i64>() {
        Ok(x) => x.to_string(),
        Err(_) => s.to_string(),
    }
}

// Spreadsheets tend to store integers as floats: "3.0" is accepted.
fn parse_code(s: &str) -> Option<i64> {
    if let Ok(x) = s.parse::<i64>() {
        return Some(x);
    }
    match s.parse::<f64>() {
        // i64::MAX as f64 is 2^63, which does not fit.
        Ok(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
            Some(f as i64)
        }
        _ => None,
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn distinct_keys(dropped: &[DroppedAnswer]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    dropped
        .iter()
        .filter(|d| seen.insert(d.question_key.as_str()))
        .map(|d| d.question_key.clone())
        .collect()
}
