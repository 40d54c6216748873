// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

/// A table as it comes out of a source file: the header row and the data rows,
/// every cell kept as text.
///
/// The readers of the command line tool (CSV, Excel) produce this structure. The
/// joiner only ever looks up columns by name, so the column order is free.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct RawTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> RawTable {
        RawTable { header, rows }
    }

    /// The position of a column, matched on the trimmed header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h.trim() == name.trim())
    }

    /// The content of a cell. Rows shorter than the header read as blank cells.
    pub(crate) fn cell<'a>(row: &'a [String], idx: usize) -> &'a str {
        row.get(idx).map(|s| s.trim()).unwrap_or("")
    }
}

/// The names of the columns that the joiner reads in each table.
///
/// The defaults follow the files of the data readiness assessment:
/// `Question,Question_text` for the questions and
/// `Phase,Question,Answer,Applicable` for the answers.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ColumnNames {
    /// Questions table: the question key.
    pub question_key: String,
    /// Questions table: the text displayed for the question.
    pub question_text: String,
    /// Questions table, optional: a short label for the question.
    pub shorthand: String,
    /// Answers table: the group (company, phase, respondent) that answered.
    pub group: String,
    /// Answers table: the key of the question being answered.
    pub answer_question_key: String,
    /// Answers table: the numeric answer code.
    pub answer_code: String,
    /// Answers table, optional: whether the question applies to the group.
    pub applicable: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        ColumnNames {
            question_key: "Question".to_string(),
            question_text: "Question_text".to_string(),
            shorthand: "Shorthand".to_string(),
            group: "Phase".to_string(),
            answer_question_key: "Question".to_string(),
            answer_code: "Answer".to_string(),
            applicable: "Applicable".to_string(),
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Question {
    pub key: String,
    pub text: String,
    pub shorthand: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Answer {
    pub group_id: String,
    pub question_key: String,
    pub code: i64,
    /// `None` when the table has no applicability column or the cell is not a boolean.
    pub applicable: Option<bool>,
}

/// The languages in which answer labels can be displayed.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum Language {
    English,
    Swedish,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Swedish];

    /// The ISO 639-1 code of the language.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Swedish => "sv",
        }
    }

    pub fn from_tag(tag: &str) -> Result<Language, ChartErrors> {
        Language::ALL
            .iter()
            .find(|l| l.tag().eq_ignore_ascii_case(tag.trim()))
            .copied()
            .ok_or_else(|| ChartErrors::UnsupportedLanguage {
                tag: tag.to_string(),
            })
    }
}

/// What to do with the "not relevant" answer (code 4).
///
/// - Exclude: the chart domain is 0..=3 and answers coded 4 are left out of the
/// projections. This is what the command line radar chart always did.
///
/// - Retain: the chart domain is 0..=4 and "not relevant" is plotted like any
/// other answer, as the assessment form offers it as a regular choice.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum NotRelevantPolicy {
    Exclude,
    Retain,
}

/// Which text of a question is used as the category (axis label) of a chart.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum CategoryLabelStrategy {
    /// The question text.
    Plain,
    /// The question key and the question text: `"3: Is the data validated?"`.
    Enumerated,
    /// The shorthand of the question, or the plain text if there is none.
    Shorthand,
}

/// The options that govern a join.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct JoinOptions {
    /// ISO 639-1 tag of the language of the answer labels.
    pub language: String,
    /// Drops the answers explicitly marked as not applicable.
    pub applicability_filter: bool,
    /// Only keeps the answers of this group.
    pub group_filter: Option<String>,
    /// Fails instead of dropping answers that refer to unknown questions.
    pub strict: bool,
    pub not_relevant: NotRelevantPolicy,
    pub columns: ColumnNames,
}

impl JoinOptions {
    pub fn new(language: &str) -> JoinOptions {
        JoinOptions {
            language: language.to_string(),
            applicability_filter: true,
            group_filter: None,
            strict: false,
            not_relevant: NotRelevantPolicy::Exclude,
            columns: ColumnNames::default(),
        }
    }
}

// ******** Output data structures *********

/// An answer enriched with the question it refers to and the label of its code.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct JoinedRecord {
    pub group_id: String,
    pub question_key: String,
    pub question_text: String,
    /// `"<key>: <text>"`
    pub enumerated_text: String,
    pub shorthand: Option<String>,
    pub code: i64,
    pub label: String,
}

impl JoinedRecord {
    pub fn category(&self, strategy: CategoryLabelStrategy) -> &str {
        match strategy {
            CategoryLabelStrategy::Plain => &self.question_text,
            CategoryLabelStrategy::Enumerated => &self.enumerated_text,
            CategoryLabelStrategy::Shorthand => {
                self.shorthand.as_deref().unwrap_or(&self.question_text)
            }
        }
    }
}

/// An answer removed by the join because its question is unknown.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct DroppedAnswer {
    /// Position of the row in the answers table (0 is the first data row).
    pub row: usize,
    pub group_id: String,
    pub question_key: String,
}

/// One polygon of a radar chart.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Series {
    pub group_id: String,
    pub entries: Vec<SeriesEntry>,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct SeriesEntry {
    pub category: String,
    pub code: i64,
    pub label: String,
}

/// The fixed radial axis of a radar chart.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct RadialAxis {
    pub tick_values: Vec<i64>,
    pub tick_labels: Vec<String>,
    pub range: (i64, i64),
}

/// One vertical axis of a parallel coordinates chart.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Dimension {
    pub label: String,
    /// Fixed by the code domain, not by the observed answers.
    pub range: (i64, i64),
    /// One value per line, in line order.
    pub values: Vec<DimensionValue>,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct DimensionValue {
    /// The index of the polyline that crosses this axis.
    pub line: usize,
    pub group_id: String,
    /// `None` when this line has no answer for the category.
    pub code: Option<i64>,
}

/// Errors that prevent the charts from being assembled.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum ChartErrors {
    /// Required columns are absent. Each name is prefixed by its table: `answers.Answer`.
    Schema { missing_columns: Vec<String> },
    /// A cell of a required column cannot be read.
    MalformedValue {
        table: String,
        column: String,
        row: usize,
        value: String,
    },
    UnsupportedLanguage { tag: String },
    /// Nothing left to plot after filtering and joining.
    EmptyResult,
    /// Strict mode only: some answers refer to questions that do not exist.
    JoinIntegrity { missing_keys: Vec<String> },
}

impl Error for ChartErrors {}

impl Display for ChartErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartErrors::Schema { missing_columns } => {
                write!(f, "missing required columns: {}", missing_columns.join(", "))
            }
            ChartErrors::MalformedValue {
                table,
                column,
                row,
                value,
            } => write!(
                f,
                "cannot read value {:?} in column {} of the {} table (row {})",
                value, column, table, row
            ),
            ChartErrors::UnsupportedLanguage { tag } => {
                let supported: Vec<&str> = Language::ALL.iter().map(|l| l.tag()).collect();
                write!(
                    f,
                    "unsupported language {:?} (supported: {})",
                    tag,
                    supported.join(", ")
                )
            }
            ChartErrors::EmptyResult => {
                write!(f, "no answer left to plot after filtering and joining")
            }
            ChartErrors::JoinIntegrity { missing_keys } => write!(
                f,
                "answers refer to unknown questions: {}",
                missing_keys.join(", ")
            ),
        }
    }
}
