use crate::draviz::*;

use readiness_charts::ColumnNames;
use serde::{Deserialize, Serialize};
use serde_json::Value as JSValue;

/// Overrides of the column names of the input tables.
#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnsConfig {
    #[serde(rename = "questionKey")]
    pub question_key: Option<String>,
    #[serde(rename = "questionText")]
    pub question_text: Option<String>,
    pub shorthand: Option<String>,
    pub group: Option<String>,
    #[serde(rename = "answerQuestionKey")]
    pub answer_question_key: Option<String>,
    #[serde(rename = "answerCode")]
    pub answer_code: Option<String>,
    pub applicable: Option<String>,
}

impl ColumnsConfig {
    pub fn apply(&self, columns: &mut ColumnNames) {
        let overrides = [
            (&self.question_key, &mut columns.question_key),
            (&self.question_text, &mut columns.question_text),
            (&self.shorthand, &mut columns.shorthand),
            (&self.group, &mut columns.group),
            (&self.answer_question_key, &mut columns.answer_question_key),
            (&self.answer_code, &mut columns.answer_code),
            (&self.applicable, &mut columns.applicable),
        ];
        for (o, c) in overrides {
            if let Some(name) = o {
                *c = name.clone();
            }
        }
    }
}

/// The configuration file. Every key is optional.
#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct DravizConfig {
    #[serde(rename = "questionsFile")]
    pub questions_file: Option<String>,
    #[serde(rename = "answersFile")]
    pub answers_file: Option<String>,
    pub language: Option<String>,
    pub phases: Option<Vec<String>>,
    pub chart: Option<String>,
    #[serde(rename = "groupColumn")]
    pub group_column: Option<String>,
    pub group: Option<String>,
    #[serde(rename = "enumerateQuestions")]
    pub enumerate_questions: Option<bool>,
    #[serde(rename = "useShorthand")]
    pub use_shorthand: Option<bool>,
    #[serde(rename = "applicabilityFilter")]
    pub applicability_filter: Option<bool>,
    #[serde(rename = "notRelevant")]
    pub not_relevant: Option<String>,
    pub strict: Option<bool>,
    #[serde(rename = "inputType")]
    pub input_type: Option<String>,
    #[serde(rename = "excelWorksheetName")]
    pub excel_worksheet_name: Option<String>,
    #[serde(rename = "questionsWorksheetName")]
    pub questions_worksheet_name: Option<String>,
    #[serde(rename = "answersWorksheetName")]
    pub answers_worksheet_name: Option<String>,
    pub columns: Option<ColumnsConfig>,
}

pub fn read_config(path: &str) -> DravizResult<DravizConfig> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    debug!("read_config: content: {:?}", contents);
    let config: DravizConfig =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })?;
    Ok(config)
}

pub fn read_reference(path: &str) -> DravizResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })?;
    Ok(js)
}
