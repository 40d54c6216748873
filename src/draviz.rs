use log::{debug, info, warn};

use readiness_charts::*;
use snafu::{prelude::*, Snafu};

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;
use crate::draviz::config_reader::*;
use crate::draviz::io_common::*;

pub mod config_reader;
pub mod figure;
pub mod io_common;
pub mod io_csv;
pub mod io_excel;

#[derive(Debug, Snafu)]
pub enum DravizError {
    #[snafu(display("Error opening CSV file {path}"))]
    CsvOpen { source: csv::Error, path: String },
    #[snafu(display("Error reading line {lineno} of CSV file {path}"))]
    CsvLineParse {
        source: csv::Error,
        path: String,
        lineno: usize,
    },
    #[snafu(display("Error opening Excel file {path}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display("Excel file {path} has no worksheet or no header row"))]
    EmptyExcel { path: String },
    #[snafu(display("Excel file {path} has no worksheet named {name}"))]
    MissingWorksheet { path: String, name: String },
    #[snafu(display("Error opening JSON file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing JSON file {path}"))]
    ParsingJson {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Error serializing the chart document"))]
    WritingJson { source: serde_json::Error },
    #[snafu(display("Error writing the chart document to {path}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Missing argument: {name} (use the command line or the configuration file)"))]
    MissingArgument { name: String },
    #[snafu(display("Cannot assemble the charts: {source}"))]
    Charts { source: ChartErrors },
    #[snafu(display("Difference detected between the chart document and the reference {path}"))]
    ReferenceMismatch { path: String },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type DravizResult<T> = Result<T, DravizError>;

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum ChartType {
    Radar,
    Parallel,
}

impl ChartType {
    fn parse(s: &str) -> DravizResult<ChartType> {
        match s {
            "radar" => Ok(ChartType::Radar),
            "parallel" => Ok(ChartType::Parallel),
            x => whatever!("unknown chart type {:?} (expected radar or parallel)", x),
        }
    }
}

/// Everything needed to produce one chart document, once the command line and
/// the configuration file have been merged.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Settings {
    pub questions_path: String,
    pub answers_path: String,
    pub chart: ChartType,
    pub phases: Vec<String>,
    pub strategy: CategoryLabelStrategy,
    pub join_options: JoinOptions,
    pub input_type: Option<InputType>,
    pub questions_worksheet: Option<String>,
    pub answers_worksheet: Option<String>,
    pub out: Option<String>,
    pub reference: Option<String>,
}

/// Merges the command line with the configuration file. The command line wins.
pub fn resolve_settings(
    args: &Args,
    config: &DravizConfig,
    config_dir: Option<&Path>,
) -> DravizResult<Settings> {
    let relative = |p: &String| -> String {
        match config_dir {
            Some(dir) => dir.join(p).display().to_string(),
            None => p.clone(),
        }
    };

    let questions_path = args
        .questions
        .clone()
        .or_else(|| config.questions_file.as_ref().map(relative))
        .context(MissingArgumentSnafu { name: "questions" })?;
    let answers_path = args
        .answers
        .clone()
        .or_else(|| config.answers_file.as_ref().map(relative))
        .context(MissingArgumentSnafu { name: "answers" })?;

    let language = args
        .language
        .clone()
        .or_else(|| config.language.clone())
        .unwrap_or_else(|| "en".to_string());
    // Fail early, before any file is opened.
    Language::from_tag(&language).context(ChartsSnafu {})?;

    let chart = ChartType::parse(
        args.chart
            .as_deref()
            .or(config.chart.as_deref())
            .unwrap_or("radar"),
    )?;

    let phases: Vec<String> = match (&args.phases, &config.phases) {
        (Some(s), _) => split_list(s),
        (None, Some(l)) => l.iter().map(|s| s.trim().to_string()).collect(),
        (None, None) => Vec::new(),
    };

    let strategy = if args.shorthand || config.use_shorthand == Some(true) {
        CategoryLabelStrategy::Shorthand
    } else if args.plain_questions || config.enumerate_questions == Some(false) {
        CategoryLabelStrategy::Plain
    } else {
        CategoryLabelStrategy::Enumerated
    };

    let not_relevant = if args.retain_not_relevant {
        NotRelevantPolicy::Retain
    } else {
        match config.not_relevant.as_deref() {
            None | Some("exclude") => NotRelevantPolicy::Exclude,
            Some("retain") => NotRelevantPolicy::Retain,
            Some(x) => whatever!("unknown notRelevant policy {:?} (expected exclude or retain)", x),
        }
    };

    let mut columns = ColumnNames::default();
    if let Some(cc) = &config.columns {
        cc.apply(&mut columns);
    }
    if let Some(g) = args.group_column.clone().or_else(|| config.group_column.clone()) {
        columns.group = g;
    }

    let join_options = JoinOptions {
        language,
        applicability_filter: !args.include_inapplicable
            && config.applicability_filter.unwrap_or(true),
        group_filter: args.group.clone().or_else(|| config.group.clone()),
        strict: args.strict || config.strict.unwrap_or(false),
        not_relevant,
        columns,
    };

    let input_type = match args.input_type.as_deref().or(config.input_type.as_deref()) {
        Some(s) => Some(InputType::parse(s)?),
        None => None,
    };

    // A worksheet named for one file takes precedence over the shared name.
    let shared_worksheet = args
        .excel_worksheet_name
        .clone()
        .or_else(|| config.excel_worksheet_name.clone());
    let questions_worksheet = args
        .questions_worksheet_name
        .clone()
        .or_else(|| config.questions_worksheet_name.clone())
        .or_else(|| shared_worksheet.clone());
    let answers_worksheet = args
        .answers_worksheet_name
        .clone()
        .or_else(|| config.answers_worksheet_name.clone())
        .or(shared_worksheet);

    Ok(Settings {
        questions_path,
        answers_path,
        chart,
        phases,
        strategy,
        join_options,
        input_type,
        questions_worksheet,
        answers_worksheet,
        out: args.out.clone(),
        reference: args.reference.clone(),
    })
}

/// Reads the tables and assembles the chart document for the renderer.
pub fn build_document(settings: &Settings) -> DravizResult<JSValue> {
    let questions = read_table(
        &settings.questions_path,
        settings.input_type,
        settings.questions_worksheet.as_deref(),
    )?;
    let answers = read_table(
        &settings.answers_path,
        settings.input_type,
        settings.answers_worksheet.as_deref(),
    )?;

    let out = join(&questions, &answers, &settings.join_options).context(ChartsSnafu {})?;
    for d in out.dropped.iter() {
        debug!("build_document: dropped answer {:?}", d);
    }
    let cats = categories(&out.records, settings.strategy);

    let document = match settings.chart {
        ChartType::Radar => {
            if settings.phases.is_empty() {
                return MissingArgumentSnafu { name: "phases" }.fail();
            }
            let series = build_radial(&out.records, &out.domain, settings.strategy, &settings.phases);
            if series.iter().all(|s| s.entries.is_empty()) {
                warn!(
                    "build_document: nothing to plot for the phases {:?}",
                    settings.phases
                );
                return Err(ChartErrors::EmptyResult).context(ChartsSnafu {});
            }
            figure::radar_figure(&series, &cats, &out.domain.radial_axis())
        }
        ChartType::Parallel => {
            let dims = build_parallel(&out.records, &out.domain, settings.strategy);
            if dims.iter().all(|d| d.values.iter().all(|v| v.code.is_none())) {
                warn!("build_document: every answer is left out of the parallel chart");
                return Err(ChartErrors::EmptyResult).context(ChartsSnafu {});
            }
            figure::parallel_figure(&dims, &out.domain.radial_axis())
        }
    };
    Ok(document)
}

pub fn run(args: &Args) -> DravizResult<()> {
    let (config, config_dir) = match &args.config {
        Some(p) => {
            let config = read_config(p)?;
            info!("config: {:?}", config);
            let dir: Option<PathBuf> = Path::new(p).parent().map(|d| d.to_path_buf());
            (config, dir)
        }
        None => (DravizConfig::default(), None),
    };
    let settings = resolve_settings(args, &config, config_dir.as_deref())?;
    info!("settings: {:?}", settings);

    let document = build_document(&settings)?;
    let pretty_js = serde_json::to_string_pretty(&document).context(WritingJsonSnafu {})?;

    match settings.out.as_deref() {
        None | Some("stdout") | Some("") => println!("{}", pretty_js),
        Some(path) => {
            fs::write(path, &pretty_js).context(WritingOutputSnafu { path })?;
            info!("Chart document written to {}", path);
        }
    }

    // The reference document, if provided for comparison
    if let Some(reference_p) = &settings.reference {
        let reference = read_reference(reference_p)?;
        let pretty_js_reference =
            serde_json::to_string_pretty(&reference).context(WritingJsonSnafu {})?;
        if pretty_js_reference != pretty_js {
            warn!("Found differences with the reference document");
            print_diff(pretty_js_reference.as_str(), pretty_js.as_str(), "\n");
            return ReferenceMismatchSnafu {
                path: reference_p.as_str(),
            }
            .fail();
        }
        info!("The chart document matches the reference {}", reference_p);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_dir() -> PathBuf {
        [env!("CARGO_MANIFEST_DIR"), "tests", "data"].iter().collect()
    }

    fn data_file(name: &str) -> String {
        data_dir().join(name).display().to_string()
    }

    fn run_document_test(test_name: &str) {
        let dir = data_dir().join(test_name);
        let args = Args {
            config: Some(dir.join("config.json").display().to_string()),
            reference: Some(dir.join("expected.json").display().to_string()),
            out: Some(
                std::env::temp_dir()
                    .join(format!("draviz_{}.json", test_name))
                    .display()
                    .to_string(),
            ),
            ..Args::default()
        };
        if let Err(e) = run(&args) {
            panic!("test {} failed: {}", test_name, e);
        }
    }

    fn cli_args(chart: &str) -> Args {
        Args {
            questions: Some(data_file("questions_en.csv")),
            answers: Some(data_file("answers_companies.csv")),
            chart: Some(chart.to_string()),
            group_column: Some("Company".to_string()),
            phases: Some("Acme, Other".to_string()),
            ..Args::default()
        }
    }

    #[test]
    fn radar_companies() {
        run_document_test("radar_companies");
    }

    #[test]
    fn radar_phases_sv() {
        run_document_test("radar_phases_sv");
    }

    #[test]
    fn parallel_companies() {
        run_document_test("parallel_companies");
    }

    #[test]
    fn command_line_overrides_config() {
        let config = DravizConfig {
            questions_file: Some("questions_en.csv".to_string()),
            answers_file: Some("answers_phases.csv".to_string()),
            language: Some("sv".to_string()),
            chart: Some("parallel".to_string()),
            enumerate_questions: Some(true),
            not_relevant: Some("retain".to_string()),
            ..DravizConfig::default()
        };
        let args = Args {
            language: Some("en".to_string()),
            plain_questions: true,
            include_inapplicable: true,
            ..Args::default()
        };
        let settings = resolve_settings(&args, &config, Some(Path::new("/data"))).unwrap();
        assert_eq!(settings.questions_path, "/data/questions_en.csv");
        assert_eq!(settings.join_options.language, "en");
        assert_eq!(settings.chart, ChartType::Parallel);
        assert_eq!(settings.strategy, CategoryLabelStrategy::Plain);
        assert_eq!(settings.join_options.not_relevant, NotRelevantPolicy::Retain);
        assert!(!settings.join_options.applicability_filter);
        assert_eq!(settings.join_options.columns.group, "Phase");
    }

    #[test]
    fn missing_questions_file() {
        let args = Args {
            answers: Some("answers.csv".to_string()),
            ..Args::default()
        };
        let res = resolve_settings(&args, &DravizConfig::default(), None);
        assert!(matches!(res, Err(DravizError::MissingArgument { name }) if name == "questions"));
    }

    #[test]
    fn unsupported_language_in_config() {
        let config = DravizConfig {
            language: Some("de".to_string()),
            ..DravizConfig::default()
        };
        let args = cli_args("radar");
        let res = resolve_settings(&args, &config, None);
        assert!(matches!(
            res,
            Err(DravizError::Charts {
                source: ChartErrors::UnsupportedLanguage { .. }
            })
        ));
    }

    #[test]
    fn radar_needs_phases() {
        let mut args = cli_args("radar");
        args.phases = None;
        let settings = resolve_settings(&args, &DravizConfig::default(), None).unwrap();
        let res = build_document(&settings);
        assert!(matches!(res, Err(DravizError::MissingArgument { name }) if name == "phases"));
    }

    #[test]
    fn missing_group_column_is_a_schema_error() {
        let mut args = cli_args("radar");
        args.group_column = Some("Team".to_string());
        let settings = resolve_settings(&args, &DravizConfig::default(), None).unwrap();
        match build_document(&settings) {
            Err(DravizError::Charts {
                source: ChartErrors::Schema { missing_columns },
            }) => assert_eq!(missing_columns, vec!["answers.Team".to_string()]),
            x => panic!("unexpected result {:?}", x),
        }
    }

    #[test]
    fn strict_mode_from_command_line() {
        let mut args = cli_args("radar");
        args.strict = true;
        let settings = resolve_settings(&args, &DravizConfig::default(), None).unwrap();
        match build_document(&settings) {
            Err(DravizError::Charts {
                source: ChartErrors::JoinIntegrity { missing_keys },
            }) => assert_eq!(missing_keys, vec!["99".to_string()]),
            x => panic!("unexpected result {:?}", x),
        }
    }

    #[test]
    fn single_group_filter() {
        let mut args = cli_args("radar");
        args.group = Some("Other".to_string());
        args.phases = Some("Other".to_string());
        let settings = resolve_settings(&args, &DravizConfig::default(), None).unwrap();
        let document = build_document(&settings).unwrap();
        let traces = document["data"].as_array().unwrap();
        assert_eq!(traces.len(), 1);
        assert_eq!(traces[0]["name"], "Other");
        // Only the categories answered by Other remain on the angular axis.
        let categories = document["layout"]["polar"]["angularaxis"]["categoryarray"]
            .as_array()
            .unwrap();
        assert_eq!(categories.len(), 2);
    }

    fn assert_empty_result(res: DravizResult<JSValue>) {
        match res {
            Err(DravizError::Charts {
                source: ChartErrors::EmptyResult,
            }) => {}
            x => panic!("unexpected result {:?}", x),
        }
    }

    #[test]
    fn misspelled_phases_are_an_empty_result() {
        let mut args = cli_args("radar");
        args.phases = Some("Acem,Othr".to_string());
        let settings = resolve_settings(&args, &DravizConfig::default(), None).unwrap();
        assert_empty_result(build_document(&settings));
    }

    #[test]
    fn only_not_relevant_answers_are_an_empty_result() {
        for chart in ["radar", "parallel"] {
            let mut args = cli_args(chart);
            args.answers = Some(data_file("answers_not_relevant.csv"));
            let settings = resolve_settings(&args, &DravizConfig::default(), None).unwrap();
            assert_empty_result(build_document(&settings));

            // Drawn when they are retained.
            args.retain_not_relevant = true;
            let settings = resolve_settings(&args, &DravizConfig::default(), None).unwrap();
            assert!(build_document(&settings).is_ok());
        }
    }

    #[test]
    fn worksheet_per_file() {
        let config = DravizConfig {
            excel_worksheet_name: Some("Sheet1".to_string()),
            answers_worksheet_name: Some("Svar".to_string()),
            ..DravizConfig::default()
        };
        let mut args = cli_args("radar");
        let settings = resolve_settings(&args, &config, None).unwrap();
        assert_eq!(settings.questions_worksheet.as_deref(), Some("Sheet1"));
        assert_eq!(settings.answers_worksheet.as_deref(), Some("Svar"));

        args.excel_worksheet_name = Some("Data".to_string());
        args.questions_worksheet_name = Some("Frågor".to_string());
        let settings = resolve_settings(&args, &config, None).unwrap();
        assert_eq!(settings.questions_worksheet.as_deref(), Some("Frågor"));
        assert_eq!(settings.answers_worksheet.as_deref(), Some("Svar"));
    }

    #[test]
    fn excel_workbook_matches_csv_files() {
        for chart in ["radar", "parallel"] {
            let mut args = cli_args(chart);
            args.include_inapplicable = chart == "parallel";
            let from_csv =
                build_document(&resolve_settings(&args, &DravizConfig::default(), None).unwrap())
                    .unwrap();

            args.questions = Some(data_file("assessment.xlsx"));
            args.answers = Some(data_file("assessment.xlsx"));
            args.questions_worksheet_name = Some("Questions".to_string());
            args.answers_worksheet_name = Some("Answers".to_string());
            let settings = resolve_settings(&args, &DravizConfig::default(), None).unwrap();
            assert_eq!(settings.questions_worksheet.as_deref(), Some("Questions"));
            let from_excel = build_document(&settings).unwrap();
            assert_eq!(from_excel, from_csv);
        }
    }

    #[test]
    fn unknown_chart_type_in_config() {
        let config = DravizConfig {
            chart: Some("pie".to_string()),
            ..DravizConfig::default()
        };
        let mut args = cli_args("radar");
        args.chart = None;
        assert!(resolve_settings(&args, &config, None).is_err());
    }
}
