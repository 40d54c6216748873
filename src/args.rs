use clap::Parser;

/// This program generates radar charts and parallel coordinates charts for displaying the answers to questions
/// about data readiness.
#[derive(Parser, Debug, Clone, Default)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path) A CSV or Excel file containing the questions about data readiness.
    #[clap(short, long, value_parser)]
    pub questions: Option<String>,

    /// (file path) A CSV or Excel file containing the answers to the questions about data readiness.
    #[clap(short, long, value_parser)]
    pub answers: Option<String>,

    /// (default en) ISO 639-1 code of the language used for labelling the axes of the charts.
    #[clap(short, long, value_parser = ["en", "sv"])]
    pub language: Option<String>,

    /// (list of comma-separated values) The phases to include in the radar chart. The phases available depend on
    /// the values in the group column of the answers file.
    #[clap(short, long, value_parser)]
    pub phases: Option<String>,

    /// (default radar) The type of chart to produce.
    #[clap(long, value_parser = ["radar", "parallel"])]
    pub chart: Option<String>,

    /// (default Phase) The column of the answers file that identifies the groups (for example Company).
    #[clap(long, value_parser)]
    pub group_column: Option<String>,

    /// If specified, only the answers of this group are read.
    #[clap(long, value_parser)]
    pub group: Option<String>,

    /// If passed as an argument, the categories are the question texts without their keys.
    #[clap(long, takes_value = false)]
    pub plain_questions: bool,

    /// If passed as an argument, the categories are the shorthands of the questions.
    #[clap(long, takes_value = false)]
    pub shorthand: bool,

    /// If passed as an argument, the answers marked as not applicable are kept.
    #[clap(long, takes_value = false)]
    pub include_inapplicable: bool,

    /// If passed as an argument, the "not relevant" answers are drawn on the charts.
    #[clap(long, takes_value = false)]
    pub retain_not_relevant: bool,

    /// If passed as an argument, answers to unknown questions make the program fail instead of being dropped.
    #[clap(long, takes_value = false)]
    pub strict: bool,

    /// (file path, optional) A JSON configuration file. The flags passed on the command line take precedence.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path, 'stdout' or empty) Where to write the chart document in JSON format. Defaults to the standard output.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) A reference chart document in JSON format. If provided, draviz will check that the produced
    /// document matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// (csv or excel) The type of the input files. By default, it is guessed from the file extension.
    #[clap(long, value_parser = ["csv", "excel"])]
    pub input_type: Option<String>,

    /// (default: the first worksheet) When using Excel files, indicates the name of the worksheet to use in both
    /// the questions file and the answers file.
    #[clap(long, value_parser)]
    pub excel_worksheet_name: Option<String>,

    /// (default: --excel-worksheet-name) The worksheet of the questions file, when it is an Excel file.
    #[clap(long, value_parser)]
    pub questions_worksheet_name: Option<String>,

    /// (default: --excel-worksheet-name) The worksheet of the answers file, when it is an Excel file.
    #[clap(long, value_parser)]
    pub answers_worksheet_name: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
