/*!

This is the long-form manual for `readiness_charts` and `draviz`.

## Input tables

Two tables are read, either as CSV files or as Excel (.xlsx) worksheets. The
first row holds the column names. Columns are found by name, so their order does
not matter and extra columns are ignored.

### Questions

```text
Question,Question_text,Shorthand
1,Do you have programmatic access to the data?,Programmatic access to data
2,Are your licenses in order?,Licenses in order
```

- `Question` (required): the key of the question. Integer keys are compared as
  numbers (`01` is the same question as `1`).
- `Question_text` (required): the text used as the category of the charts.
- `Shorthand` (optional): a short label, used with the shorthand category labels.

### Answers

```text
Phase,Question,Answer,Applicable
Projektstart,1,3,True
Projektstart,2,1,False
Mitten av projektet,1,2,
```

- `Phase` (required): the group that answered. Data collected per company
  usually calls this column `Company`; see the `groupColumn` option.
- `Question` (required): the key of the question answered.
- `Answer` (required): the answer code. Integers only (`3.0` is accepted).
  Blank answers are skipped.
- `Applicable` (optional): `False` marks a question that does not apply to
  this group. These answers are dropped unless the applicability filter is
  turned off. Any other value counts as applicable.

Answers to a question that is not in the questions table are dropped with a
warning. In strict mode, they make the whole run fail instead.

## "Not relevant" answers

The code 4 (`Not relevant`) is handled according to the policy:
- `exclude` (default): the value axis goes from 0 to 3 and these answers are
  not drawn,
- `retain`: the value axis goes from 0 to 4 and they are drawn as any other answer.

Codes without a label (for example 7) are labelled `Undefined` and drawn as
they are.

## Configuration

`draviz` accepts a configuration file in JSON. All the keys are optional and
the command line flags take precedence over them.

```text
{
  "questionsFile": "questions_en.csv",
  "answersFile": "data.csv",
  "language": "en",
  "chart": "radar",
  "phases": ["Acme"],
  "groupColumn": "Company",
  "enumerateQuestions": true,
  "applicabilityFilter": true,
  "notRelevant": "exclude",
  "strict": false,
  "columns": { "questionText": "Question_text" }
}
```

The paths are relative to the directory of the configuration file.

With Excel files, `excelWorksheetName` names the worksheet read in both files.
`questionsWorksheetName` and `answersWorksheetName` name it for one file only,
for example when both tables are worksheets of the same workbook. Without any
of them the first worksheet is read.

A chart with nothing to draw is an error: this happens when none of the
requested phases has an answer, or when all the answers are `Not relevant`
under the `exclude` policy.

 */
