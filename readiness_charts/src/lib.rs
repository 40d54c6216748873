/*!
Assembles data readiness assessments into chart-ready projections.

An assessment is a fixed catalog of questions and, for each group (a company,
a project phase, a respondent), one answer code per question:

| code | en         | sv       |
|------|------------|----------|
| 0    | Don't know | Vet inte |
| 1    | No         | Nej      |
| 2    | Partially  | Delvis   |
| 3    | Yes        | Ja       |
| 4    | Not relevant | Inte relevant |

The crate works in two steps, both pure and deterministic:
- [`join`] reads the two tables, filters the answers, joins them to their
  questions and resolves the labels of the codes,
- [`build_radial`] and [`build_parallel`] reshape the joined records into the
  series of a radar chart or the dimensions of a parallel coordinates chart.

```
use readiness_charts::*;
# fn table(header: &[&str], rows: &[&[&str]]) -> RawTable {
#     RawTable::new(
#         header.iter().map(|s| s.to_string()).collect(),
#         rows.iter().map(|r| r.iter().map(|s| s.to_string()).collect()).collect(),
#     )
# }

let questions = table(&["Question", "Question_text"], &[&["1", "Q1"], &["2", "Q2"]]);
let answers = table(
    &["Phase", "Question", "Answer"],
    &[&["Start", "1", "3"], &["Start", "2", "1"], &["End", "1", "0"]],
);

let out = join(&questions, &answers, &JoinOptions::new("en"))?;
let series = build_radial(
    &out.records,
    &out.domain,
    CategoryLabelStrategy::Enumerated,
    &["Start".to_string(), "End".to_string()],
);
assert_eq!(series[0].entries[0].label, "Yes");
assert_eq!(series[1].entries.len(), 1);
# Ok::<(), ChartErrors>(())
```

See the [manual] for the layout of the input tables.
*/

mod config;
mod joiner;
mod labels;
pub mod manual;
mod projection;

pub use crate::config::*;
pub use crate::joiner::{enumerate_text, join, read_answers, read_questions, JoinOutput};
pub use crate::labels::{AnswerLabelMap, CodeDomain, NOT_RELEVANT_CODE, UNDEFINED_LABEL};
pub use crate::projection::{build_parallel, build_radial, categories, shared_categories};
