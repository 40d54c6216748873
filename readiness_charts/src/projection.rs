//! Reshapes the joined records into the series of a radar chart or the
//! dimensions of a parallel coordinates chart.

use log::{debug, info, warn};
use std::collections::HashMap;

use crate::config::*;
use crate::labels::CodeDomain;

/// The distinct categories of the records, in the order they first appear.
///
/// This order is shared by all the groups and all the chart types, so that the
/// axes of the charts stay aligned.
pub fn categories(records: &[JoinedRecord], strategy: CategoryLabelStrategy) -> Vec<String> {
    let mut res: Vec<String> = Vec::new();
    for r in records {
        let c = r.category(strategy);
        if !res.iter().any(|x| x == c) {
            res.push(c.to_string());
        }
    }
    res
}

/// The categories that more than one question maps to, with the keys of these
/// questions in the order they first appear.
///
/// The projections key their axes on the category label, so the answers to
/// these questions end up on the same axis.
pub fn shared_categories(
    records: &[JoinedRecord],
    strategy: CategoryLabelStrategy,
) -> Vec<(String, Vec<String>)> {
    let mut keys: Vec<(&str, Vec<&str>)> = Vec::new();
    for r in records {
        let c = r.category(strategy);
        match keys.iter_mut().find(|(x, _)| *x == c) {
            Some((_, ks)) => {
                if !ks.contains(&r.question_key.as_str()) {
                    ks.push(r.question_key.as_str());
                }
            }
            None => keys.push((c, vec![r.question_key.as_str()])),
        }
    }
    keys.into_iter()
        .filter(|(_, ks)| ks.len() > 1)
        .map(|(c, ks)| (c.to_string(), ks.iter().map(|k| k.to_string()).collect()))
        .collect()
}

fn warn_shared_categories(caller: &str, records: &[JoinedRecord], strategy: CategoryLabelStrategy) {
    for (c, ks) in shared_categories(records, strategy) {
        warn!(
            "{}: questions {:?} share the category {:?} and are drawn on one axis",
            caller, ks, c
        );
    }
}

/// Builds one radar series per requested group, in the order of the groups.
///
/// The entries of a series follow the category order of [`categories`]. A
/// category that a group did not answer is absent from its series: no value is
/// made up for it. The answers that the domain does not plot are left out the
/// same way.
pub fn build_radial(
    records: &[JoinedRecord],
    domain: &CodeDomain,
    strategy: CategoryLabelStrategy,
    groups: &[String],
) -> Vec<Series> {
    let cats = categories(records, strategy);
    warn_shared_categories("build_radial", records, strategy);

    // The first plotted answer of each group for each category.
    let mut answered: HashMap<(&str, &str), &JoinedRecord> = HashMap::new();
    for r in records.iter().filter(|r| domain.plots(r.code)) {
        let k = (r.group_id.as_str(), r.category(strategy));
        match answered.get(&k) {
            Some(first) if first.question_key != r.question_key => warn!(
                "build_radial: group {:?} answered questions {:?} and {:?} on the category {:?}, keeping question {:?}",
                k.0, first.question_key, r.question_key, k.1, first.question_key
            ),
            Some(_) => debug!("build_radial: duplicate answer {:?}, keeping the first one", k),
            None => {
                answered.insert(k, r);
            }
        }
    }

    let mut res: Vec<Series> = Vec::new();
    for group in groups {
        let group = group.trim();
        let entries: Vec<SeriesEntry> = cats
            .iter()
            .filter_map(|c| answered.get(&(group, c.as_str())))
            .map(|r| SeriesEntry {
                category: r.category(strategy).to_string(),
                code: r.code,
                label: r.label.clone(),
            })
            .collect();
        if entries.is_empty() {
            warn!("build_radial: no answer to plot for group {:?}", group);
        }
        debug!("build_radial: group {:?}: {} entries", group, entries.len());
        res.push(Series {
            group_id: group.to_string(),
            entries,
        });
    }
    info!(
        "build_radial: {} series over {} categories",
        res.len(),
        cats.len()
    );
    res
}

/// Builds one parallel coordinates dimension per category.
///
/// A line is a group, or the n-th answer of a group when it answered a question
/// more than once. Lines are numbered in the order they first appear, and every
/// dimension holds exactly one value per line, tagged with the group of the
/// line. The range of each dimension is the range of the domain, whatever the
/// observed answers are.
pub fn build_parallel(
    records: &[JoinedRecord],
    domain: &CodeDomain,
    strategy: CategoryLabelStrategy,
) -> Vec<Dimension> {
    let cats = categories(records, strategy);
    warn_shared_categories("build_parallel", records, strategy);
    let range = domain.range();

    let mut lines: Vec<(&str, usize)> = Vec::new();
    let mut line_ids: HashMap<(&str, usize), usize> = HashMap::new();
    let mut occurrences: HashMap<(&str, &str), usize> = HashMap::new();
    let mut cells: HashMap<(usize, &str), i64> = HashMap::new();
    for r in records {
        let category = r.category(strategy);
        let occ = occurrences
            .entry((r.group_id.as_str(), category))
            .or_insert(0);
        let line_key = (r.group_id.as_str(), *occ);
        *occ += 1;
        let line = *line_ids.entry(line_key).or_insert_with(|| {
            lines.push(line_key);
            lines.len() - 1
        });
        if domain.plots(r.code) {
            cells.insert((line, category), r.code);
        }
    }

    let res: Vec<Dimension> = cats
        .iter()
        .map(|c| Dimension {
            label: c.clone(),
            range,
            values: lines
                .iter()
                .enumerate()
                .map(|(line, (group_id, _))| DimensionValue {
                    line,
                    group_id: group_id.to_string(),
                    code: cells.get(&(line, c.as_str())).copied(),
                })
                .collect(),
        })
        .collect();
    info!(
        "build_parallel: {} dimensions, {} lines, range {:?}",
        res.len(),
        lines.len(),
        range
    );
    res
}
