//! The labels of the answer codes, per language.

use crate::config::*;

/// Rendered for the codes that have no label.
pub const UNDEFINED_LABEL: &str = "Undefined";

/// The code of the "not relevant" answer.
pub const NOT_RELEVANT_CODE: i64 = 4;

const ENGLISH_LABELS: [(i64, &str); 5] = [
    (0, "Don't know"),
    (1, "No"),
    (2, "Partially"),
    (3, "Yes"),
    (NOT_RELEVANT_CODE, "Not relevant"),
];

const SWEDISH_LABELS: [(i64, &str); 5] = [
    (0, "Vet inte"),
    (1, "Nej"),
    (2, "Delvis"),
    (3, "Ja"),
    (NOT_RELEVANT_CODE, "Inte relevant"),
];

// A new language is one more entry here, one more variant of Language and
// one more arm in AnswerLabelMap::for_language.
static LABEL_REGISTRY: [AnswerLabelMap; 2] = [
    AnswerLabelMap {
        language: Language::English,
        labels: &ENGLISH_LABELS,
    },
    AnswerLabelMap {
        language: Language::Swedish,
        labels: &SWEDISH_LABELS,
    },
];

/// The ordered mapping from answer codes to the labels of one language.
///
/// Codes are in ascending order. Codes without a label resolve to
/// [`UNDEFINED_LABEL`] instead of failing, so that partially cleaned data can
/// still be charted.
#[derive(Eq, PartialEq, Debug)]
pub struct AnswerLabelMap {
    language: Language,
    labels: &'static [(i64, &'static str)],
}

impl AnswerLabelMap {
    pub fn for_language(language: Language) -> &'static AnswerLabelMap {
        match language {
            Language::English => &LABEL_REGISTRY[0],
            Language::Swedish => &LABEL_REGISTRY[1],
        }
    }

    pub fn for_tag(tag: &str) -> Result<&'static AnswerLabelMap, ChartErrors> {
        Language::from_tag(tag).map(AnswerLabelMap::for_language)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn resolve(&self, code: i64) -> &'static str {
        self.labels
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, label)| *label)
            .unwrap_or(UNDEFINED_LABEL)
    }

    pub fn entries(&self) -> &'static [(i64, &'static str)] {
        self.labels
    }

    /// The codes that a chart shows on its value axis under the given policy.
    pub fn domain(&self, policy: NotRelevantPolicy) -> CodeDomain {
        let ticks = self
            .labels
            .iter()
            .filter(|(c, _)| policy == NotRelevantPolicy::Retain || *c != NOT_RELEVANT_CODE)
            .copied()
            .collect();
        CodeDomain { policy, ticks }
    }
}

/// The codes of a chart axis, with their labels, in ascending order.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct CodeDomain {
    pub policy: NotRelevantPolicy,
    pub ticks: Vec<(i64, &'static str)>,
}

impl CodeDomain {
    /// The smallest and largest code of the domain.
    pub fn range(&self) -> (i64, i64) {
        let min = self.ticks.iter().map(|(c, _)| *c).min().unwrap_or(0);
        let max = self.ticks.iter().map(|(c, _)| *c).max().unwrap_or(0);
        (min, max)
    }

    pub fn labels(&self) -> Vec<String> {
        self.ticks.iter().map(|(_, l)| l.to_string()).collect()
    }

    /// Whether an answer with this code is drawn on the charts.
    ///
    /// Only "not relevant" answers can be left out. Codes without a label are
    /// drawn as they are.
    pub fn plots(&self, code: i64) -> bool {
        self.policy == NotRelevantPolicy::Retain || code != NOT_RELEVANT_CODE
    }

    pub fn radial_axis(&self) -> RadialAxis {
        RadialAxis {
            tick_values: self.ticks.iter().map(|(c, _)| *c).collect(),
            tick_labels: self.labels(),
            range: self.range(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_labels() {
        let m = AnswerLabelMap::for_tag("en").unwrap();
        assert_eq!(m.resolve(0), "Don't know");
        assert_eq!(m.resolve(3), "Yes");
        assert_eq!(m.resolve(4), "Not relevant");
    }

    #[test]
    fn swedish_labels_same_codes() {
        let en = AnswerLabelMap::for_tag("en").unwrap();
        let sv = AnswerLabelMap::for_tag("SV").unwrap();
        assert_eq!(sv.language(), Language::Swedish);
        assert_eq!(sv.resolve(3), "Ja");
        assert_eq!(sv.resolve(1), "Nej");
        let en_codes: Vec<i64> = en.entries().iter().map(|p| p.0).collect();
        let sv_codes: Vec<i64> = sv.entries().iter().map(|p| p.0).collect();
        assert_eq!(en_codes, sv_codes);
    }

    #[test]
    fn unknown_codes_are_undefined() {
        let m = AnswerLabelMap::for_language(Language::English);
        assert_eq!(m.resolve(7), UNDEFINED_LABEL);
        assert_eq!(m.resolve(-1), UNDEFINED_LABEL);
    }

    #[test]
    fn unsupported_language() {
        assert_eq!(
            AnswerLabelMap::for_tag("de"),
            Err(ChartErrors::UnsupportedLanguage {
                tag: "de".to_string()
            })
        );
    }

    #[test]
    fn every_language_has_its_own_labels() {
        for lang in Language::ALL {
            assert_eq!(AnswerLabelMap::for_language(lang).language(), lang);
        }
    }

    #[test]
    fn codes_are_ascending() {
        for lang in Language::ALL {
            let codes: Vec<i64> = AnswerLabelMap::for_language(lang)
                .entries()
                .iter()
                .map(|p| p.0)
                .collect();
            let mut sorted = codes.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(codes, sorted);
        }
    }

    #[test]
    fn domain_follows_policy() {
        let m = AnswerLabelMap::for_language(Language::English);
        let excl = m.domain(NotRelevantPolicy::Exclude);
        assert_eq!(excl.range(), (0, 3));
        assert_eq!(excl.labels(), vec!["Don't know", "No", "Partially", "Yes"]);
        assert!(!excl.plots(NOT_RELEVANT_CODE));
        assert!(excl.plots(7));

        let ret = m.domain(NotRelevantPolicy::Retain);
        assert_eq!(ret.range(), (0, 4));
        assert_eq!(ret.ticks.len(), 5);
        assert!(ret.plots(NOT_RELEVANT_CODE));
        assert_eq!(ret.radial_axis().tick_values, vec![0, 1, 2, 3, 4]);
    }
}
