// ── Option matching ──
//
// Filters a static source against a query. Fuzzy ranking scores the label
// and the group name and keeps the best; ties keep source order.

use std::fmt;
use std::sync::Arc;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::model::SelectItem;

/// Caller-supplied filter: `(source, query) -> visible options`.
pub type FilterFn<T> = Arc<dyn Fn(&[T], &str) -> Vec<T> + Send + Sync>;

/// Matching strategy used for synchronous resolution.
pub enum Matcher<T: SelectItem> {
    /// Ranked subsequence matching (the default).
    Fuzzy,
    /// Case-insensitive substring match on the label, source order.
    Exact,
    Custom(FilterFn<T>),
}

impl<T: SelectItem> Matcher<T> {
    pub fn custom(filter: impl Fn(&[T], &str) -> Vec<T> + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(filter))
    }

    /// Keep every option the predicate accepts, in source order.
    pub fn predicate(accept: impl Fn(&T, &str) -> bool + Send + Sync + 'static) -> Self {
        Self::custom(move |source, query| {
            source
                .iter()
                .filter(|option| accept(option, query))
                .cloned()
                .collect()
        })
    }

    pub fn filter(&self, source: &[T], query: &str) -> Vec<T> {
        match self {
            Self::Fuzzy => fuzzy_filter(source, query),
            Self::Exact => exact_filter(source, query),
            Self::Custom(filter) => filter(source, query),
        }
    }
}

impl<T: SelectItem> Clone for Matcher<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Fuzzy => Self::Fuzzy,
            Self::Exact => Self::Exact,
            Self::Custom(filter) => Self::Custom(Arc::clone(filter)),
        }
    }
}

impl<T: SelectItem> fmt::Debug for Matcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fuzzy => f.write_str("Fuzzy"),
            Self::Exact => f.write_str("Exact"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

fn fuzzy_filter<T: SelectItem>(source: &[T], query: &str) -> Vec<T> {
    let query = query.trim();
    if query.is_empty() {
        return source.to_vec();
    }

    let matcher = SkimMatcherV2::default().ignore_case();
    let mut scored: Vec<(i64, &T)> = source
        .iter()
        .filter_map(|option| {
            let label_score = matcher.fuzzy_match(option.label(), query);
            let group_score = option
                .group()
                .and_then(|group| matcher.fuzzy_match(group, query));
            label_score.max(group_score).map(|score| (score, option))
        })
        .collect();

    // Stable: equal scores keep source order.
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, option)| option.clone()).collect()
}

fn exact_filter<T: SelectItem>(source: &[T], query: &str) -> Vec<T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return source.to_vec();
    }
    source
        .iter()
        .filter(|option| option.label().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::SelectOption;

    fn source() -> Vec<SelectOption> {
        vec![
            SelectOption::new("sv", "Swedish"),
            SelectOption::new("en", "English"),
            SelectOption::new("es", "Spanish"),
            SelectOption::new("de", "German").in_group("Germanic"),
        ]
    }

    fn keys(options: &[SelectOption]) -> Vec<&str> {
        options.iter().map(|o| o.value.as_str()).collect()
    }

    #[test]
    fn blank_query_returns_everything() {
        let all = Matcher::Fuzzy.filter(&source(), "  ");
        assert_eq!(keys(&all), vec!["sv", "en", "es", "de"]);
        let all = Matcher::Exact.filter(&source(), "");
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn fuzzy_matches_subsequences_case_insensitively() {
        let hits = Matcher::Fuzzy.filter(&source(), "SWD");
        assert_eq!(keys(&hits), vec!["sv"]);
    }

    #[test]
    fn fuzzy_also_scores_group_names() {
        let hits = Matcher::Fuzzy.filter(&source(), "germanic");
        assert_eq!(keys(&hits), vec!["de"]);
    }

    #[test]
    fn fuzzy_drops_non_matches() {
        assert!(Matcher::Fuzzy.filter(&source(), "xyzzy").is_empty());
    }

    #[test]
    fn exact_is_substring_in_source_order() {
        let hits = Matcher::Exact.filter(&source(), "ish");
        assert_eq!(keys(&hits), vec!["sv", "en", "es"]);
        assert!(Matcher::Exact.filter(&source(), "swd").is_empty());
    }

    #[test]
    fn predicate_matcher_filters_in_order() {
        let matcher = Matcher::predicate(|o: &SelectOption, q| o.value.starts_with(q));
        let hits = matcher.filter(&source(), "e");
        assert_eq!(keys(&hits), vec!["en", "es"]);
    }

    #[test]
    fn custom_matcher_sees_raw_query() {
        let matcher = Matcher::custom(|src: &[SelectOption], q| {
            if q.is_empty() { Vec::new() } else { src.iter().rev().cloned().collect() }
        });
        assert!(matcher.filter(&source(), "").is_empty());
        assert_eq!(keys(&matcher.filter(&source(), "x"))[0], "de");
    }
}
