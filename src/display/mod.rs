//! Shared presentation helpers for the CLI.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// The empty-state line for a collection with no records.
pub fn empty_state(plural: &str) -> String {
    format!("No {plural} in the list yet!")
}

/// The loading indicator line, shown only while a panel's initial list
/// fetch is unresolved.
pub fn loading_line(plural: &str) -> String {
    format!("Loading {plural}...").dimmed().to_string()
}

/// Render rows as a sharp-cornered table.
pub fn render_table<T: Tabled>(rows: impl IntoIterator<Item = T>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    table.to_string()
}

/// One-line confirmation of a successful mutation.
pub fn confirmation(verb: &str, singular: &str, id: u64) -> String {
    format!("{} {singular} {}", verb.green(), id.to_string().cyan())
}

/// Filter items by a fuzzy match of `query` against each item's
/// searchable text. An empty query keeps everything. Filtering is
/// presentation-side only; the collection itself is untouched.
pub fn fuzzy_filter<'a, T>(
    items: &'a [T],
    query: &str,
    search_text: impl Fn(&T) -> String,
) -> Vec<&'a T> {
    if query.is_empty() {
        return items.iter().collect();
    }

    let matcher = SkimMatcherV2::default().smart_case();
    items
        .iter()
        .filter(|item| matcher.fuzzy_match(&search_text(item), query).is_some())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_message() {
        assert_eq!(empty_state("tenants"), "No tenants in the list yet!");
        assert_eq!(empty_state("issues"), "No issues in the list yet!");
    }

    #[test]
    fn test_loading_line_names_the_kind() {
        assert!(loading_line("properties").contains("Loading properties..."));
    }

    #[test]
    fn test_fuzzy_filter_matches_subsequences() {
        let names = vec!["Jane Doe".to_string(), "John Roe".to_string()];
        let hits = fuzzy_filter(&names, "jdoe", |n| n.clone());
        assert_eq!(hits, [&"Jane Doe".to_string()]);
    }

    #[test]
    fn test_fuzzy_filter_empty_query_keeps_all() {
        let names = vec!["a".to_string(), "b".to_string()];
        assert_eq!(fuzzy_filter(&names, "", |n| n.clone()).len(), 2);
    }

    #[test]
    fn test_render_table_contains_cells() {
        #[derive(Tabled)]
        struct Row {
            #[tabled(rename = "ID")]
            id: u64,
            #[tabled(rename = "Name")]
            name: String,
        }

        let rendered = render_table(vec![Row {
            id: 42,
            name: "Jane".to_string(),
        }]);
        assert!(rendered.contains("42"));
        assert!(rendered.contains("Jane"));
        assert!(rendered.contains("ID"));
    }
}
