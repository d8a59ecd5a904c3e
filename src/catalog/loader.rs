//! Catalog loading and validation
//!
//! Parses the JSON catalog document and checks every day before anything is
//! played. `final_order` entries may name words either by index into `words`
//! or by value; both forms resolve to an index order.

use super::{Catalog, CatalogError, DEFAULT_CATALOG, PuzzleDefinition};
use crate::core::Order;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawCatalog {
    version: String,
    start_date: String,
    days: Vec<RawDay>,
    #[serde(default)]
    win_messages: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawDay {
    words: Vec<String>,
    final_order: Vec<OrderEntry>,
    #[serde(default)]
    hints: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OrderEntry {
    Index(usize),
    Word(String),
}

/// Load the catalog compiled into the binary
///
/// # Errors
///
/// Returns `CatalogError` if the embedded document fails validation.
pub fn load_default() -> Result<Catalog, CatalogError> {
    load_from_str(DEFAULT_CATALOG)
}

/// Load a catalog from a file
///
/// # Errors
///
/// Returns `CatalogError::Read` if the file cannot be read, or any validation
/// error from [`load_from_str`].
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&content)
}

/// Parse and validate a catalog document
///
/// # Errors
///
/// Returns `CatalogError` if the JSON is malformed, the start date does not
/// parse, there are no days, or any day's final order is not a permutation
/// of its words.
///
/// # Examples
/// ```
/// use draggin::catalog::load_from_str;
///
/// let catalog = load_from_str(r#"{
///     "version": "1",
///     "start_date": "2024-01-01",
///     "days": [{ "words": ["b", "a"], "final_order": ["a", "b"], "hints": [] }],
///     "win_messages": ["Nice!"]
/// }"#).unwrap();
///
/// assert_eq!(catalog.days[0].final_order.as_slice(), &[1, 0]);
/// ```
pub fn load_from_str(content: &str) -> Result<Catalog, CatalogError> {
    let raw: RawCatalog = serde_json::from_str(content)?;

    let start_date = NaiveDate::parse_from_str(raw.start_date.trim(), "%Y-%m-%d")
        .map_err(|_| CatalogError::StartDate(raw.start_date.clone()))?;

    if raw.days.is_empty() {
        return Err(CatalogError::Empty);
    }

    let days = raw
        .days
        .into_iter()
        .enumerate()
        .map(|(day_index, day)| build_day(day_index, day))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        version = %raw.version,
        start = %start_date,
        days = days.len(),
        "catalog loaded"
    );

    Ok(Catalog {
        version: raw.version,
        start_date,
        days,
        win_messages: raw.win_messages,
    })
}

fn build_day(day_index: usize, raw: RawDay) -> Result<PuzzleDefinition, CatalogError> {
    if raw.words.is_empty() {
        return Err(CatalogError::InvalidDay {
            day: day_index,
            reason: "no words".to_string(),
        });
    }

    let slots = resolve_final_order(day_index, &raw.words, &raw.final_order)?;
    let final_order = Order::new(slots, raw.words.len()).map_err(|source| {
        CatalogError::FinalOrder {
            day: day_index,
            source,
        }
    })?;

    Ok(PuzzleDefinition {
        words: raw.words,
        final_order,
        hints: raw.hints,
        day_index,
    })
}

/// Map each entry to an item index
///
/// A word entry takes the first still-unused position holding that word, so
/// repeated words resolve to distinct indices.
fn resolve_final_order(
    day_index: usize,
    words: &[String],
    entries: &[OrderEntry],
) -> Result<Vec<usize>, CatalogError> {
    let mut used = vec![false; words.len()];

    entries
        .iter()
        .map(|entry| match entry {
            OrderEntry::Index(index) => {
                if let Some(slot) = used.get_mut(*index) {
                    *slot = true;
                }
                Ok(*index)
            }
            OrderEntry::Word(word) => {
                let index = words
                    .iter()
                    .enumerate()
                    .position(|(i, w)| w == word && !used[i])
                    .ok_or_else(|| CatalogError::InvalidDay {
                        day: day_index,
                        reason: format!("final order names '{word}' which is not an unused word"),
                    })?;
                used[index] = true;
                Ok(index)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(days: &str) -> String {
        format!(
            r#"{{"version": "3", "start_date": "2024-01-01", "days": {days}, "win_messages": ["Yes!"]}}"#
        )
    }

    #[test]
    fn loads_index_orders() {
        let catalog =
            load_from_str(&doc(r#"[{"words": ["x", "y", "z"], "final_order": [2, 0, 1]}]"#))
                .unwrap();

        assert_eq!(catalog.version, "3");
        assert_eq!(catalog.start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(catalog.days[0].final_order.as_slice(), &[2, 0, 1]);
        assert!(catalog.days[0].hints.is_empty());
        assert_eq!(catalog.win_messages, vec!["Yes!".to_string()]);
    }

    #[test]
    fn loads_word_orders() {
        let catalog = load_from_str(&doc(
            r#"[{"words": ["red", "orange", "yellow"], "final_order": ["yellow", "orange", "red"], "hints": ["Sunset"]}]"#,
        ))
        .unwrap();

        let day = &catalog.days[0];
        assert_eq!(day.final_order.as_slice(), &[2, 1, 0]);
        assert_eq!(day.solution(), vec!["yellow", "orange", "red"]);
        assert_eq!(day.hints, vec!["Sunset".to_string()]);
    }

    #[test]
    fn repeated_words_resolve_to_distinct_indices() {
        let catalog = load_from_str(&doc(
            r#"[{"words": ["la", "di", "la"], "final_order": ["di", "la", "la"]}]"#,
        ))
        .unwrap();
        assert_eq!(catalog.days[0].final_order.as_slice(), &[1, 0, 2]);
    }

    #[test]
    fn day_indices_follow_document_order() {
        let catalog = load_from_str(&doc(
            r#"[{"words": ["a"], "final_order": [0]}, {"words": ["b"], "final_order": [0]}]"#,
        ))
        .unwrap();
        assert_eq!(catalog.days[1].day_index, 1);
    }

    #[test]
    fn rejects_unknown_word() {
        let err = load_from_str(&doc(
            r#"[{"words": ["a", "b"], "final_order": ["a", "c"]}]"#,
        ))
        .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidDay { day: 0, .. }));
    }

    #[test]
    fn rejects_non_permutation() {
        let err =
            load_from_str(&doc(r#"[{"words": ["a", "b"], "final_order": [0, 0]}]"#)).unwrap_err();
        assert!(matches!(err, CatalogError::FinalOrder { day: 0, .. }));

        let err = load_from_str(&doc(r#"[{"words": ["a", "b"], "final_order": [0]}]"#))
            .unwrap_err();
        assert!(matches!(err, CatalogError::FinalOrder { day: 0, .. }));
    }

    #[test]
    fn rejects_empty_days() {
        assert!(matches!(load_from_str(&doc("[]")), Err(CatalogError::Empty)));
    }

    #[test]
    fn rejects_bad_start_date() {
        let err = load_from_str(
            r#"{"version": "1", "start_date": "January", "days": [{"words": ["a"], "final_order": [0]}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::StartDate(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(load_from_str("{"), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_from_file("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }

    #[test]
    fn embedded_catalog_is_valid() {
        let catalog = load_default().unwrap();
        assert!(!catalog.days.is_empty());
        assert!(!catalog.win_messages.is_empty());
        for day in &catalog.days {
            assert_eq!(day.final_order.len(), day.words.len());
            assert!(!day.hints.is_empty(), "day {} has no hints", day.day_index);
        }
    }
}
