//! In-memory page source for tests and demos.
//!
//! [`MemorySource`] serves pages out of a vector of JSON objects, applying
//! the full fetch contract: fuzzy search filtering, single-field sorting,
//! and cursor-addressed slicing. It behaves like a small, honest backend,
//! which makes it the reference implementation the integration tests and the
//! demo binary run against.
//!
//! # Cursors
//!
//! Cursors are encoded as `offset:<n>` strings. That encoding is private to
//! this source; the engine treats them as opaque tokens, exactly as it would
//! treat a production backend's base64 blobs.

use crate::domain::{Connection, FetchError, FetchResult, PageInfo, SortDirection};
use crate::fetch::request::FetchParams;
use crate::fetch::source::PageSource;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use futures_util::future::{self, BoxFuture};
use serde_json::Value;
use std::cmp::Ordering;

/// An in-memory [`PageSource`] over JSON object rows.
#[derive(Default)]
pub struct MemorySource {
    rows: Vec<Value>,
    fail_next: Option<FetchError>,
}

impl MemorySource {
    /// Creates a source serving the given rows.
    ///
    /// Rows are usually JSON objects; scalar rows work too, matched and
    /// sorted by their display form.
    #[must_use]
    pub fn new(rows: Vec<Value>) -> Self {
        Self { rows, fail_next: None }
    }

    /// Makes the next fetch fail with `error` instead of producing a page.
    ///
    /// For exercising the error-surfacing and retry paths; the failure is
    /// consumed by the next fetch and subsequent fetches succeed again.
    pub fn fail_next(&mut self, error: FetchError) {
        self.fail_next = Some(error);
    }

    /// Number of rows in the unfiltered universe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the source holds no rows at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn resolve(&mut self, params: &FetchParams) -> FetchResult<Value> {
        if let Some(error) = self.fail_next.take() {
            tracing::debug!(error = %error, "memory source returning injected failure");
            return Err(error);
        }

        let offset = parse_cursor(params.cursor.as_deref())?;
        let mut matching = self.filtered(&params.search_term);

        if let Some(sort) = &params.sort {
            let field = sort.field.clone();
            matching.sort_by(|a, b| {
                let ordering = compare_fields(a, b, &field);
                match sort.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        let total = matching.len();
        let start = offset.min(total);
        let end = (start + params.page_size).min(total);
        let items: Vec<Value> = matching[start..end].to_vec();

        tracing::debug!(
            offset,
            returned = items.len(),
            total,
            search = %params.search_term,
            "memory source resolved page"
        );

        Ok(Connection {
            page_info: PageInfo {
                has_next_page: end < total,
                has_previous_page: start > 0,
                start_cursor: (!items.is_empty()).then(|| format!("offset:{start}")),
                end_cursor: (!items.is_empty()).then(|| format!("offset:{end}")),
            },
            items,
            total_count: Some(total as u64),
        })
    }

    /// Rows matching the search term, in stored order.
    ///
    /// Empty term matches everything. Otherwise the term is split into
    /// whitespace tokens and every token must fuzzy-match the row's text.
    fn filtered(&self, search_term: &str) -> Vec<Value> {
        let tokens: Vec<String> = search_term
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();

        if tokens.is_empty() {
            return self.rows.clone();
        }

        let matcher = SkimMatcherV2::default();
        self.rows
            .iter()
            .filter(|row| {
                let text = row_text(row);
                tokens
                    .iter()
                    .all(|token| matcher.fuzzy_match(&text, token).is_some())
            })
            .cloned()
            .collect()
    }
}

impl PageSource<Value> for MemorySource {
    fn fetch_page(&mut self, params: FetchParams) -> BoxFuture<'_, FetchResult<Value>> {
        let result = self.resolve(&params);
        Box::pin(future::ready(result))
    }
}

fn parse_cursor(cursor: Option<&str>) -> Result<usize, FetchError> {
    let Some(cursor) = cursor else {
        return Ok(0);
    };
    cursor
        .strip_prefix("offset:")
        .and_then(|n| n.parse::<usize>().ok())
        .ok_or_else(|| FetchError::Server(format!("invalid cursor: {cursor}")))
}

/// Lowercased searchable text of a row: all string values of an object,
/// or the display form of a scalar.
fn row_text(row: &Value) -> String {
    match row {
        Value::Object(fields) => fields
            .values()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase(),
        other => other.to_string().to_lowercase(),
    }
}

/// Compares two rows by one field, with missing fields ordered last.
fn compare_fields(a: &Value, b: &Value, field: &str) -> Ordering {
    match (a.get(field), b.get(field)) {
        (Some(left), Some(right)) => compare_values(left, right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(left), Value::Number(right)) => left
            .as_f64()
            .partial_cmp(&right.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(left), Value::String(right)) => {
            left.to_lowercase().cmp(&right.to_lowercase())
        }
        (Value::Bool(left), Value::Bool(right)) => left.cmp(right),
        _ => a.to_string().cmp(&b.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SortState;
    use futures_util::FutureExt;
    use serde_json::json;

    fn users() -> Vec<Value> {
        vec![
            json!({"name": "Dana Admin", "email": "dana@example.com", "age": 41}),
            json!({"name": "Alice Ops", "email": "alice@example.com", "age": 35}),
            json!({"name": "Carol Dev", "email": "carol@example.com", "age": 29}),
            json!({"name": "Bob Dev", "email": "bob@example.com", "age": 52}),
        ]
    }

    fn fetch(source: &mut MemorySource, params: FetchParams) -> FetchResult<Value> {
        source
            .fetch_page(params)
            .now_or_never()
            .expect("memory source resolves synchronously")
    }

    fn params(cursor: Option<&str>, page_size: usize) -> FetchParams {
        FetchParams {
            cursor: cursor.map(str::to_string),
            page_size,
            search_term: String::new(),
            sort: None,
        }
    }

    #[test]
    fn slices_pages_with_offset_cursors() {
        let mut source = MemorySource::new(users());

        let first = fetch(&mut source, params(None, 3)).unwrap();
        assert_eq!(first.len(), 3);
        assert!(first.page_info.has_next_page);
        assert!(!first.page_info.has_previous_page);
        assert_eq!(first.page_info.end_cursor.as_deref(), Some("offset:3"));
        assert_eq!(first.total_count, Some(4));

        let second = fetch(&mut source, params(Some("offset:3"), 3)).unwrap();
        assert_eq!(second.len(), 1);
        assert!(!second.page_info.has_next_page);
        assert!(second.page_info.has_previous_page);
    }

    #[test]
    fn search_filters_and_total_reflects_filter() {
        let mut source = MemorySource::new(users());
        let mut query = params(None, 10);
        query.search_term = "dev".into();

        let page = fetch(&mut source, query).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page.total_count, Some(2));
    }

    #[test]
    fn sort_orders_by_field_in_both_directions() {
        let mut source = MemorySource::new(users());

        let mut query = params(None, 10);
        query.sort = Some(SortState::ascending("name"));
        let page = fetch(&mut source, query).unwrap();
        assert_eq!(page.items[0]["name"], "Alice Ops");
        assert_eq!(page.items[3]["name"], "Dana Admin");

        let mut query = params(None, 10);
        query.sort = Some(SortState::descending("age"));
        let page = fetch(&mut source, query).unwrap();
        assert_eq!(page.items[0]["name"], "Bob Dev");
        assert_eq!(page.items[3]["name"], "Carol Dev");
    }

    #[test]
    fn malformed_cursor_is_a_server_error() {
        let mut source = MemorySource::new(users());
        let result = fetch(&mut source, params(Some("bogus"), 10));
        assert!(matches!(result, Err(FetchError::Server(_))));
    }

    #[test]
    fn injected_failure_is_consumed_once() {
        let mut source = MemorySource::new(users());
        source.fail_next(FetchError::Network("down".into()));

        assert!(fetch(&mut source, params(None, 10)).is_err());
        assert!(fetch(&mut source, params(None, 10)).is_ok());
    }

    #[test]
    fn empty_match_yields_empty_page_without_cursors() {
        let mut source = MemorySource::new(users());
        let mut query = params(None, 10);
        query.search_term = "zzzzzz".into();

        let page = fetch(&mut source, query).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_count, Some(0));
        assert!(page.page_info.start_cursor.is_none());
        assert!(page.page_info.end_cursor.is_none());
        assert!(!page.page_info.has_next_page);
    }
}
