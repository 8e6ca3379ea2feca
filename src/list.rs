//! The generic list-view core shared by every table screen: query-parameter
//! construction, server-side sort state, the client-side keyword filter, and
//! a page-fetch hook with stale-response protection.

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::models::PageEnvelope;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn as_param(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortState {
    pub key: &'static str,
    pub direction: SortDirection,
}

impl SortState {
    pub fn ascending(key: &'static str) -> Self {
        SortState {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// Toggling the active column flips direction; selecting a new column
    /// starts ascending.
    pub fn toggled(current: Option<SortState>, key: &'static str) -> SortState {
        match current {
            Some(sort) if sort.key == key => SortState {
                key,
                direction: sort.direction.flipped(),
            },
            _ => SortState::ascending(key),
        }
    }
}

/// Where the keyword filter runs. `PageLocal` matches against the rows
/// already fetched for the current page; `ServerSide` forwards the keyword
/// as a query parameter instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    PageLocal,
    ServerSide,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ListQuery {
    /// 1-based, matching the backend envelope.
    pub page: u32,
    pub size: u32,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub merchant_code: Option<String>,
    pub category_code: Option<String>,
    pub brand_code: Option<String>,
    pub group_by: Option<String>,
    pub sort: Option<SortState>,
    pub keyword: Option<String>,
}

impl ListQuery {
    pub fn new(page: u32, size: u32) -> Self {
        ListQuery {
            page,
            size,
            ..Default::default()
        }
    }

    pub fn to_query_string(&self) -> String {
        let mut params = vec![format!("page={}", self.page), format!("size={}", self.size)];
        let optional = [
            ("startDate", &self.start_date),
            ("endDate", &self.end_date),
            ("merchantCode", &self.merchant_code),
            ("categoryCode", &self.category_code),
            ("brandCode", &self.brand_code),
            ("groupBy", &self.group_by),
            ("keyword", &self.keyword),
        ];
        for (name, value) in optional {
            if let Some(value) = value {
                if !value.is_empty() {
                    params.push(format!("{name}={value}"));
                }
            }
        }
        if let Some(sort) = self.sort {
            params.push(format!("sort={},{}", sort.key, sort.direction.as_param()));
        }
        params.join("&")
    }
}

fn value_contains(value: &Value, needle: &str) -> bool {
    match value {
        Value::String(s) => s.to_lowercase().contains(needle),
        Value::Number(n) => n.to_string().contains(needle),
        Value::Bool(b) => b.to_string().contains(needle),
        Value::Array(items) => items.iter().any(|v| value_contains(v, needle)),
        Value::Object(map) => map.values().any(|v| value_contains(v, needle)),
        Value::Null => false,
    }
}

/// Case-insensitive substring test over the string form of every field of
/// the row.
pub fn row_matches_keyword<T: Serialize>(row: &T, keyword: &str) -> bool {
    let needle = keyword.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    match serde_json::to_value(row) {
        Ok(value) => value_contains(&value, &needle),
        Err(_) => false,
    }
}

pub fn filter_rows<T: Serialize + Clone>(rows: &[T], keyword: &str) -> Vec<T> {
    rows.iter()
        .filter(|row| row_matches_keyword(*row, keyword))
        .cloned()
        .collect()
}

/// Page count for lists paginated purely in the browser (the server-status
/// endpoint has no native paging). An empty list still has one page so the
/// no-data row renders.
pub fn client_total_pages(total_rows: usize, size: usize) -> u32 {
    if total_rows == 0 {
        1
    } else {
        ((total_rows + size - 1) / size) as u32
    }
}

pub fn client_page<T: Clone>(rows: &[T], page: u32, size: usize) -> Vec<T> {
    let start = page.saturating_sub(1) as usize * size;
    rows.iter().skip(start).take(size).cloned().collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub rows: Vec<T>,
    pub page: u32,
    pub total_pages: u32,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        ListState {
            rows: Vec::new(),
            page: 1,
            total_pages: 1,
            loading: true,
            error: None,
        }
    }
}

pub enum ListAction<T> {
    Started,
    Loaded(PageEnvelope<T>),
    Failed(String),
}

impl<T: Clone + PartialEq> Reducible for ListState<T> {
    type Action = ListAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ListAction::Started => {
                next.loading = true;
                next.error = None;
            }
            ListAction::Loaded(envelope) => {
                next.rows = envelope.content;
                next.page = envelope.page;
                next.total_pages = envelope.total_pages.max(1);
                next.loading = false;
                next.error = None;
            }
            // prior rows stay visible; only the error banner changes
            ListAction::Failed(message) => {
                next.loading = false;
                next.error = Some(message);
            }
        }
        Rc::new(next)
    }
}

/// Fetches one page of `path` whenever the query or the refresh counter
/// changes. A per-view generation counter discards responses that resolve
/// after a newer request was dispatched, so a stale response can never
/// overwrite fresher rows.
#[hook]
pub fn use_page_query<T>(
    path: &'static str,
    query: ListQuery,
    refresh: u32,
) -> UseReducerHandle<ListState<T>>
where
    T: DeserializeOwned + Clone + PartialEq + 'static,
{
    let state = use_reducer(ListState::<T>::default);
    let generation = use_mut_ref(|| 0u64);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |(query, _refresh): &(ListQuery, u32)| {
                let query = query.clone();
                *generation.borrow_mut() += 1;
                let this_generation = *generation.borrow();
                state.dispatch(ListAction::Started);
                spawn_local(async move {
                    let result = api::get_page::<T>(path, &query).await;
                    if *generation.borrow() != this_generation {
                        // a newer request superseded this one
                        return;
                    }
                    match result {
                        Ok(envelope) => state.dispatch(ListAction::Loaded(envelope)),
                        // the interceptor already cleared the session and
                        // redirected
                        Err(ApiError::Unauthorized) => {}
                        Err(err) => state.dispatch(ListAction::Failed(err.to_string())),
                    }
                });
                || ()
            },
            (query, refresh),
        );
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Merchant;

    #[test]
    fn query_string_carries_page_and_size() {
        let query = ListQuery::new(3, 10);
        assert_eq!(query.to_query_string(), "page=3&size=10");
    }

    #[test]
    fn query_string_skips_unset_and_empty_filters() {
        let mut query = ListQuery::new(1, 10);
        query.start_date = Some("2024-05-01".into());
        query.end_date = Some(String::new());
        query.merchant_code = Some("M200".into());
        assert_eq!(
            query.to_query_string(),
            "page=1&size=10&startDate=2024-05-01&merchantCode=M200"
        );
    }

    #[test]
    fn query_string_encodes_sort_as_key_and_direction() {
        let mut query = ListQuery::new(1, 10);
        query.sort = Some(SortState {
            key: "totalAmount",
            direction: SortDirection::Descending,
        });
        assert_eq!(query.to_query_string(), "page=1&size=10&sort=totalAmount,desc");
    }

    #[test]
    fn sort_toggle_flips_then_restores() {
        let first = SortState::toggled(None, "paymentDate");
        assert_eq!(first.direction, SortDirection::Ascending);

        let second = SortState::toggled(Some(first), "paymentDate");
        assert_eq!(second.direction, SortDirection::Descending);

        let third = SortState::toggled(Some(second), "paymentDate");
        assert_eq!(third.direction, SortDirection::Ascending);
    }

    #[test]
    fn sort_toggle_on_new_column_starts_ascending() {
        let current = SortState {
            key: "totalAmount",
            direction: SortDirection::Descending,
        };
        let next = SortState::toggled(Some(current), "paymentDate");
        assert_eq!(next.key, "paymentDate");
        assert_eq!(next.direction, SortDirection::Ascending);
    }

    fn merchant(code: &str, name: &str) -> Merchant {
        Merchant {
            merchant_code: code.into(),
            merchant_name: name.into(),
            business_id: "123-45-67890".into(),
            brand_code: "BR01".into(),
            category_name: "Movie".into(),
            registration_date: "2024-01-01".into(),
            termination_date: "2026-01-01".into(),
            contract_status: Default::default(),
        }
    }

    #[test]
    fn keyword_filter_is_case_insensitive_across_fields() {
        let rows = vec![merchant("M0001", "Cinema One"), merchant("B0002", "Bike Shop")];

        let by_name = filter_rows(&rows, "cinema");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].merchant_code, "M0001");

        let by_code = filter_rows(&rows, "b0002");
        assert_eq!(by_code.len(), 1);
        assert_eq!(by_code[0].merchant_name, "Bike Shop");

        assert!(filter_rows(&rows, "nowhere").is_empty());
        assert_eq!(filter_rows(&rows, "  ").len(), 2);
    }

    #[test]
    fn keyword_filter_matches_numeric_fields() {
        #[derive(Serialize, Clone)]
        struct Row {
            amount: i64,
        }
        let rows = vec![Row { amount: 12500 }, Row { amount: 300 }];
        assert_eq!(filter_rows(&rows, "12500").len(), 1);
    }

    #[test]
    fn client_paging_covers_boundaries() {
        assert_eq!(client_total_pages(0, 10), 1);
        assert_eq!(client_total_pages(10, 10), 1);
        assert_eq!(client_total_pages(11, 10), 2);

        let rows: Vec<u32> = (1..=23).collect();
        assert_eq!(client_page(&rows, 1, 10), (1..=10).collect::<Vec<_>>());
        assert_eq!(client_page(&rows, 3, 10), (21..=23).collect::<Vec<_>>());
        assert!(client_page(&rows, 4, 10).is_empty());
    }

    #[test]
    fn failed_fetch_keeps_previously_loaded_rows() {
        let state = Rc::new(ListState::<Merchant>::default());
        let loaded = state.reduce(ListAction::Loaded(PageEnvelope {
            content: vec![merchant("M0001", "Cinema One")],
            page: 2,
            total_pages: 5,
        }));
        assert!(!loaded.loading);
        assert_eq!(loaded.rows.len(), 1);
        assert_eq!(loaded.page, 2);

        let failed = loaded.reduce(ListAction::Failed("boom".into()));
        assert_eq!(failed.rows.len(), 1);
        assert_eq!(failed.error.as_deref(), Some("boom"));
        assert!(!failed.loading);
    }
}
