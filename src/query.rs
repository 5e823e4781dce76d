//! In-memory query engine: filtering, sorting and pagination.
//!
//! This is the interface contract a real database-backed service must
//! satisfy; the in-memory store is the mock implementation of it. Records
//! are filtered first, then stably sorted, then sliced into pages, never
//! in any other order.

use std::{cmp::Ordering, fmt};

use chrono::{DateTime, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::model::{ManagedUser, Opportunity, OpportunityDetail};

/// Page size applied when the caller supplies none.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Sort direction. Descending swaps the comparison operands, not the
/// result list, so ties keep their ascending-order relative positions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

/// Parameters recognized by [`query`].
///
/// Empty strings behave like absent parameters, matching the web client
/// that sent `''` for untouched filter inputs. Unparsable date bounds are
/// silent no-op filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryParams {
    /// Case-insensitive substring match against the record's text fields.
    pub search: Option<String>,
    pub status: Option<String>,
    pub role: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    /// Inclusive lower bound on the record's date field.
    pub date_from: Option<String>,
    /// Inclusive upper bound on the record's date field.
    pub date_to: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: SortOrder,
    /// 1-indexed page number.
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl QueryParams {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1)
    }
}

/// One page of results plus the derived page count.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult<T> {
    pub items: Vec<T>,
    /// `ceil(filtered_count / page_size)`; 0 when nothing matched.
    pub total_pages: u32,
    /// Filtered count before slicing.
    pub total_items: usize,
}

/// A record the query engine can filter and sort.
pub trait Queryable {
    /// Text fields matched by the `search` parameter.
    fn search_text(&self) -> Vec<&str>;

    /// Stringified value of a named field, used by equality filters and
    /// sorting. Unknown fields yield `None`.
    fn field(&self, name: &str) -> Option<String>;

    /// The record's date field, if it has one.
    fn date(&self) -> Option<&str>;
}

/// Filter, sort and paginate a collection.
pub fn query<T: Queryable>(records: Vec<T>, params: &QueryParams) -> QueryResult<T> {
    let search = supplied(&params.search).map(str::to_lowercase);
    let date_from = supplied(&params.date_from).and_then(parse_date);
    let date_to = supplied(&params.date_to).and_then(parse_date);
    let equality: Vec<(&str, &str)> = [
        ("status", &params.status),
        ("role", &params.role),
        ("category", &params.category),
        ("location", &params.location),
    ]
    .into_iter()
    .filter_map(|(name, value)| supplied(value).map(|v| (name, v)))
    .collect();

    let mut filtered: Vec<T> = records
        .into_iter()
        .filter(|record| {
            matches_search(record, search.as_deref())
                && matches_equality(record, &equality)
                && matches_date_range(record, date_from, date_to)
        })
        .collect();

    if let Some(sort_by) = supplied(&params.sort_by) {
        // Stable sort: records lacking the field compare equal and keep
        // their original relative order.
        filtered.sort_by(|a, b| match (a.field(sort_by), b.field(sort_by)) {
            (Some(a_value), Some(b_value)) => match params.sort_order {
                SortOrder::Asc => a_value.cmp(&b_value),
                SortOrder::Desc => b_value.cmp(&a_value),
            },
            _ => Ordering::Equal,
        });
    }

    let total_items = filtered.len();
    let page_size = params.page_size() as usize;
    let total_pages = total_items.div_ceil(page_size) as u32;
    let start = (params.page() as usize - 1) * page_size;
    let items: Vec<T> = filtered.into_iter().skip(start).take(page_size).collect();

    QueryResult {
        items,
        total_pages,
        total_items,
    }
}

fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn matches_search<T: Queryable>(record: &T, search: Option<&str>) -> bool {
    let Some(needle) = search else { return true };
    record
        .search_text()
        .iter()
        .any(|text| text.to_lowercase().contains(needle))
}

fn matches_equality<T: Queryable>(record: &T, filters: &[(&str, &str)]) -> bool {
    filters
        .iter()
        .all(|(name, expected)| record.field(name).as_deref() == Some(*expected))
}

fn matches_date_range<T: Queryable>(
    record: &T,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> bool {
    if from.is_none() && to.is_none() {
        return true;
    }
    // A bound is in effect; a record without a parsable date fails it.
    let Some(date) = record.date().and_then(parse_date) else {
        return false;
    };
    from.is_none_or(|from| date >= from) && to.is_none_or(|to| date <= to)
}

/// Parse a plain ISO date or a full RFC 3339 timestamp.
fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

// ============================================================
// Queryable impls for domain records
// ============================================================

impl Queryable for Opportunity {
    fn search_text(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "id" => Some(self.id.clone()),
            "title" => Some(self.title.clone()),
            "location" => Some(self.location.clone()),
            "date" => Some(self.date.clone()),
            "category" => Some(self.category.clone()),
            "spots" => Some(self.spots.to_string()),
            _ => None,
        }
    }

    fn date(&self) -> Option<&str> {
        Some(&self.date)
    }
}

impl Queryable for OpportunityDetail {
    fn search_text(&self) -> Vec<&str> {
        self.listing.search_text()
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "status" => Some(self.status.to_string()),
            _ => self.listing.field(name),
        }
    }

    fn date(&self) -> Option<&str> {
        self.listing.date()
    }
}

impl Queryable for ManagedUser {
    fn search_text(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.email.as_str()];
        if let Some(phone) = &self.phone {
            fields.push(phone);
        }
        fields
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "id" => Some(self.id.clone()),
            "name" => Some(self.name.clone()),
            "email" => Some(self.email.clone()),
            "status" => Some(self.status.to_string()),
            "role" => Some(self.role.to_string()),
            "joinedAt" => Some(self.joined_at.clone()),
            "lastActive" => self.last_active.clone(),
            _ => None,
        }
    }

    fn date(&self) -> Option<&str> {
        Some(&self.joined_at)
    }
}
