//! Offset-cursor pagination discipline shared by every paginated feed.
//!
//! The cursor is the number of rows the client has already consumed.
//! Queries fetch `limit + 1` rows; the extra row only signals that another
//! page exists and is trimmed before shaping the response. `next_cursor`
//! is `cursor + limit` when the extra row existed, else `None`.
//!
//! Offset cursors are not stable under interleaved writes: concurrent
//! inserts or deletes can skip or duplicate rows across pages. That is an
//! accepted limitation of the discovery feeds, not a bug.

/// Fixed page size for all paginated feeds.
pub const PAGE_LIMIT: i64 = 20;

/// Hard cap on search results.
pub const SEARCH_LIMIT: i64 = 20;

/// Sibling sample size on the media detail page.
pub const RELATED_LIMIT: i64 = 20;

/// Normalize a client-supplied cursor: absent means start, negatives clamp
/// to the start rather than erroring.
pub fn clamp_cursor(cursor: Option<i64>) -> i64 {
    cursor.unwrap_or(0).max(0)
}

/// One page of results plus the cursor for the next fetch.
#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<i64>,
}

/// Build a page from a query that over-fetched by one row.
pub fn page_from_overfetch<T>(mut rows: Vec<T>, cursor: i64, limit: i64) -> Page<T> {
    let has_more = rows.len() as i64 > limit;
    if has_more {
        rows.truncate(limit as usize);
    }
    Page {
        items: rows,
        next_cursor: has_more.then_some(cursor + limit),
    }
}

/// Escape `LIKE`/`ILIKE` wildcards in user input so a search term matches
/// literally. The backslash escape character itself is escaped first.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
