//! Page aggregator
//!
//! Consumes a result cursor exactly once, front to back:
//! 1. Pass over `offset - 1` entries
//! 2. Keep up to `limit` entries in cursor order
//! 3. Drain the rest, counting only
//!
//! The aggregator owns the cursor for the whole call and closes it on every
//! exit path. A cursor failure aborts the call without a partial page.

use std::ops::{Deref, DerefMut};

use super::errors::PageResult;
use super::page::{Page, PageEntry};
use super::params::{PageConfig, PageWindow};
use crate::ledger::ResultCursor;
use crate::observability::{log_event_with_fields, Event};

/// Closes the wrapped cursor when dropped
struct CursorGuard<C: ResultCursor> {
    cursor: C,
}

impl<C: ResultCursor> Deref for CursorGuard<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.cursor
    }
}

impl<C: ResultCursor> DerefMut for CursorGuard<C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut self.cursor
    }
}

impl<C: ResultCursor> Drop for CursorGuard<C> {
    fn drop(&mut self) {
        if let Err(e) = self.cursor.close() {
            let error = e.to_string();
            log_event_with_fields(Event::CursorCloseFailed, &[("error", error.as_str())]);
        }
    }
}

/// Turns query cursors into bounded pages
#[derive(Debug, Clone, Default)]
pub struct PageAggregator {
    config: PageConfig,
}

impl PageAggregator {
    /// Creates an aggregator with the given page size bounds
    pub fn new(config: PageConfig) -> Self {
        Self { config }
    }

    /// Returns the page size bounds
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Paginates with numeric arguments.
    ///
    /// Fails with `InvalidArgument` when offset < 1, limit < 1 or limit is
    /// above the maximum; the cursor is closed without being advanced.
    pub fn paginate<C: ResultCursor>(&self, cursor: C, offset: i64, limit: i64) -> PageResult<Page> {
        let guard = CursorGuard { cursor };
        let window = self.config.window(offset, limit);
        Self::finish(guard, window)
    }

    /// Paginates with optional decimal-string arguments as received from a
    /// dispatcher. Absent offset means 1, absent limit the default size.
    pub fn paginate_args<C: ResultCursor>(
        &self,
        cursor: C,
        offset: Option<&str>,
        limit: Option<&str>,
    ) -> PageResult<Page> {
        let guard = CursorGuard { cursor };
        let window = self.config.parse_window(offset, limit);
        Self::finish(guard, window)
    }

    fn finish<C: ResultCursor>(
        mut guard: CursorGuard<C>,
        window: PageResult<PageWindow>,
    ) -> PageResult<Page> {
        let result = window.and_then(|window| collect(&mut *guard, window));

        match &result {
            Ok(page) => {
                let kept = page.items_kept.to_string();
                let offset = page.offset.to_string();
                let total = page.total_count.to_string();
                log_event_with_fields(
                    Event::PageAssembled,
                    &[
                        ("items_kept", kept.as_str()),
                        ("offset", offset.as_str()),
                        ("total_count", total.as_str()),
                    ],
                );
            }
            Err(e) => {
                let error = e.to_string();
                log_event_with_fields(Event::PageRejected, &[("error", error.as_str())]);
            }
        }

        result
    }
}

fn collect<C: ResultCursor>(cursor: &mut C, window: PageWindow) -> PageResult<Page> {
    let skip = window.skip();
    let mut entries = Vec::new();
    let mut total_count = 0usize;

    while cursor.has_next() {
        let entry = cursor.next_result()?;
        if total_count >= skip && entries.len() < window.limit {
            entries.push(PageEntry::from_key_value(entry)?);
        }
        total_count += 1;
    }

    let items_kept = entries.len();
    Ok(Page {
        entries,
        total_count,
        offset: window.offset,
        limit: window.limit,
        items_skipped: total_count - items_kept,
        items_kept,
    })
}
