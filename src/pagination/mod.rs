//! Pagination subsystem for prodledger
//!
//! Turns an unbounded query cursor into one bounded, metadata-annotated page
//! under a 1-based offset/limit contract.
//!
//! # Invariants
//!
//! - `itemsKept = min(limit, max(0, n - (offset - 1)))`
//! - `itemsSkipped = n - itemsKept`, `totalCount = n`
//! - The cursor is closed on every exit path
//! - Errors never yield a partial page

mod aggregator;
mod errors;
mod page;
mod params;

pub use aggregator::PageAggregator;
pub use errors::{PageError, PageResult};
pub use page::{Page, PageEntry};
pub use params::{PageConfig, PageWindow, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
