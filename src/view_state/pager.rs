//! Cursor pagination state.
//!
//! Pagination is by last-seen entity id, not offset. The pager is a pure
//! state machine: [`Pager::begin`] hands out the cursor for the next page
//! (or refuses, when a load is already in flight or the list is exhausted)
//! and [`Pager::complete`] folds the outcome back in. The caller performs
//! the actual fetch between the two.
//!
//! Invariants held here:
//! - an empty page is the sole exhaustion signal, never an error;
//! - a failed page retains all accumulated items and discards only the new
//!   page;
//! - a second load is refused while one is in flight;
//! - accumulated ids are unique and server order is preserved.

use crate::error::ClientResult;
use crate::models::HasId;

/// Cursor for the next page fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Id of the last accumulated item; `None` for the first page.
    pub after_id: Option<i64>,
}

/// Accumulating cursor-paginated list state.
#[derive(Debug, Clone)]
pub struct Pager<T> {
    items: Vec<T>,
    has_more: bool,
    in_flight: bool,
    error: Option<String>,
}

impl<T: HasId> Pager<T> {
    /// An empty pager, ready to fetch the first page.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            has_more: true,
            in_flight: false,
            error: None,
        }
    }

    /// Accumulated items, in server order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// False once an empty page was received. Reset to retry from scratch.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// True while a page fetch is outstanding.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Message of the most recent failed page fetch, cleared on retry.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start a page load.
    ///
    /// Returns `None` when a load is already in flight or the list is
    /// exhausted; the caller must then not issue a request. Otherwise marks
    /// the pager in-flight and returns the cursor to fetch with.
    pub fn begin(&mut self) -> Option<PageRequest> {
        if self.in_flight || !self.has_more {
            return None;
        }
        self.in_flight = true;
        self.error = None;
        Some(PageRequest {
            after_id: self.items.last().map(HasId::id),
        })
    }

    /// Fold a finished page fetch back into the state.
    pub fn complete(&mut self, result: ClientResult<Vec<T>>) {
        self.in_flight = false;
        match result {
            Ok(page) if page.is_empty() => {
                self.has_more = false;
            }
            Ok(page) => {
                for item in page {
                    // The server should only return strictly-newer items;
                    // drop anything already held rather than double-render.
                    if !self.items.iter().any(|held| held.id() == item.id()) {
                        self.items.push(item);
                    }
                }
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
    }

    /// Discard everything and re-arm the pager.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl<T: HasId> Default for Pager<T> {
    fn default() -> Self {
        Self::new()
    }
}
