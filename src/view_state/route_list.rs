//! Route list screen state: infinite-scroll browsing plus filtered search.

use std::sync::Arc;

use crate::error::ClientResult;
use crate::models::Route;
use crate::repo::{RouteFilter, RouteRepository};
use crate::usecase::SearchRoutes;
use crate::view_state::Pager;

/// What the list currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListMode {
    /// Cursor-paginated full listing.
    Browse,
    /// One-shot filtered search results.
    Search,
}

/// State of the route list screen.
///
/// Browsing accumulates pages through the [`Pager`]; running a search swaps
/// the screen to the one-shot result set. Clearing the filter returns to
/// browse mode with a fresh pager.
pub struct RouteListState {
    repo: Arc<RouteRepository>,
    search: SearchRoutes,
    pager: Pager<Route>,
    results: Vec<Route>,
    mode: ListMode,
    pub filter: RouteFilter,
    error: Option<String>,
    searching: bool,
}

impl RouteListState {
    pub fn new(repo: Arc<RouteRepository>) -> Self {
        Self {
            search: SearchRoutes::new(Arc::clone(&repo)),
            repo,
            pager: Pager::new(),
            results: Vec::new(),
            mode: ListMode::Browse,
            filter: RouteFilter::default(),
            error: None,
            searching: false,
        }
    }

    /// Routes to render, whichever mode is active.
    pub fn routes(&self) -> &[Route] {
        match self.mode {
            ListMode::Browse => self.pager.items(),
            ListMode::Search => &self.results,
        }
    }

    /// True while browsing and more pages may exist.
    pub fn has_more(&self) -> bool {
        self.mode == ListMode::Browse && self.pager.has_more()
    }

    pub fn is_loading(&self) -> bool {
        self.pager.is_in_flight() || self.searching
    }

    pub fn error(&self) -> Option<&str> {
        match self.mode {
            ListMode::Browse => self.pager.error(),
            ListMode::Search => self.error.as_deref(),
        }
    }

    /// Fetch the next page of the full listing. A no-op while a load is in
    /// flight, when the listing is exhausted, or when search results are
    /// shown.
    pub async fn load_more(&mut self) {
        if self.mode != ListMode::Browse {
            return;
        }
        let Some(request) = self.pager.begin() else {
            return;
        };
        let page = self.repo.page(request.after_id).await;
        self.pager.complete(page);
    }

    /// Run the filtered search and swap the screen to its results.
    ///
    /// An empty filter is rejected locally with a validation message; the
    /// current list is left untouched.
    pub async fn run_search(&mut self) -> ClientResult<()> {
        if self.searching {
            return Ok(());
        }
        self.searching = true;
        let outcome = self.search.execute(&self.filter).await;
        self.searching = false;
        match outcome {
            Ok(routes) => {
                self.results = routes;
                self.mode = ListMode::Search;
                self.error = None;
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Drop the filter and return to a fresh browse listing.
    pub fn clear_search(&mut self) {
        self.filter = RouteFilter::default();
        self.results.clear();
        self.error = None;
        self.mode = ListMode::Browse;
        self.pager.reset();
    }

    /// Refetch the listing from the first page.
    pub async fn refresh(&mut self) {
        if self.mode == ListMode::Browse {
            self.pager.reset();
            self.load_more().await;
        } else {
            let _ = self.run_search().await;
        }
    }
}
