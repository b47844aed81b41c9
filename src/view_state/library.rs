//! Content library view state
//!
//! Search text, the last fetched page of items and the selection cursor.
//! The fetch error is tracked separately from the items because a failed
//! listing arrives as an empty list.

use crate::models::{Content, ContentQuery, ContentType};

/// Type filter cycled from the library screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(ContentType),
}

impl TypeFilter {
    const ORDER: [TypeFilter; 6] = [
        TypeFilter::All,
        TypeFilter::Only(ContentType::Game),
        TypeFilter::Only(ContentType::Activity),
        TypeFilter::Only(ContentType::Lesson),
        TypeFilter::Only(ContentType::Story),
        TypeFilter::Only(ContentType::Exercise),
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            TypeFilter::All => "All",
            TypeFilter::Only(t) => t.as_str(),
        }
    }

    pub fn next(&self) -> Self {
        let pos = Self::ORDER.iter().position(|f| f == self).unwrap_or(0);
        Self::ORDER[(pos + 1) % Self::ORDER.len()]
    }
}

#[derive(Debug, Clone, Default)]
pub struct LibraryState {
    /// Search box contents
    pub search: String,
    pub type_filter: TypeFilter,
    pub items: Vec<Content>,
    pub selected: usize,
    /// Set when the last fetch failed; `items` is empty in that case
    pub error: Option<String>,
    /// Status line, e.g. the result of seeding games
    pub notice: Option<String>,
    /// True until the first fetch completes
    pub stale: bool,
}

impl LibraryState {
    pub fn new() -> Self {
        Self {
            stale: true,
            ..Self::default()
        }
    }

    /// Query for the current search box and filter.
    pub fn query(&self) -> ContentQuery {
        let query = ContentQuery::new().with_search(self.search.clone());
        match self.type_filter {
            TypeFilter::All => query,
            TypeFilter::Only(t) => query.with_type(t),
        }
    }

    /// Replace the list with a fetch result.
    pub fn set_results(&mut self, items: Vec<Content>, error: Option<String>) {
        self.items = items;
        self.error = error;
        self.stale = false;
        if self.selected >= self.items.len() {
            self.selected = self.items.len().saturating_sub(1);
        }
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search.push(c);
        self.stale = true;
    }

    pub fn pop_search_char(&mut self) {
        if self.search.pop().is_some() {
            self.stale = true;
        }
    }

    pub fn cycle_type_filter(&mut self) {
        self.type_filter = self.type_filter.next();
        self.stale = true;
    }

    pub fn select_next(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1).min(self.items.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_item(&self) -> Option<&Content> {
        self.items.get(self.selected)
    }

    /// "No matches" only makes sense when the fetch succeeded.
    pub fn is_empty_result(&self) -> bool {
        !self.stale && self.items.is_empty() && self.error.is_none()
    }
}
