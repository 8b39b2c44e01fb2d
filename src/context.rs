//! Application Context
//!
//! View state shared via the Leptos Context API. The setters own the one
//! cross-field invariant: changing search, type filter, or sort resets
//! the current page to 1.

use leptos::prelude::*;

use crate::models::Pokemon;
use crate::pipeline::SortKey;

/// App-wide view-state signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Name substring filter - read
    pub search_term: ReadSignal<String>,
    set_search_term: WriteSignal<String>,
    /// Type filter, empty = all types - read
    pub selected_type: ReadSignal<String>,
    set_selected_type: WriteSignal<String>,
    /// Current sort selection - read
    pub sort_key: ReadSignal<SortKey>,
    set_sort_key: WriteSignal<SortKey>,
    /// 1-based page into the derived view - read
    pub current_page: ReadSignal<usize>,
    set_current_page: WriteSignal<usize>,
    /// Record shown in the detail overlay, if any - read
    pub selected: ReadSignal<Option<Pokemon>>,
    set_selected: WriteSignal<Option<Pokemon>>,
}

impl AppContext {
    pub fn new(
        search_term: (ReadSignal<String>, WriteSignal<String>),
        selected_type: (ReadSignal<String>, WriteSignal<String>),
        sort_key: (ReadSignal<SortKey>, WriteSignal<SortKey>),
        current_page: (ReadSignal<usize>, WriteSignal<usize>),
        selected: (ReadSignal<Option<Pokemon>>, WriteSignal<Option<Pokemon>>),
    ) -> Self {
        Self {
            search_term: search_term.0,
            set_search_term: search_term.1,
            selected_type: selected_type.0,
            set_selected_type: selected_type.1,
            sort_key: sort_key.0,
            set_sort_key: sort_key.1,
            current_page: current_page.0,
            set_current_page: current_page.1,
            selected: selected.0,
            set_selected: selected.1,
        }
    }

    /// Update the search term and jump back to page 1.
    pub fn set_search(&self, term: String) {
        self.set_search_term.set(term);
        self.set_current_page.set(1);
    }

    /// Update the type filter and jump back to page 1.
    pub fn set_type_filter(&self, type_name: String) {
        self.set_selected_type.set(type_name);
        self.set_current_page.set(1);
    }

    /// Update the sort selection and jump back to page 1.
    pub fn set_sort(&self, key: SortKey) {
        self.set_sort_key.set(key);
        self.set_current_page.set(1);
    }

    /// Navigate to the requested page as emitted by the pagination control.
    pub fn go_to_page(&self, page: usize) {
        self.set_current_page.set(page);
    }

    /// Open the detail overlay for a record.
    pub fn open_detail(&self, pokemon: Pokemon) {
        self.set_selected.set(Some(pokemon));
    }

    /// Close the detail overlay.
    pub fn close_detail(&self) {
        self.set_selected.set(None);
    }
}
