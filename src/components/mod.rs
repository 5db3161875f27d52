//! UI Components
//!
//! Leptos components for the search and shortlist widget.

mod result_list;
mod search_bar;
mod shortlist_panel;

pub use result_list::ResultList;
pub use search_bar::SearchBar;
pub use shortlist_panel::ShortlistPanel;
