//! Pure list operations behind the company table.
//!
//! Nothing in here touches the terminal or the network. The controller feeds
//! the fetched companies through `filter` then `sort` on every control change
//! and renders whatever comes out.

pub mod filter;
pub mod format;
pub mod sort;

pub use filter::filter_companies;
pub use format::{distinct_sorted, format_thousands};
pub use sort::{sort_companies, SortField, SortOrder};
