//! Pagination metadata for page-link controls: page counts, the current
//! page, next/previous navigation, the ranges of page links to collapse,
//! and page links built by setting the page parameter in a URL's query
//! string.
//!
//! Two current-page policies are offered behind `PaginatorInterface`:
//! [`ClampingPaginator`] snaps out-of-range requests to the nearest page,
//! [`StrictPaginator`] drops them.
//!
//! ```
//! use paginator::{ClampingPaginator, PaginatorInterface};
//!
//! let paginator = ClampingPaginator::with_options(3, 1, 2);
//!
//! assert_eq!(
//!     paginator.next_page_url("/product/category?page=1&sortby=date&sortdir=asc"),
//!     Some("/product/category?page=3&sortby=date&sortdir=asc".to_string())
//! );
//! ```

pub mod clamping;
pub mod config;
pub mod error;
pub mod page;
pub mod page_window;
pub mod paginator;
pub mod query_string;
pub mod strict;
pub mod types;
pub mod utils;

pub use clamping::ClampingPaginator;
pub use config::PaginationConfig;
pub use error::PaginatorError;
pub use page::Page;
pub use paginator::PaginatorInterface;
pub use query_string::{merge_query_parameter, QueryParameterMap};
pub use strict::StrictPaginator;
pub use types::{HiddenRange, PageNumber};
pub use utils::ToCount;
