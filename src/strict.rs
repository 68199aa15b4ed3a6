use std::num::NonZeroUsize;

use crate::{
    config::{PaginationConfig, DEFAULT_CURRENT_PAGE},
    page::Page,
    page_window::validate_page,
    paginator::{requested_page, PaginatorInterface},
    types::PageNumber,
    utils::ToCount,
};

/// Exposes the current page as a `Page` and refuses out-of-range requests:
/// they leave the paginator without a current page instead.
///
/// When the page count changes, an existing current page is kept only if it
/// still exists. Without a current page the paginator falls back to page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrictPaginator {
    config: PaginationConfig,
    current_page: Option<PageNumber>,
}

impl StrictPaginator {
    pub fn new(total_items: impl ToCount) -> Self {
        Self::from_config(PaginationConfig::new(total_items), DEFAULT_CURRENT_PAGE)
    }

    pub fn with_options(
        total_items: impl ToCount,
        per_page: impl ToCount,
        current_page: i64,
        base_url: impl Into<String>,
    ) -> Self {
        Self::from_config(
            PaginationConfig::new(total_items)
                .per_page_set(per_page)
                .base_url_set(base_url),
            current_page,
        )
    }

    pub fn from_config(config: PaginationConfig, current_page: i64) -> Self {
        let mut paginator = Self {
            config,
            current_page: None,
        };
        paginator.current_page_update(current_page);
        paginator
    }

    /// Takes the current page from the page-name parameter of `url` and
    /// keeps `url` as the base for page links
    pub fn from_request_url(url: &str, config: PaginationConfig) -> Self {
        let requested = requested_page(url, config.page_name());
        Self::from_config(config.base_url_set(url), requested)
    }

    #[must_use = "method moves the value of self and returns the modified value"]
    pub fn total_items_set(mut self, value: impl ToCount) -> Self {
        self.total_items_update(value);
        self
    }

    #[must_use = "method moves the value of self and returns the modified value"]
    pub fn per_page_set(mut self, value: impl ToCount) -> Self {
        self.per_page_update(value);
        self
    }

    #[must_use = "method moves the value of self and returns the modified value"]
    pub fn current_page_set(mut self, requested: i64) -> Self {
        self.current_page_update(requested);
        self
    }

    #[must_use = "method moves the value of self and returns the modified value"]
    pub fn page_name_set(mut self, value: impl Into<String>) -> Self {
        self.page_name_update(value);
        self
    }

    #[must_use = "method moves the value of self and returns the modified value"]
    pub fn url_set(mut self, value: impl Into<String>) -> Self {
        self.url_update(value);
        self
    }

    #[must_use = "method moves the value of self and returns the modified value"]
    pub fn on_each_side_set(mut self, value: usize) -> Self {
        self.on_each_side_update(value);
        self
    }

    fn page_at(&self, number: Option<PageNumber>) -> Option<Page> {
        number
            .and_then(NonZeroUsize::new)
            .map(|number| self.build_page(number))
    }

    pub fn next_page(&self) -> Option<Page> {
        self.page_at(self.next_page_number())
    }

    pub fn previous_page(&self) -> Option<Page> {
        self.page_at(self.previous_page_number())
    }

    /// Link to the next page built from the stored URL
    pub fn next_page_url(&self) -> Option<String> {
        self.next_page_number()
            .and_then(|number| self.page_url(number))
    }

    /// Link to the previous page built from the stored URL
    pub fn previous_page_url(&self) -> Option<String> {
        self.previous_page_number()
            .and_then(|number| self.page_url(number))
    }

    pub fn next_page_url_for(&self, current_url: &str) -> Option<String> {
        self.next_page_number()
            .map(|number| self.page_url_for(current_url, number))
    }

    pub fn previous_page_url_for(&self, current_url: &str) -> Option<String> {
        self.previous_page_number()
            .map(|number| self.page_url_for(current_url, number))
    }
}

impl PaginatorInterface for StrictPaginator {
    type CurrentPage = Option<Page>;

    fn config(&self) -> &PaginationConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut PaginationConfig {
        &mut self.config
    }

    fn current_page(&self) -> Option<Page> {
        self.page_at(self.current_page)
    }

    fn current_page_number(&self) -> Option<PageNumber> {
        self.current_page
    }

    fn current_page_update(&mut self, requested: i64) -> &mut Self {
        let number_of_pages = self.number_of_pages();
        self.current_page = validate_page(requested, number_of_pages);

        if self.current_page.is_none() {
            tracing::debug!(requested, number_of_pages, "no current page");
        }

        self
    }

    fn refresh_current_page(&mut self) {
        match self.current_page {
            Some(number) => {
                self.current_page_update(i64::try_from(number).unwrap_or(i64::MAX));
            }
            None => {
                tracing::debug!("resetting to the first page");
                self.current_page_update(DEFAULT_CURRENT_PAGE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn out_of_range_request_leaves_no_current_page() {
        let paginator = StrictPaginator::from_config(PaginationConfig::new(50), 6);

        assert_eq!(paginator.current_page(), None);
        assert!(!paginator.is_on_first_page());
        assert_eq!(paginator.next_page(), None);
        assert_eq!(paginator.previous_page(), None);
    }

    #[test]
    fn current_page_is_fully_populated() {
        let paginator = StrictPaginator::with_options(3, 1, 3, "/list");
        let Some(page) = paginator.current_page() else {
            panic!("expected a current page");
        };

        assert_eq!(page.number(), 3);
        assert!(!page.is_first());
        assert!(page.is_last());
        assert!(page.is_current());
        assert!(!page.is_hidden());
        assert_eq!(page.url(), Some("/list?page=3"));
    }
}
