use std::num::NonZeroUsize;

use itertools::Itertools;

use crate::{
    config::{PaginationConfig, DEFAULT_CURRENT_PAGE},
    page::Page,
    page_window::{self, compute_hidden_ranges, is_hidden},
    query_string::{merge_query_parameter, query_parameter, QueryParameterMap},
    types::{HiddenRange, PageNumber},
    utils::ToCount,
};

/// What both current-page policies share. Implementors own a
/// `PaginationConfig` and a resolved current page; everything else is
/// derived from those two on every call.
pub trait PaginatorInterface {
    type CurrentPage;

    fn config(&self) -> &PaginationConfig;

    fn config_mut(&mut self) -> &mut PaginationConfig;

    fn current_page(&self) -> Self::CurrentPage;

    /// `None` means there is no current page
    fn current_page_number(&self) -> Option<PageNumber>;

    fn current_page_update(&mut self, requested: i64) -> &mut Self;

    /// Re-derives the current page after the page count may have changed
    fn refresh_current_page(&mut self);

    fn total_items(&self) -> usize {
        self.config().total_items()
    }

    fn total_items_update(&mut self, value: impl ToCount) -> &mut Self
    where
        Self: Sized,
    {
        self.config_mut().total_items_update(value);
        self.refresh_current_page();
        self
    }

    fn per_page(&self) -> usize {
        self.config().per_page()
    }

    fn per_page_update(&mut self, value: impl ToCount) -> &mut Self
    where
        Self: Sized,
    {
        self.config_mut().per_page_update(value);
        self.refresh_current_page();
        self
    }

    fn page_name(&self) -> &str {
        self.config().page_name()
    }

    fn page_name_update(&mut self, value: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        self.config_mut().page_name_update(value);
        self
    }

    fn url(&self) -> Option<&str> {
        self.config().base_url()
    }

    fn url_update(&mut self, value: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        self.config_mut().base_url_update(value);
        self
    }

    fn on_each_side(&self) -> usize {
        self.config().on_each_side()
    }

    fn on_each_side_update(&mut self, value: usize) -> &mut Self
    where
        Self: Sized,
    {
        self.config_mut().on_each_side_update(value);
        self
    }

    fn number_of_pages(&self) -> usize {
        page_window::number_of_pages(self.total_items(), self.per_page())
    }

    fn has_pages(&self) -> bool {
        self.number_of_pages() > 0
    }

    fn is_on_first_page(&self) -> bool {
        self.current_page_number().is_some_and(page_window::is_first)
    }

    fn is_on_last_page(&self) -> bool {
        self.current_page_number()
            .is_some_and(|number| page_window::is_last(number, self.number_of_pages()))
    }

    fn next_page_number(&self) -> Option<PageNumber> {
        let current = self.current_page_number()?;

        (current < self.number_of_pages()).then_some(current + 1)
    }

    fn previous_page_number(&self) -> Option<PageNumber> {
        let current = self.current_page_number()?;

        (current > 1).then_some(current - 1)
    }

    fn hidden_ranges(&self) -> Vec<HiddenRange> {
        compute_hidden_ranges(
            self.current_page_number(),
            self.number_of_pages(),
            self.on_each_side(),
        )
    }

    fn is_hidden(&self, page_number: PageNumber) -> bool {
        is_hidden(page_number, &self.hidden_ranges())
    }

    /// `url` with the page-name parameter set to `page_number`
    fn page_url_for(&self, url: &str, page_number: PageNumber) -> String {
        let params = QueryParameterMap::from_iter([(self.page_name(), page_number.to_string())]);

        merge_query_parameter(url, &params)
    }

    /// Link to `page_number` built from the stored URL, `None` without one
    fn page_url(&self, page_number: PageNumber) -> Option<String> {
        self.url()
            .map(|url| self.page_url_for(url, page_number))
    }

    /// A fully populated page, relative to the current state
    fn build_page(&self, number: NonZeroUsize) -> Page {
        let ranges = self.hidden_ranges();
        self.build_page_with(number, &ranges)
    }

    fn build_page_with(&self, number: NonZeroUsize, ranges: &[HiddenRange]) -> Page {
        let page_number = number.get();

        Page::from_number(number)
            .is_first_set(page_window::is_first(page_number))
            .is_last_set(page_window::is_last(page_number, self.number_of_pages()))
            .is_current_set(self.current_page_number() == Some(page_number))
            .is_hidden_set(is_hidden(page_number, ranges))
            .url_set(self.page_url(page_number))
    }

    /// Every page from the first to the last
    fn pages(&self) -> Vec<Page> {
        let ranges = self.hidden_ranges();

        (1..=self.number_of_pages())
            .filter_map(NonZeroUsize::new)
            .map(|number| self.build_page_with(number, &ranges))
            .collect_vec()
    }

    fn database_offset(&self, page_number: i64) -> usize {
        page_window::database_offset(page_number, self.per_page())
    }
}

/// Requested page carried by a request URL under `page_name`; 1 without one
pub fn requested_page(url: &str, page_name: &str) -> i64 {
    query_parameter(url, page_name)
        .map(|value| i64::try_from(value.to_count()).unwrap_or(i64::MAX))
        .unwrap_or(DEFAULT_CURRENT_PAGE)
}
