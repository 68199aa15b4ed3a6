use crate::{
    config::{PaginationConfig, DEFAULT_CURRENT_PAGE},
    page_window::clamp_current_page,
    paginator::{requested_page, PaginatorInterface},
    types::PageNumber,
    utils::ToCount,
};

/// Keeps the current page a bare number and snaps every out-of-range request
/// to the nearest existing page, so there always is a current page as long
/// as there are pages at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClampingPaginator {
    config: PaginationConfig,
    current_page: PageNumber,
}

impl ClampingPaginator {
    pub fn new(total_items: impl ToCount) -> Self {
        Self::from_config(PaginationConfig::new(total_items), DEFAULT_CURRENT_PAGE)
    }

    pub fn with_options(
        total_items: impl ToCount,
        per_page: impl ToCount,
        current_page: i64,
    ) -> Self {
        Self::from_config(
            PaginationConfig::new(total_items).per_page_set(per_page),
            current_page,
        )
    }

    pub fn from_config(config: PaginationConfig, current_page: i64) -> Self {
        let mut paginator = Self {
            config,
            current_page: 1,
        };
        paginator.current_page_update(current_page);
        paginator
    }

    /// Takes the current page from the page-name parameter of `url`
    pub fn from_request_url(url: &str, config: PaginationConfig) -> Self {
        let requested = requested_page(url, config.page_name());
        Self::from_config(config, requested)
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

    pub fn next_page(&self) -> Option<PageNumber> {
        self.next_page_number()
    }

    pub fn previous_page(&self) -> Option<PageNumber> {
        self.previous_page_number()
    }

    pub fn next_page_url(&self, current_url: &str) -> Option<String> {
        self.next_page()
            .map(|number| self.page_url_for(current_url, number))
    }

    pub fn previous_page_url(&self, current_url: &str) -> Option<String> {
        self.previous_page()
            .map(|number| self.page_url_for(current_url, number))
    }
}

impl PaginatorInterface for ClampingPaginator {
    type CurrentPage = PageNumber;

    fn config(&self) -> &PaginationConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut PaginationConfig {
        &mut self.config
    }

    /// 1 when there are no pages
    fn current_page(&self) -> PageNumber {
        self.current_page
    }

    fn current_page_number(&self) -> Option<PageNumber> {
        self.has_pages().then_some(self.current_page)
    }

    fn current_page_update(&mut self, requested: i64) -> &mut Self {
        let number_of_pages = self.number_of_pages();
        let clamped = clamp_current_page(requested, number_of_pages);

        if i64::try_from(clamped).ok() != Some(requested) {
            tracing::debug!(requested, clamped, number_of_pages, "clamped current page");
        }

        self.current_page = clamped;
        self
    }

    fn refresh_current_page(&mut self) {
        let current = i64::try_from(self.current_page).unwrap_or(i64::MAX);
        self.current_page_update(current);
    }
}
