use std::num::NonZeroUsize;

use impl_helper::ImplHelper;
use serde::Serialize;

use crate::{error::PaginatorError, types::PageNumber};

/// A page link: a number plus where it sits among all pages. Built on
/// demand by the paginators, never stored by them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ImplHelper)]
pub struct Page {
    /* get and upd are custom */
    number: NonZeroUsize,

    #[helper(copy, upd, set)]
    is_first: bool,

    #[helper(copy, upd, set)]
    is_last: bool,

    #[helper(copy, upd, set)]
    is_current: bool,

    #[helper(copy, upd, set)]
    is_hidden: bool,

    /* get is custom */
    url: Option<String>,
}

impl Page {
    pub fn new(number: i64) -> Result<Self, PaginatorError> {
        Ok(Self::from_number(Self::validate(number)?))
    }

    pub(crate) fn from_number(number: NonZeroUsize) -> Self {
        Self {
            number,
            is_first: false,
            is_last: false,
            is_current: false,
            is_hidden: false,
            url: None,
        }
    }

    fn validate(number: i64) -> Result<NonZeroUsize, PaginatorError> {
        usize::try_from(number)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(PaginatorError::InvalidPageNumber(number))
    }

    pub fn number(&self) -> PageNumber {
        self.number.get()
    }

    pub fn number_update(&mut self, number: i64) -> Result<&mut Self, PaginatorError> {
        self.number = Self::validate(number)?;
        Ok(self)
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn url_update(&mut self, url: Option<String>) -> &mut Self {
        self.url = url;
        self
    }

    #[must_use = "method moves the value of self and returns the modified value"]
    pub fn url_set(mut self, url: Option<String>) -> Self {
        self.url = url;
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn number() -> Result<(), PaginatorError> {
        let mut page = Page::new(1)?;
        assert_eq!(page.number(), 1);

        assert_eq!(
            page.number_update(-1).unwrap_err(),
            PaginatorError::InvalidPageNumber(-1)
        );
        assert_eq!(page.number(), 1);

        page.number_update(4)?;
        assert_eq!(page.number(), 4);

        Ok(())
    }

    #[test]
    fn rejects_non_positive_numbers() {
        assert_eq!(Page::new(0), Err(PaginatorError::InvalidPageNumber(0)));
        assert_eq!(Page::new(-7), Err(PaginatorError::InvalidPageNumber(-7)));
        assert_eq!(
            Page::new(-1).unwrap_err().to_string(),
            "Invalid page number: -1"
        );
    }

    #[test]
    fn flags_start_unset() -> Result<(), PaginatorError> {
        let page = Page::new(1)?;

        assert!(!page.is_first());
        assert!(!page.is_last());
        assert!(!page.is_current());
        assert!(!page.is_hidden());
        assert_eq!(page.url(), None);

        Ok(())
    }

    #[test]
    fn flags_toggle() -> Result<(), PaginatorError> {
        let mut page = Page::new(1)?;

        page.is_first_update(true).is_hidden_update(true);
        assert!(page.is_first());
        assert!(page.is_hidden());

        page.is_first_update(false);
        assert!(!page.is_first());

        let page = page.is_last_set(true).is_current_set(true);
        assert!(page.is_last());
        assert!(page.is_current());

        Ok(())
    }

    #[test]
    fn url() -> Result<(), PaginatorError> {
        let page = Page::new(1)?.url_set(Some("https://example.com".to_string()));
        assert_eq!(page.url(), Some("https://example.com"));

        Ok(())
    }
}
