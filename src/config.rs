use std::fmt;

use impl_helper::ImplHelper;
use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize,
};
use wrap_context::{arg_context, raw_context};

use crate::utils::{parse_count, ToCount};

pub const DEFAULT_PER_PAGE: usize = 10;
pub const DEFAULT_CURRENT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_NAME: &str = "page";
pub const DEFAULT_ON_EACH_SIDE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ImplHelper)]
#[serde(default)]
pub struct PaginationConfig {
    #[helper(copy /* upd is custom */)]
    #[serde(deserialize_with = "lenient_count")]
    total_items: usize,

    #[helper(copy /* upd is custom */)]
    #[serde(deserialize_with = "lenient_count")]
    per_page: usize,

    /* get is custom */
    page_name: String,

    /* get is custom */
    base_url: Option<String>,

    #[helper(copy, upd, set)]
    #[serde(deserialize_with = "lenient_count")]
    on_each_side: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            total_items: 0,
            per_page: DEFAULT_PER_PAGE,
            page_name: DEFAULT_PAGE_NAME.to_string(),
            base_url: None,
            on_each_side: DEFAULT_ON_EACH_SIDE,
        }
    }
}

impl PaginationConfig {
    pub fn new(total_items: impl ToCount) -> Self {
        Self {
            total_items: total_items.to_count(),
            ..Self::default()
        }
    }

    pub fn from_json(source: &str) -> anyhow::Result<Self> {
        let config: Self = raw_context!(serde_json::from_str(source))?;
        anyhow::Ok(config)
    }

    pub fn from_json_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let source = arg_context!(std::fs::read_to_string(path))?;
        let config = arg_context!(Self::from_json(&source))?;
        anyhow::Ok(config)
    }

    pub fn total_items_update(&mut self, value: impl ToCount) -> &mut Self {
        self.total_items = value.to_count();
        self
    }

    #[must_use = "method moves the value of self and returns the modified value"]
    pub fn total_items_set(mut self, value: impl ToCount) -> Self {
        self.total_items_update(value);
        self
    }

    pub fn per_page_update(&mut self, value: impl ToCount) -> &mut Self {
        self.per_page = value.to_count();
        self
    }

    #[must_use = "method moves the value of self and returns the modified value"]
    pub fn per_page_set(mut self, value: impl ToCount) -> Self {
        self.per_page_update(value);
        self
    }

    /// Falls back to `DEFAULT_PAGE_NAME` when empty
    pub fn page_name(&self) -> &str {
        if self.page_name.is_empty() {
            DEFAULT_PAGE_NAME
        } else {
            &self.page_name
        }
    }

    pub fn page_name_update(&mut self, value: impl Into<String>) -> &mut Self {
        self.page_name = value.into();
        self
    }

    #[must_use = "method moves the value of self and returns the modified value"]
    pub fn page_name_set(mut self, value: impl Into<String>) -> Self {
        self.page_name_update(value);
        self
    }

    /// `None` when unset or empty
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn base_url_update(&mut self, value: impl Into<String>) -> &mut Self {
        self.base_url = Some(value.into());
        self
    }

    #[must_use = "method moves the value of self and returns the modified value"]
    pub fn base_url_set(mut self, value: impl Into<String>) -> Self {
        self.base_url_update(value);
        self
    }

    pub fn base_url_clear(&mut self) -> &mut Self {
        self.base_url = None;
        self
    }
}

/// Accepts numbers, numeric strings, booleans and null. Anything that isn't
/// a non-negative number becomes 0.
fn lenient_count<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientCountVisitor;

    impl<'de> Visitor<'de> for LenientCountVisitor {
        type Value = usize;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            write!(formatter, "a count")
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<usize, E> {
            Ok(value.to_count())
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<usize, E> {
            Ok(value.to_count())
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<usize, E> {
            Ok(value.to_count())
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<usize, E> {
            Ok(value.to_count())
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<usize, E> {
            Ok(parse_count(value).unwrap_or_else(|err| {
                tracing::warn!(%err, "coercing to 0");
                0
            }))
        }

        fn visit_unit<E: de::Error>(self) -> Result<usize, E> {
            Ok(0)
        }

        fn visit_none<E: de::Error>(self) -> Result<usize, E> {
            Ok(0)
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<usize, D::Error> {
            deserializer.deserialize_any(self)
        }
    }

    deserializer.deserialize_any(LenientCountVisitor)
}
