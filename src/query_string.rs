//! Query string merging for page links.
//!
//! The existing query of a link is decoded into an ordered map, the new
//! parameters are laid over it and the map is encoded back into exactly the
//! span the old query occupied. Only the parameters that were set are
//! re-encoded. Everything before the `?`, the untouched parameters and the
//! fragment are copied byte for byte.

use std::ops::Range;

use indexmap::IndexMap;
use itertools::Itertools;
use url::form_urlencoded;

/// A decoded value plus, for parameters read from a URL, the encoded
/// `name=value` segment it came from
#[derive(Debug, Clone, PartialEq, Eq)]
struct Parameter {
    value: String,
    raw: Option<String>,
}

/// Ordered `name -> value` query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParameterMap(IndexMap<String, Parameter>);

impl QueryParameterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes an `application/x-www-form-urlencoded` string. For a repeated
    /// name the first occurrence wins, both its value and its position.
    ///
    /// Parameters that are never overwritten are serialized back exactly as
    /// they were read, invalid UTF-8 escapes included.
    pub fn parse(query: &str) -> Self {
        let mut map = IndexMap::new();

        for segment in query.split('&').filter(|segment| !segment.is_empty()) {
            let Some((name, value)) = form_urlencoded::parse(segment.as_bytes()).next() else {
                continue;
            };

            map.entry(name.into_owned()).or_insert_with(|| Parameter {
                value: value.into_owned(),
                raw: Some(segment.to_string()),
            });
        }

        Self(map)
    }

    /// An existing name keeps its position, a new one goes last
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(
            name.into(),
            Parameter {
                value: value.into(),
                raw: None,
            },
        );
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(|parameter| parameter.value.as_str())
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.get_index_of(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(name, parameter)| (name.as_str(), parameter.value.as_str()))
    }

    pub fn merge(&mut self, other: &QueryParameterMap) -> &mut Self {
        for (name, value) in other.iter() {
            self.set(name, value);
        }
        self
    }

    /// `&` separated, percent-encoded, space as `+`
    pub fn serialize(&self) -> String {
        self.0
            .iter()
            .map(|(name, parameter)| match &parameter.raw {
                Some(raw) => raw.clone(),
                None => form_urlencoded::Serializer::new(String::new())
                    .append_pair(name, &parameter.value)
                    .finish(),
            })
            .join("&")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParameterMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.set(name, value);
        }
        map
    }
}

/// Byte offsets of the parts of a URL reference that matter for merging
#[derive(Debug, Clone, PartialEq, Eq)]
struct UrlParts {
    path: Range<usize>,
    query: Option<Range<usize>>,
    fragment_start: usize,
}

fn scheme_len(reference: &str) -> Option<usize> {
    let colon = reference.find(':')?;
    let scheme = &reference[..colon];

    let mut chars = scheme.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let valid = chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    (starts_with_letter && valid).then_some(colon)
}

fn split_url(url: &str) -> UrlParts {
    let fragment_start = url.find('#').unwrap_or(url.len());
    let query_mark = url[..fragment_start].find('?');
    let hierarchy = &url[..query_mark.unwrap_or(fragment_start)];

    let after_scheme = scheme_len(hierarchy).map_or(0, |len| len + 1);
    let path_start = match hierarchy[after_scheme..].strip_prefix("//") {
        Some(authority) => after_scheme + 2 + authority.find('/').unwrap_or(authority.len()),
        None => after_scheme,
    };

    UrlParts {
        path: path_start..hierarchy.len(),
        query: query_mark.map(|mark| mark + 1..fragment_start),
        fragment_start,
    }
}

/// Sets `params_to_set` in the query string of `url`.
///
/// Names already present keep their position and get the new value, new
/// names are appended in the given order. An empty path becomes `/`.
pub fn merge_query_parameter(url: &str, params_to_set: &QueryParameterMap) -> String {
    let parts = split_url(url);

    let mut params = parts
        .query
        .clone()
        .map(|span| QueryParameterMap::parse(&url[span]))
        .unwrap_or_default();
    params.merge(params_to_set);

    let mut merged = String::with_capacity(url.len() + params_to_set.len() * 8 + 2);
    merged.push_str(&url[..parts.path.end]);

    if parts.path.is_empty() {
        merged.push('/');
    }

    if parts.query.is_some() || !params.is_empty() {
        merged.push('?');
        merged.push_str(&params.serialize());
    }

    merged.push_str(&url[parts.fragment_start..]);

    tracing::debug!(url, result = %merged, "merged query parameters");

    merged
}

/// Decoded value of the first `name` parameter in the query of `url`
pub fn query_parameter(url: &str, name: &str) -> Option<String> {
    let span = split_url(url).query?;

    form_urlencoded::parse(url[span].as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
