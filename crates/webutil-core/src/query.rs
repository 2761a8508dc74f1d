//! URL query-string assembly and parsing.
//!
//! This module provides a lightweight pair builder for constructing query
//! parameters, an assembler that appends them to a base URL, and readers
//! that extract one or all parameters from a [`QueryString`].
//!
//! Values are not percent-encoded on assembly; callers append pre-encoded
//! values. Readers percent-decode on the way out.

use percent_encoding::percent_decode_str;
use std::collections::HashMap;
use std::fmt::{self, Display};
use tracing::trace;

/// A URL query string with the leading `?` already stripped.
///
/// Replaces the loose "location-like" input shape: callers extract the
/// `search` portion of a URL themselves and pass it through
/// [`QueryString::from_search`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryString(String);

impl QueryString {
    /// Creates a query string, stripping one leading `?` if present.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        match raw.strip_prefix('?') {
            Some(rest) => Self(rest.to_string()),
            None => Self(raw),
        }
    }

    /// Creates a query string from a location-style `search` field
    /// (e.g. `"?a=1&b=2"`).
    #[must_use]
    pub fn from_search(search: &str) -> Self {
        Self::new(search)
    }

    /// Returns the raw query text without the leading `?`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the query string has no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Builder for assembling query parameter pairs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a required key/value pair.
    pub fn push<T>(&mut self, key: impl Into<String>, value: T)
    where
        T: Display,
    {
        self.pairs.push((key.into(), value.to_string()));
    }

    /// Append a key/value pair when the value is present.
    pub fn push_opt<T>(&mut self, key: impl Into<String>, value: Option<T>)
    where
        T: ToString,
    {
        if let Some(value) = value {
            self.pairs.push((key.into(), value.to_string()));
        }
    }

    /// Returns the collected key/value pairs in insertion order.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Returns true if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the number of parameters added.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }
}

/// Appends `params` to `url` as a query string.
///
/// Ensures `url` starts with `/` and carries exactly one `?` before the
/// parameters, then appends each pair as `&key=value` in insertion order.
/// The stray `&` before the first parameter is collapsed so the result
/// reads `?key=value&...`. Values are appended verbatim, without
/// percent-encoding.
#[must_use]
pub fn build_query(url: &str, params: &QueryParams) -> String {
    trace!(url, params = params.len(), "assembling query string");

    let mut out = String::with_capacity(url.len() + 1);
    if !url.starts_with('/') {
        out.push('/');
    }
    out.push_str(url);
    if !out.contains('?') {
        out.push('?');
    }
    for (key, value) in params.pairs() {
        out.push('&');
        out.push_str(key);
        out.push('=');
        out.push_str(value);
    }
    out.replacen("?&", "?", 1)
}

/// Extracts a single parameter value from a query string.
///
/// Matches the first `key=value` entry bounded by `&` or the string edges.
/// The key is compared on its raw (undecoded) text; the returned value is
/// percent-decoded. Returns `None` when the key is absent.
#[must_use]
pub fn read_param(query: &QueryString, key: &str) -> Option<String> {
    query
        .as_str()
        .split('&')
        .find_map(|entry| entry.strip_prefix(key)?.strip_prefix('='))
        .map(decode)
}

/// Extracts all parameters from a query string.
///
/// Splits on `&`, then each entry on the first `=`, percent-decoding both
/// sides. Entries whose decoded key is empty are dropped; an entry without
/// `=` yields an empty-string value; later duplicate keys overwrite
/// earlier ones.
#[must_use]
pub fn read_all_params(query: &QueryString) -> HashMap<String, String> {
    let mut args = HashMap::new();
    if query.is_empty() {
        return args;
    }
    for entry in query.as_str().split('&') {
        let (raw_key, raw_value) = match entry.split_once('=') {
            Some((k, v)) => (k, v),
            None => (entry, ""),
        };
        let key = decode(raw_key);
        if !key.is_empty() {
            args.insert(key, decode(raw_value));
        }
    }
    args
}

/// Percent-decodes a query component, replacing invalid UTF-8 with U+FFFD.
fn decode(component: &str) -> String {
    percent_decode_str(component).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_strips_leading_question_mark() {
        assert_eq!(QueryString::new("?a=1").as_str(), "a=1");
        assert_eq!(QueryString::new("a=1").as_str(), "a=1");
        assert_eq!(QueryString::from_search("?a=1&b=2").as_str(), "a=1&b=2");
    }

    #[test]
    fn test_query_string_empty() {
        assert!(QueryString::new("").is_empty());
        assert!(QueryString::new("?").is_empty());
        assert!(!QueryString::new("?a=1").is_empty());
    }

    #[test]
    fn test_push_opt_skips_none() {
        let mut params = QueryParams::new();
        params.push_opt("name", Option::<String>::None);
        assert!(params.is_empty());
    }

    #[test]
    fn test_push_preserves_order() {
        let mut params = QueryParams::new();
        params.push("b", 2);
        params.push("a", 1);
        assert_eq!(
            params.pairs(),
            &[
                ("b".to_string(), "2".to_string()),
                ("a".to_string(), "1".to_string())
            ]
        );
    }

    #[test]
    fn test_build_query_basic() {
        let mut params = QueryParams::new();
        params.push("a", 1);
        params.push("b", "two");
        assert_eq!(build_query("/list", &params), "/list?a=1&b=two");
    }

    #[test]
    fn test_build_query_prepends_slash() {
        let mut params = QueryParams::new();
        params.push("a", 1);
        assert_eq!(build_query("list", &params), "/list?a=1");
    }

    #[test]
    fn test_build_query_existing_separator() {
        let mut params = QueryParams::new();
        params.push("b", 2);
        assert_eq!(build_query("/list?a=1", &params), "/list?a=1&b=2");
    }

    #[test]
    fn test_build_query_no_params() {
        assert_eq!(build_query("/list", &QueryParams::new()), "/list?");
    }

    #[test]
    fn test_read_param_found() {
        let query = QueryString::from_search("?a=1&b=2");
        assert_eq!(read_param(&query, "a"), Some("1".to_string()));
        assert_eq!(read_param(&query, "b"), Some("2".to_string()));
    }

    #[test]
    fn test_read_param_missing() {
        let query = QueryString::from_search("?a=1");
        assert_eq!(read_param(&query, "z"), None);
    }

    #[test]
    fn test_read_param_does_not_match_key_prefix() {
        let query = QueryString::from_search("?ab=1&a=2");
        assert_eq!(read_param(&query, "a"), Some("2".to_string()));
    }

    #[test]
    fn test_read_param_decodes_value() {
        let query = QueryString::from_search("?name=hello%20world");
        assert_eq!(read_param(&query, "name"), Some("hello world".to_string()));
    }

    #[test]
    fn test_read_all_params_empty() {
        assert!(read_all_params(&QueryString::from_search("")).is_empty());
        assert!(read_all_params(&QueryString::from_search("?")).is_empty());
    }

    #[test]
    fn test_read_all_params_basic() {
        let args = read_all_params(&QueryString::from_search("?a=1&b=2"));
        assert_eq!(args.len(), 2);
        assert_eq!(args["a"], "1");
        assert_eq!(args["b"], "2");
    }

    #[test]
    fn test_read_all_params_last_write_wins() {
        let args = read_all_params(&QueryString::from_search("?a=1&a=2"));
        assert_eq!(args.len(), 1);
        assert_eq!(args["a"], "2");
    }

    #[test]
    fn test_read_all_params_entry_without_equals() {
        let args = read_all_params(&QueryString::from_search("?flag&a=1"));
        assert_eq!(args["flag"], "");
        assert_eq!(args["a"], "1");
    }

    #[test]
    fn test_read_all_params_drops_empty_keys() {
        let args = read_all_params(&QueryString::from_search("?=1&a=2"));
        assert_eq!(args.len(), 1);
        assert_eq!(args["a"], "2");
    }

    #[test]
    fn test_read_all_params_decodes_keys_and_values() {
        let args = read_all_params(&QueryString::from_search("?na%20me=v%26al"));
        assert_eq!(args["na me"], "v&al");
    }

    #[test]
    fn test_read_all_params_lossy_decode() {
        // %FF is not valid UTF-8; decoding substitutes U+FFFD instead of failing
        let args = read_all_params(&QueryString::from_search("?a=%FF"));
        assert_eq!(args["a"], "\u{FFFD}");
    }

    #[test]
    fn test_read_param_lossy_decode() {
        let query = QueryString::from_search("?a=%FF&b=ok");
        assert_eq!(read_param(&query, "a"), Some("\u{FFFD}".to_string()));
        assert_eq!(read_param(&query, "b"), Some("ok".to_string()));
    }
}
