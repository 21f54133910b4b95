//! Query-string decoding.
//!
//! Splits `&`-joined `key=value` pairs and percent-decodes both halves.
//! Nothing in here fails: malformed input degrades to literal text or is
//! skipped.

use url::form_urlencoded;

/// Maximum number of pairs kept per request. Extra pairs are dropped.
pub const MAX_QUERY_PARAMS: usize = 32;

/// Ordered, capacity-limited list of decoded query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a raw query string (without the leading `?`).
    ///
    /// Empty segments and segments with no `=` are skipped.
    ///
    /// ```
    /// # use minihttpd::http::query::QueryParams;
    /// let params = QueryParams::parse("q=rust+lang&flag&page=2");
    /// assert_eq!(params.get("q"), Some("rust lang"));
    /// assert_eq!(params.get("flag"), None);
    /// assert_eq!(params.len(), 2);
    /// ```
    pub fn parse(raw: &str) -> Self {
        let mut params = Self::new();

        for segment in raw.split('&') {
            if segment.is_empty() || !segment.contains('=') {
                continue;
            }

            let Some((key, value)) = form_urlencoded::parse(segment.as_bytes()).next() else {
                continue;
            };

            if !params.push(key, value) {
                break;
            }
        }

        params
    }

    /// Appends a pair. Returns `false` when the list is already full.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        if self.pairs.len() >= MAX_QUERY_PARAMS {
            return false;
        }
        self.pairs.push((key.into(), value.into()));
        true
    }

    /// Returns the value of the first pair whose key matches.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Decodes `%XX` escapes and `+` as space.
///
/// A `%` not followed by two hex digits is copied through unchanged. Decoded
/// bytes that do not form valid UTF-8 are replaced with U+FFFD.
pub fn percent_decode(input: &str) -> String {
    // Feed the whole input as one value; a literal `&` must not split it
    let single_value = format!("={}", input.replace('&', "%26"));
    form_urlencoded::parse(single_value.as_bytes())
        .next()
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default()
}
