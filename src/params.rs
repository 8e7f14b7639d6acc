//! Query parameters type for request URIs.

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::constants::NOT_ALLOWED_IN_PARAMS;
use crate::encoder::{encode_with_exclusions, encoded_len};
use crate::parser;

/// Query parameters from a request URI.
///
/// Stores decoded key-value pairs, sorted lexicographically by key for
/// deterministic serialization. Keys are unique; when the wire form repeats
/// a name, the last occurrence wins.
///
/// # Examples
///
/// ```
/// use request_uri::Params;
///
/// let params = Params::parse("name=ferret&mode=fast");
/// assert_eq!(params.get("name"), Some("ferret"));
/// assert_eq!(params.to_string(), "mode=fast&name=ferret");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Params {
    params: BTreeMap<String, String>,
}

impl Params {
    /// Creates an empty parameter map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a bare parameter list (without leading `?`).
    ///
    /// This runs the same machine as [`crate::Uri::parse`], entered directly
    /// at the parameter-name state, and cannot fail. Note the machine commits
    /// a pair for whatever it has buffered when input ends, so the empty
    /// string yields the single entry `("", "")` rather than an empty map.
    ///
    /// # Examples
    ///
    /// ```
    /// use request_uri::Params;
    ///
    /// let params = Params::parse("x=1&y=2;z=3");
    /// assert_eq!(params.len(), 3);
    /// assert_eq!(params.get("z"), Some("3"));
    ///
    /// let flag = Params::parse("verbose");
    /// assert_eq!(flag.get("verbose"), Some(""));
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        parser::parse_params(input)
    }

    /// Returns the decoded value for `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Inserts a pair, returning the previous value for `name` if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.params.insert(name.into(), value.into())
    }

    /// Returns true if no parameters are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns an iterator over the decoded pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.into_iter()
    }

    /// Character count of the serialized pair list, without building it.
    ///
    /// This is the length of `to_string()`: encoded pairs joined by `&`,
    /// with no leading `?`.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        if self.params.is_empty() {
            return 0;
        }
        let pairs: usize = self
            .params
            .iter()
            .map(|(name, value)| {
                encoded_len(name, NOT_ALLOWED_IN_PARAMS)
                    + 1
                    + encoded_len(value, NOT_ALLOWED_IN_PARAMS)
            })
            .sum();
        pairs + self.params.len() - 1
    }
}

impl fmt::Display for Params {
    /// Writes `name=value` pairs joined by `&`, both sides percent-encoded.
    /// The `=` is always written, even for an empty value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self
            .params
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    encode_with_exclusions(name, NOT_ALLOWED_IN_PARAMS),
                    encode_with_exclusions(value, NOT_ALLOWED_IN_PARAMS)
                )
            })
            .collect();
        write!(f, "{}", pairs.join("&"))
    }
}

impl FromStr for Params {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Params {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.params.extend(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into())),
        );
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a str, &'a str);
    type IntoIter = std::iter::Map<
        std::collections::btree_map::Iter<'a, String, String>,
        fn((&'a String, &'a String)) -> (&'a str, &'a str),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Params {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Params {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}
