//! Main request URI type.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::constants::{NOT_ALLOWED_IN_ANCHOR, NOT_ALLOWED_IN_PATH};
use crate::encoder::{encode_with_exclusions, encoded_len};
use crate::params::Params;
use crate::parser;

/// A parsed request URI.
///
/// Holds the decoded path, optional anchor and query parameters of a
/// request line target. Values are immutable; the `with_*` methods return
/// updated copies, and serialization recomputes the encoded form on demand.
///
/// # Structure
///
/// ```text
/// path[#anchor][?name=value{&name=value}]
/// ```
///
/// # Examples
///
/// ```
/// use request_uri::Uri;
///
/// let uri = Uri::parse("/over/there#nose?name=ferret");
/// assert_eq!(uri.path(), "/over/there");
/// assert_eq!(uri.anchor(), Some("nose"));
/// assert_eq!(uri.param("name"), Some("ferret"));
/// assert_eq!(uri.to_string(), "/over/there#nose?name=ferret");
/// ```
///
/// The anchor distinguishes a missing marker from an empty one:
///
/// ```
/// use request_uri::Uri;
///
/// assert_eq!(Uri::parse("/p").anchor(), None);
/// assert_eq!(Uri::parse("/p#").anchor(), Some(""));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Uri {
    path: String,
    anchor: Option<String>,
    params: Params,
}

impl Uri {
    /// Parses a request URI from a string.
    ///
    /// The grammar is total: every character sequence produces a value and
    /// malformed input degrades to empty-value or empty-name parameters, so
    /// there is nothing to reject. Percent escapes and `+` are decoded in
    /// every region.
    ///
    /// # Examples
    ///
    /// ```
    /// use request_uri::Uri;
    ///
    /// let uri = Uri::parse("/a%20b?x=1&y=2;z=3");
    /// assert_eq!(uri.path(), "/a b");
    /// assert_eq!(uri.params().len(), 3);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let parsed = parser::parse_uri(input);
        Self {
            path: parsed.path,
            anchor: parsed.anchor,
            params: parsed.params,
        }
    }

    /// Creates a URI with the given path, no anchor and no parameters.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            anchor: None,
            params: Params::new(),
        }
    }

    pub(crate) fn from_parts(path: String, anchor: Option<String>, params: Params) -> Self {
        Self {
            path,
            anchor,
            params,
        }
    }

    /// Returns the decoded path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the decoded anchor, if the anchor marker was present.
    #[must_use]
    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    /// Returns the query parameters.
    #[must_use]
    pub const fn params(&self) -> &Params {
        &self.params
    }

    /// Returns the decoded value for parameter `name`, if present.
    ///
    /// # Examples
    ///
    /// ```
    /// use request_uri::Uri;
    ///
    /// let uri = Uri::parse("/search?q=ferrets&limit=10");
    /// assert_eq!(uri.param("q"), Some("ferrets"));
    /// assert_eq!(uri.param("offset"), None);
    /// ```
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// Returns a new URI with the given anchor.
    ///
    /// # Examples
    ///
    /// ```
    /// use request_uri::Uri;
    ///
    /// let uri = Uri::new("/doc").with_anchor("intro");
    /// assert_eq!(uri.to_string(), "/doc#intro");
    /// ```
    #[must_use]
    pub fn with_anchor(&self, anchor: impl Into<String>) -> Self {
        Self {
            path: self.path.clone(),
            anchor: Some(anchor.into()),
            params: self.params.clone(),
        }
    }

    /// Returns a new URI without an anchor.
    #[must_use]
    pub fn without_anchor(&self) -> Self {
        Self {
            path: self.path.clone(),
            anchor: None,
            params: self.params.clone(),
        }
    }

    /// Returns a new URI with the given parameters, replacing any present.
    ///
    /// # Examples
    ///
    /// ```
    /// use request_uri::{Params, Uri};
    ///
    /// let uri = Uri::parse("/list?page=1").with_params(Params::parse("page=2"));
    /// assert_eq!(uri.param("page"), Some("2"));
    /// ```
    #[must_use]
    pub fn with_params(&self, params: Params) -> Self {
        Self {
            path: self.path.clone(),
            anchor: self.anchor.clone(),
            params,
        }
    }

    /// Returns a new URI with one parameter added or replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use request_uri::Uri;
    ///
    /// let uri = Uri::new("/list").with_param("page", "2");
    /// assert_eq!(uri.to_string(), "/list?page=2");
    /// ```
    #[must_use]
    pub fn with_param(&self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut params = self.params.clone();
        params.insert(name, value);
        self.with_params(params)
    }

    /// Character count of the serialized URI, without building the string.
    ///
    /// Encoder output is pure ASCII, so this equals `to_string().len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use request_uri::Uri;
    ///
    /// let uri = Uri::parse("/over there#nose?name=ferret");
    /// assert_eq!(uri.encoded_len(), uri.to_string().len());
    /// ```
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        let mut len = encoded_len(&self.path, NOT_ALLOWED_IN_PATH);
        if let Some(anchor) = &self.anchor {
            len += 1 + encoded_len(anchor, NOT_ALLOWED_IN_ANCHOR);
        }
        if !self.params.is_empty() {
            len += 1 + self.params.encoded_len();
        }
        len
    }
}

impl fmt::Display for Uri {
    /// Writes the encoded path, then `#` and the encoded anchor if the
    /// anchor is present (even when empty), then `?` and the parameter
    /// pairs if any exist.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", encode_with_exclusions(&self.path, NOT_ALLOWED_IN_PATH))?;
        if let Some(anchor) = &self.anchor {
            write!(f, "#{}", encode_with_exclusions(anchor, NOT_ALLOWED_IN_ANCHOR))?;
        }
        if !self.params.is_empty() {
            write!(f, "?{}", self.params)?;
        }
        Ok(())
    }
}

impl FromStr for Uri {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Uri {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serializes_as_wire_string() {
        let uri = Uri::parse("/over there#nose?name=ferret");
        let json = serde_json::to_string(&uri).unwrap();
        assert_eq!(json, "\"/over%20there#nose?name=ferret\"");
    }

    #[test]
    fn deserializes_by_parsing() {
        let uri: Uri = serde_json::from_str("\"/p#a?x=1\"").unwrap();
        assert_eq!(uri.path(), "/p");
        assert_eq!(uri.anchor(), Some("a"));
        assert_eq!(uri.param("x"), Some("1"));
    }

    #[test]
    fn json_roundtrip() {
        let uri = Uri::parse("/a b#c?d=e f");
        let json = serde_json::to_string(&uri).unwrap();
        let back: Uri = serde_json::from_str(&json).unwrap();
        assert_eq!(back, uri);
    }

    #[test]
    fn params_roundtrip() {
        let params = Params::parse("a=1&b c=2");
        let json = serde_json::to_string(&params).unwrap();
        let back: Params = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
