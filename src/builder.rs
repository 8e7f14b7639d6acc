//! Typestate builder for constructing [`Uri`] instances.
//!
//! This module provides a builder that uses phantom types to enforce
//! at compile-time that the path is set before `build()`.

use std::marker::PhantomData;

use crate::params::Params;
use crate::uri::Uri;

/// Marker: no path set yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

/// Marker: path set, ready to build.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ready;

/// A typestate builder for constructing [`Uri`] instances.
///
/// The path is the only required component and must be set before
/// `build()`. Anchor and parameters are optional and can be added at any
/// point. Construction cannot fail: the grammar accepts any text, so
/// `build()` returns the [`Uri`] directly.
///
/// # Type State
///
/// The builder uses phantom types to track progress:
/// - [`Empty`]: initial state, no path set
/// - [`Ready`]: path set, can call `build()`
///
/// # Examples
///
/// ```
/// use request_uri::UriBuilder;
///
/// let uri = UriBuilder::new()
///     .path("/over/there")
///     .anchor("nose")
///     .param("name", "ferret")
///     .build();
///
/// assert_eq!(uri.to_string(), "/over/there#nose?name=ferret");
/// ```
///
/// # Compile-Time Safety
///
/// Attempting to build without a path results in a compile error:
///
/// ```compile_fail
/// use request_uri::UriBuilder;
///
/// // Error: cannot call build() before path()
/// let uri = UriBuilder::new()
///     .anchor("nose")
///     .build();  // Compile error!
/// ```
#[derive(Debug, Clone)]
pub struct UriBuilder<State = Empty> {
    path: Option<String>,
    anchor: Option<String>,
    params: Params,
    _state: PhantomData<State>,
}

impl UriBuilder<Empty> {
    /// Creates a new builder in the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: None,
            anchor: None,
            params: Params::new(),
            _state: PhantomData,
        }
    }

    /// Sets the path and advances to the [`Ready`] state.
    ///
    /// The path is stored decoded; serialization encodes it.
    ///
    /// # Examples
    ///
    /// ```
    /// use request_uri::UriBuilder;
    ///
    /// let uri = UriBuilder::new().path("/over there").build();
    /// assert_eq!(uri.to_string(), "/over%20there");
    /// ```
    #[must_use]
    pub fn path(self, path: impl Into<String>) -> UriBuilder<Ready> {
        UriBuilder {
            path: Some(path.into()),
            anchor: self.anchor,
            params: self.params,
            _state: PhantomData,
        }
    }
}

impl Default for UriBuilder<Empty> {
    fn default() -> Self {
        Self::new()
    }
}

impl UriBuilder<Ready> {
    /// Builds the final [`Uri`].
    ///
    /// # Panics
    ///
    /// Does not panic in practice: the typestate pattern guarantees the
    /// path was set before `build()` can be called.
    #[must_use]
    pub fn build(self) -> Uri {
        // The only way to reach Ready is through path().
        let path = self.path.expect("path set in Ready state");
        Uri::from_parts(path, self.anchor, self.params)
    }
}

/// Methods available in all states for optional components.
impl<State> UriBuilder<State> {
    /// Sets the anchor.
    ///
    /// This can be called at any point in the builder chain.
    /// If called multiple times, the last value wins.
    #[must_use]
    pub fn anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }

    /// Sets the anchor if provided, otherwise leaves it unchanged.
    ///
    /// This is useful when the anchor is optional and may be `None`.
    #[must_use]
    pub fn maybe_anchor(self, anchor: Option<String>) -> Self {
        match anchor {
            Some(a) => self.anchor(a),
            None => self,
        }
    }

    /// Adds one parameter. Repeated names keep the last value.
    ///
    /// # Examples
    ///
    /// ```
    /// use request_uri::UriBuilder;
    ///
    /// let uri = UriBuilder::new()
    ///     .param("x", "1")
    ///     .param("y", "2")
    ///     .path("/p")
    ///     .build();
    ///
    /// assert_eq!(uri.to_string(), "/p?x=1&y=2");
    /// ```
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name, value);
        self
    }

    /// Replaces all parameters.
    ///
    /// This can be called at any point in the builder chain.
    /// If called multiple times, the last value wins.
    #[must_use]
    pub fn params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }
}
