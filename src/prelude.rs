//! Convenient re-exports for glob imports.
//!
//! This module provides a single import for all common types, making it easy
//! to get started with the crate:
//!
//! ```rust
//! use request_uri::prelude::*;
//!
//! let uri = Uri::parse("/over/there#nose?name=ferret");
//! assert_eq!(uri.param("name"), Some("ferret"));
//! ```
//!
//! Builder state markers (`Empty`, `Ready`) are intentionally excluded as
//! they are implementation details.

pub use crate::{
    // Core types
    Params, Uri,
    // Builder
    UriBuilder,
    // Encoding
    decode_fragment, encode, encode_with_exclusions, is_allowed_char,
    // Constants
    EMPTY_PARAM_VALUE, NOT_ALLOWED_IN_ANCHOR, NOT_ALLOWED_IN_PARAMS, NOT_ALLOWED_IN_PATH,
};
