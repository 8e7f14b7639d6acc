//! Lenient parser and encoder for HTTP request URIs.
//!
//! This crate decodes the request-line target of an HTTP exchange into a
//! structured value and serializes it back, percent-encoding on the way out.
//!
//! # Overview
//!
//! Request URIs have the structure:
//!
//! ```text
//! path[#anchor][?name=value{&name=value}]
//! ```
//!
//! A single character scan splits the three regions and percent-decodes each
//! of them. The grammar is total: every input produces a value, malformed
//! parameter text degrades to empty-name or empty-value entries, and no entry
//! point returns an error.
//!
//! # Quick Start
//!
//! ```rust
//! use request_uri::Uri;
//!
//! // Parse a request URI
//! let uri = Uri::parse("/over/there#nose?name=ferret&mode=fast");
//!
//! // Access components
//! assert_eq!(uri.path(), "/over/there");
//! assert_eq!(uri.anchor(), Some("nose"));
//! assert_eq!(uri.param("name"), Some("ferret"));
//!
//! // Serialize back to wire form
//! assert_eq!(uri.to_string(), "/over/there#nose?mode=fast&name=ferret");
//! ```
//!
//! # Builder Pattern
//!
//! Use the typestate builder for compile-time enforced construction:
//!
//! ```rust
//! use request_uri::UriBuilder;
//!
//! let uri = UriBuilder::new()
//!     .path("/over there")
//!     .param("name", "ferret")
//!     .build();
//!
//! assert_eq!(uri.to_string(), "/over%20there?name=ferret");
//! ```
//!
//! # Encoding
//!
//! The percent-encoder keeps a fixed allow-list of characters and escapes
//! everything else as the lowercase hex of the code point. Each URI region
//! narrows the allow-list with its own exclusion set, so `?` survives in a
//! parameter value but not in the path:
//!
//! ```rust
//! use request_uri::{encode, encode_with_exclusions, NOT_ALLOWED_IN_PATH};
//!
//! assert_eq!(encode("over there"), "over%20there");
//! assert_eq!(encode_with_exclusions("/a?b", NOT_ALLOWED_IN_PATH), "/a%3fb");
//! ```
//!
//! Serialized length is available without materializing the string:
//!
//! ```rust
//! use request_uri::Uri;
//!
//! let uri = Uri::parse("/over there?q=a b");
//! assert_eq!(uri.encoded_len(), uri.to_string().len());
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod builder;
mod constants;
mod encoder;
#[cfg(kani)]
mod kani_impls;
mod params;
mod parser;
pub mod prelude;
mod uri;

pub use builder::{Empty, Ready, UriBuilder};
pub use constants::{
    EMPTY_PARAM_VALUE, NOT_ALLOWED_IN_ANCHOR, NOT_ALLOWED_IN_PARAMS, NOT_ALLOWED_IN_PATH,
};
pub use encoder::{decode_fragment, encode, encode_with_exclusions, is_allowed_char};
pub use params::Params;
pub use uri::Uri;
