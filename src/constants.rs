//! Constants for request URI encoding.

/// Value stored for a parameter that appears without one.
pub const EMPTY_PARAM_VALUE: &str = "";

/// Characters escaped in the path beyond the general allow-list.
pub const NOT_ALLOWED_IN_PATH: &str = " ?#";

/// Characters escaped in the anchor beyond the general allow-list.
pub const NOT_ALLOWED_IN_ANCHOR: &str = "?";

/// Characters escaped in parameter names and values beyond the general allow-list.
pub const NOT_ALLOWED_IN_PARAMS: &str = " &;=";
