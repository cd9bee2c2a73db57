//! # Resolver Module
//!
//! Turns a parsed segment list into a concrete path at call time.
//!
//! ## Overview
//!
//! - [`CallOptions`] carries the values for dynamic segments plus the reserved
//!   `format` and `params` options.
//! - [`PathResolver`] substitutes values and the helper's version, appends the
//!   extension (`.json` unless overridden, none after a trailing glob) and the
//!   query string.
//!
//! ## Example
//!
//! ```
//! use route_helpers::resolver::{resolve, CallOptions};
//! use route_helpers::segment::parse_template;
//! use serde_json::json;
//!
//! let segments = parse_template("/api/:version/cats/:id").unwrap();
//! let options = CallOptions::new().with("id", 1).params(json!({"page": 2}));
//! assert_eq!(
//!     resolve(&segments, Some("v1"), &options).unwrap(),
//!     "/api/v1/cats/1.json?page=2"
//! );
//! ```

mod core;
mod options;
mod query;

pub use self::core::{normalize_extension, resolve, PathResolver, DEFAULT_FORMAT};
pub use options::{normalize_key, segment_value, CallOptions, FORMAT_KEY, PARAMS_KEY};
pub use query::query_string;
