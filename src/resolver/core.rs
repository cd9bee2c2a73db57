//! Path resolution: segments + version + call options -> concrete path.
//!
//! This runs on every helper call. It only reads its inputs; the parsed
//! segment list is shared and never mutated.

use serde_json::Value;
use std::borrow::Cow;
use tracing::debug;

use super::options::{segment_value, CallOptions, FORMAT_KEY};
use super::query::query_string;
use crate::error::{HelperError, HelperResult};
use crate::segment::Segment;

/// Extension used when no `format` option is given
pub const DEFAULT_FORMAT: &str = "json";

/// Normalize a format to its extension form: `xml` and `.xml` both give `.xml`
///
/// An empty format means "no extension".
#[must_use]
pub fn normalize_extension(format: &str) -> Option<String> {
    let bare = format.trim().trim_start_matches('.');
    (!bare.is_empty()).then(|| format!(".{}", bare))
}

/// Builds concrete paths from parsed segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    /// Default extension including the leading `.`, `None` for extensionless
    default_extension: Option<String>,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::new(DEFAULT_FORMAT)
    }
}

impl PathResolver {
    #[must_use]
    pub fn new(default_format: &str) -> Self {
        Self {
            default_extension: normalize_extension(default_format),
        }
    }

    #[must_use]
    pub fn default_extension(&self) -> Option<&str> {
        self.default_extension.as_deref()
    }

    fn extension(&self, segments: &[Segment], options: &CallOptions) -> HelperResult<Option<String>> {
        match options.format_value() {
            Some(Value::String(format)) => Ok(normalize_extension(format)),
            Some(Value::Null) | None => {
                // A trailing glob means the path already stands for any suffix
                if segments.last().is_some_and(Segment::is_catch_all) {
                    Ok(None)
                } else {
                    Ok(self.default_extension.clone())
                }
            }
            Some(other) => Err(HelperError::InvalidOption {
                key: FORMAT_KEY.to_string(),
                reason: format!("expected a string, got {}", other),
            }),
        }
    }

    /// Resolve `segments` under `version` into a path for the helper named `helper`
    ///
    /// Static text is emitted as-is, the version placeholder becomes
    /// `version`, dynamic segments are looked up in `options`, and globs
    /// emit nothing. The pieces are joined with `/`, then the extension and
    /// the query string from `params` are appended.
    ///
    /// # Errors
    ///
    /// - `MissingArgument` when a dynamic segment has no value (or a `null`/empty one)
    /// - `InvalidOption` when a value cannot be rendered (containers, non-string `format`)
    pub fn resolve(
        &self,
        helper: &str,
        segments: &[Segment],
        version: Option<&str>,
        options: &CallOptions,
    ) -> HelperResult<String> {
        let mut pieces: Vec<Cow<'_, str>> = Vec::with_capacity(segments.len());

        for segment in segments {
            match segment {
                Segment::Static(text) => pieces.push(Cow::Borrowed(text.as_str())),
                Segment::VersionPlaceholder => {
                    if let Some(version) = version {
                        pieces.push(Cow::Borrowed(version));
                    }
                }
                Segment::Dynamic(name) => {
                    let value = match options.get(name) {
                        Some(value) => segment_value(name, value)?,
                        None => None,
                    };
                    match value {
                        Some(value) => pieces.push(Cow::Owned(value)),
                        None => {
                            debug!(
                                helper = %helper,
                                segment = %name,
                                "Path helper called without required argument"
                            );
                            return Err(HelperError::MissingArgument {
                                helper: helper.to_string(),
                                segment: name.clone(),
                            });
                        }
                    }
                }
                Segment::CatchAll { .. } => {}
            }
        }

        let mut path = String::with_capacity(64);
        path.push('/');
        path.push_str(&pieces.join("/"));

        if let Some(extension) = self.extension(segments, options)? {
            path.push_str(&extension);
        }

        if let Some(query) = options.params_value().and_then(query_string) {
            path.push('?');
            path.push_str(&query);
        }

        Ok(path)
    }
}

/// Resolve with the default `.json` extension
///
/// # Errors
///
/// See [`PathResolver::resolve`].
pub fn resolve(
    segments: &[Segment],
    version: Option<&str>,
    options: &CallOptions,
) -> HelperResult<String> {
    PathResolver::default().resolve("<anonymous>", segments, version, options)
}
