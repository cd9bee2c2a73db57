//! Path template parsing.
//!
//! Host frameworks render the same route in several spellings
//! (`/api/:version/cats(.json)`, `/api/:version/cats(.:format)`,
//! `/api/{version}/cats`). All of them decompose into the same
//! [`SegmentList`]; the format is applied later by the resolver, which only
//! takes its default extension from the [`TemplateFormat`] the suffix declared.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{Segment, SegmentList};
use crate::error::{HelperError, HelperResult};
use crate::sanitize::is_identifier;

/// Parameter name that marks the API version position
pub const VERSION_PARAM: &str = "version";

/// Sigil for `:name` style dynamic segments
pub const DYNAMIC_SIGIL: char = ':';

/// Glob marker for catch-all segments
pub const GLOB_MARKER: char = '*';

/// Trailing format group: `(.:format)`, `(/.:format)`, `(.json)`, `.:format`, `.{format}`
static FORMAT_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:\(/?\.(?::format|\{format\}|(?P<fixed>[A-Za-z0-9_]+))\)|/?\.(?::format|\{format\}))$",
    )
    .expect("format suffix regex should be valid")
});

/// Format a template declares through its trailing suffix
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TemplateFormat {
    /// No suffix: the configured default extension applies
    #[default]
    Unspecified,
    /// `(.json)`: the route serves exactly this extension
    Fixed(String),
    /// `(.:format)`: any format, so no extension unless the caller picks one
    Open,
}

/// Read the format a template's trailing suffix declares
#[must_use]
pub fn template_format(template: &str) -> TemplateFormat {
    match FORMAT_SUFFIX.captures(template) {
        Some(caps) => match caps.name("fixed") {
            Some(ext) => TemplateFormat::Fixed(ext.as_str().to_string()),
            None => TemplateFormat::Open,
        },
        None => TemplateFormat::Unspecified,
    }
}

fn invalid(template: &str, reason: impl Into<String>) -> HelperError {
    HelperError::InvalidTemplate {
        template: template.to_string(),
        reason: reason.into(),
    }
}

/// Reject unbalanced `(`/`)` and unterminated or nested `{`/`}`
fn check_delimiters(template: &str) -> HelperResult<()> {
    let mut open_groups = 0usize;
    let mut in_brace = false;

    for c in template.chars() {
        match c {
            '(' => open_groups += 1,
            ')' => {
                if open_groups == 0 {
                    return Err(invalid(template, "unmatched ')'"));
                }
                open_groups -= 1;
            }
            '{' if in_brace => return Err(invalid(template, "nested '{'")),
            '{' => in_brace = true,
            '}' if !in_brace => return Err(invalid(template, "unmatched '}'")),
            '}' => in_brace = false,
            '/' if in_brace => return Err(invalid(template, "unterminated '{'")),
            _ => {}
        }
    }

    if in_brace {
        return Err(invalid(template, "unterminated '{'"));
    }
    if open_groups > 0 {
        return Err(invalid(template, "unterminated '('"));
    }
    Ok(())
}

/// Remove a trailing format placeholder, leaving the rest untouched
#[must_use]
pub fn strip_format_suffix(template: &str) -> &str {
    match FORMAT_SUFFIX.find(template) {
        Some(m) => &template[..m.start()],
        None => template,
    }
}

fn named_segment(template: &str, name: &str) -> HelperResult<Segment> {
    if name.is_empty() {
        return Err(invalid(template, "empty parameter name"));
    }
    if !is_identifier(name) {
        return Err(invalid(
            template,
            format!("parameter name '{}' is not an identifier", name),
        ));
    }
    if name == VERSION_PARAM {
        Ok(Segment::VersionPlaceholder)
    } else {
        Ok(Segment::Dynamic(name.to_string()))
    }
}

fn classify_component(template: &str, component: &str) -> HelperResult<Segment> {
    if let Some(pos) = component.find(GLOB_MARKER) {
        let name = &component[pos + GLOB_MARKER.len_utf8()..];
        return Ok(Segment::CatchAll {
            name: (!name.is_empty()).then(|| name.to_string()),
        });
    }

    if let Some(name) = component.strip_prefix(DYNAMIC_SIGIL) {
        return named_segment(template, name);
    }

    if let Some(name) = component
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
    {
        return named_segment(template, name);
    }

    if component.contains(['{', '}']) {
        return Err(invalid(
            template,
            format!("parameter embedded in '{}' is not supported", component),
        ));
    }

    Ok(Segment::Static(component.to_string()))
}

/// Classify a single raw token (`api`, `:id`, `{version}`, `*path`)
///
/// # Errors
///
/// `InvalidTemplate` when the token carries a malformed parameter marker.
pub fn classify_segment(token: &str) -> HelperResult<Segment> {
    classify_component(token, token)
}

/// Parse a path template into its ordered segments
///
/// Empty components (leading, trailing or doubled `/`) are skipped, so `/`
/// and the empty string both yield an empty list (the root path). Optional
/// groups other than the trailing format are flattened: `/cats(/:id)` parses
/// like `/cats/:id`.
///
/// # Errors
///
/// `InvalidTemplate` for unbalanced groups, unterminated `{`, or parameter
/// markers without a valid identifier.
///
/// # Example
///
/// ```
/// use route_helpers::segment::{parse_template, Segment};
///
/// let segments = parse_template("/api/:version/cats/:id(.:format)").unwrap();
/// assert_eq!(segments.as_slice(), &[
///     Segment::Static("api".into()),
///     Segment::VersionPlaceholder,
///     Segment::Static("cats".into()),
///     Segment::Dynamic("id".into()),
/// ]);
/// ```
pub fn parse_template(template: &str) -> HelperResult<SegmentList> {
    check_delimiters(template)?;

    let flattened: String = strip_format_suffix(template)
        .chars()
        .filter(|c| *c != '(' && *c != ')')
        .collect();

    flattened
        .split('/')
        .filter(|component| !component.is_empty())
        .map(|component| classify_component(template, component))
        .collect()
}
