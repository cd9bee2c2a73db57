//! Helper name derivation.
//!
//! A route yields one helper name per API version it is served under, built
//! from the words of its path with the version substituted in:
//! `/api/:version/cats/:id` under `v1` becomes `api_v1_cats_path`. A declared
//! custom name replaces all of them with a single `<custom>_path`.

use crate::error::HelperResult;
use crate::route::RouteDescriptor;
use crate::sanitize::sanitize;
use crate::segment::{parse_template, Segment};

/// Base name used when a path has no words at all
pub const ROOT_NAME: &str = "root";

/// Suffix appended to every helper name
pub const DEFAULT_SUFFIX: &str = "_path";

/// A derived helper name together with the version it resolves under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperName {
    pub name: String,
    pub version: Option<String>,
}

/// Words of a path as they read under `version`
///
/// Static text is kept, the version placeholder becomes `version` (or nothing
/// when unversioned), a glob contributes its name without the marker, and
/// dynamic parameters contribute nothing.
#[must_use]
pub fn name_words<'a>(segments: &'a [Segment], version: Option<&'a str>) -> Vec<&'a str> {
    segments
        .iter()
        .filter_map(|segment| match segment {
            Segment::Static(text) => Some(text.as_str()),
            Segment::VersionPlaceholder => version,
            Segment::CatchAll { name } => name.as_deref(),
            Segment::Dynamic(_) => None,
        })
        .filter(|word| !word.is_empty())
        .collect()
}

/// Helper name for one version of a route without a custom name
#[must_use]
pub fn versioned_name(segments: &[Segment], version: Option<&str>, suffix: &str) -> String {
    let words = name_words(segments, version);
    let base = if words.is_empty() {
        ROOT_NAME.to_string()
    } else {
        words.join("_")
    };
    format!("{}{}", sanitize(&base), suffix)
}

/// Helper name for a route declared with a custom name
#[must_use]
pub fn custom_helper_name(custom_name: &str, suffix: &str) -> String {
    format!("{}{}", sanitize(custom_name), suffix)
}

/// All helper names for a parsed route, in version order
///
/// A custom name produces exactly one entry, bound to the route's first
/// version. Otherwise there is one entry per version (one in total for an
/// unversioned route). Names are not deduplicated here.
#[must_use]
pub fn derive_helper_names(
    segments: &[Segment],
    descriptor: &RouteDescriptor,
    suffix: &str,
) -> Vec<HelperName> {
    if let Some(custom) = descriptor.custom_name.as_deref() {
        return vec![HelperName {
            name: custom_helper_name(custom, suffix),
            version: descriptor.versions.first().map(str::to_string),
        }];
    }

    descriptor
        .versions
        .slots()
        .into_iter()
        .map(|version| HelperName {
            name: versioned_name(segments, version, suffix),
            version: version.map(str::to_string),
        })
        .collect()
}

/// Parse the descriptor's template and derive its helper names with the default suffix
///
/// # Errors
///
/// `InvalidTemplate` when the path template cannot be parsed.
pub fn derive_names(descriptor: &RouteDescriptor) -> HelperResult<Vec<String>> {
    let segments = parse_template(&descriptor.path)?;
    Ok(derive_helper_names(&segments, descriptor, DEFAULT_SUFFIX)
        .into_iter()
        .map(|h| h.name)
        .collect())
}
