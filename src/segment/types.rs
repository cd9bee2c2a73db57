use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

/// Most route templates have <= 8 components (`/api/:version/users/:id/posts/:post_id`).
pub const MAX_INLINE_SEGMENTS: usize = 8;

/// Ordered segment sequence of one template, in source order.
pub type SegmentList = SmallVec<[Segment; MAX_INLINE_SEGMENTS]>;

/// One component of a parsed path template
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Segment {
    /// Literal path component, emitted verbatim
    Static(String),
    /// Named parameter (`:id` / `{id}`) filled from call options
    Dynamic(String),
    /// Glob (`*path`); matches any suffix and never appears in a built path
    CatchAll {
        /// Name following the glob marker, if any
        name: Option<String>,
    },
    /// Position of the API version (`:version`), filled from the helper's version
    VersionPlaceholder,
}

impl Segment {
    /// Name of a dynamic parameter, `None` for every other kind
    #[must_use]
    pub fn dynamic_name(&self) -> Option<&str> {
        match self {
            Segment::Dynamic(name) => Some(name.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_catch_all(&self) -> bool {
        matches!(self, Segment::CatchAll { .. })
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Static(text) => write!(f, "{}", text),
            Segment::Dynamic(name) => write!(f, ":{}", name),
            Segment::CatchAll { name: Some(name) } => write!(f, "*{}", name),
            Segment::CatchAll { name: None } => write!(f, "*"),
            Segment::VersionPlaceholder => write!(f, ":version"),
        }
    }
}

/// Names of all `Dynamic` segments in template order
///
/// Version placeholders and globs are excluded: neither is caller-supplied.
#[must_use]
pub fn dynamic_names(segments: &[Segment]) -> Vec<String> {
    segments
        .iter()
        .filter_map(Segment::dynamic_name)
        .map(str::to_string)
        .collect()
}
