use http::Method;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Version tokens are runs of characters that are not list punctuation or whitespace
static VERSION_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[^\[",\]\s]+"#).expect("version token regex should be valid"));

#[derive(Deserialize)]
#[serde(untagged)]
enum RawVersions {
    One(String),
    Many(Vec<String>),
}

/// Ordered list of API versions a route is served under
///
/// Hosts report versions as a single string, a list, or a list rendered to a
/// string (`["alpha", "beta"]`). All of these normalize here, so the rest of
/// the crate only ever sees an ordered list. An empty list means the route is
/// unversioned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawVersions")]
pub struct ApiVersions(Vec<String>);

impl From<RawVersions> for ApiVersions {
    fn from(raw: RawVersions) -> Self {
        match raw {
            RawVersions::One(s) => ApiVersions::parse(&s),
            RawVersions::Many(list) => ApiVersions::new(list),
        }
    }
}

impl ApiVersions {
    /// Build from explicit version strings; blank entries are dropped
    pub fn new<I, S>(versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            versions
                .into_iter()
                .flat_map(|v| ApiVersions::parse(v.as_ref()).0)
                .collect(),
        )
    }

    #[must_use]
    pub fn unversioned() -> Self {
        Self(Vec::new())
    }

    /// Parse any host rendering: `v1`, `alpha, beta`, `["alpha", "beta", "v1"]`
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self(
            VERSION_TOKEN
                .find_iter(raw)
                .map(|m| m.as_str().to_string())
                .collect(),
        )
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// One slot per helper: each version in order, or a single `None` when unversioned
    #[must_use]
    pub fn slots(&self) -> Vec<Option<&str>> {
        if self.0.is_empty() {
            vec![None]
        } else {
            self.0.iter().map(|v| Some(v.as_str())).collect()
        }
    }
}

impl fmt::Display for ApiVersions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

/// One declared endpoint as reported by the host routing framework
///
/// Read-only input: decoration never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub method: Method,
    /// Full path template including any prefix, e.g. `/api/:version/cats/:id(.json)`
    pub path: String,
    /// Resource namespace the route was declared under, e.g. `/cats/:id`
    pub namespace: Option<String>,
    pub versions: ApiVersions,
    /// Explicit helper name (`as:` in the route declaration)
    pub custom_name: Option<String>,
}

impl RouteDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            namespace: None,
            versions: ApiVersions::unversioned(),
            custom_name: None,
        }
    }

    #[must_use]
    pub fn with_versions(mut self, versions: ApiVersions) -> Self {
        self.versions = versions;
        self
    }

    #[must_use]
    pub fn with_version(self, version: &str) -> Self {
        self.with_versions(ApiVersions::parse(version))
    }

    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    #[must_use]
    pub fn named(mut self, custom_name: impl Into<String>) -> Self {
        self.custom_name = Some(custom_name.into());
        self
    }
}
