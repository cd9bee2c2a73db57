//! # Decorated Routes
//!
//! [`DecoratedRoute`] wraps one [`RouteDescriptor`] and compiles it into
//! callable path helpers: one [`PathHelper`] per derived helper name, each
//! bound to the version that name stands for.
//!
//! Decoration parses the template and derives names once. Afterwards the
//! route is immutable and its helpers can be called from any thread.
//!
//! ## Example
//!
//! ```
//! use http::Method;
//! use route_helpers::decorated::DecoratedRoute;
//! use route_helpers::resolver::CallOptions;
//! use route_helpers::route::RouteDescriptor;
//!
//! let route = DecoratedRoute::new(
//!     RouteDescriptor::new(Method::GET, "/api/:version/cats/:id(.json)").with_version("v1"),
//! )
//! .unwrap();
//!
//! assert_eq!(route.helper_names(), ["api_v1_cats_path"]);
//! assert_eq!(route.helper_arguments(), ["id"]);
//! assert_eq!(
//!     route.call("api_v1_cats_path", &CallOptions::new().with("id", 1)).unwrap(),
//!     "/api/v1/cats/1.json"
//! );
//! ```

use http::Method;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::config::HelperConfig;
use crate::error::{HelperError, HelperResult};
use crate::naming::{derive_helper_names, name_words};
use crate::resolver::{CallOptions, PathResolver};
use crate::route::RouteDescriptor;
use crate::segment::{
    classify_segment, dynamic_names, parse_template, template_format, Segment, SegmentList,
    TemplateFormat,
};

/// Shareable closure form of a helper
pub type HelperFn = Arc<dyn Fn(&CallOptions) -> HelperResult<String> + Send + Sync>;

/// A named path-building callable bound to one version of a route
#[derive(Clone)]
pub struct PathHelper {
    name: Arc<str>,
    version: Option<Arc<str>>,
    segments: Arc<SegmentList>,
    resolver: Arc<PathResolver>,
}

impl PathHelper {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Version this helper substitutes for the version placeholder
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Dynamic segment names this helper requires, in template order
    pub fn arguments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(Segment::dynamic_name)
    }

    /// Build the path for `options`
    ///
    /// # Errors
    ///
    /// `MissingArgument` when a dynamic segment has no value, `InvalidOption`
    /// when a value cannot be rendered.
    pub fn call(&self, options: &CallOptions) -> HelperResult<String> {
        self.resolver
            .resolve(&self.name, &self.segments, self.version(), options)
    }

    /// Build the path with no options at all
    ///
    /// # Errors
    ///
    /// `MissingArgument` if the route has dynamic segments.
    pub fn path(&self) -> HelperResult<String> {
        self.call(&CallOptions::new())
    }

    /// True if both helpers build the same path for every set of options
    #[must_use]
    pub fn same_target(&self, other: &PathHelper) -> bool {
        let version_matters = self.segments.contains(&Segment::VersionPlaceholder);
        self.segments == other.segments
            && self.resolver == other.resolver
            && (!version_matters || self.version == other.version)
    }

    /// Detach the helper into a plain closure for installation elsewhere
    #[must_use]
    pub fn to_fn(&self) -> HelperFn {
        let helper = self.clone();
        Arc::new(move |options: &CallOptions| helper.call(options))
    }
}

impl fmt::Debug for PathHelper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathHelper")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("segments", &self.segments)
            .finish()
    }
}

/// One route compiled into its path helpers
#[derive(Debug, Clone)]
pub struct DecoratedRoute {
    descriptor: RouteDescriptor,
    segments: Arc<SegmentList>,
    helper_names: Vec<String>,
    helper_arguments: Vec<String>,
    helpers: Vec<PathHelper>,
}

impl DecoratedRoute {
    /// Decorate with the default configuration
    ///
    /// # Errors
    ///
    /// `InvalidTemplate` when the route's path template cannot be parsed.
    pub fn new(descriptor: RouteDescriptor) -> HelperResult<Self> {
        Self::with_config(descriptor, &HelperConfig::default())
    }

    /// Decorate using `config` for the default extension and name suffix
    ///
    /// A template's own format suffix takes precedence over the configured
    /// default: `(.json)` fixes the extension, `(.:format)` leaves it to the
    /// caller.
    ///
    /// # Errors
    ///
    /// `InvalidTemplate` when the route's path template cannot be parsed.
    pub fn with_config(descriptor: RouteDescriptor, config: &HelperConfig) -> HelperResult<Self> {
        let segments = Arc::new(parse_template(&descriptor.path)?);
        let resolver = Arc::new(match template_format(&descriptor.path) {
            TemplateFormat::Unspecified => PathResolver::new(&config.default_format),
            TemplateFormat::Fixed(extension) => PathResolver::new(&extension),
            TemplateFormat::Open => PathResolver::new(""),
        });

        let helpers: Vec<PathHelper> = derive_helper_names(&segments, &descriptor, &config.suffix)
            .into_iter()
            .map(|helper| PathHelper {
                name: Arc::from(helper.name),
                version: helper.version.map(Arc::from),
                segments: Arc::clone(&segments),
                resolver: Arc::clone(&resolver),
            })
            .collect();

        let helper_names: Vec<String> = helpers.iter().map(|h| h.name().to_string()).collect();
        let helper_arguments = dynamic_names(&segments);

        debug!(
            method = %descriptor.method,
            path = %descriptor.path,
            helper_names = ?helper_names,
            helper_arguments = ?helper_arguments,
            "Route decorated"
        );

        Ok(Self {
            descriptor,
            segments,
            helper_names,
            helper_arguments,
            helpers,
        })
    }

    #[must_use]
    pub fn descriptor(&self) -> &RouteDescriptor {
        &self.descriptor
    }

    #[must_use]
    pub fn method(&self) -> &Method {
        &self.descriptor.method
    }

    /// The raw path template as the host reported it
    #[must_use]
    pub fn path_template(&self) -> &str {
        &self.descriptor.path
    }

    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.descriptor.namespace.as_deref()
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Helper names in version order (exactly one for custom-named routes)
    #[must_use]
    pub fn helper_names(&self) -> &[String] {
        &self.helper_names
    }

    /// The first helper name
    #[must_use]
    pub fn path_helper_name(&self) -> &str {
        self.helper_names.first().map_or("", String::as_str)
    }

    /// Dynamic segment names a caller must supply, in template order
    #[must_use]
    pub fn helper_arguments(&self) -> &[String] {
        &self.helper_arguments
    }

    #[must_use]
    pub fn helpers(&self) -> &[PathHelper] {
        &self.helpers
    }

    #[must_use]
    pub fn helper(&self, name: &str) -> Option<&PathHelper> {
        self.helpers.iter().find(|h| h.name() == name)
    }

    /// Call the helper named `name`
    ///
    /// # Errors
    ///
    /// `UnknownHelper` if this route has no such helper, otherwise whatever
    /// [`PathHelper::call`] returns.
    pub fn call(&self, name: &str, options: &CallOptions) -> HelperResult<String> {
        self.helper(name)
            .ok_or_else(|| HelperError::UnknownHelper {
                name: name.to_string(),
            })?
            .call(options)
    }

    fn default_version(&self) -> Option<&str> {
        self.descriptor.versions.first()
    }

    /// Value of a single raw template token
    ///
    /// The version token yields the route's (first) version, a dynamic token
    /// yields the matching option when one is supplied, and anything else is
    /// returned as the literal token.
    #[must_use]
    pub fn segment_to_value(&self, token: &str, options: Option<&CallOptions>) -> Value {
        let literal = || Value::String(token.to_string());
        let lookup = |name: &str| {
            options
                .and_then(|o| o.get(name))
                .filter(|v| !v.is_null())
                .cloned()
        };

        match classify_segment(token) {
            Ok(Segment::VersionPlaceholder) => self
                .default_version()
                .map(|v| Value::String(v.to_string()))
                .or_else(|| lookup(crate::segment::VERSION_PARAM))
                .unwrap_or_else(literal),
            Ok(Segment::Dynamic(name)) => lookup(&name).unwrap_or_else(literal),
            _ => literal(),
        }
    }

    /// Template segments with values filled in, blanks dropped
    ///
    /// Uses the route's first version. Dynamic segments without a value are
    /// left out rather than failing, which makes this useful for inspection.
    #[must_use]
    pub fn path_segments_with_values(&self, options: &CallOptions) -> Vec<Value> {
        let version = self.default_version();
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Dynamic(name) => options.get(name).filter(|v| !v.is_null()).cloned(),
                other => name_words(std::slice::from_ref(other), version)
                    .first()
                    .map(|word| Value::String((*word).to_string())),
            })
            .filter(|v| v.as_str() != Some(""))
            .collect()
    }
}
