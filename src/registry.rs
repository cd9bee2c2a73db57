//! Helper registry: binds every helper of a route table under its name.
//!
//! One name may stand for several routes. `GET /api/:version/cats` and
//! `GET /api/:version/cats/:id` both derive `api_v1_cats_path`; the registry
//! keeps both as overloads and picks one per call from the arguments the
//! caller supplies.

use std::collections::{BTreeSet, HashMap};
use tracing::{debug, info, warn};

use crate::config::{HelperConfig, OnDuplicate};
use crate::decorated::{DecoratedRoute, PathHelper};
use crate::error::{HelperError, HelperResult};
use crate::resolver::{segment_value, CallOptions};
use crate::route::RouteDescriptor;

#[derive(Debug, Clone)]
struct Installed {
    helper: PathHelper,
    /// Index into `routes` of the route this helper was compiled from
    owner: usize,
}

fn argument_set(helper: &PathHelper) -> BTreeSet<&str> {
    helper.arguments().collect()
}

/// `null` and empty values count as not supplied, as they do when resolving.
/// Unrenderable values count as supplied so the call reports them.
fn supplied(options: &CallOptions, arg: &str) -> bool {
    options
        .get(arg)
        .is_some_and(|value| !matches!(segment_value(arg, value), Ok(None)))
}

/// Overloads are ambiguous when neither call-time argument set can tell them apart
fn ambiguous(a: &PathHelper, b: &PathHelper) -> bool {
    !a.same_target(b) && argument_set(a) == argument_set(b)
}

/// Name → helper lookup for a whole route table
///
/// Helpers keep their install order. A helper that builds exactly the same
/// path as one already installed under its name (`GET /cats` and
/// `POST /cats`) is an alias and is skipped quietly. A helper that shares
/// name and argument set with an installed one but builds a different path is
/// a conflict, settled by the [`OnDuplicate`] policy.
#[derive(Debug, Clone, Default)]
pub struct HelperRegistry {
    installed: Vec<Installed>,
    /// Helper name → positions in `installed`, in install order
    index: HashMap<String, Vec<usize>>,
    /// Distinct names in first-install order
    names: Vec<String>,
    routes: Vec<DecoratedRoute>,
    on_duplicate: OnDuplicate,
}

impl HelperRegistry {
    #[must_use]
    pub fn new(on_duplicate: OnDuplicate) -> Self {
        Self {
            on_duplicate,
            ..Self::default()
        }
    }

    /// Decorate every descriptor and install its helpers
    ///
    /// # Errors
    ///
    /// `InvalidTemplate` for the first unparsable route, `DuplicateHelper`
    /// under the `reject` policy.
    pub fn from_descriptors<I>(descriptors: I, config: &HelperConfig) -> HelperResult<Self>
    where
        I: IntoIterator<Item = RouteDescriptor>,
    {
        let mut registry = Self::new(config.on_duplicate);
        for descriptor in descriptors {
            registry.install(DecoratedRoute::with_config(descriptor, config)?)?;
        }
        registry.log_summary();
        Ok(registry)
    }

    /// Install already decorated routes
    ///
    /// # Errors
    ///
    /// `DuplicateHelper` under the `reject` policy.
    pub fn from_routes<I>(routes: I, on_duplicate: OnDuplicate) -> HelperResult<Self>
    where
        I: IntoIterator<Item = DecoratedRoute>,
    {
        let mut registry = Self::new(on_duplicate);
        for route in routes {
            registry.install(route)?;
        }
        registry.log_summary();
        Ok(registry)
    }

    fn candidates<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Installed> + 'a {
        self.index
            .get(name)
            .into_iter()
            .flatten()
            .map(move |&i| &self.installed[i])
    }

    /// First helper of `route` that is ambiguous with an installed helper or a sibling
    fn first_conflict<'a>(&self, route: &'a DecoratedRoute) -> Option<&'a str> {
        let helpers = route.helpers();
        helpers.iter().enumerate().find_map(|(i, helper)| {
            let clashes_installed = self
                .candidates(helper.name())
                .any(|existing| ambiguous(&existing.helper, helper));
            let clashes_sibling = helpers[..i]
                .iter()
                .any(|earlier| earlier.name() == helper.name() && ambiguous(earlier, helper));
            (clashes_installed || clashes_sibling).then(|| helper.name())
        })
    }

    /// Bind every helper of `route` under its name
    ///
    /// Under `reject` a conflict leaves the registry unchanged: either all of
    /// the route's helpers are installed or none are.
    ///
    /// # Errors
    ///
    /// `DuplicateHelper` when a helper is ambiguous with one already
    /// installed and the policy is `reject`.
    pub fn install(&mut self, route: DecoratedRoute) -> HelperResult<()> {
        if self.on_duplicate == OnDuplicate::Reject {
            if let Some(name) = self.first_conflict(&route) {
                warn!(
                    helper = %name,
                    method = %route.method(),
                    path = %route.path_template(),
                    "Duplicate path helper rejected"
                );
                return Err(HelperError::DuplicateHelper {
                    name: name.to_string(),
                });
            }
        }

        let owner = self.routes.len();
        for helper in route.helpers() {
            let positions = self.index.get(helper.name()).cloned().unwrap_or_default();

            if positions
                .iter()
                .any(|&i| self.installed[i].helper.same_target(helper))
            {
                debug!(
                    helper = %helper.name(),
                    method = %route.method(),
                    "Path helper already installed for the same path"
                );
                continue;
            }

            let conflict = positions
                .iter()
                .copied()
                .find(|&i| ambiguous(&self.installed[i].helper, helper));

            match (conflict, self.on_duplicate) {
                (None, _) => {
                    if positions.is_empty() {
                        self.names.push(helper.name().to_string());
                    }
                    self.index
                        .entry(helper.name().to_string())
                        .or_default()
                        .push(self.installed.len());
                    self.installed.push(Installed {
                        helper: helper.clone(),
                        owner,
                    });
                }
                (Some(existing), OnDuplicate::Overwrite) => {
                    warn!(
                        helper = %helper.name(),
                        path = %route.path_template(),
                        "Duplicate path helper overwrites earlier route"
                    );
                    self.installed[existing] = Installed {
                        helper: helper.clone(),
                        owner,
                    };
                }
                // Reject conflicts were refused before anything was installed
                (Some(_), OnDuplicate::KeepFirst | OnDuplicate::Reject) => {
                    warn!(
                        helper = %helper.name(),
                        path = %route.path_template(),
                        "Duplicate path helper skipped, keeping first"
                    );
                }
            }
        }

        self.routes.push(route);
        Ok(())
    }

    fn log_summary(&self) {
        let helpers_summary: Vec<&str> = self.names.iter().take(10).map(String::as_str).collect();
        info!(
            routes_count = self.routes.len(),
            helpers_count = self.installed.len(),
            names_count = self.names.len(),
            on_duplicate = %self.on_duplicate,
            helpers_summary = ?helpers_summary,
            "Path helpers installed"
        );
    }

    /// First helper installed under `name`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PathHelper> {
        self.candidates(name).next().map(|entry| &entry.helper)
    }

    /// Every helper installed under `name`, in install order
    #[must_use]
    pub fn overloads(&self, name: &str) -> Vec<&PathHelper> {
        self.candidates(name).map(|entry| &entry.helper).collect()
    }

    /// Helper that `call(name, options)` would use
    ///
    /// Among the overloads whose required arguments are all present in
    /// `options`, the one requiring the most arguments wins (earliest
    /// installed on ties). When none is satisfied the first overload is
    /// returned, so the call reports what is missing.
    #[must_use]
    pub fn select(&self, name: &str, options: &CallOptions) -> Option<&PathHelper> {
        let mut best: Option<(&PathHelper, usize)> = None;
        for entry in self.candidates(name) {
            let helper = &entry.helper;
            if !helper.arguments().all(|arg| supplied(options, arg)) {
                continue;
            }
            let required = helper.arguments().count();
            if best.map_or(true, |(_, n)| required > n) {
                best = Some((helper, required));
            }
        }
        best.map(|(helper, _)| helper).or_else(|| self.get(name))
    }

    /// Resolve the helper named `name`
    ///
    /// # Errors
    ///
    /// `UnknownHelper` if nothing is installed under `name`, otherwise the
    /// selected helper's own error.
    pub fn call(&self, name: &str, options: &CallOptions) -> HelperResult<String> {
        self.select(name, options)
            .ok_or_else(|| HelperError::UnknownHelper {
                name: name.to_string(),
            })?
            .call(options)
    }

    /// Distinct helper names in first-install order
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.names.iter().map(String::as_str).collect()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All installed helpers in install order
    pub fn iter(&self) -> impl Iterator<Item = &PathHelper> {
        self.installed.iter().map(|entry| &entry.helper)
    }

    /// All installed helpers with the route each was compiled from
    pub fn entries(&self) -> impl Iterator<Item = (&PathHelper, &DecoratedRoute)> {
        self.installed
            .iter()
            .filter_map(|entry| Some((&entry.helper, self.routes.get(entry.owner)?)))
    }

    /// Every installed route, including ones whose helpers were all aliases
    #[must_use]
    pub fn routes(&self) -> &[DecoratedRoute] {
        &self.routes
    }

    /// Number of installed helpers, overloads counted separately
    #[must_use]
    pub fn len(&self) -> usize {
        self.installed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.installed.is_empty()
    }
}
