//! # route-helpers
//!
//! **route-helpers** compiles an API's route table into named path-helper
//! functions. Each helper rebuilds a concrete URL path from a route's
//! template, so clients and tests never hand-assemble URLs.
//!
//! ## Overview
//!
//! A route such as `GET /api/:version/cats/:id(.json)` declared for version
//! `v1` yields the helper `api_v1_cats_path`, which, called with `id: 1`,
//! returns `/api/v1/cats/1.json`.
//!
//! The library is organized into these modules:
//!
//! - **[`segment`]** - Parses path templates into typed segments
//! - **[`route`]** - Route descriptors, API versions and route table loading
//! - **[`naming`]** - Derives helper names from a route
//! - **[`sanitize`]** - Turns arbitrary text into identifier-safe names
//! - **[`resolver`]** - Builds paths from segments and call options
//! - **[`decorated`]** - Compiles one route into callable helpers
//! - **[`registry`]** - Installs the helpers of a whole route table by name
//! - **[`config`]** - Environment-driven settings
//! - **[`logging`]** - `tracing` subscriber setup for the binary
//! - **[`cli`]** - The `route-helpers` command line
//!
//! ## Quick Start
//!
//! ```
//! use http::Method;
//! use route_helpers::{CallOptions, HelperConfig, HelperRegistry, RouteDescriptor};
//!
//! let routes = vec![
//!     RouteDescriptor::new(Method::GET, "/api/:version/cats(.json)").with_version("v1"),
//!     RouteDescriptor::new(Method::GET, "/api/:version/cats/:id(.json)").with_version("v1"),
//! ];
//! let registry = HelperRegistry::from_descriptors(routes, &HelperConfig::default()).unwrap();
//!
//! assert_eq!(
//!     registry.call("api_v1_cats_path", &CallOptions::new()).unwrap(),
//!     "/api/v1/cats.json"
//! );
//! assert_eq!(
//!     registry.call("api_v1_cats_path", &CallOptions::new().with("id", 1)).unwrap(),
//!     "/api/v1/cats/1.json"
//! );
//! ```
//!
//! ## Concurrency
//!
//! Decoration and installation happen once, up front. Decorated routes,
//! helpers and registries are immutable afterwards and `Send + Sync`; calling
//! a helper performs no shared mutation.

pub mod cli;
pub mod config;
pub mod decorated;
pub mod error;
pub mod logging;
pub mod naming;
pub mod registry;
pub mod resolver;
pub mod route;
pub mod sanitize;
pub mod segment;

pub use config::{HelperConfig, OnDuplicate};
pub use decorated::{DecoratedRoute, HelperFn, PathHelper};
pub use error::{HelperError, HelperResult};
pub use registry::HelperRegistry;
pub use resolver::{CallOptions, PathResolver};
pub use route::{load_routes, ApiVersions, RouteDescriptor};
pub use sanitize::sanitize;
pub use segment::{parse_template, Segment, SegmentList};
