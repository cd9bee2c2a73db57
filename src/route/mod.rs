//! Route descriptors: the input boundary.
//!
//! [`RouteDescriptor`] is the shape the host routing framework hands over.
//! [`load_routes`] reads a route table file into descriptors.

mod load;
mod types;

pub use load::{load_routes, routes_from_str, TableFormat};
pub use types::{ApiVersions, RouteDescriptor};
