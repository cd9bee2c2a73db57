use super::types::{ApiVersions, RouteDescriptor};
use anyhow::{anyhow, bail, Context};
use http::Method;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Verbs a route table may declare. `ANY` matches every verb on the host side.
const METHODS: [&str; 9] = [
    "GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS", "HEAD", "TRACE", "ANY",
];

/// Serialization of a route table file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Yaml,
    Json,
}

impl TableFormat {
    /// `.yaml`/`.yml` are YAML, everything else is JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => TableFormat::Yaml,
            _ => TableFormat::Json,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RouteTable {
    #[serde(default)]
    prefix: Option<String>,
    #[serde(default, alias = "version")]
    versions: Option<ApiVersions>,
    routes: Vec<RouteEntry>,
}

#[derive(Debug, Deserialize)]
struct RouteEntry {
    method: String,
    path: String,
    #[serde(default)]
    namespace: Option<String>,
    #[serde(default, alias = "version")]
    versions: Option<ApiVersions>,
    #[serde(default, rename = "as")]
    custom_name: Option<String>,
}

fn parse_method(raw: &str) -> anyhow::Result<Method> {
    let upper = raw.to_ascii_uppercase();
    if !METHODS.contains(&upper.as_str()) {
        bail!("unsupported HTTP verb '{}'", raw);
    }
    Method::from_bytes(upper.as_bytes()).map_err(|e| anyhow!("invalid HTTP verb '{}': {}", raw, e))
}

/// Join a table prefix and a route path with exactly one `/` between them
fn join_prefix(prefix: Option<&str>, path: &str) -> String {
    match prefix {
        Some(prefix) if !prefix.trim_matches('/').is_empty() => {
            let clean_prefix = prefix.trim_end_matches('/');
            let clean_path = path.trim_start_matches('/');
            if clean_path.is_empty() {
                clean_prefix.to_string()
            } else {
                format!("{}/{}", clean_prefix, clean_path)
            }
        }
        _ => path.to_string(),
    }
}

fn into_descriptors(table: RouteTable) -> anyhow::Result<Vec<RouteDescriptor>> {
    let default_versions = table.versions.unwrap_or_default();

    table
        .routes
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let method = parse_method(&entry.method)
                .with_context(|| format!("route #{} ({})", index, entry.path))?;
            let descriptor = RouteDescriptor {
                method,
                path: join_prefix(table.prefix.as_deref(), &entry.path),
                namespace: entry.namespace,
                versions: entry
                    .versions
                    .unwrap_or_else(|| default_versions.clone()),
                custom_name: entry.custom_name,
            };
            debug!(
                method = %descriptor.method,
                path = %descriptor.path,
                versions = %descriptor.versions,
                "Route descriptor loaded"
            );
            Ok(descriptor)
        })
        .collect()
}

/// Parse a route table held in memory
pub fn routes_from_str(content: &str, format: TableFormat) -> anyhow::Result<Vec<RouteDescriptor>> {
    let table: RouteTable = match format {
        TableFormat::Yaml => serde_yaml::from_str(content).context("failed to parse YAML route table")?,
        TableFormat::Json => serde_json::from_str(content).context("failed to parse JSON route table")?,
    };
    into_descriptors(table)
}

/// Load a route table from a YAML or JSON file
///
/// The document lists routes with their verb, path template, optional
/// namespace, versions and custom helper name. A top-level `prefix` is joined
/// in front of every path and top-level `versions` apply to routes that do
/// not declare their own.
///
/// ```yaml
/// prefix: /api/:version
/// versions: v1
/// routes:
///   - { method: GET, path: /cats, namespace: /cats }
///   - { method: GET, path: "/cats/:id", namespace: "/cats/:id" }
///   - { method: GET, path: /custom_name, as: my_custom_route_name }
/// ```
pub fn load_routes(path: impl AsRef<Path>) -> anyhow::Result<Vec<RouteDescriptor>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read route table {}", path.display()))?;
    let routes = routes_from_str(&content, TableFormat::from_path(path))
        .with_context(|| format!("invalid route table {}", path.display()))?;

    info!(
        file = %path.display(),
        routes_count = routes.len(),
        "Route table loaded"
    );
    Ok(routes)
}
