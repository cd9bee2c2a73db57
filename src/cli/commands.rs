use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::HelperConfig;
use crate::registry::HelperRegistry;
use crate::resolver::CallOptions;
use crate::route::load_routes;

/// Command-line interface for route-helpers
///
/// Compiles a route table file and lists or calls the resulting path helpers.
#[derive(Parser, Debug)]
#[command(name = "route-helpers")]
#[command(about = "Build URL paths from a route table", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every helper a route table produces
    List {
        /// Path to the route table (YAML or JSON)
        #[arg(short, long)]
        routes: PathBuf,

        /// Print a JSON array instead of one line per helper
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Build the path for one helper
    Resolve {
        /// Path to the route table (YAML or JSON)
        #[arg(short, long)]
        routes: PathBuf,

        /// Helper name, e.g. api_v1_cats_path
        #[arg(long)]
        helper: String,

        /// Dynamic segment value as key=value (repeatable)
        #[arg(short, long = "arg", value_parser = parse_pair)]
        args: Vec<(String, String)>,

        /// Extension override (`xml` or `.xml`)
        #[arg(short, long)]
        format: Option<String>,

        /// Query parameter as key=value (repeatable, kept in order)
        #[arg(short, long = "param", value_parser = parse_pair)]
        params: Vec<(String, String)>,

        /// Raw query string appended as-is (conflicts with --param)
        #[arg(long, conflicts_with = "params")]
        params_raw: Option<String>,
    },
}

/// Split `key=value` at the first `=`
fn parse_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{}'", raw)),
    }
}

#[derive(Serialize)]
struct HelperListing<'a> {
    name: &'a str,
    method: &'a str,
    path: &'a str,
    version: Option<&'a str>,
    arguments: Vec<&'a str>,
}

fn load_registry(routes: &Path, config: &HelperConfig) -> anyhow::Result<HelperRegistry> {
    let descriptors = load_routes(routes)?;
    HelperRegistry::from_descriptors(descriptors, config)
        .with_context(|| format!("failed to compile helpers from {}", routes.display()))
}

/// Execute a parsed command, writing results to `out`
///
/// # Errors
///
/// Fails when the route table cannot be loaded or compiled, or when the
/// requested helper cannot be resolved.
pub fn run<W: Write>(cli: &Cli, config: &HelperConfig, out: &mut W) -> anyhow::Result<()> {
    match &cli.command {
        Commands::List { routes, json } => {
            let registry = load_registry(routes, config)?;

            let mut listings = Vec::with_capacity(registry.len());
            for (helper, route) in registry.entries() {
                listings.push(HelperListing {
                    name: helper.name(),
                    method: route.method().as_str(),
                    path: route.path_template(),
                    version: helper.version(),
                    arguments: helper.arguments().collect(),
                });
            }

            if *json {
                serde_json::to_writer_pretty(&mut *out, &listings)?;
                writeln!(out)?;
            } else {
                for listing in &listings {
                    writeln!(
                        out,
                        "{} {} {} args=[{}]",
                        listing.name,
                        listing.method,
                        listing.path,
                        listing.arguments.join(", ")
                    )?;
                }
            }
            Ok(())
        }
        Commands::Resolve {
            routes,
            helper,
            args,
            format,
            params,
            params_raw,
        } => {
            let registry = load_registry(routes, config)?;

            let mut options: CallOptions = args.iter().map(|(k, v)| (k, v.as_str())).collect();
            if let Some(format) = format {
                options = options.format(format.clone());
            }
            if !params.is_empty() {
                let map: Map<String, Value> = params
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                    .collect();
                options = options.params(Value::Object(map));
            } else if let Some(raw) = params_raw {
                options = options.params(raw.clone());
            }

            if !registry.contains(helper) {
                bail!(
                    "no path helper named '{}' (available: {})",
                    helper,
                    registry.names().join(", ")
                );
            }
            let path = registry.call(helper, &options)?;
            writeln!(out, "{}", path)?;
            Ok(())
        }
    }
}

/// Parse process arguments and run against stdout
///
/// # Errors
///
/// See [`run`].
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = HelperConfig::from_env();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&cli, &config, &mut out)
}
