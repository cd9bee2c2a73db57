//! # CLI Module
//!
//! Command-line access to the helpers of a route table.
//!
//! ## Commands
//!
//! ### `list`
//!
//! Print every helper with its verb, template and required arguments:
//!
//! ```bash
//! route-helpers list --routes routes.yaml
//! route-helpers list --routes routes.yaml --json
//! ```
//!
//! ### `resolve`
//!
//! Build one path:
//!
//! ```bash
//! route-helpers resolve --routes routes.yaml --helper api_v1_cats_path \
//!     --arg id=1 --format xml --param page=2
//! # /api/v1/cats/1.xml?page=2
//! ```
//!
//! Helper configuration comes from the environment (see
//! [`crate::config`]); logs go to stderr.

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{run, run_cli, Cli, Commands};
