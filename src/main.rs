use route_helpers::logging::{init_logging, LogConfig};

fn main() {
    if let Err(err) = init_logging(&LogConfig::from_env()) {
        eprintln!("warning: {err:#}");
    }

    if let Err(err) = route_helpers::cli::run_cli() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
