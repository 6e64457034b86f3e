//! Entry point for the portfolio viewer.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load user configuration from `conf/config.toml`.
//! - Load the page content via `site`.
//! - Launch the GUI application with the loaded content and config.

mod app;
mod carousel;
mod config;
mod contact;
mod debounce;
mod page;
mod site;

use crate::app::run_app;
use crate::config::{load_config, serialize_config};
use crate::site::load_site_content;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const CONFIG_PATH: &str = "conf/config.toml";
const DEFAULT_SITE_PATH: &str = "conf/site.toml";

#[derive(Debug, PartialEq)]
struct CliArgs {
    site_path: PathBuf,
    print_config: bool,
}

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let args = parse_args(env::args().skip(1))?;
    let config = load_config(Path::new(CONFIG_PATH));
    set_log_level(reload_handle, config.log_level.as_filter_str());

    if args.print_config {
        print!("{}", serialize_config(&config)?);
        return Ok(());
    }

    if !args.site_path.exists() {
        return Err(anyhow!(
            "File not found: {}",
            args.site_path.as_path().display()
        ));
    }
    info!(
        path = %args.site_path.display(),
        level = %config.log_level,
        "Starting portfolio viewer"
    );
    info!(
        endpoint = %config.contact_endpoint,
        small = config.small_breakpoint,
        medium = config.medium_breakpoint,
        "Active page configuration"
    );
    let site = load_site_content(&args.site_path)?;
    run_app(site, config).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs> {
    let mut site_path = None;
    let mut print_config = false;
    for arg in args {
        match arg.as_str() {
            "--print-config" => print_config = true,
            flag if flag.starts_with("--") => {
                return Err(anyhow!(
                    "Unknown flag {flag}\nUsage: portfolio-viewer [--print-config] [path-to-site.toml]"
                ));
            }
            _ if site_path.is_some() => {
                return Err(anyhow!(
                    "Usage: portfolio-viewer [--print-config] [path-to-site.toml]"
                ));
            }
            _ => site_path = Some(PathBuf::from(arg)),
        }
    }
    Ok(CliArgs {
        site_path: site_path.unwrap_or_else(|| PathBuf::from(DEFAULT_SITE_PATH)),
        print_config,
    })
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn site_path_defaults_to_conf() {
        let parsed = parse_args(args(&[])).expect("parses");
        assert_eq!(parsed.site_path, PathBuf::from("conf/site.toml"));
        assert!(!parsed.print_config);
    }

    #[test]
    fn flag_and_path_in_any_order() {
        let parsed = parse_args(args(&["--print-config", "me.toml"])).expect("parses");
        assert_eq!(
            parsed,
            CliArgs {
                site_path: PathBuf::from("me.toml"),
                print_config: true,
            }
        );
    }

    #[test]
    fn unknown_flags_and_extra_paths_are_rejected() {
        assert!(parse_args(args(&["--verbose"])).is_err());
        assert!(parse_args(args(&["a.toml", "b.toml"])).is_err());
    }
}
