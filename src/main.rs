//! deplint CLI entry point

use std::fs;
use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use deplint::analyzer;
use deplint::config::Cli;
use deplint::environment::PipEnvironment;
use deplint::model::{AdviceList, InstalledPackages, ReleaseIndex};
use deplint::parser::{Parser as _, RequirementsTxtParser};
use deplint::registry::{PypiRegistry, fetch_release_index};
use deplint::report::render_advice_list;

/// Initialize the tracing subscriber for logging.
///
/// `-v` raises the filter to debug; otherwise `RUST_LOG` applies, with
/// warnings as the default. Logs go to stderr so the report on stdout
/// stays clean.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("deplint=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("deplint=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(advice_list) => {
            let mut stdout = io::stdout().lock();
            if let Err(err) = render_advice_list(&mut stdout, &advice_list, cli.verbose) {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<AdviceList> {
    let content = fs::read_to_string(&cli.requirements)
        .with_context(|| format!("Failed to read {}", cli.requirements.display()))?;
    let requirements = RequirementsTxtParser::new().parse(&content)?;

    let installed = if cli.action.needs_environment() {
        PipEnvironment::new(&cli.python).installed_packages()?
    } else {
        InstalledPackages::default()
    };

    let releases = if cli.action.needs_release_index() {
        let registry = PypiRegistry::new(cli.index_url.clone());
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(fetch_release_index(&registry, &requirements))?
    } else {
        ReleaseIndex::default()
    };

    Ok(analyzer::analyze(
        cli.action,
        &requirements,
        &installed,
        &releases,
    )?)
}
