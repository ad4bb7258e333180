use clap::Parser;
use gradebook::api::GradebookApi;
use gradebook::config::GradebookConfig;
use gradebook::error::Result;
use gradebook::session::Session;
use gradebook::store::memory::InMemoryStore;
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = GradebookConfig::load(cli.config.as_deref())?.with_overrides(
        cli.on_unknown_command,
        cli.duplicate_subjects,
        cli.d_ratings,
    );
    debug!(?config, "starting session");

    let api = GradebookApi::new(InMemoryStore::new(), config);
    let color = !cli.no_color && console::colors_enabled();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(api, stdin.lock(), stdout.lock()).with_color(color);
    session.run()
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
