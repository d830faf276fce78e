use color_eyre::Report;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> Result<(), Report> {
    color_eyre::install()?;
    // stdout carries the projected sets, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    cli::Cli::from_args().exec()
}
