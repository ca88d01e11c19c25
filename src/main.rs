mod cli;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    init_tracing();

    let cli = cli::Cli::parse();
    let settings = cli.settings()?;
    for line in cli::render(&cli, &settings)? {
        println!("{line}");
    }
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
