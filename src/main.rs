use clap::Parser;
use conda_version::cli::{self, Command};
use conda_version::config::{self, Config, OutputFormat};

#[derive(Parser)]
#[command(name = "conda-version")]
#[command(version, about = "Parse, compare and match conda package versions")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(&config::config_path())?;
    if cli.json {
        config.output = OutputFormat::Json;
    }
    let _guard = conda_version::logging::init(&config.log)?;

    let output = cli::run(&cli.command, &config)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
