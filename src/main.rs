use clap::Parser;
use hateoas_links::cli::{run_cli, Cli};
use hateoas_links::otel::{init_logging_with_config, LogConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging_with_config(&LogConfig::from_env())?;
    run_cli(cli)
}
