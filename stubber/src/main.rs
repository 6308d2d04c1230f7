use clap::Parser;
use stubber::cli::{Cli, init_tracing};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.run()
}
