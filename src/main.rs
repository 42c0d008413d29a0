use clap::Parser;

mod cli;
mod runtime;

fn main() -> anyhow::Result<()> {
    runtime::run(cli::Cli::parse())
}
