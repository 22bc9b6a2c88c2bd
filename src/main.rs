//! CLI entry point for the bucket fill tool

use bucketfill::io::cli::{Cli, FillRunner};
use clap::Parser;

fn main() -> bucketfill::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut runner = FillRunner::new(cli);
    runner.process()
}
