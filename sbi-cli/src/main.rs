//! SBI CLI - Command line tool for exploring bridge condition data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "sbi-cli",
    version,
    about = "Slovak bridge inventory condition toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: sbi_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    sbi_cmd::run(cli.command)
}
