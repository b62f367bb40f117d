//! ledmux CLI — drive the logical light channels from the command line.

use clap::Parser;

mod cli;

#[derive(Parser)]
#[command(
    name = "ledmux",
    version,
    about = "Multiplex logical light channels onto sysfs LED devices"
)]
struct Args {
    /// Output as JSON (for channels)
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: cli::Command,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let args = Args::parse();

    if let Err(e) = cli::run(args.command, args.json) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
