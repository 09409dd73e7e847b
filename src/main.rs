use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use env_logger::{Builder, Env};
use rhino::common::VERSION;
use rhino::measure;

/// Utility toolkit for latency-sensitive services.
#[derive(Debug, Parser)]
#[command(name = "rhino", disable_version_flag = true)]
struct Cli {
    /// Print this help
    #[arg(short, long)]
    about: bool,

    /// Print the version
    #[arg(short, long)]
    version: bool,

    /// Calibrate the time stamp counter and print its frequency
    #[arg(short, long)]
    calibrate: bool,
}

fn main() -> ExitCode {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if !(cli.about || cli.version || cli.calibrate) {
        println!("no options");
        return ExitCode::from(255);
    }

    if cli.about {
        let help = Cli::command().render_help().to_string();
        println!("\n{}\n", help.trim_end());
    }

    if cli.version {
        println!("version is {}", VERSION);
    }

    if cli.calibrate {
        match measure::tsc_frequency() {
            freq if freq > 0.0 => println!("tsc frequency: {:.4} GHz", freq),
            _ => println!("tsc unavailable on this architecture"),
        }
    }

    ExitCode::SUCCESS
}
