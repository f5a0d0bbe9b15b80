use clap::{Parser, Subcommand};

mod commands;
mod output;
mod tty;

use commands::{config, inspect, new};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "dashgen")]
#[command(version = VERSION)]
#[command(about = "Scaffold a tabbed Fyne dashboard project")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new dashboard project
    New(new::NewArgs),
    /// Show the names derived from a project name and tab list
    Inspect(inspect::InspectArgs),
    /// Show dashgen configuration
    Config(config::ConfigArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let (json_result, exit_code) = commands::run_json(cli.command);

    if let Err(err) = output::print_json_result(json_result) {
        eprintln!("{}", err);
        return std::process::ExitCode::from(1);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
