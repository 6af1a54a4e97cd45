use clap::Parser;

use sheetstats::EXIT_CONFIG_ERROR;
use sheetstats::cli::{Cli, Commands};
use sheetstats::commands::{run_init, run_report};

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Report(args) => run_report(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    let exit_code = match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    };

    std::process::exit(exit_code);
}
