use colored::*;
use log::debug;
use structopt::StructOpt;

use todo::cli::CommandLineArgs;
use todo::config::Config;
use todo::interface;

fn setup_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() {
    // Get the command-line arguments.
    let args = CommandLineArgs::from_args();
    setup_logging(args.verbose);

    let config = Config::from_env(args.overrides());
    if !config.color {
        colored::control::set_override(false);
    }
    debug!("Using todo file {}", config.task_file.display());

    if let Err(err) = interface::run(&config, args.action) {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}
