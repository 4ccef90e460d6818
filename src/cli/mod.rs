pub mod commands;
pub mod logging;
pub mod types;

use clap::Parser;

/// Run the command-line interface
pub fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    match &cli.command {
        types::Commands::Inject { .. } => {
            commands::handle_inject_command(&cli.command);
        }
        types::Commands::Print { .. } => {
            commands::handle_print_command(&cli.command);
        }
    }
}
