use clap::Parser;
use fleetpulse::cli::{
    handle_completions, handle_config_init, refresh, theme, watch, Cli, Commands, ConfigCommands,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Watch(args) => watch::run_watch(args).await,
        Commands::Refresh(args) => refresh::run_refresh(args).await,
        Commands::Theme(args) => match theme::handle_theme(&args) {
            Ok(line) => {
                println!("{}", line);
                Ok(())
            }
            Err(e) => Err(e),
        },
        Commands::Config(ConfigCommands::Init(args)) => handle_config_init(&args),
        Commands::Completions(args) => {
            handle_completions(&args);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
