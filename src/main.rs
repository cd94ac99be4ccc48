use clap::Parser;
use statuswatch::app::Dashboard;
use statuswatch::cli::{
    check, handle_completions, handle_config_init, history, load_config, snapshot, sources, Cli,
    Commands, ConfigCommands, SnapshotCommands, SourcesCommands,
};
use std::path::Path;

fn open_dashboard(config: &Path) -> Result<Dashboard, Box<dyn std::error::Error>> {
    Ok(Dashboard::from_config(load_config(config)?))
}

fn print(result: Result<String, Box<dyn std::error::Error>>) -> Result<(), Box<dyn std::error::Error>> {
    let output = result?;
    println!("{}", output);
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(args) => statuswatch::cli::serve::run_serve(args).await,
        Commands::Check(args) => match open_dashboard(&args.config) {
            Ok(dashboard) => print(check::handle_check(&args, &dashboard).await),
            Err(e) => Err(e),
        },
        Commands::Sources(cmd) => match cmd {
            SourcesCommands::List(args) => open_dashboard(&args.config)
                .and_then(|d| print(sources::handle_sources_list(&args, &d.registry))),
            SourcesCommands::Add(args) => open_dashboard(&args.config)
                .and_then(|d| print(sources::handle_sources_add(&args, &d.registry))),
            SourcesCommands::Toggle(args) => open_dashboard(&args.config)
                .and_then(|d| print(sources::handle_sources_toggle(&args, &d.registry))),
        },
        Commands::History(args) => open_dashboard(&args.config)
            .and_then(|d| print(history::handle_history(&args, &d.events))),
        Commands::Notifications(args) => open_dashboard(&args.config)
            .and_then(|d| print(history::handle_notifications(&args, &d.events))),
        Commands::Snapshot(cmd) => match cmd {
            SnapshotCommands::Export(args) => open_dashboard(&args.config)
                .and_then(|d| print(snapshot::handle_snapshot_export(&args, &d))),
            SnapshotCommands::Decode(args) => print(snapshot::handle_snapshot_decode(&args)),
        },
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Init(args) => print(handle_config_init(&args)),
        },
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
