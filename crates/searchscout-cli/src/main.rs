//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via bootstrap.
//! Command dispatch routes to handlers which delegate to `AppCore`.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use searchscout_cli::{BrowserMode, Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let browser = match &command {
        Commands::Search {
            print_only: true, ..
        } => BrowserMode::PrintOnly,
        _ => BrowserMode::System,
    };

    // Bootstrap the CLI context (composition root)
    let ctx = bootstrap(CliConfig {
        data_dir: cli.data_dir,
        browser,
    })
    .await?;

    match command {
        Commands::Init => handlers::init::execute(&ctx).await,
        Commands::Sites { command } => handlers::sites::execute(&ctx, command).await,
        Commands::Settings { command } => handlers::settings::execute(&ctx, command).await,
        Commands::Menu => handlers::menu::execute(&ctx).await,
        Commands::Search {
            site_id,
            text,
            print_only,
        } => handlers::search::execute(&ctx, &site_id, &text, print_only).await,
    }
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        std::process::exit(CliError::exit_code_for(&err));
    }
}
