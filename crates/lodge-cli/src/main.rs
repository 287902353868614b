use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("lodge error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    let ctx = bootstrap::AppContext::init()?;

    match &cli.command {
        cli::Commands::Auth { action } => commands::auth::handle(action, &flags, &ctx).await,
        cli::Commands::Open(args) => commands::open::handle(args, &flags, &ctx).await,
        cli::Commands::Routes => commands::routes::handle(&flags),
        cli::Commands::Rooms => commands::rooms::handle(&flags, &ctx).await,
        cli::Commands::Dashboard => commands::dashboard::handle(&flags, &ctx).await,
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("LODGE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
