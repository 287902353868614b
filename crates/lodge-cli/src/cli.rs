use clap::{Parser, Subcommand, ValueEnum};

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Raw,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Copy, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
}

/// Top-level CLI parser for the `lodge` binary.
#[derive(Debug, Parser)]
#[command(name = "lodge", version, about = "Lodge - hotel PMS client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage the login session
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Evaluate a navigation attempt against the route guard
    Open(OpenArgs),
    /// List the route table and its authorization metadata
    Routes,
    /// List rooms
    Rooms,
    /// Show the dashboard summary
    Dashboard,
}

#[derive(Debug, Subcommand)]
pub enum AuthCommands {
    /// Create an account (does not log in)
    Signup(SignupArgs),
    /// Exchange credentials for a session
    Login(LoginArgs),
    /// Clear the session (and record the logout server-side)
    Logout,
    /// Show the current session state
    Status,
}

#[derive(Debug, clap::Args)]
pub struct SignupArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Debug, clap::Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Debug, clap::Args)]
pub struct OpenArgs {
    /// Destination path, e.g. /Dashboard or /POS/POS
    pub path: String,
}
