//! `contentdesk` command-line front end.
//!
//! # Responsibility
//! - Parse commands and global settings.
//! - Open the portal database and hand off to `contentdesk_core` services.
//! - Report failures on stderr with a non-zero exit code.

mod commands;
mod config;

use clap::{Parser, Subcommand};
use commands::{ClientCommands, ContentCommands, ProjectCommands, TaskCommands, UserCommands};
use config::GlobalArgs;
use contentdesk_core::db::open_db;
use contentdesk_core::{ServiceContext, SqliteStore};
use log::error;
use std::process::ExitCode;

/// Content agency portal CLI
#[derive(Parser)]
#[command(name = "contentdesk", version)]
#[command(about = "Role-based content agency portal", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write demo users and sample data into empty stores
    Seed,

    /// Sign in with email and password
    Login { email: String, password: String },

    /// Sign out
    Logout,

    /// Show the signed-in user and the sections they may open
    Whoami,

    /// Agency-wide totals and breakdowns
    Dashboard,

    /// Content workflow
    #[command(subcommand)]
    Content(ContentCommands),

    /// Task board
    #[command(subcommand)]
    Tasks(TaskCommands),

    /// Client directory
    #[command(subcommand)]
    Clients(ClientCommands),

    /// Project list
    #[command(subcommand)]
    Projects(ProjectCommands),

    /// User accounts (admin only)
    #[command(subcommand)]
    Users(UserCommands),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = cli.global.init_logging() {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    let conn = match open_db(&cli.global.db) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("error: cannot open `{}`: {err}", cli.global.db.display());
            return ExitCode::FAILURE;
        }
    };
    let store = SqliteStore::new(&conn);

    match commands::execute(cli.command, ServiceContext::system(&store)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_command module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
