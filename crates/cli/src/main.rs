//! Vetaris CLI - Schema setup and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Create tables and columns if absent (idempotent)
//! vetaris-cli init-db
//!
//! # Create an administrator account (or promote an existing one)
//! vetaris-cli admin create -e admin@vetaris.com -p <password>
//!
//! # Promote an existing account
//! vetaris-cli admin grant -e someone@example.com
//!
//! # Seed the starter catalog (skips a non-empty catalog)
//! vetaris-cli seed products
//! ```
//!
//! # Environment Variables
//!
//! - `VETARIS_DATABASE_URL` (or `DATABASE_URL`) - `PostgreSQL` connection string

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "vetaris-cli")]
#[command(author, version, about = "Vetaris CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create database tables and columns if absent
    InitDb,
    /// Manage administrator accounts
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Seed the database
    Seed {
        #[command(subcommand)]
        target: SeedTarget,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create an admin account, or promote it if the email already exists
    Create {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin password
        #[arg(short, long)]
        password: String,
    },
    /// Promote an existing account to admin
    Grant {
        /// Account email address
        #[arg(short, long)]
        email: String,
    },
}

#[derive(Subcommand)]
enum SeedTarget {
    /// Insert the starter product catalog
    Products,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::InitDb => commands::schema::init_db().await,
        Commands::Admin { action } => match action {
            AdminAction::Create { email, password } => {
                commands::admin::create(&email, &password).await
            }
            AdminAction::Grant { email } => commands::admin::grant(&email).await,
        },
        Commands::Seed {
            target: SeedTarget::Products,
        } => commands::seed::products().await,
    };

    if let Err(e) = result {
        tracing::error!("command failed: {e}");
        std::process::exit(1);
    }
}
