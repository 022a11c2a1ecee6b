//! Arts in the Oven CLI - the storefront pages on the command line.
//!
//! Each invocation is one page load: the cart and flags are rehydrated from
//! the storage file, the command runs, and the page is rendered to stdout.
//!
//! # Usage
//!
//! ```bash
//! # Show the menu
//! oven-cli menu
//!
//! # Add two Red Velvet Cupcakes and a 4-inch Strawberry cheesecake
//! oven-cli cart add cvc
//! oven-cli cart add cvc
//! oven-cli cart add pst
//! oven-cli cart show
//!
//! # Check out
//! oven-cli checkout location --region NCR --city Pasig --barangay Kapitolyo
//! oven-cli checkout finalize
//! ```
//!
//! # Commands
//!
//! - `menu` - Products page
//! - `cart` - Cart modal (show, add, remove)
//! - `status`, `login`, `logout` - Login page
//! - `checkout` - Location page (show, location, finalize)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use secrecy::SecretString;
use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use oven_core::{Catalog, ProductId};
use oven_storefront::config::{ConfigError, StorefrontConfig};
use oven_storefront::{AppError, PageState};

mod commands;

#[derive(Parser)]
#[command(name = "oven-cli")]
#[command(author, version, about = "Arts in the Oven storefront")]
struct Cli {
    /// Storage file (overrides `STOREFRONT_STORAGE_PATH`)
    #[arg(long, global = true)]
    storage: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the menu grouped by category
    Menu,
    /// View or change the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Show login status
    Status,
    /// Log in
    Login {
        /// Password (at least the configured minimum length)
        #[arg(short, long)]
        password: String,
    },
    /// Log out
    Logout,
    /// Delivery location and purchase
    Checkout {
        #[command(subcommand)]
        action: CheckoutAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents and total
    Show,
    /// Add one unit of a product
    Add {
        /// Product id from the menu
        id: ProductId,
    },
    /// Remove a product's line
    Remove {
        /// Product id from the menu
        id: ProductId,
    },
}

#[derive(Subcommand)]
enum CheckoutAction {
    /// Show what the location page offers
    Show,
    /// Save the delivery location
    Location {
        #[arg(long)]
        region: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        barangay: String,
    },
    /// Finalize the purchase
    Finalize,
}

/// Errors that end a CLI invocation.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    fn user_message(&self) -> String {
        match self {
            Self::App(err) => err.user_message(),
            Self::Config(err) => err.to_string(),
            Self::Io(err) => format!("failed to write output: {err}"),
        }
    }
}

fn init_tracing(json: bool) {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "oven_storefront=info,oven_cli=info".into());

    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(io::stderr)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Command failed: {e}");
            let _ = writeln!(io::stderr(), "{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = StorefrontConfig::from_env()?;
    if let Some(path) = cli.storage {
        config.storage_path = path;
    }

    let catalog = Catalog::arts_in_the_oven();
    let storage = config.file_storage();
    let mut state = PageState::load(&config, &catalog, &storage);
    let mut out = io::stdout().lock();

    match cli.command {
        Commands::Menu => commands::menu::show(&state, &mut out)?,
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&state, &mut out)?,
            CartAction::Add { id } => commands::cart::add(&mut state, &id, &mut out)?,
            CartAction::Remove { id } => commands::cart::remove(&mut state, &id, &mut out)?,
        },
        Commands::Status => commands::account::status(&state, &mut out)?,
        Commands::Login { password } => {
            commands::account::login(&mut state, SecretString::from(password), &mut out)?;
        }
        Commands::Logout => commands::account::logout(&mut state, &mut out)?,
        Commands::Checkout { action } => match action {
            CheckoutAction::Show => commands::checkout::show(&state, &mut out)?,
            CheckoutAction::Location {
                region,
                city,
                barangay,
            } => commands::checkout::save_location(&mut state, &region, &city, &barangay, &mut out)?,
            CheckoutAction::Finalize => commands::checkout::finalize(&mut state, &mut out)?,
        },
    }
    Ok(())
}
