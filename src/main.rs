use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use digital_wallet::actions::InertActions;
use digital_wallet::config::{paths::WalletPaths, settings::Settings};
use digital_wallet::display::format_transaction_groups;
use digital_wallet::fixtures::{open_source, TransactionSource};
use digital_wallet::tui::views::balance::balance_text;
use digital_wallet::tui::{run_tui, snapshot::render_text};

#[derive(Parser)]
#[command(
    name = "wallet",
    version,
    about = "Terminal home screen for a digital wallet",
    long_about = "Shows the wallet home screen: balance, the latest transactions \
                  grouped by date, and the action bar. Transactions come from the \
                  built-in sample or a JSON fixture file."
)]
struct Cli {
    /// JSON fixture to use instead of the built-in sample transactions
    #[arg(long, global = true, env = "WALLET_FIXTURE")]
    fixture: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive home screen (default)
    #[command(alias = "ui")]
    Tui,

    /// Render the home screen once and print it as text
    Snapshot {
        /// Width in columns
        #[arg(short = 'W', long)]
        width: Option<u16>,
        /// Height in rows
        #[arg(short = 'H', long)]
        height: Option<u16>,
    },

    /// Print the grouped transaction history
    List {
        /// Output JSON instead of a text register
        #[arg(long)]
        json: bool,
    },

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the settings file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = WalletPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    if let Err(e) = digital_wallet::logging::init(&paths, &settings) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting wallet");

    let fixture = cli.fixture.as_deref().or(settings.fixture_file.as_deref());
    let source = open_source(fixture)?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            run_tui(source.as_ref(), &InertActions, &settings)?;
        }
        Commands::Snapshot { width, height } => {
            let width = width.unwrap_or(settings.snapshot_width);
            let height = height.unwrap_or(settings.snapshot_height);
            println!("{}", render_text(source.as_ref(), width, height));
        }
        Commands::List { json } => handle_list_command(source.as_ref(), json)?,
        Commands::Config { init } => {
            if init {
                settings.save(&paths)?;
                tracing::info!(path = %paths.settings_file().display(), "settings written");
                println!("Wrote {}", paths.settings_file().display());
                println!();
            }
            println!("Digital Wallet Configuration");
            println!("============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Tick rate:        {} ms", settings.tick_rate_ms);
            println!("  Log filter:       {}", settings.log_filter);
            println!(
                "  Snapshot size:    {}x{}",
                settings.snapshot_width, settings.snapshot_height
            );
            println!("  Transaction data: {}", source.name());
        }
    }

    Ok(())
}

fn handle_list_command(source: &dyn TransactionSource, json: bool) -> Result<()> {
    let groups = source.grouped();

    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
    } else {
        println!("Balance: {}", balance_text());
        println!();
        print!("{}", format_transaction_groups(&groups));
    }

    Ok(())
}
