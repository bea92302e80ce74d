use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::credentials::auth::{AuthAction, AuthFlow, TerminalOperator};
use crate::credentials::KeyringStore;
use crate::listing::{self, ListingConfig, DEFAULT_COUNT};
use crate::providers::{self, shortcut::ShortcutClient};

/// de — developer shortcuts for everyday chores.
#[derive(Debug, Parser)]
#[command(name = "de")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shortcut related commands.
    Sc {
        #[command(subcommand)]
        command: ShortcutCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum ShortcutCommand {
    /// Set or delete the Shortcut API key.
    #[command(visible_alias = "a")]
    Auth {
        /// Delete the stored API key.
        #[arg(short, long)]
        delete: bool,

        /// Prompt for a new API key and store it.
        #[arg(short, long)]
        set: bool,
    },

    /// Print my Shortcut stories as branch names, most recently moved last.
    #[command(visible_alias = "s")]
    Stories {
        /// Prefix each line with when the story last moved.
        #[arg(short = 'w', long, visible_alias = "wt")]
        with_times: bool,

        /// Number of stories to print, max 25. Negative prints all.
        #[arg(
            short,
            long,
            visible_alias = "num",
            default_value_t = DEFAULT_COUNT,
            allow_negative_numbers = true
        )]
        number: i64,
    },
}

pub async fn run(cli: Cli, config: &AppConfig) -> Result<()> {
    match cli.command {
        Command::Sc { command } => run_shortcut(command, config).await,
    }
}

async fn run_shortcut(command: ShortcutCommand, config: &AppConfig) -> Result<()> {
    let store = KeyringStore::new(&config.keyring)?;
    let mut operator = TerminalOperator;

    match command {
        ShortcutCommand::Auth { delete, set } => {
            let action = AuthAction::from_flags(delete, set)?;
            AuthFlow::new(&store, &mut operator).run(action)?;
        }
        ShortcutCommand::Stories { with_times, number } => {
            let listing = ListingConfig {
                include_timestamps: with_times,
                max_count: number,
            };
            let token = AuthFlow::new(&store, &mut operator).authenticate()?;
            let client = ShortcutClient::new(config.shortcut.base_url.as_str());
            let stories = providers::fetch_my_stories(&client, &token).await?;
            println!("{}", listing::render(&stories, &listing));
        }
    }
    Ok(())
}
