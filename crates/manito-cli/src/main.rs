//! Manito CLI - secret-gift pair assignment with password-encrypted storage.
//!
//! Subcommands cover scripted use; running with no subcommand starts the
//! interactive menu. Every action error prints a message and returns to the
//! menu; only the exit choice ends the program.

mod config;
mod input;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dialoguer::Select;
use manito_core::{draw, store, Roster, SecureStore, VERSION};

use crate::config::{default_config_path, read_config, resolve_blob_path};

/// Manito - secret-gift pair assignment with password-encrypted storage
#[derive(Parser)]
#[command(name = "manito")]
#[command(version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, env = "MANITO_CONFIG")]
    config: Option<PathBuf>,

    /// Override the encrypted draw file path from config
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw new pairs and overwrite the encrypted file
    Draw,

    /// Show every giver -> recipient pair (admin)
    List,

    /// Show the recipient assigned to one participant
    Show {
        /// Participant name; prompted interactively when omitted
        #[arg(value_name = "NAME")]
        name: Option<String>,
    },
}

struct App {
    roster: Roster,
    secure: SecureStore,
    blob_path: PathBuf,
    quiet: bool,
}

impl App {
    fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let config_path = match &cli.config {
            Some(path) => path.clone(),
            None => default_config_path()?,
        };
        let config = read_config(&config_path)?;

        let roster = Roster::new(config.roster.names.clone())?;
        let secure = SecureStore::new(
            config.security.salt.as_bytes().to_vec(),
            config.security.iterations,
        );
        let blob_path = cli
            .file
            .clone()
            .unwrap_or_else(|| resolve_blob_path(&config_path, &config));

        Ok(Self {
            roster,
            secure,
            blob_path,
            quiet: cli.quiet,
        })
    }

    /// Draw fresh pairs, encrypt them under a new password, overwrite the file.
    fn draw(&self) -> anyhow::Result<()> {
        let assignment = draw::generate(&self.roster)?;
        let password = input::prompt_new_password()?;

        let blob = self.secure.encrypt(&assignment, &password)?;
        store::save(&blob, &self.blob_path)?;

        if !self.quiet {
            println!(
                "Draw complete: {} pairs saved to {}",
                assignment.len(),
                self.blob_path.display()
            );
        }
        Ok(())
    }

    /// Admin view: decrypt and print every pair.
    fn list(&self) -> anyhow::Result<()> {
        let blob = store::load(&self.blob_path)?;
        let password = input::prompt_password()?;
        let assignment = self.secure.decrypt(&blob, &password)?;

        if !self.quiet {
            println!("=== All pairs ===");
        }
        for pair in assignment.pairs() {
            println!("{} -> {}", pair.giver, pair.recipient);
        }
        Ok(())
    }

    /// Personal view: decrypt and print a single recipient.
    fn show(&self, name: Option<String>) -> anyhow::Result<()> {
        // Require the file before prompting for anything.
        let blob = store::load(&self.blob_path)?;

        let name = match name {
            Some(value) => {
                if !self.roster.contains(&value) {
                    return Err(anyhow::anyhow!("\"{}\" is not in the roster", value));
                }
                value
            }
            None => input::prompt_own_name(&self.roster)?,
        };

        let password = input::prompt_password()?;
        let assignment = self.secure.decrypt(&blob, &password)?;

        match assignment.recipient_for(&name) {
            Some(recipient) => println!("{}, your gift recipient is {}", name, recipient),
            // Only reachable if the roster changed after the saved draw.
            None => println!("{} is not part of the saved draw", name),
        }
        Ok(())
    }

    /// Interactive menu loop. Errors print and return to the menu.
    fn menu_loop(&self) -> anyhow::Result<()> {
        if !self.quiet {
            println!("manito v{}", VERSION);
        }
        loop {
            let choice = Select::new()
                .with_prompt("Choose an action")
                .items(&[
                    "Draw new pairs",
                    "View all pairs (admin)",
                    "View my pair",
                    "Exit",
                ])
                .default(0)
                .interact()
                .map_err(|e| anyhow::anyhow!("Failed to read menu selection: {}", e))?;

            let result = match choice {
                0 => self.draw(),
                1 => self.list(),
                2 => self.show(None),
                _ => {
                    if !self.quiet {
                        println!("Goodbye.");
                    }
                    return Ok(());
                }
            };

            if let Err(err) = result {
                eprintln!("Error: {:#}", err);
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let app = App::from_cli(&cli)?;

    match cli.command {
        Some(Commands::Draw) => app.draw(),
        Some(Commands::List) => app.list(),
        Some(Commands::Show { name }) => app.show(name),
        None => app.menu_loop(),
    }
}
