use std::io;

use clap::Parser;
use dotenvy::dotenv;
use duo_chat::accounts::AccountStore;
use duo_chat::chat::ChatRoom;
use duo_chat::config;
use duo_chat::shell::ChatShell;
use duo_chat::storage::{AccountFile, TranscriptFile};

#[derive(Parser)]
#[command(
    name = "duo-chat",
    version,
    about = "Two-party console chat with local accounts"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config);

    let accounts = AccountStore::open(AccountFile::new(&app_config.accounts_file));
    let room = ChatRoom::new(accounts, TranscriptFile::new(&app_config.transcript_file));

    let stdin = io::stdin();
    let mut shell = ChatShell::new(room, stdin.lock(), io::stdout(), &app_config.sentinel);
    shell.run()?;

    Ok(())
}
