//! Contact Book - Main entry point
//!
//! Loads the address book, then reads commands from stdin until the user
//! exits or input ends. The book is saved on exit.

use anyhow::Result;
use contact_book::{AddressBook, Command, Config, ContactBot, Outcome};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so they never mix with replies on stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Starting contact book with file {}",
        config.contacts_file.display()
    );

    let (book, report) = AddressBook::open(&config.contacts_file);
    println!("{}", report);

    let mut bot = ContactBot::new(book, config.page_size);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("Enter command: ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // End of input: save as if the user had typed "exit".
            println!();
            match bot.execute(Command::Exit) {
                Outcome::Quit(message) => {
                    println!("{}", message);
                    break;
                }
                Outcome::Reply(message) => {
                    error!("{}", message);
                    anyhow::bail!(message);
                }
            }
        }

        match bot.execute(Command::parse(&line)) {
            Outcome::Reply(message) => println!("{}", message),
            Outcome::Quit(message) => {
                println!("{}", message);
                break;
            }
        }
    }

    info!("Contact book shutdown complete");
    Ok(())
}
