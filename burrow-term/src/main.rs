//! Burrow - terminal Gopher browser
//!
//! Reads one command per line from stdin and prints the resulting page.
//! The first argument, if any, replaces the configured home address.

mod render;

use anyhow::Context;
use burrow_core::{BrowseSession, Command, Config, CoreError, Fetcher, TcpFetcher};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    burrow_core::init_logging();

    let config = Config::load_or_default().context("Failed to load configuration")?;
    let home = std::env::args().nth(1).unwrap_or_else(|| config.home.clone());

    let session = BrowseSession::new(&config, TcpFetcher::new(config.max_response_bytes));

    tracing::info!(home = %home, "Burrow started");

    show(&session, Command::Open(home)).await;
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        match line.trim() {
            "" => {}
            "@quit" | "@q" => break,
            "@help" | "?" => print!("{}", render::HELP),
            input => show(&session, Command::parse(input)).await,
        }
        prompt()?;
    }

    Ok(())
}

async fn show<F: Fetcher>(session: &BrowseSession<F>, command: Command) {
    match session.execute(command).await {
        Ok(page) => print!(
            "{}",
            render::page(&page, session.can_go_back(), session.can_go_forward())
        ),
        // A newer command already owns the screen
        Err(CoreError::Superseded) => {}
        Err(e @ (CoreError::Connection(_) | CoreError::Timeout)) => {
            print!("{}", render::entries(&[e.to_entry()]))
        }
        Err(e) => println!("{}", e),
    }
}

fn prompt() -> anyhow::Result<()> {
    print!("> ");
    std::io::stdout().flush().context("Failed to flush stdout")
}
