use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::client::{Player, WebSocketClient};
use crate::config;
use crate::states;

#[derive(Parser)]
#[command(name = "netterm")]
#[command(about = "Terminal client for multiplayer games")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive client (menu and play screens)
    Play,
    /// Run the experimental websocket client against a server
    Connect {
        /// Server url to connect to
        #[arg(short, long, default_value = config::DEFAULT_SERVER_URL)]
        url: String,

        /// Player name reported in the payload
        #[arg(short, long, default_value = "Player")]
        name: String,

        /// Delay between pings, in milliseconds
        #[arg(short, long, default_value_t = config::DEFAULT_PING_DELAY_MS)]
        delay_ms: u64,

        /// Stop after this many pings (runs until disconnected when omitted)
        #[arg(short, long)]
        count: Option<u64>,
    },
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Connect {
            url,
            name,
            delay_ms,
            count,
        }) => {
            let mut client = WebSocketClient::new(url, Duration::from_millis(delay_ms))
                .with_player(Player::new(name));
            if let Some(count) = count {
                client = client.with_ping_limit(count);
            }
            client.establish_connection().await
        }
        Some(Commands::Play) | None => run_play(),
    }
}

fn run_play() -> Result<()> {
    let mut runner = states::default_runner();
    let mut terminal = ratatui::init();
    let result = runner.run(&mut terminal);
    ratatui::restore();
    result
}
