use std::net::SocketAddr;

use anyhow::Result;
use clap::{Parser, Subcommand};
use equity_calc::calculator::{DEFAULT_TRIALS, MAX_TRIALS};
use equity_calc::cards::{Board, Hand};
use equity_calc::web;
use equity_calc::{Calculator, CalculatorConfig};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "equity-calc",
    version,
    about = "Monte Carlo hold'em showdown equity calculator",
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Hole cards of one player, e.g. "Ah Kh" (repeat once per player)
    #[arg(long = "hand")]
    hands: Vec<String>,

    /// Shared board cards, e.g. "2c 7d 9h"
    #[arg(long, default_value = "")]
    board: String,

    /// Random board completions to sample
    #[arg(
        long,
        default_value_t = DEFAULT_TRIALS,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_TRIALS))
    )]
    trials: u32,

    /// RNG seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Disable ANSI colors in CLI output
    #[arg(long = "no-color", default_value_t = false)]
    no_color: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the web server
    Serve {
        /// Address to bind (HOST:PORT)
        #[arg(long, default_value = "0.0.0.0:8080")]
        addr: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = color_eyre::install();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let config = CalculatorConfig {
        trials: cli.trials,
        seed: cli.seed,
        no_color: cli.no_color,
    };

    match cli.command {
        Some(Commands::Serve { addr }) => run_server(addr, config).await?,
        None => run_cli(&cli.hands, &cli.board, config)?,
    }

    Ok(())
}

fn run_cli(hands: &[String], board: &str, config: CalculatorConfig) -> Result<()> {
    let hands = hands
        .iter()
        .map(|hand| hand.parse::<Hand>())
        .collect::<Result<Vec<_>, _>>()?;
    let board: Board = board.parse()?;

    let mut calculator = Calculator::new(config);
    let result = calculator.calculate(&hands, &board)?;
    calculator.print_result(&hands, &board, &result);
    Ok(())
}

async fn run_server(addr: String, config: CalculatorConfig) -> Result<()> {
    let addr: SocketAddr = addr.parse()?;
    web::serve(addr, config).await
}
