use owo_colors::OwoColorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::aggregate::{EquityResult, aggregate};
use crate::cards::{Board, Card, Hand};
use crate::error::EquityError;
use crate::simulator::simulate;

pub const DEFAULT_TRIALS: u32 = 100_000;
/// Upper bound on trials accepted from the command line or an HTTP request.
pub const MAX_TRIALS: u32 = 1_000_000;

#[derive(Debug, Clone)]
pub struct CalculatorConfig {
    pub trials: u32,
    pub seed: Option<u64>,
    pub no_color: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
            no_color: false,
        }
    }
}

/// Runs simulations with a seeded generator and renders results.
pub struct Calculator {
    config: CalculatorConfig,
    rng: StdRng,
}

impl Calculator {
    pub fn new(config: CalculatorConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn calculate(
        &mut self,
        hands: &[Hand],
        board: &Board,
    ) -> Result<EquityResult, EquityError> {
        let counts = simulate(hands, board, self.config.trials, &mut self.rng)?;
        aggregate(&counts)
    }

    pub fn print_result(&self, hands: &[Hand], board: &Board, result: &EquityResult) {
        let board_label = if board.is_empty() {
            "--".to_string()
        } else if self.config.no_color {
            board.to_string()
        } else {
            symbolic(board.cards())
        };

        if self.config.no_color {
            println!("Board {} | Trials {}", board_label, result.trials);
            for (idx, (hand, pct)) in hands.iter().zip(&result.wins).enumerate() {
                println!("Hand {} {} {:.2}%", idx + 1, hand, pct);
            }
            println!("Tie {:.2}%", result.tie);
        } else {
            println!(
                "{} {} {} {}",
                "Board".bold().white(),
                board_label.bold().blue(),
                "Trials".bold().white(),
                result.trials
            );
            for (idx, (hand, pct)) in hands.iter().zip(&result.wins).enumerate() {
                println!(
                    "{} {} {} {}",
                    "Hand".bold().cyan(),
                    idx + 1,
                    symbolic(hand.cards()).bold().yellow(),
                    format!("{pct:.2}%").bold().green()
                );
            }
            println!(
                "{} {}",
                "Tie".bold().magenta(),
                format!("{:.2}%", result.tie).bold()
            );
        }
    }
}

fn symbolic(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::symbolic)
        .collect::<Vec<_>>()
        .join(" ")
}
