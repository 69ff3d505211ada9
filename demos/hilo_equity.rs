extern crate hilo_equity;

mod common;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use hilo_equity::core::{parse_cards, HiLoError};
use hilo_equity::omaha::{analyze_single, HiLoSimulationBuilder};

#[derive(Parser, Debug)]
#[command(
    name = "hilo_equity",
    about = "Omaha Hi-Lo equity and hand strength",
    long_about = "Run monte carlo simulations to find each player's share of the pot in\n\
                  five card Omaha Hi-Lo, or show the best high and low for one hand."
)]
struct Args {
    /// Tracing/logging options
    #[command(flatten)]
    tracing: common::TracingArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate equity for two or more hands
    Equity {
        /// Five card hands (e.g. "As Ah Ks Kh 2c" or "QsQhJsJhTc")
        #[arg(required = true, num_args = 1..)]
        hands: Vec<String>,

        /// Known board cards, zero to five
        #[arg(short, long, default_value = "")]
        board: String,

        /// Number of trials to run
        #[arg(short = 'n', long, default_value_t = 10_000)]
        trials: u64,

        /// Trials per batch
        #[arg(long, default_value_t = 1_000)]
        batch_size: u64,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the best high and low for one hand on a complete board
    Analyze {
        /// Five hole cards
        hand: String,
        /// Five board cards
        board: String,
    },
}

fn run(command: Command) -> Result<(), HiLoError> {
    match command {
        Command::Equity {
            hands,
            board,
            trials,
            batch_size,
            seed,
            json,
        } => {
            let hands = hands
                .iter()
                .map(|h| parse_cards(h))
                .collect::<Result<Vec<_>, _>>()?;
            let mut builder = HiLoSimulationBuilder::new()
                .hands(hands)
                .board(parse_cards(&board)?)
                .trials(trials)
                .batch_size(batch_size);
            if let Some(seed) = seed {
                builder = builder.seed(seed);
            }
            let report = builder.build()?.run();

            if json {
                match report.to_json() {
                    Ok(s) => println!("{s}"),
                    Err(e) => eprintln!("Couldn't serialize report: {e}"),
                }
            } else {
                println!("{}", report.to_markdown());
            }
        }
        Command::Analyze { hand, board } => {
            let analysis = analyze_single(&parse_cards(&hand)?, &parse_cards(&board)?)?;
            let high: Vec<String> = analysis.high.cards.iter().map(|c| c.to_string()).collect();
            println!("High: {} ({})", analysis.category, high.join(" "));
            match analysis.low {
                Some(low) => {
                    let cards: Vec<String> = low.cards.iter().map(|c| c.to_string()).collect();
                    println!("Low:  {} ({})", low.rank, cards.join(" "));
                }
                None => println!("Low:  none"),
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    args.tracing.init_tracing();

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
