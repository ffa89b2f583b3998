use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use underdeal::{deal, one_based::OneBased, DeckSize};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Count the rounds of an under-down deal until the deck is back in order",
    long_about = None
)]
struct Args {
    /// Number of cards in the deck
    #[arg(allow_negative_numbers = true)]
    cards: i64,

    /// Deal the deck card by card instead of using the cycle decomposition
    #[arg(long, action = clap::ArgAction::SetTrue)]
    simulate: bool,

    /// Print the permutation of one round in cycle notation
    #[arg(long, action = clap::ArgAction::SetTrue)]
    cycles: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let deck = DeckSize::try_from(args.cards)?;

    if args.cycles {
        let perm = deal::build_permutation::<u32>(deck.get())
            .context("cannot display the round permutation")?;
        println!("{}", OneBased(&perm));
    }

    let rounds = if args.simulate {
        deal::rounds_by_simulation(deck.get())?
    } else {
        underdeal::rounds(deck.get())?
    };

    println!("{rounds}");
    Ok(())
}
