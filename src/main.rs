// lotto - demo binary driving a full raffle round

use clap::{Parser, Subcommand};
use lottoledger::identity::AccountId;
use lottoledger::ledger::{LotteryLedger, WEI_PER_TOKEN};
use lottoledger::raffle::{SeededDraw, ThreadRngDraw};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lotto", about = "Token sale + raffle ledger demo")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a full round: two buyers purchase tokens and tickets, the owner draws
    Demo {
        /// Seed for a deterministic draw; uses thread randomness when omitted
        #[arg(long)]
        seed: Option<u64>,

        /// Tickets each demo buyer purchases
        #[arg(long, default_value_t = 2)]
        tickets: u64,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Demo { seed, tickets } => run_demo(seed, tickets),
    }
}

fn run_demo(seed: Option<u64>, tickets: u64) -> Result<(), Box<dyn std::error::Error>> {
    let owner = AccountId::from_seed("owner");
    let alice = AccountId::from_seed("alice");
    let bob = AccountId::from_seed("bob");

    let mut ledger = LotteryLedger::new(owner.clone());
    info!(treasury = ledger.treasury_balance(), "ledger created");

    for buyer in [&alice, &bob] {
        let payment = WEI_PER_TOKEN * u128::from(tickets);
        ledger.buy_tokens(tickets, payment, buyer)?;
        let issued = ledger.buy_ticket(tickets, buyer)?;
        info!(buyer = %buyer, tickets = issued.len(), "bought in");
    }

    let winner = match seed {
        Some(seed) => ledger.draw_winner(&owner, &mut SeededDraw::new(seed))?,
        None => ledger.draw_winner(&owner, &mut ThreadRngDraw)?,
    };

    info!(winner = %winner, tickets = ?ledger.view_tickets(&winner), "draw complete");
    println!("winner: {winner}");
    Ok(())
}
